//! Decode policy knobs
//!
//! Library entry points take a [`DecodeOptions`] explicitly. The CLI builds
//! one from the environment with [`DecodeOptions::from_env`].

/// What to do with numeric, alphanumeric and kanji segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSegmentPolicy {
    /// Consume them and leave them out of the binary payload
    #[default]
    Skip,
    /// Fail with `UnsupportedMode` on the first one
    Reject,
}

impl TextSegmentPolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "skip" | "0" => Some(Self::Skip),
            "reject" | "1" => Some(Self::Reject),
            _ => None,
        }
    }
}

/// Options for [`decode_with_options`](crate::decode_with_options)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// Handling of textual segments
    pub text_segments: TextSegmentPolicy,
}

impl DecodeOptions {
    /// Read options from `QR_TEXT_SEGMENTS` (`skip`/`reject`), falling back
    /// to defaults for unset or unparsable values
    pub fn from_env() -> Self {
        Self {
            text_segments: parse_env("QR_TEXT_SEGMENTS", TextSegmentPolicy::parse)
                .unwrap_or_default(),
        }
    }

    /// Builder-style setter for the text segment policy
    pub fn with_text_segments(mut self, policy: TextSegmentPolicy) -> Self {
        self.text_segments = policy;
        self
    }
}

fn parse_env<T>(name: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    std::env::var(name).ok().and_then(|v| parse(&v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse() {
        assert_eq!(TextSegmentPolicy::parse("skip"), Some(TextSegmentPolicy::Skip));
        assert_eq!(TextSegmentPolicy::parse(" Reject "), Some(TextSegmentPolicy::Reject));
        assert_eq!(TextSegmentPolicy::parse("1"), Some(TextSegmentPolicy::Reject));
        assert_eq!(TextSegmentPolicy::parse("maybe"), None);
    }

    #[test]
    fn test_default_skips_text() {
        assert_eq!(DecodeOptions::default().text_segments, TextSegmentPolicy::Skip);
        let opts = DecodeOptions::default().with_text_segments(TextSegmentPolicy::Reject);
        assert_eq!(opts.text_segments, TextSegmentPolicy::Reject);
    }
}
