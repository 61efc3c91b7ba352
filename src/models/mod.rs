pub mod payload;
pub mod segment;

pub use payload::DecodedPayload;
pub use segment::{Mode, Segment, SegmentContent};
