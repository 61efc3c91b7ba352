use clap::{Parser, Subcommand};
use qr_payload::tools::{HexError, parse_hex, read_hex_lines, to_hex};
use qr_payload::{DecodeOptions, SegmentContent, decode_segments_with_options, decode_with_options};
use rayon::prelude::*;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR payload decoding tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode one symbol's data codewords into its binary payload
    #[command(group(clap::ArgGroup::new("input").required(true).args(["hex", "file"])))]
    Decode {
        /// Symbol version (1-40)
        #[arg(long = "symbol-version", allow_negative_numbers = true)]
        symbol_version: i64,
        /// Codewords as hex
        #[arg(long)]
        hex: Option<String>,
        /// File holding the codewords as hex
        #[arg(long)]
        file: Option<PathBuf>,
        /// Write the payload bytes to stdout instead of hex
        #[arg(long)]
        raw: bool,
    },
    /// List every segment in the stream
    Segments {
        /// Symbol version (1-40)
        #[arg(long = "symbol-version", allow_negative_numbers = true)]
        symbol_version: i64,
        /// Codewords as hex
        #[arg(long)]
        hex: String,
    },
    /// Decode one hex payload per line, in parallel
    Batch {
        /// Symbol version (1-40)
        #[arg(long = "symbol-version", allow_negative_numbers = true)]
        symbol_version: i64,
        /// File with one hex payload per line
        #[arg(long)]
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    qr_payload::debug::init_logging();
    let cli = Cli::parse();
    let options = DecodeOptions::from_env();

    match cli.command {
        Command::Decode {
            symbol_version,
            hex,
            file,
            raw,
        } => decode_cmd(symbol_version, hex.as_deref(), file.as_deref(), raw, &options),
        Command::Segments {
            symbol_version,
            hex,
        } => segments_cmd(symbol_version, &hex, &options),
        Command::Batch {
            symbol_version,
            file,
        } => batch_cmd(symbol_version, &file, &options),
    }
}

fn load_codewords(hex: Option<&str>, file: Option<&Path>) -> Result<Vec<u8>, HexError> {
    match (hex, file) {
        (Some(hex), _) => parse_hex(hex),
        (None, Some(path)) => parse_hex(&std::fs::read_to_string(path)?),
        (None, None) => Err(HexError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "no codewords given, pass --hex or --file",
        ))),
    }
}

fn decode_cmd(
    version: i64,
    hex: Option<&str>,
    file: Option<&Path>,
    raw: bool,
    options: &DecodeOptions,
) -> ExitCode {
    let codewords = match load_codewords(hex, file) {
        Ok(codewords) => codewords,
        Err(err) => {
            eprintln!("Failed to read codewords: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match decode_with_options(&codewords, version, options) {
        Ok(payload) if raw => {
            let mut stdout = std::io::stdout().lock();
            if let Err(err) = stdout.write_all(&payload).and_then(|_| stdout.flush()) {
                eprintln!("Failed to write payload: {}", err);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Ok(payload) => {
            println!("{}", to_hex(&payload));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Decode failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn segments_cmd(version: i64, hex: &str, options: &DecodeOptions) -> ExitCode {
    let codewords = match parse_hex(hex) {
        Ok(codewords) => codewords,
        Err(err) => {
            eprintln!("Failed to read codewords: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let segments = match decode_segments_with_options(&codewords, version, options) {
        Ok(segments) => segments,
        Err(err) => {
            eprintln!("Decode failed: {}", err);
            return ExitCode::FAILURE;
        }
    };

    println!("Found {} segments", segments.len());
    for (i, segment) in segments.iter().enumerate() {
        let content = match &segment.content {
            SegmentContent::Bytes(bytes) => format!("bytes={}", to_hex(bytes)),
            SegmentContent::Text(text) => format!("text={:?}", text),
            SegmentContent::ShiftJis(sjis) => format!("sjis={}", to_hex(sjis)),
            SegmentContent::Eci(value) => format!("eci={}", value),
            SegmentContent::StructuredAppend {
                index,
                total,
                parity,
            } => format!("symbol {}/{} parity={:#04x}", index + 1, total, parity),
            SegmentContent::Fnc1 { application } => match application {
                Some(app) => format!("fnc1 application={}", app),
                None => "fnc1".to_string(),
            },
        };
        println!(
            "  Segment {}: mode={:?} bit={} count={} {}",
            i, segment.mode, segment.bit_offset, segment.count, content
        );
    }
    ExitCode::SUCCESS
}

fn batch_cmd(version: i64, file: &Path, options: &DecodeOptions) -> ExitCode {
    let payloads = match read_hex_lines(file) {
        Ok(payloads) => payloads,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let results: Vec<_> = payloads
        .par_iter()
        .map(|codewords| decode_with_options(codewords, version, options))
        .collect();

    let mut failures = 0usize;
    for (i, result) in results.iter().enumerate() {
        match result {
            Ok(payload) => println!("{}: {}", i, to_hex(payload)),
            Err(err) => {
                failures += 1;
                println!("{}: error: {}", i, err);
            }
        }
    }
    println!(
        "Decoded {}/{} payloads",
        results.len() - failures,
        results.len()
    );

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
