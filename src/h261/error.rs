//! Error types for the compression pipeline.

use std::fmt;

/// Errors surfaced by the compress/decompress pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Width or height is zero, or does not fit the 16-bit header fields.
    InvalidDimensions { width: usize, height: usize },
    /// Input shorter than the 4-byte width/height header.
    TruncatedHeader,
    /// Stream body is not a whole number of 2-byte (run, value) groups.
    OddTrailingBytes,
    /// Stream ended inside a block, with no terminating 0x00 0x00 delimiter.
    MissingDelimiter,
    /// Parsed block count does not match the header-declared dimensions.
    BlockCountMismatch { expected: usize, actual: usize },
    /// A run-length symbol would write past the end of its 8x8 block.
    RunOverflow { run: u8 },
    /// Intermediate YCbCr buffer length disagrees with its header.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid image dimensions {width}x{height} (must be 1..=65535)")
            }
            Self::TruncatedHeader => write!(f, "stream shorter than the 4-byte header"),
            Self::OddTrailingBytes => write!(f, "stream body has an odd number of bytes"),
            Self::MissingDelimiter => write!(f, "final block has no terminating delimiter"),
            Self::BlockCountMismatch { expected, actual } => {
                write!(f, "expected {expected} blocks for the declared dimensions, found {actual}")
            }
            Self::RunOverflow { run } => {
                write!(f, "run length {run} overflows the 64-coefficient block")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "YCbCr buffer is {actual} bytes, header implies {expected}")
            }
        }
    }
}

impl std::error::Error for CodecError {}

pub type Result<T> = std::result::Result<T, CodecError>;
