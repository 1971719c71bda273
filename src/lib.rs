//! # h261-codec
//!
//! Block-transform image compression in the JPEG/H.261 lineage. An RGB
//! raster is converted to YCbCr, the chroma planes are 4:2:0 decimated,
//! every plane is carved into 8x8 blocks, transformed with a DCT, quantized
//! against fixed perceptual tables, and serialized via zig-zag scan and
//! run-length coding into a delimiter-framed byte stream. The inverse path
//! reconstructs an approximate RGB raster from that stream.
//!
//! ```rust,ignore
//! use h261_codec::{compress, decompress, PixelMatrix};
//!
//! let bytes = compress(&raster)?;
//! let restored = decompress(&bytes)?;
//! assert_eq!((restored.width, restored.height), (raster.width, raster.height));
//! ```
//!
//! Entropy coding stops at run-length symbols: there is no Huffman or
//! arithmetic stage, and despite the H.261 ancestry there is no motion
//! compensation. The whole stream is materialized in memory on both paths.

pub mod bmp;
pub mod h261;
pub mod pixel_matrix;
pub mod utils;

pub use h261::error::{CodecError, Result};
pub use h261::pipeline::{compress, convert_rgb_to_ycbcr, decompress, ycbcr_to_rgb, MAX_DIMENSION};
pub use pixel_matrix::pixel_matrix::PixelMatrix;
pub use utils::colorspace::RgbValue;
