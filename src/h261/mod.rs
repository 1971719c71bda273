//! Block-transform compression pipeline: YCbCr conversion, 4:2:0 chroma
//! decimation, 8x8 DCT, quantization, zig-zag + run-length coding, and the
//! delimiter-framed bitstream that ties the stages together.

pub mod bitstream;
pub mod blocks;
pub mod dct_quant;
pub mod entropy_coding;
pub mod error;
pub mod pipeline;
pub mod quant_tables;
pub mod sampling;
