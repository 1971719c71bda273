use std::thread;

use crate::h261::bitstream::{self, ByteCursor, HEADER_LEN};
use crate::h261::blocks;
use crate::h261::dct_quant::{self, PlaneKind};
use crate::h261::entropy_coding::{self, RleSymbol};
use crate::h261::error::{CodecError, Result};
use crate::h261::sampling;
use crate::pixel_matrix::pixel_matrix::PixelMatrix;
use crate::utils::colorspace::{self, clamp_to_u8, RgbValue};

/// Upper bound imposed by the 16-bit header fields.
pub const MAX_DIMENSION: usize = u16::MAX as usize;

fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(CodecError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Convert an RGB raster to the uncompressed intermediate representation:
/// 4-byte header, then the full-resolution Y plane and the two subsampled
/// chroma planes, row-major, one byte per sample.
pub fn convert_rgb_to_ycbcr(raster: &PixelMatrix<RgbValue>) -> Result<Vec<u8>> {
    validate_dimensions(raster.width, raster.height)?;
    let width = raster.width;
    let height = raster.height;

    let mut y_plane: PixelMatrix<f64> = PixelMatrix::new(width, height);
    let mut cb_plane: PixelMatrix<f64> = PixelMatrix::new(width, height);
    let mut cr_plane: PixelMatrix<f64> = PixelMatrix::new(width, height);
    raster.for_each_pixel(&mut |pixel: &RgbValue| {
        let (y, cb, cr) = colorspace::rgb_to_ycbcr(*pixel);
        y_plane.push_next(y);
        cb_plane.push_next(cb);
        cr_plane.push_next(cr);
    });

    let cb_plane = sampling::subsample(&cb_plane);
    let cr_plane = sampling::subsample(&cr_plane);

    let mut bytes =
        Vec::with_capacity(HEADER_LEN + width * height + 2 * cb_plane.pixels.len());
    bytes.extend_from_slice(&bitstream::encode_header(width as u16, height as u16));
    y_plane.for_each_pixel(&mut |sample: &f64| bytes.push(clamp_to_u8(*sample)));
    cb_plane.for_each_pixel(&mut |sample: &f64| bytes.push(clamp_to_u8(*sample)));
    cr_plane.for_each_pixel(&mut |sample: &f64| bytes.push(clamp_to_u8(*sample)));
    Ok(bytes)
}

/// Inverse of [`convert_rgb_to_ycbcr`]: upsample the chroma planes and
/// convert back to RGB. Reconstruction only ever addresses the planes
/// through the header-declared width/height; for odd dimensions the chroma
/// coordinate is clamped to the upsampled plane's edge, and a degenerate
/// (zero-sized) chroma plane reads as neutral 128.
pub fn ycbcr_to_rgb(data: &[u8]) -> Result<PixelMatrix<RgbValue>> {
    let mut cursor = ByteCursor::new(data);
    let width = cursor.read_u16()? as usize;
    let height = cursor.read_u16()? as usize;
    validate_dimensions(width, height)?;

    let half_width = width / 2;
    let half_height = height / 2;
    let expected = HEADER_LEN + width * height + 2 * half_width * half_height;
    if data.len() != expected {
        return Err(CodecError::LengthMismatch {
            expected,
            actual: data.len(),
        });
    }

    let cb_start = HEADER_LEN + width * height;
    let cr_start = cb_start + half_width * half_height;

    let y_plane = plane_from_bytes(&data[HEADER_LEN..cb_start], width, height);
    let cb_plane = sampling::upsample(&plane_from_bytes(
        &data[cb_start..cr_start],
        half_width,
        half_height,
    ));
    let cr_plane = sampling::upsample(&plane_from_bytes(
        &data[cr_start..],
        half_width,
        half_height,
    ));

    let mut raster = PixelMatrix::new(width, height);
    for row in 0..height {
        for col in 0..width {
            let y = y_plane.pixels[row * width + col];
            let (cb, cr) = if cb_plane.width == 0 || cb_plane.height == 0 {
                (128.0, 128.0)
            } else {
                let chroma_row = row.min(cb_plane.height - 1);
                let chroma_col = col.min(cb_plane.width - 1);
                (
                    cb_plane.pixels[chroma_row * cb_plane.width + chroma_col],
                    cr_plane.pixels[chroma_row * cr_plane.width + chroma_col],
                )
            };
            raster.push_next(colorspace::ycbcr_to_rgb((y, cb, cr)));
        }
    }
    Ok(raster)
}

/// Run the full forward pipeline: color conversion and chroma subsampling,
/// linear 8x8 block partitioning, DCT, quantization, zig-zag + run-length
/// coding, and bitstream framing. Returns a freshly allocated byte stream;
/// no state is carried between invocations.
pub fn compress(raster: &PixelMatrix<RgbValue>) -> Result<Vec<u8>> {
    let ycbcr = convert_rgb_to_ycbcr(raster)?;
    let width = raster.width;
    let height = raster.height;

    let y_end = HEADER_LEN + width * height;
    let y_bytes = &ycbcr[HEADER_LEN..y_end];
    // Cb then Cr as one linear stream; a block may straddle the boundary.
    let chroma_bytes = &ycbcr[y_end..];

    let (y_blocks, chroma_blocks) = thread::scope(|s| {
        let y_handle = s.spawn(|| encode_plane(y_bytes, PlaneKind::Luma));
        let chroma_blocks = encode_plane(chroma_bytes, PlaneKind::Chroma);
        (join_worker(y_handle), chroma_blocks)
    });

    let mut all_blocks = y_blocks;
    all_blocks.extend(chroma_blocks);
    Ok(bitstream::encode_blocks(
        width as u16,
        height as u16,
        &all_blocks,
    ))
}

/// Reverse every forward stage, re-deriving the block layout from the
/// header dimensions alone.
pub fn decompress(data: &[u8]) -> Result<PixelMatrix<RgbValue>> {
    let (width, height, all_blocks) = bitstream::decode_blocks(data)?;
    let width = width as usize;
    let height = height as usize;
    validate_dimensions(width, height)?;

    let y_sample_count = width * height;
    let chroma_sample_count = 2 * (width / 2) * (height / 2);
    let y_block_count = blocks::block_count(y_sample_count);
    let expected = y_block_count + blocks::block_count(chroma_sample_count);
    if all_blocks.len() != expected {
        return Err(CodecError::BlockCountMismatch {
            expected,
            actual: all_blocks.len(),
        });
    }

    let (y_blocks, chroma_blocks) = all_blocks.split_at(y_block_count);

    let (y_samples, chroma_samples) = thread::scope(|s| {
        let y_handle = s.spawn(|| decode_plane(y_blocks, PlaneKind::Luma, y_sample_count));
        let chroma_samples = decode_plane(chroma_blocks, PlaneKind::Chroma, chroma_sample_count);
        (join_worker(y_handle), chroma_samples)
    });
    let y_samples = y_samples?;
    let chroma_samples = chroma_samples?;

    let mut ycbcr = Vec::with_capacity(HEADER_LEN + y_sample_count + chroma_sample_count);
    ycbcr.extend_from_slice(&bitstream::encode_header(width as u16, height as u16));
    ycbcr.extend_from_slice(&y_samples);
    ycbcr.extend_from_slice(&chroma_samples);
    ycbcr_to_rgb(&ycbcr)
}

fn encode_plane(samples: &[u8], kind: PlaneKind) -> Vec<Vec<RleSymbol>> {
    blocks::split_into_blocks(samples)
        .iter()
        .map(|block| {
            let coeffs = dct_quant::quantize(&dct_quant::forward_dct(block), kind);
            entropy_coding::runlength_encode(&entropy_coding::zigzag_scan(&coeffs))
        })
        .collect()
}

fn decode_plane(
    block_symbols: &[Vec<RleSymbol>],
    kind: PlaneKind,
    sample_count: usize,
) -> Result<Vec<u8>> {
    let mut plane_blocks = Vec::with_capacity(block_symbols.len());
    for symbols in block_symbols {
        let coeffs = entropy_coding::runlength_decode(symbols)?;
        plane_blocks.push(dct_quant::inverse_dct(&dct_quant::dequantize(&coeffs, kind)));
    }
    Ok(blocks::merge_blocks(&plane_blocks, sample_count))
}

fn plane_from_bytes(bytes: &[u8], width: usize, height: usize) -> PixelMatrix<f64> {
    let mut plane = PixelMatrix::new(width, height);
    for &byte in bytes {
        plane.push_next(byte as f64);
    }
    plane
}

fn join_worker<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    match handle.join() {
        Ok(result) => result,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ycbcr_buffer_length_must_match_header() {
        // header says 4x4: 16 Y samples + 2 * 4 chroma samples expected
        let mut data = vec![0u8, 4, 0, 4];
        data.extend_from_slice(&[128u8; 10]);
        assert_eq!(
            ycbcr_to_rgb(&data),
            Err(CodecError::LengthMismatch {
                expected: 4 + 16 + 8,
                actual: 14,
            })
        );
    }

    #[test]
    fn ycbcr_round_trip_preserves_neutral_gray() {
        let mut raster = PixelMatrix::new(4, 4);
        for _ in 0..16 {
            raster.push_next((128, 128, 128));
        }
        let intermediate = convert_rgb_to_ycbcr(&raster).unwrap();
        assert_eq!(intermediate.len(), 4 + 16 + 8);
        let restored = ycbcr_to_rgb(&intermediate).unwrap();
        assert_eq!(restored.pixels, raster.pixels);
    }

    #[test]
    fn zero_sized_chroma_reads_as_neutral() {
        // a 1x1 raster has no chroma samples at all
        let mut raster = PixelMatrix::new(1, 1);
        raster.push_next((128, 128, 128));
        let intermediate = convert_rgb_to_ycbcr(&raster).unwrap();
        assert_eq!(intermediate.len(), 5);
        let restored = ycbcr_to_rgb(&intermediate).unwrap();
        assert_eq!(restored.pixels, vec![(128, 128, 128)]);
    }
}
