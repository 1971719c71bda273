//! End-to-end compress/decompress tests over synthetic rasters.

use h261_codec::{compress, convert_rgb_to_ycbcr, decompress, CodecError, PixelMatrix, RgbValue};

fn uniform_raster(width: usize, height: usize, value: RgbValue) -> PixelMatrix<RgbValue> {
    let mut raster = PixelMatrix::new(width, height);
    for _ in 0..width * height {
        raster.push_next(value);
    }
    raster
}

#[test]
fn gray_16x16_stays_within_quantization_error() {
    let raster = uniform_raster(16, 16, (128, 128, 128));
    let restored = decompress(&compress(&raster).unwrap()).unwrap();
    assert_eq!((restored.width, restored.height), (16, 16));
    restored.for_each_pixel(&mut |&(r, g, b): &RgbValue| {
        for channel in [r, g, b] {
            assert!(
                (channel as i32 - 128).abs() <= 2,
                "channel drifted to {channel}"
            );
        }
    });
}

#[test]
fn gray_16x16_produces_the_expected_bitstream() {
    // A uniform gray raster is DC-only in every block: 4 Y blocks at
    // 1024/16 = 64 and 2 chroma blocks at round(1024/17) = 60, each a
    // single (run 0, value) pair plus its delimiter.
    let raster = uniform_raster(16, 16, (128, 128, 128));
    let bytes = compress(&raster).unwrap();
    #[rustfmt::skip]
    assert_eq!(bytes, vec![
        0, 16, 0, 16,
        0, 64, 0, 0,
        0, 64, 0, 0,
        0, 64, 0, 0,
        0, 64, 0, 0,
        0, 60, 0, 0,
        0, 60, 0, 0,
    ]);
}

#[test]
fn header_preserves_exact_dimensions() {
    let raster = uniform_raster(24, 13, (90, 200, 30));
    let bytes = compress(&raster).unwrap();
    assert_eq!(u16::from_be_bytes([bytes[0], bytes[1]]), 24);
    assert_eq!(u16::from_be_bytes([bytes[2], bytes[3]]), 13);
}

#[test]
fn degenerate_rasters_are_rejected() {
    let empty: PixelMatrix<RgbValue> = PixelMatrix::new(0, 0);
    assert!(matches!(
        compress(&empty),
        Err(CodecError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        convert_rgb_to_ycbcr(&empty),
        Err(CodecError::InvalidDimensions { .. })
    ));

    let too_wide: PixelMatrix<RgbValue> = PixelMatrix::new(70_000, 1);
    assert!(matches!(
        compress(&too_wide),
        Err(CodecError::InvalidDimensions { .. })
    ));
}

#[test]
fn non_multiple_of_8_dimensions_round_trip() {
    let raster = uniform_raster(13, 13, (60, 110, 200));
    let restored = decompress(&compress(&raster).unwrap()).unwrap();
    assert_eq!((restored.width, restored.height), (13, 13));
    assert_eq!(restored.pixels.len(), 169);
}

#[test]
fn single_pixel_raster_round_trips() {
    // 1x1 has one zero-padded Y block and no chroma blocks at all
    let raster = uniform_raster(1, 1, (10, 20, 30));
    let restored = decompress(&compress(&raster).unwrap()).unwrap();
    assert_eq!((restored.width, restored.height), (1, 1));
}

#[test]
fn intermediate_buffer_has_the_documented_layout() {
    let raster = uniform_raster(10, 6, (128, 128, 128));
    let ycbcr = convert_rgb_to_ycbcr(&raster).unwrap();
    assert_eq!(ycbcr.len(), 4 + 10 * 6 + 2 * 5 * 3);
    assert_eq!(&ycbcr[0..4], &[0, 10, 0, 6]);
    assert!(ycbcr[4..].iter().all(|&b| b == 128));
}

#[test]
fn malformed_streams_are_rejected() {
    assert_eq!(decompress(&[0, 1]), Err(CodecError::TruncatedHeader));
    assert_eq!(
        decompress(&[0, 4, 0, 4, 1]),
        Err(CodecError::OddTrailingBytes)
    );
    assert_eq!(
        decompress(&[0, 4, 0, 4, 0, 5]),
        Err(CodecError::MissingDelimiter)
    );
    // well-framed but one block short: 4x4 needs one Y and one chroma block
    assert_eq!(
        decompress(&[0, 4, 0, 4, 0, 0]),
        Err(CodecError::BlockCountMismatch {
            expected: 2,
            actual: 1,
        })
    );
    // header-declared dimensions must be nonzero
    assert!(matches!(
        decompress(&[0, 0, 0, 4, 0, 0]),
        Err(CodecError::InvalidDimensions { .. })
    ));
}

#[test]
fn repeated_invocations_are_independent() {
    // no accumulator state may leak between calls: identical inputs give
    // identical streams, and an interleaved call changes nothing
    let gray = uniform_raster(16, 16, (128, 128, 128));
    let first = compress(&gray).unwrap();
    let other = uniform_raster(8, 8, (255, 255, 255));
    compress(&other).unwrap();
    let second = compress(&gray).unwrap();
    assert_eq!(first, second);
}
