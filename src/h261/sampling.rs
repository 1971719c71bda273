use crate::pixel_matrix::pixel_matrix::PixelMatrix;

/// Halve a chroma plane in both directions by keeping the top-left sample of
/// each 2x2 group. Plain decimation, not averaging: this matches the encoder
/// the bitstream format was built around. Odd dimensions floor.
pub fn subsample(channel: &PixelMatrix<f64>) -> PixelMatrix<f64> {
    let width = channel.width / 2;
    let height = channel.height / 2;
    let mut result = PixelMatrix::new(width, height);
    for row in 0..height {
        for col in 0..width {
            result.push_next(channel.pixels[row * 2 * channel.width + col * 2]);
        }
    }
    result
}

/// Replicate every sample of a half-resolution plane into a 2x2 group,
/// restoring (2w, 2h) resolution.
pub fn upsample(channel: &PixelMatrix<f64>) -> PixelMatrix<f64> {
    let width = channel.width * 2;
    let height = channel.height * 2;
    let mut result = PixelMatrix::new_with_default(width, height);
    for row in 0..channel.height {
        for col in 0..channel.width {
            let value = channel.pixels[row * channel.width + col];
            result.set_pixel(row * 2, col * 2, value);
            result.set_pixel(row * 2, col * 2 + 1, value);
            result.set_pixel(row * 2 + 1, col * 2, value);
            result.set_pixel(row * 2 + 1, col * 2 + 1, value);
        }
    }
    result
}
