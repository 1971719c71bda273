pub type RgbValue = (u8, u8, u8);

/// Round and clamp a reconstructed sample into the 8-bit range. Out-of-range
/// values are clamped silently, never reported.
pub fn clamp_to_u8(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// RGB to YCbCr, ITU-R BT.601 matrix. Chroma is offset by +128 so all three
/// channels share the unsigned 8-bit range.
pub fn rgb_to_ycbcr((r, g, b): RgbValue) -> (f64, f64, f64) {
    let r = r as f64;
    let g = g as f64;
    let b = b as f64;

    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let cb = -0.168736 * r - 0.331264 * g + 0.5 * b + 128.0;
    let cr = 0.5 * r - 0.418688 * g - 0.081312 * b + 128.0;

    (y, cb, cr)
}

/// YCbCr back to RGB, channels clamped to [0, 255] before the 8-bit cast.
pub fn ycbcr_to_rgb((y, cb, cr): (f64, f64, f64)) -> RgbValue {
    let cb = cb - 128.0;
    let cr = cr - 128.0;

    let r = y + 1.4 * cr;
    let g = y - 0.343 * cb - 0.711 * cr;
    let b = y + 1.765 * cb;

    (clamp_to_u8(r), clamp_to_u8(g), clamp_to_u8(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_gray_is_a_fixed_point() {
        let (y, cb, cr) = rgb_to_ycbcr((128, 128, 128));
        assert!((y - 128.0).abs() < 1e-9);
        assert!((cb - 128.0).abs() < 1e-9);
        assert!((cr - 128.0).abs() < 1e-9);
        assert_eq!(ycbcr_to_rgb((y, cb, cr)), (128, 128, 128));
    }

    #[test]
    fn round_trip_stays_within_matrix_mismatch_error() {
        // the inverse matrix is the codec's coarser one (1.4 / 0.343 / 0.711
        // / 1.765), so allow a couple of code values of drift
        for rgb in [(200u8, 120u8, 40u8), (12, 250, 97), (255, 0, 255)] {
            let (r, g, b) = ycbcr_to_rgb(rgb_to_ycbcr(rgb));
            assert!((r as i32 - rgb.0 as i32).abs() <= 3, "{rgb:?} -> r {r}");
            assert!((g as i32 - rgb.1 as i32).abs() <= 3, "{rgb:?} -> g {g}");
            assert!((b as i32 - rgb.2 as i32).abs() <= 3, "{rgb:?} -> b {b}");
        }
    }

    #[test]
    fn inverse_clamps_out_of_range_channels() {
        let (r, _, b) = ycbcr_to_rgb((255.0, 255.0, 255.0));
        assert_eq!(r, 255);
        assert_eq!(b, 255);
        let (r, _, b) = ycbcr_to_rgb((0.0, 0.0, 0.0));
        assert_eq!(r, 0);
        assert_eq!(b, 0);
    }

    #[test]
    fn clamp_to_u8_rounds_then_saturates() {
        assert_eq!(clamp_to_u8(127.5), 128);
        assert_eq!(clamp_to_u8(-3.2), 0);
        assert_eq!(clamp_to_u8(300.0), 255);
        assert_eq!(clamp_to_u8(254.4), 254);
    }
}
