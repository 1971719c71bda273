use std::f64::consts::{FRAC_1_SQRT_2, PI};

use crate::h261::quant_tables::{CHROMINANCE_QUANTIZATION_TABLE, LUMINANCE_QUANTIZATION_TABLE};

/// An 8x8 tile of real-valued samples or DCT coefficients.
pub type Block = [[f64; 8]; 8];

/// An 8x8 tile of quantized integer coefficients.
pub type CoeffBlock = [[i32; 8]; 8];

/// Which plane a block came from. Selects the quantization table on both
/// the forward and the inverse path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneKind {
    Luma,
    Chroma,
}

impl PlaneKind {
    pub fn quantization_table(self) -> &'static [[i32; 8]; 8] {
        match self {
            PlaneKind::Luma => &LUMINANCE_QUANTIZATION_TABLE,
            PlaneKind::Chroma => &CHROMINANCE_QUANTIZATION_TABLE,
        }
    }
}

fn normalization(k: usize) -> f64 {
    if k == 0 {
        FRAC_1_SQRT_2
    } else {
        1.0
    }
}

/// Forward DCT of an 8x8 block, straight from the mathematical formula.
///
/// O(n^2 m^2) per block; dominated by the cosine evaluations. Samples go in
/// unshifted (0..255), so the DC coefficient of a mid-gray block sits around
/// a thousand rather than zero.
pub fn forward_dct(block: &Block) -> Block {
    let mut result = [[0.0f64; 8]; 8];
    for u in 0..8 {
        for v in 0..8 {
            let mut sum = 0.0;
            for x in 0..8 {
                for y in 0..8 {
                    sum += ((((2 * x + 1) * u) as f64 * PI) / 16.0).cos()
                        * ((((2 * y + 1) * v) as f64 * PI) / 16.0).cos()
                        * block[x][y];
                }
            }
            // 2 / sqrt(8 * 8)
            result[u][v] = normalization(u) * normalization(v) * 0.25 * sum;
        }
    }
    result
}

/// Inverse DCT of an 8x8 coefficient block.
pub fn inverse_dct(coeffs: &Block) -> Block {
    let mut result = [[0.0f64; 8]; 8];
    for x in 0..8 {
        for y in 0..8 {
            let mut sum = 0.0;
            for u in 0..8 {
                for v in 0..8 {
                    sum += 2.0 * ((normalization(u) * normalization(v)) / 8.0)
                        * ((((2 * x + 1) * u) as f64 * PI) / 16.0).cos()
                        * ((((2 * y + 1) * v) as f64 * PI) / 16.0).cos()
                        * coeffs[u][v];
                }
            }
            result[x][y] = sum;
        }
    }
    result
}

/// Divide each coefficient by its table entry and round to nearest.
pub fn quantize(block: &Block, kind: PlaneKind) -> CoeffBlock {
    let table = kind.quantization_table();
    let mut result = [[0i32; 8]; 8];
    for row in 0..8 {
        for col in 0..8 {
            result[row][col] = (block[row][col] / (table[row][col] as f64)).round() as i32;
        }
    }
    result
}

/// Multiply each coefficient back by its table entry.
pub fn dequantize(coeffs: &CoeffBlock, kind: PlaneKind) -> Block {
    let table = kind.quantization_table();
    let mut result = [[0.0f64; 8]; 8];
    for row in 0..8 {
        for col in 0..8 {
            result[row][col] = (coeffs[row][col] * table[row][col]) as f64;
        }
    }
    result
}
