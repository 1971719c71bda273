use crate::h261::dct_quant::CoeffBlock;
use crate::h261::error::{CodecError, Result};

/// Zig-zag scan order: value at scan position k is the row-major source
/// index (row = value / 8, col = value % 8). Standard JPEG sweep from the
/// DC coefficient down to the highest spatial frequency.
#[rustfmt::skip]
pub const ZIG_ZAG_MAP: [usize; 64] = [
     0,  1,  8, 16,  9,  2,  3, 10,
    17, 24, 32, 25, 18, 11,  4,  5,
    12, 19, 26, 33, 40, 48, 41, 34,
    27, 20, 13,  6,  7, 14, 21, 28,
    35, 42, 49, 56, 57, 50, 43, 36,
    29, 22, 15, 23, 30, 37, 44, 51,
    58, 59, 52, 45, 38, 31, 39, 46,
    53, 60, 61, 54, 47, 55, 62, 63,
];

/// One run-length symbol: `run` zero coefficients followed by a nonzero
/// `value`. The encoder never emits a symbol with `value == 0`, which keeps
/// the (0, 0) pair free to act as the block delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RleSymbol {
    pub run: u8,
    pub value: i32,
}

/// Linearize a quantized block from low to high spatial frequency.
pub fn zigzag_scan(block: &CoeffBlock) -> [i32; 64] {
    let mut scanned = [0i32; 64];
    for (k, &pos) in ZIG_ZAG_MAP.iter().enumerate() {
        scanned[k] = block[pos / 8][pos % 8];
    }
    scanned
}

/// Scatter a scan-ordered sequence back to row-major block positions.
pub fn zigzag_unscan(scanned: &[i32; 64]) -> CoeffBlock {
    let mut block = [[0i32; 8]; 8];
    for (k, &pos) in ZIG_ZAG_MAP.iter().enumerate() {
        block[pos / 8][pos % 8] = scanned[k];
    }
    block
}

/// Run-length encode a scan-ordered block. Trailing zeros are dropped: a
/// block whose symbols run out is implicitly zero to the end.
pub fn runlength_encode(scanned: &[i32; 64]) -> Vec<RleSymbol> {
    let mut symbols = Vec::new();
    let mut run = 0u8;
    for &coeff in scanned {
        if coeff == 0 {
            run += 1;
        } else {
            symbols.push(RleSymbol { run, value: coeff });
            run = 0;
        }
    }
    symbols
}

/// Rebuild a quantized block from its run-length symbols. Positions past the
/// last symbol stay zero. Rejects symbols that would land outside the block.
pub fn runlength_decode(symbols: &[RleSymbol]) -> Result<CoeffBlock> {
    let mut scanned = [0i32; 64];
    let mut pos = 0usize;
    for symbol in symbols {
        let target = pos + symbol.run as usize;
        if target >= 64 {
            return Err(CodecError::RunOverflow { run: symbol.run });
        }
        scanned[target] = symbol.value;
        pos = target + 1;
    }
    Ok(zigzag_unscan(&scanned))
}
