use crate::h261::dct_quant::Block;
use crate::utils::colorspace::clamp_to_u8;

/// Samples per block (8x8).
pub const BLOCK_SIZE: usize = 64;

/// Number of blocks a plane of `sample_count` samples partitions into.
pub fn block_count(sample_count: usize) -> usize {
    sample_count.div_ceil(BLOCK_SIZE)
}

/// Partition a linearized plane into consecutive 64-sample blocks, each
/// shaped 8x8 row-major. The trailing partial block is zero-padded; the pad
/// is re-derived from the header dimensions at decode time, never stored.
pub fn split_into_blocks(samples: &[u8]) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(block_count(samples.len()));
    for chunk in samples.chunks(BLOCK_SIZE) {
        let mut block = [[0.0f64; 8]; 8];
        for (i, &sample) in chunk.iter().enumerate() {
            block[i / 8][i % 8] = sample as f64;
        }
        blocks.push(block);
    }
    blocks
}

/// Flatten reconstructed blocks back into a linear sample sequence, clamping
/// each value to [0, 255] and dropping the zero padding past `sample_count`.
pub fn merge_blocks(blocks: &[Block], sample_count: usize) -> Vec<u8> {
    let mut samples = Vec::with_capacity(blocks.len() * BLOCK_SIZE);
    for block in blocks {
        for row in block {
            for &value in row {
                samples.push(clamp_to_u8(value));
            }
        }
    }
    samples.truncate(sample_count);
    samples
}
