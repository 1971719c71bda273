use byteorder::{BigEndian, ByteOrder};

use crate::h261::entropy_coding::RleSymbol;
use crate::h261::error::{CodecError, Result};

/// 4-byte header: width then height, each big-endian u16.
pub const HEADER_LEN: usize = 4;

/// Terminates every block's symbol sequence. Never produced as a symbol,
/// since emitted coefficient values are nonzero by construction.
const BLOCK_DELIMITER: [u8; 2] = [0x00, 0x00];

/// Map a signed coefficient to its wire byte (`value mod 256`).
pub fn encode_value(value: i32) -> u8 {
    (value & 0xff) as u8
}

/// Inverse of [`encode_value`]: bytes above 127 map back to negatives.
pub fn decode_value(byte: u8) -> i32 {
    if byte > 127 {
        byte as i32 - 256
    } else {
        byte as i32
    }
}

pub fn encode_header(width: u16, height: u16) -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    BigEndian::write_u16(&mut header[0..2], width);
    BigEndian::write_u16(&mut header[2..4], height);
    header
}

/// Bounds-checked reader over a byte stream. Owns the current offset so the
/// parse position is never threaded through callers by hand.
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> ByteCursor<'a> {
        ByteCursor { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        if self.remaining() < 2 {
            return Err(CodecError::TruncatedHeader);
        }
        let value = BigEndian::read_u16(&self.data[self.pos..self.pos + 2]);
        self.pos += 2;
        Ok(value)
    }

    pub fn read_pair(&mut self) -> Result<(u8, u8)> {
        if self.remaining() < 2 {
            return Err(CodecError::OddTrailingBytes);
        }
        let pair = (self.data[self.pos], self.data[self.pos + 1]);
        self.pos += 2;
        Ok(pair)
    }
}

/// Frame the header and per-block symbol sequences into a flat byte stream:
/// 2 bytes per symbol, then the 0x00 0x00 delimiter after every block.
pub fn encode_blocks(width: u16, height: u16, blocks: &[Vec<RleSymbol>]) -> Vec<u8> {
    let symbol_count: usize = blocks.iter().map(Vec::len).sum();
    let mut bytes = Vec::with_capacity(HEADER_LEN + 2 * (symbol_count + blocks.len()));
    bytes.extend_from_slice(&encode_header(width, height));
    for symbols in blocks {
        for symbol in symbols {
            debug_assert!(symbol.value != 0, "zero-valued symbol would forge a delimiter");
            bytes.push(symbol.run);
            bytes.push(encode_value(symbol.value));
        }
        bytes.extend_from_slice(&BLOCK_DELIMITER);
    }
    bytes
}

/// Parse a framed stream back into header dimensions and per-block symbol
/// sequences. Fails fast on a truncated header, an odd body length, or a
/// final block with no terminating delimiter.
pub fn decode_blocks(data: &[u8]) -> Result<(u16, u16, Vec<Vec<RleSymbol>>)> {
    if data.len() < HEADER_LEN {
        return Err(CodecError::TruncatedHeader);
    }
    if (data.len() - HEADER_LEN) % 2 != 0 {
        return Err(CodecError::OddTrailingBytes);
    }

    let mut cursor = ByteCursor::new(data);
    let width = cursor.read_u16()?;
    let height = cursor.read_u16()?;

    let mut blocks = Vec::new();
    let mut current = Vec::new();
    while cursor.remaining() > 0 {
        let (run, value) = cursor.read_pair()?;
        if (run, value) == (BLOCK_DELIMITER[0], BLOCK_DELIMITER[1]) {
            blocks.push(std::mem::take(&mut current));
        } else {
            current.push(RleSymbol {
                run,
                value: decode_value(value),
            });
        }
    }
    if !current.is_empty() {
        return Err(CodecError::MissingDelimiter);
    }
    Ok((width, height, blocks))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_mapping_round_trip() {
        for value in -128..=127 {
            assert_eq!(decode_value(encode_value(value)), value);
        }
        assert_eq!(encode_value(-1), 0xff);
        assert_eq!(encode_value(-128), 0x80);
        assert_eq!(decode_value(0x80), -128);
    }

    #[test]
    fn header_is_big_endian() {
        assert_eq!(encode_header(640, 480), [0x02, 0x80, 0x01, 0xe0]);
    }

    #[test]
    fn encode_decode_round_trip() {
        let blocks = vec![
            vec![
                RleSymbol { run: 0, value: 64 },
                RleSymbol { run: 3, value: -2 },
            ],
            vec![], // all-zero block: bare delimiter
            vec![RleSymbol { run: 63, value: 1 }],
        ];
        let bytes = encode_blocks(31, 17, &blocks);
        let (width, height, decoded) = decode_blocks(&bytes).unwrap();
        assert_eq!((width, height), (31, 17));
        assert_eq!(decoded, blocks);
    }

    #[test]
    fn all_zero_block_is_a_bare_delimiter() {
        let bytes = encode_blocks(8, 8, &[vec![]]);
        assert_eq!(bytes, [0, 8, 0, 8, 0, 0]);
    }

    #[test]
    fn rejects_truncated_header() {
        assert_eq!(decode_blocks(&[0, 8, 0]), Err(CodecError::TruncatedHeader));
    }

    #[test]
    fn rejects_odd_body() {
        assert_eq!(
            decode_blocks(&[0, 8, 0, 8, 1]),
            Err(CodecError::OddTrailingBytes)
        );
    }

    #[test]
    fn rejects_unterminated_final_block() {
        assert_eq!(
            decode_blocks(&[0, 8, 0, 8, 0, 5]),
            Err(CodecError::MissingDelimiter)
        );
    }
}
