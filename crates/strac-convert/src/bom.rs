//! Byte-order-mark handling at the input boundary.

use std::io::{self, Chain, Cursor, Read};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Strip a leading UTF-8 BOM from a reader, if present.
///
/// Peeks at most three bytes. When they are the BOM they are discarded;
/// anything else is pushed back unconsumed, so the wrapped reader yields the
/// original byte stream.
pub fn strip_bom<R: Read>(mut reader: R) -> io::Result<Chain<Cursor<Vec<u8>>, R>> {
    let mut prefix = [0u8; 3];
    let mut filled = 0;
    while filled < prefix.len() {
        let n = reader.read(&mut prefix[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    let pushback = if filled == prefix.len() && prefix == UTF8_BOM {
        Vec::new()
    } else {
        prefix[..filled].to_vec()
    };
    Ok(Cursor::new(pushback).chain(reader))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(input: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        strip_bom(input).unwrap().read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn strips_leading_bom() {
        assert_eq!(read_all(b"\xEF\xBB\xBFid,street"), b"id,street");
    }

    #[test]
    fn leaves_unprefixed_input_alone() {
        assert_eq!(read_all(b"id,street"), b"id,street");
    }

    #[test]
    fn bom_only_input_becomes_empty() {
        assert_eq!(read_all(b"\xEF\xBB\xBF"), b"");
    }

    #[test]
    fn short_input_is_preserved() {
        assert_eq!(read_all(b"ab"), b"ab");
        assert_eq!(read_all(b"\xEF\xBB"), b"\xEF\xBB");
        assert_eq!(read_all(b""), b"");
    }

    #[test]
    fn bom_mid_stream_is_untouched() {
        assert_eq!(read_all(b"id\xEF\xBB\xBF"), b"id\xEF\xBB\xBF");
    }
}
