//! Byte-order-mark sniffing and encoding autodetection for raw byte input,
//! per RFC 8259 Appendix B's byte-pattern table: with no BOM present, the
//! pattern of zero bytes among the first four bytes distinguishes UTF-8,
//! UTF-16, and UTF-32 (and endianness) without needing an explicit marker.

use crate::error::ParseErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

/// Detect the encoding of `bytes` from a leading BOM or, failing that, from
/// the RFC 8259 Appendix B zero-byte pattern of its first four bytes.
/// Returns the encoding and the number of leading BOM bytes to skip (0 if
/// none was present).
pub fn detect(bytes: &[u8]) -> Result<(Encoding, usize), ParseErrorKind> {
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return Ok((Encoding::Utf8, 3));
    }
    if bytes.starts_with(&[0xFF, 0xFE, 0x00, 0x00]) {
        return Ok((Encoding::Utf32Le, 4));
    }
    if bytes.starts_with(&[0x00, 0x00, 0xFE, 0xFF]) {
        return Ok((Encoding::Utf32Be, 4));
    }
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Ok((Encoding::Utf16Le, 2));
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Ok((Encoding::Utf16Be, 2));
    }

    let encoding = if bytes.len() >= 4 {
        match (bytes[0], bytes[1], bytes[2], bytes[3]) {
            (0, 0, 0, _) => Encoding::Utf32Be,
            (_, 0, 0, 0) => Encoding::Utf32Le,
            (0, _, 0, _) => Encoding::Utf16Be,
            (_, 0, _, 0) => Encoding::Utf16Le,
            _ => Encoding::Utf8,
        }
    } else {
        Encoding::Utf8
    };
    Ok((encoding, 0))
}

/// Decode `bytes` (with any BOM already stripped by the caller) into a
/// `String` according to `encoding`.
pub fn decode(bytes: &[u8], encoding: Encoding) -> Result<String, ParseErrorKind> {
    match encoding {
        Encoding::Utf8 => {
            std::str::from_utf8(bytes)
                .map(|s| s.to_string())
                .map_err(|_| ParseErrorKind::UnsupportedEncoding)
        }
        Encoding::Utf16Le | Encoding::Utf16Be => {
            if bytes.len() % 2 != 0 {
                return Err(ParseErrorKind::UnsupportedEncoding);
            }
            let units: Vec<u16> = bytes
                .chunks_exact(2)
                .map(|c| match encoding {
                    Encoding::Utf16Le => u16::from_le_bytes([c[0], c[1]]),
                    _ => u16::from_be_bytes([c[0], c[1]]),
                })
                .collect();
            char::decode_utf16(units)
                .collect::<Result<String, _>>()
                .map_err(|_| ParseErrorKind::UnsupportedEncoding)
        }
        Encoding::Utf32Le | Encoding::Utf32Be => {
            if bytes.len() % 4 != 0 {
                return Err(ParseErrorKind::UnsupportedEncoding);
            }
            let mut out = String::new();
            for c in bytes.chunks_exact(4) {
                let code = match encoding {
                    Encoding::Utf32Le => u32::from_le_bytes([c[0], c[1], c[2], c[3]]),
                    _ => u32::from_be_bytes([c[0], c[1], c[2], c[3]]),
                };
                out.push(char::from_u32(code).ok_or(ParseErrorKind::UnsupportedEncoding)?);
            }
            Ok(out)
        }
    }
}
