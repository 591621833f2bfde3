//! Best-effort byte-to-text conversion
//!
//! External encoders on localized Windows installs emit GBK console output, so
//! UTF-8 alone is not enough to read their diagnostics.

use crate::error::DecodeError;
use encoding_rs::GBK;

/// Decode raw bytes as UTF-8, falling back to GBK.
///
/// Both decodes are strict: a GBK decode that would need replacement
/// characters counts as a failure, and the error propagates.
pub fn decode_bytes(bytes: &[u8]) -> Result<String, DecodeError> {
    if let Ok(s) = std::str::from_utf8(bytes) {
        return Ok(s.to_string());
    }

    GBK.decode_without_bom_handling_and_without_replacement(bytes)
        .map(|s| s.into_owned())
        .ok_or(DecodeError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8_passes_through() {
        let input = "ffmpeg version 6.0 版本".as_bytes();
        assert_eq!(decode_bytes(input).unwrap(), "ffmpeg version 6.0 版本");
    }

    #[test]
    fn test_gbk_fallback() {
        // "中文" in GBK, invalid as UTF-8
        let gbk = [0xd6, 0xd0, 0xce, 0xc4];
        assert_eq!(decode_bytes(&gbk).unwrap(), "中文");
    }

    #[test]
    fn test_invalid_in_both_encodings() {
        // 0x81 0x30: GBK lead byte with an invalid trail, also invalid UTF-8
        let junk = [0xff, 0xff, 0x81, 0x30];
        assert!(decode_bytes(&junk).is_err());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode_bytes(b"").unwrap(), "");
    }
}
