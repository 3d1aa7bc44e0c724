//! Conversion between UTF-8 bytes and code points.

use std::str::{self, Utf8Error};

/// A byte string that is not valid UTF-8.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid UTF-8 after {} valid bytes", .0.valid_up_to())]
pub struct DecodeError(#[from] Utf8Error);

impl DecodeError {
    /// The length of the valid prefix of the input.
    pub fn valid_up_to(&self) -> usize {
        self.0.valid_up_to()
    }
}

/// Decodes UTF-8 bytes into code points.
pub fn from_utf8(bytes: &[u8]) -> Result<Vec<char>, DecodeError> {
    Ok(str::from_utf8(bytes)?.chars().collect())
}

/// Encodes code points as UTF-8.
pub fn to_utf8(chars: &[char]) -> String {
    chars.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use utf32_lit::utf32;

    #[test]
    fn decode() {
        assert_eq!(from_utf8("世界ab".as_bytes()), Ok(utf32!("世界ab").to_vec()));
    }

    #[test]
    fn encode() {
        assert_eq!(to_utf8(utf32!("研究生命")), "研究生命");
        assert_eq!(to_utf8(&[]), "");
    }

    #[test]
    fn round_trip() {
        for s in ["", "ascii", "世界", "한국어", "ｆｕｌｌ　ｗｉｄｔｈ", "e\u{301}", "🦀"] {
            let chars = from_utf8(s.as_bytes()).unwrap();
            assert_eq!(to_utf8(&chars), s);
        }
    }

    #[test]
    fn invalid() {
        let err = from_utf8(b"\xe4\xb8\x96\xff").unwrap_err();
        assert_eq!(err.valid_up_to(), 3);
        // truncated sequence
        assert!(from_utf8(b"\xe4\xb8").is_err());
        // lone continuation byte
        assert!(from_utf8(b"\x80").is_err());
    }
}
