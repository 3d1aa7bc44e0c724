//! Utility functions for working with raw bytes.

/// Returns whether the byte is whitespace, using the same set as C's `isspace` in the default
/// locale. Unlike `u8::is_ascii_whitespace`, this includes vertical tab (`0x0B`).
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Trims leading and trailing whitespace from a byte slice.
pub fn trim(bytes: &[u8]) -> &[u8] {
    trim_end(trim_start(bytes))
}

/// Trims leading whitespace from a byte slice.
pub fn trim_start(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&b| !is_space(b))
        .unwrap_or(bytes.len());
    &bytes[start..]
}

/// Trims trailing whitespace from a byte slice.
pub fn trim_end(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|&b| !is_space(b)).map_or(0, |i| i + 1);
    &bytes[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_tab_is_space() {
        assert!(is_space(0x0B));
        assert!(!0x0Bu8.is_ascii_whitespace());
    }

    #[test]
    fn trim_both_ends() {
        assert_eq!(trim(b" \t abc def \r\n"), b"abc def");
    }

    #[test]
    fn trim_all_whitespace() {
        assert_eq!(trim(b" \t\r\n\x0b\x0c"), b"");
        assert_eq!(trim(b""), b"");
    }

    #[test]
    fn non_ascii_bytes_are_not_space() {
        // U+3000 IDEOGRAPHIC SPACE is only trimmed by the segmenter, never here
        assert_eq!(trim("\u{3000}x\u{3000}".as_bytes()), "\u{3000}x\u{3000}".as_bytes());
    }
}
