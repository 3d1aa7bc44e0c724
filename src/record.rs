//! Splitting input lines into an identifier and a payload.

use crate::utils::trim;

/// A single input line, split at the first delimiter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Record<'a> {
    /// Everything before the first delimiter. Whitespace directly before the delimiter is kept.
    pub identifier: &'a [u8],
    /// Everything after the first delimiter, with surrounding whitespace removed.
    pub payload: &'a [u8],
}

impl<'a> Record<'a> {
    /// Parses a raw line. The line is trimmed first, so a trailing newline (or `\r\n`) may be
    /// passed as-is. A line without the delimiter is all identifier and has an empty payload.
    pub fn parse(line: &'a [u8], delimiter: u8) -> Record<'a> {
        let line = trim(line);
        match line.iter().position(|&b| b == delimiter) {
            Some(i) => Record {
                identifier: &line[..i],
                payload: trim(&line[i + 1..]),
            },
            None => Record {
                identifier: line,
                payload: &[],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple() {
        let rec = Record::parse(b"42,hello world\n", b',');
        assert_eq!(rec.identifier, b"42");
        assert_eq!(rec.payload, b"hello world");
    }

    #[test]
    fn empty_line() {
        let rec = Record::parse(b"", b',');
        assert_eq!(rec.identifier, b"");
        assert_eq!(rec.payload, b"");
        assert!(rec.payload.is_empty());
    }

    #[test]
    fn no_delimiter() {
        let rec = Record::parse(b"  abc def  \r\n", b',');
        assert_eq!(rec.identifier, b"abc def");
        assert_eq!(rec.payload, b"");
    }

    #[test]
    fn only_first_delimiter_splits() {
        let rec = Record::parse(b"a,b,c", b',');
        assert_eq!(rec.identifier, b"a");
        assert_eq!(rec.payload, b"b,c");
    }

    #[test]
    fn payload_trimmed_identifier_not() {
        let rec = Record::parse(b"  id \t,   text here \t ", b',');
        assert_eq!(rec.identifier, b"id \t");
        assert_eq!(rec.payload, b"text here");
    }

    #[test]
    fn empty_identifier() {
        let rec = Record::parse(b",text", b',');
        assert_eq!(rec.identifier, b"");
        assert_eq!(rec.payload, b"text");
    }

    #[test]
    fn whitespace_payload() {
        let rec = Record::parse(b"7,   \t ", b',');
        assert_eq!(rec.identifier, b"7");
        assert!(rec.payload.is_empty());
    }

    #[test]
    fn other_delimiter() {
        let rec = Record::parse("x|世界,a".as_bytes(), b'|');
        assert_eq!(rec.identifier, b"x");
        assert_eq!(rec.payload, "世界,a".as_bytes());
    }
}
