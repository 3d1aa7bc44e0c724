//! Splitting a payload into runs of a single script class.
//!
//! The class of a byte is decided by its high bit alone. For UTF-8 this puts every byte of a
//! multi-byte sequence in the `NonAscii` class, and every ASCII byte, whitespace included, in
//! the `Ascii` class. A run continues as long as bytes share the class of its first byte, so
//! `foo bar` is a single run, while a space always ends a non-ASCII run.

use crate::utils::{is_space, trim};

/// The script class of a byte.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScriptClass {
    /// High bit clear.
    Ascii,
    /// High bit set.
    NonAscii,
}

impl ScriptClass {
    /// Returns the class of the given byte.
    pub fn of(b: u8) -> ScriptClass {
        if b & 0x80 == 0 {
            ScriptClass::Ascii
        } else {
            ScriptClass::NonAscii
        }
    }
}

/// A maximal run of one script class, with surrounding whitespace removed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Segment<'a> {
    pub text: &'a [u8],
    pub class: ScriptClass,
}

impl<'a> Segment<'a> {
    /// Returns an iterator over the segments of `text`.
    pub fn split(text: &'a [u8]) -> Segments<'a> {
        Segments { text, pos: 0 }
    }
}

/// An `Iterator` over the `Segment`s of a byte string. Generated by `Segment::split`.
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    text: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        while self.pos < self.text.len() {
            // skip whitespace before the run
            let rest = &self.text[self.pos..];
            let start = self.pos + rest.iter().position(|&b| !is_space(b))?;
            let class = ScriptClass::of(self.text[start]);
            // find the next class change, or the end of the string
            let end = self.text[start..]
                .iter()
                .position(|&b| ScriptClass::of(b) != class)
                .map_or(self.text.len(), |i| start + i);
            self.pos = end;
            let text = trim(&self.text[start..end]);
            if !text.is_empty() {
                return Some(Segment { text, class });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(s: &[u8]) -> Vec<(&[u8], ScriptClass)> {
        Segment::split(s).map(|seg| (seg.text, seg.class)).collect()
    }

    use super::ScriptClass::*;

    #[test]
    fn byte_class() {
        assert_eq!(ScriptClass::of(b'a'), Ascii);
        assert_eq!(ScriptClass::of(b' '), Ascii);
        assert_eq!(ScriptClass::of(0x7F), Ascii);
        assert_eq!(ScriptClass::of(0x80), NonAscii);
        assert_eq!(ScriptClass::of(0xFF), NonAscii);
    }

    #[test]
    fn code_switching() {
        assert_eq!(
            split("hello世界bye".as_bytes()),
            vec![
                (&b"hello"[..], Ascii),
                ("世界".as_bytes(), NonAscii),
                (&b"bye"[..], Ascii),
            ]
        );
    }

    #[test]
    fn ascii_words_stay_together() {
        assert_eq!(split(b"foo bar  baz"), vec![(&b"foo bar  baz"[..], Ascii)]);
    }

    #[test]
    fn space_ends_non_ascii_run() {
        assert_eq!(
            split("世界 你好".as_bytes()),
            vec![("世界".as_bytes(), NonAscii), ("你好".as_bytes(), NonAscii)]
        );
    }

    #[test]
    fn ascii_run_trimmed_before_non_ascii() {
        assert_eq!(
            split("see 世界 now".as_bytes()),
            vec![
                (&b"see"[..], Ascii),
                ("世界".as_bytes(), NonAscii),
                (&b"now"[..], Ascii),
            ]
        );
    }

    #[test]
    fn empty_and_whitespace() {
        assert!(split(b"").is_empty());
        assert!(split(b"  \t \r ").is_empty());
    }

    #[test]
    fn partial_word_split() {
        // the accented letter is a separate run, since its bytes have the high bit set
        assert_eq!(
            split("café au lait".as_bytes()),
            vec![
                (&b"caf"[..], Ascii),
                ("é".as_bytes(), NonAscii),
                (&b"au lait"[..], Ascii),
            ]
        );
    }

    #[test]
    fn invalid_utf8_is_non_ascii() {
        assert_eq!(
            split(b"abc\xff\xfedef"),
            vec![
                (&b"abc"[..], Ascii),
                (&b"\xff\xfe"[..], NonAscii),
                (&b"def"[..], Ascii),
            ]
        );
    }
}
