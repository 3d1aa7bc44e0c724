//! Word segmentation of non-ASCII text.

pub mod codec;
pub mod dictionary;
pub mod mmseg;

pub use self::codec::{from_utf8, to_utf8, DecodeError};
pub use self::dictionary::Dictionary;
pub use self::mmseg::MMSeg;

/// Splits a sequence of code points into words.
pub trait Segmenter {
    /// Segments `text`. The returned words are slices of `text`, in order. Characters which are
    /// not part of any word (such as whitespace) may be left out. The result must only depend on
    /// `text` and the state the segmenter was built with.
    fn segment<'t>(&self, text: &'t [char]) -> Vec<&'t [char]>;
}
