//! Dictionary-based segmentation using the MMSEG rules.
//!
//! Text is first split into runs by character class (see [`CharKind`]): whitespace is dropped,
//! punctuation stands alone, and cased letters and numbers are kept together. Runs of other
//! letters (ideographs, kana, hangul...) are then split into words. At each position, every
//! chunk of up to three consecutive words is considered, and the best chunk is chosen by the
//! following rules, in order:
//!
//! 1. The chunk with the largest total length.
//! 2. The chunk with the largest average word length, i.e. the fewest words.
//! 3. The chunk with the smallest variance of word lengths.
//! 4. The chunk with the largest sum of the log-frequency of its one-character words.
//!
//! The first word of the chosen chunk is taken, and matching continues after it.

use std::cmp::Reverse;

use crate::unicode::{CharKind, ZERO_WIDTH_JOINER};

use super::{Dictionary, Segmenter};

/// An MMSEG segmenter over a fixed dictionary.
#[derive(Debug)]
pub struct MMSeg {
    dictionary: Dictionary,
}

impl MMSeg {
    pub fn new(dictionary: Dictionary) -> MMSeg {
        MMSeg { dictionary }
    }

    /// Splits a run of `CharKind::Word` characters into dictionary words.
    fn segment_run<'t>(&self, text: &'t [char], words: &mut Vec<&'t [char]>) {
        let mut pos = 0;
        while pos < text.len() {
            let len = self
                .best_chunk(text, pos)
                .map_or_else(|| unit_len(text, pos), |chunk| chunk.lens[0]);
            words.push(&text[pos..pos + len]);
            pos += len;
        }
    }

    /// Returns the lengths of the words starting at `pos`, longest first. A single character,
    /// together with any modifiers following it, is always a word.
    fn words_at(&self, text: &[char], pos: usize) -> Vec<usize> {
        let unit = unit_len(text, pos);
        let max = self.dictionary.max_word_len().min(text.len() - pos);
        let mut lens = (unit + 1..=max)
            .rev()
            .filter(|&len| {
                is_boundary(text, pos + len) && self.dictionary.contains(&text[pos..pos + len])
            })
            .collect::<Vec<_>>();
        lens.push(unit);
        lens
    }

    /// Returns every chunk of up to three words starting at `pos`. Chunks with a longer first
    /// word come first.
    fn chunks(&self, text: &[char], pos: usize) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        for a in self.words_at(text, pos) {
            let pos = pos + a;
            if pos == text.len() {
                chunks.push(Chunk::new(&[a]));
                continue;
            }
            for b in self.words_at(text, pos) {
                let pos = pos + b;
                if pos == text.len() {
                    chunks.push(Chunk::new(&[a, b]));
                    continue;
                }
                for c in self.words_at(text, pos) {
                    chunks.push(Chunk::new(&[a, b, c]));
                }
            }
        }
        chunks
    }

    fn best_chunk(&self, text: &[char], pos: usize) -> Option<Chunk> {
        let mut chunks = self.chunks(text, pos);
        // maximum matching
        retain_best(&mut chunks, Chunk::len);
        // largest average word length; all remaining chunks have the same length
        retain_best(&mut chunks, |chunk| Reverse(chunk.count));
        // smallest variance; with equal length and word count, this is the smallest sum of
        // squares
        retain_best(&mut chunks, |chunk| Reverse(chunk.sum_of_squares()));
        // largest degree of morphemic freedom
        chunks
            .into_iter()
            .map(|chunk| (chunk.freedom(text, pos, &self.dictionary), chunk))
            .reduce(|best, next| if next.0 > best.0 { next } else { best })
            .map(|(_, chunk)| chunk)
    }
}

impl Segmenter for MMSeg {
    fn segment<'t>(&self, text: &'t [char]) -> Vec<&'t [char]> {
        let mut words = Vec::new();
        for (kind, run) in Runs::new(text) {
            match kind {
                CharKind::Word => self.segment_run(run, &mut words),
                _ => words.push(run),
            }
        }
        words
    }
}

/// Up to three consecutive candidate words, stored as lengths.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Chunk {
    lens: [usize; 3],
    count: usize,
}

impl Chunk {
    fn new(words: &[usize]) -> Chunk {
        let mut lens = [0; 3];
        lens[..words.len()].copy_from_slice(words);
        Chunk {
            lens,
            count: words.len(),
        }
    }

    fn words(&self) -> &[usize] {
        &self.lens[..self.count]
    }

    fn len(&self) -> usize {
        self.words().iter().sum()
    }

    fn sum_of_squares(&self) -> usize {
        self.words().iter().map(|len| len * len).sum()
    }

    /// The sum of the log-frequencies of the one-character words of this chunk, which starts at
    /// `pos` in `text`.
    fn freedom(&self, text: &[char], pos: usize, dictionary: &Dictionary) -> f64 {
        let mut start = pos;
        let mut freedom = 0.0;
        for &len in self.words() {
            let freq = dictionary.char_freq(text[start]);
            if len == unit_len(text, start) && freq > 0 {
                freedom += f64::from(freq).ln();
            }
            start += len;
        }
        freedom
    }
}

/// Keeps only the chunks with the greatest key.
fn retain_best<K: Ord>(chunks: &mut Vec<Chunk>, key: impl Fn(&Chunk) -> K) {
    if let Some(best) = chunks.iter().map(&key).max() {
        chunks.retain(|chunk| key(chunk) == best);
    }
}

/// The length of the character at `pos` together with the modifiers following it. A zero
/// width joiner also pulls in the character after it.
fn unit_len(text: &[char], pos: usize) -> usize {
    let mut end = pos + 1;
    while end < text.len() && !is_boundary(text, end) {
        end += 1;
    }
    end - pos
}

/// Returns whether a word may end before `pos`, i.e. `pos` is the end of the text, or is not a
/// modifier and does not follow a zero width joiner.
fn is_boundary(text: &[char], pos: usize) -> bool {
    match text.get(pos) {
        None => true,
        Some(&c) => {
            CharKind::of(c) != CharKind::Modifier
                && (pos == 0 || text[pos - 1] != ZERO_WIDTH_JOINER)
        }
    }
}

/// An `Iterator` over the runs of characters of the same `CharKind`, skipping whitespace.
struct Runs<'t> {
    text: &'t [char],
    pos: usize,
}

impl<'t> Runs<'t> {
    fn new(text: &'t [char]) -> Runs<'t> {
        Runs { text, pos: 0 }
    }
}

impl<'t> Iterator for Runs<'t> {
    type Item = (CharKind, &'t [char]);

    fn next(&mut self) -> Option<(CharKind, &'t [char])> {
        let text = self.text;
        let start = self.pos
            + text[self.pos..]
                .iter()
                .position(|&c| CharKind::of(c) != CharKind::Space)?;
        // a modifier with nothing to attach to stands alone
        let kind = match CharKind::of(text[start]) {
            CharKind::Modifier => CharKind::Punct,
            kind => kind,
        };
        let mut end = start + 1;
        while let Some(&c) = text.get(end) {
            match CharKind::of(c) {
                CharKind::Modifier => {}
                CharKind::Space => break,
                _ if text[end - 1] == ZERO_WIDTH_JOINER => {}
                next if next == kind && kind != CharKind::Punct => {}
                _ => break,
            }
            end += 1;
        }
        self.pos = end;
        Some((kind, &text[start..end]))
    }
}
