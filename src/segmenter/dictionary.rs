//! Word and character dictionaries.
//!
//! Both files are plain text, one entry per line. Blank lines and lines starting with `#` are
//! ignored.
//!
//! - The word dictionary has one word per line. If a line has several whitespace-separated
//!   columns (for example a length or frequency column), the last column is the word.
//! - The character dictionary has a character and its frequency per line, e.g. `的 12345`.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use tracing::{debug, info};

pub type Word = Vec<char>;

/// A set of words, bucketed by length.
#[derive(Clone, Debug, Default)]
pub struct WordMap {
    /// A list of sets, sorted by word length -- words of length 1 will be found in `sets[0]`,
    /// words of length 2 will be found in `sets[1]`, and so on.
    sets: Vec<IndexSet<Word>>,
}

impl WordMap {
    /// Creates a new, empty `WordMap`
    pub fn new() -> WordMap {
        WordMap { sets: Vec::new() }
    }

    /// Adds a word to the map, returning whether it was newly inserted. Empty words are ignored.
    pub fn insert(&mut self, word: Word) -> bool {
        if word.is_empty() {
            return false;
        }
        self.pad(word.len());
        self.sets[word.len() - 1].insert(word)
    }

    /// Returns whether the map contains the given word.
    pub fn contains(&self, word: &[char]) -> bool {
        match word.len().checked_sub(1).and_then(|i| self.sets.get(i)) {
            Some(set) => set.contains(word),
            None => false,
        }
    }

    /// The length of the longest word in the map.
    pub fn max_len(&self) -> usize {
        self.sets.len()
    }

    /// The number of words in the map.
    pub fn len(&self) -> usize {
        self.sets.iter().map(IndexSet::len).sum()
    }

    /// Pads the internal vector with empty sets to a given length.
    fn pad(&mut self, len: usize) {
        if self.sets.len() < len {
            self.sets.resize_with(len, IndexSet::new);
        }
    }
}

/// The dictionaries used for segmentation. Loaded once, and only read afterwards.
#[derive(derivative::Derivative, Default)]
#[derivative(Debug)]
pub struct Dictionary {
    #[derivative(Debug(format_with = "fmt_word_count"))]
    words: WordMap,
    #[derivative(Debug(format_with = "fmt_char_count"))]
    char_freqs: HashMap<char, u32>,
}

impl Dictionary {
    /// Creates an empty dictionary, in which every character is its own word.
    pub fn new() -> Dictionary {
        Dictionary {
            words: WordMap::new(),
            char_freqs: HashMap::new(),
        }
    }

    /// Loads a word dictionary and a character dictionary from the given paths.
    pub fn load(word_path: impl AsRef<Path>, char_path: impl AsRef<Path>) -> Result<Self, Error> {
        let word_path = word_path.as_ref();
        let char_path = char_path.as_ref();
        let mut dict = Dictionary::new();
        dict.read_words(open(word_path)?, word_path)?;
        dict.read_chars(open(char_path)?, char_path)?;
        info!(
            words = dict.words.len(),
            chars = dict.char_freqs.len(),
            max_word_len = dict.words.max_len(),
            "loaded dictionaries"
        );
        Ok(dict)
    }

    /// Reads words from `reader`. `path` is only used for error messages.
    pub fn read_words(&mut self, reader: impl BufRead, path: &Path) -> Result<(), Error> {
        for (line, word) in entries(reader, path) {
            let word = word?;
            // the word is the last column; any earlier columns are ignored
            if let Some(word) = word.split_whitespace().last() {
                if !self.words.insert(word.chars().collect()) {
                    debug!(path = %path.display(), line, word, "duplicate word");
                }
            }
        }
        Ok(())
    }

    /// Reads character frequencies from `reader`. `path` is only used for error messages.
    pub fn read_chars(&mut self, reader: impl BufRead, path: &Path) -> Result<(), Error> {
        for (line, entry) in entries(reader, path) {
            let entry = entry?;
            let (c, freq) = parse_char_entry(&entry).map_err(|reason| Error::Parse {
                path: path.to_owned(),
                line,
                reason,
            })?;
            self.insert_char(c, freq);
        }
        Ok(())
    }

    /// Adds a single word.
    pub fn insert_word(&mut self, word: &str) -> bool {
        self.words.insert(word.chars().collect())
    }

    /// Sets the frequency of a single character.
    pub fn insert_char(&mut self, c: char, freq: u32) {
        self.char_freqs.insert(c, freq);
    }

    /// Returns whether `word` is a dictionary word.
    pub fn contains(&self, word: &[char]) -> bool {
        self.words.contains(word)
    }

    /// The length of the longest dictionary word.
    pub fn max_word_len(&self) -> usize {
        self.words.max_len()
    }

    /// The frequency of a character, or 0 if it is not in the character dictionary.
    pub fn char_freq(&self, c: char) -> u32 {
        self.char_freqs.get(&c).copied().unwrap_or(0)
    }
}

fn fmt_word_count(words: &WordMap, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "<{} entries>", words.len())
}

fn fmt_char_count(chars: &HashMap<char, u32>, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "<{} entries>", chars.len())
}

fn open(path: &Path) -> Result<BufReader<File>, Error> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| Error::IO {
            path: path.to_owned(),
            source,
        })
}

/// Iterates over the non-blank, non-comment lines of `reader`, with their 1-based line numbers.
fn entries(
    reader: impl BufRead,
    path: &Path,
) -> impl Iterator<Item = (usize, Result<String, Error>)> {
    let path = path.to_owned();
    reader
        .lines()
        .enumerate()
        .map(move |(i, line)| {
            let line = line.map_err(|source| Error::IO {
                path: path.clone(),
                source,
            });
            (i + 1, line)
        })
        .filter(|(_, line)| match line {
            Ok(line) => {
                let line = line.trim();
                !line.is_empty() && !line.starts_with('#')
            }
            Err(_) => true,
        })
}

fn parse_char_entry(entry: &str) -> Result<(char, u32), ParseError> {
    let mut fields = entry.split_whitespace();
    let symbol = fields.next().unwrap_or_default();
    let mut chars = symbol.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(ParseError::NotAChar(symbol.to_owned())),
    };
    let freq = fields.next().ok_or(ParseError::MissingFrequency)?;
    let freq = freq
        .parse()
        .map_err(|_| ParseError::InvalidFrequency(freq.to_owned()))?;
    if let Some(extra) = fields.next() {
        return Err(ParseError::UnexpectedField(extra.to_owned()));
    }
    Ok((c, freq))
}

/// An error encountered while loading a dictionary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be opened or read.
    #[error("cannot read {}: {source}", .path.display())]
    IO { path: PathBuf, source: io::Error },
    /// A line of the character dictionary is malformed.
    #[error("{}:{line}: {reason}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        reason: ParseError,
    },
}

/// The reason a dictionary line could not be parsed.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("expected a single character, found {0:?}")]
    NotAChar(String),
    #[error("missing frequency")]
    MissingFrequency,
    #[error("invalid frequency {0:?}")]
    InvalidFrequency(String),
    #[error("unexpected field {0:?}")]
    UnexpectedField(String),
}
