//! Reading records, splitting them into segments, and writing the joined tokens.
//!
//! Every input line produces exactly one output line, `identifier,token token ...`. ASCII
//! segments are copied as a single token, and non-ASCII segments are passed through a
//! [`Segmenter`]. A non-ASCII segment which is not valid UTF-8 produces no tokens and is
//! reported as a [`SegmentError`], but the rest of the record is still written.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use tracing::{error, trace};

use crate::{
    record::Record,
    segment::{ScriptClass, Segment},
    segmenter::{self, DecodeError, Segmenter},
};

/// Settings for a `Pipeline`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// The byte separating the identifier from the text of a record.
    pub delimiter: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config { delimiter: b',' }
    }
}

/// Counts collected while running a `Pipeline`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// The number of records (lines) processed.
    pub records: usize,
    /// The number of segments found.
    pub segments: usize,
    /// The number of segments which could not be decoded.
    pub failures: usize,
}

/// The result of processing a single line.
#[derive(Debug, Default)]
pub struct Processed {
    /// The number of segments found.
    pub segments: usize,
    /// The segments which could not be decoded.
    pub errors: Vec<SegmentError>,
}

/// A non-ASCII segment which could not be decoded.
#[derive(Debug, thiserror::Error)]
#[error(
    "cannot decode segment ({}): {}",
    String::from_utf8_lossy(.identifier),
    .segment.escape_ascii()
)]
pub struct SegmentError {
    /// The identifier of the record containing the segment.
    pub identifier: Vec<u8>,
    /// The raw bytes of the segment. Shown escaped, e.g. `\xff`.
    pub segment: Vec<u8>,
    #[source]
    pub source: DecodeError,
}

pub struct Pipeline<'s, S: ?Sized> {
    segmenter: &'s S,
    config: Config,
}

impl<'s, S: Segmenter + ?Sized> Pipeline<'s, S> {
    pub fn new(segmenter: &'s S, config: Config) -> Pipeline<'s, S> {
        Pipeline { segmenter, config }
    }

    /// Processes every line of `input`, writing one line to `output` for each.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<Summary, Error> {
        let mut summary = Summary::default();
        let mut buffer = Vec::new();
        for line in input.split(b'\n') {
            let line = line?;
            buffer.clear();
            let processed = self.process_line(&line, &mut buffer);
            for err in &processed.errors {
                error!(valid_up_to = err.source.valid_up_to(), "{err}");
            }
            output.write_all(&buffer)?;
            summary.records += 1;
            summary.segments += processed.segments;
            summary.failures += processed.errors.len();
            trace!(
                record = summary.records,
                segments = processed.segments,
                "processed record"
            );
        }
        output.flush()?;
        Ok(summary)
    }

    /// Processes a single line, appending the output line (including its terminator) to `out`.
    pub fn process_line(&self, line: &[u8], out: &mut Vec<u8>) -> Processed {
        let record = Record::parse(line, self.config.delimiter);
        out.extend_from_slice(record.identifier);
        out.push(self.config.delimiter);
        let mut processed = Processed::default();
        let mut first = true;
        for segment in Segment::split(record.payload) {
            processed.segments += 1;
            match self.tokens(segment) {
                Ok(tokens) => {
                    for token in tokens {
                        if !first {
                            out.push(b' ');
                        }
                        first = false;
                        out.extend_from_slice(&token);
                    }
                }
                Err(source) => processed.errors.push(SegmentError {
                    identifier: record.identifier.to_vec(),
                    segment: segment.text.to_vec(),
                    source,
                }),
            }
        }
        out.push(b'\n');
        processed
    }

    /// Produces the output tokens of a single segment.
    fn tokens<'a>(&self, segment: Segment<'a>) -> Result<Vec<Cow<'a, [u8]>>, DecodeError> {
        match segment.class {
            ScriptClass::Ascii => Ok(vec![Cow::Borrowed(segment.text)]),
            ScriptClass::NonAscii => {
                let chars = segmenter::from_utf8(segment.text)?;
                Ok(self
                    .segmenter
                    .segment(&chars)
                    .into_iter()
                    .map(|word| Cow::Owned(segmenter::to_utf8(word).into_bytes()))
                    .collect())
            }
        }
    }
}

/// An error which stops a `Pipeline`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The specified IO error occurred.
    #[error(transparent)]
    IO(#[from] io::Error),
}
