use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing_subscriber::filter::LevelFilter;

use crate::pipeline;

/// Reads `identifier,text` records from standard input, and writes each record's text as
/// space-separated tokens. Runs of non-ASCII text are split into words using the given
/// dictionaries; ASCII text is copied as-is.
#[derive(Debug, Parser)]
#[command(name = "mixseg", version)]
pub struct Cli {
    /// Word dictionary, one word per line.
    #[arg(value_name = "WORD_DICT")]
    pub word_dict: PathBuf,
    /// Character dictionary, one `<char> <frequency>` pair per line.
    #[arg(value_name = "CHAR_DICT")]
    pub char_dict: PathBuf,
    /// Character separating the identifier from the text of each record.
    #[arg(short, long, value_name = "CHAR", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,
    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> pipeline::Config {
        pipeline::Config {
            delimiter: self.delimiter,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        &[b] if b.is_ascii() && !crate::utils::is_space(b) => Ok(b),
        _ => Err(format!(
            "expected a single ASCII non-whitespace character, found {s:?}"
        )),
    }
}
