pub mod cli;
pub mod pipeline;
pub mod record;
pub mod segment;
pub mod segmenter;
pub mod unicode;
pub mod utils;

use std::io::{self, BufWriter, IsTerminal};
use std::process;
use std::time::Instant;

use clap::{error::ErrorKind, Parser};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, fmt};

use crate::cli::Cli;
use crate::pipeline::Pipeline;
use crate::segmenter::{dictionary, Dictionary, MMSeg};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                // usage errors exit with 1, not clap's default of 2
                let _ = err.print();
                process::exit(1);
            }
        },
    };
    init_tracing(cli.log_level());

    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let start = Instant::now();
    let dictionary = Dictionary::load(&cli.word_dict, &cli.char_dict)?;
    info!(elapsed = ?start.elapsed(), "dictionaries ready");
    let segmenter = MMSeg::new(dictionary);

    let pipeline = Pipeline::new(&segmenter, cli.config());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = pipeline.run(stdin.lock(), BufWriter::new(stdout.lock()))?;
    info!(
        records = summary.records,
        segments = summary.segments,
        failures = summary.failures,
        elapsed = ?start.elapsed(),
        "done"
    );
    Ok(())
}

/// An error which ends the program.
#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("cannot load dictionaries: {0}")]
    Dictionary(#[from] dictionary::Error),
    #[error(transparent)]
    Pipeline(#[from] pipeline::Error),
}
