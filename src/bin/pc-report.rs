//! Rank a corpus of stream transcripts by how much they say "pog"
//!
//! Reads the metadata table (one row per video) and the transcript directory,
//! measures every transcript in parallel and prints a markdown report: the
//! ranking, corpus totals, skipped transcripts and one section per video.

// argument parsing
#[macro_use] extern crate clap;
// logging
#[macro_use] extern crate log;
extern crate env_logger;
// lastly, this library
extern crate pogcount;

use std::process;

use pogcount::errors::*;
use pogcount::combine::CombineConfig;
use pogcount::corpus::{SortKey, process_corpus};
use pogcount::keywords::RegexMatcher;
use pogcount::metadata;
use pogcount::report;

pub fn main() {
    // Main can't return a Result, and the ? operator needs the enclosing function to return Result
    if let Err(err) = inner_main() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
pub fn inner_main() -> Result<()> {
    env_logger::init();
    let args = app_from_crate!()
        .arg_from_usage("<metadata> 'comma separated table with textFile, runtimeInMinutes, link and videoName columns'")
        .arg_from_usage("<transcripts> 'directory holding the transcript text files'")
        .arg_from_usage("-k, --keywords=[file] 'keyword patterns, one regex per line (default: pog and friends)'")
        .arg_from_usage("-s, --sort=[key] 'rank by density, per-minute or date (default: density)'")
        .arg_from_usage("-d, --delimiters=[chars] 'characters separating words (default: whitespace and punctuation)'")
        .arg_from_usage("--flush-trailing 'also count letters still being spelled out when a transcript ends'")
        .get_matches();

    let mut config = CombineConfig::default();
    if let Some(delimiters) = args.value_of("delimiters") {
        config.delimiters = delimiters.chars().collect();
    }
    config.flush_trailing = args.is_present("flush-trailing");

    let key = match args.value_of("sort") {
        Some(key) => key.parse::<SortKey>()?,
        None => SortKey::default(),
    };
    let matcher = match args.value_of("keywords") {
        Some(path) => RegexMatcher::from_file(path)?,
        None => RegexMatcher::default(),
    };

    // Both are required arguments, clap has already checked for them
    let rows = metadata::read_table(args.value_of("metadata").unwrap_or_default())?;
    info!("Loaded {} metadata rows", rows.len());
    let corpus = process_corpus(
        args.value_of("transcripts").unwrap_or_default(), rows, &config, &matcher, key);

    print!("{}", report::render(&corpus, key));
    Ok(())
}
