//! Count the words in a transcript piped to STDIN
//!
//! Words are counted after normalizing and gluing spelled-out letters
//! together, so `P O G` counts once. With `--words` every word is printed on
//! its own line instead, in order.

// argument parsing
#[macro_use] extern crate clap;
// logging
#[macro_use] extern crate log;
extern crate env_logger;
// lastly, this library
extern crate pogcount;

use std::io::{self, Read};
use std::process;

use pogcount::errors::*;
use pogcount::normalize::normalize;
use pogcount::combine::{CombineConfig, combine_with};

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
        .arg_from_usage("-d, --delimiters=[chars] 'characters separating words (default: whitespace and punctuation)'")
        .arg_from_usage("--flush-trailing 'also count letters still being spelled out when the text ends'")
        .arg_from_usage("-w, --words 'print the words, one per line, instead of counting them'")
        .get_matches();

    let mut config = CombineConfig::default();
    if let Some(delimiters) = args.value_of("delimiters") {
        config.delimiters = delimiters.chars().collect();
    }
    config.flush_trailing = args.is_present("flush-trailing");

    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw)?;
    let words = combine_with(&normalize(&raw), &config);
    info!("Read {} bytes, found {} words", raw.len(), words.len());

    if args.is_present("words") {
        for word in &words {
            println!("{}", word);
        }
    } else {
        println!("{}", words.len());
    }
    Ok(())
}
