//! Find the pog-like words in a word sequence
//!
//! Matching sits behind `KeywordMatcher` so the statistics never care how a
//! word was judged. `RegexMatcher` is the stock implementation: a set of
//! patterns, each of which must match a whole word.
use regex::RegexSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use errors::*;
use farm::{FarmMap, new_farm};

/// Matched word -> number of times it occurs
pub type PogCountMapping = FarmMap<String, usize>;

/// Patterns used when no keyword file is given
pub const DEFAULT_PATTERNS: &[&str] = &[
    r"p+o+g+",
    r"p+o+g+(?:g?ers|gies|gie|gy|u|champs?|s)",
];

pub trait KeywordMatcher {
    /// Tally every word that counts as a keyword, keyed by the word itself.
    fn count(&self, words: &[String]) -> PogCountMapping;
}

/// Whole-word regular expression matcher
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    patterns: RegexSet,
}

impl RegexMatcher {
    /// Build a matcher from unanchored patterns; each one is anchored to the full word.
    pub fn new<I, S>(patterns: I) -> Result<Self>
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        let anchored: Vec<String> = patterns.into_iter()
            .map(|p| format!("^(?:{})$", p.as_ref()))
            .collect();
        Ok(RegexMatcher { patterns: RegexSet::new(&anchored)? })
    }

    /// Read one pattern per line. Blank lines and `#` comments are skipped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut patterns = vec![];
        for line in BufReader::new(File::open(path.as_ref())?).lines() {
            let line = line?;
            let line = line.trim();
            if !line.is_empty() && !line.starts_with('#') {
                patterns.push(line.to_string());
            }
        }
        if patterns.is_empty() {
            return Err(Error::Other(format!(
                "The keyword file {} has no patterns in it.", path.as_ref().display())));
        }
        debug!("Loaded {} keyword patterns from {}", patterns.len(), path.as_ref().display());
        RegexMatcher::new(patterns)
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.patterns.is_match(word)
    }
}

impl Default for RegexMatcher {
    fn default() -> Self {
        RegexMatcher::new(DEFAULT_PATTERNS).expect("default keyword patterns are valid")
    }
}

impl KeywordMatcher for RegexMatcher {
    fn count(&self, words: &[String]) -> PogCountMapping {
        let mut tally = new_farm();
        for word in words.iter().filter(|w| self.is_keyword(w)) {
            *tally.entry(word.clone()).or_insert(0) += 1;
        }
        tally
    }
}
