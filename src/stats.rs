//! Keyword density and rate for one transcript, and totals for a corpus
use std::fmt;
use errors::*;
use keywords::PogCountMapping;

/// Statistics of one transcript, computed once and never changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranscriptStats {
    pub word_count: usize,
    /// Sum of all keyword counts
    pub pog_count: usize,
    /// pog_count / word_count
    pub pog_density: f64,
    /// pog_count / runtime in minutes
    pub pog_per_minute: f64,
}

/// Combine the word sequence, the keyword tally and the runtime into statistics.
///
/// Fails with `DivisionByZero` when there are no words or no runtime.
pub fn aggregate(words: &[String], pogs: &PogCountMapping, runtime_minutes: u32) -> Result<TranscriptStats> {
    let word_count = words.len();
    let pog_count: usize = pogs.values().sum();
    if word_count == 0 {
        return Err(Error::DivisionByZero("word count"));
    }
    if runtime_minutes == 0 {
        return Err(Error::DivisionByZero("runtime"));
    }
    Ok(TranscriptStats {
        word_count: word_count,
        pog_count: pog_count,
        pog_density: pog_count as f64 / word_count as f64,
        pog_per_minute: pog_count as f64 / runtime_minutes as f64,
    })
}

impl fmt::Display for TranscriptStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} words, {} pogs, density {:.5}, {:.3} per minute",
            self.word_count, self.pog_count, self.pog_density, self.pog_per_minute)
    }
}

/// Totals over every transcript that could be measured
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorpusStats {
    pub transcripts: usize,
    pub word_count: usize,
    pub pog_count: usize,
    pub runtime_minutes: u64,
    pub pog_density: f64,
    pub pog_per_minute: f64,
}

impl CorpusStats {
    /// Sum up `(stats, runtime in minutes)` pairs.
    ///
    /// Ratios are over the sums, not means of the per-transcript ratios.
    pub fn from_transcripts<'a, I>(items: I) -> Result<CorpusStats>
        where I: IntoIterator<Item=(&'a TranscriptStats, u32)> {
        let mut transcripts = 0;
        let mut word_count = 0;
        let mut pog_count = 0;
        let mut runtime_minutes = 0u64;
        for (stats, runtime) in items {
            transcripts += 1;
            word_count += stats.word_count;
            pog_count += stats.pog_count;
            runtime_minutes += runtime as u64;
        }
        if word_count == 0 {
            return Err(Error::DivisionByZero("word count"));
        }
        if runtime_minutes == 0 {
            return Err(Error::DivisionByZero("runtime"));
        }
        Ok(CorpusStats {
            transcripts: transcripts,
            word_count: word_count,
            pog_count: pog_count,
            runtime_minutes: runtime_minutes,
            pog_density: pog_count as f64 / word_count as f64,
            pog_per_minute: pog_count as f64 / runtime_minutes as f64,
        })
    }
}
