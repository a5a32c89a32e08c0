//! Measure and rank a whole directory of transcripts
//!
//! Each transcript is independent, so they are measured in parallel (one
//! rayon task per transcript). A transcript that can't be measured is
//! skipped with its reason and never stops the rest.
use std::cmp::Ordering;
use std::path::Path;
use std::str::FromStr;
use rayon::prelude::*;
use combine::CombineConfig;
use errors::*;
use keywords::KeywordMatcher;
use metadata::TranscriptMeta;
use stats::CorpusStats;
use transcript::Transcript;

/// What the ranking is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Highest pog density first
    Density,
    /// Most pogs per minute first
    PerMinute,
    /// Oldest stream first
    Date,
}

impl FromStr for SortKey {
    type Err = Error;
    fn from_str(s: &str) -> Result<SortKey> {
        match s {
            "density" => Ok(SortKey::Density),
            "per-minute" => Ok(SortKey::PerMinute),
            "date" => Ok(SortKey::Date),
            other => Err(Error::Other(format!(
                "Unknown sort order {:?}, expected density, per-minute or date", other))),
        }
    }
}

impl Default for SortKey {
    fn default() -> Self { SortKey::Density }
}

/// A transcript left out of the ranking, and why
#[derive(Debug)]
pub struct Skipped {
    pub meta: TranscriptMeta,
    pub reason: Error,
}

#[derive(Debug)]
pub struct CorpusReport {
    /// Measured transcripts, best first
    pub ranked: Vec<Transcript>,
    pub skipped: Vec<Skipped>,
    /// None when nothing could be measured
    pub totals: Option<CorpusStats>,
}

fn compare(key: SortKey, a: &Transcript, b: &Transcript) -> Ordering {
    let primary = match key {
        SortKey::Density => b.stats.pog_density.total_cmp(&a.stats.pog_density),
        SortKey::PerMinute => b.stats.pog_per_minute.total_cmp(&a.stats.pog_per_minute),
        SortKey::Date => a.meta.stream_date.cmp(&b.meta.stream_date),
    };
    primary.then_with(|| a.meta.title.cmp(&b.meta.title))
}

/// Measure every row's transcript, resolved against `dir`, and rank them by `key`.
pub fn process_corpus<P, M>(dir: P, rows: Vec<TranscriptMeta>, config: &CombineConfig, matcher: &M, key: SortKey) -> CorpusReport
    where P: AsRef<Path>, M: KeywordMatcher + Sync + ?Sized {
    let dir = dir.as_ref();
    info!("Measuring {} transcripts in {}", rows.len(), dir.display());

    let results: Vec<::std::result::Result<Transcript, Skipped>> = rows.into_par_iter()
        .map(|meta| {
            let path = dir.join(&meta.text_file);
            Transcript::load(&path, meta.clone(), config, matcher)
                .map_err(|reason| Skipped { meta: meta, reason: reason })
        })
        .collect();

    let mut ranked = vec![];
    let mut skipped = vec![];
    for result in results {
        match result {
            Ok(transcript) => ranked.push(transcript),
            Err(skip) => {
                warn!("Skipping {}: {}", skip.meta.text_file, skip.reason);
                skipped.push(skip);
            }
        }
    }
    ranked.sort_by(|a, b| compare(key, a, b));

    let totals = if ranked.is_empty() {
        None
    } else {
        CorpusStats::from_transcripts(ranked.iter().map(|t| (&t.stats, t.meta.runtime_minutes))).ok()
    };
    match totals {
        Some(ref totals) => info!("Measured {} transcripts ({} skipped): {} words, {} pogs",
            totals.transcripts, skipped.len(), totals.word_count, totals.pog_count),
        None => warn!("No transcript could be measured ({} skipped)", skipped.len()),
    }

    CorpusReport {
        ranked: ranked,
        skipped: skipped,
        totals: totals,
    }
}
