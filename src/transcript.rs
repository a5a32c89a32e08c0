//! One measured transcript
use std::fs::File;
use std::io::Read;
use std::path::Path;
use combine::{CombineConfig, combine_with};
use errors::*;
use keywords::{KeywordMatcher, PogCountMapping};
use metadata::TranscriptMeta;
use normalize::normalize;
use stats::{TranscriptStats, aggregate};

/// A transcript after normalizing, combining, matching and aggregating
#[derive(Debug, Clone)]
pub struct Transcript {
    pub meta: TranscriptMeta,
    pub words: Vec<String>,
    pub pogs: PogCountMapping,
    pub stats: TranscriptStats,
}

impl Transcript {
    /// Read and measure the transcript at `path`.
    pub fn load<P, M>(path: P, meta: TranscriptMeta, config: &CombineConfig, matcher: &M) -> Result<Transcript>
        where P: AsRef<Path>, M: KeywordMatcher + ?Sized {
        let path = path.as_ref();
        let mut raw = String::new();
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut raw))
            .map_err(|e| Error::MissingFile(path.display().to_string(), Some(e)))?;
        Transcript::from_text(&raw, meta, config, matcher)
    }

    /// Measure transcript text that is already in memory.
    pub fn from_text<M>(raw: &str, meta: TranscriptMeta, config: &CombineConfig, matcher: &M) -> Result<Transcript>
        where M: KeywordMatcher + ?Sized {
        let words = combine_with(&normalize(raw), config);
        let pogs = matcher.count(&words);
        let stats = aggregate(&words, &pogs, meta.runtime_minutes)?;
        debug!("{}: {}", meta.text_file, stats);
        Ok(Transcript {
            meta: meta,
            words: words,
            pogs: pogs,
            stats: stats,
        })
    }

    /// Keyword tally sorted by count, most common first, then alphabetically.
    pub fn sorted_pogs(&self) -> Vec<(&str, usize)> {
        let mut pogs: Vec<(&str, usize)> = self.pogs.iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        pogs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        pogs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keywords::RegexMatcher;
    use std::io::Write;
    use tempfile;
    use tempfile::NamedTempFile;

    fn meta(runtime: u32) -> TranscriptMeta {
        TranscriptMeta::new("stream [20210704].txt", runtime, "https://youtu.be/watch?v=x", "Stream").unwrap()
    }

    const CAPTIONS: &str = "\
1
00:00:01
[Music] POG that was
2
00:00:03
P O G P O G insane, PogChamp. P-O-G chat";

    #[test]
    fn measures_captions() {
        let t = Transcript::from_text(CAPTIONS, meta(2), &CombineConfig::default(), &RegexMatcher::default()).unwrap();
        assert_eq!(t.words, vec!["pog", "that", "was", "pog", "pog", "insane", "pogchamp", "pog", "chat"]);
        assert_eq!(t.stats.word_count, 9);
        assert_eq!(t.stats.pog_count, 5);
        assert_eq!(t.stats.pog_per_minute, 2.5);
        assert_eq!(t.sorted_pogs(), vec![("pog", 4), ("pogchamp", 1)]);
    }

    #[test]
    fn empty_transcript_divides_by_zero() {
        match Transcript::from_text("[Music]\n12", meta(10), &CombineConfig::default(), &RegexMatcher::default()) {
            Err(Error::DivisionByZero(_)) => {}
            other => panic!("expected division by zero, got {:?}", other),
        }
    }

    #[test]
    fn loads_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "pog pog nice").unwrap();
        let t = Transcript::load(file.path(), meta(1), &CombineConfig::default(), &RegexMatcher::default()).unwrap();
        assert_eq!(t.stats.word_count, 3);
        assert_eq!(t.stats.pog_count, 2);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        match Transcript::load(&path, meta(1), &CombineConfig::default(), &RegexMatcher::default()) {
            Err(Error::MissingFile(name, Some(_))) => assert!(name.ends_with("nope.txt")),
            other => panic!("expected a missing file, got {:?}", other),
        }
    }
}
