//! Markdown rendering of measured transcripts
use std::fmt::{self, Write};
use corpus::{CorpusReport, SortKey};
use transcript::Transcript;

const NBSP: &str = "&nbsp;&nbsp;&nbsp;";

/// Pipes would end a table cell early
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Brackets would end link text early
fn link_text(text: &str) -> String {
    text.replace('[', "\\[").replace(']', "\\]")
}

/// The per-video section: title, thumbnail, runtime, stats and keyword table.
pub fn write_transcript<W: Write>(out: &mut W, t: &Transcript) -> fmt::Result {
    let meta = &t.meta;
    let title = link_text(&meta.title);
    writeln!(out, "## [{}]({})", title, meta.link)?;
    writeln!(out, "[![Link to {}](https://img.youtube.com/vi/{}/0.jpg)]({})",
        title, meta.youtube_id(), meta.link)?;
    writeln!(out)?;
    writeln!(out, "**Stream Date**: {}", meta.stream_date.format("%Y-%m-%d"))?;
    writeln!(out)?;
    writeln!(out, "**Total Runtime in Minutes**: {}", meta.runtime_minutes)?;
    writeln!(out)?;
    writeln!(out, "### **Pog Stats:**")?;
    writeln!(out)?;
    writeln!(out, "{}**Total number of words**: {}", NBSP, t.stats.word_count)?;
    writeln!(out)?;
    writeln!(out, "{}**Total number of Pog-like words**: {}", NBSP, t.stats.pog_count)?;
    writeln!(out)?;
    writeln!(out, "{}**Pog Density (Number of Pogs / Total Words)**: {}", NBSP, t.stats.pog_density)?;
    writeln!(out)?;
    writeln!(out, "{}**Pog Per Minute (Number of Pogs / Total Runtime in Minutes)**: {}",
        NBSP, t.stats.pog_per_minute)?;
    writeln!(out)?;
    writeln!(out, "### **Pog Dictionary**")?;
    writeln!(out, "**Pog-like Word** | **Count**|")?;
    writeln!(out, ":---: | :---:")?;
    for (word, count) in t.sorted_pogs() {
        writeln!(out, "{} | {}", cell(word), count)?;
    }
    writeln!(out)
}

fn key_name(key: SortKey) -> &'static str {
    match key {
        SortKey::Density => "pog density",
        SortKey::PerMinute => "pogs per minute",
        SortKey::Date => "stream date",
    }
}

/// The ranking table, corpus totals and the list of skipped transcripts.
pub fn write_ranking<W: Write>(out: &mut W, report: &CorpusReport, key: SortKey) -> fmt::Result {
    writeln!(out, "# Pog Rankings")?;
    writeln!(out)?;
    writeln!(out, "Ranked by {}.", key_name(key))?;
    writeln!(out)?;
    writeln!(out, "**Rank** | **Video** | **Stream Date** | **Pog Density** | **Pog Per Minute**")?;
    writeln!(out, ":---: | :--- | :---: | :---: | :---:")?;
    for (rank, t) in report.ranked.iter().enumerate() {
        writeln!(out, "{} | [{}]({}) | {} | {:.5} | {:.3}",
            rank + 1,
            cell(&link_text(&t.meta.title)),
            t.meta.link,
            t.meta.stream_date.format("%Y-%m-%d"),
            t.stats.pog_density,
            t.stats.pog_per_minute)?;
    }
    writeln!(out)?;
    if let Some(ref totals) = report.totals {
        writeln!(out, "**Totals**: {} transcripts, {} minutes, {} words, {} pog-like words, \
            density {:.5}, {:.3} per minute",
            totals.transcripts, totals.runtime_minutes, totals.word_count, totals.pog_count,
            totals.pog_density, totals.pog_per_minute)?;
        writeln!(out)?;
    }
    if !report.skipped.is_empty() {
        writeln!(out, "### Skipped")?;
        writeln!(out)?;
        for skip in &report.skipped {
            writeln!(out, "- {}: {}", skip.meta.text_file, skip.reason)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Full report: ranking first, then a section per ranked transcript.
pub fn render(report: &CorpusReport, key: SortKey) -> String {
    let mut out = String::new();
    // Writing to a String can't fail
    let _ = write_ranking(&mut out, report, key);
    for t in &report.ranked {
        let _ = write_transcript(&mut out, t);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use combine::CombineConfig;
    use errors::Error;
    use keywords::RegexMatcher;
    use metadata::TranscriptMeta;
    use corpus::Skipped;
    use stats::CorpusStats;

    fn transcript(text: &str, title: &str) -> Transcript {
        let meta = TranscriptMeta::new("s [20210315].txt", 2, "https://www.youtube.com/watch?v=abc123", title).unwrap();
        Transcript::from_text(text, meta, &CombineConfig::default(), &RegexMatcher::default()).unwrap()
    }

    #[test]
    fn transcript_section_layout() {
        let mut out = String::new();
        write_transcript(&mut out, &transcript("pog wow poggers pog", "Big Day")).unwrap();
        let expected = "\
## [Big Day](https://www.youtube.com/watch?v=abc123)
[![Link to Big Day](https://img.youtube.com/vi/abc123/0.jpg)](https://www.youtube.com/watch?v=abc123)

**Stream Date**: 2021-03-15

**Total Runtime in Minutes**: 2

### **Pog Stats:**

&nbsp;&nbsp;&nbsp;**Total number of words**: 4

&nbsp;&nbsp;&nbsp;**Total number of Pog-like words**: 3

&nbsp;&nbsp;&nbsp;**Pog Density (Number of Pogs / Total Words)**: 0.75

&nbsp;&nbsp;&nbsp;**Pog Per Minute (Number of Pogs / Total Runtime in Minutes)**: 1.5

### **Pog Dictionary**
**Pog-like Word** | **Count**|
:---: | :---:
pog | 2
poggers | 1

";
        assert_eq!(out, expected);
    }

    #[test]
    fn brackets_in_titles_are_escaped() {
        let t = transcript("pog hi", "Day [1] | finale");
        let mut section = String::new();
        write_transcript(&mut section, &t).unwrap();
        assert!(section.starts_with("## [Day \\[1\\] | finale](https://www.youtube.com/watch?v=abc123)\n"));
        assert!(section.contains("[![Link to Day \\[1\\] | finale](https://img.youtube.com/vi/abc123/0.jpg)]"));

        let report = CorpusReport { ranked: vec![t], skipped: vec![], totals: None };
        let mut ranking = String::new();
        write_ranking(&mut ranking, &report, SortKey::Date).unwrap();
        assert!(ranking.contains("1 | [Day \\[1\\] \\| finale](https://www.youtube.com/watch?v=abc123) |"));
    }

    #[test]
    fn ranking_lists_in_order_with_totals_and_skips() {
        let a = transcript("pog pog hi hi", "A | cut");
        let b = transcript("pog hi hi hi", "B");
        let totals = CorpusStats::from_transcripts(
            vec![(&a.stats, 2), (&b.stats, 2)]).unwrap();
        let report = CorpusReport {
            ranked: vec![a, b],
            skipped: vec![Skipped {
                meta: TranscriptMeta::new("gone [20210101].txt", 5, "l", "Gone").unwrap(),
                reason: Error::DivisionByZero("word count"),
            }],
            totals: Some(totals),
        };
        let out = render(&report, SortKey::Density);
        assert!(out.starts_with("# Pog Rankings\n\nRanked by pog density.\n"));
        assert!(out.contains("1 | [A \\| cut](https://www.youtube.com/watch?v=abc123) | 2021-03-15 | 0.50000 | 1.000\n"));
        assert!(out.contains("2 | [B](https://www.youtube.com/watch?v=abc123) | 2021-03-15 | 0.25000 | 0.500\n"));
        assert!(out.contains("**Totals**: 2 transcripts, 4 minutes, 8 words, 3 pog-like words, density 0.37500, 0.750 per minute"));
        assert!(out.contains("- gone [20210101].txt: Division by zero: the word count is zero\n"));
        assert_eq!(out.matches("### **Pog Dictionary**").count(), 2);
    }
}
