//! Caption text cleanup
//!
//! Auto-generated captions carry timestamps, numbering and line breaks that
//! are noise for counting words. Every digit, hyphen, newline, tab and
//! carriage return becomes one space and the rest is lowercased, so
//! `"POG\n12 p-o-g"` becomes `"pog    p o g"`.
use regex::Regex;
use std::sync::OnceLock;

const NOISE: &str = r"[\d\-\n\t\r]";

fn noise() -> &'static Regex {
    static NOISE_RE: OnceLock<Regex> = OnceLock::new();
    NOISE_RE.get_or_init(|| Regex::new(NOISE).expect("noise pattern is a valid regex"))
}

/// Replace noise characters by spaces and lowercase the rest.
///
/// Each noise character maps to exactly one space; runs are not collapsed
/// (the combiner skips empty tokens anyway). Lowercasing is Unicode-aware
/// and locale-independent.
pub fn normalize(raw: &str) -> String {
    noise().replace_all(raw, " ").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_hyphens_become_spaces() {
        assert_eq!(normalize("p-o-g 2021"), "p o g     ");
    }

    #[test]
    fn control_whitespace_becomes_spaces() {
        assert_eq!(normalize("a\nb\tc\r\nd"), "a b c  d");
    }

    #[test]
    fn lowercases() {
        assert_eq!(normalize("PogChamp POGGERS"), "pogchamp poggers");
        assert_eq!(normalize("ÉCOLE"), "école");
    }

    #[test]
    fn unicode_digits_are_noise_too() {
        assert_eq!(normalize("٣pog"), " pog");
    }

    #[test]
    fn idempotent_on_clean_text() {
        for text in &["hello world", "[Music] POG", "a, b. c! (d)", ""] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn output_has_no_noise() {
        let out = normalize("00:01:02 --> 00:01:05\r\n[Laughter]\tP O G");
        assert!(!out.chars().any(|c| c.is_ascii_digit() || c == '-'));
        assert!(!out.contains('\n') && !out.contains('\t') && !out.contains('\r'));
        assert!(out.ends_with("[laughter] p o g"));
    }

    #[test]
    fn empty_is_empty() {
        assert_eq!(normalize(""), "");
    }
}
