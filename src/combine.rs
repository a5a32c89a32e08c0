//! Split normalized caption text into words, gluing spelled-out letters back together
//!
//! Captions often spell short interjections one letter at a time, so the
//! text `"p o g"` has to count as the single word `"pog"`. Single-letter
//! tokens accumulate in a pending run which is emitted as one word when a
//! multi-letter token shows up. The fence-post letter (`p` by default) also
//! closes a non-empty run before starting a new one, so `"p o g p o g"` is two
//! words rather than one long one.
//!
//! Tokens containing the cue marker (`[` by default) are caption annotations
//! such as `[music]` and are never words. The check is a plain substring test.
//!
//! A run still pending when the text ends is dropped unless
//! `CombineConfig::flush_trailing` is set.
use std::mem;

/// Delimiters used when nothing else is configured.
///
/// No apostrophe: contractions stay one token instead of leaving a stray `t`
/// or `s` in the pending run. No `[` either, cues have to survive splitting.
pub const DEFAULT_DELIMITERS: &[char] = &[' ', ',', '.', '!', '?', ';', ':', '"', '(', ')'];

/// How tokens are split and when letter runs are cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineConfig {
    /// Characters separating tokens
    pub delimiters: Vec<char>,
    /// Single letter that starts a new spelled-out word
    pub fence_post: char,
    /// Any token containing this character is an annotation cue
    pub cue_marker: char,
    /// Emit a letter run left pending at the end of the text
    pub flush_trailing: bool,
}

impl Default for CombineConfig {
    fn default() -> Self {
        CombineConfig {
            delimiters: DEFAULT_DELIMITERS.to_vec(),
            fence_post: 'p',
            cue_marker: '[',
            flush_trailing: false,
        }
    }
}

impl CombineConfig {
    /// Default configuration with a different delimiter set
    pub fn with_delimiters<I: IntoIterator<Item=char>>(delimiters: I) -> Self {
        CombineConfig {
            delimiters: delimiters.into_iter().collect(),
            ..CombineConfig::default()
        }
    }
}

/// Combine words using the default fence post and cue marker.
pub fn combine(normalized: &str, delimiters: &[char]) -> Vec<String> {
    combine_with(normalized, &CombineConfig::with_delimiters(delimiters.iter().cloned()))
}

/// Split `normalized` on the configured delimiters and fold single-letter runs into words.
///
/// Output order is the order of appearance in the text.
pub fn combine_with(normalized: &str, config: &CombineConfig) -> Vec<String> {
    let mut words = Vec::new();
    // Single letters not yet emitted as a word
    let mut pending = String::new();

    let tokens = normalized
        .split(|c: char| config.delimiters.contains(&c))
        .filter(|token| !token.is_empty());

    for token in tokens {
        let mut chars = token.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(letter), None) => letter,
            _ => {
                // A full word closes whatever was being spelled out
                if !pending.is_empty() {
                    words.push(mem::take(&mut pending));
                }
                if !token.contains(config.cue_marker) {
                    words.push(token.to_string());
                }
                continue;
            }
        };
        if letter == config.fence_post && !pending.is_empty() {
            words.push(mem::take(&mut pending));
        }
        pending.push(letter);
    }

    if config.flush_trailing && !pending.is_empty() {
        words.push(pending);
    }
    words
}
