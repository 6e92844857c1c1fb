//! Filler-word detection and removal for speech transcripts.
//!
//! Pure text transform over a fixed filler vocabulary. Matching is
//! case-insensitive and whole-token; the two phrase fillers ("you know",
//! "I mean") are matched with a two-token lookahead. The upstream
//! implementation split on whitespace before comparing and so could never
//! match the phrases — this version scans phrase-first instead of
//! preserving that limitation.

use crate::exercise::entities::FillerCorrection;

/// Single-token fillers, lowercase.
const FILLER_WORDS: &[&str] = &["um", "uh", "er", "ah", "like", "so", "well"];

/// Multi-word fillers, lowercase, pre-split into tokens.
const FILLER_PHRASES: &[&[&str]] = &[&["you", "know"], &["i", "mean"]];

/// Remove every filler occurrence from `input`.
///
/// Fillers are reported in order of appearance, one entry per occurrence;
/// the corrected text is the remaining tokens re-joined with single spaces.
/// Deterministic and total: empty input yields the zero correction.
pub fn correct_fillers(input: &str) -> FillerCorrection {
    let tokens: Vec<&str> = input.split_whitespace().collect();

    let mut fillers_used = Vec::new();
    let mut kept = Vec::new();

    let mut i = 0;
    while i < tokens.len() {
        // Phrases first, so "you know" is not consumed token by token.
        if let Some(phrase) = match_phrase(&tokens[i..]) {
            fillers_used.push(phrase.join(" "));
            i += phrase.len();
            continue;
        }

        let lowered = tokens[i].to_lowercase();
        if FILLER_WORDS.contains(&lowered.as_str()) {
            fillers_used.push(lowered);
        } else {
            kept.push(tokens[i]);
        }
        i += 1;
    }

    FillerCorrection {
        filler_count: fillers_used.len(),
        fillers_used,
        corrected_text: kept.join(" "),
    }
}

fn match_phrase(tokens: &[&str]) -> Option<&'static [&'static str]> {
    FILLER_PHRASES.iter().copied().find(|phrase| {
        phrase.len() <= tokens.len()
            && phrase
                .iter()
                .zip(tokens)
                .all(|(p, t)| t.eq_ignore_ascii_case(p))
    })
}
