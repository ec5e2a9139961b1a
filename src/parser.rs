use std::{
    fmt,
    sync::LazyLock,
};

use regex::Regex;

use crate::core::Footnote;

static FOOTNOTE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([0-9]+)\]").expect("footnote reference pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    PlainText(String),
    FootnoteRef(u32),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::PlainText(text) => f.write_str(text),
            Segment::FootnoteRef(number) => write!(f, "[{}]", number),
        }
    }
}

/// Splits a translated verse into plain text and `[n]` footnote references.
///
/// Every bracketed run of ASCII digits is a reference; leading zeros are
/// ignored, so `[07]` points at footnote 7. A number too large for `u32` stays
/// in the surrounding text.
pub fn split_references(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut plain_start = 0;

    for captures in FOOTNOTE_REF.captures_iter(text) {
        let (Some(whole), Some(digits)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        let Ok(number) = digits.as_str().parse::<u32>() else {
            continue;
        };

        if whole.start() > plain_start {
            segments.push(Segment::PlainText(text[plain_start..whole.start()].to_string()));
        }
        segments.push(Segment::FootnoteRef(number));
        plain_start = whole.end();
    }

    if plain_start < text.len() {
        segments.push(Segment::PlainText(text[plain_start..].to_string()));
    }

    segments
}

/// Renders segments back to text, references as `[n]`. Gives back the input of
/// [`split_references`] unless a reference was spelled with leading zeros.
pub fn join_segments(segments: &[Segment]) -> String {
    segments.iter().map(Segment::to_string).collect()
}

/// Numbers of the references in `segments` that have no matching footnote.
pub fn dangling_references(segments: &[Segment], footnotes: &[Footnote]) -> Vec<u32> {
    segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::FootnoteRef(number) if !footnotes.iter().any(|f| f.number == *number) => {
                Some(*number)
            }
            _ => None,
        })
        .collect()
}
