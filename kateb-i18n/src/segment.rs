//! Splits mixed-direction text into directed runs.
//!
//! Under an RTL paragraph, embedded LTR tokens (numbers, emails, URLs, Latin
//! words) must be rendered in their own left-to-right runs or they display
//! scrambled. Segmentation splits on whitespace, classifies each token, and
//! keeps the whitespace as ambient-direction separators so that the
//! concatenation of all run texts reproduces the input byte for byte.

use crate::classify::{self, TokenClass};
use crate::locales::Direction;
use smallvec::SmallVec;

/// One directionally uniform slice of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct DirectedRun<'a> {
    pub text: &'a str,
    pub direction: Direction,
}

/// Split `text` into directed runs under `ambient` paragraph direction.
///
/// An LTR ambient returns the whole text as a single run; splitting only
/// matters when LTR tokens are embedded in an RTL paragraph. Adjacent runs
/// with the same direction are merged. For every input,
/// `concat(runs.text) == text`.
#[must_use]
pub fn segment(text: &str, ambient: Direction) -> Vec<DirectedRun<'_>> {
    if text.is_empty() {
        return Vec::new();
    }
    if ambient == Direction::Ltr {
        return vec![DirectedRun {
            text,
            direction: ambient,
        }];
    }

    // Byte ranges of alternating whitespace / token chunks.
    let mut spans: SmallVec<[(usize, usize, Direction); 8]> = SmallVec::new();
    let mut push = |start: usize, end: usize, direction: Direction| {
        match spans.last_mut() {
            Some(last) if last.2 == direction && last.1 == start => last.1 = end,
            _ => spans.push((start, end, direction)),
        }
    };

    let mut chunk_start = 0;
    let mut chunk_is_ws: Option<bool> = None;
    for (idx, ch) in text.char_indices() {
        let ws = ch.is_whitespace();
        match chunk_is_ws {
            None => chunk_is_ws = Some(ws),
            Some(prev) if prev != ws => {
                push(chunk_start, idx, chunk_direction(text, chunk_start, idx, prev, ambient));
                chunk_start = idx;
                chunk_is_ws = Some(ws);
            }
            Some(_) => {}
        }
    }
    if let Some(ws) = chunk_is_ws {
        push(
            chunk_start,
            text.len(),
            chunk_direction(text, chunk_start, text.len(), ws, ambient),
        );
    }

    spans
        .into_iter()
        .map(|(start, end, direction)| DirectedRun {
            text: &text[start..end],
            direction,
        })
        .collect()
}

fn chunk_direction(
    text: &str,
    start: usize,
    end: usize,
    is_whitespace: bool,
    ambient: Direction,
) -> Direction {
    if is_whitespace {
        return ambient;
    }
    match classify::classify(&text[start..end]) {
        TokenClass::ForcedLtr => Direction::Ltr,
        TokenClass::ArabicScript | TokenClass::Neutral => ambient,
    }
}

/// Render `text` for a plain-text sink, wrapping each LTR run in explicit
/// LTR-override controls (U+202D / U+202C) so embedded numbers, emails, and
/// URLs keep their order inside an RTL paragraph.
#[must_use]
pub fn isolate(text: &str, ambient: Direction) -> String {
    if ambient == Direction::Ltr {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    for run in segment(text, ambient) {
        if run.direction == Direction::Ltr {
            out.push('\u{202D}');
            out.push_str(run.text);
            out.push('\u{202C}');
        } else {
            out.push_str(run.text);
        }
    }
    out
}
