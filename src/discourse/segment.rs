//! Sentence and debate-turn segmentation.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::types::{Span, Turn};

static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// `"Speaker: text"`, the speaker starting with an uppercase letter.
static SPEAKER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-ZӘӨҰҮҚҒІА-Я][^:]{0,60}):\s*(.+)$").expect("valid regex")
});

/// `"- text"` or `"— text"`.
static DASH_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[-—]\s*(.+)$").expect("valid regex"));

/// Span of `text[start..end]` with surrounding whitespace removed.
fn trimmed(text: &str, start: usize, end: usize) -> Option<Span> {
    let raw = &text[start..end];
    let inner = raw.trim();
    if inner.is_empty() {
        return None;
    }
    let lead = raw.len() - raw.trim_start().len();
    let start = start + lead;
    Some(Span::new(start, start + inner.len()))
}

/// Split after every run of `.`, `!` or `?`.
///
/// The unterminated tail is one more unit. Units are trimmed and empty ones
/// dropped; each span covers exactly the returned slice.
pub fn split_sentences(text: &str) -> Vec<(Span, &str)> {
    let mut units = Vec::new();
    let mut start = 0;
    for m in SENTENCE_END.find_iter(text) {
        if let Some(span) = trimmed(text, start, m.end()) {
            units.push((span, &text[span.start..span.end]));
        }
        start = m.end();
    }
    if let Some(span) = trimmed(text, start, text.len()) {
        units.push((span, &text[span.start..span.end]));
    }
    units
}

/// Split a transcript into speaker turns.
///
/// Lines are `"Speaker: text"`, dash-prefixed (speaker unknown), or
/// continuations. A continuation joins the previous turn when that turn's
/// speaker is unknown and opens a new unknown turn otherwise, so no text is
/// dropped.
pub fn segment_turns(text: &str) -> Vec<Turn> {
    let mut turns: Vec<Turn> = Vec::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(caps) = SPEAKER_LINE.captures(line) {
            turns.push(Turn::new(caps[1].trim(), caps[2].trim()));
            continue;
        }
        if let Some(caps) = DASH_LINE.captures(line) {
            turns.push(Turn::unknown(caps[1].trim()));
            continue;
        }
        match turns.last_mut() {
            Some(last) if last.is_unknown() => {
                last.text.push(' ');
                last.text.push_str(line);
            }
            _ => turns.push(Turn::unknown(line)),
        }
    }
    debug!(turns = turns.len(), "debate segmented");
    turns
}
