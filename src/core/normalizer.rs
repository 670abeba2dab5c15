// File: src/core/normalizer.rs
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

const COMMAS: [char; 2] = ['\u{FF0C}', '\u{3001}'];
const PERIODS: [char; 2] = ['\u{FF0E}', '\u{3002}'];

/// Bullets, arrows, stars and the reference mark. All of these are replaced by
/// a single space.
const DECORATIONS: [char; 18] = [
    '•', '◦', '●', '○', '■', '□', '◆', '◇', '▪', '→', '←', '↑', '↓', '⇒', '⇔', '★', '☆', '※',
];

const WAVE_DASHES: [char; 4] = ['\u{301C}', '\u{FF5E}', '\u{223C}', '\u{2053}'];

const BRACKETS: [char; 6] = ['[', ']', '(', ')', '{', '}'];

static LIST_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d)\.([A-Za-z])").unwrap());
static LEADING_PERIOD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([^\S\n]*)\.([A-Za-z])").unwrap());
static HORIZONTAL_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\S\n]+").unwrap());
static SPACE_AROUND_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r" ?\n ?").unwrap());

/// Rewrites raw text into a form the tokenizer handles predictably.
///
/// The result is stable: `normalize_text(&normalize_text(s)) == normalize_text(s)`.
/// Hiragana, katakana and ideographs pass through untouched (apart from NFKC
/// folding of their compatibility forms), so CJK detection downstream still
/// sees them.
pub fn normalize_text(raw: &str) -> String {
    // Fullwidth and ideographic punctuation is rewritten before NFKC, which
    // would otherwise fold the fullwidth forms to a bare ASCII mark.
    let mut text = String::with_capacity(raw.len());
    for c in raw.chars() {
        if COMMAS.contains(&c) {
            text.push_str(", ");
        } else if PERIODS.contains(&c) {
            text.push_str(". ");
        } else {
            text.push(c);
        }
    }

    let folded: String = text.nfkc().collect();

    let mut text = String::with_capacity(folded.len());
    for c in folded.chars() {
        if DECORATIONS.contains(&c) {
            text.push(' ');
        } else if WAVE_DASHES.contains(&c) {
            text.push('~');
        } else if BRACKETS.contains(&c) {
            text.push(' ');
            text.push(c);
            text.push(' ');
        } else {
            text.push(c);
        }
    }

    let text = LIST_NUMBER.replace_all(&text, "$1. $2");
    let text = LEADING_PERIOD.replace_all(&text, "$1. $2");
    let text = HORIZONTAL_SPACE.replace_all(&text, " ");
    SPACE_AROUND_NEWLINE.replace_all(&text, "\n").into_owned()
}
