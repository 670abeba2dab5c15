// File: src/core/filter.rs
use crate::core::types::{SkipReason, Token};
use once_cell::sync::Lazy;
use regex::Regex;

static CURRENCY_AMOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[$£€]\d").unwrap());
/// Decimal digits (Nd) plus the Numeric_Type=Digit characters: superscript,
/// subscript, circled and parenthesized digits. Letter numbers such as `〇`
/// or `Ⅻ` and fractions are not digits.
static ALL_DIGITS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[\d\x{B2}\x{B3}\x{B9}\x{2070}\x{2074}-\x{2079}\x{2080}-\x{2089}",
        r"\x{1369}-\x{1371}\x{19DA}\x{2460}-\x{2468}\x{2474}-\x{247C}\x{2488}-\x{2490}",
        r"\x{24EA}\x{24F5}-\x{24FD}\x{24FF}\x{2776}-\x{277E}\x{2780}-\x{2788}\x{278A}-\x{2792}",
        r"\x{10A40}-\x{10A43}\x{1F100}-\x{1F10A}]+$",
    ))
    .unwrap()
});

/// What happens to a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Punctuation, whitespace or a number. Not recorded anywhere.
    Dropped,
    /// Excluded from counting; the lowercased lemma and the reason are kept.
    Skipped { lemma: String, reason: SkipReason },
    /// Counted under this lowercased lemma.
    Counted(String),
}

/// A token's surface text and lowercased lemma, as seen by the skip rules.
pub struct Candidate<'a> {
    pub text: &'a str,
    pub lemma: &'a str,
}

pub struct SkipRule {
    pub reason: SkipReason,
    pub matches: fn(&Candidate<'_>) -> bool,
}

/// Evaluated top to bottom; the first matching rule decides the reason.
pub static SKIP_RULES: &[SkipRule] = &[
    SkipRule {
        reason: SkipReason::ContainsCjk,
        matches: |c| contains_cjk(c.text) || contains_cjk(c.lemma),
    },
    SkipRule { reason: SkipReason::Empty, matches: |c| c.lemma.is_empty() },
    SkipRule { reason: SkipReason::ContainsDot, matches: |c| c.lemma.contains('.') },
    SkipRule { reason: SkipReason::ContainsColon, matches: |c| c.lemma.contains(':') },
    SkipRule {
        reason: SkipReason::ContainsBrackets,
        matches: |c| c.lemma.contains(['(', ')', '[', ']', '{', '}']),
    },
    SkipRule {
        reason: SkipReason::CurrencyAmount,
        matches: |c| CURRENCY_AMOUNT.is_match(c.lemma),
    },
    SkipRule {
        reason: SkipReason::SingleLetter,
        matches: |c| c.lemma.chars().count() == 1 && c.lemma != "a",
    },
    SkipRule {
        reason: SkipReason::NoAlnum,
        matches: |c| !c.lemma.chars().any(char::is_alphanumeric),
    },
];

/// Classifies one token. Every token gets exactly one verdict.
pub fn classify(token: &Token) -> Verdict {
    if token.is_punct || token.is_space {
        return Verdict::Dropped;
    }
    if token.like_num || is_all_digits(&token.text) {
        return Verdict::Dropped;
    }

    let lemma = token.lemma.to_lowercase();
    let candidate = Candidate { text: &token.text, lemma: &lemma };

    match first_matching_rule(&candidate) {
        Some(reason) => Verdict::Skipped { lemma, reason },
        None => Verdict::Counted(lemma),
    }
}

pub fn first_matching_rule(candidate: &Candidate<'_>) -> Option<SkipReason> {
    SKIP_RULES
        .iter()
        .find(|rule| (rule.matches)(candidate))
        .map(|rule| rule.reason)
}

fn is_all_digits(text: &str) -> bool {
    ALL_DIGITS.is_match(text)
}

/// Hiragana, katakana and CJK ideographs, including the extension and
/// compatibility blocks.
pub fn is_cjk(c: char) -> bool {
    matches!(c as u32,
        0x3040..=0x309F |   // hiragana
        0x30A0..=0x30FF |   // katakana
        0x31F0..=0x31FF |   // katakana phonetic extensions
        0xFF66..=0xFF9F |   // halfwidth katakana
        0x3400..=0x4DBF |   // extension A
        0x4E00..=0x9FFF |
        0xF900..=0xFAFF |   // compatibility ideographs
        0x20000..=0x2A6DF |
        0x2A700..=0x2EBEF |
        0x2F800..=0x2FA1F |
        0x30000..=0x3134F
    )
}

pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk)
}
