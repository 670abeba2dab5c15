// File: src/nlp/tokenizer.rs
use crate::core::types::Token;
use crate::error::{LemmaError, Result};
use crate::nlp::overrides::LemmaOverrides;
use crate::nlp::Analyzer;
use nlprule::types::Word;
use nlprule::{tokenizer_filename, Tokenizer};
use std::path::Path;

/// Name of the tokenizer compiled into the binary.
pub const DEFAULT_MODEL: &str = "en";

static EN_TOKENIZER: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/", tokenizer_filename!("en")));

/// Tags the tagger attaches to sentence boundaries; they never carry a lemma.
const SENTENCE_MARKERS: [&str; 2] = ["SENT_START", "SENT_END"];

const SIGNS: [char; 4] = ['+', '-', '±', '~'];

/// ASCII punctuation that Unicode classifies as a symbol rather than punctuation.
const ASCII_SYMBOLS: &str = "$+<=>^`|~";

/// Analyzer backed by an nlprule tokenizer: sentence splitting, tokenization,
/// POS tagging with disambiguation, and lemmas from the tagger's dictionary.
pub struct NlpruleAnalyzer {
    name: String,
    tokenizer: Tokenizer,
    overrides: LemmaOverrides,
}

impl NlpruleAnalyzer {
    /// The English tokenizer embedded at build time.
    pub fn builtin() -> Result<Self> {
        let mut bytes = EN_TOKENIZER;
        let tokenizer = Tokenizer::from_reader(&mut bytes).map_err(|source| LemmaError::Tokenizer {
            name: DEFAULT_MODEL.to_string(),
            source,
        })?;
        Ok(Self::new(DEFAULT_MODEL, tokenizer))
    }

    /// A tokenizer binary built by `nlprule-build`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path.display().to_string();
        if !path.is_file() {
            let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "no such tokenizer binary");
            return Err(LemmaError::read(path, missing));
        }
        let tokenizer = Tokenizer::new(path).map_err(|source| LemmaError::Tokenizer {
            name: name.clone(),
            source,
        })?;
        Ok(Self::new(&name, tokenizer))
    }

    /// Resolves a model selector: the built-in name, or a tokenizer binary path.
    pub fn load(selector: &str) -> Result<Self> {
        if selector == DEFAULT_MODEL {
            Self::builtin()
        } else {
            Self::from_path(Path::new(selector))
        }
    }

    fn new(name: &str, tokenizer: Tokenizer) -> Self {
        Self {
            name: name.to_string(),
            tokenizer,
            overrides: LemmaOverrides::default(),
        }
    }

    pub fn with_overrides(mut self, overrides: LemmaOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    fn lemma_for(&self, word: &Word) -> String {
        let text = word.text().as_str();
        if let Some(lemma) = self.overrides.get(text) {
            return lemma.to_string();
        }
        tagged_lemma(word).unwrap_or(text).to_string()
    }
}

impl Analyzer for NlpruleAnalyzer {
    fn name(&self) -> &str {
        &self.name
    }

    fn analyze(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        for sentence in self.tokenizer.pipe(text) {
            for token in sentence.tokens() {
                let word = token.word();
                let surface = word.text().as_str();
                if surface.is_empty() {
                    continue;
                }
                tokens.push(Token {
                    text: surface.to_string(),
                    lemma: self.lemma_for(word),
                    is_punct: surface.chars().all(is_punctuation),
                    is_space: surface.chars().all(char::is_whitespace),
                    like_num: like_num(surface),
                });
            }
        }
        tokens
    }
}

/// Lemma from the tags left after disambiguation. When readings still
/// disagree (`closed` as VBD and as JJ), the one that reduces the surface form wins.
fn tagged_lemma<'a>(word: &'a Word) -> Option<&'a str> {
    let surface = word.text().as_str();
    let mut lemmas = word
        .tags()
        .iter()
        .filter(|data| !SENTENCE_MARKERS.contains(&data.pos().as_str()))
        .map(|data| data.lemma().as_str())
        .filter(|lemma| !lemma.is_empty());
    let first = lemmas.next()?;
    if !first.eq_ignore_ascii_case(surface) {
        return Some(first);
    }
    Some(lemmas.find(|lemma| !lemma.eq_ignore_ascii_case(surface)).unwrap_or(first))
}

pub fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_punctuation() && !ASCII_SYMBOLS.contains(c);
    }
    matches!(c as u32,
        0x00A1 | 0x00A7 | 0x00AB | 0x00B6 | 0x00B7 | 0x00BB | 0x00BF |
        0x2010..=0x2027 |
        0x2030..=0x205E |
        0x3001..=0x3003 |
        0x3008..=0x3011 |
        0x3014..=0x301F |
        0x30FB
    )
}

/// Digits with an optional leading sign and `,`/`.` separators, or a simple
/// fraction such as `3/4`. Number words are not numbers here.
pub fn like_num(text: &str) -> bool {
    let unsigned = text.trim_start_matches(SIGNS);
    let digits: String = unsigned.chars().filter(|&c| c != ',' && c != '.').collect();
    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    match unsigned.split_once('/') {
        Some((num, den)) => is_ascii_number(num) && is_ascii_number(den),
        None => false,
    }
}

fn is_ascii_number(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}
