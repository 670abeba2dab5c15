// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A single token as produced by an [`Analyzer`](crate::nlp::Analyzer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface text exactly as it appeared in the normalized input.
    pub text: String,
    pub lemma: String,
    pub is_punct: bool,
    pub is_space: bool,
    pub like_num: bool,
}

impl Token {
    /// A plain word token whose lemma is already known.
    pub fn word(text: &str, lemma: &str) -> Self {
        Self {
            text: text.to_string(),
            lemma: lemma.to_string(),
            is_punct: false,
            is_space: false,
            like_num: false,
        }
    }
}

/// Why a token was excluded from counting. Exactly one is recorded per skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Empty,
    ContainsCjk,
    ContainsDot,
    ContainsColon,
    ContainsBrackets,
    CurrencyAmount,
    SingleLetter,
    NoAlnum,
}

impl SkipReason {
    pub fn code(self) -> &'static str {
        match self {
            SkipReason::Empty => "empty",
            SkipReason::ContainsCjk => "contains_cjk",
            SkipReason::ContainsDot => "contains_dot",
            SkipReason::ContainsColon => "contains_colon",
            SkipReason::ContainsBrackets => "contains_brackets",
            SkipReason::CurrencyAmount => "currency_amount",
            SkipReason::SingleLetter => "single_letter",
            SkipReason::NoAlnum => "no_alnum",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Key of a [`SkipTable`]: (surface token, lemma, reason).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkipKey {
    pub token: String,
    pub lemma: String,
    pub reason: SkipReason,
}

/// An occurrence counter that remembers the order in which keys were first seen.
///
/// Output order is always descending count, ties broken by first-seen order.
#[derive(Debug, Clone)]
pub struct CountTable<K> {
    entries: Vec<(K, u64)>,
    index: HashMap<K, usize>,
}

/// Lemma -> occurrence count.
pub type FrequencyTable = CountTable<String>;

/// (token, lemma, reason) -> occurrence count.
pub type SkipTable = CountTable<SkipKey>;

impl<K: Clone + Eq + Hash> CountTable<K> {
    pub fn new() -> Self {
        Self { entries: Vec::new(), index: HashMap::new() }
    }

    /// Adds `amount` to the count of `key`, inserting it at the end if unseen.
    pub fn add(&mut self, key: K, amount: u64) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1 += amount;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, amount));
        }
    }

    pub fn increment(&mut self, key: K) {
        self.add(key, 1);
    }

    pub fn get(&self, key: &K) -> Option<u64> {
        self.index.get(key).map(|&slot| self.entries[slot].1)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.entries.iter().map(|(key, count)| (key, *count))
    }

    /// Entries sorted by descending count. The sort is stable, so ties keep
    /// their first-seen order.
    pub fn sorted(&self) -> Vec<(&K, u64)> {
        let mut rows: Vec<(&K, u64)> = self.iter().collect();
        rows.sort_by_key(|&(_, count)| std::cmp::Reverse(count));
        rows
    }
}

impl<K: Clone + Eq + Hash> Default for CountTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash> FromIterator<(K, u64)> for CountTable<K> {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, count) in iter {
            table.add(key, count);
        }
        table
    }
}
