// ============================================================
// Layer 4 - Label Vocabulary
// ============================================================
// Maps every label token seen in the record set to a column
// index in the output CSV.
//
// Construction is two explicit steps:
//   1. collect tokens into a BTreeSet (dedup + sorted order)
//   2. enumerate the sorted tokens to assign indices 0..n
//
// BTreeSet<String> orders by bytes, which for UTF-8 is the
// same as ordering by code point, so the columns come out in
// plain lexicographic order and never depend on row order.
//
// Example:
//   rows:   "Work, Urgent" | "Promo" | "Work"
//   tokens: Promo → 0, Urgent → 1, Work → 2

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::domain::error::LabelError;
use crate::domain::record::Record;

/// Sorted label tokens with an index lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelVocabulary {
    /// Tokens in index order (ascending lexicographic)
    tokens: Vec<String>,

    /// token → position in `tokens`
    index: HashMap<String, usize>,
}

impl LabelVocabulary {
    /// Build the vocabulary from every label token in `records`.
    pub fn build(records: &[Record]) -> Self {
        let unique: BTreeSet<&str> = records
            .iter()
            .flat_map(|r| r.label_tokens())
            .collect();

        let vocab = Self::from_tokens(unique);
        tracing::debug!("Built label vocabulary with {} entries", vocab.len());
        vocab
    }

    /// Build a vocabulary from an arbitrary token list.
    /// Duplicates are dropped and the result is sorted.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sorted: BTreeSet<String> = tokens.into_iter().map(Into::into).collect();
        let tokens: Vec<String> = sorted.into_iter().collect();

        let index = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        Self { tokens, index }
    }

    /// Column index of `label`, or `UnknownLabel` if it was never seen.
    pub fn index_of(&self, label: &str) -> Result<usize, LabelError> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| LabelError::UnknownLabel { label: label.to_string() })
    }

    /// Tokens in column order, used for the CSV header
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Collect the tokens whose position is set in `encoded`.
    ///
    /// Tokens come back in index order, not the order they had in
    /// the original label string.
    pub fn decode(&self, encoded: &[u8]) -> Result<Vec<&str>, LabelError> {
        if encoded.len() != self.tokens.len() {
            return Err(LabelError::LengthMismatch {
                expected: self.tokens.len(),
                actual:   encoded.len(),
            });
        }

        Ok(self
            .tokens
            .iter()
            .zip(encoded)
            .filter(|(_, bit)| **bit != 0)
            .map(|(token, _)| token.as_str())
            .collect())
    }

    /// Ordered token → index view, handy for printing as JSON
    pub fn to_index_map(&self) -> BTreeMap<&str, usize> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect()
    }
}
