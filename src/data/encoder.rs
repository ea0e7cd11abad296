// ============================================================
// Layer 4 - One-hot Label Encoder
// ============================================================
// Turns a raw label string into a fixed-length 0/1 vector,
// one position per vocabulary entry.
//
//   vocabulary: Promo=0, Urgent=1, Work=2
//   "Work, Urgent"  →  [0, 1, 1]
//
// Pure function: no state, same input gives the same output.

use crate::data::vocabulary::LabelVocabulary;
use crate::domain::error::LabelError;
use crate::domain::record::LABEL_SEPARATOR;

/// One-hot encode `labels_raw` against `vocabulary`.
///
/// Fails with `LabelError::UnknownLabel` if any token was not part
/// of the vocabulary. That cannot happen when the vocabulary was
/// built from the same records.
pub fn encode_labels(labels_raw: &str, vocabulary: &LabelVocabulary) -> Result<Vec<u8>, LabelError> {
    let mut encoded = vec![0u8; vocabulary.len()];

    for label in labels_raw.split(LABEL_SEPARATOR) {
        encoded[vocabulary.index_of(label)?] = 1;
    }

    Ok(encoded)
}
