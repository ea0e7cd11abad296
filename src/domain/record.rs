// ============================================================
// Layer 3 - Record Domain Type
// ============================================================
// One row pulled from either email table: the subject line
// and the human-readable label string attached to it.
//
// The label string is kept exactly as stored, e.g.
//   "Work, Urgent"
// Splitting it into tokens is the job of the data layer.
//
// Reference: Rust Book §5 (Structs and Methods)

/// Separator between label tokens inside `labels_raw`.
pub const LABEL_SEPARATOR: &str = ", ";

/// A labelled email as it comes out of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The email subject, written verbatim as the `text` column
    pub text: String,

    /// Comma-space joined label tokens, e.g. "Work, Urgent"
    pub labels_raw: String,
}

impl Record {
    pub fn new(text: impl Into<String>, labels_raw: impl Into<String>) -> Self {
        Self {
            text:       text.into(),
            labels_raw: labels_raw.into(),
        }
    }

    /// Iterate the label tokens of this record.
    ///
    /// An empty label string yields a single empty token, the same
    /// way `str::split` does. Callers see that token as a real label.
    pub fn label_tokens(&self) -> impl Iterator<Item = &str> {
        self.labels_raw.split(LABEL_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_tokens_split_on_comma_space() {
        let r = Record::new("Meeting tomorrow", "Work, Urgent");
        let tokens: Vec<&str> = r.label_tokens().collect();
        assert_eq!(tokens, vec!["Work", "Urgent"]);
    }

    #[test]
    fn test_bare_comma_is_not_a_separator() {
        let r = Record::new("x", "a,b");
        let tokens: Vec<&str> = r.label_tokens().collect();
        assert_eq!(tokens, vec!["a,b"]);
    }

    #[test]
    fn test_empty_labels_yield_empty_token() {
        let r = Record::new("x", "");
        let tokens: Vec<&str> = r.label_tokens().collect();
        assert_eq!(tokens, vec![""]);
    }
}
