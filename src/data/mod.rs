// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// Everything between the SQLite tables and the encoded rows
// handed to the CSV writer.
//
// The pipeline flows in this order:
//
//   emails + deleted_emails tables
//       │
//       ▼
//   SqliteLoader      → reads (subject, labels) rows, table by table
//       │
//       ▼
//   LabelVocabulary   → distinct label tokens, sorted, indexed
//       │
//       ▼
//   encode_labels     → "Work, Urgent" → [0, 1, 1]
//       │
//       ▼
//   split_partitions  → 70% train / 15% valid / 15% test, by position
//
// Each module is responsible for exactly one step and can be
// tested without the others.

/// Loads records from the SQLite email store
pub mod loader;

/// Builds the sorted label vocabulary
pub mod vocabulary;

/// One-hot encodes a raw label string
pub mod encoder;

/// Cuts the record sequence into train/valid/test slices
pub mod splitter;
