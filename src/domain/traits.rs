// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The application layer programs against these traits so the
// pipeline never names SQLite or the csv crate directly.
//
//   - SqliteLoader implements RecordSource
//   - CsvPartitionWriter implements PartitionSink
//
// Tests can plug in an in-memory source without a database file.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use std::path::PathBuf;

use crate::data::vocabulary::LabelVocabulary;
use crate::domain::partition::Partition;
use crate::domain::record::Record;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Anything that can produce the full, ordered record sequence.
pub trait RecordSource {
    /// Load every record. Order is significant: the splitter cuts
    /// partitions by position.
    fn load_all(&self) -> Result<Vec<Record>>;
}

// ─── PartitionSink ────────────────────────────────────────────────────────────
/// Anything that can persist one encoded partition.
pub trait PartitionSink {
    /// Write `records` for `partition`, returning where they went.
    fn write_partition(
        &self,
        partition:  Partition,
        records:    &[Record],
        vocabulary: &LabelVocabulary,
    ) -> Result<PathBuf>;
}
