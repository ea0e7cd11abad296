// ============================================================
// Layer 2 - ExportUseCase
// ============================================================
// Runs the full export pipeline in order:
//
//   Step 1: Load records from both tables   (Layer 4 - data)
//   Step 2: Build the label vocabulary      (Layer 4 - data)
//   Step 3: Split 70 / 15 / 15 by position  (Layer 4 - data)
//   Step 4: Encode and write each partition (Layer 6 - infra)
//
// Every value is passed explicitly from one step to the next.
// Any error aborts the run; partial output is not useful for
// fine-tuning, so nothing is retried or skipped.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    loader::SqliteLoader,
    splitter::split_partitions,
    vocabulary::LabelVocabulary,
};
use crate::domain::partition::Partition;
use crate::domain::traits::{PartitionSink, RecordSource};
use crate::infra::{
    csv_writer::CsvPartitionWriter,
    email_store::EmailTable,
};

/// Database file read when no path is given
pub const DEFAULT_DB_PATH: &str = "emails.sqlite";

/// Directory the CSV files land in when none is given
pub const DEFAULT_OUT_DIR: &str = ".";

// ─── Export Configuration ────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    pub db_path: PathBuf,
    pub out_dir: PathBuf,
    /// Tables read in this order and concatenated
    pub tables:  Vec<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            tables:  EmailTable::ALL.iter().map(|t| t.name().to_string()).collect(),
        }
    }
}

// ─── Export Summary ──────────────────────────────────────────────────────────
/// One written partition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionOutput {
    pub partition: Partition,
    pub rows:      usize,
    pub path:      PathBuf,
}

/// What a finished export produced, for the CLI to report
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub total_records: usize,
    pub vocabulary:    LabelVocabulary,
    pub outputs:       Vec<PartitionOutput>,
}

// ─── ExportUseCase ───────────────────────────────────────────────────────────
pub struct ExportUseCase {
    config: ExportConfig,
}

impl ExportUseCase {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Export from the configured SQLite file into CSV files
    pub fn execute(&self) -> Result<ExportSummary> {
        let cfg = &self.config;
        tracing::debug!("Export config: {}", serde_json::to_string(cfg)?);

        let loader = SqliteLoader::new(&cfg.db_path, cfg.tables.clone());
        let writer = CsvPartitionWriter::new(&cfg.out_dir);

        run_export(&loader, &writer)
    }
}

/// The pipeline itself, independent of where records come from
/// and where partitions go.
pub fn run_export(source: &dyn RecordSource, sink: &dyn PartitionSink) -> Result<ExportSummary> {
    // ── Step 1: Load ──────────────────────────────────────────────────────────
    let records = source.load_all()?;
    tracing::info!("Total number of emails fetched: {}", records.len());

    // ── Step 2: Vocabulary ────────────────────────────────────────────────────
    let vocabulary = LabelVocabulary::build(&records);
    tracing::info!("Label vocabulary has {} entries", vocabulary.len());

    // ── Step 3 + 4: Split, encode, write ──────────────────────────────────────
    let mut outputs = Vec::with_capacity(Partition::ALL.len());
    for (partition, slice) in split_partitions(&records) {
        let path = sink.write_partition(partition, slice, &vocabulary)?;
        outputs.push(PartitionOutput {
            partition,
            rows: slice.len(),
            path,
        });
    }

    Ok(ExportSummary {
        total_records: records.len(),
        vocabulary,
        outputs,
    })
}
