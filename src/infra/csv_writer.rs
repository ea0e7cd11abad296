// ============================================================
// Layer 6 - CSV Partition Writer
// ============================================================
// Writes one encoded partition to `<out_dir>/<partition>.csv`.
//
// File layout:
//   text,Promo,Urgent,Work
//   Meeting tomorrow,0,1,1
//   Sale!,1,0,0
//   ...
//
// The header is "text" followed by every vocabulary token in
// column order. Each row is the subject verbatim followed by its
// one-hot vector.
//
// The csv crate takes care of quoting: a subject containing a
// comma, a double quote or a line break is wrapped in quotes
// with inner quotes doubled. Records end in CRLF.
//
// Files are created with truncation, so a rerun overwrites the
// previous export instead of appending to it.
//
// Reference: csv crate documentation
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs,
    io,
    path::PathBuf,
};

use crate::data::encoder::encode_labels;
use crate::data::vocabulary::LabelVocabulary;
use crate::domain::partition::Partition;
use crate::domain::record::Record;
use crate::domain::traits::PartitionSink;

/// First header column, holding the subject text
pub const TEXT_COLUMN: &str = "text";

/// Writes partitions as CSV files into one directory.
pub struct CsvPartitionWriter {
    out_dir: PathBuf,
}

impl CsvPartitionWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: out_dir.into() }
    }

    /// Full path the given partition is written to
    pub fn path_for(&self, partition: Partition) -> PathBuf {
        self.out_dir.join(partition.file_name())
    }
}

impl PartitionSink for CsvPartitionWriter {
    fn write_partition(
        &self,
        partition:  Partition,
        records:    &[Record],
        vocabulary: &LabelVocabulary,
    ) -> Result<PathBuf> {
        fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("Cannot create output directory '{}'", self.out_dir.display()))?;

        let path = self.path_for(partition);
        let file = fs::File::create(&path)
            .with_context(|| format!("Cannot create '{}'", path.display()))?;

        write_csv(file, records, vocabulary)
            .with_context(|| format!("Cannot write {} partition to '{}'", partition, path.display()))?;

        tracing::info!("Wrote {} rows to '{}'", records.len(), path.display());
        Ok(path)
    }
}

/// Write the header and one encoded row per record to `out`.
///
/// Any label missing from `vocabulary` aborts the write with
/// `LabelError::UnknownLabel` as the root cause.
pub fn write_csv<W: io::Write>(out: W, records: &[Record], vocabulary: &LabelVocabulary) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);

    let mut header: Vec<&str> = Vec::with_capacity(vocabulary.len() + 1);
    header.push(TEXT_COLUMN);
    header.extend(vocabulary.tokens().iter().map(String::as_str));
    wtr.write_record(&header)?;

    let mut row: Vec<&str> = Vec::with_capacity(vocabulary.len() + 1);
    for record in records {
        let encoded = encode_labels(&record.labels_raw, vocabulary)?;

        row.clear();
        row.push(&record.text);
        row.extend(encoded.iter().map(|bit| if *bit == 1 { "1" } else { "0" }));
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
