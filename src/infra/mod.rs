// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Concrete storage on either side of the pipeline:
//
//   email_store.rs - The SQLite email database schema. Creates
//                    the `emails` and `deleted_emails` tables
//                    and counts their rows.
//
//   csv_writer.rs  - Partition output. Encodes each record
//                    against the vocabulary and writes the
//                    train/valid/test CSV files.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// SQLite email tables: schema and row counts
pub mod email_store;

/// One-hot encoded CSV output
pub mod csv_writer;
