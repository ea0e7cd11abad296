// Export labelled emails from a SQLite store into one-hot encoded
// train/valid/test CSV files for fine-tuning a label classifier.
//
// Layers, outermost first:
//   cli          - argument parsing and printing
//   application  - use cases wiring the pipeline together
//   domain       - records, partitions, label errors, traits
//   data         - loading, vocabulary, encoding, splitting
//   infra        - SQLite schema and CSV output

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod infra;
