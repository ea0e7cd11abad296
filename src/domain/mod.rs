// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that name the concepts
// of the export pipeline:
//
//   Record     - one (subject text, raw label string) pair
//   Partition  - which output file a slice of records goes to
//   LabelError - the encoding precondition failure
//
// Rules for this layer:
//   - NO database or CSV types here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A single labelled email row
pub mod record;

// Train / valid / test partition names and file names
pub mod partition;

// Typed label lookup failures
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
