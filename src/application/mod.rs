// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Orchestrates the other layers to get one job done.
//
// Rules for this layer:
//   - No encoding or splitting logic here (Layer 4)
//   - No printing here (Layer 1)
//   - No SQL or CSV details here (Layers 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern

// Database → one-hot encoded train/valid/test CSV files
pub mod export_use_case;

// Create an empty email database with both tables
pub mod init_use_case;
