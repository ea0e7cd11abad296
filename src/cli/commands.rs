// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Two subcommands: `export` and `init`.
// Running the binary with no subcommand behaves like a bare
// `export`, reading ./emails.sqlite and writing ./train.csv,
// ./valid.csv and ./test.csv.
//
// Only paths can be overridden. Split ratios and the label
// encoding are fixed.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::export_use_case::{ExportConfig, DEFAULT_DB_PATH, DEFAULT_OUT_DIR};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export labelled emails to train/valid/test CSV files (default)
    Export(ExportArgs),

    /// Create the email database and its tables if they are missing
    Init(InitArgs),
}

/// All arguments for the `export` command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// SQLite database holding the `emails` and `deleted_emails` tables
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Directory to write train.csv, valid.csv and test.csv into
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,
}

/// Convert CLI ExportArgs into the application-layer ExportConfig.
/// The application layer never sees clap types.
impl From<ExportArgs> for ExportConfig {
    fn from(a: ExportArgs) -> Self {
        ExportConfig {
            db_path: a.db_path,
            out_dir: a.out_dir,
            ..ExportConfig::default()
        }
    }
}

/// All arguments for the `init` command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// SQLite database file to create or update
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,
}
