// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap, hands the work to Layer 2 and prints the results.
//
//   (no command) - export with the default paths
//   export       - export with optional path overrides
//   init         - create an empty email database
//
// Reference: Rust Book §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InitArgs};

use crate::application::export_use_case::{ExportConfig, ExportSummary, ExportUseCase};
use crate::application::init_use_case::InitUseCase;

#[derive(Parser, Debug)]
#[command(
    name = "email-finetune-csv",
    version,
    about = "Export labelled emails from SQLite into one-hot encoded train/valid/test CSV files."
)]
pub struct Cli {
    /// The subcommand to run; defaults to `export`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Dispatch to the matching use case. This layer only routes and prints.
    pub fn run(self) -> Result<()> {
        match self.command {
            None                        => run_export(ExportConfig::default()),
            Some(Commands::Export(args)) => run_export(args.into()),
            Some(Commands::Init(args))   => run_init(args),
        }
    }
}

fn run_export(config: ExportConfig) -> Result<()> {
    tracing::info!("Exporting from '{}'", config.db_path.display());

    let summary = ExportUseCase::new(config).execute()?;
    print_summary(&summary)?;
    Ok(())
}

fn print_summary(summary: &ExportSummary) -> Result<()> {
    println!("Total number of emails fetched: {}", summary.total_records);
    println!(
        "Unique label-to-integer mapping: {}",
        serde_json::to_string(&summary.vocabulary.to_index_map())?
    );
    for out in &summary.outputs {
        println!("  {:<5} {:>6} rows -> {}", out.partition, out.rows, out.path.display());
    }
    println!("CSV files created successfully.");
    Ok(())
}

fn run_init(args: InitArgs) -> Result<()> {
    let counts = InitUseCase::new(&args.db_path).execute()?;

    println!("Email database ready: {}", args.db_path.display());
    for (table, rows) in counts {
        println!("  {:<14} {:>6} rows", table.name(), rows);
    }
    Ok(())
}
