use anyhow::Result;
use clap::Parser;
use email_finetune_csv::cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("email_finetune_csv=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
