use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use m365_provider::cli::{self, Cli};
use m365_provider::output;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let default_filter = if cli.global.debug_mode { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let diagnostics = cli::run(cli).await?;
    if !diagnostics.is_empty() {
        eprint!("{}", output::render_diagnostics(&diagnostics));
    }
    if diagnostics.has_error() {
        std::process::exit(1);
    }

    Ok(())
}
