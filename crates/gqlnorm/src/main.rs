mod cli;

use anyhow::Context as _;
use clap::Parser as _;

use crate::cli::Cli;
use gqlnorm_core::TargetEngine;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logger(&cli);

    let source = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read `{}`", cli.file.display()))?;

    let engine = if cli.dgraph {
        TargetEngine::Dgraph
    } else {
        TargetEngine::Gqlgen
    };
    log::info!("Normalizing `{}` for {engine:?}.", cli.file.display());

    let output = gqlnorm_core::normalize(&source, engine)
        .with_context(|| format!("failed to normalize `{}`", cli.file.display()))?;

    if !cli.nv {
        println!("{}", output.text);
    }
    if cli.debug {
        eprintln!("{}", output.tree.dump(output.root));
    }
    Ok(())
}

/// Logging defaults to warnings only; `--verbose` raises it to debug and
/// the `LOG_LEVEL` environment variable overrides both.
fn setup_logger(cli: &Cli) {
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|value| value.parse::<tracing::Level>().ok())
        .unwrap_or(default_level);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
