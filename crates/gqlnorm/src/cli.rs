use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
#[command(
    name = "gqlnorm",
    version,
    about = "Normalize and merge GraphQL SDL documents for a target schema engine."
)]
pub(crate) struct Cli {
    /// Path to the SDL document to normalize.
    #[arg(value_name = "FILE", default_value = "type.graphql")]
    pub file: PathBuf,

    /// Filter and rewrite the document for the dgraph engine instead of
    /// the default gqlgen-style flattening.
    #[arg(long)]
    pub dgraph: bool,

    /// Dump the rewritten parse tree to stderr after rendering.
    #[arg(long)]
    pub debug: bool,

    /// Suppress printing the rendered document to stdout.
    #[arg(long)]
    pub nv: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}
