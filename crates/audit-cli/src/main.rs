//! Command-line interface for audit-rs

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "orchestrator")]
#[command(about = "Affiliate content quality orchestrator", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate an audit request and evaluate it
    Evaluate {
        /// Input JSON file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only validate input, do not evaluate
        #[arg(long)]
        validate_only: bool,

        /// Directory holding the audit schemas (default: bundled copies)
        #[arg(long)]
        schema_dir: Option<PathBuf>,

        /// Resolve affiliate links over HTTP instead of the offline checker
        #[arg(long)]
        live_links: bool,
    },

    /// Generate the shared project package (directories and documents)
    Scaffold {
        /// Project root to generate into (default: current directory)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Document language (ja or en)
        #[arg(long)]
        lang: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr, reports to stdout
    audit_utils::init_tracing_verbose(cli.verbose);

    match cli.command {
        Commands::Evaluate {
            input,
            output,
            validate_only,
            schema_dir,
            live_links,
        } => {
            commands::evaluate(commands::EvaluateArgs {
                input,
                output,
                validate_only,
                schema_dir,
                live_links,
            })
            .await
        }
        Commands::Scaffold { root, lang } => commands::scaffold(root, lang),
    }
}
