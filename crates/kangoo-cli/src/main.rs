//! kangoo CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod view;

#[derive(Parser)]
#[command(
    name = "kangoo",
    version,
    about = "Kangoo Jumps class registration"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Edit the registry interactively, one command per line on stdin
    Shell {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Disable accent colors
        #[arg(long)]
        no_color: bool,
    },

    /// Replay a session script and render the result
    Replay {
        /// Path to .toml session script
        #[arg(long)]
        script: PathBuf,

        /// Output format: text, json, html
        #[arg(long, default_value = "text")]
        format: String,

        /// Output file for the html format
        #[arg(long, default_value = "kangoo.html")]
        output: PathBuf,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Disable accent colors
        #[arg(long)]
        no_color: bool,
    },

    /// Validate a session script with a dry run
    Validate {
        /// Path to .toml session script
        #[arg(long)]
        script: PathBuf,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example session script
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kangoo_core=warn,kangoo=warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Shell { config, no_color } => commands::shell::execute(config, no_color),
        Commands::Replay {
            script,
            format,
            output,
            config,
            no_color,
        } => commands::replay::execute(script, format, output, config, no_color),
        Commands::Validate { script, config } => commands::validate::execute(script, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
