//! Command-line front end for the geoquiz console game.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "geoquiz", version, about = "Console geography quiz")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the main menu (default)
    Menu,

    /// Play one session straight away
    Play {
        #[command(flatten)]
        overrides: commands::play::Overrides,
    },

    /// List score records saved in a score file
    Scores {
        /// Score file to read (defaults to the configured one)
        #[arg(long)]
        score_file: Option<PathBuf>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check country data files
    Validate {
        /// Directory holding a.txt .. z.txt (defaults to the configured one)
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Create a starter config and sample country files
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("geoquiz=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::menu::execute(config),
        Commands::Play { overrides } => commands::play::execute(config, overrides),
        Commands::Scores { score_file, json } => {
            commands::scores::execute(config, score_file, json)
        }
        Commands::Validate { data_dir } => commands::validate::execute(config, data_dir),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

