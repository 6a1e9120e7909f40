//! histquiz CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "histquiz", version, about = "History lesson quizzes in your terminal")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available lessons, most recent first
    Lessons {
        /// Skip the cache and fetch fresh
        #[arg(long)]
        refresh: bool,
    },

    /// Show one lesson's details
    Show {
        /// Lesson id as shown by `histquiz lessons`
        lesson_id: String,

        /// Skip the cache and fetch fresh
        #[arg(long)]
        refresh: bool,
    },

    /// Run an interactive quiz session
    Play {
        /// Lesson id; omit to pick from the list
        lesson_id: Option<String>,

        /// Skip the cache and fetch fresh
        #[arg(long)]
        refresh: bool,
    },

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("histquiz=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Lessons { refresh } => commands::lessons::execute(refresh, cli.config).await,
        Commands::Show { lesson_id, refresh } => {
            commands::show::execute(lesson_id, refresh, cli.config).await
        }
        Commands::Play { lesson_id, refresh } => {
            commands::play::execute(lesson_id, refresh, cli.config).await
        }
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
