use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "boardroom")]
#[command(about = "Boardroom - simulated executive boardroom meetings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive boardroom meeting
    Run {
        /// Discussion topic announced in the CEO's opening line
        #[arg(long)]
        topic: Option<String>,

        /// Dataset: 'sample' or a path to a JSON file
        #[arg(long, default_value = "sample")]
        data: String,

        /// Message ceiling override (clamped to 30)
        #[arg(long)]
        ceiling: Option<usize>,

        /// Enable speech synthesis (needs a configured endpoint and
        /// BOARDROOM_SPEECH_KEY)
        #[arg(long)]
        speech: bool,

        /// Directory where transcripts, summaries and audio land
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Print the dataset overview
    Data {
        /// Dataset: 'sample' or a path to a JSON file
        #[arg(long, default_value = "sample")]
        data: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            topic,
            data,
            ceiling,
            speech,
            out_dir,
        } => {
            commands::run::execute(commands::run::RunOptions {
                topic,
                data,
                ceiling,
                speech,
                out_dir,
            })
            .await
        }
        Commands::Data { data } => commands::data::execute(&data),
    }
}
