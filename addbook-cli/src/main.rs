//! AddBook CLI - submit books to a library service from the terminal

mod commands;

use addbook_core::{AddBookConfig, BookDraft};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "addbook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the library API (overrides ADDBOOK_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// How long feedback banners stay up, in milliseconds (overrides ADDBOOK_BANNER_MS)
    #[arg(long, global = true)]
    banner_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

/// The three form inputs
#[derive(Args)]
struct BookArgs {
    /// Book title (6-50 characters)
    #[arg(short, long, default_value = "")]
    title: String,

    /// Author name (6-50 characters)
    #[arg(short, long, default_value = "")]
    author: String,

    /// Book status: "Available" or "Already Booked"
    #[arg(short, long, default_value = "")]
    status: String,
}

impl From<BookArgs> for BookDraft {
    fn from(args: BookArgs) -> Self {
        BookDraft::new(args.title, args.author, args.status)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and submit a new book
    Add {
        #[command(flatten)]
        book: BookArgs,

        /// Exit as soon as the outcome is known instead of waiting for the banner to hide
        #[arg(long)]
        no_wait: bool,
    },

    /// Validate a book without submitting it
    Check {
        #[command(flatten)]
        book: BookArgs,

        /// Output errors as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the form fields and the status options
    Options,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "addbook_cli=debug,addbook_core=debug"
    } else {
        "addbook_cli=info,addbook_core=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = AddBookConfig::from_env().context("Invalid configuration")?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(ms) = cli.banner_ms {
        config.banner_duration = Duration::from_millis(ms);
    }
    config.validate().context("Invalid configuration")?;

    match cli.command {
        Commands::Add { book, no_wait } => commands::add(&config, book.into(), !no_wait).await,

        Commands::Check { book, json } => commands::check(&book.into(), json),

        Commands::Options => commands::options(),
    }
}
