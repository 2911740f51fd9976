//! vocab CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

use vocab_core::config::load_config_from;
use vocab_core::PairStore;

mod commands;

use commands::review::ReviewFormat;

#[derive(Parser)]
#[command(name = "vocab", version, about = "Plain-text vocabulary builder and quiz")]
struct Cli {
    /// Word file to use (overrides config and VOCAB_WORDS_FILE)
    #[arg(long, global = true)]
    words_file: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive text menu (default)
    Menu,

    /// List the words in your file
    Review {
        /// Output format: table, plain, json
        #[arg(long, value_enum, default_value = "table")]
        format: ReviewFormat,

        /// Maximum words to show (default from config)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Add a word
    Add {
        /// The word to add
        word: String,

        /// Its definition (stored as TBD when omitted)
        definition: Option<String>,
    },

    /// Look up a definition in your file, then the built-in dictionary
    Lookup {
        /// The word to look up
        word: String,
    },

    /// Merge new words from a pack file
    Import {
        /// Pack file, one `word - definition` per line
        pack: PathBuf,
    },

    /// Free-response quiz: type the word for each definition
    Quiz {
        /// Stop after this many answers
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Multiple-choice quiz: pick the definition for each word
    Choice {
        /// Word list with `word:definition` lines (default: your word file)
        file: Option<PathBuf>,

        /// Number of questions (default from config)
        #[arg(long)]
        count: Option<usize>,
    },

    /// Create a word file, starter config, and starter pack
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Commands block on stdin, so they run off the async thread and race Ctrl+C.
    let task = tokio::task::spawn_blocking(move || run(cli));

    tokio::select! {
        Ok(()) = tokio::signal::ctrl_c() => {
            println!("\nExiting...");
            process::exit(0);
        }
        joined = task => {
            let result = joined.context("command task failed").and_then(|r| r);
            if let Err(e) = result {
                eprintln!("Error: {e:#}");
                process::exit(1);
            }
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config_from(cli.config.as_deref())?;
    if let Some(words_file) = cli.words_file {
        config.words_file = words_file;
    }
    let store = PairStore::new(&config.words_file);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::menu::execute(&store, &config),
        Commands::Review { format, limit } => {
            commands::review::execute(&store, format, limit.unwrap_or(config.review_limit))
        }
        Commands::Add { word, definition } => {
            commands::add::execute(&store, &word, definition.as_deref())
        }
        Commands::Lookup { word } => commands::lookup::execute(&store, &word),
        Commands::Import { pack } => commands::import::execute(&store, &pack),
        Commands::Quiz { limit } => commands::quiz::execute(&store, limit),
        Commands::Choice { file, count } => commands::choice::execute(
            &store,
            file.as_deref(),
            count.unwrap_or(config.question_count),
        ),
        Commands::Init => commands::init::execute(&store),
    }
}
