//! FileDB CLI
//!
//! Command-line interface for a local FileDB directory.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use filedb::{store, Command};
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset; keeps startup `info` logs quiet
const DEFAULT_LOG_FILTER: &str = "warn";

/// FileDB CLI
#[derive(Parser, Debug)]
#[command(name = "filedb-cli")]
#[command(about = "CLI for the FileDB key-value store")]
#[command(version)]
struct Args {
    /// Storage directory (defaults to ./file-db)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Store a new key-value pair
    Create {
        /// The key to create
        key: String,

        /// The value to store
        value: String,
    },

    /// Get a value by key
    Read {
        /// The key to read
        key: String,
    },

    /// Overwrite an existing key
    Update {
        /// The key to update
        key: String,

        /// The new value
        value: String,
    },

    /// Delete a key
    Delete {
        /// The key to delete
        key: String,
    },

    /// Create the key, or update it if it already exists
    Upsert {
        /// The key to set
        key: String,

        /// The value to set
        value: String,
    },
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Create { key, value } => Command::Create { key, value },
            Commands::Read { key } => Command::Read { key },
            Commands::Update { key, value } => Command::Update { key, value },
            Commands::Delete { key } => Command::Delete { key },
            Commands::Upsert { key, value } => Command::Upsert { key, value },
        }
    }
}

fn main() {
    // Logs go to stderr so stdout only carries values
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let command = Command::from(args.command);

    // Exits the process if the directory can't be prepared
    let engine = store::initialize(args.data_dir.as_deref());

    tracing::debug!(
        command = ?command.command_type(),
        key = command.key(),
        write = command.is_write(),
        "executing command"
    );

    match engine.execute(command) {
        Ok(Some(value)) => println!("{}", value),
        Ok(None) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            // 1: wrong key state (caller can retry with another command), 2: everything else
            let code = if e.is_key_state() { 1 } else { 2 };
            std::process::exit(code);
        }
    }
}
