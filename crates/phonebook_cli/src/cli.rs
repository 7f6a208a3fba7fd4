//! Command-line surface of the `phonebook` binary.

use clap::{Args, Parser, Subcommand};
use phonebook_core::DEFAULT_STORAGE_KEY;
use std::path::PathBuf;

const DEFAULT_DB_FILE_NAME: &str = "phonebook.sqlite3";

/// Keep a small phonebook in a local database.
#[derive(Debug, Parser)]
#[command(name = "phonebook", version, subcommand_required = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Database file holding the storage namespace
    #[arg(long, env = "PHONEBOOK_DB_PATH", global = true)]
    pub db: Option<PathBuf>,

    /// Use a throwaway in-memory namespace instead of the database file
    #[arg(long, global = true, conflicts_with = "db")]
    pub memory: bool,

    /// Storage key the contact list is saved under
    #[arg(
        long,
        env = "PHONEBOOK_STORAGE_KEY",
        default_value = DEFAULT_STORAGE_KEY,
        global = true
    )]
    pub key: String,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "PHONEBOOK_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = "PHONEBOOK_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,
}

impl GlobalOpts {
    /// Database path from flag/env, falling back to the OS temp dir.
    pub fn db_path(&self) -> PathBuf {
        self.db
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME))
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show contacts, optionally filtered by name
    List {
        /// Case-insensitive name fragment
        #[arg(long, short = 'f', default_value = "")]
        filter: String,
    },
    /// Add a contact unless the name is already taken
    Add { name: String, number: String },
    /// Delete a contact by id
    Delete { id: String },
    /// Wipe the whole storage namespace and start over
    Clear,
    /// Print the core library version
    Version,
}
