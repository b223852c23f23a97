use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the parsed server topology as JSON.
    Topology,
    /// Read a key.
    Get {
        key: String,
        /// Use the hot-key protocol.
        #[arg(long)]
        hot: bool,
        /// Print the value as hex.
        #[arg(long)]
        hex: bool,
    },
    /// Store a UTF-8 value.
    Set {
        key: String,
        value: String,
        /// Expiration in seconds, 0 for none.
        #[arg(long, default_value_t = 0)]
        expiration: u32,
    },
    Remove {
        key: String,
    },
    Incr {
        key: String,
        amount: u64,
    },
    Decr {
        key: String,
        amount: u64,
    },
    /// Flush every entry of the write (and backup) pool.
    Clear,
}
