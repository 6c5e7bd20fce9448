use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Exception to REST error mapping tool
#[derive(Debug, Parser)]
#[command(name = "resterror", about = "Inspect and exercise exception to REST error mappings")]
pub struct Args {
    /// Mapping file; when omitted `restErrors.properties` is looked up in
    /// `RESTERROR_CONFIG_DIR`, the working directory, then next to the binary
    #[arg(short, long, env = "RESTERROR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter directive
    #[arg(long, default_value = "warn", env = "RESTERROR_LOG")]
    pub log_filter: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate the mappings and list them in resolution order
    Check,
    /// Resolve a failure and print the error body
    Resolve {
        /// Type chain of the failure, most-derived first
        #[arg(required = true)]
        type_chain: Vec<String>,

        /// Message carried by the failure
        #[arg(short, long)]
        message: Option<String>,
    },
}
