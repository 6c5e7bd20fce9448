#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;
mod telemetry;

use std::sync::Arc;

use args::{Args, Command};
use clap::Parser;
use resterror_config::MappingConfig;
use resterror_mapper::{ExceptionMapper, RaisedError};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize telemetry
    telemetry::init(&args.log_filter)?;

    // Load configuration
    let config = match args.config {
        Some(ref path) => MappingConfig::load_path(path)?,
        None => MappingConfig::load_default()?,
    };

    match args.command {
        Command::Check => check(&config),
        Command::Resolve { type_chain, message } => resolve(config, type_chain, message),
    }
}

/// Print every mapping as `key<TAB>template`
#[allow(clippy::unnecessary_wraps)]
fn check(config: &MappingConfig) -> anyhow::Result<()> {
    if let Some(ref base) = config.base_more_info_url {
        println!("# base more-info url: {base}");
    }

    for (key, template) in &config.mappings {
        println!("{key}\t{template}");
    }

    tracing::info!(mappings = config.mappings.len(), "configuration is valid");
    Ok(())
}

fn resolve(config: MappingConfig, type_chain: Vec<String>, message: Option<String>) -> anyhow::Result<()> {
    let mapper = ExceptionMapper::from_config(config);

    // Stand-in failure built from the command line
    let mut exception = RaisedError::new(type_chain);
    if let Some(message) = message {
        exception = exception.with_message(message);
    }

    let Some(resolved) = mapper.build_error_for(Arc::new(exception)) else {
        anyhow::bail!("no mapping matched; a server would respond with a bare 500");
    };

    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}
