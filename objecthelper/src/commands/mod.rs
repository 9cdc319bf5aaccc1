//! Command handlers for the ObjectHelper CLI.

pub mod copy;
pub mod info;
pub mod init;
pub mod stub;

use crate::cli::{Cli, Commands};
use objecthelper_core::{
    ClassRegistry, ObjectHelperConfig,
    error::{ObjectHelperError, Result},
};
use std::{fs, path::Path};
use tracing::{debug, info};

/// Dispatches the parsed command line.
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Json(args) => stub::run_json(cli, args),
        Commands::Xml(args) => stub::run_xml(cli, args),
        Commands::Copy(args) => copy::run(cli, args),
        Commands::Info(args) => info::run(cli, args),
        Commands::Init(args) => init::run(cli, args),
    }
}

pub(crate) fn load_config(cli: &Cli) -> Result<ObjectHelperConfig> {
    ObjectHelperConfig::load(cli.config.as_deref())
}

pub(crate) fn load_model(path: &Path) -> Result<ClassRegistry> {
    let registry = ClassRegistry::from_path(path)?;
    debug!("Loaded {} classes from {:?}", registry.len(), path);
    Ok(registry)
}

/// Writes generated text to `--output` when given, stdout otherwise.
pub(crate) fn emit(cli: &Cli, text: &str) -> Result<()> {
    match &cli.output {
        Some(path) => {
            fs::write(path, ensure_trailing_newline(text))?;
            info!("Wrote {:?}", path);
        }
        None => print!("{}", ensure_trailing_newline(text)),
    }
    Ok(())
}

fn ensure_trailing_newline(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{text}\n")
    }
}

pub(crate) fn require_open(open: bool, feature: &str) -> Result<()> {
    if open {
        Ok(())
    } else {
        Err(ObjectHelperError::feature_disabled(feature))
    }
}
