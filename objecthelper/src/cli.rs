//! Command-line interface definitions for ObjectHelper.

use clap::{Args, Parser, Subcommand, ValueEnum};
use objecthelper_core::config::CONFIG_ENV_VAR;
use std::path::PathBuf;

/// ObjectHelper - JSON/XML stubs and copy methods from class models
#[derive(Parser, Debug)]
#[command(name = "objecthelper")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to objecthelper.toml configuration file
    #[arg(short, long, global = true, env = CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Enable verbose output (-v, -vv, -vvv for increasing verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write generated output to this file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a placeholder JSON document for a class
    Json(StubArgs),

    /// Generate a placeholder XML document for a class
    Xml(StubArgs),

    /// Generate the body of an object copy method
    Copy(CopyArgs),

    /// Display the classes in a model file
    Info(InfoArgs),

    /// Initialize a new objecthelper.toml configuration file
    Init(InitArgs),
}

// ============================================================================
// Stub Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct StubArgs {
    /// Class model file (.json or .toml)
    pub model: PathBuf,

    /// Class to generate from (qualified or unambiguous simple name)
    #[arg(long)]
    pub class: String,
}

// ============================================================================
// Copy Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct CopyArgs {
    /// Class model file (.json or .toml)
    pub model: PathBuf,

    /// Class declaring the copy method
    #[arg(long)]
    pub class: String,

    /// Name of the copy method
    #[arg(long)]
    pub method: String,

    /// Source file to rewrite in place with the generated method
    #[arg(long)]
    pub splice: Option<PathBuf>,
}

// ============================================================================
// Info Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Class model file (.json or .toml)
    pub model: PathBuf,

    /// Also show the effective configuration
    #[arg(long)]
    pub show_config: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "pretty")]
    pub format: InfoFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum InfoFormat {
    Pretty,
    Json,
}

// ============================================================================
// Init Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing objecthelper.toml if present
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Log filter directive implied by `-q` / `-v`.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
