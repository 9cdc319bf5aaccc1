//! Init command - initializes objecthelper.toml configuration.

use crate::cli::{Cli, InitArgs};
use objecthelper_core::{
    ObjectHelperConfig,
    config::CONFIG_FILE_NAME,
    error::{ObjectHelperError, Result},
};
use std::{fs, path::Path};
use tracing::{error, info};

const HEADER: &str = "# ObjectHelper Configuration
#
# [features]  \"open\" or \"close\" per generator
# [stub]      JSON/XML stub settings; cycle_guard is \"root_only\" or \"ancestor_chain\"
# [copy]      copy-method settings

";

/// Runs the init command.
pub fn run(cli: &Cli, args: &InitArgs) -> Result<()> {
    let config_path = cli
        .output
        .as_deref()
        .unwrap_or_else(|| Path::new(CONFIG_FILE_NAME));

    if config_path.exists() && !args.force {
        error!("{:?} already exists. Use --force to overwrite.", config_path);
        return Err(ObjectHelperError::config(format!(
            "{} already exists",
            config_path.display()
        )));
    }

    fs::write(config_path, default_config_contents()?)?;
    info!("Created {:?}", config_path);
    Ok(())
}

fn default_config_contents() -> Result<String> {
    let body = ObjectHelperConfig::default().to_toml_string()?;
    Ok(format!("{HEADER}{body}"))
}
