//! Copy command - generates a copy method and optionally splices it into a
//! source file.

use super::{emit, load_config, load_model, require_open};
use crate::cli::{Cli, CopyArgs};
use objecthelper_core::{
    ClassLookup,
    error::{ObjectHelperError, Result},
    generate_copy_method, is_copy_method_candidate, replace_method, select_strategy,
};
use std::fs;
use tracing::{debug, info};

pub fn run(cli: &Cli, args: &CopyArgs) -> Result<()> {
    let config = load_config(cli)?;
    require_open(config.features.object_copy.is_open(), "object_copy")?;

    let registry = load_model(&args.model)?;
    let class = registry.find_class(&args.class)?;
    let method = registry
        .all_methods(class)
        .into_iter()
        .find(|m| m.name == args.method)
        .ok_or_else(|| ObjectHelperError::method_not_found(&args.method, class.qualified_name()))?;

    if !is_copy_method_candidate(method) {
        return Err(ObjectHelperError::unresolvable(
            &method.name,
            "a copy method needs a parameter and a return value",
        ));
    }
    if let Some(target) = method.value_return_type().and_then(|ty| registry.resolve_type(ty)) {
        debug!("Strategy for {}: {}", target.name, select_strategy(&registry, target));
    }

    let generated = generate_copy_method(method, &registry, &config.copy)?;

    match &args.splice {
        Some(path) => {
            let source = fs::read_to_string(path)?;
            let spliced = replace_method(&source, method, &generated)?;
            let destination = cli.output.as_deref().unwrap_or(path);
            fs::write(destination, spliced)?;
            info!("Replaced {} in {:?}", method.name, destination);
            Ok(())
        }
        None => emit(cli, &generated),
    }
}
