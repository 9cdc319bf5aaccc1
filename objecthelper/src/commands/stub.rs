//! Json and xml commands - placeholder documents for a class.

use super::{emit, load_config, load_model, require_open};
use crate::cli::{Cli, StubArgs};
use objecthelper_core::{error::Result, generate_json_stub, generate_xml_stub};
use tracing::info;

pub fn run_json(cli: &Cli, args: &StubArgs) -> Result<()> {
    let config = load_config(cli)?;
    require_open(config.features.class_to_json.is_open(), "class_to_json")?;

    let registry = load_model(&args.model)?;
    let class = registry.find_class(&args.class)?;
    info!("Generating JSON stub for {}", class.qualified_name());

    let json = generate_json_stub(Some(class), &registry, &config.stub)?;
    emit(cli, &json)
}

pub fn run_xml(cli: &Cli, args: &StubArgs) -> Result<()> {
    let config = load_config(cli)?;
    require_open(config.features.class_to_xml.is_open(), "class_to_xml")?;

    let registry = load_model(&args.model)?;
    let class = registry.find_class(&args.class)?;
    info!("Generating XML stub for {}", class.qualified_name());

    let xml = generate_xml_stub(Some(class), &registry, &config.stub)?;
    emit(cli, &xml)
}
