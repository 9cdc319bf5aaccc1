//! Info command - displays the classes in a model file and the effective
//! configuration.

use super::{emit, load_config, load_model};
use crate::cli::{Cli, InfoArgs, InfoFormat};
use objecthelper_core::{ClassRegistry, ObjectHelperConfig, error::Result};
use serde_json::json;

pub fn run(cli: &Cli, args: &InfoArgs) -> Result<()> {
    let registry = load_model(&args.model)?;
    let config = if args.show_config {
        Some(load_config(cli)?)
    } else {
        None
    };

    let text = match args.format {
        InfoFormat::Pretty => render_pretty(&registry, config.as_ref()),
        InfoFormat::Json => render_json(&registry, config.as_ref())?,
    };
    emit(cli, &text)
}

fn switch_label(open: bool) -> &'static str {
    if open { "enabled" } else { "disabled" }
}

fn render_pretty(registry: &ClassRegistry, config: Option<&ObjectHelperConfig>) -> String {
    let mut lines = Vec::new();

    if let Some(config) = config {
        lines.push("=== Configuration ===".to_string());
        lines.push(String::new());
        lines.push("Generators:".to_string());
        lines.push(format!(
            "  Copy method: {}",
            switch_label(config.features.object_copy.is_open())
        ));
        lines.push(format!(
            "  JSON stub:   {}",
            switch_label(config.features.class_to_json.is_open())
        ));
        lines.push(format!(
            "  XML stub:    {}",
            switch_label(config.features.class_to_xml.is_open())
        ));
        lines.push(String::new());
        lines.push(format!(
            "Core namespaces: {}",
            config.stub.core_namespaces.join(", ")
        ));
        lines.push(format!("Cycle guard: {}", config.stub.cycle_guard));
        lines.push(format!("Max depth: {}", config.stub.max_depth));
        lines.push(format!(
            "Missing-field comments: {}",
            switch_label(config.copy.non_existent_field_generate_annotation)
        ));
        lines.push(String::new());
    }

    lines.push(format!("=== Classes ({}) ===", registry.len()));
    for class in registry.classes() {
        lines.push(String::new());
        lines.push(class.qualified_name().to_string());
        if let Some(parent) = &class.superclass {
            lines.push(format!("  extends {parent}"));
        }
        for field in &class.fields {
            let mut modifiers = Vec::new();
            if field.is_static {
                modifiers.push("static");
            }
            if field.is_final {
                modifiers.push("final");
            }
            let prefix = if modifiers.is_empty() {
                String::new()
            } else {
                format!("{} ", modifiers.join(" "))
            };
            lines.push(format!("  {prefix}{}: {}", field.name, field.field_type));
        }
        lines.push(format!("  ({} methods)", class.methods.len()));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_json(registry: &ClassRegistry, config: Option<&ObjectHelperConfig>) -> Result<String> {
    let classes: Vec<_> = registry
        .classes()
        .iter()
        .map(|class| {
            json!({
                "name": class.name,
                "qualified_name": class.qualified_name(),
                "superclass": class.superclass,
                "fields": class.fields,
                "methods": class.methods.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(),
            })
        })
        .collect();

    let mut report = json!({ "classes": classes });
    if let Some(config) = config {
        report["config"] = serde_json::to_value(config)?;
    }
    Ok(serde_json::to_string_pretty(&report)?)
}
