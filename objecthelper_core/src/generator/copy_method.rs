//! Object-to-object copy method synthesis.
//!
//! Given a method such as `OrderDto toDto(Order order)`, the first parameter
//! is the source and the return type is the target. The target is built
//! through its static `builder()`/`newBuilder()` factory when it has one,
//! otherwise through its default constructor and setters. Fields are paired
//! by exact name; anything that cannot be paired degrades to a one-line
//! comment instead of an error.

use super::accessor::{accessor_name, has_getter_method, has_setter_method};
use crate::{
    config::CopyConfig,
    error::{ObjectHelperError, Result},
    naming::setter_name,
    registry::ClassLookup,
    types::{ClassDescriptor, FieldDescriptor, MethodDescriptor},
};
use bon::Builder;
use strum::Display;
use tracing::{debug, trace};

const BUILDER_FACTORIES: &[&str] = &["builder", "newBuilder"];
const BUILD_METHOD: &str = "build";
const BODY_INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum GenerationStrategy {
    Builder,
    Setter,
}

/// A target's static builder factory and the builder class it returns.
#[derive(Debug, Clone, Copy)]
pub struct BuilderFactory<'a> {
    pub method: &'a MethodDescriptor,
    pub builder_class: &'a ClassDescriptor,
}

/// Source and target of a copy method, resolved from its declaration.
#[derive(Debug, Clone, Copy)]
pub struct CopyParticipants<'a> {
    pub source: &'a ClassDescriptor,
    pub target: &'a ClassDescriptor,
}

/// A method qualifies for copy generation when it takes at least one
/// parameter and returns a value.
pub fn is_copy_method_candidate(method: &MethodDescriptor) -> bool {
    !method.parameters.is_empty() && method.value_return_type().is_some()
}

/// Finds a static `builder`/`newBuilder` method on `target` (or a
/// superclass) whose return type resolves to a class with a `build` method.
///
/// Only names are compared; arity and parameter types are ignored.
pub fn find_builder_method<'a>(
    lookup: &'a dyn ClassLookup,
    target: &'a ClassDescriptor,
) -> Option<BuilderFactory<'a>> {
    lookup.all_methods(target).into_iter().find_map(|method| {
        if !method.is_static || !BUILDER_FACTORIES.contains(&method.name.as_str()) {
            return None;
        }
        let builder_class = method
            .value_return_type()
            .and_then(|ty| lookup.resolve_type(ty))?;
        lookup
            .all_methods(builder_class)
            .iter()
            .any(|m| m.name == BUILD_METHOD)
            .then_some(BuilderFactory {
                method,
                builder_class,
            })
    })
}

pub fn select_strategy(lookup: &dyn ClassLookup, target: &ClassDescriptor) -> GenerationStrategy {
    match find_builder_method(lookup, target) {
        Some(_) => GenerationStrategy::Builder,
        None => GenerationStrategy::Setter,
    }
}

/// Resolves the source (first parameter) and target (return type) classes.
pub fn resolve_participants<'a>(
    method: &MethodDescriptor,
    lookup: &'a dyn ClassLookup,
) -> Result<CopyParticipants<'a>> {
    let parameter = method
        .parameters
        .first()
        .ok_or_else(|| ObjectHelperError::unresolvable(&method.name, "method has no parameter"))?;
    let source = lookup.resolve_type(&parameter.param_type).ok_or_else(|| {
        ObjectHelperError::unresolvable(
            &method.name,
            format!("parameter type `{}` is not a known class", parameter.param_type),
        )
    })?;

    let return_type = method
        .value_return_type()
        .ok_or_else(|| ObjectHelperError::unresolvable(&method.name, "method returns no value"))?;
    let target = lookup.resolve_type(return_type).ok_or_else(|| {
        ObjectHelperError::unresolvable(
            &method.name,
            format!("return type `{return_type}` is not a known class"),
        )
    })?;

    Ok(CopyParticipants { source, target })
}

fn missing_on_source(field: &str) -> String {
    format!("// {field}: not present on source, set manually")
}

fn missing_setter(field: &str) -> String {
    format!("// {field}: no setter on target, set manually")
}

fn missing_getter(field: &str) -> String {
    format!("// {field}: no getter on source, set manually")
}

/// Generates copy method text: the method's own signature followed by a new
/// body.
#[derive(Builder)]
pub struct CopyMethodGenerator<'a> {
    lookup: &'a dyn ClassLookup,
    config: &'a CopyConfig,
}

impl<'a> CopyMethodGenerator<'a> {
    /// Resolves source and target from `method`, then generates.
    pub fn generate_for(&self, method: &MethodDescriptor) -> Result<String> {
        let participants = resolve_participants(method, self.lookup)?;
        self.generate(method, participants.source, participants.target)
    }

    pub fn generate(
        &self,
        method: &MethodDescriptor,
        source: &ClassDescriptor,
        target: &ClassDescriptor,
    ) -> Result<String> {
        let source_name = method
            .parameters
            .first()
            .map(|p| p.name.as_str())
            .ok_or_else(|| ObjectHelperError::unresolvable(&method.name, "method has no parameter"))?;

        let factory = find_builder_method(self.lookup, target);
        let strategy = match factory {
            Some(_) => GenerationStrategy::Builder,
            None => GenerationStrategy::Setter,
        };
        debug!(
            method = %method.name,
            source = %source.qualified_name(),
            target = %target.qualified_name(),
            %strategy,
            "Generating copy method"
        );

        let fields: Vec<&FieldDescriptor> = self
            .lookup
            .all_fields(target)
            .into_iter()
            .filter(|field| !field.excluded_from_copy())
            .collect();
        let source_fields = self.lookup.all_fields(source);
        let find_source_field =
            |name: &str| source_fields.iter().copied().find(|field| field.name == name);

        let (opening, closing, lines) = match factory {
            Some(factory) => {
                let opening = format!(
                    "{} builder = {}.{}();",
                    factory.builder_class.name, target.name, factory.method.name
                );
                let lines = fields
                    .iter()
                    .filter_map(|field| {
                        self.builder_line(field, find_source_field(&field.name), source, source_name)
                    })
                    .collect::<Vec<_>>();
                (opening, "return builder.build();".to_string(), lines)
            }
            None => {
                let opening = format!("{0} target = new {0}();", target.name);
                let lines = fields
                    .iter()
                    .filter_map(|field| {
                        self.setter_line(
                            field,
                            find_source_field(&field.name),
                            source,
                            target,
                            source_name,
                        )
                    })
                    .collect::<Vec<_>>();
                (opening, "return target;".to_string(), lines)
            }
        };

        Ok(assemble(&method.signature(), &opening, &lines, &closing))
    }

    fn builder_line(
        &self,
        field: &FieldDescriptor,
        source_field: Option<&FieldDescriptor>,
        source: &ClassDescriptor,
        source_name: &str,
    ) -> Option<String> {
        match source_field {
            Some(source_field) => {
                let accessor = accessor_name(self.lookup, source, source_field);
                Some(format!("builder.{}({source_name}.{accessor}());", field.name))
            }
            None => self.missing_field(field),
        }
    }

    fn setter_line(
        &self,
        field: &FieldDescriptor,
        source_field: Option<&FieldDescriptor>,
        source: &ClassDescriptor,
        target: &ClassDescriptor,
        source_name: &str,
    ) -> Option<String> {
        if !has_setter_method(self.lookup, target, &field.name) {
            trace!(field = %field.name, "Target has no setter");
            return Some(missing_setter(&field.name));
        }
        let Some(source_field) = source_field else {
            return self.missing_field(field);
        };
        if !has_getter_method(self.lookup, source, &source_field.name) {
            trace!(field = %field.name, "Source has no getter");
            return Some(missing_getter(&source_field.name));
        }
        let accessor = accessor_name(self.lookup, source, source_field);
        Some(format!(
            "target.{}({source_name}.{accessor}());",
            setter_name(&field.name)
        ))
    }

    fn missing_field(&self, field: &FieldDescriptor) -> Option<String> {
        trace!(field = %field.name, "No same-named source field");
        self.config
            .non_existent_field_generate_annotation
            .then(|| missing_on_source(&field.name))
    }
}

fn assemble(signature: &str, opening: &str, lines: &[String], closing: &str) -> String {
    let mut out = format!("{signature} {{\n{BODY_INDENT}{opening}\n");
    if !lines.is_empty() {
        out.push('\n');
        for line in lines {
            out.push_str(BODY_INDENT);
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push('\n');
    out.push_str(BODY_INDENT);
    out.push_str(closing);
    out.push_str("\n}");
    out
}

/// Generates a copy method for `method`, resolving its source and target
/// through `lookup`.
pub fn generate_copy_method(
    method: &MethodDescriptor,
    lookup: &dyn ClassLookup,
    config: &CopyConfig,
) -> Result<String> {
    CopyMethodGenerator::builder()
        .lookup(lookup)
        .config(config)
        .build()
        .generate_for(method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        registry::ClassRegistry,
        types::{PrimitiveType, TypeDescriptor},
    };
    use pretty_assertions::assert_eq;

    fn ty(text: &str) -> TypeDescriptor {
        text.parse().unwrap()
    }

    fn getter(name: &str, ret: &str) -> MethodDescriptor {
        MethodDescriptor::new(name).returning(ty(ret))
    }

    fn setter(name: &str, param: &str) -> MethodDescriptor {
        MethodDescriptor::new(name).with_parameter("value", ty(param))
    }

    fn to_dto() -> MethodDescriptor {
        MethodDescriptor::new("toDto")
            .with_parameter("order", ty("com.acme.Order"))
            .returning(ty("com.acme.OrderDto"))
            .with_declaration("public OrderDto toDto(Order order) {\n    return null;\n}")
    }

    fn order() -> ClassDescriptor {
        ClassDescriptor::new("Order", "com.acme.Order")
            .with_field(FieldDescriptor::new("id", ty("long")))
            .with_field(FieldDescriptor::new("active", ty("boolean")))
            .with_field(FieldDescriptor::new("note", ty("String")))
            .with_method(getter("getId", "long"))
            .with_method(getter("isActive", "boolean"))
    }

    fn setter_dto() -> ClassDescriptor {
        ClassDescriptor::new("OrderDto", "com.acme.OrderDto")
            .with_field(FieldDescriptor::new("VERSION", ty("String")).with_static())
            .with_field(FieldDescriptor::new("id", ty("long")))
            .with_field(FieldDescriptor::new("active", ty("boolean")))
            .with_field(FieldDescriptor::new("note", ty("String")))
            .with_field(FieldDescriptor::new("channel", ty("String")))
            .with_field(FieldDescriptor::new("createdBy", ty("String")).with_final(false))
            .with_method(setter("setId", "long"))
            .with_method(setter("setActive", "boolean"))
            .with_method(setter("setNote", "String"))
            .with_method(setter("setChannel", "String"))
    }

    fn builder_dto(with_build: bool) -> Vec<ClassDescriptor> {
        let mut builder = ClassDescriptor::new("Builder", "com.acme.OrderDto.Builder")
            .with_method(setter("id", "long"))
            .with_method(setter("active", "boolean"));
        if with_build {
            builder = builder.with_method(getter("build", "com.acme.OrderDto"));
        }
        let dto = ClassDescriptor::new("OrderDto", "com.acme.OrderDto")
            .with_field(FieldDescriptor::new("id", ty("long")))
            .with_field(FieldDescriptor::new("active", ty("boolean")))
            .with_field(FieldDescriptor::new("channel", ty("String")))
            .with_method(getter("newBuilder", "com.acme.OrderDto.Builder").with_static());
        vec![dto, builder]
    }

    fn generate(registry: &ClassRegistry, config: &CopyConfig) -> Result<String> {
        generate_copy_method(&to_dto(), registry, config)
    }

    #[test]
    fn test_setter_strategy_output() {
        let registry = ClassRegistry::new(vec![order(), setter_dto()]);
        let text = generate(&registry, &CopyConfig::default()).unwrap();
        assert_eq!(
            text,
            "public OrderDto toDto(Order order) {
    OrderDto target = new OrderDto();

    target.setId(order.getId());
    target.setActive(order.isActive());
    // note: no getter on source, set manually
    // channel: not present on source, set manually

    return target;
}"
        );
    }

    #[test]
    fn test_builder_strategy_output() {
        let mut classes = builder_dto(true);
        classes.push(order());
        let registry = ClassRegistry::new(classes);
        let text = generate(&registry, &CopyConfig::default()).unwrap();
        assert_eq!(
            text,
            "public OrderDto toDto(Order order) {
    Builder builder = OrderDto.newBuilder();

    builder.id(order.getId());
    builder.active(order.isActive());
    // channel: not present on source, set manually

    return builder.build();
}"
        );
    }

    #[test]
    fn test_builder_selection_requires_build_method() {
        let registry = ClassRegistry::new(builder_dto(true));
        let target = registry.find_class("com.acme.OrderDto").unwrap();
        assert_eq!(select_strategy(&registry, target), GenerationStrategy::Builder);

        let registry = ClassRegistry::new(builder_dto(false));
        let target = registry.find_class("com.acme.OrderDto").unwrap();
        assert_eq!(select_strategy(&registry, target), GenerationStrategy::Setter);
    }

    #[test]
    fn test_builder_factory_must_be_static() {
        let builder = ClassDescriptor::new("Builder", "com.acme.Builder")
            .with_method(getter("build", "com.acme.Thing"));
        let thing = ClassDescriptor::new("Thing", "com.acme.Thing")
            .with_method(getter("builder", "com.acme.Builder"));
        let registry = ClassRegistry::new(vec![thing, builder]);
        let target = registry.find_class("Thing").unwrap();
        assert_eq!(select_strategy(&registry, target), GenerationStrategy::Setter);
    }

    #[test]
    fn test_missing_field_annotation_disabled() {
        let registry = ClassRegistry::new(vec![order(), setter_dto()]);
        let config = CopyConfig {
            non_existent_field_generate_annotation: false,
        };
        let text = generate(&registry, &config).unwrap();
        assert!(!text.contains("channel"), "{text}");
        // per-target diagnostics are not governed by the flag
        assert!(text.contains("// note: no getter on source"), "{text}");
    }

    #[test]
    fn test_builder_missing_field_annotation_disabled() {
        let mut classes = builder_dto(true);
        classes.push(order());
        let registry = ClassRegistry::new(classes);
        let config = CopyConfig {
            non_existent_field_generate_annotation: false,
        };
        let text = generate(&registry, &config).unwrap();
        assert_eq!(
            text,
            "public OrderDto toDto(Order order) {
    Builder builder = OrderDto.newBuilder();

    builder.id(order.getId());
    builder.active(order.isActive());

    return builder.build();
}"
        );
    }

    #[test]
    fn test_missing_field_yields_exactly_one_comment() {
        let registry = ClassRegistry::new(vec![order(), setter_dto()]);
        let text = generate(&registry, &CopyConfig::default()).unwrap();
        let mentions: Vec<&str> = text.lines().filter(|l| l.contains("channel")).collect();
        assert_eq!(mentions, vec!["    // channel: not present on source, set manually"]);
    }

    #[test]
    fn test_missing_setter_skips_field() {
        let source = ClassDescriptor::new("Order", "com.acme.Order")
            .with_field(FieldDescriptor::new("id", ty("long")))
            .with_method(getter("getId", "long"));
        let target = ClassDescriptor::new("OrderDto", "com.acme.OrderDto")
            .with_field(FieldDescriptor::new("id", ty("long")));
        let registry = ClassRegistry::new(vec![source, target]);
        let text = generate(&registry, &CopyConfig::default()).unwrap();
        assert!(text.contains("    // id: no setter on target, set manually\n"), "{text}");
        assert!(!text.contains("target.setId"), "{text}");
    }

    #[test]
    fn test_copy_excludes_static_and_final_fields() {
        let registry = ClassRegistry::new(vec![
            order().with_field(FieldDescriptor::new("createdBy", ty("String"))),
            setter_dto(),
        ]);
        let text = generate(&registry, &CopyConfig::default()).unwrap();
        assert!(!text.contains("VERSION"), "{text}");
        assert!(!text.contains("createdBy"), "{text}");
    }

    #[test]
    fn test_matching_is_by_name_only() {
        let source = ClassDescriptor::new("Order", "com.acme.Order")
            .with_field(FieldDescriptor::new("id", ty("String")))
            .with_method(getter("getId", "String"));
        let target = ClassDescriptor::new("OrderDto", "com.acme.OrderDto")
            .with_field(FieldDescriptor::new("id", ty("long")))
            .with_method(setter("setId", "long"));
        let registry = ClassRegistry::new(vec![source, target]);
        let text = generate(&registry, &CopyConfig::default()).unwrap();
        assert!(text.contains("target.setId(order.getId());"), "{text}");
    }

    #[test]
    fn test_inherited_fields_are_copied_after_declared_ones() {
        let base = ClassDescriptor::new("Entity", "com.acme.Entity")
            .with_field(FieldDescriptor::new("version", ty("int")))
            .with_method(getter("getVersion", "int"))
            .with_method(setter("setVersion", "int"));
        let source = order().extending("com.acme.Entity");
        let target = ClassDescriptor::new("OrderDto", "com.acme.OrderDto")
            .extending("com.acme.Entity")
            .with_field(FieldDescriptor::new("id", ty("long")))
            .with_method(setter("setId", "long"));
        let registry = ClassRegistry::new(vec![base, source, target]);
        let text = generate(&registry, &CopyConfig::default()).unwrap();
        let id = text.find("target.setId(order.getId());").unwrap();
        let version = text.find("target.setVersion(order.getVersion());").unwrap();
        assert!(id < version, "{text}");
    }

    #[test]
    fn test_target_without_fields() {
        let registry = ClassRegistry::new(vec![
            order(),
            ClassDescriptor::new("OrderDto", "com.acme.OrderDto"),
        ]);
        let text = generate(&registry, &CopyConfig::default()).unwrap();
        assert_eq!(
            text,
            "public OrderDto toDto(Order order) {\n    OrderDto target = new OrderDto();\n\n    return target;\n}"
        );
    }

    #[test]
    fn test_unresolvable_participants() {
        let registry = ClassRegistry::new(vec![order(), setter_dto()]);
        let config = CopyConfig::default();

        let no_param = MethodDescriptor::new("create").returning(ty("com.acme.OrderDto"));
        let err = generate_copy_method(&no_param, &registry, &config).unwrap_err();
        assert!(err.is_nothing_generated());

        let void_return = MethodDescriptor::new("apply")
            .with_parameter("order", ty("com.acme.Order"))
            .returning(TypeDescriptor::Primitive(PrimitiveType::Void));
        assert!(matches!(
            generate_copy_method(&void_return, &registry, &config),
            Err(ObjectHelperError::UnresolvableParticipant { .. })
        ));

        let unknown_target = MethodDescriptor::new("toView")
            .with_parameter("order", ty("com.acme.Order"))
            .returning(ty("com.acme.OrderView"));
        let err = generate_copy_method(&unknown_target, &registry, &config).unwrap_err();
        assert!(err.to_string().contains("com.acme.OrderView"), "{err}");
    }

    #[test]
    fn test_candidate_check() {
        assert!(is_copy_method_candidate(&to_dto()));
        assert!(!is_copy_method_candidate(
            &MethodDescriptor::new("reset").with_parameter("order", ty("com.acme.Order"))
        ));
        assert!(!is_copy_method_candidate(
            &MethodDescriptor::new("create").returning(ty("com.acme.OrderDto"))
        ));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let registry = ClassRegistry::new(vec![order(), setter_dto()]);
        let config = CopyConfig::default();
        assert_eq!(
            generate(&registry, &config).unwrap(),
            generate(&registry, &config).unwrap()
        );
    }
}
