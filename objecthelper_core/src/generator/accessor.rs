//! Accessor naming and presence checks.
//!
//! Matching is by method name and parameter count only; parameter and return
//! types are never compared.

use crate::{
    classify::TypeClassifier,
    naming::{boolean_getter_name, getter_name, setter_name},
    registry::ClassLookup,
    types::{ClassDescriptor, FieldDescriptor},
};
use once_cell::sync::Lazy;
use regex::Regex;

/// A field already named like a boolean accessor, e.g. `isActive`.
static ACCESSOR_SHAPED_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^is\p{Lu}").expect("Invalid accessor name regex"));

/// True when `class` (or a superclass) has a zero-parameter `get<Field>` or
/// `is<Field>` method.
pub fn has_getter_method(lookup: &dyn ClassLookup, class: &ClassDescriptor, field_name: &str) -> bool {
    let getter = getter_name(field_name);
    let boolean_getter = boolean_getter_name(field_name);
    lookup.all_methods(class).into_iter().any(|method| {
        (method.name == getter || method.name == boolean_getter) && method.parameter_count() == 0
    })
}

/// True when `class` (or a superclass) has a one-parameter `set<Field>`
/// method.
pub fn has_setter_method(lookup: &dyn ClassLookup, class: &ClassDescriptor, field_name: &str) -> bool {
    let setter = setter_name(field_name);
    lookup
        .all_methods(class)
        .into_iter()
        .any(|method| method.name == setter && method.parameter_count() == 1)
}

fn has_zero_arg_method(lookup: &dyn ClassLookup, class: &ClassDescriptor, name: &str) -> bool {
    lookup
        .all_methods(class)
        .into_iter()
        .any(|method| method.name == name && method.parameter_count() == 0)
}

/// Name of the method used to read `field` from `source`.
///
/// Boolean fields (primitive or wrapper) prefer an `is` accessor: a field
/// already named `isXxx` is used as is, otherwise `is<Field>` when `source`
/// declares it with no parameters. Everything else reads through
/// `get<Field>`.
pub fn accessor_name(lookup: &dyn ClassLookup, source: &ClassDescriptor, field: &FieldDescriptor) -> String {
    let is_boolean = TypeClassifier::new(lookup)
        .classify(&field.field_type)
        .is_boolean();

    if is_boolean {
        if ACCESSOR_SHAPED_NAME.is_match(&field.name) {
            return field.name.clone();
        }
        let is_accessor = boolean_getter_name(&field.name);
        if has_zero_arg_method(lookup, source, &is_accessor) {
            return is_accessor;
        }
    }

    getter_name(&field.name)
}
