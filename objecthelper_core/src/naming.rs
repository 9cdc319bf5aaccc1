//! Naming conventions shared by every generator.
//!
//! Accessor names, XML element names and item tags are all derived from field
//! and class names with the helpers below. Case conversion between camel and
//! snake case goes through `convert_case`; the first-letter helpers only touch
//! the first character so identifiers like `URLPath` keep their shape.

use convert_case::{Case, Casing};

/// Upper-cases the first character, leaving the rest untouched.
///
/// Blank input yields an empty string.
pub fn capitalize(s: &str) -> String {
    if s.trim().is_empty() {
        return String::new();
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => s.to_string(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-cases the first character, leaving the rest untouched.
pub fn uncapitalize(s: &str) -> String {
    if s.trim().is_empty() {
        return String::new();
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => s.to_string(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn camel_to_snake(s: &str) -> String {
    if s.trim().is_empty() {
        return String::new();
    }
    s.to_case(Case::Snake)
}

pub fn snake_to_camel(s: &str, first_capital: bool) -> String {
    if s.trim().is_empty() {
        return String::new();
    }
    if first_capital {
        s.to_case(Case::Pascal)
    } else {
        s.to_case(Case::Camel)
    }
}

/// Derives an item name from a plural container name.
///
/// Strips one trailing `s` when the name is longer than one character,
/// otherwise appends `Item`: `items` -> `item`, `data` -> `dataItem`.
pub fn singularize(name: &str) -> String {
    if name.is_empty() {
        return "item".to_string();
    }
    if name.len() > 1
        && let Some(stem) = name.strip_suffix('s')
    {
        return stem.to_string();
    }
    format!("{name}Item")
}

/// `get` + capitalized field name.
pub fn getter_name(field_name: &str) -> String {
    format!("get{}", capitalize(field_name))
}

/// `is` + capitalized field name.
pub fn boolean_getter_name(field_name: &str) -> String {
    format!("is{}", capitalize(field_name))
}

/// `set` + capitalized field name.
pub fn setter_name(field_name: &str) -> String {
    format!("set{}", capitalize(field_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("name"), "Name");
        assert_eq!(capitalize("Name"), "Name");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("   "), "");
        assert_eq!(capitalize("uRL"), "URL");
    }

    #[test]
    fn test_uncapitalize() {
        assert_eq!(uncapitalize("Order"), "order");
        assert_eq!(uncapitalize("order"), "order");
        assert_eq!(uncapitalize("URLPath"), "uRLPath");
        assert_eq!(uncapitalize(""), "");
    }

    #[test]
    fn test_camel_snake_conversion() {
        assert_eq!(camel_to_snake("userName"), "user_name");
        assert_eq!(camel_to_snake("orderLineItem"), "order_line_item");
        assert_eq!(snake_to_camel("user_name", false), "userName");
        assert_eq!(snake_to_camel("user_name", true), "UserName");
        assert_eq!(camel_to_snake(""), "");
        assert_eq!(snake_to_camel("", true), "");
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("items"), "item");
        assert_eq!(singularize("addresses"), "addresse");
        assert_eq!(singularize("data"), "dataItem");
        assert_eq!(singularize("s"), "sItem");
        assert_eq!(singularize(""), "item");
    }

    #[test]
    fn test_accessor_names() {
        assert_eq!(getter_name("id"), "getId");
        assert_eq!(boolean_getter_name("active"), "isActive");
        assert_eq!(setter_name("totalPrice"), "setTotalPrice");
    }

    proptest! {
        #[test]
        fn prop_capitalize_round_trips_lower_identifiers(name in "[a-z][a-zA-Z0-9]{0,16}") {
            prop_assert_eq!(uncapitalize(&capitalize(&name)), name);
        }

        #[test]
        fn prop_singularize_never_empty(name in "[a-zA-Z]{0,12}") {
            prop_assert!(!singularize(&name).is_empty());
        }
    }
}
