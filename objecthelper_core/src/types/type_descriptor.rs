use crate::error::{ObjectHelperError, Result};
use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PrimitiveType {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Boolean,
    Char,
    Void,
}

impl PrimitiveType {
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            PrimitiveType::Byte
                | PrimitiveType::Short
                | PrimitiveType::Int
                | PrimitiveType::Long
                | PrimitiveType::Float
                | PrimitiveType::Double
        )
    }
}

/// A type reference exactly as the front-end reports it for a field,
/// parameter or return value.
///
/// Serialized as Java-like type text (`int`, `java.util.List<Item>`,
/// `byte[]`) so model files stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeDescriptor {
    Primitive(PrimitiveType),
    Array(Box<TypeDescriptor>),
    Class {
        name: String,
        type_args: Vec<TypeDescriptor>,
    },
}

impl TypeDescriptor {
    pub fn class(name: impl Into<String>) -> Self {
        TypeDescriptor::Class {
            name: name.into(),
            type_args: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, type_args: Vec<TypeDescriptor>) -> Self {
        TypeDescriptor::Class {
            name: name.into(),
            type_args,
        }
    }

    pub fn array_of(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(inner))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeDescriptor::Primitive(PrimitiveType::Void))
    }

    /// The raw class name without generic arguments, if this is a class type.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            TypeDescriptor::Class { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Presentable name: the last path segment for classes, the source text
    /// otherwise.
    pub fn simple_name(&self) -> String {
        match self {
            TypeDescriptor::Class { name, .. } => {
                name.rsplit('.').next().unwrap_or(name).to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn parse_type_str(type_str: &str) -> Result<TypeDescriptor> {
        tracing::trace!("Parsing type text: {}", type_str);
        let clean = type_str.trim();

        if clean.is_empty() {
            return Err(ObjectHelperError::invalid_type("empty type text"));
        }

        // Varargs behave like arrays
        if let Some(elem) = clean.strip_suffix("...") {
            return Ok(TypeDescriptor::array_of(Self::parse_type_str(elem)?));
        }

        if let Some(elem) = clean.strip_suffix("[]") {
            return Ok(TypeDescriptor::array_of(Self::parse_type_str(elem)?));
        }

        // Wildcards collapse to their bound, an unbounded `?` to Object
        if let Some(rest) = clean.strip_prefix('?') {
            let rest = rest.trim();
            if rest.is_empty() {
                return Ok(TypeDescriptor::class("java.lang.Object"));
            }
            let bound = rest
                .strip_prefix("extends")
                .or_else(|| rest.strip_prefix("super"))
                .ok_or_else(|| {
                    ObjectHelperError::invalid_type(format!("malformed wildcard: {type_str}"))
                })?;
            return Self::parse_type_str(bound);
        }

        if let Ok(primitive) = PrimitiveType::from_str(clean) {
            return Ok(TypeDescriptor::Primitive(primitive));
        }

        match clean.find('<') {
            Some(start) => {
                let end = clean.rfind('>').filter(|end| *end > start).ok_or_else(|| {
                    ObjectHelperError::invalid_type(format!("unbalanced generics: {type_str}"))
                })?;
                if !clean[end + 1..].trim().is_empty() {
                    return Err(ObjectHelperError::invalid_type(format!(
                        "trailing text after generics: {type_str}"
                    )));
                }
                let name = clean[..start].trim();
                Self::check_name(name, type_str)?;
                let type_args = split_type_args(&clean[start + 1..end])
                    .iter()
                    .map(|arg| Self::parse_type_str(arg))
                    .collect::<Result<Vec<_>>>()?;
                Ok(TypeDescriptor::generic(name, type_args))
            }
            None => {
                Self::check_name(clean, type_str)?;
                Ok(TypeDescriptor::class(clean))
            }
        }
    }

    fn check_name(name: &str, original: &str) -> Result<()> {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_' || c == '$' || c == '.');
        if valid {
            Ok(())
        } else {
            Err(ObjectHelperError::invalid_type(format!(
                "invalid type name `{name}` in `{original}`"
            )))
        }
    }
}

/// Splits generic arguments on top-level commas only.
fn split_type_args(inner: &str) -> Vec<String> {
    let mut elements = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for c in inner.chars() {
        match c {
            '<' => {
                depth += 1;
                current.push(c);
            }
            '>' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ',' if depth == 0 => {
                if !current.trim().is_empty() {
                    elements.push(current.trim().to_string());
                }
                current.clear();
            }
            _ => current.push(c),
        }
    }

    if !current.trim().is_empty() {
        elements.push(current.trim().to_string());
    }

    elements
}

impl FromStr for TypeDescriptor {
    type Err = ObjectHelperError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_type_str(s)
    }
}

impl TryFrom<String> for TypeDescriptor {
    type Error = ObjectHelperError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse_type_str(&value)
    }
}

impl From<TypeDescriptor> for String {
    fn from(value: TypeDescriptor) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive(p) => write!(f, "{}", p),
            TypeDescriptor::Array(inner) => write!(f, "{}[]", inner),
            TypeDescriptor::Class { name, type_args } => {
                write!(f, "{}", name)?;
                if !type_args.is_empty() {
                    write!(f, "<")?;
                    let mut first = true;
                    for arg in type_args {
                        if !first {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", arg)?;
                        first = false;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_primitives() {
        assert_eq!(
            TypeDescriptor::parse_type_str("int").unwrap(),
            TypeDescriptor::Primitive(PrimitiveType::Int)
        );
        assert_eq!(
            TypeDescriptor::parse_type_str(" boolean ").unwrap(),
            TypeDescriptor::Primitive(PrimitiveType::Boolean)
        );
        assert!(TypeDescriptor::parse_type_str("void").unwrap().is_void());
    }

    #[test]
    fn test_parse_nested_generics() {
        let parsed =
            TypeDescriptor::parse_type_str("java.util.Map<String, java.util.List<com.acme.Item>>")
                .unwrap();
        assert_eq!(
            parsed,
            TypeDescriptor::generic(
                "java.util.Map",
                vec![
                    TypeDescriptor::class("String"),
                    TypeDescriptor::generic(
                        "java.util.List",
                        vec![TypeDescriptor::class("com.acme.Item")]
                    ),
                ]
            )
        );
    }

    #[test]
    fn test_parse_arrays_and_varargs() {
        assert_eq!(
            TypeDescriptor::parse_type_str("byte[][]").unwrap(),
            TypeDescriptor::array_of(TypeDescriptor::array_of(TypeDescriptor::Primitive(
                PrimitiveType::Byte
            )))
        );
        assert_eq!(
            TypeDescriptor::parse_type_str("String...").unwrap(),
            TypeDescriptor::array_of(TypeDescriptor::class("String"))
        );
    }

    #[test]
    fn test_parse_wildcards() {
        assert_eq!(
            TypeDescriptor::parse_type_str("java.util.List<? extends Item>").unwrap(),
            TypeDescriptor::generic("java.util.List", vec![TypeDescriptor::class("Item")])
        );
        assert_eq!(
            TypeDescriptor::parse_type_str("java.util.List<?>").unwrap(),
            TypeDescriptor::generic(
                "java.util.List",
                vec![TypeDescriptor::class("java.lang.Object")]
            )
        );
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        assert!(TypeDescriptor::parse_type_str("").is_err());
        assert!(TypeDescriptor::parse_type_str("List<Item").is_err());
        assert!(TypeDescriptor::parse_type_str("List<Item>x").is_err());
        assert!(TypeDescriptor::parse_type_str("my type").is_err());
    }

    #[test]
    fn test_display_matches_source_text() {
        for text in [
            "int",
            "java.util.List<com.acme.Item>",
            "java.util.Map<String, Integer>",
            "char[]",
        ] {
            let parsed = TypeDescriptor::parse_type_str(text).unwrap();
            assert_eq!(parsed.to_string(), text);
        }
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(
            TypeDescriptor::class("com.acme.OrderDto").simple_name(),
            "OrderDto"
        );
        assert_eq!(TypeDescriptor::class("Order").simple_name(), "Order");
    }

    #[test]
    fn test_serde_as_string() {
        let ty: TypeDescriptor = serde_json::from_str("\"java.util.Set<Tag>\"").unwrap();
        assert_eq!(ty.class_name(), Some("java.util.Set"));
        assert_eq!(
            serde_json::to_string(&ty).unwrap(),
            "\"java.util.Set<Tag>\""
        );
        assert!(serde_json::from_str::<TypeDescriptor>("\"Set<\"").is_err());
    }
}
