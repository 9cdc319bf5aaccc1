mod type_descriptor;

pub use crate::types::type_descriptor::{PrimitiveType, TypeDescriptor};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: TypeDescriptor,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, rename = "final")]
    pub is_final: bool,
    #[serde(default)]
    pub has_initializer: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, field_type: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            field_type,
            is_static: false,
            is_final: false,
            has_initializer: false,
        }
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_final(mut self, has_initializer: bool) -> Self {
        self.is_final = true;
        self.has_initializer = has_initializer;
        self
    }

    /// Static fields and compile-time constants never appear in stub documents.
    pub fn excluded_from_documents(&self) -> bool {
        self.is_static || (self.is_final && self.has_initializer)
    }

    /// Copy methods skip every static or final field, initialized or not.
    pub fn excluded_from_copy(&self) -> bool {
        self.is_static || self.is_final
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: TypeDescriptor,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, param_type: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            param_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    /// `None` for `void` methods and constructors.
    #[serde(default)]
    pub return_type: Option<TypeDescriptor>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    /// Raw declaration text as it appears in source. Everything from the
    /// first `{` on is ignored.
    #[serde(default)]
    pub declaration: String,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: None,
            is_static: false,
            declaration: String::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, param_type: TypeDescriptor) -> Self {
        self.parameters.push(ParameterDescriptor::new(name, param_type));
        self
    }

    pub fn returning(mut self, return_type: TypeDescriptor) -> Self {
        self.return_type = Some(return_type);
        self
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_declaration(mut self, declaration: impl Into<String>) -> Self {
        self.declaration = declaration.into();
        self
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// The declared return type, treating an explicit `void` like `None`.
    pub fn value_return_type(&self) -> Option<&TypeDescriptor> {
        self.return_type.as_ref().filter(|ty| !ty.is_void())
    }

    /// Signature text up to (not including) the body.
    ///
    /// Falls back to a synthesized `public` signature when the front-end did
    /// not supply declaration text.
    pub fn signature(&self) -> String {
        let declared = match self.declaration.find('{') {
            Some(idx) => &self.declaration[..idx],
            None => self.declaration.as_str(),
        };
        let declared = declared.trim();
        if !declared.is_empty() {
            return declared.to_string();
        }

        let params = self
            .parameters
            .iter()
            .map(|p| format!("{} {}", p.param_type.simple_name(), p.name))
            .collect::<Vec<_>>()
            .join(", ");
        let return_type = self
            .value_return_type()
            .map(|ty| ty.simple_name())
            .unwrap_or_else(|| "void".to_string());
        let static_kw = if self.is_static { "static " } else { "" };
        format!(
            "public {}{} {}({})",
            static_kw, return_type, self.name, params
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub name: String,
    /// Fully qualified name; empty means the class lives in the default
    /// package and is identified by its simple name.
    #[serde(default)]
    pub qualified_name: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
    /// Qualified name of the direct superclass, resolved through a
    /// [`ClassLookup`](crate::registry::ClassLookup).
    #[serde(default)]
    pub superclass: Option<String>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>, qualified_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qualified_name: qualified_name.into(),
            fields: Vec::new(),
            methods: Vec::new(),
            superclass: None,
        }
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    pub fn extending(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    pub fn qualified_name(&self) -> &str {
        if self.qualified_name.is_empty() {
            &self.name
        } else {
            &self.qualified_name
        }
    }

    /// Class identity is the qualified name.
    pub fn is_same_class(&self, other: &ClassDescriptor) -> bool {
        self.qualified_name() == other.qualified_name()
    }

    /// True when the qualified name starts with one of `prefixes`
    /// (e.g. `java.`), marking a platform type that is never expanded.
    pub fn is_in_namespace(&self, prefixes: &[String]) -> bool {
        let qualified = self.qualified_name();
        prefixes.iter().any(|prefix| qualified.starts_with(prefix.as_str()))
    }

    pub fn declared_method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name == name)
    }
}
