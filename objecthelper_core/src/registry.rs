use crate::{
    error::{ObjectHelperError, Result},
    types::{ClassDescriptor, FieldDescriptor, MethodDescriptor, TypeDescriptor},
};
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};
use tracing::{debug, info};

/// Read-only access to the classes a front-end knows about.
///
/// The generators never own class descriptors; every nested type, builder
/// class and superclass is reached through this trait.
pub trait ClassLookup {
    /// Resolves a class by qualified name (implementations may also accept
    /// an unambiguous simple name).
    fn resolve_class(&self, name: &str) -> Option<&ClassDescriptor>;

    /// Resolves the class a type refers to. Primitives and arrays never
    /// resolve.
    fn resolve_type(&self, ty: &TypeDescriptor) -> Option<&ClassDescriptor> {
        ty.class_name().and_then(|name| self.resolve_class(name))
    }

    /// The class followed by its resolvable superclasses, nearest first.
    fn hierarchy<'a>(&'a self, class: &'a ClassDescriptor) -> Vec<&'a ClassDescriptor> {
        let mut chain = vec![class];
        let mut seen = HashSet::from([class.qualified_name()]);
        let mut current = class;
        while let Some(parent_name) = current.superclass.as_deref() {
            let Some(parent) = self.resolve_class(parent_name) else {
                break;
            };
            if !seen.insert(parent.qualified_name()) {
                break;
            }
            chain.push(parent);
            current = parent;
        }
        chain
    }

    /// Declared fields followed by inherited ones. An inherited field is
    /// hidden by a nearer field of the same name.
    fn all_fields<'a>(&'a self, class: &'a ClassDescriptor) -> Vec<&'a FieldDescriptor> {
        let mut seen = HashSet::new();
        self.hierarchy(class)
            .into_iter()
            .flat_map(|c| c.fields.iter())
            .filter(|field| seen.insert(field.name.as_str()))
            .collect()
    }

    /// Declared methods followed by inherited ones.
    fn all_methods<'a>(&'a self, class: &'a ClassDescriptor) -> Vec<&'a MethodDescriptor> {
        self.hierarchy(class)
            .into_iter()
            .flat_map(|c| c.methods.iter())
            .collect()
    }
}

/// On-disk shape of a class model file (JSON or TOML).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassModelFile {
    #[serde(default)]
    pub classes: Vec<ClassDescriptor>,
}

/// In-memory class index backing [`ClassLookup`] for model files.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: Vec<ClassDescriptor>,
    by_qualified: HashMap<String, usize>,
    /// `None` marks a simple name shared by several classes.
    by_simple: HashMap<String, Option<usize>>,
}

impl ClassRegistry {
    pub fn new(classes: Vec<ClassDescriptor>) -> Self {
        let mut by_qualified = HashMap::new();
        let mut by_simple: HashMap<String, Option<usize>> = HashMap::new();

        for (idx, class) in classes.iter().enumerate() {
            by_qualified
                .entry(class.qualified_name().to_string())
                .or_insert(idx);
            by_simple
                .entry(class.name.clone())
                .and_modify(|slot| *slot = None)
                .or_insert(Some(idx));
        }

        debug!(class_count = classes.len(), "Built class registry");
        Self {
            classes,
            by_qualified,
            by_simple,
        }
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let file: ClassModelFile = serde_json::from_str(contents)?;
        Ok(Self::new(file.classes))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ClassModelFile = toml::from_str(contents)?;
        Ok(Self::new(file.classes))
    }

    /// Loads a model file, picking the format from the extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        info!("Loading class model from {:?}", path);
        let contents = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            Some("toml") => Self::from_toml_str(&contents),
            _ => Err(ObjectHelperError::UnsupportedModelFile {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn classes(&self) -> &[ClassDescriptor] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn find_class(&self, name: &str) -> Result<&ClassDescriptor> {
        self.resolve_class(name)
            .ok_or_else(|| ObjectHelperError::class_not_found(name))
    }
}

impl ClassLookup for ClassRegistry {
    fn resolve_class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.by_qualified
            .get(name)
            .or_else(|| self.by_simple.get(name).and_then(|slot| slot.as_ref()))
            .map(|idx| &self.classes[*idx])
    }
}
