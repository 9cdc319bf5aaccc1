//! Recursive stub-document generation.
//!
//! [`StructuralDocumentGenerator`] walks a class's field graph in
//! declaration order and asks a [`DocumentBackend`] to render each shape.
//! The walk (exclusion rules, classification, recursion and cycle guard) is
//! shared; only leaf and container rendering differs between JSON and XML.

pub mod json;
pub mod xml;

use crate::{
    classify::{Scalar, Shape, TypeClassifier},
    config::{CycleGuard, StubConfig},
    error::{ObjectHelperError, Result},
    registry::ClassLookup,
    types::{ClassDescriptor, FieldDescriptor, TypeDescriptor},
};
use bon::Builder;
use tracing::{debug, trace, warn};

pub use json::{JsonBackend, generate_json_stub};
pub use xml::{XmlBackend, XmlContent, XmlElement, generate_xml_stub};

/// Rendering rules supplied by a concrete output format.
pub trait DocumentBackend {
    type Node;

    fn scalar(&self, scalar: Scalar, placeholder: &str) -> Self::Node;

    /// An array or collection field; `field_name` names the container.
    fn sequence(&self, field_name: &str) -> Self::Node;

    fn mapping(&self) -> Self::Node;

    /// A custom object that is deliberately not expanded.
    fn opaque(&self) -> Self::Node;

    /// A field whose type could not be resolved.
    fn absent(&self) -> Self::Node;

    /// An expanded object, fields in declaration order.
    fn object(&self, fields: Vec<(String, Self::Node)>) -> Self::Node;

    /// Serializes the finished document for `root`.
    fn render(&self, root: &ClassDescriptor, document: Self::Node) -> Result<String>;
}

/// Per-call walk state.
#[derive(Debug)]
pub struct GenerationContext<'a> {
    /// Nesting level of the class currently being expanded (root is 0).
    pub depth: usize,
    /// The class generation started from.
    pub root_class: &'a ClassDescriptor,
    chain: Vec<&'a ClassDescriptor>,
}

impl<'a> GenerationContext<'a> {
    pub fn new(root_class: &'a ClassDescriptor) -> Self {
        Self {
            depth: 0,
            root_class,
            chain: Vec::new(),
        }
    }

    fn enter(&mut self, class: &'a ClassDescriptor) {
        self.depth = self.chain.len();
        self.chain.push(class);
    }

    fn leave(&mut self) {
        self.chain.pop();
        self.depth = self.chain.len().saturating_sub(1);
    }

    /// True when `class` is already being expanded further up the chain.
    pub fn is_on_chain(&self, class: &ClassDescriptor) -> bool {
        self.chain.iter().any(|c| c.is_same_class(class))
    }
}

#[derive(Builder)]
pub struct StructuralDocumentGenerator<'a, B> {
    lookup: &'a dyn ClassLookup,
    config: &'a StubConfig,
    backend: B,
}

impl<'a, B: DocumentBackend> StructuralDocumentGenerator<'a, B> {
    /// Generates the stub document for `root`.
    ///
    /// Fails with [`ObjectHelperError::UnresolvedRoot`] when there is no
    /// class to generate from; a class without fields still yields a
    /// minimal document.
    pub fn generate(&self, root: Option<&'a ClassDescriptor>) -> Result<String> {
        let root = root.ok_or(ObjectHelperError::UnresolvedRoot)?;
        debug!(
            class = %root.qualified_name(),
            cycle_guard = %self.config.cycle_guard,
            "Generating stub document"
        );

        let mut ctx = GenerationContext::new(root);
        let document = self.expand_class(root, &mut ctx);
        self.backend.render(root, document)
    }

    fn expand_class(&self, class: &'a ClassDescriptor, ctx: &mut GenerationContext<'a>) -> B::Node {
        ctx.enter(class);
        let fields = self
            .lookup
            .all_fields(class)
            .into_iter()
            .filter(|field| !field.excluded_from_documents())
            .map(|field| (field.name.clone(), self.field_node(field, ctx)))
            .collect();
        ctx.leave();
        self.backend.object(fields)
    }

    fn field_node(&self, field: &'a FieldDescriptor, ctx: &mut GenerationContext<'a>) -> B::Node {
        let category = TypeClassifier::new(self.lookup).classify(&field.field_type);
        trace!(field = %field.name, depth = ctx.depth, ?category, "Rendering field");

        match category.shape() {
            Shape::Scalar(scalar) => self.backend.scalar(scalar, &self.config.string_placeholder),
            Shape::Sequence => self.backend.sequence(&field.name),
            Shape::Mapping => self.backend.mapping(),
            Shape::Absent if self.is_core_class_name(&field.field_type) => self.backend.opaque(),
            Shape::Absent => self.backend.absent(),
            Shape::Object(class) => {
                if self.is_opaque(class, ctx) {
                    self.backend.opaque()
                } else {
                    self.expand_class(class, ctx)
                }
            }
        }
    }

    /// Core library classes stay opaque even when the model does not
    /// describe them.
    fn is_core_class_name(&self, ty: &TypeDescriptor) -> bool {
        ty.class_name().is_some_and(|name| {
            self.config
                .core_namespaces
                .iter()
                .any(|prefix| name.starts_with(prefix.as_str()))
        })
    }

    fn is_opaque(&self, class: &ClassDescriptor, ctx: &GenerationContext<'a>) -> bool {
        if class.is_in_namespace(&self.config.core_namespaces) {
            return true;
        }

        let revisits = match self.config.cycle_guard {
            CycleGuard::RootOnly => class.is_same_class(ctx.root_class),
            CycleGuard::AncestorChain => ctx.is_on_chain(class),
        };
        if revisits {
            return true;
        }

        if ctx.depth + 1 > self.config.max_depth {
            warn!(
                class = %class.qualified_name(),
                max_depth = self.config.max_depth,
                "Stub nesting ceiling reached, rendering an empty container"
            );
            return true;
        }

        false
    }
}
