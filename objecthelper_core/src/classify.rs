//! Type taxonomy shared by every generator.
//!
//! A field's declared type is mapped onto a closed [`Category`] set, and each
//! category onto a [`Shape`] that both stub backends render. Keeping the
//! mapping in one place is what keeps the JSON and XML stubs of the same
//! class in agreement.

use crate::{
    registry::ClassLookup,
    types::{ClassDescriptor, PrimitiveType, TypeDescriptor},
};

const WRAPPER_NUMERIC: &[&str] = &[
    "java.lang.Integer",
    "java.lang.Long",
    "java.lang.Float",
    "java.lang.Double",
    "java.lang.Byte",
    "java.lang.Short",
];

const COLLECTIONS: &[&str] = &[
    "java.util.List",
    "java.util.ArrayList",
    "java.util.LinkedList",
    "java.util.Set",
    "java.util.HashSet",
    "java.util.LinkedHashSet",
    "java.util.TreeSet",
    "java.util.Collection",
    "kotlin.collections.List",
    "kotlin.collections.MutableList",
    "kotlin.collections.Set",
    "kotlin.collections.MutableSet",
    "kotlin.collections.Collection",
];

const MAPS: &[&str] = &[
    "java.util.Map",
    "java.util.HashMap",
    "java.util.LinkedHashMap",
    "java.util.TreeMap",
    "kotlin.collections.Map",
    "kotlin.collections.MutableMap",
];

/// Simple names front-ends commonly emit for implicitly imported types.
fn canonical_name(name: &str) -> &str {
    match name {
        "String" => "java.lang.String",
        "Integer" => "java.lang.Integer",
        "Long" => "java.lang.Long",
        "Float" => "java.lang.Float",
        "Double" => "java.lang.Double",
        "Byte" => "java.lang.Byte",
        "Short" => "java.lang.Short",
        "Boolean" => "java.lang.Boolean",
        "Character" => "java.lang.Character",
        "List" => "java.util.List",
        "ArrayList" => "java.util.ArrayList",
        "LinkedList" => "java.util.LinkedList",
        "Set" => "java.util.Set",
        "HashSet" => "java.util.HashSet",
        "LinkedHashSet" => "java.util.LinkedHashSet",
        "TreeSet" => "java.util.TreeSet",
        "Collection" => "java.util.Collection",
        "Map" => "java.util.Map",
        "HashMap" => "java.util.HashMap",
        "LinkedHashMap" => "java.util.LinkedHashMap",
        "TreeMap" => "java.util.TreeMap",
        other => other,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category<'a> {
    PrimitiveNumeric,
    PrimitiveBoolean,
    PrimitiveChar,
    WrapperNumeric,
    WrapperBoolean,
    WrapperChar,
    String,
    Array,
    Collection,
    Map,
    CustomObject(&'a ClassDescriptor),
    Unresolved,
}

/// Placeholder scalar written for a leaf field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    Zero,
    False,
    Placeholder,
}

/// Rendering shape of a category, independent of the output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<'a> {
    Scalar(Scalar),
    Sequence,
    Mapping,
    Object(&'a ClassDescriptor),
    Absent,
}

impl<'a> Category<'a> {
    pub fn is_boolean(&self) -> bool {
        matches!(self, Category::PrimitiveBoolean | Category::WrapperBoolean)
    }

    pub fn shape(&self) -> Shape<'a> {
        match *self {
            Category::PrimitiveNumeric | Category::WrapperNumeric => Shape::Scalar(Scalar::Zero),
            Category::PrimitiveBoolean | Category::WrapperBoolean => Shape::Scalar(Scalar::False),
            Category::PrimitiveChar | Category::WrapperChar | Category::String => {
                Shape::Scalar(Scalar::Placeholder)
            }
            Category::Array | Category::Collection => Shape::Sequence,
            Category::Map => Shape::Mapping,
            Category::CustomObject(class) => Shape::Object(class),
            Category::Unresolved => Shape::Absent,
        }
    }
}

/// Maps type descriptors onto categories, resolving custom classes through
/// a [`ClassLookup`].
#[derive(Clone, Copy)]
pub struct TypeClassifier<'a> {
    lookup: &'a dyn ClassLookup,
}

impl<'a> TypeClassifier<'a> {
    pub fn new(lookup: &'a dyn ClassLookup) -> Self {
        Self { lookup }
    }

    pub fn classify(&self, ty: &TypeDescriptor) -> Category<'a> {
        let category = match ty {
            TypeDescriptor::Primitive(primitive) => match primitive {
                PrimitiveType::Boolean => Category::PrimitiveBoolean,
                PrimitiveType::Char => Category::PrimitiveChar,
                PrimitiveType::Void => Category::Unresolved,
                p if p.is_numeric() => Category::PrimitiveNumeric,
                _ => Category::Unresolved,
            },
            TypeDescriptor::Array(_) => Category::Array,
            TypeDescriptor::Class { name, .. } => self.classify_class_name(name),
        };
        tracing::trace!(ty = %ty, ?category, "Classified type");
        category
    }

    fn classify_class_name(&self, name: &str) -> Category<'a> {
        let canonical = canonical_name(name);
        if WRAPPER_NUMERIC.contains(&canonical) {
            return Category::WrapperNumeric;
        }
        match canonical {
            "java.lang.Boolean" => return Category::WrapperBoolean,
            "java.lang.Character" => return Category::WrapperChar,
            "java.lang.String" => return Category::String,
            _ => {}
        }
        if COLLECTIONS.contains(&canonical) {
            return Category::Collection;
        }
        if MAPS.contains(&canonical) {
            return Category::Map;
        }
        match self.lookup.resolve_class(name) {
            Some(class) => Category::CustomObject(class),
            None => Category::Unresolved,
        }
    }
}
