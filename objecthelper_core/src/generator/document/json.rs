use super::{DocumentBackend, StructuralDocumentGenerator};
use crate::{
    classify::Scalar,
    config::StubConfig,
    error::Result,
    registry::ClassLookup,
    types::ClassDescriptor,
};
use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};

const INDENT: &[u8] = b"    ";

/// Renders stub documents as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBackend;

impl DocumentBackend for JsonBackend {
    type Node = Value;

    fn scalar(&self, scalar: Scalar, placeholder: &str) -> Value {
        match scalar {
            Scalar::Zero => Value::from(0),
            Scalar::False => Value::Bool(false),
            Scalar::Placeholder => Value::String(placeholder.to_string()),
        }
    }

    fn sequence(&self, _field_name: &str) -> Value {
        Value::Array(Vec::new())
    }

    fn mapping(&self) -> Value {
        Value::Object(Map::new())
    }

    fn opaque(&self) -> Value {
        Value::Object(Map::new())
    }

    fn absent(&self) -> Value {
        Value::Null
    }

    fn object(&self, fields: Vec<(String, Value)>) -> Value {
        Value::Object(fields.into_iter().collect())
    }

    fn render(&self, _root: &ClassDescriptor, document: Value) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        document.serialize(&mut serializer)?;
        Ok(String::from_utf8(buf)?)
    }
}

/// Generates a placeholder JSON document mirroring `root`'s fields.
pub fn generate_json_stub(
    root: Option<&ClassDescriptor>,
    lookup: &dyn ClassLookup,
    config: &StubConfig,
) -> Result<String> {
    StructuralDocumentGenerator::builder()
        .lookup(lookup)
        .config(config)
        .backend(JsonBackend)
        .build()
        .generate(root)
}
