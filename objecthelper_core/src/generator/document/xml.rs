use super::{DocumentBackend, StructuralDocumentGenerator};
use crate::{
    classify::Scalar,
    config::StubConfig,
    error::Result,
    naming::{singularize, uncapitalize},
    registry::ClassLookup,
    types::ClassDescriptor,
};
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

const INDENT_SIZE: usize = 4;
const FALLBACK_ROOT: &str = "root";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlContent {
    Text(String),
    Children(Vec<XmlElement>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub content: XmlContent,
}

impl XmlElement {
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: XmlContent::Text(text.into()),
        }
    }

    pub fn parent(name: impl Into<String>, children: Vec<XmlElement>) -> Self {
        Self {
            name: name.into(),
            content: XmlContent::Children(children),
        }
    }

    /// Emits the element as writer events.
    ///
    /// Elements without children are written open/close on one line
    /// (`<item></item>`), never self-closed.
    pub fn write_to(&self, writer: &mut Writer<Vec<u8>>) -> Result<()> {
        let name = element_name(&self.name);
        writer.write_event(Event::Start(BytesStart::new(name.as_str())))?;
        match &self.content {
            XmlContent::Text(text) => {
                writer.write_event(Event::Text(BytesText::new(text)))?;
            }
            XmlContent::Children(children) if children.is_empty() => {
                writer.write_event(Event::Text(BytesText::new("")))?;
            }
            XmlContent::Children(children) => {
                for child in children {
                    child.write_to(writer)?;
                }
            }
        }
        writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
        Ok(())
    }
}

/// Maps an identifier onto a well-formed XML element name.
fn element_name(name: &str) -> String {
    let mut sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '_' | '-' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    match sanitized.chars().next() {
        None => FALLBACK_ROOT.to_string(),
        Some(first) if !(first.is_alphabetic() || first == '_') => {
            sanitized.insert(0, '_');
            sanitized
        }
        Some(_) => sanitized,
    }
}

/// Renders stub documents as indented XML with a UTF-8 prolog.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlBackend;

impl DocumentBackend for XmlBackend {
    type Node = XmlContent;

    fn scalar(&self, scalar: Scalar, placeholder: &str) -> XmlContent {
        let text = match scalar {
            Scalar::Zero => "0",
            Scalar::False => "false",
            Scalar::Placeholder => placeholder,
        };
        XmlContent::Text(text.to_string())
    }

    fn sequence(&self, field_name: &str) -> XmlContent {
        XmlContent::Children(vec![XmlElement::parent(singularize(field_name), Vec::new())])
    }

    fn mapping(&self) -> XmlContent {
        XmlContent::Children(vec![XmlElement::parent(
            "entry",
            vec![XmlElement::text("key", ""), XmlElement::text("value", "")],
        )])
    }

    fn opaque(&self) -> XmlContent {
        XmlContent::Children(Vec::new())
    }

    fn absent(&self) -> XmlContent {
        XmlContent::Text(String::new())
    }

    fn object(&self, fields: Vec<(String, XmlContent)>) -> XmlContent {
        XmlContent::Children(
            fields
                .into_iter()
                .map(|(name, content)| XmlElement { name, content })
                .collect(),
        )
    }

    fn render(&self, root: &ClassDescriptor, document: XmlContent) -> Result<String> {
        let root_name = match uncapitalize(&root.name) {
            name if name.is_empty() => FALLBACK_ROOT.to_string(),
            name => name,
        };
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        XmlElement {
            name: root_name,
            content: document,
        }
        .write_to(&mut writer)?;

        let mut out = String::from_utf8(writer.into_inner())?;
        out.push('\n');
        Ok(out)
    }
}

/// Generates a placeholder XML document mirroring `root`'s fields.
pub fn generate_xml_stub(
    root: Option<&ClassDescriptor>,
    lookup: &dyn ClassLookup,
    config: &StubConfig,
) -> Result<String> {
    StructuralDocumentGenerator::builder()
        .lookup(lookup)
        .config(config)
        .backend(XmlBackend)
        .build()
        .generate(root)
}
