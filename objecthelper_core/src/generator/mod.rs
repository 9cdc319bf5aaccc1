pub mod accessor;
pub mod copy_method;
pub mod document;

pub use accessor::{accessor_name, has_getter_method, has_setter_method};
pub use copy_method::{
    BuilderFactory, CopyMethodGenerator, CopyParticipants, GenerationStrategy,
    find_builder_method, generate_copy_method, is_copy_method_candidate, resolve_participants,
    select_strategy,
};
pub use document::{
    DocumentBackend, GenerationContext, JsonBackend, StructuralDocumentGenerator, XmlBackend,
    generate_json_stub, generate_xml_stub,
};
