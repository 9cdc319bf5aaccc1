// ObjectHelper - JSON/XML stub and copy-method generation from class models

// Common modules
pub mod classify;
pub mod config;
pub mod error;
pub mod naming;
pub mod registry;
pub mod types;

// Generators
pub mod generator;

// Source editing
pub mod splice;

// Re-export commonly used items for convenience
pub use config::{CopyConfig, CycleGuard, FunctionSwitch, ObjectHelperConfig, StubConfig};
pub use error::{ObjectHelperError, Result};
pub use generator::{
    GenerationStrategy, generate_copy_method, generate_json_stub, generate_xml_stub,
    is_copy_method_candidate, select_strategy,
};
pub use registry::{ClassLookup, ClassRegistry};
pub use splice::replace_method;
pub use types::{ClassDescriptor, FieldDescriptor, MethodDescriptor, TypeDescriptor};
