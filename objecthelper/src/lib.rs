pub use objecthelper_core::{classify, config, error, generator, naming, registry, splice, types};

pub mod cli;
pub mod commands;
