pub mod definitions;
pub mod registry;

pub use definitions::builtin_languages;
pub use registry::{LanguageRegistry, registry};
