// Site languages - the static language table behind the docs site's locale switcher
// Re-export public modules and types

pub mod config;
pub mod languages;
pub mod models;

// Re-export main types for convenience
pub use config::SiteConfig;
pub use languages::definitions::builtin_languages;
pub use languages::registry::{LanguageRegistry, registry};
pub use models::language::LanguageDescriptor;
