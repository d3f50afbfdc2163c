// Utilities
pub mod error;
pub mod glob;
pub mod path_display;
pub mod path_resolver;

pub use path_resolver::PathResolver;
