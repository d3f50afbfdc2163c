// Data Models
pub mod entry;
pub mod folder;
pub mod location;

pub use entry::Entry;
pub use folder::{FolderModel, Trigger};
pub use location::Location;
