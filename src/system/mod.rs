// System Layer
pub mod bookmarks;
pub mod config;
pub mod launcher;
pub mod lister;

pub use bookmarks::BookmarkStore;
pub use config::Config;
pub use launcher::{ProcessRunner, SystemLauncher};
pub use lister::{DirectoryLister, Lister};
