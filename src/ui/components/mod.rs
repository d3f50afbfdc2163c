// UI Components
pub mod command_line;
pub mod key_bar;
pub mod panel;
pub mod status_bar;
pub mod warning;

// Re-export components for convenience
pub use command_line::CommandLineBar;
pub use key_bar::{KeyBar, KeyBarItem};
pub use panel::{Panel, PanelStatus};
pub use status_bar::StatusBar;
pub use warning::WarningScreen;
