use std::path::PathBuf;
use thiserror::Error;

/// 복사/이동/삭제 명령 조립이 거부된 이유
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardRefusal {
    #[error("No item selected")]
    NoSelection,

    #[error("The parent entry cannot be used here")]
    ParentEntry,

    #[error("Source and target are the same directory")]
    SamePath,

    #[error("Cannot copy or move a directory into itself")]
    IntoItself,

    #[error("Target pane is not showing a directory")]
    TargetNotDirectory,

    #[error("Source pane is not showing a directory")]
    NoWorkingDirectory,
}

#[derive(Error, Debug)]
pub enum BenthosError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Cannot list {}: {source}", path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot decode {context} in {}", path.display())]
    Decode { path: PathBuf, context: String },

    #[error("{0}")]
    Guard(#[from] GuardRefusal),

    #[error("Failed to launch {program}: {reason}")]
    Launch { program: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BenthosError>;
