use std::fmt;
use std::path::{Path, PathBuf};

/// 북마크 목록을 가리키는 예약 경로
pub const BOOKMARK_MARKER: &str = "bookmarks://";

/// 패널이 보여주는 위치
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// 북마크 목록
    Bookmarks,
    /// 실제 디렉토리 (절대 경로)
    Directory(PathBuf),
}

impl Location {
    /// 입력이 북마크 마커면 `Bookmarks` 반환
    pub fn parse_marker(input: &str) -> Option<Self> {
        (input == BOOKMARK_MARKER).then_some(Location::Bookmarks)
    }

    pub fn is_bookmarks(&self) -> bool {
        matches!(self, Location::Bookmarks)
    }

    /// 실제 디렉토리 경로 (북마크 목록이면 None)
    pub fn as_dir(&self) -> Option<&Path> {
        match self {
            Location::Directory(path) => Some(path),
            Location::Bookmarks => None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Bookmarks => f.write_str(BOOKMARK_MARKER),
            Location::Directory(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_round_trip() {
        assert_eq!(Location::parse_marker("bookmarks://"), Some(Location::Bookmarks));
        assert_eq!(Location::parse_marker("bookmarks:/"), None);
        assert_eq!(Location::Bookmarks.to_string(), BOOKMARK_MARKER);
    }

    #[test]
    fn test_as_dir() {
        let location = Location::Directory(PathBuf::from("/tmp"));
        assert_eq!(location.as_dir(), Some(Path::new("/tmp")));
        assert!(!location.is_bookmarks());
        assert_eq!(Location::Bookmarks.as_dir(), None);
    }
}
