use std::path::{Path, PathBuf};

/// 상위 디렉토리를 나타내는 합성 엔트리 이름
pub const PARENT_NAME: &str = "..";

/// 목록의 한 항목 (파일, 디렉토리, 북마크 또는 `..`)
///
/// 생성 후 변경되지 않으며, 동일성은 `path`로만 판단한다.
#[derive(Debug, Clone)]
pub struct Entry {
    name: String,
    /// 절대 경로
    path: PathBuf,
    is_container: bool,
}

impl Entry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, is_container: bool) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_container,
        }
    }

    /// 표시 이름
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 진입 가능한 디렉토리 여부
    pub fn is_container(&self) -> bool {
        self.is_container
    }

    /// 상위 디렉토리 합성 엔트리
    pub fn parent_link(path: &Path) -> Self {
        Self::new(PARENT_NAME, path, true)
    }

    /// 합성 `..` 엔트리 여부
    pub fn is_parent_link(&self) -> bool {
        self.name == PARENT_NAME
    }

    /// 패널 표시 문자열 (디렉토리는 `/` 접두사)
    pub fn display_name(&self) -> String {
        if self.is_container {
            format!("/{}", self.name)
        } else {
            format!("  {}", self.name)
        }
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Entry {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_uses_path_only() {
        let a = Entry::new("a", "/tmp/x", false);
        let b = Entry::new("b", "/tmp/x", true);
        let c = Entry::new("a", "/tmp/y", false);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_parent_link() {
        let parent = Entry::parent_link(Path::new("/tmp"));
        assert!(parent.is_parent_link());
        assert!(parent.is_container());
        assert_eq!(parent.path(), Path::new("/tmp"));
        assert!(!Entry::new("...", "/tmp/...", false).is_parent_link());
    }

    #[test]
    fn test_accessors() {
        let entry = Entry::new("notes.md", "/p/notes.md", false);
        assert_eq!(entry.name(), "notes.md");
        assert_eq!(entry.path(), Path::new("/p/notes.md"));
        assert!(!entry.is_container());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Entry::new("src", "/p/src", true).display_name(), "/src");
        assert_eq!(Entry::new("a.rs", "/p/a.rs", false).display_name(), "  a.rs");
    }
}
