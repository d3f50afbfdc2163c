use crate::models::{Entry, Location};
use crate::system::bookmarks::BookmarkStore;
use crate::utils::error::{BenthosError, Result};
use std::fs;
use std::path::Path;
use tracing::warn;

/// 위치의 항목 목록을 제공하는 소스
pub trait Lister {
    /// 정렬하지 않은 원래 순서 그대로 반환
    fn list(&self, location: &Location) -> Result<Vec<Entry>>;
}

/// 실제 파일 시스템 + 북마크 목록 기반 Lister
#[derive(Debug, Default)]
pub struct DirectoryLister {
    bookmarks: BookmarkStore,
}

impl DirectoryLister {
    pub fn new(bookmarks: BookmarkStore) -> Self {
        Self { bookmarks }
    }

    /// 디렉토리의 직접 자식 읽기
    fn read_directory(&self, path: &Path) -> Result<Vec<Entry>> {
        if !path.exists() {
            return Err(BenthosError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_dir() {
            return Err(BenthosError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        let read_dir = fs::read_dir(path).map_err(|source| BenthosError::Listing {
            path: path.to_path_buf(),
            source,
        })?;

        let mut entries = Vec::new();
        for entry in read_dir {
            // 읽는 도중 사라진 항목 등은 스킵
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(dir = %path.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };

            let entry_path = entry.path();
            let name = entry
                .file_name()
                .into_string()
                .map_err(|_| BenthosError::Decode {
                    path: entry_path.clone(),
                    context: "entry name".to_string(),
                })?;

            // 심볼릭 링크는 대상 기준으로 판단
            let is_container = entry_path.is_dir();
            entries.push(Entry::new(name, entry_path, is_container));
        }

        Ok(entries)
    }
}

impl Lister for DirectoryLister {
    fn list(&self, location: &Location) -> Result<Vec<Entry>> {
        match location {
            Location::Bookmarks => Ok(self.bookmarks.entries()),
            Location::Directory(path) => self.read_directory(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::bookmarks::Bookmark;
    use std::collections::HashSet;
    use tempfile::TempDir;

    #[test]
    fn test_lists_direct_children() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("dir")).unwrap();
        fs::create_dir(temp.path().join("dir").join("nested")).unwrap();
        fs::write(temp.path().join("file.txt"), "x").unwrap();
        fs::write(temp.path().join(".dot"), "x").unwrap();

        let lister = DirectoryLister::default();
        let entries = lister
            .list(&Location::Directory(temp.path().to_path_buf()))
            .unwrap();

        let names: HashSet<&str> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, HashSet::from(["dir", "file.txt", ".dot"]));
        let dir = entries.iter().find(|e| e.name() == "dir").unwrap();
        assert!(dir.is_container());
        assert_eq!(dir.path(), temp.path().join("dir"));
        assert!(!entries.iter().find(|e| e.name() == "file.txt").unwrap().is_container());
    }

    #[test]
    fn test_missing_directory_errors() {
        let temp = TempDir::new().unwrap();
        let lister = DirectoryLister::default();
        let result = lister.list(&Location::Directory(temp.path().join("nope")));
        assert!(matches!(result, Err(BenthosError::PathNotFound { .. })));
    }

    #[test]
    fn test_file_is_not_listable() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f");
        fs::write(&file, "x").unwrap();
        let result = DirectoryLister::default().list(&Location::Directory(file));
        assert!(matches!(result, Err(BenthosError::NotADirectory { .. })));
    }

    #[test]
    fn test_bookmark_location_lists_bookmarks() {
        let temp = TempDir::new().unwrap();
        let lister = DirectoryLister::new(BookmarkStore::new(vec![Bookmark {
            name: "Temp".into(),
            path: temp.path().to_path_buf(),
        }]));

        let entries = lister.list(&Location::Bookmarks).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), "Temp");
        assert!(entries[0].is_container());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_undecodable_name_fails_listing() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("fine.txt"), "x").unwrap();
        fs::write(temp.path().join(OsStr::from_bytes(b"bad\xff")), "x").unwrap();

        let result = DirectoryLister::default()
            .list(&Location::Directory(temp.path().to_path_buf()));
        match result {
            Err(BenthosError::Decode { path, context }) => {
                assert_eq!(path.parent(), Some(temp.path()));
                assert_eq!(context, "entry name");
            }
            other => panic!("expected a decode error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_directory_is_container() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("real")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("link")).unwrap();

        let entries = DirectoryLister::default()
            .list(&Location::Directory(temp.path().to_path_buf()))
            .unwrap();
        assert!(entries.iter().find(|e| e.name() == "link").unwrap().is_container());
    }
}
