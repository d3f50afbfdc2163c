//! 북마크 파일 로더
//!
//! 한 줄에 하나씩 `이름;경로` 또는 `경로`만 기록된 텍스트 파일을 읽는다.
//! 대상이 더 이상 존재하지 않는 항목은 조용히 버린다.

use crate::models::Entry;
use crate::utils::error::{BenthosError, Result};
use crate::utils::PathResolver;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 북마크 한 건
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub name: String,
    pub path: PathBuf,
}

/// 프로세스 시작 시 한 번 로드되는 읽기 전용 북마크 목록
#[derive(Debug, Clone, Default)]
pub struct BookmarkStore {
    items: Vec<Bookmark>,
}

impl BookmarkStore {
    pub fn new(items: Vec<Bookmark>) -> Self {
        Self { items }
    }

    /// 북마크 파일 로드
    ///
    /// 파일이 없으면 빈 목록. 상대 경로는 `base` 기준으로 해석한다.
    /// UTF-8로 해석할 수 없는 줄이 있으면 에러.
    pub fn load(file: &Path, base: &Path) -> Result<Self> {
        if !file.exists() {
            debug!(file = %file.display(), "no bookmark file");
            return Ok(Self::default());
        }
        let data = fs::read(file)?;
        let store = Self::parse(&data, file, base)?;
        info!(file = %file.display(), count = store.items.len(), "bookmarks loaded");
        Ok(store)
    }

    /// 원시 바이트에서 북마크 목록 파싱
    pub fn parse(data: &[u8], source: &Path, base: &Path) -> Result<Self> {
        let mut items = Vec::new();

        for (index, raw_line) in data.split(|&b| b == b'\n').enumerate() {
            let raw_line = raw_line.strip_suffix(b"\r").unwrap_or(raw_line);
            let line = std::str::from_utf8(raw_line).map_err(|_| BenthosError::Decode {
                path: source.to_path_buf(),
                context: format!("line {}", index + 1),
            })?;
            if line.is_empty() {
                continue;
            }

            // 줄 끝 개행 외에는 공백도 이름과 경로의 일부
            let (name, path_text) = match (line.split(';').next(), line.rsplit(';').next()) {
                (Some(name), Some(path)) if line.contains(';') => (Some(name), path),
                _ => (None, line),
            };

            let path = PathResolver::resolve_path(base, path_text);
            if !path.exists() {
                debug!(path = %path.display(), "dropping stale bookmark");
                continue;
            }

            let name = match name {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => default_name(&path),
            };
            items.push(Bookmark { name, path });
        }

        Ok(Self { items })
    }

    pub fn items(&self) -> &[Bookmark] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 패널에 표시할 엔트리 목록
    pub fn entries(&self) -> Vec<Entry> {
        self.items
            .iter()
            .map(|bookmark| Entry::new(&bookmark.name, &bookmark.path, bookmark.path.is_dir()))
            .collect()
    }
}

/// 이름이 없으면 경로의 마지막 요소 사용 (`/`는 그대로)
fn default_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
