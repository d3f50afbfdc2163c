//! 사용자 입력 경로를 절대 경로로 정규화
//!
//! 심볼릭 링크는 따라가지 않는 순수 문자열(lexical) 정규화다.
//! 결과 경로의 존재 여부는 확인하지 않으며 호출자가 판단한다.

use crate::models::Location;
use std::path::{Component, Path, PathBuf};

/// 경로 해석기
pub struct PathResolver;

impl PathResolver {
    /// `input`을 `base` 기준으로 해석
    ///
    /// - 북마크 마커는 그대로 반환
    /// - `~`, `~/...` 는 홈 디렉토리 기준
    /// - `./...` 또는 `/`로 시작하지 않는 입력은 `base`에 이어 붙임
    pub fn resolve(base: &Path, input: &str) -> Location {
        if let Some(location) = Location::parse_marker(input) {
            return location;
        }
        Location::Directory(Self::resolve_path(base, input))
    }

    /// 북마크 마커를 고려하지 않고 파일 시스템 경로로만 해석
    pub fn resolve_path(base: &Path, input: &str) -> PathBuf {
        let joined = match Self::expand_home(input) {
            Some(expanded) => expanded,
            None if input.starts_with('/') => PathBuf::from(input),
            None => base.join(input),
        };
        Self::normalize(&joined)
    }

    /// 선행 `~` 확장 (`~user` 형태는 지원하지 않음)
    fn expand_home(input: &str) -> Option<PathBuf> {
        let rest = if input == "~" {
            ""
        } else {
            input.strip_prefix("~/")?
        };
        let home = dirs::home_dir()?;
        Some(if rest.is_empty() { home } else { home.join(rest) })
    }

    /// `.`/`..` 세그먼트 제거, 루트 위로는 올라가지 않음
    pub fn normalize(path: &Path) -> PathBuf {
        let mut normalized = PathBuf::from("/");
        for component in path.components() {
            match component {
                Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
                Component::RootDir | Component::CurDir => {}
                Component::ParentDir => {
                    normalized.pop();
                }
                Component::Normal(name) => normalized.push(name),
            }
        }
        normalized
    }
}
