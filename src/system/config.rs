//! 설정 파일 (`~/.benthos/settings.toml`)

use crate::utils::error::{BenthosError, Result};
use crate::utils::PathResolver;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// 설정 파일 경로를 덮어쓰는 환경 변수
pub const SETTINGS_ENV: &str = "BENTHOS_SETTINGS_FILE";

/// 사용자 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 북마크 파일 경로 (`~` 허용)
    pub bookmark_file: String,
    /// 시작 시 점(.) 항목 표시 여부
    pub show_dot_items: bool,
    /// 테마 이름
    pub theme: String,
    /// 로그 파일 경로 (`~` 허용)
    pub log_file: String,
    /// 로그 레벨 (trace/debug/info/warn/error)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bookmark_file: "~/.benthos_bookmarks".to_string(),
            show_dot_items: true,
            theme: "dark".to_string(),
            log_file: "~/.benthos/benthos.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// 기본 설정 파일 경로
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(custom) = env::var(SETTINGS_ENV) {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        dirs::home_dir().map(|home| home.join(".benthos").join("settings.toml"))
    }

    /// 파일에서 설정 로드. 파일이 없으면 기본값.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        Self::decode(&data)
    }

    pub fn decode(data: &str) -> Result<Self> {
        toml::from_str(data).map_err(|e| BenthosError::Config(e.to_string()))
    }

    pub fn bookmark_path(&self, cwd: &Path) -> PathBuf {
        PathResolver::resolve_path(cwd, &self.bookmark_file)
    }

    pub fn log_path(&self, cwd: &Path) -> PathBuf {
        PathResolver::resolve_path(cwd, &self.log_file)
    }

    pub fn log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}
