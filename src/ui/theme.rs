//! 색상 테마
//!
//! 내장 테마(dark, light, high_contrast)는 작은 팔레트에서 파생된다.
//! `<config_dir>/benthos/themes/*.toml`은 `Theme`의 모든 필드를 색상 문자열로 적는다.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// 테마 파일의 색상 값 (`"#1e1e1e"`, `"red"`, `"dark gray"` 등)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ThemeColor(Color);

impl ThemeColor {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Color::Rgb(r, g, b))
    }

    pub fn to_color(self) -> Color {
        self.0
    }
}

impl FromStr for ThemeColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_str(s.trim())
            .map(Self)
            .map_err(|_| format!("unknown color: {}", s))
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ThemeColor> for String {
    fn from(value: ThemeColor) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 위젯별 색상
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub pane_active_border: ThemeColor,
    pub pane_inactive_border: ThemeColor,
    pub pane_bg: ThemeColor,
    pub pane_title: ThemeColor,

    pub entry_normal: ThemeColor,
    pub entry_selected: ThemeColor,
    pub entry_selected_bg: ThemeColor,
    /// 비활성 패널의 선택 배경
    pub entry_inactive_selected_bg: ThemeColor,
    pub container: ThemeColor,

    pub status_bar_bg: ThemeColor,
    pub status_bar_fg: ThemeColor,
    pub command_line_bg: ThemeColor,
    pub command_line_fg: ThemeColor,
    pub key_bar_bg: ThemeColor,
    pub key_bar_fg: ThemeColor,

    pub accent: ThemeColor,
    /// 토스트, 경고 화면
    pub warning: ThemeColor,
}

/// 내장 테마의 기본 색
struct Palette {
    background: ThemeColor,
    surface: ThemeColor,
    text: ThemeColor,
    bright: ThemeColor,
    muted: ThemeColor,
    accent: ThemeColor,
    container: ThemeColor,
    selection_text: ThemeColor,
    selection: ThemeColor,
    status: ThemeColor,
    status_text: ThemeColor,
    warning: ThemeColor,
}

impl From<Palette> for Theme {
    fn from(p: Palette) -> Self {
        Theme {
            pane_active_border: p.accent,
            pane_inactive_border: p.muted,
            pane_bg: p.background,
            pane_title: p.bright,
            entry_normal: p.text,
            entry_selected: p.selection_text,
            entry_selected_bg: p.selection,
            entry_inactive_selected_bg: p.muted,
            container: p.container,
            status_bar_bg: p.status,
            status_bar_fg: p.status_text,
            command_line_bg: p.background,
            command_line_fg: p.text,
            key_bar_bg: p.surface,
            key_bar_fg: p.text,
            accent: p.accent,
            warning: p.warning,
        }
    }
}

impl Theme {
    /// 기본 테마
    pub fn dark() -> Self {
        Palette {
            background: ThemeColor::rgb(30, 30, 30),
            surface: ThemeColor::rgb(45, 45, 48),
            text: ThemeColor::rgb(212, 212, 212),
            bright: ThemeColor::rgb(255, 255, 255),
            muted: ThemeColor::rgb(60, 60, 60),
            accent: ThemeColor::rgb(0, 120, 212),
            container: ThemeColor::rgb(86, 156, 214),
            selection_text: ThemeColor::rgb(255, 255, 255),
            selection: ThemeColor::rgb(0, 120, 212),
            status: ThemeColor::rgb(0, 122, 204),
            status_text: ThemeColor::rgb(255, 255, 255),
            warning: ThemeColor::rgb(255, 165, 0),
        }
        .into()
    }

    pub fn light() -> Self {
        Palette {
            background: ThemeColor::rgb(255, 255, 255),
            surface: ThemeColor::rgb(243, 243, 243),
            text: ThemeColor::rgb(30, 30, 30),
            bright: ThemeColor::rgb(0, 0, 0),
            muted: ThemeColor::rgb(204, 204, 204),
            accent: ThemeColor::rgb(0, 120, 212),
            container: ThemeColor::rgb(0, 102, 204),
            selection_text: ThemeColor::rgb(0, 0, 0),
            selection: ThemeColor::rgb(173, 214, 255),
            status: ThemeColor::rgb(0, 120, 212),
            status_text: ThemeColor::rgb(255, 255, 255),
            warning: ThemeColor::rgb(255, 140, 0),
        }
        .into()
    }

    pub fn high_contrast() -> Self {
        Palette {
            background: ThemeColor::rgb(0, 0, 0),
            surface: ThemeColor::rgb(0, 0, 0),
            text: ThemeColor::rgb(255, 255, 255),
            bright: ThemeColor::rgb(255, 255, 255),
            muted: ThemeColor::rgb(128, 128, 128),
            accent: ThemeColor::rgb(0, 255, 0),
            container: ThemeColor::rgb(0, 255, 255),
            selection_text: ThemeColor::rgb(0, 0, 0),
            selection: ThemeColor::rgb(0, 255, 0),
            status: ThemeColor::rgb(0, 0, 0),
            status_text: ThemeColor::rgb(0, 255, 0),
            warning: ThemeColor::rgb(255, 255, 0),
        }
        .into()
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// 이름으로 찾는 테마 목록과 현재 테마
pub struct ThemeManager {
    current: Theme,
    themes: Vec<(String, Theme)>,
}

impl ThemeManager {
    pub fn new() -> Self {
        Self {
            current: Theme::dark(),
            themes: vec![
                ("dark".to_string(), Theme::dark()),
                ("light".to_string(), Theme::light()),
                ("high_contrast".to_string(), Theme::high_contrast()),
            ],
        }
    }

    pub fn current(&self) -> &Theme {
        &self.current
    }

    pub fn switch_theme(&mut self, name: &str) -> Result<(), String> {
        let theme = self
            .themes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, theme)| theme.clone())
            .ok_or_else(|| format!("Unknown theme: {}", name))?;
        self.current = theme;
        Ok(())
    }

    pub fn available_themes(&self) -> Vec<&str> {
        self.themes.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// 디렉토리의 `*.toml` 테마 추가 (파일 이름이 테마 이름)
    ///
    /// 읽거나 해석할 수 없는 파일은 경고만 남기고 건너뛴다.
    pub fn load_themes_from_dir(&mut self, themes_dir: &Path) -> anyhow::Result<()> {
        if !themes_dir.is_dir() {
            return Ok(());
        }

        for entry in fs::read_dir(themes_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match Theme::from_file(&path) {
                Ok(theme) => {
                    tracing::debug!(theme = name, "loaded custom theme");
                    self.themes.push((name.to_string(), theme));
                }
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping theme"),
            }
        }

        Ok(())
    }

    pub fn load_themes_from_config_dir(&mut self) -> anyhow::Result<()> {
        match dirs::config_dir() {
            Some(dir) => self.load_themes_from_dir(&dir.join("benthos").join("themes")),
            None => Ok(()),
        }
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_backgrounds() {
        assert_eq!(Theme::dark().pane_bg.to_color(), Color::Rgb(30, 30, 30));
        assert_eq!(Theme::light().pane_bg.to_color(), Color::Rgb(255, 255, 255));
        assert_eq!(Theme::high_contrast().pane_bg.to_color(), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_color_strings() {
        assert_eq!(
            "#1e1e1e".parse::<ThemeColor>().unwrap().to_color(),
            Color::Rgb(30, 30, 30)
        );
        assert_eq!("Red".parse::<ThemeColor>().unwrap().to_color(), Color::Red);
        assert!("nope".parse::<ThemeColor>().is_err());
    }

    #[test]
    fn test_theme_switching() {
        let mut manager = ThemeManager::new();
        assert_eq!(
            manager.available_themes(),
            vec!["dark", "light", "high_contrast"]
        );
        assert!(manager.switch_theme("light").is_ok());
        assert_eq!(manager.current(), &Theme::light());
        assert!(manager.switch_theme("solarized").is_err());
        assert_eq!(manager.current(), &Theme::light());
    }

    #[test]
    fn test_load_themes_from_dir() {
        let temp = TempDir::new().unwrap();
        let custom = toml::to_string_pretty(&Theme::high_contrast()).unwrap();
        fs::write(temp.path().join("neon.toml"), custom).unwrap();
        fs::write(temp.path().join("broken.toml"), "pane_bg = [").unwrap();
        fs::write(temp.path().join("notes.txt"), "ignored").unwrap();

        let mut manager = ThemeManager::new();
        manager.load_themes_from_dir(temp.path()).unwrap();

        assert_eq!(manager.available_themes().len(), 4);
        assert!(manager.switch_theme("neon").is_ok());
        assert_eq!(manager.current(), &Theme::high_contrast());
    }

    #[test]
    fn test_missing_theme_dir_is_ok() {
        let temp = TempDir::new().unwrap();
        let mut manager = ThemeManager::new();
        assert!(manager.load_themes_from_dir(&temp.path().join("none")).is_ok());
        assert_eq!(manager.available_themes().len(), 3);
    }
}
