// Key bar component - 하단 키 바 컴포넌트
//
// 현재 입력 문맥의 주요 단축키 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// 키 바 항목
#[derive(Debug, Clone)]
pub struct KeyBarItem {
    /// 단축키 (F5, ^E, ...)
    pub key: String,
    /// 레이블 (Copy, Mirror, ...)
    pub label: String,
}

impl KeyBarItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// 키 바 컴포넌트
pub struct KeyBar {
    items: Vec<KeyBarItem>,
    bg_color: Color,
    key_fg_color: Color,
    label_fg_color: Color,
}

impl Default for KeyBar {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            bg_color: Color::Rgb(45, 45, 48),
            key_fg_color: Color::Rgb(0, 120, 212),
            label_fg_color: Color::Rgb(204, 204, 204),
        }
    }
}

impl KeyBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(mut self, items: Vec<KeyBarItem>) -> Self {
        self.items = items;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.key_bar_bg.to_color();
        self.key_fg_color = theme.accent.to_color();
        self.label_fg_color = theme.key_bar_fg.to_color();
        self
    }
}

impl Widget for KeyBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let key_style = Style::default()
            .fg(self.key_fg_color)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(self.label_fg_color);

        let mut spans = vec![Span::raw(" ")];
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(item.key.as_str(), key_style));
            spans.push(Span::styled(":", label_style));
            spans.push(Span::styled(item.label.as_str(), label_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
