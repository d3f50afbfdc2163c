// Status bar component - 상태바 컴포넌트
//
// 소스 패널의 항목 수, 선택 항목, 토스트 메시지 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    /// 디렉토리 개수 (`..` 제외)
    container_count: usize,
    /// 파일 개수
    leaf_count: usize,
    /// 선택된 항목 이름
    selected_name: Option<&'a str>,
    /// 토스트 메시지
    toast: Option<&'a str>,
    /// 레이아웃 모드 표시 (SINGLE/DUAL)
    layout_mode: &'a str,
    bg_color: Color,
    fg_color: Color,
    toast_color: Color,
}

impl Default for StatusBar<'_> {
    fn default() -> Self {
        Self {
            container_count: 0,
            leaf_count: 0,
            selected_name: None,
            toast: None,
            layout_mode: "DUAL",
            bg_color: Color::Rgb(0, 122, 204),
            fg_color: Color::Rgb(255, 255, 255),
            toast_color: Color::Yellow,
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 디렉토리/파일 개수 설정
    pub fn counts(mut self, containers: usize, leaves: usize) -> Self {
        self.container_count = containers;
        self.leaf_count = leaves;
        self
    }

    pub fn selected_name(mut self, name: Option<&'a str>) -> Self {
        self.selected_name = name;
        self
    }

    pub fn toast(mut self, toast: Option<&'a str>) -> Self {
        self.toast = toast;
        self
    }

    pub fn layout_mode(mut self, mode: &'a str) -> Self {
        self.layout_mode = mode;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.toast_color = theme.warning.to_color();
        self
    }

    fn left_info(&self) -> String {
        let mut info = format!(
            " {} dirs, {} files",
            self.container_count, self.leaf_count
        );
        if let Some(name) = self.selected_name {
            info.push_str(" | ");
            info.push_str(name);
        }
        info
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        // 토스트가 있으면 왼쪽 정보 대신 표시
        let (left, left_style) = match self.toast {
            Some(toast) => (
                format!(" {}", toast),
                Style::default().fg(self.toast_color),
            ),
            None => (self.left_info(), Style::default().fg(self.fg_color)),
        };
        let right = format!("[{}] ", self.layout_mode);

        let padding_len = (area.width as usize).saturating_sub(left.width() + right.width());

        let spans = vec![
            Span::styled(left, left_style),
            Span::raw(" ".repeat(padding_len)),
            Span::styled(right, Style::default().fg(Color::Rgb(200, 200, 200))),
        ];

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
