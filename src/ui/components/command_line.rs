// Command line component - 명령줄 컴포넌트
//
// 프롬프트와 입력 버퍼 표시. 커서가 보이도록 가로 스크롤한다.

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// 명령줄 프롬프트
pub const PROMPT: &str = "> ";

/// 명령줄 컴포넌트
pub struct CommandLineBar<'a> {
    /// 입력 내용
    value: &'a str,
    /// 커서 앞 표시 너비
    cursor_column: usize,
    /// 입력 포커스 여부
    focused: bool,
    bg_color: Color,
    fg_color: Color,
    prompt_color: Color,
}

impl Default for CommandLineBar<'_> {
    fn default() -> Self {
        Self {
            value: "",
            cursor_column: 0,
            focused: false,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            prompt_color: Color::Rgb(0, 120, 212),
        }
    }
}

impl<'a> CommandLineBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: &'a str) -> Self {
        self.value = value;
        self
    }

    pub fn cursor_column(mut self, column: usize) -> Self {
        self.cursor_column = column;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.command_line_bg.to_color();
        self.fg_color = theme.command_line_fg.to_color();
        self.prompt_color = theme.accent.to_color();
        self
    }

    /// 커서가 보이도록 잘라낼 앞부분 너비
    pub fn scroll_for(cursor_column: usize, width: usize) -> usize {
        let text_width = width.saturating_sub(PROMPT.len() + 1);
        cursor_column.saturating_sub(text_width)
    }

    /// 화면상 커서 위치 (포커스가 없으면 None)
    pub fn cursor_position(&self, area: Rect) -> Option<(u16, u16)> {
        if !self.focused || area.width == 0 {
            return None;
        }
        let scroll = Self::scroll_for(self.cursor_column, area.width as usize);
        let x = PROMPT.len() + self.cursor_column - scroll;
        let x = (x as u16).min(area.width.saturating_sub(1));
        Some((area.x + x, area.y))
    }

    fn visible_text(&self, width: usize) -> String {
        let mut skip = Self::scroll_for(self.cursor_column, width);
        let mut text = String::new();
        for ch in self.value.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if skip > 0 {
                skip = skip.saturating_sub(ch_width);
                continue;
            }
            text.push(ch);
        }
        text
    }
}

impl Widget for CommandLineBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let prompt_style = if self.focused {
            Style::default()
                .fg(self.prompt_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Rgb(100, 100, 100))
        };

        let spans = vec![
            Span::styled(PROMPT, prompt_style),
            Span::styled(
                self.visible_text(area.width as usize),
                Style::default().fg(self.fg_color),
            ),
        ];

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
