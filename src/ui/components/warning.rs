// Too-small screen - 터미널이 최소 크기보다 작을 때 전체 화면 안내

use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct WarningScreen {
    /// (너비, 높이)
    current_size: (u16, u16),
    warning_color: Color,
    bg_color: Color,
    fg_color: Color,
}

impl Default for WarningScreen {
    fn default() -> Self {
        Self {
            current_size: (0, 0),
            warning_color: Color::Rgb(255, 165, 0),
            bg_color: Color::Reset,
            fg_color: Color::Gray,
        }
    }
}

impl WarningScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_size(mut self, width: u16, height: u16) -> Self {
        self.current_size = (width, height);
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.warning_color = theme.warning.to_color();
        self.bg_color = theme.pane_bg.to_color();
        self.fg_color = theme.entry_normal.to_color();
        self
    }

    /// 부족한 쪽 크기만 강조
    fn lines(&self) -> Vec<Line<'static>> {
        let (width, height) = self.current_size;
        let normal = Style::default().fg(self.fg_color);
        let short = Style::default()
            .fg(self.warning_color)
            .add_modifier(Modifier::BOLD);
        let pick = |ok: bool| if ok { normal } else { short };

        vec![
            Line::styled("benthos needs a bigger terminal", short),
            Line::from(vec![
                Span::styled(width.to_string(), pick(width >= MIN_WIDTH)),
                Span::styled("x", normal),
                Span::styled(height.to_string(), pick(height >= MIN_HEIGHT)),
                Span::styled(format!(" < {}x{}", MIN_WIDTH, MIN_HEIGHT), normal),
            ]),
        ]
    }
}

impl Widget for WarningScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let lines = self.lines();
        let [middle] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        Paragraph::new(lines).centered().render(middle, buf);
    }
}
