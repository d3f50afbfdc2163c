// Panel component - 폴더 패널 컴포넌트
//
// 항목 목록, 선택 상태, 증분 검색/필터 표시, 테두리 렌더링

use crate::models::{Entry, Location};
use crate::ui::Theme;
use crate::utils::glob::MATCH_ALL;
use crate::utils::path_display::{fit_name, location_title};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 패널 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStatus {
    #[default]
    Inactive,
    Active,
}

/// 패널 컴포넌트
pub struct Panel<'a> {
    /// 패널 위치 (제목)
    location: Option<&'a Location>,
    /// 패널 상태
    status: PanelStatus,
    /// 항목 목록 (`..` 포함)
    entries: &'a [Entry],
    /// 선택 인덱스
    selected: Option<usize>,
    /// 증분 검색 문자열
    search: &'a str,
    /// 글로브 필터
    filter: &'a str,
    /// 숨김 항목 표시 여부
    show_dot_items: bool,
    active_border_color: Color,
    inactive_border_color: Color,
    bg_color: Color,
    title_color: Color,
    entry_color: Color,
    selected_color: Color,
    selected_bg_color: Color,
    inactive_selected_bg_color: Color,
    container_color: Color,
    accent_color: Color,
}

impl Default for Panel<'_> {
    fn default() -> Self {
        Self {
            location: None,
            status: PanelStatus::default(),
            entries: &[],
            selected: None,
            search: "",
            filter: MATCH_ALL,
            show_dot_items: true,
            active_border_color: Color::Rgb(0, 120, 212),
            inactive_border_color: Color::Rgb(60, 60, 60),
            bg_color: Color::Rgb(30, 30, 30),
            title_color: Color::Rgb(255, 255, 255),
            entry_color: Color::Rgb(212, 212, 212),
            selected_color: Color::Rgb(255, 255, 255),
            selected_bg_color: Color::Rgb(0, 120, 212),
            inactive_selected_bg_color: Color::Rgb(60, 60, 60),
            container_color: Color::Rgb(86, 156, 214),
            accent_color: Color::Rgb(0, 120, 212),
        }
    }
}

impl<'a> Panel<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(mut self, location: &'a Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn status(mut self, status: PanelStatus) -> Self {
        self.status = status;
        self
    }

    pub fn entries(mut self, entries: &'a [Entry]) -> Self {
        self.entries = entries;
        self
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn search(mut self, search: &'a str) -> Self {
        self.search = search;
        self
    }

    pub fn filter(mut self, filter: &'a str) -> Self {
        self.filter = filter;
        self
    }

    pub fn show_dot_items(mut self, show: bool) -> Self {
        self.show_dot_items = show;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.active_border_color = theme.pane_active_border.to_color();
        self.inactive_border_color = theme.pane_inactive_border.to_color();
        self.bg_color = theme.pane_bg.to_color();
        self.title_color = theme.pane_title.to_color();
        self.entry_color = theme.entry_normal.to_color();
        self.selected_color = theme.entry_selected.to_color();
        self.selected_bg_color = theme.entry_selected_bg.to_color();
        self.inactive_selected_bg_color = theme.entry_inactive_selected_bg.to_color();
        self.container_color = theme.container.to_color();
        self.accent_color = theme.accent.to_color();
        self
    }

    fn border_color(&self) -> Color {
        match self.status {
            PanelStatus::Active => self.active_border_color,
            PanelStatus::Inactive => self.inactive_border_color,
        }
    }

    fn title_style(&self) -> Style {
        let base = Style::default().fg(self.title_color);
        match self.status {
            PanelStatus::Active => base.add_modifier(Modifier::BOLD),
            PanelStatus::Inactive => base,
        }
    }

    /// 하단 테두리에 표시할 검색/필터 상태
    fn indicator(&self) -> String {
        let mut parts = Vec::new();
        if !self.search.is_empty() {
            parts.push(format!("search: {}", self.search));
        }
        if self.filter != MATCH_ALL {
            parts.push(format!("filter: {}", self.filter));
        }
        if !self.show_dot_items {
            parts.push("no dot items".to_string());
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!(" {} ", parts.join(" | "))
        }
    }

    fn render_entry(&self, entry: &Entry, index: usize, inner: Rect, buf: &mut Buffer, y: u16) {
        let is_cursor = self.selected == Some(index);
        let fg = if is_cursor {
            self.selected_color
        } else if entry.is_container() {
            self.container_color
        } else {
            self.entry_color
        };
        let mut style = Style::default().fg(fg);
        if is_cursor {
            let bg = match self.status {
                PanelStatus::Active => self.selected_bg_color,
                PanelStatus::Inactive => self.inactive_selected_bg_color,
            };
            style = style.bg(bg);
        }

        let width = inner.width as usize;
        let name = fit_name(&entry.display_name(), width.saturating_sub(1));
        let mut spans = vec![Span::styled(" ", style)];

        // 선택 항목에서 검색어와 일치한 접두사 강조
        let prefix_len = if is_cursor && !self.search.is_empty() {
            Self::matched_prefix_len(&name, entry, self.search)
        } else {
            0
        };
        if prefix_len > 0 {
            let (matched, rest) = name.split_at(prefix_len);
            spans.push(Span::styled(
                matched.to_string(),
                style.add_modifier(Modifier::UNDERLINED),
            ));
            spans.push(Span::styled(rest.to_string(), style));
        } else {
            spans.push(Span::styled(name.clone(), style));
        }

        let padding = width.saturating_sub(name.width() + 1);
        spans.push(Span::styled(" ".repeat(padding), style));

        buf.set_line(inner.x, inner.y + y, &Line::from(spans), inner.width);
    }

    /// 표시 문자열에서 검색어와 겹치는 이름 접두사의 바이트 끝 위치
    fn matched_prefix_len(shown: &str, entry: &Entry, search: &str) -> usize {
        let lead = if entry.is_container() { 1 } else { 2 };
        let count = search.chars().count();
        let matched: usize = entry.name().chars().take(count).map(char::len_utf8).sum();
        (lead + matched).min(shown.len())
    }
}

/// 선택 항목이 보이도록 하는 스크롤 시작 위치
pub fn scroll_offset(selected: Option<usize>, total: usize, visible: usize) -> usize {
    if visible == 0 || total <= visible {
        return 0;
    }
    let selected = selected.unwrap_or(0);
    if selected < visible {
        0
    } else {
        (selected + 1 - visible).min(total - visible)
    }
}

impl Widget for Panel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let title_max_width = (area.width as usize).saturating_sub(4);
        let title = self
            .location
            .map(|location| location_title(location, title_max_width))
            .unwrap_or_default();

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color()))
            .title(Span::styled(format!(" {} ", title), self.title_style()))
            .style(Style::default().bg(self.bg_color));
        let indicator = self.indicator();
        if !indicator.is_empty() {
            block = block.title_bottom(Span::styled(
                indicator,
                Style::default().fg(self.accent_color),
            ));
        }

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let visible = inner.height as usize;
        let total = self.entries.len();
        let has_scrollbar = total > visible;
        let rows = Rect {
            width: inner.width.saturating_sub(u16::from(has_scrollbar)),
            ..inner
        };
        let start = scroll_offset(self.selected, total, visible);
        let end = (start + visible).min(total);

        for (row, index) in (start..end).enumerate() {
            self.render_entry(&self.entries[index], index, rows, buf, row as u16);
        }

        if has_scrollbar {
            let track_height = visible;
            let thumb_height = (track_height * track_height / total).max(1);
            let max_scroll = total - visible;
            let thumb_pos = start * track_height.saturating_sub(thumb_height) / max_scroll;

            let scrollbar_x = inner.x + inner.width - 1;
            let track_style = Style::default().fg(Color::Rgb(60, 60, 60));
            let thumb_style = Style::default().fg(Color::Rgb(150, 150, 150));

            for i in 0..track_height {
                let (symbol, style) = if i >= thumb_pos && i < thumb_pos + thumb_height {
                    ("┃", thumb_style)
                } else {
                    ("│", track_style)
                };
                buf.set_string(scrollbar_x, inner.y + i as u16, symbol, style);
            }
        }
    }
}
