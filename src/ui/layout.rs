// Screen layout - 화면 분할
//
// 너비 80 이상은 두 패널을 나란히, 40~79는 소스 패널 하나만,
// 그보다 작으면 경고 화면만 그린다.

use ratatui::layout::{Constraint, Layout, Rect};

pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 8;
pub const DUAL_PANEL_MIN_WIDTH: u16 = 80;

/// 화면 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    DualPanel,
    /// 소스 패널만 전체 폭으로 표시
    SinglePanel,
    TooSmall,
}

impl LayoutMode {
    pub fn for_size(width: u16, height: u16) -> Self {
        match (width, height) {
            (w, h) if w < MIN_WIDTH || h < MIN_HEIGHT => LayoutMode::TooSmall,
            (w, _) if w < DUAL_PANEL_MIN_WIDTH => LayoutMode::SinglePanel,
            _ => LayoutMode::DualPanel,
        }
    }

    /// 상태바 오른쪽 표시
    pub fn label(self) -> &'static str {
        match self {
            LayoutMode::DualPanel => "DUAL",
            LayoutMode::SinglePanel => "SINGLE",
            LayoutMode::TooSmall => "SMALL",
        }
    }
}

/// 행 배치: 패널 | 상태바 | 명령줄 | 키 바
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutAreas {
    /// 싱글 모드에서는 `right_pane`과 같은 영역
    pub left_pane: Rect,
    pub right_pane: Rect,
    pub status_bar: Rect,
    pub command_line: Rect,
    pub key_bar: Rect,
}

impl LayoutAreas {
    fn split(area: Rect, mode: LayoutMode) -> Self {
        if mode == LayoutMode::TooSmall {
            return Self::default();
        }

        let [panes, status_bar, command_line, key_bar] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let (left_pane, right_pane) = match mode {
            LayoutMode::DualPanel => {
                let [left, right] =
                    Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                        .areas(panes);
                (left, right)
            }
            _ => (panes, panes),
        };

        Self {
            left_pane,
            right_pane,
            status_bar,
            command_line,
            key_bar,
        }
    }
}

/// 마지막 프레임 크기 기준 레이아웃
#[derive(Debug)]
pub struct LayoutManager {
    mode: LayoutMode,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutManager {
    pub fn new() -> Self {
        Self {
            mode: LayoutMode::DualPanel,
            terminal_size: (0, 0),
            areas: LayoutAreas::default(),
        }
    }

    /// 프레임마다 현재 크기로 다시 계산
    pub fn update(&mut self, area: Rect) {
        self.terminal_size = (area.width, area.height);
        self.mode = LayoutMode::for_size(area.width, area.height);
        self.areas = LayoutAreas::split(area, self.mode);
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}
