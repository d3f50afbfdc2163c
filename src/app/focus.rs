/// 좌/우 패널 식별자
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneId {
    #[default]
    Left,
    Right,
}

impl PaneId {
    pub fn other(self) -> Self {
        match self {
            PaneId::Left => PaneId::Right,
            PaneId::Right => PaneId::Left,
        }
    }

    pub fn index(self) -> usize {
        match self {
            PaneId::Left => 0,
            PaneId::Right => 1,
        }
    }
}

/// 소스/타깃 패널 라우터
///
/// 마지막으로 포커스를 받은 패널이 소스, 나머지가 타깃이다.
/// 명령줄에 포커스가 있어도 소스는 바뀌지 않는다.
#[derive(Debug, Default)]
pub struct FocusRouter {
    source: PaneId,
}

impl FocusRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> PaneId {
        self.source
    }

    pub fn target(&self) -> PaneId {
        self.source.other()
    }

    /// 패널이 포커스를 받음. 소스가 바뀌었으면 true.
    pub fn focus(&mut self, pane: PaneId) -> bool {
        let changed = self.source != pane;
        self.source = pane;
        changed
    }
}
