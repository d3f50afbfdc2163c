use super::Effect;
use crate::models::{Entry, FolderModel, Location, Trigger};
use crate::system::Lister;
use crate::utils::error::Result;
use std::path::PathBuf;

/// 패널 단위 이벤트
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneEvent {
    MoveUp,
    MoveDown,
    Leave,
    Enter,
    Trigger,
    Preview,
    ShowBookmarks,
    ToggleDotItems,
    Search(char),
    ClearSearch,
    Reload,
}

/// 폴더 모델 하나와 선택/증분 검색 상태를 묶은 패널 컨트롤러
#[derive(Debug, Clone)]
pub struct PaneController {
    /// 패널이 소유한 폴더 모델
    folder: FolderModel,
    /// 증분 검색 문자열 (대문자로 정규화)
    search: String,
    /// 선택된 항목 인덱스
    selected: Option<usize>,
    /// 목록 재구성 후 선택 복원에 쓰는 마지막 선택 경로
    last_selected: Option<PathBuf>,
}

impl PaneController {
    pub fn new(folder: FolderModel) -> Self {
        let mut pane = Self {
            folder,
            search: String::new(),
            selected: None,
            last_selected: None,
        };
        pane.refresh();
        pane
    }

    pub fn folder(&self) -> &FolderModel {
        &self.folder
    }

    pub fn location(&self) -> &Location {
        self.folder.location()
    }

    pub fn items(&self) -> &[Entry] {
        self.folder.items()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&Entry> {
        self.selected.and_then(|index| self.items().get(index))
    }

    /// 표시 목록을 다시 구성하고 이전 선택을 복원
    ///
    /// `..`을 제외하고 경로가 이전 선택 경로의 접두사인 첫 항목을 고른다.
    /// 없으면 0번(`..`)을 선택한다.
    pub fn refresh(&mut self) {
        self.search.clear();

        let restored = self.last_selected.as_ref().and_then(|previous| {
            self.items()
                .iter()
                .position(|entry| !entry.is_parent_link() && previous.starts_with(entry.path()))
        });
        self.selected = None;
        self.select_index(restored.unwrap_or(0));
    }

    /// 인덱스 선택. 범위를 벗어나면 아무것도 하지 않는다.
    pub fn select_index(&mut self, index: usize) -> bool {
        let Some(entry) = self.items().get(index) else {
            return false;
        };
        self.last_selected = Some(entry.path().to_path_buf());
        self.selected = Some(index);
        true
    }

    pub fn move_up(&mut self) -> bool {
        match self.selected {
            Some(index) if index > 0 => self.select_index(index - 1),
            Some(_) => false,
            None => self.select_index(0),
        }
    }

    pub fn move_down(&mut self) -> bool {
        match self.selected {
            Some(index) => self.select_index(index + 1),
            None => self.select_index(0),
        }
    }

    /// 증분 검색에 문자 추가
    ///
    /// 확장된 접두사와 일치하는 항목이 없으면 입력을 버리고 검색 문자열을 유지한다.
    pub fn extend_search(&mut self, c: char) -> bool {
        let candidate: String = self.search.chars().chain(c.to_uppercase()).collect();
        let found = self
            .items()
            .iter()
            .position(|entry| entry.name().to_uppercase().starts_with(&candidate));

        match found {
            Some(index) => {
                self.search = candidate;
                self.select_index(index)
            }
            None => false,
        }
    }

    /// 증분 검색 초기화 (필터와 선택은 유지)
    pub fn reset_search(&mut self) {
        self.search.clear();
    }

    /// 입력 경로로 이동
    pub fn go_to(&mut self, input: &str, lister: &dyn Lister) -> Result<bool> {
        let moved = self.folder.go_to(input, lister)?;
        if moved {
            self.refresh();
        }
        Ok(moved)
    }

    pub fn go_to_location(&mut self, location: Location, lister: &dyn Lister) -> Result<bool> {
        let moved = self.folder.go_to_location(location, lister)?;
        if moved {
            self.refresh();
        }
        Ok(moved)
    }

    pub fn set_filter(&mut self, glob: Option<&str>, lister: &dyn Lister) -> Result<()> {
        self.folder.set_filter(glob, lister)?;
        self.refresh();
        Ok(())
    }

    /// 목록을 다시 읽고 표시 갱신
    fn reload(&mut self, lister: &dyn Lister) -> Result<()> {
        self.folder.update(lister)?;
        self.refresh();
        Ok(())
    }

    /// 패널 이벤트 처리
    pub fn handle(&mut self, event: PaneEvent, lister: &dyn Lister) -> Result<Effect> {
        match event {
            PaneEvent::MoveUp => {
                self.move_up();
            }
            PaneEvent::MoveDown => {
                self.move_down();
            }
            PaneEvent::Leave => {
                if self.folder.leave(lister)? {
                    self.refresh();
                }
            }
            PaneEvent::Enter => {
                if let Some(index) = self.selected {
                    if self.folder.enter(index, lister)? {
                        self.refresh();
                    }
                }
            }
            PaneEvent::Trigger => {
                let Some(index) = self.selected else {
                    return Ok(Effect::None);
                };
                match self.folder.trigger_item(index, lister)? {
                    Trigger::Navigated(true) => self.refresh(),
                    Trigger::Open(path) => return Ok(Effect::OpenFile(path)),
                    Trigger::Navigated(false) | Trigger::Nothing => {}
                }
            }
            PaneEvent::Preview => {
                if let Some(path) = self.selected.and_then(|index| self.folder.preview(index)) {
                    return Ok(Effect::Reveal(path));
                }
            }
            PaneEvent::ShowBookmarks => {
                self.go_to_location(Location::Bookmarks, lister)?;
            }
            PaneEvent::ToggleDotItems => {
                self.folder.toggle_dot_visibility(lister)?;
                self.refresh();
            }
            PaneEvent::Search(c) => {
                self.extend_search(c);
            }
            PaneEvent::ClearSearch => {
                self.reset_search();
                self.set_filter(None, lister)?;
            }
            PaneEvent::Reload => self.reload(lister)?,
        }
        Ok(Effect::None)
    }
}
