use crate::models::entry::Entry;
use crate::models::location::Location;
use crate::system::lister::Lister;
use crate::utils::error::Result;
use crate::utils::glob::{glob_match, MATCH_ALL, NO_DOT_ITEMS};
use crate::utils::PathResolver;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 항목 실행 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// 디렉토리 진입 시도 (true면 실제로 이동함)
    Navigated(bool),
    /// 외부 프로그램으로 열어야 할 파일
    Open(PathBuf),
    /// 유효하지 않은 인덱스
    Nothing,
}

/// 패널 하나의 폴더 모델
///
/// 현재 위치, 글로브 필터, 숨김 항목 표시 여부와
/// 정렬/필터링이 끝난 항목 목록을 소유한다.
/// `items[0]`은 항상 합성 `..` 엔트리다.
#[derive(Debug, Clone)]
pub struct FolderModel {
    /// 현재 위치
    location: Location,
    /// 마지막으로 보여준 실제 디렉토리 (북마크 목록에서 돌아갈 곳)
    last_dir: PathBuf,
    /// 글로브 필터 (이동 시마다 `*`로 초기화)
    filter: String,
    /// 점으로 시작하는 항목 표시 여부 (이동해도 유지)
    show_dot_items: bool,
    /// 표시 항목
    items: Vec<Entry>,
}

impl FolderModel {
    /// 디렉토리를 열어 모델 생성 (목록 실패는 그대로 전파)
    pub fn open(path: PathBuf, show_dot_items: bool, lister: &dyn Lister) -> Result<Self> {
        let mut model = Self {
            location: Location::Directory(path.clone()),
            last_dir: path,
            filter: MATCH_ALL.to_string(),
            show_dot_items,
            items: Vec::new(),
        };
        model.update(lister)?;
        Ok(model)
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn items(&self) -> &[Entry] {
        &self.items
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn show_dot_items(&self) -> bool {
        self.show_dot_items
    }

    /// 상대 경로 해석 기준 디렉토리
    pub fn anchor_dir(&self) -> &Path {
        self.location.as_dir().unwrap_or(&self.last_dir)
    }

    /// `..`가 가리키는 위치
    pub fn parent_location(&self) -> Location {
        match &self.location {
            Location::Directory(path) => {
                Location::Directory(path.parent().unwrap_or(path).to_path_buf())
            }
            Location::Bookmarks => Location::Directory(self.last_dir.clone()),
        }
    }

    /// 목록을 다시 읽어 항목 재계산
    ///
    /// 실패하면 기존 항목을 그대로 두고 에러를 반환한다.
    pub fn update(&mut self, lister: &dyn Lister) -> Result<()> {
        let raw = lister.list(&self.location)?;
        self.items = self.compose(raw, &self.filter, self.show_dot_items);
        Ok(())
    }

    /// 입력 문자열 기준 이동 (현재 위치 기준 상대 경로 허용)
    pub fn go_to(&mut self, input: &str, lister: &dyn Lister) -> Result<bool> {
        let target = PathResolver::resolve(self.anchor_dir(), input);
        self.go_to_location(target, lister)
    }

    /// 위치 이동
    ///
    /// 북마크 목록이거나, 존재하는 디렉토리이면서 현재 위치와 다를 때만 적용한다.
    /// 적용되지 않은 이동은 `Ok(false)`.
    pub fn go_to_location(&mut self, target: Location, lister: &dyn Lister) -> Result<bool> {
        let applies = match &target {
            Location::Bookmarks => true,
            Location::Directory(path) => path.is_dir() && target != self.location,
        };
        if !applies {
            debug!(target = %target, "navigation refused");
            return Ok(false);
        }

        let raw = lister.list(&target)?;

        if let Location::Directory(path) = &target {
            self.last_dir = path.clone();
        }
        self.location = target;
        self.filter = MATCH_ALL.to_string();
        self.items = self.compose(raw, &self.filter, self.show_dot_items);
        debug!(location = %self.location, "navigated");
        Ok(true)
    }

    /// 상위 디렉토리로 이동
    pub fn leave(&mut self, lister: &dyn Lister) -> Result<bool> {
        let parent = self.parent_location();
        self.go_to_location(parent, lister)
    }

    /// 인덱스의 항목이 디렉토리면 진입
    pub fn enter(&mut self, index: usize, lister: &dyn Lister) -> Result<bool> {
        match self.items.get(index) {
            Some(entry) if entry.is_container() => {
                let target = Location::Directory(entry.path().to_path_buf());
                self.go_to_location(target, lister)
            }
            _ => Ok(false),
        }
    }

    /// 디렉토리면 진입, 파일이면 열기 요청
    pub fn trigger_item(&mut self, index: usize, lister: &dyn Lister) -> Result<Trigger> {
        let Some(entry) = self.items.get(index) else {
            return Ok(Trigger::Nothing);
        };
        if entry.is_container() {
            self.enter(index, lister).map(Trigger::Navigated)
        } else {
            Ok(Trigger::Open(entry.path().to_path_buf()))
        }
    }

    /// 파일 관리자에서 보여줄 경로 (`..`는 제외)
    pub fn preview(&self, index: usize) -> Option<PathBuf> {
        self.items
            .get(index)
            .filter(|entry| !entry.is_parent_link())
            .map(|entry| entry.path().to_path_buf())
    }

    /// 글로브 필터 설정 (비어 있으면 `*`)
    pub fn set_filter(&mut self, glob: Option<&str>, lister: &dyn Lister) -> Result<()> {
        let filter = glob
            .filter(|g| !g.is_empty())
            .unwrap_or(MATCH_ALL)
            .to_string();
        let raw = lister.list(&self.location)?;
        self.items = self.compose(raw, &filter, self.show_dot_items);
        self.filter = filter;
        Ok(())
    }

    /// 숨김 항목 표시 토글
    pub fn toggle_dot_visibility(&mut self, lister: &dyn Lister) -> Result<()> {
        let show = !self.show_dot_items;
        let raw = lister.list(&self.location)?;
        self.items = self.compose(raw, &self.filter, show);
        self.show_dot_items = show;
        Ok(())
    }

    /// 디렉토리 우선 분할 → 글로브 필터 → 숨김 필터 → `..` 추가
    fn compose(&self, raw: Vec<Entry>, filter: &str, show_dot_items: bool) -> Vec<Entry> {
        let dot_pattern = if show_dot_items { MATCH_ALL } else { NO_DOT_ITEMS };
        let (containers, leaves): (Vec<Entry>, Vec<Entry>) =
            raw.into_iter().partition(|entry| entry.is_container());

        let parent_path = match self.parent_location() {
            Location::Directory(path) => path,
            Location::Bookmarks => self.last_dir.clone(),
        };

        std::iter::once(Entry::parent_link(&parent_path))
            .chain(
                containers
                    .into_iter()
                    .chain(leaves)
                    .filter(|entry| glob_match(filter, entry.name()))
                    .filter(|entry| glob_match(dot_pattern, entry.name())),
            )
            .collect()
    }
}
