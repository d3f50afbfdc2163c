//! 명령줄 해석과 복사/이동/삭제 명령 조립
//!
//! 조립된 명령은 바로 실행하지 않고 명령줄에 채워 넣어
//! 사용자가 확인하거나 고친 뒤 Enter로 실행하게 한다.

use super::pane::PaneController;
use crate::models::{Entry, Location};
use crate::utils::error::GuardRefusal;
use std::path::Path;

/// 명령줄 입력 해석 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// 빈 입력
    Empty,
    /// `cd <path>`: 소스 패널 이동
    Cd(String),
    /// `show <glob>`: 소스 패널 필터 지정
    Show(String),
    /// `/<text>`: 부분 문자열 필터
    Filter(String),
    /// 그 외: 셸 명령
    Raw(String),
}

impl ParsedCommand {
    pub fn parse(text: &str) -> Self {
        if text.trim().is_empty() {
            return ParsedCommand::Empty;
        }
        if let Some(rest) = text.strip_prefix('/') {
            return ParsedCommand::Filter(rest.to_string());
        }
        if let Some(rest) = text.strip_prefix("cd ") {
            return ParsedCommand::Cd(unquote(rest));
        }
        if let Some(rest) = text.strip_prefix("show ") {
            return ParsedCommand::Show(rest.to_string());
        }
        ParsedCommand::Raw(text.to_string())
    }
}

/// 셸 인용을 벗긴 단일 인자. 한 단어로 풀리지 않으면 공백만 다듬는다.
fn unquote(arg: &str) -> String {
    match shlex::split(arg) {
        Some(mut words) if words.len() == 1 => words.remove(0),
        _ => arg.trim().to_string(),
    }
}

/// 셸 작은따옴표 인용 (`'`는 `'\''`로)
pub fn quote_path(path: &Path) -> String {
    format!("'{}'", path.to_string_lossy().replace('\'', r"'\''"))
}

/// 소스/타깃 패널 상태로 셸 명령 문자열을 조립
pub struct CommandComposer;

impl CommandComposer {
    pub fn build_copy(
        source: &PaneController,
        target: &PaneController,
    ) -> Result<String, GuardRefusal> {
        let (item, dest) = Self::transfer_guard(source, target)?;
        let flag = if item.is_container() { "cp -r" } else { "cp" };
        Ok(format!("{} {} {}", flag, quote_path(item.path()), quote_path(dest)))
    }

    pub fn build_move(
        source: &PaneController,
        target: &PaneController,
    ) -> Result<String, GuardRefusal> {
        let (item, dest) = Self::transfer_guard(source, target)?;
        Ok(format!("mv {} {}", quote_path(item.path()), quote_path(dest)))
    }

    pub fn build_delete(source: &PaneController) -> Result<String, GuardRefusal> {
        let item = Self::selected_item(source)?;
        let flag = if item.is_container() { "rm -r" } else { "rm" };
        Ok(format!("{} {}", flag, quote_path(item.path())))
    }

    pub fn build_mkdir() -> String {
        "mkdir ".to_string()
    }

    /// 타깃 패널이 이동할 위치
    ///
    /// 선택 항목이 디렉토리면 그 디렉토리, 아니면 소스 패널의 현재 위치.
    pub fn mirror_location(source: &PaneController) -> Location {
        match source.selected_item() {
            Some(item) if item.is_container() => Location::Directory(item.path().to_path_buf()),
            _ => source.location().clone(),
        }
    }

    /// 소스 패널이 디렉토리를 보여 줄 때만 선택 항목을 돌려준다.
    fn selected_item(source: &PaneController) -> Result<&Entry, GuardRefusal> {
        source
            .location()
            .as_dir()
            .ok_or(GuardRefusal::NoWorkingDirectory)?;
        let item = source.selected_item().ok_or(GuardRefusal::NoSelection)?;
        if item.is_parent_link() {
            return Err(GuardRefusal::ParentEntry);
        }
        Ok(item)
    }

    fn transfer_guard<'a>(
        source: &'a PaneController,
        target: &'a PaneController,
    ) -> Result<(&'a Entry, &'a Path), GuardRefusal> {
        let item = Self::selected_item(source)?;
        let dest = target
            .location()
            .as_dir()
            .ok_or(GuardRefusal::TargetNotDirectory)?;
        if source.location().as_dir() == Some(dest) {
            return Err(GuardRefusal::SamePath);
        }
        if dest.starts_with(item.path()) {
            return Err(GuardRefusal::IntoItself);
        }
        Ok((item, dest))
    }
}
