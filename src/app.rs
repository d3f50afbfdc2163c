//! 두 패널과 명령줄을 묶는 세션
//!
//! `handle`은 상태만 바꾸고 외부 효과(`Effect`)를 돌려준다.
//! 효과 실행은 `run_effect`가 `ProcessRunner`를 통해 한다.

use crate::core::actions::{Action, KeyContext};
use crate::models::FolderModel;
use crate::system::{Lister, ProcessRunner};
use crate::ui::{LayoutManager, ThemeManager};
use crate::utils::error::{BenthosError, GuardRefusal, Result};
use crate::utils::glob::substring_pattern;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

mod command;
mod command_line;
mod focus;
mod pane;

pub use command::{CommandComposer, ParsedCommand};
pub use command_line::CommandLine;
pub use focus::{FocusRouter, PaneId};
pub use pane::{PaneController, PaneEvent};

/// 액션 처리 후 실행할 외부 효과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// 기본 프로그램으로 파일 열기
    OpenFile(PathBuf),
    /// 파일 관리자에서 보기
    Reveal(PathBuf),
    /// 셸 명령 실행 후 두 패널 다시 읽기
    RunShell { command: String, cwd: PathBuf },
}

/// 키 입력을 받는 곳
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFocus {
    #[default]
    Pane,
    CommandLine,
}

/// 세션 상태
pub struct Session {
    /// 종료 플래그
    pub should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    /// 테마 관리자
    pub theme_manager: ThemeManager,
    /// 토스트 메시지 (3초 후 자동 소멸)
    pub toast_message: Option<(String, Instant)>,
    /// 좌/우 패널
    panes: [PaneController; 2],
    /// 소스/타깃 라우터
    focus: FocusRouter,
    /// 입력 포커스
    input_focus: InputFocus,
    /// 명령줄 버퍼
    command_line: CommandLine,
    /// 디렉토리/북마크 목록 제공자
    lister: Box<dyn Lister>,
}

impl Session {
    /// 두 패널을 같은 시작 디렉토리로 열어 세션 생성
    pub fn new(start: PathBuf, show_dot_items: bool, lister: Box<dyn Lister>) -> Result<Self> {
        let left = FolderModel::open(start.clone(), show_dot_items, lister.as_ref())?;
        let right = FolderModel::open(start, show_dot_items, lister.as_ref())?;

        Ok(Self {
            should_quit: false,
            layout: LayoutManager::new(),
            theme_manager: ThemeManager::new(),
            toast_message: None,
            panes: [PaneController::new(left), PaneController::new(right)],
            focus: FocusRouter::new(),
            input_focus: InputFocus::Pane,
            command_line: CommandLine::new(),
            lister,
        })
    }

    // Accessors

    pub fn pane(&self, id: PaneId) -> &PaneController {
        &self.panes[id.index()]
    }

    pub fn source_id(&self) -> PaneId {
        self.focus.source()
    }

    pub fn source(&self) -> &PaneController {
        self.pane(self.focus.source())
    }

    pub fn target(&self) -> &PaneController {
        self.pane(self.focus.target())
    }

    pub fn input_focus(&self) -> InputFocus {
        self.input_focus
    }

    pub fn key_context(&self) -> KeyContext {
        match self.input_focus {
            InputFocus::Pane => KeyContext::Pane,
            InputFocus::CommandLine => KeyContext::CommandLine,
        }
    }

    pub fn command_line(&self) -> &CommandLine {
        &self.command_line
    }

    /// 창 제목 (소스 패널 위치)
    pub fn title(&self) -> String {
        format!("benthos - {}", self.source().location())
    }

    // Toast

    pub fn set_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now()));
    }

    /// 만료된 토스트 제거
    pub fn clear_expired_toast(&mut self) {
        if let Some((_, time)) = &self.toast_message {
            if time.elapsed().as_secs() >= 3 {
                self.toast_message = None;
            }
        }
    }

    pub fn toast_display(&self) -> Option<&str> {
        self.toast_message
            .as_ref()
            .map(|(message, _)| message.as_str())
    }

    // Dispatch

    /// 액션 처리
    pub fn handle(&mut self, action: Action) -> Effect {
        match action {
            Action::MoveUp => self.pane_event(PaneEvent::MoveUp),
            Action::MoveDown => self.pane_event(PaneEvent::MoveDown),
            Action::Leave => self.pane_event(PaneEvent::Leave),
            Action::EnterSelected => self.pane_event(PaneEvent::Enter),
            Action::Trigger => self.pane_event(PaneEvent::Trigger),
            Action::Reveal => self.pane_event(PaneEvent::Preview),
            Action::ShowBookmarks => self.pane_event(PaneEvent::ShowBookmarks),
            Action::ToggleDotItems => self.pane_event(PaneEvent::ToggleDotItems),
            Action::ClearSearch => self.pane_event(PaneEvent::ClearSearch),
            Action::Search(c) => self.pane_event(PaneEvent::Search(c)),
            Action::SwitchPane => {
                self.focus_pane(self.focus.target());
                Effect::None
            }
            Action::StartCommand => {
                self.open_command_line("");
                Effect::None
            }
            Action::StartFilter => {
                self.open_command_line("/");
                Effect::None
            }
            Action::Copy => {
                let built = CommandComposer::build_copy(self.source(), self.target());
                self.compose(built)
            }
            Action::Move => {
                let built = CommandComposer::build_move(self.source(), self.target());
                self.compose(built)
            }
            Action::Delete => {
                let built = CommandComposer::build_delete(self.source());
                self.compose(built)
            }
            Action::MakeDirectory => self.compose(Ok(CommandComposer::build_mkdir())),
            Action::Mirror => {
                self.mirror();
                Effect::None
            }
            Action::Reload => {
                self.reload_all();
                Effect::None
            }
            Action::InputChar(c) => self.edit_command_line(|line| line.insert_char(c)),
            Action::InputBackspace => self.edit_command_line(CommandLine::backspace),
            Action::InputDelete => self.edit_command_line(CommandLine::delete),
            Action::InputDeleteWord => self.edit_command_line(CommandLine::delete_prev_word),
            Action::InputLeft => {
                self.command_line.left();
                Effect::None
            }
            Action::InputRight => {
                self.command_line.right();
                Effect::None
            }
            Action::InputHome => {
                self.command_line.home();
                Effect::None
            }
            Action::InputEnd => {
                self.command_line.end();
                Effect::None
            }
            Action::Submit => self.submit_command(),
            Action::Cancel => {
                self.cancel_command();
                Effect::None
            }
            Action::Quit => {
                self.should_quit = true;
                Effect::None
            }
        }
    }

    /// 외부 효과 실행
    ///
    /// 셸 명령을 띄운 뒤에는 종료를 기다리지 않고 두 패널을 다시 읽는다.
    pub fn run_effect(&mut self, effect: Effect, runner: &dyn ProcessRunner) {
        let result = match &effect {
            Effect::None => return,
            Effect::OpenFile(path) => runner.open_file(path),
            Effect::Reveal(path) => runner.reveal(path),
            Effect::RunShell { command, cwd } => runner.run_shell(command, cwd),
        };

        if let Err(e) = result {
            warn!(error = %e, "external command failed");
            self.set_toast(&e.to_string());
        }

        if matches!(effect, Effect::RunShell { .. }) {
            self.reload_all();
        }
    }

    // Panes

    /// 패널에 포커스. 명령줄에 있던 입력 포커스도 패널로 돌아온다.
    pub fn focus_pane(&mut self, id: PaneId) {
        if self.focus.focus(id) {
            debug!(pane = ?id, location = %self.source().location(), "source pane changed");
        }
        self.input_focus = InputFocus::Pane;
    }

    fn pane_event(&mut self, event: PaneEvent) -> Effect {
        let index = self.focus.source().index();
        let result = self.panes[index].handle(event, self.lister.as_ref());
        self.absorb(result).unwrap_or(Effect::None)
    }

    fn mirror(&mut self) {
        let location = CommandComposer::mirror_location(self.source());
        let index = self.focus.target().index();
        let result = self.panes[index].go_to_location(location, self.lister.as_ref());
        self.absorb(result);
    }

    /// 두 패널 목록을 다시 읽음
    pub fn reload_all(&mut self) {
        for index in 0..self.panes.len() {
            let result = self.panes[index].handle(PaneEvent::Reload, self.lister.as_ref());
            self.absorb(result);
        }
    }

    /// 패널 작업 실패는 로그와 토스트로만 알리고 이전 상태를 유지
    fn absorb<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(error = %e, "pane operation failed");
                self.set_toast(&e.to_string());
                None
            }
        }
    }

    // Command line

    fn open_command_line(&mut self, text: &str) {
        self.command_line.fill(text);
        self.input_focus = InputFocus::CommandLine;
        self.apply_live_filter();
    }

    fn compose(&mut self, built: std::result::Result<String, GuardRefusal>) -> Effect {
        match built {
            Ok(command) => self.open_command_line(&command),
            Err(refusal) => self.refuse(refusal),
        }
        Effect::None
    }

    /// 조립 거부는 키 입력을 무시한 것으로 처리하고 이유만 알린다
    fn refuse(&mut self, refusal: GuardRefusal) {
        let error = BenthosError::from(refusal);
        debug!(%error, "command refused");
        self.set_toast(&error.to_string());
    }

    fn edit_command_line(&mut self, edit: impl FnOnce(&mut CommandLine)) -> Effect {
        edit(&mut self.command_line);
        self.apply_live_filter();
        Effect::None
    }

    /// `/`로 시작하는 입력은 소스 패널에 부분 문자열 필터로 바로 적용
    fn apply_live_filter(&mut self) {
        let Some(needle) = self.command_line.value().strip_prefix('/') else {
            return;
        };
        let pattern = substring_pattern(needle);
        let index = self.focus.source().index();
        let result = self.panes[index].set_filter(Some(&pattern), self.lister.as_ref());
        self.absorb(result);
    }

    fn cancel_command(&mut self) {
        self.command_line.clear();
        let index = self.focus.source().index();
        let result = self.panes[index].set_filter(None, self.lister.as_ref());
        self.absorb(result);
        self.focus_pane(self.focus.source());
    }

    fn submit_command(&mut self) -> Effect {
        let text = self.command_line.take();
        let index = self.focus.source().index();
        self.focus_pane(self.focus.source());

        match ParsedCommand::parse(&text) {
            ParsedCommand::Empty => Effect::None,
            ParsedCommand::Filter(needle) => {
                let pattern = substring_pattern(&needle);
                let result = self.panes[index].set_filter(Some(&pattern), self.lister.as_ref());
                self.absorb(result);
                Effect::None
            }
            ParsedCommand::Show(glob) => {
                let result = self.panes[index].set_filter(Some(&glob), self.lister.as_ref());
                self.absorb(result);
                Effect::None
            }
            ParsedCommand::Cd(path) => {
                let result = self.panes[index].go_to(&path, self.lister.as_ref());
                if let Some(false) = self.absorb(result) {
                    debug!(path = %path, "cd ignored");
                }
                Effect::None
            }
            ParsedCommand::Raw(command) => {
                match self.panes[index].location().as_dir().map(Path::to_path_buf) {
                    Some(cwd) => {
                        info!(command = %command, "submitting shell command");
                        Effect::RunShell { command, cwd }
                    }
                    None => {
                        self.refuse(GuardRefusal::NoWorkingDirectory);
                        Effect::None
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
