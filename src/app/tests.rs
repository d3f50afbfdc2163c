use super::*;
use crate::models::Location;
use crate::system::bookmarks::{Bookmark, BookmarkStore};
use crate::system::DirectoryLister;
use crate::utils::error::BenthosError;
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// 호출을 기록만 하는 프로세스 실행기
#[derive(Default)]
struct RecordingRunner {
    calls: RefCell<Vec<String>>,
    fail: bool,
}

impl RecordingRunner {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.borrow_mut().push(call);
        if self.fail {
            return Err(BenthosError::Launch {
                program: "fake".to_string(),
                reason: "refused".to_string(),
            });
        }
        Ok(())
    }
}

impl ProcessRunner for RecordingRunner {
    fn open_file(&self, path: &Path) -> Result<()> {
        self.record(format!("open {}", path.display()))
    }

    fn reveal(&self, path: &Path) -> Result<()> {
        self.record(format!("reveal {}", path.display()))
    }

    fn run_shell(&self, command: &str, cwd: &Path) -> Result<()> {
        self.record(format!("sh {} @ {}", command, cwd.display()))
    }
}

fn make_test_session(path: &Path) -> Session {
    Session::new(
        path.to_path_buf(),
        true,
        Box::new(DirectoryLister::default()),
    )
    .unwrap()
}

fn move_pane(session: &mut Session, id: PaneId, path: &Path) {
    let lister = DirectoryLister::default();
    session.panes[id.index()]
        .go_to_location(Location::Directory(path.to_path_buf()), &lister)
        .unwrap();
}

fn select(session: &mut Session, id: PaneId, name: &str) {
    let pane = &mut session.panes[id.index()];
    let index = pane
        .items()
        .iter()
        .position(|entry| entry.name() == name)
        .unwrap();
    pane.select_index(index);
}

fn type_text(session: &mut Session, text: &str) {
    for c in text.chars() {
        session.handle(Action::InputChar(c));
    }
}

fn run_command(session: &mut Session, text: &str) -> Effect {
    session.handle(Action::StartCommand);
    type_text(session, text);
    session.handle(Action::Submit)
}

fn names(pane: &PaneController) -> Vec<&str> {
    pane.items().iter().map(|entry| entry.name()).collect()
}

fn dir_of(pane: &PaneController) -> &Path {
    pane.location().as_dir().unwrap()
}

fn workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("src/sub")).unwrap();
    fs::create_dir(temp.path().join("dst")).unwrap();
    fs::write(temp.path().join("src/file.txt"), "x").unwrap();
    fs::write(temp.path().join("src/notes.md"), "x").unwrap();
    temp
}

#[test]
fn test_new_session_opens_both_panes() {
    let temp = workspace();
    let session = make_test_session(&temp.path().join("src"));

    assert_eq!(session.source_id(), PaneId::Left);
    assert_eq!(dir_of(session.pane(PaneId::Left)), temp.path().join("src"));
    assert_eq!(dir_of(session.pane(PaneId::Right)), temp.path().join("src"));
    assert_eq!(session.input_focus(), InputFocus::Pane);
}

#[test]
fn test_cd_parent_from_command_line() {
    let temp = TempDir::new().unwrap();
    let deep = temp.path().join("a/b");
    fs::create_dir_all(&deep).unwrap();
    let mut session = make_test_session(&deep);

    assert_eq!(run_command(&mut session, "cd .."), Effect::None);
    assert_eq!(dir_of(session.source()), temp.path().join("a"));
    assert_eq!(session.command_line().value(), "");
    assert_eq!(session.input_focus(), InputFocus::Pane);
    assert_eq!(dir_of(session.target()), deep);
}

#[test]
fn test_cd_to_missing_path_keeps_location() {
    let temp = workspace();
    let mut session = make_test_session(&temp.path().join("src"));

    run_command(&mut session, "cd nowhere");
    assert_eq!(dir_of(session.source()), temp.path().join("src"));
    assert!(session.toast_display().is_none());
}

#[test]
fn test_show_glob_keeps_path() {
    let temp = workspace();
    let mut session = make_test_session(&temp.path().join("src"));

    run_command(&mut session, "show *.md");
    assert_eq!(dir_of(session.source()), temp.path().join("src"));
    assert_eq!(session.source().folder().filter(), "*.md");
    assert_eq!(names(session.source()), vec!["..", "notes.md"]);
}

#[test]
fn test_copy_fills_command_line() {
    let temp = workspace();
    let mut session = make_test_session(&temp.path().join("src"));
    move_pane(&mut session, PaneId::Right, &temp.path().join("dst"));
    select(&mut session, PaneId::Left, "file.txt");

    assert_eq!(session.handle(Action::Copy), Effect::None);
    assert_eq!(session.input_focus(), InputFocus::CommandLine);
    let expected = format!(
        "cp '{}' '{}'",
        temp.path().join("src/file.txt").display(),
        temp.path().join("dst").display()
    );
    assert_eq!(session.command_line().value(), expected);

    let effect = session.handle(Action::Submit);
    assert_eq!(
        effect,
        Effect::RunShell {
            command: expected,
            cwd: temp.path().join("src"),
        }
    );
    assert_eq!(session.input_focus(), InputFocus::Pane);
}

#[test]
fn test_copy_refused_on_same_path() {
    let temp = workspace();
    let mut session = make_test_session(&temp.path().join("src"));
    select(&mut session, PaneId::Left, "file.txt");

    assert_eq!(session.handle(Action::Copy), Effect::None);
    assert_eq!(session.input_focus(), InputFocus::Pane);
    assert_eq!(session.command_line().value(), "");
    assert_eq!(
        session.toast_display(),
        Some(GuardRefusal::SamePath.to_string().as_str())
    );
}

#[test]
fn test_move_refused_into_descendant() {
    let temp = workspace();
    let mut session = make_test_session(temp.path());
    move_pane(&mut session, PaneId::Right, &temp.path().join("src/sub"));
    select(&mut session, PaneId::Left, "src");

    session.handle(Action::Move);
    assert_eq!(session.input_focus(), InputFocus::Pane);
    assert_eq!(
        session.toast_display(),
        Some(GuardRefusal::IntoItself.to_string().as_str())
    );
}

#[test]
fn test_delete_and_mkdir_fill_command_line() {
    let temp = workspace();
    let mut session = make_test_session(&temp.path().join("src"));
    select(&mut session, PaneId::Left, "sub");

    session.handle(Action::Delete);
    assert_eq!(
        session.command_line().value(),
        format!("rm -r '{}'", temp.path().join("src/sub").display())
    );
    session.handle(Action::Cancel);

    session.handle(Action::MakeDirectory);
    assert_eq!(session.command_line().value(), "mkdir ");
    type_text(&mut session, "fresh");
    assert_eq!(
        session.handle(Action::Submit),
        Effect::RunShell {
            command: "mkdir fresh".to_string(),
            cwd: temp.path().join("src"),
        }
    );
}

#[test]
fn test_run_shell_reloads_both_panes() {
    let temp = workspace();
    let src = temp.path().join("src");
    let mut session = make_test_session(&src);
    let runner = RecordingRunner::default();

    let effect = run_command(&mut session, "touch created");
    fs::write(src.join("created"), "").unwrap();
    session.run_effect(effect, &runner);

    assert_eq!(
        runner.calls.borrow().as_slice(),
        [format!("sh touch created @ {}", src.display())]
    );
    assert!(names(session.pane(PaneId::Left)).contains(&"created"));
    assert!(names(session.pane(PaneId::Right)).contains(&"created"));
}

#[test]
fn test_raw_command_refused_in_bookmarks() {
    let temp = workspace();
    let mut session = make_test_session(temp.path());
    session.handle(Action::ShowBookmarks);
    assert!(session.source().location().is_bookmarks());

    assert_eq!(run_command(&mut session, "ls"), Effect::None);
    assert_eq!(
        session.toast_display(),
        Some(GuardRefusal::NoWorkingDirectory.to_string().as_str())
    );
}

#[test]
fn test_file_operations_refused_in_bookmarks() {
    let temp = workspace();
    let bookmarks = BookmarkStore::new(vec![Bookmark {
        name: "Sources".to_string(),
        path: temp.path().join("src"),
    }]);
    let mut session = Session::new(
        temp.path().to_path_buf(),
        true,
        Box::new(DirectoryLister::new(bookmarks)),
    )
    .unwrap();
    move_pane(&mut session, PaneId::Right, &temp.path().join("dst"));
    session.handle(Action::ShowBookmarks);
    select(&mut session, PaneId::Left, "Sources");

    for action in [Action::Copy, Action::Move, Action::Delete] {
        assert_eq!(session.handle(action), Effect::None);
        assert_eq!(session.input_focus(), InputFocus::Pane);
        assert_eq!(session.command_line().value(), "");
        assert_eq!(
            session.toast_display(),
            Some(GuardRefusal::NoWorkingDirectory.to_string().as_str())
        );
    }
}

#[cfg(target_os = "linux")]
#[test]
fn test_cd_into_undecodable_listing_keeps_location() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = workspace();
    let dst = temp.path().join("dst");
    fs::write(dst.join(OsStr::from_bytes(b"bad\xff")), "x").unwrap();
    let mut session = make_test_session(&temp.path().join("src"));
    let before: Vec<String> = names(session.source()).iter().map(|n| n.to_string()).collect();

    run_command(&mut session, &format!("cd {}", dst.display()));
    assert_eq!(dir_of(session.source()), temp.path().join("src"));
    assert_eq!(names(session.source()), before);
    assert!(session.toast_display().is_some());
}

#[test]
fn test_trigger_file_routes_to_runner() {
    let temp = workspace();
    let mut session = make_test_session(&temp.path().join("src"));
    select(&mut session, PaneId::Left, "notes.md");
    let runner = RecordingRunner::default();

    let effect = session.handle(Action::Trigger);
    assert_eq!(effect, Effect::OpenFile(temp.path().join("src/notes.md")));
    session.run_effect(effect, &runner);

    let reveal = session.handle(Action::Reveal);
    session.run_effect(reveal, &runner);

    assert_eq!(
        runner.calls.borrow().as_slice(),
        [
            format!("open {}", temp.path().join("src/notes.md").display()),
            format!("reveal {}", temp.path().join("src/notes.md").display()),
        ]
    );
}

#[test]
fn test_runner_failure_sets_toast() {
    let temp = workspace();
    let mut session = make_test_session(&temp.path().join("src"));
    let runner = RecordingRunner::failing();

    session.run_effect(Effect::OpenFile(temp.path().join("src/file.txt")), &runner);
    assert!(session.toast_display().unwrap().contains("fake"));
}

#[test]
fn test_trigger_directory_navigates() {
    let temp = workspace();
    let mut session = make_test_session(&temp.path().join("src"));
    select(&mut session, PaneId::Left, "sub");

    assert_eq!(session.handle(Action::Trigger), Effect::None);
    assert_eq!(dir_of(session.source()), temp.path().join("src/sub"));
}

#[test]
fn test_mirror_shows_selection_in_target() {
    let temp = workspace();
    let mut session = make_test_session(&temp.path().join("src"));
    move_pane(&mut session, PaneId::Right, &temp.path().join("dst"));

    select(&mut session, PaneId::Left, "sub");
    session.handle(Action::Mirror);
    assert_eq!(dir_of(session.target()), temp.path().join("src/sub"));

    select(&mut session, PaneId::Left, "file.txt");
    session.handle(Action::Mirror);
    assert_eq!(dir_of(session.target()), temp.path().join("src"));
    assert_eq!(session.source_id(), PaneId::Left);
}

#[test]
fn test_live_filter_and_cancel() {
    let temp = workspace();
    let mut session = make_test_session(&temp.path().join("src"));

    session.handle(Action::StartFilter);
    assert_eq!(session.command_line().value(), "/");
    type_text(&mut session, "md");
    assert_eq!(session.source().folder().filter(), "*md*");
    assert_eq!(names(session.source()), vec!["..", "notes.md"]);

    session.handle(Action::InputBackspace);
    assert_eq!(session.source().folder().filter(), "*m*");

    session.handle(Action::Cancel);
    assert_eq!(session.source().folder().filter(), "*");
    assert_eq!(session.command_line().value(), "");
    assert_eq!(session.input_focus(), InputFocus::Pane);
}

#[test]
fn test_submitted_filter_stays() {
    let temp = workspace();
    let mut session = make_test_session(&temp.path().join("src"));

    session.handle(Action::StartFilter);
    type_text(&mut session, "file");
    session.handle(Action::Submit);

    assert_eq!(session.source().folder().filter(), "*file*");
    assert_eq!(session.input_focus(), InputFocus::Pane);
    assert_eq!(session.command_line().value(), "");
}

#[test]
fn test_escape_in_pane_clears_search_and_filter() {
    let temp = workspace();
    let mut session = make_test_session(&temp.path().join("src"));
    run_command(&mut session, "show *.txt");
    session.handle(Action::Search('f'));
    assert_eq!(session.source().search(), "F");

    session.handle(Action::ClearSearch);
    assert_eq!(session.source().search(), "");
    assert_eq!(session.source().folder().filter(), "*");
}

#[test]
fn test_forwarded_keys_keep_command_line_focus() {
    let temp = workspace();
    let mut session = make_test_session(&temp.path().join("src"));

    session.handle(Action::StartCommand);
    type_text(&mut session, "ls");
    session.handle(Action::MoveDown);

    assert_eq!(session.input_focus(), InputFocus::CommandLine);
    assert_eq!(session.source().selected_index(), Some(1));
    assert_eq!(session.command_line().value(), "ls");
}

#[test]
fn test_switch_pane_changes_source_and_title() {
    let temp = workspace();
    let mut session = make_test_session(&temp.path().join("src"));
    move_pane(&mut session, PaneId::Right, &temp.path().join("dst"));

    assert_eq!(
        session.title(),
        format!("benthos - {}", temp.path().join("src").display())
    );
    session.handle(Action::SwitchPane);
    assert_eq!(session.source_id(), PaneId::Right);
    assert_eq!(
        session.title(),
        format!("benthos - {}", temp.path().join("dst").display())
    );
}

#[test]
fn test_search_applies_to_source_only() {
    let temp = workspace();
    let mut session = make_test_session(&temp.path().join("src"));

    session.handle(Action::Search('n'));
    assert_eq!(
        session.source().selected_item().unwrap().name(),
        "notes.md"
    );
    assert_eq!(session.target().selected_index(), Some(0));
}

#[test]
fn test_quit() {
    let temp = workspace();
    let mut session = make_test_session(temp.path());
    session.handle(Action::Quit);
    assert!(session.should_quit);
}
