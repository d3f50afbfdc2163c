mod app;
mod core;
mod models;
mod system;
mod ui;
mod utils;

use anyhow::Context;
use app::{InputFocus, PaneId, Session};
use clap::Parser;
use core::actions::{find_action, generate_key_bar_items};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use system::{BookmarkStore, Config, DirectoryLister, ProcessRunner, SystemLauncher};
use tracing::{info, warn};
use ui::{CommandLineBar, KeyBar, LayoutMode, Panel, PanelStatus, StatusBar, WarningScreen};
use utils::PathResolver;

#[derive(Parser, Debug)]
#[command(
    name = "benthos",
    about = "A dual-pane directory browser with a shell command line",
    version
)]
struct Args {
    #[arg(help = "Directory to open in both panes (defaults to the current directory)")]
    path: Option<PathBuf>,

    #[arg(long, value_name = "FILE", help = "Settings file to use")]
    config: Option<PathBuf>,

    #[arg(long, value_name = "FILE", help = "Bookmark file to use")]
    bookmarks: Option<PathBuf>,

    #[arg(long, value_name = "FILE", help = "Log file to write to")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cwd = std::env::current_dir().context("cannot determine the current directory")?;

    let config_path = args.config.clone().or_else(Config::default_path);
    let (config, config_error) = match config_path.as_deref().map(Config::load) {
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (Config::default(), Some(e)),
        None => (Config::default(), None),
    };

    let log_path = match &args.log_file {
        Some(path) => PathResolver::normalize(&cwd.join(path)),
        None => config.log_path(&cwd),
    };
    init_logging(&log_path, config.log_level())?;
    if let Some(e) = config_error {
        warn!(error = %e, "ignoring malformed settings file");
    }

    let bookmark_path = match &args.bookmarks {
        Some(path) => PathResolver::normalize(&cwd.join(path)),
        None => config.bookmark_path(&cwd),
    };
    let bookmarks = BookmarkStore::load(&bookmark_path, &cwd)
        .with_context(|| format!("cannot load bookmarks from {}", bookmark_path.display()))?;

    let start = match &args.path {
        Some(path) => PathResolver::resolve_path(&cwd, &path.to_string_lossy()),
        None => cwd.clone(),
    };
    info!(start = %start.display(), "starting benthos");

    let lister = DirectoryLister::new(bookmarks);
    let mut session = Session::new(start.clone(), config.show_dot_items, Box::new(lister))
        .with_context(|| format!("cannot open {}", start.display()))?;

    if let Err(e) = session.theme_manager.load_themes_from_config_dir() {
        warn!(error = %e, "cannot load custom themes");
    }
    if let Err(e) = session.theme_manager.switch_theme(&config.theme) {
        warn!(error = %e, "falling back to the default theme");
    }

    install_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_session(&mut terminal, &mut session, &SystemLauncher::new());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        warn!(error = %e, "session ended with an error");
    }
    res
}

/// 로그는 파일로만 기록 (터미널 UI를 건드리지 않음)
fn init_logging(path: &Path, level: tracing::Level) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create log directory {}", parent.display()))?;
    }
    let file: File = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(())
}

/// 패닉 시 터미널 상태 복원
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn run_session<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
    runner: &dyn ProcessRunner,
) -> anyhow::Result<()> {
    let mut shown_title = String::new();

    loop {
        // 소스 패널 위치가 바뀌면 창 제목 갱신
        let title = session.title();
        if title != shown_title {
            execute!(io::stdout(), SetTitle(&title))?;
            shown_title = title;
        }

        terminal.draw(|f| render(f, session))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(action) =
                        find_action(session.key_context(), key.modifiers, key.code)
                    {
                        let effect = session.handle(action);
                        session.run_effect(effect, runner);
                    }
                }
            }
        }

        session.clear_expired_toast();

        if session.should_quit {
            info!("quit");
            return Ok(());
        }
    }
}

fn render(f: &mut Frame, session: &mut Session) {
    let size = f.area();
    session.layout.update(size);

    let theme = session.theme_manager.current();
    let mode = session.layout.mode();

    if mode == LayoutMode::TooSmall {
        let (width, height) = session.layout.terminal_size();
        let warning = WarningScreen::new()
            .current_size(width, height)
            .theme(theme);
        f.render_widget(warning, size);
        return;
    }

    let areas = session.layout.areas().clone();
    let source_id = session.source_id();

    // 싱글 모드에서는 소스 패널만 전체 폭으로 표시
    let visible: Vec<PaneId> = match mode {
        LayoutMode::DualPanel => vec![PaneId::Left, PaneId::Right],
        _ => vec![source_id],
    };

    for id in visible {
        let pane = session.pane(id);
        let area = match id {
            PaneId::Left => areas.left_pane,
            PaneId::Right => areas.right_pane,
        };
        let status = if id == source_id {
            PanelStatus::Active
        } else {
            PanelStatus::Inactive
        };
        let panel = Panel::new()
            .location(pane.location())
            .status(status)
            .entries(pane.items())
            .selected(pane.selected_index())
            .search(pane.search())
            .filter(pane.folder().filter())
            .show_dot_items(pane.folder().show_dot_items())
            .theme(theme);
        f.render_widget(panel, area);
    }

    let source = session.source();
    let items = source.items();
    let containers = items
        .iter()
        .filter(|entry| entry.is_container() && !entry.is_parent_link())
        .count();
    let leaves = items.iter().filter(|entry| !entry.is_container()).count();
    let selected_name = source
        .selected_item()
        .filter(|entry| !entry.is_parent_link())
        .map(|entry| entry.name());

    let status_bar = StatusBar::new()
        .counts(containers, leaves)
        .selected_name(selected_name)
        .toast(session.toast_display())
        .layout_mode(mode.label())
        .theme(theme);
    f.render_widget(status_bar, areas.status_bar);

    let command_line = session.command_line();
    let bar = CommandLineBar::new()
        .value(command_line.value())
        .cursor_column(command_line.cursor_column())
        .focused(session.input_focus() == InputFocus::CommandLine)
        .theme(theme);
    if let Some(position) = bar.cursor_position(areas.command_line) {
        f.set_cursor_position(position);
    }
    f.render_widget(bar, areas.command_line);

    let key_bar = KeyBar::new()
        .items(generate_key_bar_items(session.key_context()))
        .theme(theme);
    f.render_widget(key_bar, areas.key_bar);
}
