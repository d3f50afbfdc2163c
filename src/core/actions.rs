//! 액션 시스템
//!
//! 모든 키 바인딩과 하단 키 바 항목이 이 모듈의 레지스트리를 참조한다.

use crate::ui::components::KeyBarItem;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Pane
    MoveUp,
    MoveDown,
    Leave,
    EnterSelected,
    Trigger,
    Reveal,
    ShowBookmarks,
    ToggleDotItems,
    ClearSearch,
    Search(char),
    SwitchPane,
    // Commands
    StartCommand,
    StartFilter,
    Copy,
    Move,
    MakeDirectory,
    Delete,
    Mirror,
    Reload,
    // Command line
    InputChar(char),
    InputBackspace,
    InputDelete,
    InputLeft,
    InputRight,
    InputHome,
    InputEnd,
    InputDeleteWord,
    Submit,
    Cancel,
    // System
    Quit,
}

/// 키 입력이 해석되는 문맥
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyContext {
    #[default]
    Pane,
    CommandLine,
}

/// 키 바 표시 정보
pub struct KeyBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    #[allow(dead_code)]
    pub action: Action,
    pub context: KeyContext,
    pub key_bar: Option<KeyBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 키 바에 노출되는 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    ActionDef {
        action: Action::Trigger,
        context: KeyContext::Pane,
        key_bar: Some(KeyBarEntry {
            key: "Enter",
            label: "Open",
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::StartCommand,
        context: KeyContext::Pane,
        key_bar: Some(KeyBarEntry {
            key: ":",
            label: "Cmd",
            priority: 20,
        }),
    },
    ActionDef {
        action: Action::StartFilter,
        context: KeyContext::Pane,
        key_bar: Some(KeyBarEntry {
            key: "/",
            label: "Filter",
            priority: 30,
        }),
    },
    ActionDef {
        action: Action::Copy,
        context: KeyContext::Pane,
        key_bar: Some(KeyBarEntry {
            key: "F5",
            label: "Copy",
            priority: 40,
        }),
    },
    ActionDef {
        action: Action::Move,
        context: KeyContext::Pane,
        key_bar: Some(KeyBarEntry {
            key: "F6",
            label: "Move",
            priority: 50,
        }),
    },
    ActionDef {
        action: Action::MakeDirectory,
        context: KeyContext::Pane,
        key_bar: Some(KeyBarEntry {
            key: "F7",
            label: "Mkdir",
            priority: 60,
        }),
    },
    ActionDef {
        action: Action::Delete,
        context: KeyContext::Pane,
        key_bar: Some(KeyBarEntry {
            key: "F8",
            label: "Del",
            priority: 70,
        }),
    },
    ActionDef {
        action: Action::ShowBookmarks,
        context: KeyContext::Pane,
        key_bar: Some(KeyBarEntry {
            key: "^B",
            label: "Marks",
            priority: 80,
        }),
    },
    ActionDef {
        action: Action::Mirror,
        context: KeyContext::Pane,
        key_bar: Some(KeyBarEntry {
            key: "^E",
            label: "Mirror",
            priority: 90,
        }),
    },
    ActionDef {
        action: Action::Quit,
        context: KeyContext::Pane,
        key_bar: Some(KeyBarEntry {
            key: "F10",
            label: "Quit",
            priority: 100,
        }),
    },
    ActionDef {
        action: Action::Submit,
        context: KeyContext::CommandLine,
        key_bar: Some(KeyBarEntry {
            key: "Enter",
            label: "Run",
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::Cancel,
        context: KeyContext::CommandLine,
        key_bar: Some(KeyBarEntry {
            key: "Esc",
            label: "Cancel",
            priority: 20,
        }),
    },
    ActionDef {
        action: Action::InputDeleteWord,
        context: KeyContext::CommandLine,
        key_bar: Some(KeyBarEntry {
            key: "^W",
            label: "Word",
            priority: 30,
        }),
    },
    ActionDef {
        action: Action::Mirror,
        context: KeyContext::CommandLine,
        key_bar: Some(KeyBarEntry {
            key: "^E",
            label: "Mirror",
            priority: 40,
        }),
    },
];

fn bind(code: KeyCode, modifiers: Option<KeyModifiers>, action: Action) -> KeyBinding {
    KeyBinding {
        code,
        modifiers,
        action,
    }
}

fn ctrl(c: char, action: Action) -> KeyBinding {
    bind(KeyCode::Char(c), Some(KeyModifiers::CONTROL), action)
}

/// 명령줄에서도 소스 패널로 전달되는 Ctrl 키
fn forwarded_bindings() -> Vec<KeyBinding> {
    vec![
        ctrl('h', Action::Leave),
        ctrl('j', Action::MoveDown),
        ctrl('k', Action::MoveUp),
        ctrl('l', Action::EnterSelected),
        ctrl('p', Action::Reveal),
        ctrl('b', Action::ShowBookmarks),
        ctrl('e', Action::Mirror),
        ctrl('r', Action::Reload),
        ctrl('q', Action::Quit),
        bind(KeyCode::F(10), None, Action::Quit),
    ]
}

fn build_pane_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        // 탐색
        bind(KeyCode::Down, None, Action::MoveDown),
        bind(KeyCode::Up, None, Action::MoveUp),
        bind(KeyCode::Left, None, Action::Leave),
        bind(KeyCode::Backspace, None, Action::Leave),
        bind(KeyCode::Right, None, Action::EnterSelected),
        bind(KeyCode::Enter, None, Action::Trigger),
        bind(KeyCode::Esc, None, Action::ClearSearch),
        ctrl('.', Action::ToggleDotItems),
        bind(
            KeyCode::Char('.'),
            Some(KeyModifiers::NONE),
            Action::ToggleDotItems,
        ),
        // 패널
        bind(KeyCode::Tab, None, Action::SwitchPane),
        bind(KeyCode::BackTab, None, Action::SwitchPane),
        // 명령
        bind(KeyCode::Char(':'), None, Action::StartCommand),
        bind(KeyCode::Char('/'), None, Action::StartFilter),
        bind(KeyCode::F(5), None, Action::Copy),
        bind(KeyCode::F(6), None, Action::Move),
        bind(KeyCode::F(7), None, Action::MakeDirectory),
        bind(KeyCode::F(8), None, Action::Delete),
    ];
    bindings.extend(forwarded_bindings());
    bindings
}

fn build_command_line_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        bind(KeyCode::Enter, None, Action::Submit),
        bind(KeyCode::Esc, None, Action::Cancel),
        bind(KeyCode::Backspace, None, Action::InputBackspace),
        bind(KeyCode::Delete, None, Action::InputDelete),
        bind(KeyCode::Left, None, Action::InputLeft),
        bind(KeyCode::Right, None, Action::InputRight),
        bind(KeyCode::Home, None, Action::InputHome),
        bind(KeyCode::End, None, Action::InputEnd),
        ctrl('a', Action::InputHome),
        ctrl('w', Action::InputDeleteWord),
    ];
    bindings.extend(forwarded_bindings());
    bindings
}

static PANE_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_pane_bindings);
static COMMAND_LINE_BINDINGS: LazyLock<Vec<KeyBinding>> =
    LazyLock::new(build_command_line_bindings);

/// 문맥별 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings(context: KeyContext) -> &'static [KeyBinding] {
    match context {
        KeyContext::Pane => PANE_BINDINGS.as_slice(),
        KeyContext::CommandLine => COMMAND_LINE_BINDINGS.as_slice(),
    }
}

/// 키 입력으로 액션 조회
///
/// 바인딩에 없는 일반 문자는 패널에서는 증분 검색(영숫자만),
/// 명령줄에서는 입력으로 처리한다.
pub fn find_action(context: KeyContext, modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    let bound = key_bindings(context).iter().find(|binding| {
        binding.code == code
            && match binding.modifiers {
                None => true, // any modifier
                Some(required) => modifiers == required,
            }
    });
    if let Some(binding) = bound {
        return Some(binding.action);
    }

    let KeyCode::Char(c) = code else {
        return None;
    };
    if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match context {
        KeyContext::Pane if c.is_alphanumeric() => Some(Action::Search(c)),
        KeyContext::Pane => None,
        KeyContext::CommandLine => Some(Action::InputChar(c)),
    }
}

/// 키 바 항목 생성 (priority 순 정렬)
pub fn generate_key_bar_items(context: KeyContext) -> Vec<KeyBarItem> {
    let mut entries: Vec<&KeyBarEntry> = ACTION_DEFS
        .iter()
        .filter(|def| def.context == context)
        .filter_map(|def| def.key_bar.as_ref())
        .collect();

    entries.sort_by_key(|entry| entry.priority);

    entries
        .into_iter()
        .map(|entry| KeyBarItem::new(entry.key, entry.label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pane(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
        find_action(KeyContext::Pane, modifiers, code)
    }

    fn line(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
        find_action(KeyContext::CommandLine, modifiers, code)
    }

    #[test]
    fn test_pane_navigation_keys() {
        assert_eq!(pane(KeyModifiers::NONE, KeyCode::Down), Some(Action::MoveDown));
        assert_eq!(
            pane(KeyModifiers::CONTROL, KeyCode::Char('j')),
            Some(Action::MoveDown)
        );
        assert_eq!(
            pane(KeyModifiers::CONTROL, KeyCode::Char('k')),
            Some(Action::MoveUp)
        );
        assert_eq!(pane(KeyModifiers::NONE, KeyCode::Backspace), Some(Action::Leave));
        assert_eq!(
            pane(KeyModifiers::CONTROL, KeyCode::Char('l')),
            Some(Action::EnterSelected)
        );
        assert_eq!(pane(KeyModifiers::NONE, KeyCode::Enter), Some(Action::Trigger));
        assert_eq!(pane(KeyModifiers::NONE, KeyCode::Esc), Some(Action::ClearSearch));
        assert_eq!(pane(KeyModifiers::NONE, KeyCode::Tab), Some(Action::SwitchPane));
    }

    #[test]
    fn test_pane_command_keys() {
        assert_eq!(pane(KeyModifiers::NONE, KeyCode::F(5)), Some(Action::Copy));
        assert_eq!(pane(KeyModifiers::NONE, KeyCode::F(8)), Some(Action::Delete));
        assert_eq!(
            pane(KeyModifiers::SHIFT, KeyCode::Char(':')),
            Some(Action::StartCommand)
        );
        assert_eq!(
            pane(KeyModifiers::NONE, KeyCode::Char('/')),
            Some(Action::StartFilter)
        );
        assert_eq!(
            pane(KeyModifiers::NONE, KeyCode::Char('.')),
            Some(Action::ToggleDotItems)
        );
        assert_eq!(
            pane(KeyModifiers::CONTROL, KeyCode::Char('.')),
            Some(Action::ToggleDotItems)
        );
    }

    #[test]
    fn test_pane_search_chars() {
        assert_eq!(
            pane(KeyModifiers::NONE, KeyCode::Char('a')),
            Some(Action::Search('a'))
        );
        assert_eq!(
            pane(KeyModifiers::SHIFT, KeyCode::Char('Z')),
            Some(Action::Search('Z'))
        );
        assert_eq!(
            pane(KeyModifiers::NONE, KeyCode::Char('7')),
            Some(Action::Search('7'))
        );
        assert_eq!(pane(KeyModifiers::NONE, KeyCode::Char('-')), None);
        assert_eq!(pane(KeyModifiers::ALT, KeyCode::Char('a')), None);
        assert_eq!(pane(KeyModifiers::CONTROL, KeyCode::Char('z')), None);
    }

    #[test]
    fn test_command_line_keys() {
        assert_eq!(line(KeyModifiers::NONE, KeyCode::Enter), Some(Action::Submit));
        assert_eq!(line(KeyModifiers::NONE, KeyCode::Esc), Some(Action::Cancel));
        assert_eq!(
            line(KeyModifiers::NONE, KeyCode::Backspace),
            Some(Action::InputBackspace)
        );
        assert_eq!(
            line(KeyModifiers::CONTROL, KeyCode::Char('w')),
            Some(Action::InputDeleteWord)
        );
        assert_eq!(
            line(KeyModifiers::NONE, KeyCode::Char('.')),
            Some(Action::InputChar('.'))
        );
        assert_eq!(
            line(KeyModifiers::SHIFT, KeyCode::Char(':')),
            Some(Action::InputChar(':'))
        );
    }

    #[test]
    fn test_command_line_forwards_pane_keys() {
        assert_eq!(
            line(KeyModifiers::CONTROL, KeyCode::Char('j')),
            Some(Action::MoveDown)
        );
        assert_eq!(
            line(KeyModifiers::CONTROL, KeyCode::Char('e')),
            Some(Action::Mirror)
        );
        assert_eq!(
            line(KeyModifiers::CONTROL, KeyCode::Char('r')),
            Some(Action::Reload)
        );
        assert_eq!(line(KeyModifiers::NONE, KeyCode::F(10)), Some(Action::Quit));
    }

    #[test]
    fn test_generate_key_bar_items() {
        let items = generate_key_bar_items(KeyContext::Pane);
        assert_eq!(items.len(), 10);
        assert_eq!(items[0].key, "Enter");
        assert_eq!(items[3].key, "F5");
        assert_eq!(items[3].label, "Copy");

        let items = generate_key_bar_items(KeyContext::CommandLine);
        assert_eq!(items[0].label, "Run");
        assert_eq!(items[1].key, "Esc");
    }
}
