use crate::models::Location;
use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";
const PATH_ELLIPSIS: &str = "/...";

/// 패널 제목용 위치 표시. 홈 경로는 `~`로 줄이고 너비에 맞춰 중간을 생략한다.
pub fn location_title(location: &Location, max_width: usize) -> String {
    match location {
        Location::Bookmarks => fit_end(&location.to_string(), max_width),
        Location::Directory(path) => fit_path(&shorten_home(path), max_width),
    }
}

/// 엔트리 이름을 너비에 맞춰 뒤쪽을 생략한다.
pub fn fit_name(name: &str, max_width: usize) -> String {
    if name.width() <= max_width {
        return name.to_string();
    }
    if max_width <= ELLIPSIS.width() {
        return take_prefix_by_width(name, max_width);
    }
    let prefix = take_prefix_by_width(name, max_width - ELLIPSIS.width());
    format!("{}{}", prefix, ELLIPSIS)
}

/// 경로 축약: `/첫요소/.../뒤요소들`
fn fit_path(path: &str, max_width: usize) -> String {
    if path.width() <= max_width {
        return path.to_string();
    }

    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if parts.len() <= 2 {
        return fit_start(path, max_width);
    }

    let head = if path.starts_with('~') {
        "~".to_string()
    } else {
        format!("/{}", parts[0])
    };
    let head_width = head.width() + PATH_ELLIPSIS.width();
    if head_width >= max_width {
        return fit_start(path, max_width);
    }

    let mut budget = max_width - head_width;
    let mut tail: Vec<&str> = Vec::new();
    for part in parts.iter().skip(1).rev() {
        let part_width = part.width() + 1;
        if part_width > budget {
            break;
        }
        tail.insert(0, part);
        budget -= part_width;
    }

    if tail.is_empty() {
        return fit_start(path, max_width);
    }
    format!("{}{}/{}", head, PATH_ELLIPSIS, tail.join("/"))
}

fn shorten_home(path: &Path) -> String {
    let text = path.to_string_lossy().to_string();
    let Some(home) = dirs::home_dir() else {
        return text;
    };
    let home = home.to_string_lossy();
    if home.is_empty() || home == "/" {
        return text;
    }

    if text == home {
        "~".to_string()
    } else {
        match text.strip_prefix(home.as_ref()) {
            Some(rest) if rest.starts_with('/') => format!("~{}", rest),
            _ => text,
        }
    }
}

fn fit_end(text: &str, max_width: usize) -> String {
    take_prefix_by_width(text, max_width)
}

fn fit_start(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= ELLIPSIS.width() {
        return take_prefix_by_width(text, max_width);
    }
    format!(
        "{}{}",
        ELLIPSIS,
        take_suffix_by_width(text, max_width - ELLIPSIS.width())
    )
}

fn take_prefix_by_width(text: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

fn take_suffix_by_width(text: &str, max_width: usize) -> String {
    let mut rev_chars: Vec<char> = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        rev_chars.push(ch);
        width += ch_width;
    }
    rev_chars.into_iter().rev().collect()
}
