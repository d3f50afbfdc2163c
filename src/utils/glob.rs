//! 셸 스타일 글로브 패턴 매칭 (fnmatch 호환)
//!
//! `*` (0개 이상 임의 문자), `?` (임의 1문자), `[abc]` / `[a-z]` (문자 집합),
//! `[!abc]` (부정 집합) 지원. 대소문자를 구분한다.

/// 필터가 없을 때의 기본 패턴
pub const MATCH_ALL: &str = "*";

/// 점(.)으로 시작하지 않는 이름만 통과시키는 패턴
pub const NO_DOT_ITEMS: &str = "[!.]*";

/// 글로브 패턴 매칭 (대소문자 구분, UTF-8 안전)
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    glob_match_chars(&pattern, &text)
}

/// 부분 문자열 필터(`/abc`)를 글로브로 변환
pub fn substring_pattern(needle: &str) -> String {
    format!("*{}*", needle)
}

fn glob_match_chars(pattern: &[char], text: &[char]) -> bool {
    match (pattern.first(), text.first()) {
        (None, None) => true,
        (None, Some(_)) => false,
        // `*`: 0문자 소비 또는 1문자 소비
        (Some(&'*'), _) => {
            glob_match_chars(&pattern[1..], text)
                || (!text.is_empty() && glob_match_chars(pattern, &text[1..]))
        }
        (Some(_), None) => false,
        (Some(&'?'), Some(_)) => glob_match_chars(&pattern[1..], &text[1..]),
        (Some(&'['), Some(&t)) => match parse_class(&pattern[1..]) {
            Some((class, consumed)) => {
                class.matches(t) && glob_match_chars(&pattern[1 + consumed..], &text[1..])
            }
            // 닫히지 않은 `[`는 문자 그대로 비교
            None => t == '[' && glob_match_chars(&pattern[1..], &text[1..]),
        },
        (Some(&p), Some(&t)) => p == t && glob_match_chars(&pattern[1..], &text[1..]),
    }
}

/// `[...]` 문자 집합
struct CharClass {
    negated: bool,
    ranges: Vec<(char, char)>,
}

impl CharClass {
    fn matches(&self, c: char) -> bool {
        let hit = self.ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi);
        hit != self.negated
    }
}

/// `[` 다음부터 집합을 파싱한다. 반환값의 두 번째 요소는 `]`까지 소비한 문자 수.
fn parse_class(rest: &[char]) -> Option<(CharClass, usize)> {
    let mut i = 0;
    let negated = matches!(rest.first(), Some('!'));
    if negated {
        i += 1;
    }

    let mut ranges = Vec::new();
    let mut first = true;
    while i < rest.len() {
        let c = rest[i];
        // 첫 문자로 온 `]`는 집합의 일부
        if c == ']' && !first {
            return Some((CharClass { negated, ranges }, i + 1));
        }
        if i + 2 < rest.len() && rest[i + 1] == '-' && rest[i + 2] != ']' {
            ranges.push((c, rest[i + 2]));
            i += 3;
        } else {
            ranges.push((c, c));
            i += 1;
        }
        first = false;
    }
    None
}
