use unicode_width::UnicodeWidthStr;

/// 한 줄 명령 입력 버퍼
///
/// `cursor`는 바이트 오프셋이며 항상 문자 경계에 있다.
#[derive(Debug, Default, Clone)]
pub struct CommandLine {
    value: String,
    cursor: usize,
}

impl CommandLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 커서 앞 문자열의 표시 너비
    pub fn cursor_column(&self) -> usize {
        self.value[..self.cursor].width()
    }

    /// 내용을 교체하고 커서를 끝으로
    pub fn fill(&mut self, text: &str) {
        self.value = text.to_string();
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// 내용을 꺼내고 버퍼를 비움
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let prev = self.prev_char_start(self.cursor);
        self.value.remove(prev);
        self.cursor = prev;
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.prev_char_start(self.cursor);
    }

    pub fn right(&mut self) {
        if self.cursor >= self.value.len() {
            return;
        }

        self.cursor = self.value[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.value.len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    /// 커서 앞 단어 삭제 (Ctrl+W)
    pub fn delete_prev_word(&mut self) {
        let original = self.cursor;
        let mut pos = original;

        // 커서 왼쪽의 구분자를 먼저 건너뜀
        while pos > 0 {
            let prev = self.prev_char_start(pos);
            if !self.is_delimiter_at(prev, pos) {
                break;
            }
            pos = prev;
        }

        while pos > 0 {
            let prev = self.prev_char_start(pos);
            if self.is_delimiter_at(prev, pos) {
                break;
            }
            pos = prev;
        }

        self.value.replace_range(pos..original, "");
        self.cursor = pos;
    }

    fn prev_char_start(&self, pos: usize) -> usize {
        self.value[..pos]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn is_delimiter_at(&self, start: usize, end: usize) -> bool {
        self.value[start..end]
            .chars()
            .next()
            .is_some_and(|ch| ch.is_whitespace() || matches!(ch, '/' | '\'' | '"' | ';' | '|'))
    }
}
