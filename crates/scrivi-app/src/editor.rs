//! Draft text buffer with a cursor
//!
//! The cursor is a byte offset that always sits on a UTF-8 character
//! boundary. Lines are logical lines split on `'\n'`; soft wrapping is the
//! renderer's concern.

/// The user's draft and where they are typing in it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftEditor {
    text: String,
    cursor: usize,
    /// Column to aim for on vertical moves, kept across consecutive up/down
    preferred_column: Option<usize>,
}

impl DraftEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor holding `text`, cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self {
            text,
            cursor,
            preferred_column: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset of the cursor
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Text before and after the cursor
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(self.cursor)
    }

    /// Zero-based (line, column) of the cursor; column counts characters
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let column = before[self.line_start(self.cursor)..].chars().count();
        (line, column)
    }

    // ─────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.preferred_column = None;
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the character before the cursor. Returns false at the start.
    pub fn backspace(&mut self) -> bool {
        self.preferred_column = None;
        match self.text[..self.cursor].chars().next_back() {
            Some(prev) => {
                self.cursor -= prev.len_utf8();
                self.text.remove(self.cursor);
                true
            }
            None => false,
        }
    }

    /// Delete the character under the cursor. Returns false at the end.
    pub fn delete(&mut self) -> bool {
        self.preferred_column = None;
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.preferred_column = None;
    }

    // ─────────────────────────────────────────────────────────
    // Cursor movement
    // ─────────────────────────────────────────────────────────

    pub fn move_left(&mut self) {
        self.preferred_column = None;
        if let Some(prev) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        self.preferred_column = None;
        if let Some(next) = self.text[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_line_start(&mut self) {
        self.preferred_column = None;
        self.cursor = self.line_start(self.cursor);
    }

    pub fn move_line_end(&mut self) {
        self.preferred_column = None;
        self.cursor = self.line_end(self.cursor);
    }

    /// Move to the previous line, keeping the column where possible.
    /// On the first line the cursor goes to the start of the text.
    pub fn move_up(&mut self) {
        let column = self.target_column();
        let start = self.line_start(self.cursor);
        if start == 0 {
            self.cursor = 0;
        } else {
            let prev_end = start - 1;
            let prev_start = self.line_start(prev_end);
            self.cursor = self.offset_at_column(prev_start, prev_end, column);
        }
        self.preferred_column = Some(column);
    }

    /// Move to the next line, keeping the column where possible.
    /// On the last line the cursor goes to the end of the text.
    pub fn move_down(&mut self) {
        let column = self.target_column();
        let end = self.line_end(self.cursor);
        if end == self.text.len() {
            self.cursor = end;
        } else {
            let next_start = end + 1;
            let next_end = self.line_end(next_start);
            self.cursor = self.offset_at_column(next_start, next_end, column);
        }
        self.preferred_column = Some(column);
    }

    fn target_column(&self) -> usize {
        self.preferred_column
            .unwrap_or_else(|| self.cursor_position().1)
    }

    fn line_start(&self, pos: usize) -> usize {
        self.text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    fn line_end(&self, pos: usize) -> usize {
        self.text[pos..]
            .find('\n')
            .map(|i| pos + i)
            .unwrap_or(self.text.len())
    }

    fn offset_at_column(&self, start: usize, end: usize, column: usize) -> usize {
        self.text[start..end]
            .char_indices()
            .nth(column)
            .map(|(i, _)| start + i)
            .unwrap_or(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(editor: &mut DraftEditor, s: &str) {
        for c in s.chars() {
            if c == '\n' {
                editor.insert_newline();
            } else {
                editor.insert_char(c);
            }
        }
    }

    #[test]
    fn test_new_editor_is_empty() {
        let editor = DraftEditor::new();
        assert!(editor.is_empty());
        assert_eq!(editor.cursor(), 0);
        assert_eq!(editor.cursor_position(), (0, 0));
        assert_eq!(editor.line_count(), 1);
    }

    #[test]
    fn test_typing_appends() {
        let mut editor = DraftEditor::new();
        type_str(&mut editor, "Hello world");
        assert_eq!(editor.text(), "Hello world");
        assert_eq!(editor.cursor_position(), (0, 11));
        assert_eq!(editor.word_count(), 2);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut editor = DraftEditor::with_text("Helo");
        editor.move_left();
        editor.insert_char('l');
        assert_eq!(editor.text(), "Hello");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut editor = DraftEditor::with_text("abc");
        assert!(editor.backspace());
        assert_eq!(editor.text(), "ab");

        editor.move_line_start();
        assert!(!editor.backspace());
        assert!(editor.delete());
        assert_eq!(editor.text(), "b");

        editor.move_line_end();
        assert!(!editor.delete());
    }

    #[test]
    fn test_multibyte_characters() {
        let mut editor = DraftEditor::new();
        type_str(&mut editor, "café ☕");
        assert_eq!(editor.char_count(), 6);
        assert_eq!(editor.cursor_position(), (0, 6));

        editor.move_left();
        editor.move_left();
        editor.move_left();
        assert_eq!(editor.cursor_position(), (0, 3));
        assert!(editor.backspace());
        assert_eq!(editor.text(), "caf ☕");

        editor.move_right();
        editor.move_right();
        editor.move_right();
        assert_eq!(editor.cursor(), editor.text().len());
    }

    #[test]
    fn test_newlines_and_position() {
        let mut editor = DraftEditor::new();
        type_str(&mut editor, "first\nsecond line\nx");
        assert_eq!(editor.line_count(), 3);
        assert_eq!(editor.cursor_position(), (2, 1));
    }

    #[test]
    fn test_vertical_moves_keep_column() {
        let mut editor = DraftEditor::with_text("a long first line\nab\nanother long line");
        // End of last line, column 17
        editor.move_up();
        assert_eq!(editor.cursor_position(), (1, 2)); // clamped to "ab"
        editor.move_up();
        assert_eq!(editor.cursor_position(), (0, 17)); // preferred column restored
        editor.move_down();
        editor.move_down();
        assert_eq!(editor.cursor_position(), (2, 17));
    }

    #[test]
    fn test_up_on_first_line_goes_to_start() {
        let mut editor = DraftEditor::with_text("only line");
        editor.move_up();
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_down_on_last_line_goes_to_end() {
        let mut editor = DraftEditor::with_text("one\ntwo");
        editor.move_line_start();
        editor.move_down();
        assert_eq!(editor.cursor(), editor.text().len());
    }

    #[test]
    fn test_horizontal_move_resets_preferred_column() {
        let mut editor = DraftEditor::with_text("abcdef\nab\nabcdef");
        editor.move_up(); // (1, 2)
        editor.move_left(); // (1, 1)
        editor.move_up();
        assert_eq!(editor.cursor_position(), (0, 1));
    }

    #[test]
    fn test_split_at_cursor() {
        let mut editor = DraftEditor::with_text("Hello");
        editor.move_left();
        editor.move_left();
        assert_eq!(editor.split_at_cursor(), ("Hel", "lo"));
    }

    #[test]
    fn test_clear() {
        let mut editor = DraftEditor::with_text("draft\ntext");
        editor.clear();
        assert!(editor.is_empty());
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_word_count_ignores_extra_whitespace() {
        let editor = DraftEditor::with_text("  one\n\ntwo   three  ");
        assert_eq!(editor.word_count(), 3);
    }
}
