//! Single-line editable text with a character cursor.
//!
//! Backs the name field, the composer and the attachment path prompt.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInputState {
    text: String,
    /// Cursor position as a character index.
    cursor: usize,
}

impl TextInputState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Terminal columns occupied by the text left of the cursor.
    pub fn cursor_columns(&self) -> usize {
        let byte_idx = self.byte_index(self.cursor);
        self.text[..byte_idx].width()
    }

    pub fn insert_char(&mut self, ch: char) {
        let byte_idx = self.byte_index(self.cursor);
        self.text.insert(byte_idx, ch);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.remove_at_cursor();
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            self.remove_at_cursor();
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Returns the current text and leaves the field empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    fn remove_at_cursor(&mut self) {
        let start = self.byte_index(self.cursor);
        let end = self.byte_index(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(idx, _)| idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextInputState {
        let mut state = TextInputState::default();
        for ch in text.chars() {
            state.insert_char(ch);
        }
        state
    }

    #[test]
    fn insert_appends_and_advances_cursor() {
        let state = typed("Hi");

        assert_eq!(state.text(), "Hi");
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn insert_in_middle_keeps_order() {
        let mut state = typed("Ho");
        state.move_left();
        state.insert_char('i');

        assert_eq!(state.text(), "Hio");
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut state = typed("H");
        state.move_home();
        state.backspace();

        assert_eq!(state.text(), "H");
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn delete_removes_char_under_cursor() {
        let mut state = typed("abc");
        state.move_home();
        state.move_right();
        state.delete();

        assert_eq!(state.text(), "ac");
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut state = typed("ab");
        state.move_right();
        assert_eq!(state.cursor, 2);

        state.move_home();
        state.move_left();
        assert_eq!(state.cursor, 0);

        state.move_end();
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn multibyte_text_edits_by_character() {
        let mut state = typed("Привет");
        state.backspace();
        assert_eq!(state.text(), "Приве");

        state.move_home();
        state.delete();
        assert_eq!(state.text(), "риве");
    }

    #[test]
    fn cursor_columns_account_for_wide_characters() {
        let state = typed("日本");

        assert_eq!(state.cursor, 2);
        assert_eq!(state.cursor_columns(), 4);
    }

    #[test]
    fn take_returns_text_and_resets() {
        let mut state = typed("  hello ");

        assert_eq!(state.trimmed(), "hello");
        assert_eq!(state.take(), "  hello ");
        assert!(state.is_empty());
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn long_pasted_text_is_kept_whole() {
        let long = "x".repeat(5000);

        let state = typed(&format!("{long}y"));

        assert_eq!(state.text().chars().count(), 5001);
        assert!(state.text().ends_with('y'));
        assert_eq!(state.cursor, 5001);
    }
}
