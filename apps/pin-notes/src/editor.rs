//! Multi-line text buffer for the active note.

/// Editable lines plus a cursor. Columns are counted in characters.
#[derive(Debug, Clone)]
pub struct Editor {
    lines: Vec<String>,
    cursor: (usize, usize), // (line, col)
    scroll: (usize, usize), // (top line, left col)
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: (0, 0),
            scroll: (0, 0),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Replace the buffer and move the cursor to the start.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        self.cursor = (0, 0);
        self.scroll = (0, 0);
    }

    pub fn scroll(&self) -> (usize, usize) {
        self.scroll
    }

    /// Move the viewport just enough to keep the cursor inside a
    /// `height` x `width` area. Returns the new (top line, left col).
    pub fn scroll_into_view(&mut self, height: usize, width: usize) -> (usize, usize) {
        let (row, col) = self.cursor;
        let (top, left) = &mut self.scroll;

        if height > 0 {
            if row < *top {
                *top = row;
            } else if row >= *top + height {
                *top = row + 1 - height;
            }
        }
        // Keep one spare column for the cursor block at end of line.
        if width > 0 {
            if col < *left {
                *left = col;
            } else if col >= *left + width {
                *left = col + 1 - width;
            }
        }
        self.scroll
    }

    pub fn insert_char(&mut self, c: char) {
        let (row, col) = self.cursor;
        let line = &mut self.lines[row];
        let at = byte_offset(line, col);
        line.insert(at, c);
        self.cursor.1 += 1;
    }

    pub fn insert_newline(&mut self) {
        let (row, col) = self.cursor;
        let line = &mut self.lines[row];
        let at = byte_offset(line, col);
        let rest = line.split_off(at);
        self.lines.insert(row + 1, rest);
        self.cursor = (row + 1, 0);
    }

    pub fn backspace(&mut self) {
        let (row, col) = self.cursor;
        if col > 0 {
            let line = &mut self.lines[row];
            let at = byte_offset(line, col - 1);
            line.remove(at);
            self.cursor.1 -= 1;
        } else if row > 0 {
            let current = self.lines.remove(row);
            let prev = &mut self.lines[row - 1];
            self.cursor = (row - 1, prev.chars().count());
            prev.push_str(&current);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor.1 > 0 {
            self.cursor.1 -= 1;
        } else if self.cursor.0 > 0 {
            self.cursor.0 -= 1;
            self.cursor.1 = self.line_len(self.cursor.0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor.1 < self.line_len(self.cursor.0) {
            self.cursor.1 += 1;
        } else if self.cursor.0 + 1 < self.lines.len() {
            self.cursor = (self.cursor.0 + 1, 0);
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor.0 > 0 {
            self.cursor.0 -= 1;
            self.clamp_col();
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor.0 + 1 < self.lines.len() {
            self.cursor.0 += 1;
            self.clamp_col();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor.1 = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor.1 = self.line_len(self.cursor.0);
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, |l| l.chars().count())
    }

    fn clamp_col(&mut self) {
        let len = self.line_len(self.cursor.0);
        if self.cursor.1 > len {
            self.cursor.1 = len;
        }
    }
}

fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> Editor {
        let mut editor = Editor::new();
        for c in s.chars() {
            if c == '\n' {
                editor.insert_newline();
            } else {
                editor.insert_char(c);
            }
        }
        editor
    }

    #[test]
    fn test_new_is_empty() {
        let editor = Editor::new();
        assert!(editor.is_empty());
        assert_eq!(editor.text(), "");
        assert_eq!(editor.cursor(), (0, 0));
    }

    #[test]
    fn test_typing_and_newlines() {
        let editor = typed("Hello\nworld");
        assert_eq!(editor.text(), "Hello\nworld");
        assert_eq!(editor.cursor(), (1, 5));
    }

    #[test]
    fn test_multibyte_insert_and_backspace() {
        let mut editor = typed("héllo");
        editor.move_left();
        editor.move_left();
        editor.move_left();
        editor.backspace();
        assert_eq!(editor.text(), "hllo");
        editor.insert_char('é');
        editor.insert_char('✓');
        assert_eq!(editor.text(), "hé✓llo");
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut editor = typed("ab\ncd");
        editor.move_home();
        editor.backspace();
        assert_eq!(editor.text(), "abcd");
        assert_eq!(editor.cursor(), (0, 2));
    }

    #[test]
    fn test_newline_splits_line() {
        let mut editor = typed("abcd");
        editor.move_left();
        editor.move_left();
        editor.insert_newline();
        assert_eq!(editor.lines(), &["ab".to_string(), "cd".to_string()]);
        assert_eq!(editor.cursor(), (1, 0));
    }

    #[test]
    fn test_vertical_movement_clamps_column() {
        let mut editor = typed("a long line\nab");
        editor.move_up();
        editor.move_end();
        editor.move_down();
        assert_eq!(editor.cursor(), (1, 2));
    }

    #[test]
    fn test_scroll_follows_cursor_down_and_up() {
        let mut editor = Editor::new();
        for i in 0..20 {
            if i > 0 {
                editor.insert_newline();
            }
            editor.insert_char('x');
        }
        assert_eq!(editor.scroll_into_view(5, 40), (15, 0));

        for _ in 0..19 {
            editor.move_up();
        }
        assert_eq!(editor.scroll_into_view(5, 40), (0, 0));

        // Moving within the viewport leaves it alone.
        editor.move_down();
        editor.move_down();
        assert_eq!(editor.scroll_into_view(5, 40), (0, 0));
    }

    #[test]
    fn test_scroll_follows_cursor_horizontally() {
        let mut editor = typed(&"a".repeat(30));
        assert_eq!(editor.scroll_into_view(5, 10), (0, 21));
        editor.move_home();
        assert_eq!(editor.scroll_into_view(5, 10), (0, 0));
    }

    #[test]
    fn test_set_text_resets_cursor() {
        let mut editor = typed("old");
        editor.set_text("one\ntwo\n");
        assert_eq!(editor.lines().len(), 3);
        assert_eq!(editor.cursor(), (0, 0));
        assert_eq!(editor.scroll(), (0, 0));
        assert_eq!(editor.text(), "one\ntwo\n");
        editor.set_text("");
        assert!(editor.is_empty());
    }
}
