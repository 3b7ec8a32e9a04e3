use unicode_segmentation::UnicodeSegmentation;

/// Single-line editable text with a byte-offset cursor that always sits on a grapheme
/// cluster boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub text: String,
    pub cursor: usize,
}

/// Characters that end a word for word-wise deletion. `/` counts so that deleting a
/// word in a path removes one segment at a time.
fn is_word_break(grapheme: &str) -> bool {
    grapheme == "/" || grapheme.chars().all(char::is_whitespace)
}

impl TextInput {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Replace the whole text, leaving the cursor at the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    fn boundaries(&self) -> Vec<usize> {
        let mut boundaries: Vec<usize> =
            self.text.grapheme_indices(true).map(|(i, _)| i).collect();
        boundaries.push(self.text.len());
        boundaries
    }

    /// Snap the cursor onto a boundary and return that boundary's index.
    fn clamp_cursor(&mut self, boundaries: &[usize]) -> usize {
        let cursor = self.cursor.min(self.text.len());
        let idx = match boundaries.binary_search(&cursor) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        };
        self.cursor = boundaries.get(idx).copied().unwrap_or(0);
        idx
    }

    pub fn insert(&mut self, c: char) {
        let boundaries = self.boundaries();
        self.clamp_cursor(&boundaries);
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Remove the grapheme cluster before the cursor. Returns whether anything changed.
    pub fn backspace(&mut self) -> bool {
        let boundaries = self.boundaries();
        let idx = self.clamp_cursor(&boundaries);
        if idx == 0 {
            return false;
        }
        let prev = boundaries[idx - 1];
        self.text.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    /// Delete backwards over any trailing separators, then over the word before them.
    pub fn delete_word(&mut self) {
        let boundaries = self.boundaries();
        self.clamp_cursor(&boundaries);
        if self.cursor == 0 {
            return;
        }

        let graphemes: Vec<(usize, &str)> = self.text[..self.cursor]
            .grapheme_indices(true)
            .collect();
        let mut idx = graphemes.len();
        while idx > 0 && is_word_break(graphemes[idx - 1].1) {
            idx -= 1;
        }
        while idx > 0 && !is_word_break(graphemes[idx - 1].1) {
            idx -= 1;
        }
        let start = graphemes.get(idx).map_or(self.cursor, |(offset, _)| *offset);

        self.text.drain(start..self.cursor);
        self.cursor = start;
    }

    pub fn cursor_left(&mut self) {
        let boundaries = self.boundaries();
        let idx = self.clamp_cursor(&boundaries);
        if idx > 0 {
            self.cursor = boundaries[idx - 1];
        }
    }

    pub fn cursor_right(&mut self) {
        let boundaries = self.boundaries();
        let idx = self.clamp_cursor(&boundaries);
        if idx + 1 < boundaries.len() {
            self.cursor = boundaries[idx + 1];
        }
    }

    pub fn cursor_start(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.text.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at_cursor() {
        let mut input = TextInput::new("/rep");
        input.cursor_start();
        input.insert('~');
        assert_eq!(input.as_str(), "~/rep");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_backspace_removes_whole_grapheme() {
        let mut input = TextInput::new("cafe\u{0301}");
        assert!(input.backspace());
        assert_eq!(input.as_str(), "caf");

        let mut input = TextInput::new("A👩‍💻");
        assert!(input.backspace());
        assert_eq!(input.as_str(), "A");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::new("x");
        input.cursor_start();
        assert!(!input.backspace());
        assert_eq!(input.as_str(), "x");
    }

    #[test]
    fn test_cursor_moves_by_grapheme() {
        let mut input = TextInput::new("e\u{0301}x");
        input.cursor_left();
        assert_eq!(input.cursor, "e\u{0301}".len());
        input.cursor_left();
        assert_eq!(input.cursor, 0);
        input.cursor_left();
        assert_eq!(input.cursor, 0);
        input.cursor_right();
        assert_eq!(input.cursor, "e\u{0301}".len());
        input.cursor_end();
        input.cursor_right();
        assert_eq!(input.cursor, input.text.len());
    }

    #[test]
    fn test_delete_word_removes_one_path_segment() {
        let mut input = TextInput::new("/home/dev/projects/");
        input.delete_word();
        assert_eq!(input.as_str(), "/home/dev/");
        input.delete_word();
        assert_eq!(input.as_str(), "/home/");
    }

    #[test]
    fn test_delete_word_with_spaces() {
        let mut input = TextInput::new("git clone   ");
        input.delete_word();
        assert_eq!(input.as_str(), "git ");
    }

    #[test]
    fn test_delete_word_mid_text() {
        let mut input = TextInput::new("/a/bc/d");
        input.cursor = "/a/bc".len();
        input.delete_word();
        assert_eq!(input.as_str(), "/a//d");
        assert_eq!(input.cursor, "/a/".len());
    }

    #[test]
    fn test_stale_cursor_is_clamped() {
        let mut input = TextInput::new("ab");
        input.cursor = 99;
        input.insert('c');
        assert_eq!(input.as_str(), "abc");
    }

    #[test]
    fn test_set_and_blank() {
        let mut input = TextInput::default();
        assert!(input.is_blank());
        input.set("  ");
        assert!(input.is_blank());
        input.set("/tmp");
        assert!(!input.is_blank());
        assert_eq!(input.cursor, 4);
    }
}
