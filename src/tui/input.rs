/// Byte-offset cursor into a text buffer, used for the draft field, the
/// search field, and the edit modal. The buffers themselves live in the
/// store; this only tracks where the insertion point is, staying on UTF-8
/// character boundaries.
#[derive(Debug, Default)]
pub struct TextCursor {
    pub pos: usize,
}

impl TextCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at_end(buffer: &str) -> Self {
        Self { pos: buffer.len() }
    }

    pub fn insert_char(&mut self, buffer: &mut String, c: char) {
        buffer.insert(self.pos, c);
        self.pos += c.len_utf8();
    }

    pub fn backspace(&mut self, buffer: &mut String) {
        if let Some(c) = buffer[..self.pos].chars().next_back() {
            self.pos -= c.len_utf8();
            buffer.remove(self.pos);
        }
    }

    pub fn delete(&mut self, buffer: &mut String) {
        if self.pos < buffer.len() {
            buffer.remove(self.pos);
        }
    }

    pub fn move_left(&mut self, buffer: &str) {
        if let Some(c) = buffer[..self.pos].chars().next_back() {
            self.pos -= c.len_utf8();
        }
    }

    pub fn move_right(&mut self, buffer: &str) {
        if let Some(c) = buffer[self.pos..].chars().next() {
            self.pos += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.pos = 0;
    }

    pub fn move_end(&mut self, buffer: &str) {
        self.pos = buffer.len();
    }

    /// Clamps the cursor after the buffer changed out from under it
    /// (e.g. the store cleared the draft).
    pub fn clamp(&mut self, buffer: &str) {
        if self.pos > buffer.len() {
            self.pos = buffer.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_char_at_end() {
        let mut buffer = "Hello".to_string();
        let mut cursor = TextCursor::at_end(&buffer);

        cursor.insert_char(&mut buffer, '!');

        assert_eq!(buffer, "Hello!");
        assert_eq!(cursor.pos, 6);
    }

    #[test]
    fn test_insert_char_in_middle() {
        let mut buffer = "Hllo".to_string();
        let mut cursor = TextCursor { pos: 1 };

        cursor.insert_char(&mut buffer, 'e');

        assert_eq!(buffer, "Hello");
        assert_eq!(cursor.pos, 2);
    }

    #[test]
    fn test_backspace() {
        let mut buffer = "Hello".to_string();
        let mut cursor = TextCursor::at_end(&buffer);

        cursor.backspace(&mut buffer);

        assert_eq!(buffer, "Hell");
        assert_eq!(cursor.pos, 4);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut buffer = "Hello".to_string();
        let mut cursor = TextCursor::new();

        cursor.backspace(&mut buffer);

        assert_eq!(buffer, "Hello");
        assert_eq!(cursor.pos, 0);
    }

    #[test]
    fn test_delete() {
        let mut buffer = "Hello".to_string();
        let mut cursor = TextCursor::new();

        cursor.delete(&mut buffer);

        assert_eq!(buffer, "ello");
        assert_eq!(cursor.pos, 0);
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut buffer = "Hi".to_string();
        let mut cursor = TextCursor::at_end(&buffer);

        cursor.delete(&mut buffer);

        assert_eq!(buffer, "Hi");
    }

    #[test]
    fn test_cursor_movement() {
        let buffer = "Hello".to_string();
        let mut cursor = TextCursor::at_end(&buffer);

        cursor.move_left(&buffer);
        assert_eq!(cursor.pos, 4);

        cursor.move_right(&buffer);
        assert_eq!(cursor.pos, 5);

        cursor.move_right(&buffer);
        assert_eq!(cursor.pos, 5);

        cursor.move_home();
        assert_eq!(cursor.pos, 0);

        cursor.move_left(&buffer);
        assert_eq!(cursor.pos, 0);

        cursor.move_end(&buffer);
        assert_eq!(cursor.pos, 5);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut buffer = "héllo".to_string();
        let mut cursor = TextCursor { pos: 3 }; // after the two-byte é

        cursor.backspace(&mut buffer);
        assert_eq!(buffer, "hllo");
        assert_eq!(cursor.pos, 1);

        cursor.insert_char(&mut buffer, 'ü');
        assert_eq!(buffer, "hüllo");
        assert_eq!(cursor.pos, 3);

        cursor.move_left(&buffer);
        assert_eq!(cursor.pos, 1);
    }

    #[test]
    fn test_clamp_after_external_clear() {
        let mut buffer = "something".to_string();
        let mut cursor = TextCursor::at_end(&buffer);

        buffer.clear();
        cursor.clamp(&buffer);

        assert_eq!(cursor.pos, 0);
    }
}
