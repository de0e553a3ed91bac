use unicode_segmentation::UnicodeSegmentation;

/// Single-line text buffer for the new-task field.
///
/// The cursor is a grapheme index so combining marks and emoji sequences
/// are edited as one unit.
#[derive(Debug, Default, Clone)]
pub(super) struct InputLine {
    text: String,
    cursor: usize,
}

impl InputLine {
    pub(super) fn as_str(&self) -> &str {
        &self.text
    }

    pub(super) fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Cursor position in graphemes from the start of the line.
    #[cfg(test)]
    pub(super) const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text left of the cursor.
    pub(super) fn before_cursor(&self) -> &str {
        &self.text[..self.byte_offset(self.cursor)]
    }

    fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    /// Byte offset of the grapheme at `index`, or the end of the text.
    fn byte_offset(&self, index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }

    pub(super) fn insert(&mut self, ch: char) {
        let before = self.grapheme_count();
        let offset = self.byte_offset(self.cursor);
        self.text.insert(offset, ch);
        // A combining mark merges into the previous grapheme instead of adding one.
        if self.grapheme_count() > before {
            self.cursor += 1;
        }
    }

    pub(super) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    pub(super) fn delete(&mut self) {
        if self.cursor >= self.grapheme_count() {
            return;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    pub(super) const fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(super) fn move_right(&mut self) {
        if self.cursor < self.grapheme_count() {
            self.cursor += 1;
        }
    }

    pub(super) const fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(super) fn move_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    pub(super) fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}
