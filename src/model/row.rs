//! A single line of editable text

/// One line of the document.
///
/// Columns are char indices, not byte offsets. The text never contains a
/// line terminator; splitting and merging rows is the document's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    text: String,
}

impl Row {
    pub fn new(text: impl Into<String>) -> Self {
        let mut text = text.into();
        text.retain(|c| c != '\n' && c != '\r');
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in chars
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Insert `ch` before the char at `index`.
    ///
    /// Returns false (and leaves the row untouched) when `index` is past the
    /// end of the row or `ch` is a line terminator.
    pub fn insert(&mut self, ch: char, index: usize) -> bool {
        if ch == '\n' || ch == '\r' {
            return false;
        }
        match self.byte_offset(index) {
            Some(offset) => {
                self.text.insert(offset, ch);
                true
            }
            None => false,
        }
    }

    /// Remove and return the char at `index`, if there is one
    pub fn delete(&mut self, index: usize) -> Option<char> {
        if index >= self.len() {
            return None;
        }
        let offset = self.byte_offset(index)?;
        Some(self.text.remove(offset))
    }

    /// Text before column `index` (the whole row if `index` is past the end)
    pub fn text_up_to(&self, index: usize) -> &str {
        let offset = self.byte_offset(index).unwrap_or(self.text.len());
        &self.text[..offset]
    }

    /// Text from column `index` on (empty if `index` is past the end)
    pub fn text_from(&self, index: usize) -> &str {
        let offset = self.byte_offset(index).unwrap_or(self.text.len());
        &self.text[offset..]
    }

    /// Replace the whole text
    pub fn update(&mut self, text: impl Into<String>) {
        *self = Row::new(text);
    }

    /// Append another row's text to the end of this one
    pub fn append(&mut self, other: &Row) {
        self.text.push_str(&other.text);
    }

    /// Slice of at most `width` chars starting at column `start`
    pub fn visible_text(&self, start: usize, width: usize) -> String {
        self.text.chars().skip(start).take(width).collect()
    }

    /// Byte offset of char column `index`; `Some(len)` for the end of the row
    fn byte_offset(&self, index: usize) -> Option<usize> {
        if index == 0 {
            return Some(0);
        }
        self.text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(self.text.len()))
            .nth(index)
    }
}

impl From<&str> for Row {
    fn from(text: &str) -> Self {
        Row::new(text)
    }
}
