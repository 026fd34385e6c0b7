/// Maps byte offsets in schema source to line/column positions
///
/// Columns count characters, not bytes, so names after non-ASCII text on the
/// same line still report the column an editor shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex<'a> {
    text: &'a str,
    /// Byte offset of the start of each line
    line_starts: Vec<usize>,
}

impl Default for LineIndex<'_> {
    fn default() -> Self {
        Self {
            text: "",
            line_starts: vec![0],
        }
    }
}

impl<'a> LineIndex<'a> {
    /// Create a new line index from source text
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];

        for (i, c) in text.char_indices() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }

        Self { text, line_starts }
    }

    /// Convert a byte offset to a line/column position (0-based)
    #[must_use]
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i.saturating_sub(1));

        let start = self.line_starts[line];
        let col = self
            .text
            .get(start..offset)
            .map_or(offset - start, |prefix| prefix.chars().count());
        (line, col)
    }

    /// Get the number of lines
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
