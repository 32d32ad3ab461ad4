/// Conversion options shared by the tokenizer, builder, and JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Number of consecutive spaces that count as one model indentation
    /// level (default: 2). Tabs always count as one level each.
    pub spaces_per_level: usize,
    /// Indentation width of pretty-printed JSON output (default: 2 spaces)
    pub indent_width: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            spaces_per_level: 2,
            indent_width: 2,
        }
    }
}
