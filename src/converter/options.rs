// Settings for the generated mCRL2 text

/// Indentation used when none is configured
pub const DEFAULT_INDENT: &str = "    ";

/// Formatting options for [`convert_module_with`](super::convert_module_with)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Prefix repeated once per nesting level at the start of each line
    pub indent: String,
}

impl ConvertOptions {
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Indent with `width` spaces per level
    pub fn with_indent_width(self, width: usize) -> Self {
        self.with_indent(" ".repeat(width))
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}
