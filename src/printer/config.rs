//! Printer configuration

/// Printer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Whether rendered nodes are cached and replayed
    pub memoize: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            memoize: true,
        }
    }
}

impl PrinterConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Enable or disable memoization
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }
}
