//! Output writer with indentation tracking
//!
//! Indentation is only written in front of content, so blank lines stay empty.

use super::config::RenderOptions;

/// Writer that tracks indentation and builds a generated unit
pub struct CodeWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Layout options
    options: RenderOptions,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl CodeWriter {
    /// Create a new writer with the given options
    pub fn new(options: RenderOptions) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            options,
            at_line_start: true,
        }
    }

    /// Get the written output
    pub fn finish(self) -> String {
        self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    fn write_indent(&mut self) {
        if self.at_line_start {
            let width = self.indent_level * self.options.indent_width;
            self.output.extend(std::iter::repeat_n(' ', width));
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    /// Write a string and a line terminator
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a line terminator
    pub fn newline(&mut self) {
        self.output.push_str(self.options.newline.as_str());
        self.at_line_start = true;
    }
}
