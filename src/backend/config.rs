//! Render options for generated units.
//!
//! Defaults reproduce the canonical unit byte for byte: LF line endings and four-space indentation.

use std::fmt;
use std::str::FromStr;

/// Options controlling the layout of a generated unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Line terminator
    pub newline: Newline,
}

/// Line terminator style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Newline {
    #[default]
    Lf,
    CrLf,
}

impl Newline {
    pub fn as_str(self) -> &'static str {
        match self {
            Newline::Lf => "\n",
            Newline::CrLf => "\r\n",
        }
    }
}

impl fmt::Display for Newline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Newline::Lf => "lf",
            Newline::CrLf => "crlf",
        })
    }
}

impl FromStr for Newline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lf" => Ok(Newline::Lf),
            "crlf" => Ok(Newline::CrLf),
            other => Err(format!("unknown newline style `{other}` (expected `lf` or `crlf`)")),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            newline: Newline::Lf,
        }
    }
}

impl RenderOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the line terminator
    pub fn with_newline(mut self, newline: Newline) -> Self {
        self.newline = newline;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_canonical_layout() {
        let options = RenderOptions::default();
        assert_eq!(options.indent_width, 4);
        assert_eq!(options.newline, Newline::Lf);
        assert_eq!(options, RenderOptions::new());
    }

    #[test]
    fn test_builders_change_only_their_field() {
        let options = RenderOptions::new().with_indent_width(2);
        assert_eq!(options.indent_width, 2);
        assert_eq!(options.newline, Newline::Lf);

        let options = RenderOptions::new().with_newline(Newline::CrLf);
        assert_eq!(options.indent_width, 4);
        assert_eq!(options.newline.as_str(), "\r\n");
    }

    #[test]
    fn test_newline_parses_case_insensitively() {
        assert_eq!("LF".parse::<Newline>(), Ok(Newline::Lf));
        assert_eq!("crlf".parse::<Newline>(), Ok(Newline::CrLf));
        assert!("cr".parse::<Newline>().is_err());
    }

    #[test]
    fn test_newline_display_round_trips() {
        for nl in [Newline::Lf, Newline::CrLf] {
            assert_eq!(nl.to_string().parse::<Newline>(), Ok(nl));
        }
    }
}
