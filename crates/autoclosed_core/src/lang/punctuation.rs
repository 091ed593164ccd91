//! Punctuation vocabulary.
//!
//! This module defines the punctuation tokens the declaration parser inspects: delimiters, separators, and a few
//! access/arrow markers. Any other operator character lexes as a generic operator token.
//!
//! ## Notes
//! - `<` and `>` are always single-character tokens so that nested generic arguments (`List<List<int>>`) close one
//!   level at a time. Shift and comparison operators therefore appear as sequences; the parser never evaluates
//!   expressions, so this is harmless.
//!
//! ## Examples
//! ```rust
//! use autoclosed_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("::"), Some(PunctuationId::ColonColon));
//! assert_eq!(punctuation::as_str(PunctuationId::FatArrow), "=>");
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets, braces and angle brackets.
    Delimiter,
    /// Separators like `,`, `;` and `:`.
    Separator,
    /// Access/path markers like `.` and `::`.
    Access,
    /// `=` and `=>`.
    Assignment,
    /// Misc markers like `?`.
    Marker,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators
    Comma,
    Semicolon,
    Colon,

    // Access / path
    Dot,
    ColonColon,

    // Assignment / arrows
    Eq,
    FatArrow,

    // Markers
    Question,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Lt,
    Gt,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Separators
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator),
    info(PunctuationId::Colon, ":", PunctuationCategory::Separator),
    // Access / path
    info(PunctuationId::Dot, ".", PunctuationCategory::Access),
    info(PunctuationId::ColonColon, "::", PunctuationCategory::Access),
    // Assignment / arrows
    info(PunctuationId::Eq, "=", PunctuationCategory::Assignment),
    info(PunctuationId::FatArrow, "=>", PunctuationCategory::Assignment),
    // Markers
    info(PunctuationId::Question, "?", PunctuationCategory::Marker),
    // Delimiters
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter),
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter),
    info(PunctuationId::Lt, "<", PunctuationCategory::Delimiter),
    info(PunctuationId::Gt, ">", PunctuationCategory::Delimiter),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return the full metadata entry for a punctuation token.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

/// Return the matching closer for an opening delimiter.
///
/// ## Examples
/// ```rust
/// use autoclosed_core::lang::punctuation::{self, PunctuationId};
///
/// assert_eq!(punctuation::closer(PunctuationId::LBrace), Some(PunctuationId::RBrace));
/// assert_eq!(punctuation::closer(PunctuationId::Comma), None);
/// ```
pub fn closer(open: PunctuationId) -> Option<PunctuationId> {
    match open {
        PunctuationId::LParen => Some(PunctuationId::RParen),
        PunctuationId::LBracket => Some(PunctuationId::RBracket),
        PunctuationId::LBrace => Some(PunctuationId::RBrace),
        PunctuationId::Lt => Some(PunctuationId::Gt),
        _ => None,
    }
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo { id, canonical, category }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_punctuation_round_trips_through_its_spelling() {
        for p in PUNCTUATION {
            assert_eq!(from_str(p.canonical), Some(p.id));
        }
    }

    #[test]
    fn every_delimiter_opener_has_a_registered_closer() {
        for p in PUNCTUATION.iter().filter(|p| p.category == PunctuationCategory::Delimiter) {
            if let Some(close) = closer(p.id) {
                assert_eq!(category(close), PunctuationCategory::Delimiter);
            }
        }
    }
}
