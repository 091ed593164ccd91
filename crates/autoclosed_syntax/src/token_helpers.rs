//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use autoclosed_core::lang::keywords::{self, KeywordId};
use autoclosed_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return the identifier text if this token can stand in identifier position.
    ///
    /// Contextual keywords (`record`, `partial`, ...) count as identifiers here.
    pub fn ident_text(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(name) => Some(name),
            TokenKind::Keyword(id) if keywords::is_contextual(*id) => Some(keywords::as_str(*id)),
            _ => None,
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }

    /// Convenience wrapper for `self.kind.ident_text()`.
    pub fn ident_text(&self) -> Option<&str> {
        self.kind.ident_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Span;

    #[test]
    fn contextual_keywords_are_identifier_like() {
        let tok = Token::new(TokenKind::Keyword(KeywordId::Record), Span::default());
        assert_eq!(tok.ident_text(), Some("record"));
        assert_eq!(tok.keyword_id(), Some(KeywordId::Record));
    }

    #[test]
    fn reserved_keywords_are_not_identifier_like() {
        let tok = Token::new(TokenKind::Keyword(KeywordId::Class), Span::default());
        assert_eq!(tok.ident_text(), None);
    }

    #[test]
    fn punctuation_helpers() {
        let tok = Token::new(TokenKind::Punctuation(PunctuationId::Lt), Span::default());
        assert!(tok.kind.is_punctuation(PunctuationId::Lt));
        assert_eq!(tok.punctuation_id(), Some(PunctuationId::Lt));
        assert!(!tok.kind.is_keyword(KeywordId::Class));
    }
}
