//! Token storage with a parallel tag array.

use std::ops::Index;

use super::{Token, TokenKind, TokenTag};
use crate::{Position, Span};

/// Ordered tokens ending in [`TokenKind::Eof`].
///
/// `tags[i]` is `tokens[i].kind.discriminant_index()`, kept alongside so the
/// cursor can compare kinds with a single byte load.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
    tags: Vec<u8>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList {
            tokens: Vec::new(),
            tags: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
            tags: Vec::with_capacity(capacity),
        }
    }

    /// Build from tokens, appending `Eof` if the last one is not already `Eof`.
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        let mut list = TokenList::with_capacity(tokens.len() + 1);
        for token in tokens {
            list.push(token);
        }
        if list.tags.last() != Some(&(TokenTag::Eof as u8)) {
            let end = list.tokens.last().map_or(0, |t| t.span.end);
            list.push(Token::new(TokenKind::Eof, Span::point(end), Position::START));
        }
        list
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tags.push(token.kind.discriminant_index());
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn tags(&self) -> &[u8] {
        &self.tags
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Kinds in order, `Eof` included.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
