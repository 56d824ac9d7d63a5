//! Tokens: the leaves of the token generator tree
//!
//! A [`Token`] is a classified byte run plus the number of space characters
//! that preceded it. Source positions are deliberately not kept: once a file
//! is being rewritten, offsets stop meaning anything, but the spacing in
//! front of each untouched token is what lets the writer reproduce the
//! original layout exactly.

use crate::token_type::TokenType;
use std::ops::Deref;

/// A single classified byte run
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenType,
    bytes: Box<[u8]>,
    spaces_before: usize,
}

impl Token {
    /// Create a token from its type, payload and leading space count
    pub fn new(kind: TokenType, bytes: impl AsRef<[u8]>, spaces_before: usize) -> Self {
        Self {
            kind,
            bytes: bytes.as_ref().into(),
            spaces_before,
        }
    }

    /// Token classification, as produced by the lexer
    pub fn kind(&self) -> TokenType {
        self.kind
    }

    /// Raw payload bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of ASCII spaces written before the payload
    pub fn spaces_before(&self) -> usize {
        self.spaces_before
    }

    /// Copy of this token with a different leading space count
    pub fn with_spaces_before(&self, spaces_before: usize) -> Self {
        Self {
            kind: self.kind,
            bytes: self.bytes.clone(),
            spaces_before,
        }
    }

    /// Payload length plus leading spaces
    pub fn serialized_len(&self) -> usize {
        self.spaces_before + self.bytes.len()
    }
}

/// A flat run of tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Tokens(Vec<Token>);

impl Tokens {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, token: Token) {
        self.0.push(token);
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.0
    }
}

impl Deref for Tokens {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.0
    }
}

impl From<Vec<Token>> for Tokens {
    fn from(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Token> for Tokens {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Tokens {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
