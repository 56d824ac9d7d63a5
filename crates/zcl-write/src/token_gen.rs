//! Token generator tree
//!
//! The writer AST does not store a flat token list. Each syntactic part owns
//! a small tree of token generators, and the document's token stream is the
//! depth-first flattening of that tree. Replacing one child subtree (for
//! example the tokens of an attribute's value) therefore leaves every other
//! token of the document untouched, with its original spacing.
//!
//! ## Composition
//!
//! For a [`TokenSeq`] with children `c1..cn`:
//!
//! ```text
//! flatten(seq) == flatten(c1) ++ flatten(c2) ++ ... ++ flatten(cn)
//! ```
//!
//! at any depth and for any mix of leaves and sequences.
//!
//! ## Example
//!
//! ```rust
//! use zcl_write::{EachToken, Token, TokenGen, TokenSeq, TokenType};
//!
//! let mut attr = TokenSeq::new();
//! attr.push(Token::new(TokenType::Ident, "name", 0));
//! attr.push(Token::new(TokenType::Equal, "=", 1));
//! attr.push(Token::new(TokenType::NumberLit, "1", 1));
//!
//! // Swap the value subtree, keep the rest
//! attr.replace(2, TokenGen::from(Token::new(TokenType::NumberLit, "2", 1)));
//! assert_eq!(attr.to_bytes(), b"name = 2");
//! ```

use crate::token::{Token, Tokens};
use crate::writer::{TokenWriter, WriteError};
use std::io;
use std::ops::ControlFlow;

/// Anything that can produce a flattened, ordered token stream
pub trait EachToken {
    /// Visit every token in document order until the callback breaks
    ///
    /// A break propagates out of every enclosing sequence; no token after
    /// the one that broke is visited.
    fn try_each_token<'a>(
        &'a self,
        f: &mut dyn FnMut(&'a Token) -> ControlFlow<()>,
    ) -> ControlFlow<()>;

    /// Visit every token in document order
    fn each_token<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a Token),
    {
        let _ = self.try_each_token(&mut |token| {
            f(token);
            ControlFlow::Continue(())
        });
    }

    /// Flat snapshot of the tokens, borrowed from the tree
    fn tokens(&self) -> Vec<&Token> {
        let mut tokens = Vec::new();
        self.each_token(|token| tokens.push(token));
        tokens
    }

    /// Flat owned copy of the tokens
    fn to_tokens(&self) -> Tokens {
        let mut tokens = Tokens::new();
        self.each_token(|token| tokens.push(token.clone()));
        tokens
    }

    fn token_count(&self) -> usize {
        let mut count = 0;
        self.each_token(|_| count += 1);
        count
    }

    /// Serialize the tokens and their leading spaces to `wr`
    ///
    /// Returns the number of bytes written. On the sink's first failure the
    /// walk stops and the error carries the bytes written up to that point.
    fn write_to<W: io::Write + ?Sized>(&self, wr: &mut W) -> Result<usize, WriteError> {
        TokenWriter::default().write(self, wr)
    }

    /// Serialize into a fresh byte buffer
    fn to_bytes(&self) -> Vec<u8> {
        crate::writer::to_bytes(self)
    }
}

impl EachToken for Token {
    fn try_each_token<'a>(
        &'a self,
        f: &mut dyn FnMut(&'a Token) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        f(self)
    }
}

impl EachToken for Tokens {
    fn try_each_token<'a>(
        &'a self,
        f: &mut dyn FnMut(&'a Token) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        self.iter().try_for_each(|token| f(token))
    }
}

impl<T: EachToken> EachToken for Option<T> {
    fn try_each_token<'a>(
        &'a self,
        f: &mut dyn FnMut(&'a Token) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        match self {
            Some(inner) => inner.try_each_token(f),
            None => ControlFlow::Continue(()),
        }
    }
}

impl<T: EachToken + ?Sized> EachToken for Box<T> {
    fn try_each_token<'a>(
        &'a self,
        f: &mut dyn FnMut(&'a Token) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        (**self).try_each_token(f)
    }
}

/// A node of the token generator tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenGen {
    Token(Token),
    Tokens(Tokens),
    Seq(TokenSeq),
}

impl TokenGen {
    /// A node that produces no tokens
    pub fn empty() -> Self {
        TokenGen::Seq(TokenSeq::EMPTY)
    }
}

impl EachToken for TokenGen {
    fn try_each_token<'a>(
        &'a self,
        f: &mut dyn FnMut(&'a Token) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        match self {
            TokenGen::Token(token) => token.try_each_token(f),
            TokenGen::Tokens(tokens) => tokens.try_each_token(f),
            TokenGen::Seq(seq) => seq.try_each_token(f),
        }
    }
}

impl From<Token> for TokenGen {
    fn from(token: Token) -> Self {
        TokenGen::Token(token)
    }
}

impl From<Tokens> for TokenGen {
    fn from(tokens: Tokens) -> Self {
        TokenGen::Tokens(tokens)
    }
}

impl From<TokenSeq> for TokenGen {
    fn from(seq: TokenSeq) -> Self {
        TokenGen::Seq(seq)
    }
}

/// Ordered sequence of child generators
///
/// Edits work on whole children: a child subtree is inserted, removed or
/// replaced by value, never patched through a reference from elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSeq(Vec<TokenGen>);

impl TokenSeq {
    /// A sequence with no children
    ///
    /// Assign it in place of a subtree to drop that section of the output
    /// while keeping sibling positions stable.
    pub const EMPTY: TokenSeq = TokenSeq(Vec::new());

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn push(&mut self, child: impl Into<TokenGen>) {
        self.0.push(child.into());
    }

    /// Insert a child at `index`, shifting later children right
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, child: impl Into<TokenGen>) {
        self.0.insert(index, child.into());
    }

    /// Remove and return the child at `index`, shifting later children left
    pub fn remove(&mut self, index: usize) -> Option<TokenGen> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    /// Put `child` at `index` and return the subtree it displaced
    ///
    /// Returns `None` and leaves the sequence untouched when `index` is out
    /// of range.
    pub fn replace(&mut self, index: usize, child: impl Into<TokenGen>) -> Option<TokenGen> {
        let slot = self.0.get_mut(index)?;
        Some(std::mem::replace(slot, child.into()))
    }

    /// Replace the child at `index` with an empty sequence
    pub fn erase(&mut self, index: usize) -> Option<TokenGen> {
        self.replace(index, TokenSeq::EMPTY)
    }

    pub fn get(&self, index: usize) -> Option<&TokenGen> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut TokenGen> {
        self.0.get_mut(index)
    }

    pub fn children(&self) -> &[TokenGen] {
        &self.0
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no children at all
    ///
    /// A sequence whose children all produce nothing is not empty in this
    /// sense; use [`EachToken::token_count`] for that.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl EachToken for TokenSeq {
    fn try_each_token<'a>(
        &'a self,
        f: &mut dyn FnMut(&'a Token) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        self.0
            .iter()
            .try_for_each(|child| child.try_each_token(&mut *f))
    }
}

impl From<Vec<TokenGen>> for TokenSeq {
    fn from(children: Vec<TokenGen>) -> Self {
        Self(children)
    }
}

impl FromIterator<TokenGen> for TokenSeq {
    fn from_iter<I: IntoIterator<Item = TokenGen>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<TokenGen> for TokenSeq {
    fn extend<I: IntoIterator<Item = TokenGen>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for TokenSeq {
    type Item = TokenGen;
    type IntoIter = std::vec::IntoIter<TokenGen>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
