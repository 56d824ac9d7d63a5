//! Conversion from positioned lexer output to writer tokens
//!
//! The lexer reports each token with its byte span in the source and skips
//! the spaces between tokens. Everything else (newlines, tabs, comments) is
//! a token of its own. The gap between two consecutive spans therefore has
//! to be a run of spaces, and its length becomes the next token's
//! `spaces_before`.

use crate::token::{Token, Tokens};
use crate::token_type::TokenType;
use std::ops::Range;
use thiserror::Error;

/// Simple span representing a byte range in the source
pub type Span = Range<usize>;

/// A token as reported by the lexer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: TokenType,
    pub span: Span,
}

impl Lexeme {
    pub fn new(kind: TokenType, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Lexer output that would not round-trip byte for byte
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("span {start}..{end} lies outside the {len}-byte source")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("span {start}..{end} starts before the previous token ends at {prev_end}")]
    Overlap {
        start: usize,
        end: usize,
        prev_end: usize,
    },

    #[error("byte {byte:#04x} at offset {offset} is between tokens but is not a space")]
    NonSpaceGap { offset: usize, byte: u8 },
}

/// Build the unedited token run for `src` from the lexer's spans
///
/// Spaces after the last lexeme are carried by a synthetic empty
/// [`TokenType::Eof`] token.
pub fn tokens_from_lexemes(src: &[u8], lexemes: &[Lexeme]) -> Result<Tokens, LayoutError> {
    let mut tokens = Tokens::with_capacity(lexemes.len() + 1);
    let mut prev_end = 0;

    for lexeme in lexemes {
        let Span { start, end } = lexeme.span.clone();
        if start > end || end > src.len() {
            return Err(layout_error(LayoutError::OutOfBounds {
                start,
                end,
                len: src.len(),
            }));
        }
        if start < prev_end {
            return Err(layout_error(LayoutError::Overlap {
                start,
                end,
                prev_end,
            }));
        }

        let spaces_before = count_gap_spaces(src, prev_end, start)?;
        tokens.push(Token::new(lexeme.kind, &src[start..end], spaces_before));
        prev_end = end;
    }

    let trailing = count_gap_spaces(src, prev_end, src.len())?;
    if trailing > 0 {
        tokens.push(Token::new(TokenType::Eof, b"", trailing));
    }

    Ok(tokens)
}

fn count_gap_spaces(src: &[u8], start: usize, end: usize) -> Result<usize, LayoutError> {
    match src[start..end].iter().position(|b| *b != b' ') {
        None => Ok(end - start),
        Some(i) => Err(layout_error(LayoutError::NonSpaceGap {
            offset: start + i,
            byte: src[start + i],
        })),
    }
}

fn layout_error(err: LayoutError) -> LayoutError {
    tracing::debug!(error = %err, "lexer output rejected");
    err
}
