//! Minimal zcl lexer for tests
//!
//! Good enough to split realistic configuration files into positioned
//! lexemes. It skips spaces (the writer recovers them from the gaps) and
//! emits everything else, including tabs, newlines and comments, as tokens.

#![allow(dead_code)]

use zcl_write::{Lexeme, TokenType};

pub fn lex(src: &str) -> Vec<Lexeme> {
    let bytes = src.as_bytes();
    let mut lexemes = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let start = i;
        let kind = match bytes[i] {
            b' ' => {
                i += 1;
                continue;
            }
            b'\t' => {
                i = run_end(bytes, i, |b| b == b'\t');
                TokenType::Tabs
            }
            b'\n' => {
                i += 1;
                TokenType::Newline
            }
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                i += 2;
                TokenType::Newline
            }
            b'#' => {
                i = run_end(bytes, i, |b| b != b'\n');
                TokenType::Comment
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = run_end(bytes, i, |b| b != b'\n');
                TokenType::Comment
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = block_comment_end(bytes, i);
                TokenType::Comment
            }
            b'"' => {
                i = lex_quoted(bytes, i, &mut lexemes);
                continue;
            }
            b'0'..=b'9' => {
                i = run_end(bytes, i, |b| b.is_ascii_digit() || b == b'.');
                TokenType::NumberLit
            }
            b if b.is_ascii_alphabetic() || b == b'_' => {
                i = run_end(bytes, i, |b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
                TokenType::Ident
            }
            b'=' if bytes.get(i + 1) == Some(&b'=') => {
                i += 2;
                TokenType::EqualOp
            }
            b'=' if bytes.get(i + 1) == Some(&b'>') => {
                i += 2;
                TokenType::FatArrow
            }
            b => {
                i += 1;
                punctuation(b)
            }
        };
        lexemes.push(Lexeme::new(kind, start..i));
    }

    lexemes.push(Lexeme::new(TokenType::Eof, bytes.len()..bytes.len()));
    lexemes
}

fn run_end(bytes: &[u8], start: usize, keep: impl Fn(u8) -> bool) -> usize {
    let mut i = start;
    while i < bytes.len() && keep(bytes[i]) {
        i += 1;
    }
    i
}

fn block_comment_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 2;
    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            return i + 2;
        }
        i += 1;
    }
    bytes.len()
}

fn lex_quoted(bytes: &[u8], start: usize, lexemes: &mut Vec<Lexeme>) -> usize {
    lexemes.push(Lexeme::new(TokenType::OQuote, start..start + 1));

    let lit_start = start + 1;
    let mut i = lit_start;
    while i < bytes.len() && bytes[i] != b'"' && bytes[i] != b'\n' {
        i += if bytes[i] == b'\\' { 2 } else { 1 };
    }
    let i = i.min(bytes.len());
    if i > lit_start {
        lexemes.push(Lexeme::new(TokenType::QuotedLit, lit_start..i));
    }

    if bytes.get(i) == Some(&b'"') {
        lexemes.push(Lexeme::new(TokenType::CQuote, i..i + 1));
        i + 1
    } else {
        i
    }
}

fn punctuation(b: u8) -> TokenType {
    match b {
        b'{' => TokenType::OBrace,
        b'}' => TokenType::CBrace,
        b'[' => TokenType::OBrack,
        b']' => TokenType::CBrack,
        b'(' => TokenType::OParen,
        b')' => TokenType::CParen,
        b'=' => TokenType::Equal,
        b',' => TokenType::Comma,
        b'.' => TokenType::Dot,
        b':' => TokenType::Colon,
        b'?' => TokenType::Question,
        b'+' => TokenType::Plus,
        b'-' => TokenType::Minus,
        b'*' => TokenType::Star,
        b'/' => TokenType::Slash,
        b'%' => TokenType::Percent,
        b'!' => TokenType::Bang,
        b'<' => TokenType::LessThan,
        b'>' => TokenType::GreaterThan,
        _ => TokenType::Invalid,
    }
}
