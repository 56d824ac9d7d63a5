//! Token classification
//!
//! The lexer that produces these categories lives outside this crate. The
//! writer never interprets a token's type: it is copied verbatim from the
//! source token to the output token so that later consumers (formatters,
//! generators) can still tell an identifier from a comment.

use std::fmt;

/// Lexical category of a [`Token`](crate::Token)
///
/// Layout other than spaces is carried by tokens of its own kind:
/// newlines are [`TokenType::Newline`], tab runs are [`TokenType::Tabs`] and
/// comments are [`TokenType::Comment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum TokenType {
    // ==================
    // Delimiters (0-19)
    // ==================
    /// `{`
    OBrace = 0,
    /// `}`
    CBrace = 1,
    /// `[`
    OBrack = 2,
    /// `]`
    CBrack = 3,
    /// `(`
    OParen = 4,
    /// `)`
    CParen = 5,
    /// Opening `"` of a quoted string or template
    OQuote = 6,
    /// Closing `"` of a quoted string or template
    CQuote = 7,
    /// `<<EOT` heredoc introducer
    OHeredoc = 8,
    /// Heredoc terminator line
    CHeredoc = 9,

    // ==================
    // Operators (20-59)
    // ==================
    Star = 20,
    Slash = 21,
    Plus = 22,
    Minus = 23,
    Percent = 24,
    /// `=` in an attribute definition
    Equal = 25,
    /// `==`
    EqualOp = 26,
    /// `!=`
    NotEqual = 27,
    LessThan = 28,
    LessThanEq = 29,
    GreaterThan = 30,
    GreaterThanEq = 31,
    /// `&&`
    And = 32,
    /// `||`
    Or = 33,
    /// `!`
    Bang = 34,
    Dot = 35,
    Comma = 36,
    /// `...`
    Ellipsis = 37,
    /// `=>`
    FatArrow = 38,
    Question = 39,
    Colon = 40,

    // ==================
    // Templates (60-69)
    // ==================
    /// `${`
    TemplateInterp = 60,
    /// `%{`
    TemplateControl = 61,
    /// `}` closing an interpolation or control sequence
    TemplateSeqEnd = 62,

    // ==================
    // Literals (70-89)
    // ==================
    /// Literal text inside quotes, escapes still encoded
    QuotedLit = 70,
    /// Literal text inside a heredoc
    StringLit = 71,
    NumberLit = 72,
    Ident = 73,

    // ==================
    // Layout (90-99)
    // ==================
    /// Line or block comment, including its delimiters
    Comment = 90,
    /// `\n` or `\r\n`
    Newline = 91,
    /// A run of tab characters
    Tabs = 92,
    /// End of input; usually an empty payload
    Eof = 93,

    // ==================
    // Errors (100+)
    // ==================
    /// Bytes the lexer could not classify
    Invalid = 100,
    /// Bytes that are not valid UTF-8
    BadUtf8 = 101,
}

impl TokenType {
    /// Whether this token exists only to carry layout
    pub fn is_layout(self) -> bool {
        matches!(
            self,
            TokenType::Comment | TokenType::Newline | TokenType::Tabs | TokenType::Eof
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
