//! zcl writer core
//!
//! Layout-preserving token tree for generating and rewriting zcl
//! configuration files. A document is held as a tree of token generators;
//! editing replaces whole subtrees, and serialization replays every
//! untouched token with the exact spacing it had in the source.
//!
//! ## Round trip
//!
//! ```rust
//! use zcl_write::{tokens_from_lexemes, EachToken, Lexeme, TokenType};
//!
//! let src = b"count = 3";
//! let lexemes = [
//!     Lexeme::new(TokenType::Ident, 0..5),
//!     Lexeme::new(TokenType::Equal, 6..7),
//!     Lexeme::new(TokenType::NumberLit, 8..9),
//! ];
//!
//! let tokens = tokens_from_lexemes(src, &lexemes).unwrap();
//! let mut out = Vec::new();
//! tokens.write_to(&mut out).unwrap();
//! assert_eq!(out, src);
//! ```

pub mod config;
pub mod error;
pub mod lexeme;
pub mod result;
pub mod token;
pub mod token_gen;
pub mod token_type;
pub mod writer;

// Re-export commonly used types
pub use config::{ConfigLoader, WriterConfiguration, ZclConfig};
pub use error::{ErrorKind, ZclError};
pub use lexeme::{LayoutError, Lexeme, Span, tokens_from_lexemes};
pub use result::{Result, ResultExt};
pub use token::{Token, Tokens};
pub use token_gen::{EachToken, TokenGen, TokenSeq};
pub use token_type::TokenType;
pub use writer::{DEFAULT_SPACE_CHUNK, TokenWriter, WriteError};

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("zcl_write=info,zcl_transform=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
