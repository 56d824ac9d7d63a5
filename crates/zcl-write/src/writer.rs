//! Serializer for token generator trees
//!
//! Writes each token's leading spaces followed by its raw bytes. Leading
//! spaces are emitted from one bounded scratch buffer in repeated writes, so
//! a deeply indented or generated file never causes an allocation sized to
//! its indentation.

use crate::config::WriterConfiguration;
use crate::error::ZclError;
use crate::token::Token;
use crate::token_gen::EachToken;
use std::borrow::Cow;
use std::io;
use std::num::NonZeroUsize;
use std::ops::ControlFlow;
use thiserror::Error;

/// Default size of the space scratch buffer
pub const DEFAULT_SPACE_CHUNK: usize = 40;

static SPACES: [u8; DEFAULT_SPACE_CHUNK] = [b' '; DEFAULT_SPACE_CHUNK];

/// The sink failed part-way through a write
///
/// `written` counts every byte the sink accepted before failing, including
/// a partial amount for the token that was being written.
#[derive(Debug, Error)]
#[error("token write failed after {written} bytes: {source}")]
pub struct WriteError {
    pub written: usize,
    #[source]
    pub source: io::Error,
}

impl WriteError {
    pub fn into_parts(self) -> (usize, io::Error) {
        (self.written, self.source)
    }
}

/// Streams token trees to an [`io::Write`] sink
#[derive(Debug, Clone)]
pub struct TokenWriter {
    spaces: Cow<'static, [u8]>,
}

impl Default for TokenWriter {
    fn default() -> Self {
        Self {
            spaces: Cow::Borrowed(&SPACES),
        }
    }
}

impl TokenWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writer whose space scratch buffer holds `chunk` bytes
    pub fn with_chunk_size(chunk: NonZeroUsize) -> Self {
        let chunk = chunk.get();
        if chunk == DEFAULT_SPACE_CHUNK {
            return Self::default();
        }
        Self {
            spaces: Cow::Owned(vec![b' '; chunk]),
        }
    }

    /// Build a writer from the `writer` configuration section
    pub fn from_config(config: &WriterConfiguration) -> crate::Result<Self> {
        match config.space_chunk_size {
            None => Ok(Self::default()),
            Some(size) => NonZeroUsize::new(size)
                .map(Self::with_chunk_size)
                .ok_or_else(|| ZclError::config_error("writer.spaceChunkSize must be at least 1")),
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.spaces.len()
    }

    /// Write every token of `source` to `wr`, returning the byte count
    ///
    /// Stops at the sink's first failure: the rest of the failing token and
    /// every later token are skipped.
    pub fn write<T, W>(&self, source: &T, wr: &mut W) -> Result<usize, WriteError>
    where
        T: EachToken + ?Sized,
        W: io::Write + ?Sized,
    {
        let mut written = 0;
        let mut failure = None;

        let _ = source.try_each_token(&mut |token| {
            match self.write_token(token, wr, &mut written) {
                Ok(()) => ControlFlow::Continue(()),
                Err(err) => {
                    failure = Some(err);
                    ControlFlow::Break(())
                }
            }
        });

        match failure {
            None => Ok(written),
            Some(source) => {
                tracing::debug!(written, error = %source, "token write stopped on sink failure");
                Err(WriteError { written, source })
            }
        }
    }

    fn write_token<W>(&self, token: &Token, wr: &mut W, written: &mut usize) -> io::Result<()>
    where
        W: io::Write + ?Sized,
    {
        let mut remaining = token.spaces_before();
        while remaining > 0 {
            let chunk = remaining.min(self.spaces.len());
            write_chunk(wr, &self.spaces[..chunk], written)?;
            remaining -= chunk;
        }
        write_chunk(wr, token.bytes(), written)
    }
}

// Like `write_all`, but counts what the sink accepted before an error.
fn write_chunk<W>(wr: &mut W, mut buf: &[u8], written: &mut usize) -> io::Result<()>
where
    W: io::Write + ?Sized,
{
    while !buf.is_empty() {
        match wr.write(buf) {
            Ok(0) => return Err(io::Error::from(io::ErrorKind::WriteZero)),
            Ok(n) => {
                *written += n;
                buf = &buf[n..];
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

/// Serialize into an in-memory buffer; cannot fail
pub fn to_bytes<T: EachToken + ?Sized>(source: &T) -> Vec<u8> {
    let mut out = Vec::new();
    source.each_token(|token| {
        out.resize(out.len() + token.spaces_before(), b' ');
        out.extend_from_slice(token.bytes());
    });
    out
}
