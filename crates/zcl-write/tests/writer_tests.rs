//! Serializer behaviour at the scratch-buffer boundaries and on sink failure

use rstest::rstest;
use std::io;
use std::num::NonZeroUsize;
use zcl_write::{
    ConfigLoader, EachToken, Token, TokenGen, TokenSeq, TokenType, TokenWriter, Tokens,
};

/// Sink that fails once `limit` bytes have been accepted and counts calls
struct FaultySink {
    out: Vec<u8>,
    limit: usize,
    calls: usize,
}

impl FaultySink {
    fn new(limit: usize) -> Self {
        Self {
            out: Vec::new(),
            limit,
            calls: 0,
        }
    }
}

impl io::Write for FaultySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls += 1;
        let room = self.limit - self.out.len();
        if room == 0 {
            return Err(io::Error::other("disk full"));
        }
        let n = room.min(buf.len());
        self.out.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(39)]
#[case(40)]
#[case(41)]
#[case(1000)]
fn test_space_runs(#[case] spaces: usize) {
    let token = Token::new(TokenType::Ident, "value", spaces);
    let mut out = Vec::new();

    let n = token.write_to(&mut out).unwrap();

    let expected = format!("{}value", " ".repeat(spaces));
    assert_eq!(n, spaces + 5);
    assert_eq!(out, expected.as_bytes());
}

#[rstest]
#[case(1, 0)]
#[case(1, 7)]
#[case(7, 6)]
#[case(7, 7)]
#[case(7, 8)]
#[case(64, 1000)]
fn test_space_runs_with_custom_chunk(#[case] chunk: usize, #[case] spaces: usize) {
    let writer = TokenWriter::with_chunk_size(NonZeroUsize::new(chunk).unwrap());
    let token = Token::new(TokenType::Ident, "v", spaces);
    let mut out = Vec::new();

    writer.write(&token, &mut out).unwrap();

    assert_eq!(out.len(), spaces + 1);
    assert!(out[..spaces].iter().all(|b| *b == b' '));
    assert_eq!(out[spaces], b'v');
}

#[rstest]
#[case(0, 0)]
#[case(3, 3)]
#[case(10, 10)]
#[case(12, 12)]
#[case(55, 55)]
fn test_fail_fast_partial_counts(#[case] limit: usize, #[case] expected: usize) {
    // token 0: "alpha" (5), token 1: 45 spaces + "beta" (49), token 2: "gamma" (6)
    let seq = TokenSeq::from(vec![
        TokenGen::from(Token::new(TokenType::Ident, "alpha", 0)),
        TokenGen::from(Tokens::from(vec![
            Token::new(TokenType::Ident, "beta", 45),
            Token::new(TokenType::Ident, "gamma", 1),
        ])),
    ]);
    let mut sink = FaultySink::new(limit);

    let err = seq.write_to(&mut sink).unwrap_err();

    assert_eq!(err.written, expected);
    assert_eq!(sink.out.len(), expected);
    assert_eq!(err.source.kind(), io::ErrorKind::Other);
}

#[test]
fn test_no_writes_after_failure() {
    let tokens = Tokens::from(vec![
        Token::new(TokenType::Ident, "a", 0),
        Token::new(TokenType::Ident, "b", 0),
        Token::new(TokenType::Ident, "c", 0),
    ]);
    let mut sink = FaultySink::new(1);

    let err = tokens.write_to(&mut sink).unwrap_err();

    assert_eq!(err.written, 1);
    // one successful write for "a", one failing write for "b", nothing for "c"
    assert_eq!(sink.calls, 2);
}

#[test]
fn test_tree_is_reusable_after_failure() {
    let seq = TokenSeq::from(vec![
        TokenGen::from(Token::new(TokenType::Ident, "left", 0)),
        TokenGen::from(Token::new(TokenType::Ident, "right", 1)),
    ]);

    assert!(seq.write_to(&mut FaultySink::new(2)).is_err());

    let mut out = Vec::new();
    assert_eq!(seq.write_to(&mut out).unwrap(), 10);
    assert_eq!(out, b"left right");
}

#[test]
fn test_writer_from_discovered_config() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("zcl.json"),
        r#"{ "writer": { "spaceChunkSize": 5 } }"#,
    )
    .unwrap();

    let config = ConfigLoader::load(None, Some(dir.path())).unwrap();
    let writer = TokenWriter::from_config(&config.writer_config()).unwrap();

    let mut out = Vec::new();
    writer
        .write(&Token::new(TokenType::Ident, "x", 12), &mut out)
        .unwrap();

    assert_eq!(writer.chunk_size(), 5);
    assert_eq!(out, format!("{}x", " ".repeat(12)).as_bytes());
}
