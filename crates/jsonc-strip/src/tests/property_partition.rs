use alloc::{string::String, vec, vec::Vec};

use quickcheck::QuickCheck;

use super::arbitrary::JsoncDoc;
use crate::{
    CommentError, DecodeError, Decoder, DecoderOptions, decode_str_with, decode_vec_with,
    chunk_utils::{ChunkedSource, partition},
};

fn options(escaped_newline: bool, reject_stray_slash: bool) -> DecoderOptions {
    DecoderOptions {
        escaped_newline_ends_comment: escaped_newline,
        reject_stray_slash,
        ..Default::default()
    }
}

fn stream(
    input: &[u8],
    splits: &[usize],
    buf_len: usize,
    options: DecoderOptions,
) -> Result<Vec<u8>, CommentError> {
    let mut decoder = Decoder::with_options(ChunkedSource::new(partition(input, splits)), options);
    let mut buf = vec![0; buf_len];
    let mut out = Vec::new();
    loop {
        match decoder.read_chunk(&mut buf) {
            Ok(0) => return Ok(out),
            Ok(n) => out.extend_from_slice(&buf[..n]),
            Err(DecodeError::Comment(err)) => return Err(err),
            Err(DecodeError::Source(err)) => panic!("chunked source failed: {err}"),
        }
    }
}

fn tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: streaming a document in arbitrary chunks through arbitrary
/// buffer sizes yields exactly what stripping it in one piece yields,
/// including the error and its position.
#[test]
fn partition_matches_batch_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(
        doc: JsoncDoc,
        splits: Vec<usize>,
        buf_len: u8,
        escaped_newline: bool,
        reject: bool,
    ) -> bool {
        let options = options(escaped_newline, reject);
        let batch = decode_vec_with(doc.0.clone(), &options);
        let streamed = stream(&doc.0, &splits, 1 + usize::from(buf_len % 32), options);
        batch == streamed
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(JsoncDoc, Vec<usize>, u8, bool, bool) -> bool);
}

/// Property: arbitrary bytes, not just plausible documents.
#[test]
fn partition_matches_batch_raw_bytes_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>, splits: Vec<usize>, escaped_newline: bool) -> bool {
        let options = options(escaped_newline, false);
        decode_vec_with(bytes.clone(), &options) == stream(&bytes, &splits, 16, options)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>, Vec<usize>, bool) -> bool);
}

/// Property: stripping is idempotent. The output has no whitespace or `/`
/// outside strings, so a second pass keeps every byte.
#[test]
fn decode_is_idempotent_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(doc: JsoncDoc, escaped_newline: bool) -> bool {
        let options = options(escaped_newline, false);
        match decode_vec_with(doc.0, &options) {
            Ok(once) => decode_vec_with(once.clone(), &options) == Ok(once),
            Err(_) => true,
        }
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(JsoncDoc, bool) -> bool);
}

/// Property: stripped text stays valid UTF-8 and matches the byte path.
#[test]
fn decode_str_matches_bytes_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String, escaped_newline: bool) -> bool {
        let options = options(escaped_newline, false);
        let as_text = decode_str_with(&text, &options).map(String::into_bytes);
        as_text == decode_vec_with(text.into_bytes(), &options)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String, bool) -> bool);
}
