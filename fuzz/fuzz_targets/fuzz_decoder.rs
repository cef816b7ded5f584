#![no_main]
use std::io::Read;

use arbitrary::Arbitrary;
use jsonc_strip::{
    DecodeError, Decoder, DecoderOptions,
    chunk_utils::{ChunkedSource, partition},
    decode_vec_with,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    escaped_newline: bool,
    reject_stray_slash: bool,
    buf_len: u8,
    splits: Vec<u8>,
    data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let options = DecoderOptions {
        escaped_newline_ends_comment: input.escaped_newline,
        reject_stray_slash: input.reject_stray_slash,
        ..Default::default()
    };
    let batch = decode_vec_with(input.data.clone(), &options);

    // Streaming over any partition and buffer size agrees with the batch path.
    let splits: Vec<usize> = input.splits.iter().map(|&s| usize::from(s)).collect();
    let mut decoder =
        Decoder::with_options(ChunkedSource::new(partition(&input.data, &splits)), options);
    let mut buf = vec![0; 1 + usize::from(input.buf_len)];
    let mut streamed = Vec::new();
    let streamed = loop {
        match decoder.read_chunk(&mut buf) {
            Ok(0) => break Ok(streamed),
            Ok(n) => streamed.extend_from_slice(&buf[..n]),
            Err(DecodeError::Comment(err)) => break Err(err),
            Err(DecodeError::Source(err)) => panic!("chunked source failed: {err}"),
        }
    };
    assert_eq!(batch, streamed);

    let Ok(once) = batch else { return };

    // A second pass finds nothing left to strip.
    assert_eq!(decode_vec_with(once.clone(), &options).as_deref(), Ok(once.as_slice()));

    // Strict JSON without escaped quotes means the same thing after stripping.
    if !input.data.windows(2).any(|w| w == b"\\\"") {
        if let Ok(before) = serde_json::from_slice::<serde_json::Value>(&input.data) {
            let after: serde_json::Value =
                serde_json::from_slice(&once).expect("stripped strict JSON must still parse");
            assert_eq!(before, after);
        }
    }

    // The `std::io::Read` adapter sees the same bytes.
    let mut via_io = Vec::new();
    Decoder::with_options(input.data.as_slice(), options)
        .read_to_end(&mut via_io)
        .expect("batch succeeded");
    assert_eq!(via_io, once);
});
