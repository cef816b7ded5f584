#![allow(missing_docs, dead_code)]
#![allow(clippy::needless_raw_string_hashes)]

use std::{
    collections::VecDeque,
    io::{self, Read},
};

pub const ORIGINAL: &str = r#"// Tool configuration.
{
    /*
     * Which model answers, and how.
     */
    "model": "large", // overridden per request
    "temperature": 0.2,
    "endpoint": "https://api.example.com/v1", // not a comment: inside a string
    "stop": ["/*", "*/", "//"],
    "tools": [
        { "name": "search", "enabled": true },
        // { "name": "shell", "enabled": false },
        { "name": "fetch", "enabled": true } /* last */
    ],
    "notes": "two  spaces and a\ttab"
}
"#;

pub const STRIPPED: &str = r#"{"model":"large","temperature":0.2,"endpoint":"https://api.example.com/v1","stop":["/*","*/","//"],"tools":[{"name":"search","enabled":true},{"name":"fetch","enabled":true}],"notes":"two  spaces and a\ttab"}"#;

// The same document as it might arrive over a pipe. Chunks are cut on comment
// seams: between the two bytes of `//`, `/*` and `*/`, and right before the
// line feed that ends a line comment.
#[rustfmt::skip]
pub const STREAM: [&str; 12] = [
    "/",                                                                          // half of `//`
    "/ Tool configuration.\n{\n    /",                                           // ends with half of `/*`
    "*\n     * Which model answers, and how.\n     *",                            // ends with half of `*/`
    "/\n    \"model\": \"large\", // overridden per request",                     // line comment still open
    "\n    \"temperature\": 0.2,\n    \"endpoint\": \"https:/",                   // half of `//` inside a string
    "/api.example.com/v1\", // not a comment: inside a string\n",
    "    \"stop\": [\"/*\", \"*/\", \"//\"],\n    \"tools\": [\n",
    "        { \"name\": \"search\", \"enabled\": true },\n        // { \"name\": \"shell\", ",
    "\"enabled\": false },\n",                                                    // comment-only chunk
    "        { \"name\": \"fetch\", \"enabled\": true } /* last *",
    "/\n    ],\n    \"notes\": \"two  spaces and a\\ttab\"\n",
    "}\n",
];

#[test]
fn assert_stream_example() {
    assert_eq!(STREAM.concat(), ORIGINAL);
}

/// Hands out `chunks` one per read, never more than the caller's buffer
/// holds, like a pipe delivering short reads.
pub struct ChunkedReader<'a> {
    chunks: VecDeque<&'a [u8]>,
}

impl<'a> ChunkedReader<'a> {
    pub fn new(chunks: Vec<&'a [u8]>) -> Self {
        // An empty chunk would read as end of input.
        let chunks = chunks.into_iter().filter(|c| !c.is_empty()).collect();
        Self { chunks }
    }
}

impl Read for ChunkedReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some(chunk) = self.chunks.front_mut() else {
            return Ok(0);
        };
        let n = chunk.len().min(buf.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        *chunk = &chunk[n..];
        if chunk.is_empty() {
            self.chunks.pop_front();
        }
        Ok(n)
    }
}

#[test]
fn chunked_reader_short_reads() {
    let mut reader = ChunkedReader::new(vec![&b"abc"[..], &b""[..], &b"de"[..]]);
    let mut buf = [0; 2];
    let mut reads = Vec::new();
    loop {
        let n = reader.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        reads.push(buf[..n].to_vec());
    }
    assert_eq!(reads, vec![b"ab".to_vec(), b"c".to_vec(), b"de".to_vec()]);
}
