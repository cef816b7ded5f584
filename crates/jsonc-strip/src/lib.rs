//! Strip `//` and `/* */` comments, plus whitespace outside string literals,
//! from JSON-with-comments so the result can be handed to a strict JSON
//! parser.
//!
//! Two ways in:
//!
//! - [`decode_in_place`] / [`decode_str`] / [`decode_vec`] for input that is
//!   already in memory.
//! - [`Decoder`] for input pulled from a [`ByteSource`] (any
//!   [`std::io::Read`] with the default `std` feature). The decoder carries
//!   its [`ScanState`] across reads, so comments may straddle chunk
//!   boundaries.
//!
//! ```rust
//! let json = jsonc_strip::decode_str(
//!     r#"{"foo": /* this is a block comment */ "bar foo", "number": 42}"#,
//! )
//! .unwrap();
//! assert_eq!(json, r#"{"foo":"bar foo","number":42}"#);
//! ```
//!
//! String literals are tracked by counting `"` bytes, not by decoding escape
//! sequences. An escaped quote inside a string flips the tracking like any
//! other quote, so whitespace between two escaped quotes is dropped.
//!
//! Nothing here validates JSON; that is left to the parser the output is fed
//! to.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod batch;
#[cfg(any(test, feature = "fuzzing"))]
#[doc(hidden)]
pub mod chunk_utils;
mod decoder;
mod error;
mod options;
mod scan;
mod source;

#[cfg(test)]
mod tests;

pub use batch::{
    decode_in_place, decode_in_place_with, decode_str, decode_str_with, decode_vec,
    decode_vec_with,
};
pub use decoder::Decoder;
pub use error::{CommentError, DecodeError, ErrorKind};
pub use options::DecoderOptions;
pub use scan::{Phase, Position, ScanState};
pub use source::ByteSource;
