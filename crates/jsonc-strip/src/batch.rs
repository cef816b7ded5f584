use alloc::{string::String, vec::Vec};

use crate::{error::CommentError, options::DecoderOptions, scan::ScanState};

/// Strip comments and insignificant whitespace from `buf` in place with
/// default options, returning the length of the stripped prefix.
///
/// The whole buffer is the input, so an open comment at its end is an error.
/// That includes a line comment missing its final line feed.
///
/// ```rust
/// let mut buf = *b"{\"url\": \"https://example.com\"} // homepage\n";
/// let n = jsonc_strip::decode_in_place(&mut buf).unwrap();
/// assert_eq!(&buf[..n], br#"{"url":"https://example.com"}"#);
/// ```
///
/// # Errors
///
/// See [`decode_in_place_with`].
pub fn decode_in_place(buf: &mut [u8]) -> Result<usize, CommentError> {
    decode_in_place_with(buf, &DecoderOptions::default())
}

/// Strip `buf` in place with the given options.
///
/// # Errors
///
/// [`ErrorKind::UnexpectedEndOfComment`](crate::ErrorKind) when the buffer
/// ends inside a comment; [`ErrorKind::StraySlash`](crate::ErrorKind) when
/// stray slashes are rejected and one was found. The buffer has already
/// been rewritten when either is returned and must not be trusted.
pub fn decode_in_place_with(
    buf: &mut [u8],
    options: &DecoderOptions,
) -> Result<usize, CommentError> {
    let mut state = ScanState::new();
    let kept = state.scan_in_place(buf, options);
    state.finish(options)?;
    Ok(kept)
}

/// Strip an owned buffer, truncating it to the stripped length.
///
/// # Errors
///
/// See [`decode_in_place_with`].
pub fn decode_vec(bytes: Vec<u8>) -> Result<Vec<u8>, CommentError> {
    decode_vec_with(bytes, &DecoderOptions::default())
}

/// Strip an owned buffer with the given options.
///
/// # Errors
///
/// See [`decode_in_place_with`].
pub fn decode_vec_with(
    mut bytes: Vec<u8>,
    options: &DecoderOptions,
) -> Result<Vec<u8>, CommentError> {
    let kept = decode_in_place_with(&mut bytes, options)?;
    bytes.truncate(kept);
    Ok(bytes)
}

/// Strip a string with default options.
///
/// # Errors
///
/// See [`decode_in_place_with`].
pub fn decode_str(text: &str) -> Result<String, CommentError> {
    decode_str_with(text, &DecoderOptions::default())
}

/// Strip a string with the given options. The input is copied once; the
/// result reuses that allocation.
///
/// # Errors
///
/// See [`decode_in_place_with`].
pub fn decode_str_with(text: &str, options: &DecoderOptions) -> Result<String, CommentError> {
    let bytes = decode_vec_with(text.as_bytes().to_vec(), options)?;
    Ok(stripped_into_string(bytes))
}

/// Reinterpret the output of a successful strip of valid UTF-8 as a `String`.
fn stripped_into_string(bytes: Vec<u8>) -> String {
    debug_assert!(core::str::from_utf8(&bytes).is_ok());
    // SAFETY: the input was a `&str`. The scanner only switches between
    // keeping and dropping on ASCII bytes (quotes, whitespace, `/`, `*`, `\`,
    // `n`, line feeds), and a successful finish means no dropped run was cut
    // short, so every multi-byte sequence is either kept whole or dropped
    // whole.
    unsafe { String::from_utf8_unchecked(bytes) }
}
