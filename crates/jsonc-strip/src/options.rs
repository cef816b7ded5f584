#![allow(clippy::struct_excessive_bools)]

/// Configuration options for comment stripping.
///
/// The defaults describe plain JSON-with-comments: line comments end at a
/// line feed, block comments end at `*/`, and the stream adapter only treats
/// an empty read as the end of input.
///
/// # Examples
///
/// ```rust
/// use jsonc_strip::{DecoderOptions, decode_str_with};
///
/// let options = DecoderOptions {
///     reject_stray_slash: true,
///     ..Default::default()
/// };
/// let err = decode_str_with("[1, 2 / 3]", &options).unwrap_err();
/// assert_eq!(err.to_string(), "unexpected character after '/' at 1:7");
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecoderOptions {
    /// Whether the two-byte sequence `\n` (a backslash followed by the letter
    /// `n`) inside a comment terminates it.
    ///
    /// Some hand-written fixtures embed the escape sequence rather than a real
    /// line break after a line comment. With this enabled, a backslash or a
    /// `*` inside any comment starts a terminator, which a following `/` or
    /// `n` completes.
    ///
    /// # Default
    ///
    /// `false`
    pub escaped_newline_ends_comment: bool,

    /// Whether every non-empty read from the underlying source is treated as
    /// the end of input by [`Decoder`](crate::Decoder).
    ///
    /// When `true`, a read that leaves a comment open fails with
    /// [`ErrorKind::UnexpectedEndOfComment`](crate::ErrorKind) even if the
    /// source has more data. Only useful when each read is known to deliver
    /// a complete document.
    ///
    /// # Default
    ///
    /// `false`
    pub short_read_is_end_of_stream: bool,

    /// Whether a `/` outside a string that is not followed by `/` or `*` is
    /// an error.
    ///
    /// When `false`, the slash and every following byte are dropped until the
    /// next `/` or `*` opens a comment, which is what older decoders did.
    ///
    /// # Default
    ///
    /// `false`
    pub reject_stray_slash: bool,
}

impl DecoderOptions {
    /// Options reproducing the behavior of decoders that predate the
    /// corrected end-of-stream handling: escaped-newline terminators and
    /// short reads judged as end of input.
    ///
    /// A `*` or `\` that turns out not to start a terminator still falls back
    /// into the comment body, so a later line feed ends a line comment and
    /// `*/` ends a block comment as usual.
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            escaped_newline_ends_comment: true,
            short_read_is_end_of_stream: true,
            reject_stray_slash: false,
        }
    }
}
