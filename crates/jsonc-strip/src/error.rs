use thiserror::Error;

use crate::scan::Position;

/// Why a scan could not be completed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input ended inside a comment, or right after a comment-opening `/`.
    #[error("unexpected end of comment")]
    UnexpectedEndOfComment,
    /// A `/` outside a string was not followed by `/` or `*`.
    #[error("unexpected character after '/'")]
    StraySlash,
}

/// A comment-level failure, positioned at the `/` that opened the offending
/// comment.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct CommentError {
    kind: ErrorKind,
    /// 1-based line of the opening `/`.
    pub line: usize,
    /// 1-based column (in bytes) of the opening `/`.
    pub column: usize,
}

impl CommentError {
    pub(crate) fn new(kind: ErrorKind, at: Position) -> Self {
        Self {
            kind,
            line: at.line,
            column: at.column,
        }
    }

    /// The kind of failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// Error returned by [`Decoder`](crate::Decoder) reads.
#[derive(Error, Debug)]
pub enum DecodeError<E> {
    /// The input is not well-formed JSON-with-comments.
    #[error(transparent)]
    Comment(#[from] CommentError),
    /// The underlying source failed; passed through untouched.
    #[error("source error")]
    Source(#[source] E),
}

impl<E> DecodeError<E> {
    /// The comment error, if this is one.
    #[must_use]
    pub fn as_comment(&self) -> Option<&CommentError> {
        match self {
            DecodeError::Comment(err) => Some(err),
            DecodeError::Source(_) => None,
        }
    }
}

#[cfg(feature = "std")]
impl From<DecodeError<std::io::Error>> for std::io::Error {
    fn from(err: DecodeError<std::io::Error>) -> Self {
        match err {
            DecodeError::Source(err) => err,
            DecodeError::Comment(err) => std::io::Error::new(std::io::ErrorKind::InvalidData, err),
        }
    }
}
