use crate::{
    error::{CommentError, DecodeError},
    options::DecoderOptions,
    scan::ScanState,
    source::ByteSource,
};

const TRACE_TARGET: &str = "jsonc_strip::decoder";

/// Streaming comment stripper over a [`ByteSource`].
///
/// Each read pulls one chunk from the source and strips it in the caller's
/// buffer. The [`ScanState`] survives between reads, so comments and strings
/// may be split across chunks; an open comment is only an error once the
/// source reports the end of input (see
/// [`DecoderOptions::short_read_is_end_of_stream`] for the stricter legacy
/// policy).
///
/// With the `std` feature a `Decoder` over a [`std::io::Read`] is itself a
/// reader:
///
/// ```rust
/// use std::io::Read;
///
/// let src = b"[1, // one\n 2 /* two */]".as_slice();
/// let mut out = String::new();
/// jsonc_strip::Decoder::new(src).read_to_string(&mut out).unwrap();
/// assert_eq!(out, "[1,2]");
/// ```
#[derive(Debug)]
pub struct Decoder<S> {
    source: S,
    state: ScanState,
    options: DecoderOptions,
    failed: Option<CommentError>,
}

impl<S> Decoder<S> {
    /// Wrap `source` with default options.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_options(source, DecoderOptions::default())
    }

    /// Wrap `source` with the given options.
    #[must_use]
    pub fn with_options(source: S, options: DecoderOptions) -> Self {
        Self {
            source,
            state: ScanState::new(),
            options,
            failed: None,
        }
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// The scan state carried into the next read.
    #[must_use]
    pub fn scan_state(&self) -> &ScanState {
        &self.state
    }

    /// Borrow the underlying source.
    #[must_use]
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Mutably borrow the underlying source. Reading from it directly skips
    /// those bytes as far as the scan state is concerned.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unwrap the underlying source.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: ByteSource> Decoder<S> {
    /// Read the next stripped bytes into `buf`, returning how many were
    /// produced. `Ok(0)` for a non-empty `buf` means the source is exhausted
    /// and every comment was closed.
    ///
    /// A chunk that strips down to nothing is not reported; the decoder keeps
    /// pulling until it has at least one byte or the source ends.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Source`] when the source fails; nothing is decoded.
    /// - [`DecodeError::Comment`] when the input ends inside a comment, or a
    ///   stray slash is rejected. The decoder is unusable afterwards: every
    ///   later call returns the same error.
    pub fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize, DecodeError<S::Error>> {
        if let Some(err) = self.failed {
            return Err(err.into());
        }
        if buf.is_empty() {
            return Ok(0);
        }

        loop {
            let n = self.source.pull(buf).map_err(DecodeError::Source)?;
            if n == 0 {
                tracing::trace!(
                    target: TRACE_TARGET,
                    offset = self.state.position().offset,
                    "source exhausted"
                );
                if let Err(err) = self.state.finish(&self.options) {
                    return Err(self.fail(err));
                }
                return Ok(0);
            }

            let kept = self.state.scan_in_place(&mut buf[..n], &self.options);
            tracing::trace!(
                target: TRACE_TARGET,
                read = n,
                kept = kept,
                phase = ?self.state.phase(),
                "stripped chunk"
            );

            if let Err(err) = self.state.check_stray_slash(&self.options) {
                return Err(self.fail(err));
            }
            if self.options.short_read_is_end_of_stream {
                if let Err(err) = self.state.finish(&self.options) {
                    return Err(self.fail(err));
                }
            }
            if kept > 0 {
                return Ok(kept);
            }
        }
    }

    fn fail(&mut self, err: CommentError) -> DecodeError<S::Error> {
        tracing::debug!(
            target: TRACE_TARGET,
            kind = ?err.kind(),
            line = err.line,
            column = err.column,
            "decode failed"
        );
        self.failed = Some(err);
        err.into()
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> std::io::Read for Decoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.read_chunk(buf).map_err(Into::into)
    }
}
