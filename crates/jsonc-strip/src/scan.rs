//! Comment state machine.
//!
//! [`ScanState`] classifies one byte at a time: either the byte belongs in
//! the stripped output, or it is whitespace outside a string, or it is part
//! of a comment. The state is a plain `Copy` value; whoever drives the scan
//! owns it and threads it from one window of input to the next, which is what
//! lets a comment straddle chunk boundaries.
//!
//! Invariants
//! - `phase == Idle` iff no comment (or comment-opening `/`) is pending; only
//!   then may input end.
//! - `in_string` flips on every `"` seen while idle and is never touched
//!   inside a comment.
//! - `is_multi_line` is reset whenever the machine returns to idle.
//! - Kept bytes are compacted to the front of the scanned window, so output
//!   never needs more room than input. Keep/drop boundaries only fall on
//!   ASCII bytes, so valid UTF-8 stays valid UTF-8.

use bstr::ByteSlice;

use crate::{
    error::{CommentError, ErrorKind},
    options::DecoderOptions,
};

/// What kind of byte the scanner expects next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Ordinary JSON content.
    #[default]
    Idle,
    /// Saw a single `/`; the next byte decides the comment kind.
    CommentOpening,
    /// Inside a comment body.
    InComment,
    /// Saw a possible terminator lead-in (`*`) inside a comment.
    CommentClosing,
}

/// A location in the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Bytes consumed before this position.
    pub offset: u64,
    /// 1-based line.
    pub line: usize,
    /// 1-based column, counted in bytes.
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Position {
    #[inline]
    fn advance(&mut self, byte: u8) {
        self.offset += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    fn advance_run(&mut self, run: &[u8]) {
        self.offset += run.len() as u64;
        match run.rfind_byte(b'\n') {
            Some(last) => {
                self.line += run.iter().filter(|&&b| b == b'\n').count();
                self.column = run.len() - last;
            }
            None => self.column += run.len(),
        }
    }
}

/// Scanning state persisted between windows of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanState {
    phase: Phase,
    is_multi_line: bool,
    in_string: bool,
    position: Position,
    comment_start: Position,
    stray_slash: Option<Position>,
}

impl ScanState {
    /// An idle state positioned at the start of input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the scan may end here without leaving a comment open.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Whether the scanner believes it is between two quotes.
    #[must_use]
    pub fn in_string(&self) -> bool {
        self.in_string
    }

    /// Whether the open comment is a block comment. Only meaningful while a
    /// comment is open.
    #[must_use]
    pub fn is_multi_line(&self) -> bool {
        self.is_multi_line
    }

    /// Position of the next byte to be scanned.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Position of the `/` that opened the current (or most recent) comment.
    #[must_use]
    pub fn comment_start(&self) -> Position {
        self.comment_start
    }

    /// Position of the first `/` that did not open a comment, if any.
    #[must_use]
    pub fn stray_slash(&self) -> Option<Position> {
        self.stray_slash
    }

    /// Classify one byte, returning whether it belongs in the output.
    #[inline]
    pub fn step(&mut self, byte: u8, options: &DecoderOptions) -> bool {
        let keep = match self.phase {
            Phase::Idle => self.idle(byte),
            Phase::CommentOpening => {
                self.comment_opening(byte);
                false
            }
            Phase::InComment => {
                self.in_comment(byte, options);
                false
            }
            Phase::CommentClosing => {
                self.comment_closing(byte, options);
                false
            }
        };
        self.position.advance(byte);
        keep
    }

    /// Scan `buf`, moving kept bytes to its front. Returns the kept length.
    ///
    /// Runs whose fate is known up front (string contents, comment bodies)
    /// are skipped with a byte search instead of stepping through them.
    pub fn scan_in_place(&mut self, buf: &mut [u8], options: &DecoderOptions) -> usize {
        let mut write = 0;
        let mut read = 0;
        while read < buf.len() {
            let rest = &buf[read..];
            let (run, keep) = match self.phase {
                Phase::Idle if self.in_string => {
                    (rest.find_byte(b'"').unwrap_or(rest.len()), true)
                }
                Phase::InComment => (
                    rest.find_byteset(self.comment_stops(options))
                        .unwrap_or(rest.len()),
                    false,
                ),
                _ => (0, false),
            };
            if run > 0 {
                self.position.advance_run(&buf[read..read + run]);
                if keep {
                    buf.copy_within(read..read + run, write);
                    write += run;
                }
                read += run;
                continue;
            }

            let byte = buf[read];
            if self.step(byte, options) {
                buf[write] = byte;
                write += 1;
            }
            read += 1;
        }
        write
    }

    /// Judge the state at the genuine end of input.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::StraySlash`] if a stray slash was seen and the options
    /// reject them, otherwise [`ErrorKind::UnexpectedEndOfComment`] if a
    /// comment is still open.
    pub fn finish(&self, options: &DecoderOptions) -> Result<(), CommentError> {
        self.check_stray_slash(options)?;
        if self.is_complete() {
            Ok(())
        } else {
            Err(CommentError::new(
                ErrorKind::UnexpectedEndOfComment,
                self.comment_start,
            ))
        }
    }

    /// Fail if a stray slash was seen and the options reject them.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::StraySlash`], positioned at the first stray slash.
    pub fn check_stray_slash(&self, options: &DecoderOptions) -> Result<(), CommentError> {
        match self.stray_slash {
            Some(at) if options.reject_stray_slash => {
                Err(CommentError::new(ErrorKind::StraySlash, at))
            }
            _ => Ok(()),
        }
    }

    fn idle(&mut self, byte: u8) -> bool {
        if byte == b'"' {
            self.in_string = !self.in_string;
            return true;
        }
        if self.in_string {
            return true;
        }
        match byte {
            b' ' | b'\t' | b'\n' | b'\r' => false,
            b'/' => {
                self.phase = Phase::CommentOpening;
                self.comment_start = self.position;
                false
            }
            _ => true,
        }
    }

    fn comment_opening(&mut self, byte: u8) {
        match byte {
            b'*' => {
                self.is_multi_line = true;
                self.phase = Phase::InComment;
            }
            b'/' => {
                self.is_multi_line = false;
                self.phase = Phase::InComment;
            }
            _ => {
                if self.stray_slash.is_none() {
                    self.stray_slash = Some(self.comment_start);
                }
            }
        }
    }

    fn in_comment(&mut self, byte: u8, options: &DecoderOptions) {
        let legacy = options.escaped_newline_ends_comment;
        match byte {
            b'*' if self.is_multi_line || legacy => self.phase = Phase::CommentClosing,
            b'\\' if legacy => self.phase = Phase::CommentClosing,
            b'\n' if !self.is_multi_line => self.reset(),
            _ => {}
        }
    }

    fn comment_closing(&mut self, byte: u8, options: &DecoderOptions) {
        match byte {
            b'/' => self.reset(),
            b'n' if options.escaped_newline_ends_comment => self.reset(),
            _ => {
                // not a terminator after all; `**/` and line breaks still count
                self.phase = Phase::InComment;
                self.in_comment(byte, options);
            }
        }
    }

    /// Bytes that may change the phase while inside a comment body.
    fn comment_stops(&self, options: &DecoderOptions) -> &'static [u8] {
        match (self.is_multi_line, options.escaped_newline_ends_comment) {
            (_, true) => b"*\\\n",
            (true, false) => b"*",
            (false, false) => b"\n",
        }
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.is_multi_line = false;
    }
}
