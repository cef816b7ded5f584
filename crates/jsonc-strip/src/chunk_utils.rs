use alloc::vec::Vec;

/// Split `payload` into approximately equal-sized chunks.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    let chunk_size = payload.len().div_ceil(parts).max(1);
    payload.chunks(chunk_size).collect()
}

/// Split `payload` at sizes derived from `splits`; each size is taken modulo
/// the remaining length (plus one), and whatever is left after the last split
/// becomes the final chunk. Never yields an empty chunk.
#[must_use]
pub fn partition<'a>(payload: &'a [u8], splits: &[usize]) -> Vec<&'a [u8]> {
    let mut chunks = Vec::with_capacity(splits.len() + 1);
    let mut rest = payload;
    for &s in splits {
        if rest.is_empty() {
            break;
        }
        let size = 1 + (s % rest.len());
        let (head, tail) = rest.split_at(size);
        chunks.push(head);
        rest = tail;
    }
    if !rest.is_empty() {
        chunks.push(rest);
    }
    chunks
}

/// A source that hands out pre-split chunks, one per read, never more than
/// the caller's buffer holds. Mimics a socket or pipe delivering short reads.
#[derive(Debug, Clone)]
pub struct ChunkedSource<'a> {
    chunks: Vec<&'a [u8]>,
    next: usize,
    offset: usize,
}

impl<'a> ChunkedSource<'a> {
    /// A source yielding `chunks` in order.
    #[must_use]
    pub fn new(chunks: Vec<&'a [u8]>) -> Self {
        Self {
            chunks,
            next: 0,
            offset: 0,
        }
    }

    fn fill(&mut self, buf: &mut [u8]) -> usize {
        while let Some(chunk) = self.chunks.get(self.next) {
            let rest = &chunk[self.offset..];
            if rest.is_empty() {
                self.next += 1;
                self.offset = 0;
                continue;
            }
            let n = core::cmp::min(rest.len(), buf.len());
            buf[..n].copy_from_slice(&rest[..n]);
            self.offset += n;
            return n;
        }
        0
    }
}

#[cfg(feature = "std")]
impl std::io::Read for ChunkedSource<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        Ok(self.fill(buf))
    }
}

#[cfg(not(feature = "std"))]
impl crate::ByteSource for ChunkedSource<'_> {
    type Error = core::convert::Infallible;

    fn pull(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(self.fill(buf))
    }
}
