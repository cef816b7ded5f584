/// A pull-based producer of bytes for [`Decoder`](crate::Decoder).
///
/// With the `std` feature every [`std::io::Read`] is a `ByteSource`.
pub trait ByteSource {
    /// Error reported by the source; [`Decoder`](crate::Decoder) passes it
    /// through untouched.
    type Error;

    /// Fill the front of `buf` with up to `buf.len()` bytes and return how
    /// many were written. `Ok(0)` for a non-empty `buf` means the source is
    /// exhausted; any other count may be short without implying that.
    ///
    /// # Errors
    ///
    /// Whatever the source fails with.
    fn pull(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

#[cfg(feature = "std")]
impl<R: std::io::Read + ?Sized> ByteSource for R {
    type Error = std::io::Error;

    #[inline]
    fn pull(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.read(buf)
    }
}

#[cfg(not(feature = "std"))]
impl ByteSource for &[u8] {
    type Error = core::convert::Infallible;

    fn pull(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = core::cmp::min(buf.len(), self.len());
        let (head, tail) = self.split_at(n);
        buf[..n].copy_from_slice(head);
        *self = tail;
        Ok(n)
    }
}
