use std::fmt;

/// Fixed-capacity text buffer with truncation-safe length accounting.
///
/// This module provides the single bounded-write primitive shared by the
/// header expander, the message formatter and the hex row renderer. All of
/// the remaining-capacity arithmetic lives here so the callers never have to
/// repeat it.

/// A stack-allocated writer with a hard capacity and `snprintf`-style
/// accounting.
///
/// The writer stores at most `CAP - 1` bytes (one slot is always kept in
/// reserve) but keeps counting every byte offered to it. Callers detect
/// truncation by comparing the logical length against the stored length:
///
/// 1. Text written while room remains is stored verbatim
/// 2. Text beyond the limit is dropped, never stored partially out of order
/// 3. `logical_len()` always reports the length an unbounded write would
///    have produced
///
/// # Type Parameters
///
/// * `CAP` - The capacity of the backing buffer in bytes
///
/// # Examples
///
/// ```
/// use std::fmt::Write;
/// use debug_logger::BoundedWriter;
///
/// let mut w = BoundedWriter::<8>::new();
/// write!(w, "abcdefghij").unwrap();
///
/// // Only CAP - 1 bytes are retained, but the full length is counted.
/// assert_eq!(w.as_bytes(), b"abcdefg");
/// assert_eq!(w.logical_len(), 10);
/// assert!(w.is_truncated());
/// ```
pub struct BoundedWriter<const CAP: usize> {
    buf: [u8; CAP],
    stored: usize,
    logical: usize,
}

impl<const CAP: usize> BoundedWriter<CAP> {
    /// Creates an empty writer.
    pub const fn new() -> Self {
        Self {
            buf: [0u8; CAP],
            stored: 0,
            logical: 0,
        }
    }

    /// Number of bytes the writer will actually retain.
    ///
    /// One slot of the backing buffer is always reserved, so this is
    /// `CAP - 1`.
    pub const fn limit() -> usize {
        CAP - 1
    }

    /// Appends raw bytes, storing as many as still fit.
    ///
    /// Bytes past the limit are dropped but still counted toward the
    /// logical length. Stored content is always a prefix of the full
    /// logical output.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.logical += bytes.len();

        let room = Self::limit() - self.stored;
        let take = bytes.len().min(room);
        self.buf[self.stored..self.stored + take].copy_from_slice(&bytes[..take]);
        self.stored += take;
    }

    /// The stored (possibly truncated) contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.stored]
    }

    /// Number of bytes actually stored.
    pub fn stored_len(&self) -> usize {
        self.stored
    }

    /// The length an unbounded rendering would have had.
    ///
    /// May exceed `limit()`; that is how callers detect truncation, exactly
    /// as with the return value of a truncating formatted-print call.
    pub fn logical_len(&self) -> usize {
        self.logical
    }

    /// True if any byte offered to the writer was dropped.
    pub fn is_truncated(&self) -> bool {
        self.logical > self.stored
    }

    /// Resets the writer for reuse without touching the backing storage.
    pub fn clear(&mut self) {
        self.stored = 0;
        self.logical = 0;
    }
}

impl<const CAP: usize> Default for BoundedWriter<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> fmt::Write for BoundedWriter<CAP> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_bytes(s.as_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write;

    #[test]
    fn stores_everything_under_capacity() {
        let mut w = BoundedWriter::<32>::new();
        write!(w, "hello {}", 42).unwrap();
        assert_eq!(w.as_bytes(), b"hello 42");
        assert_eq!(w.logical_len(), 8);
        assert!(!w.is_truncated());
    }

    #[test]
    fn reserves_one_slot() {
        let mut w = BoundedWriter::<4>::new();
        write!(w, "abc").unwrap();
        assert_eq!(w.as_bytes(), b"abc");
        assert!(!w.is_truncated());

        write!(w, "d").unwrap();
        assert_eq!(w.as_bytes(), b"abc");
        assert_eq!(w.logical_len(), 4);
        assert!(w.is_truncated());
    }

    #[test]
    fn stored_is_min_of_logical_and_limit() {
        let mut w = BoundedWriter::<8>::new();
        for i in 0..20 {
            w.push_bytes(&[b'a' + (i % 26) as u8]);
            assert_eq!(w.stored_len(), w.logical_len().min(BoundedWriter::<8>::limit()));
        }
    }

    #[test]
    fn truncation_keeps_leading_bytes() {
        let mut w = BoundedWriter::<8>::new();
        write!(w, "0123456789abcdef").unwrap();
        assert_eq!(w.as_bytes(), b"0123456");
        assert_eq!(w.logical_len(), 16);
    }

    #[test]
    fn clear_resets_both_counters() {
        let mut w = BoundedWriter::<8>::new();
        write!(w, "overflowing input").unwrap();
        w.clear();
        assert_eq!(w.as_bytes(), b"");
        assert_eq!(w.logical_len(), 0);
        write!(w, "ok").unwrap();
        assert_eq!(w.as_bytes(), b"ok");
    }
}
