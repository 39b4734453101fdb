use std::io;

/// The seam between formatting and I/O.
///
/// The formatter and the dumpers never talk to a stream directly; they hand
/// each fully assembled line or row to a `Sink` in one call. Whatever
/// serialization or interleaving guarantees exist for concurrent callers
/// are the sink's to provide - the core only guarantees that no line is
/// ever split across calls.
pub trait Sink {
    /// Writes one complete line or row. No partial-write recovery is
    /// attempted; a failure is returned to the caller unchanged.
    fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()>;
}

/// Every writer is a sink; `Vec<u8>` for tests, `io::stdout()` or a file
/// for real use.
impl<W: io::Write> Sink for W {
    fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.write_all(chunk)
    }
}
