use std::fmt::{self, Write};

use crate::bounded_writer::BoundedWriter;
use crate::context::HeaderContext;
use crate::error::DebugError;
use crate::format::format_message;
use crate::sink::Sink;

/// Hexadecimal byte-range dumps.
///
/// Both dumpers emit a caption line through the message formatter, then the
/// bytes as fixed-width rows: a two-digit hex row ordinal, a colon, and up
/// to sixteen bytes, each rendered as two lowercase hex digits behind a
/// single-space separator. Each row is one sink write. The scattered
/// variant walks several disjoint buffers as one logical stream and marks
/// the first byte of every later segment with a `*` separator so segment
/// boundaries stay visible without breaking row alignment.

/// Number of bytes per dump row.
pub const N_ROW_ITEMS: usize = 16;

/// Line terminator for dump rows, configurable only by recompilation.
pub const EOL: &str = "\r\n";

/// Capacity of the per-row buffer. A full row is 53 bytes of text, so rows
/// are never truncated in practice.
const ROW_CAP: usize = 256;

/// Dumps one contiguous byte range.
///
/// The caption goes out first via [`format_message`]; the dump proceeds
/// regardless of caption truncation. `ceil(buf.len() / 16)` rows follow,
/// the last possibly short. A zero-length range emits the caption and no
/// rows. The first error from any rendering or write step aborts the
/// remaining rows.
pub fn dump_contiguous<S: Sink + ?Sized>(
    sink: &mut S,
    template: &str,
    ctx: &HeaderContext,
    buf: &[u8],
    caption: fmt::Arguments<'_>,
) -> Result<(), DebugError> {
    format_message(sink, template, ctx, caption)?;

    for (row, chunk) in buf.chunks(N_ROW_ITEMS).enumerate() {
        let mut line = BoundedWriter::<ROW_CAP>::new();

        write!(line, "{:02x}:", row)?;
        for byte in chunk {
            write!(line, " {:02x}", byte)?;
        }
        line.write_str(EOL)?;

        sink.write_chunk(line.as_bytes())?;
    }

    Ok(())
}

/// Dumps an ordered list of disjoint byte ranges as one logical stream.
///
/// Output is byte-for-byte what [`dump_contiguous`] would produce for the
/// concatenation of the segments, except that the separator in front of the
/// first byte of each segment after the first is `*` instead of a space.
/// Empty segments contribute no bytes; the marker lands on the first byte
/// of the next non-empty segment. The final partial row is flushed once all
/// segments are exhausted.
pub fn dump_scattered<S: Sink + ?Sized>(
    sink: &mut S,
    template: &str,
    ctx: &HeaderContext,
    segments: &[&[u8]],
    caption: fmt::Arguments<'_>,
) -> Result<(), DebugError> {
    format_message(sink, template, ctx, caption)?;

    let mut line = BoundedWriter::<ROW_CAP>::new();
    let mut index = 0usize;

    for (byte, starts_segment) in SegmentStream::new(segments) {
        if index % N_ROW_ITEMS == 0 {
            write!(line, "{:02x}:", index / N_ROW_ITEMS)?;
        }

        let sep = if starts_segment { '*' } else { ' ' };
        write!(line, "{}{:02x}", sep, byte)?;

        index += 1;
        if index % N_ROW_ITEMS == 0 {
            line.write_str(EOL)?;
            sink.write_chunk(line.as_bytes())?;
            line.clear();
        }
    }

    if index % N_ROW_ITEMS != 0 {
        line.write_str(EOL)?;
        sink.write_chunk(line.as_bytes())?;
    }

    Ok(())
}

/// Flattens a segment list into one byte stream.
///
/// Yields each byte together with a flag marking the first byte of every
/// segment after the first, which is how the row renderer knows where to
/// place the boundary marker. Keeps the row-width logic above decoupled
/// from segment-boundary bookkeeping.
pub struct SegmentStream<'a> {
    segments: &'a [&'a [u8]],
    seg: usize,
    off: usize,
}

impl<'a> SegmentStream<'a> {
    pub fn new(segments: &'a [&'a [u8]]) -> Self {
        Self {
            segments,
            seg: 0,
            off: 0,
        }
    }
}

impl<'a> Iterator for SegmentStream<'a> {
    /// A byte and whether it opens a segment other than the first.
    type Item = (u8, bool);

    fn next(&mut self) -> Option<(u8, bool)> {
        let mut crossed = false;
        while self.seg < self.segments.len() && self.off >= self.segments[self.seg].len() {
            self.seg += 1;
            self.off = 0;
            crossed = true;
        }
        if self.seg >= self.segments.len() {
            return None;
        }

        let byte = self.segments[self.seg][self.off];
        self.off += 1;
        Some((byte, crossed))
    }
}
