use std::fmt::{self, Write};

use crate::bounded_writer::BoundedWriter;
use crate::context::HeaderContext;
use crate::error::DebugError;
use crate::header;
use crate::sink::Sink;

/// The bounded message formatter: header expansion plus the user message,
/// assembled in one fixed-capacity buffer and emitted in one sink write.

/// Capacity of the message buffer. Headers or messages that would overflow
/// it are silently truncated, never grown.
pub const BUF_CAP: usize = 256;

/// Formats one diagnostic line and writes it to `sink`.
///
/// The header template is expanded first, then `args` is rendered after it
/// into the same buffer. On success the stored bytes go to the sink in
/// exactly one write and the *logical* length of the line is returned; a
/// value larger than the buffer capacity means the line was truncated,
/// mirroring the truncating formatted-print convention. Callers may ignore
/// that safely.
///
/// On any error nothing is written to the sink.
///
/// # Examples
///
/// ```
/// use debug_logger::{format_message, CallSite, HeaderContext};
///
/// let ctx = HeaderContext::capture(CallSite {
///     file: "src/main.rs",
///     function: "main",
///     line: 10,
/// });
/// let mut out = Vec::new();
/// let len = format_message(&mut out, "%B:%l: ", &ctx, format_args!("x = {}", 3)).unwrap();
/// assert_eq!(out, b"main.rs:10: x = 3");
/// assert_eq!(len, out.len());
/// ```
pub fn format_message<S: Sink + ?Sized>(
    sink: &mut S,
    template: &str,
    ctx: &HeaderContext,
    args: fmt::Arguments<'_>,
) -> Result<usize, DebugError> {
    let mut out = BoundedWriter::<BUF_CAP>::new();

    header::expand(template, ctx, &mut out)?;
    out.write_fmt(args)?;

    sink.write_chunk(out.as_bytes())?;
    Ok(out.logical_len())
}
