use std::fmt::{self, Write};

use crate::bounded_writer::BoundedWriter;
use crate::context::HeaderContext;

/// Header template expansion.
///
/// A header template is a plain string with embedded two-character
/// directives, each a `%` followed by one selector:
///
/// * `%%` - a literal percent character
/// * `%B` - final component of the file path
/// * `%f` - function in which the message is logged
/// * `%F` - full file path
/// * `%l` - line number
/// * `%p` - process id
/// * `%t` - thread id, where the platform has one
/// * `%T` - monotonic time as seconds.microseconds
///
/// An unrecognized selector expands to nothing. A bad template must never
/// cost the caller its diagnostic output, so this is a contract rather than
/// a fallback: the rest of the header and the message still get printed.

/// Header used by the call-site macros when no other template is given.
pub const DEFAULT_HEADER: &str = "%f:%l: ";

/// Expands `template` into `out`, substituting every directive from `ctx`.
///
/// Truncation is handled entirely by the writer; the only error that can
/// come back is a rendering failure from a numeric or time conversion, and
/// it aborts the expansion.
pub fn expand<const CAP: usize>(
    template: &str,
    ctx: &HeaderContext,
    out: &mut BoundedWriter<CAP>,
) -> fmt::Result {
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c == '%' {
            // A lone trailing '%' expands to nothing.
            if let Some(selector) = chars.next() {
                expand_directive(selector, ctx, out)?;
            }
        } else {
            out.write_char(c)?;
        }
    }
    Ok(())
}

fn expand_directive<const CAP: usize>(
    selector: char,
    ctx: &HeaderContext,
    out: &mut BoundedWriter<CAP>,
) -> fmt::Result {
    match selector {
        '%' => out.write_char('%'),
        'B' => out.write_str(basename(ctx.site.file)),
        'f' => out.write_str(ctx.site.function),
        'F' => out.write_str(ctx.site.file),
        'l' => write!(out, "{}", ctx.site.line),
        'p' => write!(out, "{}", ctx.pid),
        't' => match ctx.tid {
            Some(tid) => write!(out, "{}", tid),
            None => Ok(()),
        },
        'T' => write!(
            out,
            "{}.{:06}",
            ctx.monotonic.as_secs(),
            ctx.monotonic.subsec_micros()
        ),
        // Unknown selector: expand to nothing so some sort of a debug
        // string is still printed.
        _ => Ok(()),
    }
}

fn basename(path: &str) -> &str {
    match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}
