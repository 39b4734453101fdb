use debug_logger::{format_message, BoundedWriter, CallSite, DebugError, HeaderContext, BUF_CAP};
use std::fmt;
use std::io;
use std::time::Duration;

/// Sink that counts write calls and keeps everything it was given.
struct CountingSink {
    writes: usize,
    data: Vec<u8>,
}

impl CountingSink {
    fn new() -> Self {
        Self {
            writes: 0,
            data: Vec::new(),
        }
    }
}

impl io::Write for CountingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes += 1;
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that rejects every write.
struct FailingSink;

impl io::Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Display impl whose rendering fails, for exercising the encoding error
/// path.
struct PoisonedDisplay;

impl fmt::Display for PoisonedDisplay {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Err(fmt::Error)
    }
}

fn fixed_context() -> HeaderContext {
    HeaderContext {
        site: CallSite {
            file: "/a/b/c.ext",
            function: "do_work",
            line: 42,
        },
        pid: 1234,
        tid: Some(5678),
        monotonic: Duration::new(3, 250_000),
    }
}

#[test]
fn literal_template_is_emitted_verbatim() {
    let mut sink = Vec::new();
    let len = format_message(&mut sink, "just a header ", &fixed_context(), format_args!(""))
        .unwrap();
    assert_eq!(sink, b"just a header ");
    assert_eq!(len, sink.len());
}

#[test]
fn percent_escape_yields_one_percent() {
    let mut sink = Vec::new();
    format_message(&mut sink, "a%%b", &fixed_context(), format_args!("")).unwrap();
    assert_eq!(sink, b"a%b");
}

#[test]
fn basename_directive_strips_directories() {
    let mut sink = Vec::new();
    format_message(&mut sink, "%B:%l: ", &fixed_context(), format_args!("msg")).unwrap();
    assert_eq!(sink, b"c.ext:42: msg");
}

#[test]
fn full_header_expansion() {
    let mut sink = Vec::new();
    format_message(
        &mut sink,
        "%F %f %l %p %t %T ",
        &fixed_context(),
        format_args!("end"),
    )
    .unwrap();
    assert_eq!(sink, b"/a/b/c.ext do_work 42 1234 5678 3.000250 end");
}

#[test]
fn unknown_selector_does_not_abort_the_message() {
    let mut sink = Vec::new();
    let len = format_message(&mut sink, "x%Qy: ", &fixed_context(), format_args!("still here"))
        .unwrap();
    assert_eq!(sink, b"xy: still here");
    assert_eq!(len, sink.len());
}

#[test]
fn logical_length_reports_truncation() {
    let long = "x".repeat(300);
    let mut sink = Vec::new();
    let len = format_message(&mut sink, ">> ", &fixed_context(), format_args!("{}", long))
        .unwrap();

    // The true length comes back; the stored content is the untouched
    // prefix that fit.
    assert_eq!(len, 3 + 300);
    assert_eq!(sink.len(), BoundedWriter::<BUF_CAP>::limit());
    assert_eq!(&sink[..3], b">> ");
    assert!(sink[3..].iter().all(|&b| b == b'x'));
}

#[test]
fn exactly_one_write_per_successful_call() {
    let mut sink = CountingSink::new();
    format_message(&mut sink, "%B: ", &fixed_context(), format_args!("one line\r\n")).unwrap();
    assert_eq!(sink.writes, 1);
    assert_eq!(sink.data, b"c.ext: one line\r\n");
}

#[test]
fn output_error_propagates() {
    let mut sink = FailingSink;
    let err = format_message(&mut sink, "%B: ", &fixed_context(), format_args!("msg"))
        .unwrap_err();
    assert!(matches!(err, DebugError::Output(_)));
}

#[test]
fn encoding_error_aborts_before_any_write() {
    let mut sink = CountingSink::new();
    let err = format_message(
        &mut sink,
        "%B: ",
        &fixed_context(),
        format_args!("{}", PoisonedDisplay),
    )
    .unwrap_err();
    assert!(matches!(err, DebugError::Encoding(_)));
    assert_eq!(sink.writes, 0, "No sink write on error");
}

#[test]
fn identical_calls_produce_identical_output() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    let ctx = fixed_context();
    format_message(&mut first, "%p %t %T: ", &ctx, format_args!("v = {}", 9)).unwrap();
    format_message(&mut second, "%p %t %T: ", &ctx, format_args!("v = {}", 9)).unwrap();
    assert_eq!(first, second);
}
