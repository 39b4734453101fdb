use std::fmt;
use std::io;

use crate::context::{CallSite, HeaderContext};
use crate::error::DebugError;
use crate::format::format_message;
use crate::header::DEFAULT_HEADER;
use crate::hex_dump::{dump_contiguous, dump_scattered};

/// The always-or-never-present switch and the call-site convenience layer.
///
/// Instead of branching on an "enabled" flag at every call, a
/// [`DebugLogger`] resolves one of two strategies when it is constructed:
/// a real backend that owns the header template and the output sink, or a
/// no-op backend that never touches the formatting core at all. Call sites
/// go through the `debug_log!` / `debug_hex!` / `debug_hex_iov!` macros,
/// which inject the file, function and line automatically.

/// Strategy interface behind [`DebugLogger`]. Implemented once for the real
/// path and once for the disabled no-op.
trait Backend: Send {
    fn log(&mut self, site: CallSite, args: fmt::Arguments<'_>) -> Result<usize, DebugError>;

    fn dump(
        &mut self,
        site: CallSite,
        buf: &[u8],
        caption: fmt::Arguments<'_>,
    ) -> Result<(), DebugError>;

    fn dump_vectored(
        &mut self,
        site: CallSite,
        segments: &[&[u8]],
        caption: fmt::Arguments<'_>,
    ) -> Result<(), DebugError>;

    fn is_enabled(&self) -> bool;
}

struct Enabled {
    template: &'static str,
    sink: Box<dyn io::Write + Send>,
}

impl Backend for Enabled {
    fn log(&mut self, site: CallSite, args: fmt::Arguments<'_>) -> Result<usize, DebugError> {
        let ctx = HeaderContext::capture(site);
        format_message(&mut self.sink, self.template, &ctx, args)
    }

    fn dump(
        &mut self,
        site: CallSite,
        buf: &[u8],
        caption: fmt::Arguments<'_>,
    ) -> Result<(), DebugError> {
        let ctx = HeaderContext::capture(site);
        dump_contiguous(&mut self.sink, self.template, &ctx, buf, caption)
    }

    fn dump_vectored(
        &mut self,
        site: CallSite,
        segments: &[&[u8]],
        caption: fmt::Arguments<'_>,
    ) -> Result<(), DebugError> {
        let ctx = HeaderContext::capture(site);
        dump_scattered(&mut self.sink, self.template, &ctx, segments, caption)
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// The disabled strategy: no context capture, no formatting, no I/O.
struct Disabled;

impl Backend for Disabled {
    fn log(&mut self, _site: CallSite, _args: fmt::Arguments<'_>) -> Result<usize, DebugError> {
        Ok(0)
    }

    fn dump(
        &mut self,
        _site: CallSite,
        _buf: &[u8],
        _caption: fmt::Arguments<'_>,
    ) -> Result<(), DebugError> {
        Ok(())
    }

    fn dump_vectored(
        &mut self,
        _site: CallSite,
        _segments: &[&[u8]],
        _caption: fmt::Arguments<'_>,
    ) -> Result<(), DebugError> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// A diagnostic logger with its strategy fixed at construction.
///
/// # Examples
///
/// ```
/// use debug_logger::{CallSite, DebugLogger};
///
/// let mut logger = DebugLogger::new("%B:%l: ", Vec::<u8>::new());
/// let site = CallSite { file: "src/main.rs", function: "main", line: 7 };
/// logger.log(site, format_args!("started")).unwrap();
/// ```
pub struct DebugLogger {
    backend: Box<dyn Backend>,
}

impl DebugLogger {
    /// A logger that formats with `template` and writes to `sink`.
    pub fn new(template: &'static str, sink: impl io::Write + Send + 'static) -> Self {
        Self {
            backend: Box::new(Enabled {
                template,
                sink: Box::new(sink),
            }),
        }
    }

    /// A logger writing to standard output with the default header.
    pub fn stdout() -> Self {
        Self::new(DEFAULT_HEADER, io::stdout())
    }

    /// The no-op strategy. Operations return immediately without capturing
    /// context or touching any sink.
    pub fn disabled() -> Self {
        Self {
            backend: Box::new(Disabled),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_enabled()
    }

    /// Formats one diagnostic line. Returns the logical length, which
    /// exceeds the buffer capacity when the line was truncated.
    pub fn log(&mut self, site: CallSite, args: fmt::Arguments<'_>) -> Result<usize, DebugError> {
        self.backend.log(site, args)
    }

    /// Dumps a contiguous byte range as hex rows under a caption line.
    pub fn dump(
        &mut self,
        site: CallSite,
        buf: &[u8],
        caption: fmt::Arguments<'_>,
    ) -> Result<(), DebugError> {
        self.backend.dump(site, buf, caption)
    }

    /// Dumps a list of disjoint byte ranges as one logical hex stream.
    pub fn dump_vectored(
        &mut self,
        site: CallSite,
        segments: &[&[u8]],
        caption: fmt::Arguments<'_>,
    ) -> Result<(), DebugError> {
        self.backend.dump_vectored(site, segments, caption)
    }
}

/// Process-wide default logger used by the call-site macros.
///
/// Starts out disabled; [`global::init`] installs the real strategy once at
/// startup. The mutex only serializes access to the default instance - the
/// formatting core itself needs no locking.
pub mod global {
    use lazy_static::lazy_static;
    use parking_lot::Mutex;

    use super::DebugLogger;

    lazy_static! {
        static ref DEFAULT: Mutex<DebugLogger> = Mutex::new(DebugLogger::disabled());
    }

    /// Installs the process-wide default logger. Intended to be called once
    /// during startup, before any of the macros run.
    pub fn init(logger: DebugLogger) {
        *DEFAULT.lock() = logger;
    }

    /// Runs `f` against the default logger.
    pub fn with<R>(f: impl FnOnce(&mut DebugLogger) -> R) -> R {
        f(&mut DEFAULT.lock())
    }
}

/// Expands to the [`CallSite`] of the enclosing function.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite {
            file: file!(),
            function: $crate::__function_path!(),
            line: line!(),
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        // Closures in the expansion path show up as trailing path segments.
        name.trim_end_matches("::{{closure}}")
    }};
}

/// Prints a diagnostic message through the default logger if `cond` is
/// true.
#[macro_export]
macro_rules! debug_log_cond {
    ($cond:expr, $($arg:tt)*) => {{
        if $cond {
            $crate::logger::global::with(|logger| {
                logger.log($crate::call_site!(), format_args!($($arg)*))
            })
        } else {
            ::core::result::Result::<usize, $crate::DebugError>::Ok(0)
        }
    }};
}

/// Always prints a diagnostic message through the default logger.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::debug_log_cond!(true, $($arg)*)
    };
}

/// Dumps a byte slice as hex rows through the default logger if `cond` is
/// true.
#[macro_export]
macro_rules! debug_hex_cond {
    ($cond:expr, $buf:expr, $($arg:tt)*) => {{
        if $cond {
            $crate::logger::global::with(|logger| {
                logger.dump($crate::call_site!(), $buf, format_args!($($arg)*))
            })
        } else {
            ::core::result::Result::<(), $crate::DebugError>::Ok(())
        }
    }};
}

/// Always dumps a byte slice as hex rows through the default logger.
#[macro_export]
macro_rules! debug_hex {
    ($buf:expr, $($arg:tt)*) => {
        $crate::debug_hex_cond!(true, $buf, $($arg)*)
    };
}

/// Dumps a segment list as one hex stream through the default logger if
/// `cond` is true.
#[macro_export]
macro_rules! debug_hex_iov_cond {
    ($cond:expr, $segments:expr, $($arg:tt)*) => {{
        if $cond {
            $crate::logger::global::with(|logger| {
                logger.dump_vectored($crate::call_site!(), $segments, format_args!($($arg)*))
            })
        } else {
            ::core::result::Result::<(), $crate::DebugError>::Ok(())
        }
    }};
}

/// Always dumps a segment list as one hex stream through the default
/// logger.
#[macro_export]
macro_rules! debug_hex_iov {
    ($segments:expr, $($arg:tt)*) => {
        $crate::debug_hex_iov_cond!(true, $segments, $($arg)*)
    };
}
