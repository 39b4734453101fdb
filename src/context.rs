use std::process;
use std::time::{Duration, Instant};

use lazy_static::lazy_static;

/// Call-site and process identity for header expansion.
///
/// The header expander never queries the process itself; everything it can
/// substitute is collected here first. That keeps expansion deterministic
/// under test, where a context can simply be constructed by hand.

/// Location of the logging call, captured by the call-site macros from
/// `file!()`, the enclosing function path and `line!()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub function: &'static str,
    pub line: u32,
}

/// Everything a header template can substitute: the call site plus the
/// process identity and the monotonic clock reading for this call.
///
/// Identity and clock are sampled once, when the context is captured, not
/// per directive. Two `%T` directives in one template therefore render the
/// same instant.
#[derive(Clone, Copy, Debug)]
pub struct HeaderContext {
    pub site: CallSite,
    pub pid: u32,
    /// Thread id as exposed by the platform; `None` where there is none.
    pub tid: Option<i32>,
    /// Monotonic time elapsed since the process-wide epoch.
    pub monotonic: Duration,
}

impl HeaderContext {
    /// Captures the live process state for one formatting call.
    pub fn capture(site: CallSite) -> Self {
        Self {
            site,
            pid: process::id(),
            tid: thread_id(),
            monotonic: monotonic_now(),
        }
    }
}

lazy_static! {
    /// Epoch for the `%T` directive. Fixed at first use so all timestamps
    /// within one process run share a base.
    static ref MONOTONIC_EPOCH: Instant = Instant::now();
}

/// Monotonic time elapsed since the process-wide epoch.
pub fn monotonic_now() -> Duration {
    MONOTONIC_EPOCH.elapsed()
}

/// Kernel thread id on Linux.
#[cfg(target_os = "linux")]
pub fn thread_id() -> Option<i32> {
    // SAFETY: gettid has no preconditions and cannot fail.
    Some(unsafe { libc::gettid() })
}

/// No portable numeric thread id elsewhere; `%t` expands to empty text.
#[cfg(not(target_os = "linux"))]
pub fn thread_id() -> Option<i32> {
    None
}
