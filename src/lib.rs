//! # Debug Logger
//!
//! A minimal diagnostic-logging primitive meant to be compiled into other
//! programs as an always-or-never-present facility:
//!
//! * **Configurable headers**: every message is prefixed by an expanded
//!   header template carrying file, function, line, pid, thread id and
//!   monotonic time
//! * **Bounded formatting**: everything renders into fixed-capacity stack
//!   buffers; over-long output is truncated, never grown, and the logical
//!   length is reported so callers can detect it
//! * **Hex dumps**: raw byte ranges - one buffer or several disjoint
//!   segments treated as one stream - rendered as fixed-width hex rows
//!
//! It is deliberately not a logging framework: no levels, no filtering, no
//! persistence, no async I/O.
//!
//! ## Main Components
//!
//! * `BoundedWriter`: fixed-capacity buffer with truncation-safe accounting
//! * `format_message`: header expansion plus user message, one sink write
//! * `dump_contiguous` / `dump_scattered`: hex-table dumps of byte ranges
//! * `DebugLogger`: enabled/disabled strategy facade with a process-wide
//!   default instance behind the `debug_log!` family of macros
//!
//! ## Quick Start
//!
//! ```
//! use debug_logger::{debug_log, debug_hex, global, DebugLogger};
//!
//! // Resolve the strategy once at startup.
//! global::init(DebugLogger::new("%B:%l: ", std::io::stdout()));
//!
//! debug_log!("starting up\r\n").unwrap();
//! debug_hex!(&[0xde, 0xad, 0xbe, 0xef], "payload:\r\n").unwrap();
//! ```

pub mod bounded_writer;
pub mod context;
pub mod error;
pub mod format;
pub mod header;
pub mod hex_dump;
pub mod logger;
pub mod sink;

pub use bounded_writer::BoundedWriter;
pub use context::{CallSite, HeaderContext};
pub use error::DebugError;
pub use format::{format_message, BUF_CAP};
pub use header::DEFAULT_HEADER;
pub use hex_dump::{dump_contiguous, dump_scattered, SegmentStream, EOL, N_ROW_ITEMS};
pub use logger::{global, DebugLogger};
pub use sink::Sink;
