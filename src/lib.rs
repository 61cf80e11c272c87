//! `footstep` - a configurable, styled console logger.
//!
//! - Leveled output (verbose, info, error, warning, notice, debug, log)
//! - `{{placeholder}}` format templates with static or computed values
//! - Named ANSI styles generated from a code table, plus stripping
//! - Pluggable sinks: any `Write` stream or a callback
//! - Bounded history of recent records, including write failures
//!
//! # Example
//!
//! ```
//! use footstep::{Logger, Overrides, Sink};
//!
//! let mut logger = Logger::new(
//!     Overrides::new()
//!         .format("{{type}}: {{message}}")
//!         .format_fn("type", |data| data.level.to_string())
//!         .eol("")
//!         .stream("info", Sink::null()),
//! );
//!
//! logger.info("Application started").warning("Disk almost full");
//!
//! let history = logger.past_logs();
//! assert_eq!(history.len(), 2);
//! assert_eq!(history.first().map(|r| r.output.as_str()), Some("info: Application started"));
//! ```

pub mod config;
mod error;
pub mod fmt;
pub mod history;
pub mod internal;
pub mod level;
pub mod logger;
mod macros;
pub mod options;
pub mod sink;

pub use config::Config;
pub use error::Error;
pub use fmt::{Alignment, FormatData, FormatTemplate, FormatValue, pad, strip, style, style_all};
pub use history::{HistoryBuffer, LogRecord};
pub use level::Level;
pub use logger::Logger;
pub use options::{ClearCodes, Format, Options, Overrides};
pub use sink::{MemoryStream, Sink, SinkTable};
