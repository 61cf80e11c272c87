//! Where formatted output goes. A sink is either a writable stream or a callback;
//! dispatch picks the path by matching on the variant, and anything else is
//! reported as an [`Error::InvalidSink`] for the caller to record.

use crate::error::Error;
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Stream name → sink.
pub type SinkTable = HashMap<String, Sink>;

type Callback = dyn FnMut(&str) + Send;

/// One output destination.
pub enum Sink {
    /// Anything implementing `Write`.
    Stream(Box<dyn Write + Send>),
    /// Receives each payload as a string slice.
    Callback(Box<Callback>),
    /// A configured destination that resolved to neither a stream nor a callback,
    /// such as an unknown stream name in a config file. Every dispatch to it fails.
    Unusable(String),
}

impl Sink {
    #[must_use]
    pub fn stdout() -> Self {
        Self::Stream(Box::new(io::stdout()))
    }

    #[must_use]
    pub fn stderr() -> Self {
        Self::Stream(Box::new(io::stderr()))
    }

    /// Discards everything. Still a valid sink, unlike [`Sink::Unusable`].
    #[must_use]
    pub fn null() -> Self {
        Self::Stream(Box::new(io::sink()))
    }

    pub fn stream(writer: impl Write + Send + 'static) -> Self {
        Self::Stream(Box::new(writer))
    }

    pub fn callback(f: impl FnMut(&str) + Send + 'static) -> Self {
        Self::Callback(Box::new(f))
    }

    /// Resolves a config-file target name. Unknown names become [`Sink::Unusable`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "stdout" => Self::stdout(),
            "stderr" => Self::stderr(),
            "null" | "none" => Self::null(),
            _ => Self::Unusable(name.to_string()),
        }
    }

    /// Writes `payload`. Streams are flushed so control codes show up immediately.
    ///
    /// # Errors
    /// `InvalidSink` for an [`Sink::Unusable`] sink, `Io` when the stream fails.
    pub fn write(&mut self, stream: &str, payload: &str) -> Result<(), Error> {
        match self {
            Self::Stream(writer) => {
                writer.write_all(payload.as_bytes())?;
                writer.flush()?;
                Ok(())
            }
            Self::Callback(f) => {
                f(payload);
                Ok(())
            }
            Self::Unusable(_) => Err(Error::InvalidSink {
                stream: stream.to_string(),
            }),
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stream(_) => f.write_str("Stream(..)"),
            Self::Callback(_) => f.write_str("Callback(..)"),
            Self::Unusable(name) => f.debug_tuple("Unusable").field(name).finish(),
        }
    }
}

/// Looks up `stream` in `sinks` and writes `payload` to it. A missing entry fails
/// the same way an unusable one does.
///
/// # Errors
/// `InvalidSink` naming `stream` when there is no usable sink, `Io` on write failure.
#[allow(clippy::implicit_hasher)]
pub fn dispatch(sinks: &mut SinkTable, stream: &str, payload: &str) -> Result<(), Error> {
    match sinks.get_mut(stream) {
        Some(sink) => sink.write(stream, payload),
        None => Err(Error::InvalidSink {
            stream: stream.to_string(),
        }),
    }
}

/// Cloneable in-memory stream. Clones share one buffer, so a test can keep a
/// handle while the logger owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStream {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryStream {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    #[must_use]
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    pub fn clear(&self) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for MemoryStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
