//! `tracing` output routed to the browser console.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Console method an event is written with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleSink {
    Error,
    Warn,
    Info,
    Debug,
    Log,
}

impl ConsoleSink {
    pub fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => ConsoleSink::Error,
            Level::WARN => ConsoleSink::Warn,
            Level::INFO => ConsoleSink::Info,
            _ => ConsoleSink::Debug,
        }
    }
}

/// Buffers one formatted event and hands it to the console on drop.
pub struct ConsoleLine {
    sink: ConsoleSink,
    buf: Vec<u8>,
}

impl ConsoleLine {
    fn new(sink: ConsoleSink) -> Self {
        Self { sink, buf: Vec::with_capacity(128) }
    }

    pub fn sink(&self) -> ConsoleSink {
        self.sink
    }
}

impl io::Write for ConsoleLine {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        match self.sink {
            ConsoleSink::Error => gloo::console::error!(line),
            ConsoleSink::Warn => gloo::console::warn!(line),
            ConsoleSink::Info => gloo::console::info!(line),
            ConsoleSink::Debug => gloo::console::debug!(line),
            ConsoleSink::Log => gloo::console::log!(line),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleWriter;

impl<'a> MakeWriter<'a> for ConsoleWriter {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> ConsoleLine {
        ConsoleLine::new(ConsoleSink::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> ConsoleLine {
        ConsoleLine::new(ConsoleSink::for_level(meta.level()))
    }
}

/// Install the console subscriber. Later calls are ignored.
pub fn init(max_level: Level) {
    // The wasm target has no wall clock, so timestamps are dropped.
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleWriter)
        .with_max_level(max_level)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_matching_console_methods() {
        assert_eq!(ConsoleSink::for_level(&Level::ERROR), ConsoleSink::Error);
        assert_eq!(ConsoleSink::for_level(&Level::WARN), ConsoleSink::Warn);
        assert_eq!(ConsoleSink::for_level(&Level::INFO), ConsoleSink::Info);
        assert_eq!(ConsoleSink::for_level(&Level::DEBUG), ConsoleSink::Debug);
        assert_eq!(ConsoleSink::for_level(&Level::TRACE), ConsoleSink::Debug);
    }
}
