//! Console output for host builds and emulated dispatches.
//!
//! There is no device behind the console. The embedder installs a sink,
//! a plain function taking a line of text, and everything printed with
//! [`print!`](crate::print) or [`println!`](crate::println) is buffered a
//! line at a time before it is handed over. Without a sink output is
//! dropped.

pub mod printf;

use crate::{sync::spinmutex::SpinMutex, Error};
use arrayvec::ArrayString;
use core::fmt;
use log::{LevelFilter, Log, Metadata, Record};

pub const LINE_BUF_SIZE: usize = 128;

/// Receives one line at a time, without the newline.
pub type Sink = fn(&str);

pub struct Line {
    buffer: ArrayString<LINE_BUF_SIZE>,
    sink: Option<Sink>,
}
impl Line {
    pub const fn new() -> Line {
        Line {
            buffer: ArrayString::new_const(),
            sink: None,
        }
    }
    pub fn flush(&mut self) {
        if let Some(sink) = self.sink {
            if !self.buffer.is_empty() {
                sink(&self.buffer);
            }
        }
        self.buffer.clear();
    }
    fn push(&mut self, c: char) {
        if c == '\n' {
            self.flush();
            return;
        }
        if self.buffer.try_push(c).is_err() {
            // Full: hand over what we have and start a new line.
            self.flush();
            let _ = self.buffer.try_push(c);
        }
    }
}
impl Default for Line {
    fn default() -> Line {
        Line::new()
    }
}
impl fmt::Write for Line {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            self.push(c);
        }
        Ok(())
    }
}

pub static LINE: SpinMutex<Line> = SpinMutex::new(Line::new());

/// Replaces the sink. Anything still buffered goes to the old one.
///
/// The sink runs with the line buffer locked and must not print or log.
pub fn set_sink(sink: Sink) {
    let mut line = LINE.lock();
    line.flush();
    line.sink = Some(sink);
}

/// `log` backend writing `[LEVEL target] message` lines to the console.
pub struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            crate::println!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }
    fn flush(&self) {
        printf::flush();
    }
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Installs `sink` and routes the `log` facade to it.
pub fn init(sink: Sink, level: LevelFilter) -> Result<(), Error> {
    set_sink(sink);
    log::set_logger(&LOGGER).map_err(|_| Error::LoggerAlreadySet)?;
    log::set_max_level(level);
    Ok(())
}
