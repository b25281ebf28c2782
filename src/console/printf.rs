use super::LINE;
use core::fmt::{self, Write};

/// Print out formatted text to the console sink.
/// Spins to acquire the line buffer.
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        $crate::console::printf::print_fmt(::core::format_args!($($arg)*))
    };
}

/// Like [`print!`], with a newline. The line is written under one lock,
/// so output from other threads never lands in the middle of it.
#[macro_export]
macro_rules! println {
    () => {
        $crate::print!("\n")
    };
    ($($arg:tt)*) => {
        $crate::console::printf::println_fmt(::core::format_args!($($arg)*))
    };
}

#[doc(hidden)]
pub fn print_fmt(args: fmt::Arguments) {
    let _ = LINE.lock().write_fmt(args);
}

#[doc(hidden)]
pub fn println_fmt(args: fmt::Arguments) {
    let mut line = LINE.lock();
    let _ = line.write_fmt(args);
    let _ = line.write_char('\n');
}

/// Pushes out whatever is buffered, even without a trailing newline.
///
/// Does nothing if the buffer is busy: whoever holds it hands the line
/// over at its next newline. This keeps a sink that flushes from
/// deadlocking on its own lock.
pub fn flush() {
    if let Some(mut line) = LINE.try_lock() {
        line.flush();
    }
}
