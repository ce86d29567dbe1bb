//! Styled terminal output for build progress.
//!
//! Uses `anstyle` for styles and `anstream` for terminal detection, so piped
//! output degrades to plain text.

use anstyle::{AnsiColor, Color, Effects, Style};
use std::io::{self, Write};

const SUCCESS: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));
const WARNING: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));
const HEADER: Style = Style::new().effects(Effects::BOLD);
const PATH: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));
const DIM: Style = Style::new().effects(Effects::DIMMED);

/// Writes one line. Write errors (e.g. a closed pipe) are dropped.
fn emit(mut out: impl Write, line: std::fmt::Arguments<'_>) {
    if let Err(e) = out.write_fmt(line).and_then(|()| out.write_all(b"\n")) {
        if e.kind() != io::ErrorKind::BrokenPipe {
            log::debug!("Console write failed: {}", e);
        }
    }
}

/// Output manager for colored terminal output
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager.
    ///
    /// `quiet` suppresses all output; `verbose` additionally
    /// prints tool output and diagnostics.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a message only in verbose mode
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            emit(anstream::stdout().lock(), format_args!("{DIM}{message}{DIM:#}"));
        }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            emit(anstream::stdout().lock(), format_args!("{SUCCESS}✓{SUCCESS:#} {message}"));
        }
    }

    pub fn warn(&self, message: &str) {
        if !self.quiet {
            emit(anstream::stdout().lock(), format_args!("{WARNING}! {message}{WARNING:#}"));
        }
    }

    pub fn progress(&self, message: &str) {
        if !self.quiet {
            emit(anstream::stdout().lock(), format_args!("{PATH}→{PATH:#} {message}"));
        }
    }

    /// Print a step header, e.g. `Running "api" task`
    pub fn section(&self, title: &str) {
        if !self.quiet {
            emit(anstream::stdout().lock(), format_args!("\n{HEADER}{title}{HEADER:#}"));
        }
    }

    /// Print tool output indented under the current step
    pub fn indent(&self, message: &str) {
        if self.verbose && !self.quiet {
            emit(anstream::stdout().lock(), format_args!("    {message}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe {
        attempts: usize,
    }

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.attempts += 1;
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_are_dropped() {
        let mut pipe = ClosedPipe { attempts: 0 };
        emit(&mut pipe, format_args!("Running \"api\" task"));
        assert_eq!(pipe.attempts, 1);
    }

    #[test]
    fn successful_writes_end_with_newline() {
        let mut buf = Vec::new();
        emit(&mut buf, format_args!("{}", "done"));
        assert_eq!(buf, b"done\n");
    }
}
