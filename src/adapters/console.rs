use crate::domain::ports::Console;
use std::io::{self, Write};

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn line(&mut self, text: &str) {
        write_line(&mut io::stdout().lock(), text);
    }
}

/// Writes one line. A failed write drops the line instead of panicking, so a
/// closed stdout pipe cannot abort a cleanup running during unwinding.
pub(crate) fn write_line<W: Write + ?Sized>(writer: &mut W, text: &str) {
    if let Err(e) = writeln!(writer, "{}", text) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            tracing::debug!("stdout closed, dropping console line");
        } else {
            tracing::debug!("console write failed: {}", e);
        }
    }
}

/// Keeps every line in memory.
#[derive(Debug, Default, Clone)]
pub struct BufferedConsole {
    pub lines: Vec<String>,
}

impl BufferedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl Console for BufferedConsole {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::CapturingSink;
    use crate::config::Scenario;
    use crate::core::demo::DemoRunner;

    /// Every write fails as if the reader end of the pipe had gone away.
    struct ClosedPipe {
        attempts: usize,
    }

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.attempts += 1;
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    struct ClosedPipeConsole(ClosedPipe);

    impl Console for ClosedPipeConsole {
        fn line(&mut self, text: &str) {
            write_line(&mut self.0, text);
        }
    }

    #[test]
    fn test_write_line_swallows_broken_pipe() {
        let mut pipe = ClosedPipe { attempts: 0 };
        write_line(&mut pipe, "lost");
        assert_eq!(pipe.attempts, 1);
    }

    #[test]
    fn test_write_line_writes_text_and_newline() {
        let mut buffer: Vec<u8> = Vec::new();
        write_line(&mut buffer, "Cleanup done after division operation.");
        assert_eq!(buffer, b"Cleanup done after division operation.\n");
    }

    #[test]
    fn test_run_completes_when_console_writes_fail() {
        let console = ClosedPipeConsole(ClosedPipe { attempts: 0 });
        let mut runner = DemoRunner::new(console, CapturingSink::new(), Scenario::default());
        let report = runner.run();

        assert_eq!(report.demonstrations, 4);
        assert_eq!(report.failures_contained, 4);
        assert_eq!(report.cleanups_run, 4);

        let (console, sink) = runner.into_parts();
        assert_eq!(sink.records.len(), 4);
        assert!(console.0.attempts > 0);
    }
}
