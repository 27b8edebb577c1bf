//! Scoped Log Capture
//!
//! The original harness captured its debug transcript by reassigning the
//! process-wide console and restoring it at the end of the run. Here the
//! capture is a value owned by the suite driver: lines flow through one
//! [`RunLog`], the buffer lives exactly as long as the run, and release on
//! every exit path falls out of ownership instead of a restore step.

use goudbench_oracle::LogLevel;

/// Print surface for a single run, with optional transcript capture.
///
/// Capture is active iff the run's log level is `debug` or higher; every line
/// that reaches the terminal is then also recorded for the transcript.
#[derive(Debug)]
pub struct RunLog {
    level: LogLevel,
    captured: Option<Vec<String>>,
}

impl RunLog {
    /// Create the log surface for one run.
    pub fn new(level: LogLevel) -> Self {
        RunLog {
            level,
            captured: (level >= LogLevel::Debug).then(Vec::new),
        }
    }

    /// Print one line unconditionally.
    pub fn line(&mut self, message: &str) {
        println!("{message}");
        if let Some(captured) = &mut self.captured {
            captured.push(message.to_string());
        }
    }

    /// Print a preformatted multi-line block, capturing each line separately.
    pub fn block(&mut self, text: &str) {
        print!("{text}");
        if let Some(captured) = &mut self.captured {
            captured.extend(text.lines().map(str::to_string));
        }
    }

    /// Print a line only at `debug` level or above.
    pub fn debug(&mut self, message: &str) {
        if self.level >= LogLevel::Debug {
            self.line(message);
        }
    }

    /// Whether a transcript is being recorded.
    pub fn is_capturing(&self) -> bool {
        self.captured.is_some()
    }

    /// Lines captured so far; empty when capture is inactive.
    pub fn captured(&self) -> &[String] {
        self.captured.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_inactive_below_debug() {
        let mut log = RunLog::new(LogLevel::Info);
        log.line("hello");
        log.debug("hidden");
        assert!(!log.is_capturing());
        assert!(log.captured().is_empty());
    }

    #[test]
    fn debug_level_captures_everything_printed() {
        let mut log = RunLog::new(LogLevel::Debug);
        log.line("one");
        log.debug("two");
        log.block("\nthree\nfour\n");
        assert!(log.is_capturing());
        assert_eq!(log.captured(), ["one", "two", "", "three", "four"]);
    }

    #[test]
    fn performance_level_also_captures() {
        let mut log = RunLog::new(LogLevel::Performance);
        log.debug("kept");
        assert_eq!(log.captured(), ["kept"]);
    }
}
