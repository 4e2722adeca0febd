// Monotonic stopwatch around the counting phase.

use std::fmt;
use std::time::{Duration, Instant};

/// Misuse of the stopwatch: querying elapsed time before both endpoints
/// have been recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchError {
    NotStarted,
    NotStopped,
}

impl fmt::Display for StopwatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopwatchError::NotStarted => write!(f, "stopwatch was never started"),
            StopwatchError::NotStopped => write!(f, "stopwatch was never stopped"),
        }
    }
}

impl std::error::Error for StopwatchError {}

/// Start/stop timer over `Instant` (monotonic, immune to wall-clock
/// adjustments). Both endpoints must be recorded before `elapsed`.
#[derive(Debug, Default)]
pub struct Stopwatch {
    begin: Option<Instant>,
    end: Option<Instant>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start endpoint. Restarting clears a previous stop.
    pub fn start(&mut self) {
        self.begin = Some(Instant::now());
        self.end = None;
    }

    /// Record the end endpoint.
    pub fn stop(&mut self) {
        self.end = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Result<Duration, StopwatchError> {
        let begin = self.begin.ok_or(StopwatchError::NotStarted)?;
        let end = self.end.ok_or(StopwatchError::NotStopped)?;
        Ok(end.duration_since(begin))
    }

    /// Processing-time line: `SSS.mmm was the processing time` plus a
    /// caller-supplied trailing message. Returns an owned string rather
    /// than printing, so callers choose the sink.
    pub fn report(&self, trailing: &str) -> Result<String, StopwatchError> {
        let elapsed = self.elapsed()?;
        Ok(format!(
            "{}was the processing time{}",
            format_seconds(&elapsed),
            trailing
        ))
    }
}

/// Fixed-width `SSS.mmm ` rendering (zero-padded seconds and milliseconds,
/// trailing space).
pub fn format_seconds(d: &Duration) -> String {
    let ms = d.as_millis();
    format!("{:03}.{:03} ", ms / 1000, ms % 1000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_elapsed_before_start_is_an_error() {
        let sw = Stopwatch::new();
        assert_eq!(sw.elapsed(), Err(StopwatchError::NotStarted));
    }

    #[test]
    fn test_elapsed_before_stop_is_an_error() {
        let mut sw = Stopwatch::new();
        sw.start();
        assert_eq!(sw.elapsed(), Err(StopwatchError::NotStopped));
    }

    #[test]
    fn test_restart_clears_previous_stop() {
        let mut sw = Stopwatch::new();
        sw.start();
        sw.stop();
        sw.start();
        assert_eq!(sw.elapsed(), Err(StopwatchError::NotStopped));
    }

    #[test]
    fn test_elapsed_covers_a_sleep() {
        let mut sw = Stopwatch::new();
        sw.start();
        thread::sleep(Duration::from_millis(100));
        sw.stop();
        let elapsed = sw.elapsed().unwrap();
        assert!(elapsed >= Duration::from_millis(100));
        assert!(elapsed < Duration::from_millis(500));
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(&Duration::from_millis(0)), "000.000 ");
        assert_eq!(format_seconds(&Duration::from_millis(1_234)), "001.234 ");
        assert_eq!(format_seconds(&Duration::from_millis(83_456)), "083.456 ");
        assert_eq!(format_seconds(&Duration::from_millis(123_009)), "123.009 ");
    }

    #[test]
    fn test_report_appends_trailing_message() {
        let mut sw = Stopwatch::new();
        sw.start();
        sw.stop();
        let line = sw.report("\n").unwrap();
        assert!(line.contains("was the processing time"));
        assert!(line.ends_with('\n'));
    }
}
