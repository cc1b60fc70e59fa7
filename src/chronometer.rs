use std::time::{Duration, Instant};

#[derive(Clone, Copy)]
pub struct Chronometer {
    start: Instant,
}

impl Chronometer {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }

    pub fn duration(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed(&self) -> String {
        let elapsed = self.duration().as_millis();
        format!("{:02}:{:02}.{:03}", elapsed / 60000, (elapsed % 60000) / 1000, elapsed % 1000)
    }
}

/// Short human readable duration, from nanoseconds up to seconds.
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    match nanos {
        0..=9_999 => format!("{}ns", nanos),
        10_000..=9_999_999 => format!("{}µs", nanos / 1_000),
        10_000_000..=9_999_999_999 => format!("{}ms", nanos / 1_000_000),
        _ => format!("{}s", nanos / 1_000_000_000),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    #[test]
    fn format_duration() {
        assert_eq!(super::format_duration(Duration::from_nanos(950)), "950ns");
        assert_eq!(super::format_duration(Duration::from_micros(42)), "42µs");
        assert_eq!(super::format_duration(Duration::from_millis(1234)), "1234ms");
        assert_eq!(super::format_duration(Duration::from_secs(75)), "75s");
    }

    #[test]
    fn elapsed() {
        let chronometer = super::Chronometer::new();
        assert!(chronometer.elapsed().starts_with("00:0"));
    }
}
