use crate::Chronometer;
use std::fmt::Display;

/// Progress messages with the time elapsed since the logger was created.
///
/// Messages go to stderr, stdout carries the encoded or decoded data.
#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
    quiet: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            chronometer: Chronometer::new(),
            quiet: false,
        }
    }

    /// A logger that drops every message.
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::new()
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn log(&self, value: impl Display) {
        if !self.quiet {
            eprintln!("{} ({} elapsed)", value, self.chronometer.elapsed());
        }
    }
}

/// Logs one event out of `interval`, for loops too hot to log every iteration.
#[derive(Clone, Copy)]
pub struct PartialLogger<'a> {
    index: usize,
    interval: usize,
    logger: &'a Logger,
}

impl<'a> PartialLogger<'a> {
    pub fn new(interval: usize, logger: &'a Logger) -> Self {
        Self {
            index: 0,
            interval: interval.max(1),
            logger,
        }
    }

    pub fn log<D: Display>(&mut self, f: impl FnOnce(usize) -> D) {
        if self.index % self.interval == 0 && !self.logger.is_quiet() {
            self.logger.log(f(self.index));
        }
        self.index += 1;
    }
}
