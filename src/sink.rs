// SPDX-License-Identifier: MIT OR Apache-2.0

//! The built-in console sink.
//!
//! Records that are not intercepted by a callback end up here: rendered through
//! the instance's [`PatternLayout`](crate::pattern::PatternLayout) and written to
//! a locked stderr handle. Delivery is fire-and-forget: a failed write is
//! dropped, never surfaced to the logging call site.

use crate::pattern::PatternLayout;
use crate::record::Record;
use std::fmt::Write as _;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug)]
pub(crate) struct ConsoleSink {
    pattern: RwLock<PatternLayout>,
    verbose: AtomicBool,
}

impl ConsoleSink {
    pub(crate) fn new(pattern: PatternLayout) -> Self {
        Self {
            pattern: RwLock::new(pattern),
            verbose: AtomicBool::new(false),
        }
    }

    pub(crate) fn set_pattern(&self, pattern: PatternLayout) {
        *self
            .pattern
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = pattern;
    }

    pub(crate) fn set_verbose(&self, verbose: bool) {
        self.verbose.store(verbose, Ordering::Relaxed);
    }

    pub(crate) fn write(&self, instance_name: &str, record: &Record) {
        let line = self.render(instance_name, record);
        use std::io::Write;
        let mut stderr = std::io::stderr().lock();
        let _ = stderr.write_all(line.as_bytes());
    }

    fn render(&self, instance_name: &str, record: &Record) -> String {
        let pattern = self
            .pattern
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut line = pattern.render(instance_name, record);
        let had_newline = line.ends_with('\n');
        if had_newline {
            line.pop();
        }
        if self.verbose.load(Ordering::Relaxed) && !pattern.has_location() {
            let _ = write!(
                line,
                " ({}:{} {})",
                record.file(),
                record.line(),
                record.function()
            );
        }
        line.push('\n');
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    fn record() -> Record {
        Record::new(Level::Error, "src/y.rs", 3, "y::go", "voom".into())
    }

    #[test]
    fn verbose_appends_location_when_pattern_has_none() {
        let sink = ConsoleSink::new(PatternLayout::parse("%p: %m%n"));
        assert_eq!(sink.render("a", &record()), "ERROR: voom\n");
        sink.set_verbose(true);
        assert_eq!(sink.render("a", &record()), "ERROR: voom (src/y.rs:3 y::go)\n");
    }

    #[test]
    fn verbose_defers_to_patterns_with_location() {
        let sink = ConsoleSink::new(PatternLayout::parse("%F:%L %m"));
        sink.set_verbose(true);
        assert_eq!(sink.render("a", &record()), "src/y.rs:3 voom\n");
    }

    #[test]
    fn output_always_ends_with_one_newline() {
        let sink = ConsoleSink::new(PatternLayout::parse("%m"));
        assert_eq!(sink.render("a", &record()), "voom\n");
    }
}
