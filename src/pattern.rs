// SPDX-License-Identifier: MIT OR Apache-2.0

//! Output pattern layout for the console sink.
//!
//! A small `%`-token language in the log4cplus tradition, parsed once when the
//! pattern is (re)configured and rendered per record:
//!
//! | token | meaning |
//! |-------|---------|
//! | `%d`  | local timestamp, `YYYY-MM-DD HH:MM:SS.mmm` |
//! | `%p`  | level name |
//! | `%c`  | instance name |
//! | `%m`  | message content |
//! | `%F`  | source file |
//! | `%L`  | source line |
//! | `%M`  | enclosing function |
//! | `%n`  | newline |
//! | `%%`  | literal `%` |
//!
//! Unrecognized tokens pass through literally; a bad pattern degrades, it never
//! fails.

use crate::record::Record;
use std::fmt::Write as _;

pub(crate) const DEFAULT_PATTERN: &str = "%d [%p] %c: %m%n";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Timestamp,
    LevelName,
    InstanceName,
    Message,
    File,
    Line,
    Function,
    Newline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PatternLayout {
    segments: Vec<Segment>,
    has_location: bool,
}

impl PatternLayout {
    pub(crate) fn parse(pattern: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }
            let token = match chars.next() {
                Some(t) => t,
                None => {
                    // trailing lone % is kept as-is
                    literal.push('%');
                    break;
                }
            };
            let segment = match token {
                'd' => Segment::Timestamp,
                'p' => Segment::LevelName,
                'c' => Segment::InstanceName,
                'm' => Segment::Message,
                'F' => Segment::File,
                'L' => Segment::Line,
                'M' => Segment::Function,
                'n' => Segment::Newline,
                '%' => {
                    literal.push('%');
                    continue;
                }
                other => {
                    literal.push('%');
                    literal.push(other);
                    continue;
                }
            };
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(segment);
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        let has_location = segments
            .iter()
            .any(|s| matches!(s, Segment::File | Segment::Line | Segment::Function));
        Self {
            segments,
            has_location,
        }
    }

    /// Whether the pattern already prints any source-location token. Verbose
    /// mode only bolts location on when the pattern has none of its own.
    pub(crate) fn has_location(&self) -> bool {
        self.has_location
    }

    pub(crate) fn render(&self, instance_name: &str, record: &Record) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Timestamp => {
                    let _ = write!(
                        out,
                        "{}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
                    );
                }
                Segment::LevelName => out.push_str(record.level().as_str()),
                Segment::InstanceName => out.push_str(instance_name),
                Segment::Message => out.push_str(record.content()),
                Segment::File => out.push_str(record.file()),
                Segment::Line => {
                    let _ = write!(out, "{}", record.line());
                }
                Segment::Function => out.push_str(record.function()),
                Segment::Newline => out.push('\n'),
            }
        }
        out
    }
}

impl Default for PatternLayout {
    fn default() -> Self {
        Self::parse(DEFAULT_PATTERN)
    }
}
