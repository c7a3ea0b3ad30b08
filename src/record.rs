// SPDX-License-Identifier: MIT OR Apache-2.0

//! The finalized log event.
//!
//! A [`Record`] is produced once per fired statement, after the message text has
//! been fully assembled, and is handed to the owning instance's delivery path.
//! It is immutable from that point on: the interception callback borrows it, the
//! sink consumes it, and nobody holds onto shared mutable state.

use crate::Level;
use std::fmt::Display;

/// One finalized, immutable log event: level, source location, and message text.
///
/// Records are small and value-typed; they are cloned, not shared, across the
/// delivery boundary.
///
/// # Example
///
/// ```rust
/// use loggate::{Instance, Record};
/// use std::sync::{Arc, Mutex};
///
/// let instance = Instance::new("example");
/// let seen: Arc<Mutex<Option<Record>>> = Arc::new(Mutex::new(None));
/// let captured = seen.clone();
/// instance.set_callback(move |record| {
///     *captured.lock().unwrap() = Some(record.clone());
/// });
///
/// loggate::log_info_to!(&instance, "hello");
/// let record = seen.lock().unwrap().take().unwrap();
/// assert_eq!(record.content(), "hello");
/// assert_eq!(record.level(), loggate::Level::Info);
/// assert!(record.file().ends_with(".rs"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    level: Level,
    file: &'static str,
    line: u32,
    function: &'static str,
    content: String,
}

impl Record {
    pub(crate) fn new(
        level: Level,
        file: &'static str,
        line: u32,
        function: &'static str,
        content: String,
    ) -> Self {
        Self {
            level,
            file,
            line,
            function,
            content,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Source file of the statement, as produced by `file!()`.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// Source line of the statement, as produced by `line!()`.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Path of the enclosing function.
    pub fn function(&self) -> &'static str {
        self.function
    }

    /// The assembled message text. May be empty; an empty-content record is how a
    /// fired statement with nothing appended is distinguished from a statement
    /// that never fired.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.content)
    }
}

/*
Boilerplate notes for Record:

IMPLEMENTED:
- Debug/Clone/PartialEq/Eq/Hash: derived; records are plain values and tests
  compare them wholesale.
- Display: the message text only. The sink renders the full line through a
  PatternLayout; Display must not bake in a layout of its own.

NOT IMPLEMENTED:
- Copy: content is a String.
- Default: a record without a statement behind it is meaningless.
- Ord/PartialOrd: records have no natural order; level ordering belongs to Level.
- constructors beyond the crate-private one: only a Statement may mint a Record,
  which is what keeps the level/location metadata trustworthy.
*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_content_only() {
        let record = Record::new(Level::Warn, "a.rs", 7, "a::f", "dry socket".into());
        assert_eq!(record.to_string(), "dry socket");
        assert_eq!(record.level(), Level::Warn);
        assert_eq!(record.file(), "a.rs");
        assert_eq!(record.line(), 7);
        assert_eq!(record.function(), "a::f");
    }

    #[test]
    fn empty_content_is_representable() {
        let record = Record::new(Level::Debug, "a.rs", 1, "a::f", String::new());
        assert_eq!(record.content(), "");
    }
}
