// SPDX-License-Identifier: MIT OR Apache-2.0

//! The short-lived per-call-site statement builder.
//!
//! A [`Statement`] is constructed by the logging macros *after* the level gate
//! has passed, accumulates streamed values into one message, and delivers a
//! [`Record`](crate::Record) to its owning instance when it goes out of scope at
//! the end of the enclosing statement. Builders are stack-local and never escape
//! the call site, which is what makes the plain `&Instance` back-reference sound.
//!
//! The builder deliberately re-checks the gate on drop: the instance threshold
//! may have been lowered concurrently while the message was being assembled.
//! That double check is best-effort (a statement may still slip through one
//! concurrent threshold change) and is accepted rather than fixed with locking,
//! which would tax the cheap disabled path.

use crate::instance::Instance;
use crate::record::Record;
use crate::value::LogValue;
use crate::Level;
use std::ops::Shl;

/// Accumulates one log message and delivers it on drop.
///
/// Obtained from [`Instance::statement`]; usually you want the
/// [macros](crate#call-site-surface) instead.
///
/// # Example
///
/// ```rust
/// use loggate::{Instance, Level};
///
/// let instance = Instance::new("doc");
/// if instance.is_enabled(Level::Info) {
///     let _ = instance.statement(Level::Info, file!(), line!(), "doc::example")
///         << "spam" << "eggs";
///     // delivered here, at the end of the statement
/// }
/// ```
#[derive(Debug)]
pub struct Statement<'a> {
    instance: &'a Instance,
    level: Level,
    file: &'static str,
    line: u32,
    function: &'static str,
    content: String,
    insert_whitespace: bool,
}

impl<'a> Statement<'a> {
    pub(crate) fn new(
        instance: &'a Instance,
        level: Level,
        file: &'static str,
        line: u32,
        function: &'static str,
    ) -> Self {
        Self {
            instance,
            level,
            file,
            line,
            function,
            content: String::new(),
            insert_whitespace: true,
        }
    }

    /// Streams one value. Equivalent to the `<<` operator.
    pub fn append<V: LogValue>(mut self, value: V) -> Self {
        value.append_to(&mut self);
        self
    }

    /// Appends rendered text, inserting a single space between non-empty
    /// existing content and non-empty new text while whitespace insertion is on.
    ///
    /// This is the entry point for [`LogValue`] implementations on user types.
    pub fn push_text(&mut self, text: &str) {
        if !text.is_empty() && !self.content.is_empty() && self.insert_whitespace {
            self.content.push(' ');
        }
        self.content.push_str(text);
    }

    /// One-way: whitespace insertion cannot be re-enabled within a statement.
    pub(crate) fn disable_whitespace(&mut self) {
        self.insert_whitespace = false;
    }
}

impl<'a, V: LogValue> Shl<V> for Statement<'a> {
    type Output = Statement<'a>;

    fn shl(self, value: V) -> Self::Output {
        self.append(value)
    }
}

impl Drop for Statement<'_> {
    fn drop(&mut self) {
        // Threshold races are tolerated; delivering with empty content is not a
        // bug but the way callers observe "fired with nothing appended".
        if self.instance.is_enabled(self.level) {
            let record = Record::new(
                self.level,
                self.file,
                self.line,
                self.function,
                std::mem::take(&mut self.content),
            );
            self.instance.deliver(record);
        }
    }
}

/*
Boilerplate notes.

Clone would duplicate delivery on drop; out.
Shl consumes and returns self so chains read left to right and the final
temporary owns delivery. Taking &mut self instead would leave delivery timing to
an explicit finish() call, which is exactly the footgun the RAII form removes.
Send/Sync are irrelevant: builders are stack-local by construction.
*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::NoWhitespace;
    use std::sync::{Arc, Mutex};

    fn capturing_instance() -> (Instance, Arc<Mutex<Vec<Record>>>) {
        let instance = Instance::new("statement-tests");
        let seen = Arc::new(Mutex::new(Vec::new()));
        let captured = seen.clone();
        instance.set_callback(move |record| captured.lock().unwrap().push(record.clone()));
        (instance, seen)
    }

    #[test]
    fn whitespace_between_values() {
        let (instance, seen) = capturing_instance();
        {
            let _ = instance.statement(Level::Debug, file!(), line!(), "tests::fn")
                << "Norwegian"
                << "Blue";
        }
        assert_eq!(seen.lock().unwrap()[0].content(), "Norwegian Blue");
    }

    #[test]
    fn no_whitespace_marker_is_one_way() {
        let (instance, seen) = capturing_instance();
        {
            let _ = instance.statement(Level::Debug, file!(), line!(), "tests::fn")
                << "a"
                << NoWhitespace
                << "b"
                << "c";
        }
        assert_eq!(seen.lock().unwrap()[0].content(), "abc");
    }

    #[test]
    fn empty_appends_do_not_attract_separators() {
        let (instance, seen) = capturing_instance();
        {
            let _ = instance.statement(Level::Debug, file!(), line!(), "tests::fn")
                << ""
                << "tail";
        }
        assert_eq!(seen.lock().unwrap()[0].content(), "tail");
    }

    #[test]
    fn empty_statement_still_delivers() {
        let (instance, seen) = capturing_instance();
        drop(instance.statement(Level::Debug, file!(), line!(), "tests::fn"));
        let records = seen.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content(), "");
    }

    #[test]
    fn drop_recheck_suppresses_after_threshold_drop() {
        let (instance, seen) = capturing_instance();
        let statement = instance.statement(Level::Debug, file!(), line!(), "tests::fn");
        let statement = statement << "late";
        instance.set_level(Level::Off);
        drop(statement);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn scalar_and_pointer_rendering() {
        let (instance, seen) = capturing_instance();
        let target = 7u8;
        let address = &target as *const u8;
        {
            let _ = instance.statement(Level::Debug, file!(), line!(), "tests::fn")
                << 42
                << 42.1
                << true
                << false
                << address;
        }
        let expected_ptr = format!("{address:p}");
        assert_eq!(
            seen.lock().unwrap()[0].content(),
            format!("42 42.1 true false {expected_ptr}")
        );
        assert!(expected_ptr.starts_with("0x"));
    }

    #[test]
    fn container_rendering_through_the_stream() {
        let (instance, seen) = capturing_instance();
        let list = vec!["this", "is", "an", "ex-parrot"];
        let mut map = std::collections::BTreeMap::new();
        map.insert("bereft", "of life");
        {
            let _ = instance.statement(Level::Debug, file!(), line!(), "tests::fn")
                << "list:"
                << &list
                << &map;
        }
        assert_eq!(
            seen.lock().unwrap()[0].content(),
            "list: [this, is, an, ex-parrot] {{bereft : of life}}"
        );
    }
}
