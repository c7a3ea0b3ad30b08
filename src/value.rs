// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value streaming for the `<<` call convention.
//!
//! Everything that can appear on the right-hand side of a stream-form statement
//! implements [`LogValue`]. The trait is the seam between the statement builder
//! and the stringify capability: scalars go through their `Display`
//! representation, sequences render as `[e1, e2, ..., en]`, mappings render as
//! `{{k1 : v1}, {k2 : v2}}`, and the [`NoWhitespace`] marker produces no text at
//! all but switches off the builder's separator insertion for the rest of the
//! statement.
//!
//! Caller-defined types opt in by implementing [`LogValue`] themselves:
//!
//! ```rust
//! use loggate::{LogValue, NoWhitespace, Statement};
//!
//! struct Parrot {
//!     name: &'static str,
//!     volts: u32,
//! }
//!
//! impl LogValue for Parrot {
//!     fn append_to(&self, statement: &mut Statement<'_>) {
//!         statement.push_text(&format!("Parrot{{name = {}; volts = {}}}", self.name, self.volts));
//!     }
//! }
//! ```

use crate::statement::Statement;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::fmt::Write as _;

/// A value that can be streamed into a [`Statement`].
pub trait LogValue {
    /// Renders `self` into the statement, honoring its whitespace rules.
    ///
    /// Most implementations render to text and call [`Statement::push_text`]
    /// exactly once; marker values may instead adjust builder state.
    fn append_to(&self, statement: &mut Statement<'_>);
}

/// Marker value: streams no text, and one-way disables the single-space
/// separator for every subsequent append in the same statement.
///
/// ```rust
/// # use loggate::{Instance, NoWhitespace};
/// # use std::sync::{Arc, Mutex};
/// # let instance = Instance::new("nows");
/// # let seen = Arc::new(Mutex::new(String::new()));
/// # let captured = seen.clone();
/// # instance.set_callback(move |r| *captured.lock().unwrap() = r.content().to_string());
/// loggate::log_debug_to!(&instance, "a" << NoWhitespace << "b" << "c");
/// assert_eq!(*seen.lock().unwrap(), "abc");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoWhitespace;

impl LogValue for NoWhitespace {
    fn append_to(&self, statement: &mut Statement<'_>) {
        statement.disable_whitespace();
    }
}

impl LogValue for str {
    fn append_to(&self, statement: &mut Statement<'_>) {
        statement.push_text(self);
    }
}

impl LogValue for String {
    fn append_to(&self, statement: &mut Statement<'_>) {
        statement.push_text(self);
    }
}

impl<T: LogValue + ?Sized> LogValue for &T {
    fn append_to(&self, statement: &mut Statement<'_>) {
        (**self).append_to(statement);
    }
}

macro_rules! impl_log_value_via_display {
    ($($t:ty)*) => {$(
        impl LogValue for $t {
            fn append_to(&self, statement: &mut Statement<'_>) {
                statement.push_text(&self.to_string());
            }
        }
    )*};
}

// The scalar stringify contract: Display already gives shortest round-trippable
// floats (42.1, not 42.100000) and literal true/false for bool.
impl_log_value_via_display!(
    u8 u16 u32 u64 u128 usize
    i8 i16 i32 i64 i128 isize
    f32 f64 bool char
);

// Addresses render as the platform's native pointer formatting: lowercase hex
// with an 0x prefix.
impl<T> LogValue for *const T {
    fn append_to(&self, statement: &mut Statement<'_>) {
        statement.push_text(&format!("{:p}", *self));
    }
}

impl<T> LogValue for *mut T {
    fn append_to(&self, statement: &mut Statement<'_>) {
        statement.push_text(&format!("{:p}", *self));
    }
}

fn render_sequence<T: Display>(elements: impl Iterator<Item = T>) -> String {
    let mut out = String::from("[");
    for (index, element) in elements.enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        // writing Display into a String cannot fail
        let _ = write!(out, "{element}");
    }
    out.push(']');
    out
}

fn render_mapping<K: Display, V: Display>(entries: impl Iterator<Item = (K, V)>) -> String {
    let mut out = String::from("{");
    for (index, (key, value)) in entries.enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{{{key} : {value}}}");
    }
    out.push('}');
    out
}

// Sequence-like values. The bracketed text is composed with fixed ", "
// separators regardless of the whitespace flag, then appended as one unit under
// the normal whitespace rule.
impl<T: Display> LogValue for [T] {
    fn append_to(&self, statement: &mut Statement<'_>) {
        statement.push_text(&render_sequence(self.iter()));
    }
}

impl<T: Display, const N: usize> LogValue for [T; N] {
    fn append_to(&self, statement: &mut Statement<'_>) {
        statement.push_text(&render_sequence(self.iter()));
    }
}

impl<T: Display> LogValue for Vec<T> {
    fn append_to(&self, statement: &mut Statement<'_>) {
        statement.push_text(&render_sequence(self.iter()));
    }
}

// Mapping-like values, rendered in the map's iteration order.
impl<K: Display, V: Display> LogValue for BTreeMap<K, V> {
    fn append_to(&self, statement: &mut Statement<'_>) {
        statement.push_text(&render_mapping(self.iter()));
    }
}

impl<K: Display, V: Display, S> LogValue for HashMap<K, V, S> {
    fn append_to(&self, statement: &mut Statement<'_>) {
        statement.push_text(&render_mapping(self.iter()));
    }
}
