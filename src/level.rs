// SPDX-License-Identifier: MIT OR Apache-2.0

//! Severity levels for the loggate facade.
//!
//! Levels are totally ordered from [`Level::Off`] (nothing is emitted) up to
//! [`Level::Trace`] (everything is emitted). A statement at level `L` is delivered
//! by an instance with threshold `T` iff `L <= T` and `T != Off`; a larger value
//! means a more verbose category, not a more severe one.

use std::fmt::Display;

/// Severity of a log statement, or an instance threshold.
///
/// The discriminants are stable (`repr(u8)`) so a threshold can live in an
/// `AtomicU8` and be compared with a single integer load.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Disables all emission when used as a threshold. Never used by a statement.
    Off = 0,
    Fatal = 1,
    Error = 2,
    Warn = 3,
    Info = 4,
    Debug = 5,
    Trace = 6,
}

impl Level {
    /// All levels, in threshold order. Handy for exhaustive table tests.
    pub const ALL: [Level; 7] = [
        Level::Off,
        Level::Fatal,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    /// Parses the external symbolic vocabulary used by the `LOGGATE_LEVEL`
    /// environment variable and the `level` key of a config file.
    ///
    /// # Example
    ///
    /// ```rust
    /// use loggate::Level;
    ///
    /// assert_eq!(Level::from_symbol("WARNING"), Some(Level::Warn));
    /// assert_eq!(Level::from_symbol("CRIT"), Some(Level::Fatal));
    /// assert_eq!(Level::from_symbol("verbose please"), None);
    /// ```
    pub fn from_symbol(symbol: &str) -> Option<Level> {
        match symbol {
            "TRACE" => Some(Level::Trace),
            "DEBUG" => Some(Level::Debug),
            "INFO" => Some(Level::Info),
            "WARNING" => Some(Level::Warn),
            "ERR" => Some(Level::Error),
            "CRIT" => Some(Level::Fatal),
            "OFF" => Some(Level::Off),
            _ => None,
        }
    }

    /// Uppercase name used by the `%p` pattern token.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Off => "OFF",
            Level::Fatal => "FATAL",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    pub(crate) fn from_u8(raw: u8) -> Level {
        match raw {
            1 => Level::Fatal,
            2 => Level::Error,
            3 => Level::Warn,
            4 => Level::Info,
            5 => Level::Debug,
            6 => Level::Trace,
            _ => Level::Off,
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/*
Boilerplate notes.

Copy is cheap and obvious for a fieldless repr(u8) enum.
Ord/PartialOrd are load-bearing: the gate is literally `level <= threshold`.
Default is deliberately not implemented; the "default" threshold is a policy of
Instance construction (env override, config file), not of the enum.
FromStr is not implemented because from_symbol is not a round-trip of Display
(WARNING vs WARN) and conflating the two vocabularies invites mistakes.
*/
