// SPDX-License-Identifier: MIT OR Apache-2.0

//! The call-site surface: one macro family per level.
//!
//! Each level gets three macros. Taking `debug` as the example:
//!
//! * `log_debug!` logs to the [default instance](crate::default_instance).
//! * `log_debug_if!` is the same, with a leading condition that is ANDed with
//!   the level gate.
//! * `log_debug_to!` takes an explicit instance (anything whose methods
//!   resolve to [`Instance`](crate::Instance): a binding, a reference, an `Arc`).
//!
//! Every macro accepts both call conventions:
//!
//! ```rust
//! # loggate::set_default_level(loggate::Level::Off); // keep doctest output quiet
//! // stream form: values joined by `<<`, one space between them by default
//! loggate::log_debug!("Norwegian" << "Blue");
//!
//! // format-string form: a literal format string plus arguments
//! loggate::log_debug!("{} parrots", 2);
//!
//! // conditional variants short-circuit: `expensive()` is never evaluated here
//! # fn expensive() -> u32 { 0 }
//! loggate::log_debug_if!(false, "cost" << expensive());
//! ```
//!
//! The two forms converge on the same delivery path: the format form renders its
//! message (only after the gate passes) and streams it as a single value, so
//! level and location metadata are identical either way.
//!
//! # Gating
//!
//! The value tokens expand *inside* the gate's `if`, so when the level is
//! disabled (or the `_if` condition is false) none of the caller's argument
//! expressions are evaluated and no builder is constructed. The gate itself is
//! one relaxed atomic load. The only work that cannot be elided is whatever the
//! caller's own expression does before the macro boundary.

/// Yields the path of the enclosing function.
///
/// Implementation detail of the logging macros, public only because macro
/// expansions need to reach it.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn __loggate_probe() {}
        fn __loggate_type_name<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let __loggate_name = __loggate_type_name(__loggate_probe);
        &__loggate_name[..__loggate_name.len() - "::__loggate_probe".len()]
    }};
}

/// Stream-form worker: gate, then build the statement with the caller's `<<`
/// chain pasted inside the passing branch.
#[doc(hidden)]
#[macro_export]
macro_rules! __loggate_stream {
    ($instance:expr, $level:expr, $cond:expr, $($value:tt)+) => {{
        let __loggate_instance = $instance;
        if __loggate_instance.is_enabled($level) && $cond {
            let _ = __loggate_instance.statement(
                $level,
                ::core::file!(),
                ::core::line!(),
                $crate::__function_name!(),
            ) << $($value)+;
        }
    }};
}

/// Format-form worker: gate, then render eagerly and stream the one string.
#[doc(hidden)]
#[macro_export]
macro_rules! __loggate_format {
    ($instance:expr, $level:expr, $cond:expr, $fmt:literal $(, $arg:expr)+ $(,)?) => {{
        let __loggate_instance = $instance;
        if __loggate_instance.is_enabled($level) && $cond {
            let _ = __loggate_instance.statement(
                $level,
                ::core::file!(),
                ::core::line!(),
                $crate::__function_name!(),
            ) << ::std::format!($fmt $(, $arg)+);
        }
    }};
}

// ---------------------- trace ----------------------

/// Logs at [`Level::Trace`](crate::Level::Trace) to the default instance.
#[macro_export]
macro_rules! log_trace {
    ($fmt:literal $(, $arg:expr)+ $(,)?) => {
        $crate::__loggate_format!($crate::default_instance(), $crate::Level::Trace, true, $fmt $(, $arg)+)
    };
    ($($value:tt)+) => {
        $crate::__loggate_stream!($crate::default_instance(), $crate::Level::Trace, true, $($value)+)
    };
}

/// Like [`log_trace!`], gated on an additional condition.
#[macro_export]
macro_rules! log_trace_if {
    ($cond:expr, $fmt:literal $(, $arg:expr)+ $(,)?) => {
        $crate::__loggate_format!($crate::default_instance(), $crate::Level::Trace, $cond, $fmt $(, $arg)+)
    };
    ($cond:expr, $($value:tt)+) => {
        $crate::__loggate_stream!($crate::default_instance(), $crate::Level::Trace, $cond, $($value)+)
    };
}

/// Like [`log_trace!`], against an explicit instance.
#[macro_export]
macro_rules! log_trace_to {
    ($instance:expr, $fmt:literal $(, $arg:expr)+ $(,)?) => {
        $crate::__loggate_format!($instance, $crate::Level::Trace, true, $fmt $(, $arg)+)
    };
    ($instance:expr, $($value:tt)+) => {
        $crate::__loggate_stream!($instance, $crate::Level::Trace, true, $($value)+)
    };
}

// ---------------------- debug ----------------------

/// Logs at [`Level::Debug`](crate::Level::Debug) to the default instance.
#[macro_export]
macro_rules! log_debug {
    ($fmt:literal $(, $arg:expr)+ $(,)?) => {
        $crate::__loggate_format!($crate::default_instance(), $crate::Level::Debug, true, $fmt $(, $arg)+)
    };
    ($($value:tt)+) => {
        $crate::__loggate_stream!($crate::default_instance(), $crate::Level::Debug, true, $($value)+)
    };
}

/// Like [`log_debug!`], gated on an additional condition.
#[macro_export]
macro_rules! log_debug_if {
    ($cond:expr, $fmt:literal $(, $arg:expr)+ $(,)?) => {
        $crate::__loggate_format!($crate::default_instance(), $crate::Level::Debug, $cond, $fmt $(, $arg)+)
    };
    ($cond:expr, $($value:tt)+) => {
        $crate::__loggate_stream!($crate::default_instance(), $crate::Level::Debug, $cond, $($value)+)
    };
}

/// Like [`log_debug!`], against an explicit instance.
#[macro_export]
macro_rules! log_debug_to {
    ($instance:expr, $fmt:literal $(, $arg:expr)+ $(,)?) => {
        $crate::__loggate_format!($instance, $crate::Level::Debug, true, $fmt $(, $arg)+)
    };
    ($instance:expr, $($value:tt)+) => {
        $crate::__loggate_stream!($instance, $crate::Level::Debug, true, $($value)+)
    };
}

// ---------------------- info ----------------------

/// Logs at [`Level::Info`](crate::Level::Info) to the default instance.
#[macro_export]
macro_rules! log_info {
    ($fmt:literal $(, $arg:expr)+ $(,)?) => {
        $crate::__loggate_format!($crate::default_instance(), $crate::Level::Info, true, $fmt $(, $arg)+)
    };
    ($($value:tt)+) => {
        $crate::__loggate_stream!($crate::default_instance(), $crate::Level::Info, true, $($value)+)
    };
}

/// Like [`log_info!`], gated on an additional condition.
#[macro_export]
macro_rules! log_info_if {
    ($cond:expr, $fmt:literal $(, $arg:expr)+ $(,)?) => {
        $crate::__loggate_format!($crate::default_instance(), $crate::Level::Info, $cond, $fmt $(, $arg)+)
    };
    ($cond:expr, $($value:tt)+) => {
        $crate::__loggate_stream!($crate::default_instance(), $crate::Level::Info, $cond, $($value)+)
    };
}

/// Like [`log_info!`], against an explicit instance.
#[macro_export]
macro_rules! log_info_to {
    ($instance:expr, $fmt:literal $(, $arg:expr)+ $(,)?) => {
        $crate::__loggate_format!($instance, $crate::Level::Info, true, $fmt $(, $arg)+)
    };
    ($instance:expr, $($value:tt)+) => {
        $crate::__loggate_stream!($instance, $crate::Level::Info, true, $($value)+)
    };
}

// ---------------------- warn ----------------------

/// Logs at [`Level::Warn`](crate::Level::Warn) to the default instance.
#[macro_export]
macro_rules! log_warn {
    ($fmt:literal $(, $arg:expr)+ $(,)?) => {
        $crate::__loggate_format!($crate::default_instance(), $crate::Level::Warn, true, $fmt $(, $arg)+)
    };
    ($($value:tt)+) => {
        $crate::__loggate_stream!($crate::default_instance(), $crate::Level::Warn, true, $($value)+)
    };
}

/// Like [`log_warn!`], gated on an additional condition.
#[macro_export]
macro_rules! log_warn_if {
    ($cond:expr, $fmt:literal $(, $arg:expr)+ $(,)?) => {
        $crate::__loggate_format!($crate::default_instance(), $crate::Level::Warn, $cond, $fmt $(, $arg)+)
    };
    ($cond:expr, $($value:tt)+) => {
        $crate::__loggate_stream!($crate::default_instance(), $crate::Level::Warn, $cond, $($value)+)
    };
}

/// Like [`log_warn!`], against an explicit instance.
#[macro_export]
macro_rules! log_warn_to {
    ($instance:expr, $fmt:literal $(, $arg:expr)+ $(,)?) => {
        $crate::__loggate_format!($instance, $crate::Level::Warn, true, $fmt $(, $arg)+)
    };
    ($instance:expr, $($value:tt)+) => {
        $crate::__loggate_stream!($instance, $crate::Level::Warn, true, $($value)+)
    };
}

// ---------------------- error ----------------------

/// Logs at [`Level::Error`](crate::Level::Error) to the default instance.
#[macro_export]
macro_rules! log_error {
    ($fmt:literal $(, $arg:expr)+ $(,)?) => {
        $crate::__loggate_format!($crate::default_instance(), $crate::Level::Error, true, $fmt $(, $arg)+)
    };
    ($($value:tt)+) => {
        $crate::__loggate_stream!($crate::default_instance(), $crate::Level::Error, true, $($value)+)
    };
}

/// Like [`log_error!`], gated on an additional condition.
#[macro_export]
macro_rules! log_error_if {
    ($cond:expr, $fmt:literal $(, $arg:expr)+ $(,)?) => {
        $crate::__loggate_format!($crate::default_instance(), $crate::Level::Error, $cond, $fmt $(, $arg)+)
    };
    ($cond:expr, $($value:tt)+) => {
        $crate::__loggate_stream!($crate::default_instance(), $crate::Level::Error, $cond, $($value)+)
    };
}

/// Like [`log_error!`], against an explicit instance.
#[macro_export]
macro_rules! log_error_to {
    ($instance:expr, $fmt:literal $(, $arg:expr)+ $(,)?) => {
        $crate::__loggate_format!($instance, $crate::Level::Error, true, $fmt $(, $arg)+)
    };
    ($instance:expr, $($value:tt)+) => {
        $crate::__loggate_stream!($instance, $crate::Level::Error, true, $($value)+)
    };
}

// ---------------------- fatal ----------------------

/// Logs at [`Level::Fatal`](crate::Level::Fatal) to the default instance.
#[macro_export]
macro_rules! log_fatal {
    ($fmt:literal $(, $arg:expr)+ $(,)?) => {
        $crate::__loggate_format!($crate::default_instance(), $crate::Level::Fatal, true, $fmt $(, $arg)+)
    };
    ($($value:tt)+) => {
        $crate::__loggate_stream!($crate::default_instance(), $crate::Level::Fatal, true, $($value)+)
    };
}

/// Like [`log_fatal!`], gated on an additional condition.
#[macro_export]
macro_rules! log_fatal_if {
    ($cond:expr, $fmt:literal $(, $arg:expr)+ $(,)?) => {
        $crate::__loggate_format!($crate::default_instance(), $crate::Level::Fatal, $cond, $fmt $(, $arg)+)
    };
    ($cond:expr, $($value:tt)+) => {
        $crate::__loggate_stream!($crate::default_instance(), $crate::Level::Fatal, $cond, $($value)+)
    };
}

/// Like [`log_fatal!`], against an explicit instance.
#[macro_export]
macro_rules! log_fatal_to {
    ($instance:expr, $fmt:literal $(, $arg:expr)+ $(,)?) => {
        $crate::__loggate_format!($instance, $crate::Level::Fatal, true, $fmt $(, $arg)+)
    };
    ($instance:expr, $($value:tt)+) => {
        $crate::__loggate_stream!($instance, $crate::Level::Fatal, true, $($value)+)
    };
}
