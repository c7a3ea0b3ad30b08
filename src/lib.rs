//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# loggate

loggate is a level-gated logging facade: one process-wide logging entry point
that many independent components can call cheaply, with a console backend that
can be reconfigured at runtime (level, output pattern, config file, verbosity)
without recompiling anything.

# The problem

A component buried inside a large codebase wants to write

```rust
# loggate::set_default_level(loggate::Level::Off);
# let queue_depth = 3;
loggate::log_debug!("queue depth" << queue_depth);
```

and pay essentially nothing when debug logging is off. Most of the cost of a
log statement is not the write; it is evaluating the arguments and formatting
the message. So the contract here is strict: when a level is disabled, the gate
is one relaxed atomic load and *none* of the caller's argument expressions are
evaluated. The same applies to the conditional variants: `log_debug_if!(cond, ...)`
ANDs `cond` into the gate via short-circuit, not a runtime branch after the fact.

# Call-site surface

Two call conventions, one delivery path. The stream form joins values with `<<`,
inserting a single space between them (until the [`NoWhitespace`] marker turns
that off for the rest of the statement):

```rust
# loggate::set_default_level(loggate::Level::Off);
loggate::log_info!("Norwegian" << "Blue");            // "Norwegian Blue"
loggate::log_info!(vec![1, 2, 3]);                    // "[1, 2, 3]"
```

The format-string form is plain `format!` syntax, rendered only after the gate
passes:

```rust
# loggate::set_default_level(loggate::Level::Off);
loggate::log_info!("{} parrots", 2);
```

Both produce identical records (level, file, line, function, content) and both
exist for every level in `{trace, debug, info, warn, error, fatal}`, with `_if`
(conditional) and `_to` (explicit [`Instance`]) variants.

# Instances

An [`Instance`] is a named logging target holding the current minimum
[`Level`], the sink configuration, and an optional interception callback. The
process-wide default instance is created lazily by [`default_instance`] and can
be replaced once the process knows who it is:

```rust
loggate::set_default_instance("my-agent", None);
loggate::set_default_level(loggate::Level::Warn);
```

At construction an instance honors two environment variables: `LOGGATE_LEVEL`
(symbolic level name; an unrecognized value means `Trace`, absence means the
built-in default) and `LOGGATE_PATTERN` (output pattern override). It can also
be pointed at a properties-style config file (see [`config`]) which is polled
for changes and hot-reloaded; an unreadable or invalid file falls back to the
built-in console layout. Configuration problems never abort the host process,
and a logging call can never fail into the calling code path.

# Testing against logs

Register an interception callback to receive every delivered [`Record`]
synchronously, before the logging statement completes:

```rust
use std::sync::{Arc, Mutex};

let instance = loggate::Instance::new("test");
let seen = Arc::new(Mutex::new(None));
let captured = seen.clone();
instance.set_callback(move |record| *captured.lock().unwrap() = Some(record.clone()));

loggate::log_error_to!(&instance, "it's stone dead");
assert_eq!(seen.lock().unwrap().as_ref().unwrap().content(), "it's stone dead");
```

While a callback is registered it replaces console delivery, so tests stay
quiet.

# Concurrency

Every operation is synchronous and non-blocking from the caller's perspective.
Many threads may log against the same instance concurrently; reconfiguration
(`set_level`, `set_config_file`, callback changes) races with in-flight
statements under an eventually-consistent contract: a statement may observe a
threshold change one statement late, which is accepted and documented rather
than locked away.
*/

mod instance;
mod level;
mod macros;
mod pattern;
mod record;
mod registry;
mod sink;
mod statement;
mod value;

pub mod config;

pub use instance::Instance;
pub use level::Level;
pub use record::Record;
pub use registry::{default_instance, set_default_instance, set_default_level};
pub use statement::Statement;
pub use value::{LogValue, NoWhitespace};

extern crate self as loggate;
