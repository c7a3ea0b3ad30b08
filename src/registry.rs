// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide default instance.
//!
//! Most call sites don't name an instance; they go through the default one held
//! here. It is created lazily on first use (named `"default"`) and can be
//! replaced wholesale with [`set_default_instance`], typically once, early in
//! startup, when the process knows its component name and config path.
//!
//! Replacement is safe with respect to in-flight statements: builders capture
//! their instance handle when the gate passes, not by per-statement name lookup,
//! so a statement already under construction keeps delivering to the instance it
//! started with.

use crate::Level;
use crate::instance::Instance;
use std::path::Path;
use std::sync::{OnceLock, RwLock};

const DEFAULT_NAME: &str = "default";

static DEFAULT_INSTANCE: OnceLock<RwLock<Instance>> = OnceLock::new();

fn cell() -> &'static RwLock<Instance> {
    DEFAULT_INSTANCE.get_or_init(|| RwLock::new(Instance::new(DEFAULT_NAME)))
}

/// Returns a handle to the process-wide default instance, creating it on first
/// use and memoizing it for the life of the process.
///
/// # Example
///
/// ```rust
/// let instance = loggate::default_instance();
/// assert_eq!(instance.name(), "default");
/// ```
pub fn default_instance() -> Instance {
    cell()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Replaces the default instance with a freshly constructed one.
///
/// Handles to the previous default stay valid and keep their own configuration
/// and callback; only new `default_instance()` lookups see the replacement.
pub fn set_default_instance(name: &str, config_file: Option<&Path>) {
    let instance = match config_file {
        Some(path) => Instance::with_config(name, path),
        None => Instance::new(name),
    };
    *cell()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = instance;
}

/// Convenience forwarding to the default instance's `set_level`.
pub fn set_default_level(level: Level) {
    default_instance().set_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use std::sync::{Arc, Mutex};

    // the default instance is process-global; serialize everything that touches it
    static REGISTRY_GUARD: Mutex<()> = Mutex::new(());

    #[test]
    fn lazily_created_and_memoized() {
        let _guard = REGISTRY_GUARD.lock().unwrap();
        set_default_instance(DEFAULT_NAME, None);
        let first = default_instance();
        let second = default_instance();
        assert_eq!(first.name(), second.name());
        // same underlying state: a level change through one handle is visible
        // through the other
        first.set_level(Level::Warn);
        assert_eq!(second.level(), Level::Warn);
        first.set_trace();
    }

    #[test]
    fn set_default_level_forwards() {
        let _guard = REGISTRY_GUARD.lock().unwrap();
        set_default_instance(DEFAULT_NAME, None);
        set_default_level(Level::Error);
        assert_eq!(default_instance().level(), Level::Error);
        set_default_level(Level::Trace);
    }

    #[test]
    fn replacement_leaves_old_handles_working() {
        let _guard = REGISTRY_GUARD.lock().unwrap();
        set_default_instance("before", None);
        let old = default_instance();
        let seen: Arc<Mutex<Vec<Record>>> = Arc::new(Mutex::new(Vec::new()));
        let captured = seen.clone();
        old.set_callback(move |record| captured.lock().unwrap().push(record.clone()));

        set_default_instance("after", None);
        assert_eq!(default_instance().name(), "after");
        assert_eq!(old.name(), "before");

        // the old handle still delivers to its own callback
        drop(old.statement(Level::Info, file!(), line!(), "tests::fn") << "still here");
        assert_eq!(seen.lock().unwrap().len(), 1);

        // the new default has no callback and is unaffected by the old one
        drop(
            default_instance().statement(Level::Off, file!(), line!(), "tests::fn"),
        );
        assert_eq!(seen.lock().unwrap().len(), 1);

        set_default_instance(DEFAULT_NAME, None);
    }
}
