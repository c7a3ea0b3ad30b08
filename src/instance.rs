// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named logging targets.
//!
//! An [`Instance`] is the thing call sites and backends address: it owns the
//! current minimum level (the gate), an optional interception callback, and the
//! console sink configuration (pattern layout, verbose flag, config file
//! watcher). Handles are cheap to clone and share one underlying state, so the
//! registry can swap the process-wide default while statements already in flight
//! keep the instance they captured at construction time.
//!
//! # Concurrency
//!
//! `is_enabled` is a single relaxed atomic load; `set_level` racing with in-flight
//! statements is eventually consistent: a reader may see a stale
//! threshold for one statement, which is accepted. The callback slot and pattern
//! live behind `RwLock`s so no race can corrupt a record; linearizable ordering
//! is deliberately not promised.
//!
//! # Environment overrides
//!
//! Read once, at construction: `LOGGATE_LEVEL` picks the initial threshold by
//! symbolic name (`TRACE`, `DEBUG`, `INFO`, `WARNING`, `ERR`, `CRIT`, `OFF`;
//! an unrecognized non-empty value means the most verbose, `Trace`), and
//! `LOGGATE_PATTERN` replaces the default output pattern. Absent or empty
//! variables are ignored.

use crate::Level;
use crate::config::Config;
use crate::pattern::{DEFAULT_PATTERN, PatternLayout};
use crate::record::Record;
use crate::sink::ConsoleSink;
use crate::statement::Statement;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, SystemTime};

const ENV_LEVEL: &str = "LOGGATE_LEVEL";
const ENV_PATTERN: &str = "LOGGATE_PATTERN";

/// Config files are re-polled on this cadence once an instance is pointed at one.
const WATCH_INTERVAL: Duration = Duration::from_secs(60);

type Callback = Box<dyn Fn(&Record) + Send + Sync>;

/// A named logging target: mutable severity threshold, optional interception
/// callback, console sink configuration.
///
/// `Instance` is a handle; clones share state. Instances live as long as any
/// handle does; there is no explicit shutdown.
///
/// # Example
///
/// ```rust
/// use loggate::{Instance, Level};
///
/// let instance = Instance::new("worker");
/// instance.set_level(Level::Warn);
/// assert!(instance.is_enabled(Level::Error));
/// assert!(!instance.is_enabled(Level::Info));
///
/// loggate::log_warn_to!(&instance, "queue depth" << 1312);
/// ```
#[derive(Clone)]
pub struct Instance {
    shared: Arc<Shared>,
}

struct Shared {
    name: String,
    threshold: AtomicU8,
    callback: RwLock<Option<Callback>>,
    sink: ConsoleSink,
    watch: Mutex<Option<WatchHandle>>,
}

struct WatchHandle {
    stop: Arc<AtomicBool>,
}

impl Instance {
    /// Creates an instance with the built-in console sink.
    pub fn new(name: impl Into<String>) -> Instance {
        Self::build(name.into(), None, WATCH_INTERVAL)
    }

    /// Creates an instance and points it at a config file.
    ///
    /// An unreadable or invalid file is tolerated: the instance falls back to
    /// the built-in console defaults (plus any environment overrides) instead of
    /// failing.
    pub fn with_config(name: impl Into<String>, config_file: impl AsRef<Path>) -> Instance {
        Self::build(name.into(), Some(config_file.as_ref()), WATCH_INTERVAL)
    }

    fn build(name: String, config_file: Option<&Path>, interval: Duration) -> Instance {
        let mut threshold = Level::Trace;
        if let Ok(value) = std::env::var(ENV_LEVEL) {
            if !value.is_empty() {
                // unrecognized non-empty values mean "most verbose", not an error
                threshold = Level::from_symbol(&value).unwrap_or(Level::Trace);
            }
        }

        let mut pattern = PatternLayout::parse(DEFAULT_PATTERN);
        if let Ok(value) = std::env::var(ENV_PATTERN) {
            if !value.is_empty() {
                pattern = PatternLayout::parse(&value);
            }
        }

        let instance = Instance {
            shared: Arc::new(Shared {
                name,
                threshold: AtomicU8::new(threshold as u8),
                callback: RwLock::new(None),
                sink: ConsoleSink::new(pattern),
                watch: Mutex::new(None),
            }),
        };
        if let Some(path) = config_file {
            instance.set_config_file_every(path, interval);
        }
        instance
    }

    pub fn name(&self) -> &str {
        &self.shared.name
    }

    /// The cheap gate: `level <= threshold`, unconditionally false for an `Off`
    /// threshold. Call sites check this before evaluating any arguments.
    #[inline]
    pub fn is_enabled(&self, level: Level) -> bool {
        let threshold = self.shared.threshold.load(Ordering::Relaxed);
        level != Level::Off && (level as u8) <= threshold
    }

    pub fn level(&self) -> Level {
        Level::from_u8(self.shared.threshold.load(Ordering::Relaxed))
    }

    /// Sets the minimum level. May race with in-flight statements; takes effect
    /// within one statement, best-effort.
    pub fn set_level(&self, level: Level) {
        self.shared.threshold.store(level as u8, Ordering::Relaxed);
    }

    pub fn set_off(&self) {
        self.set_level(Level::Off);
    }
    pub fn set_fatal(&self) {
        self.set_level(Level::Fatal);
    }
    pub fn set_error(&self) {
        self.set_level(Level::Error);
    }
    pub fn set_warn(&self) {
        self.set_level(Level::Warn);
    }
    pub fn set_info(&self) {
        self.set_level(Level::Info);
    }
    pub fn set_debug(&self) {
        self.set_level(Level::Debug);
    }
    pub fn set_trace(&self) {
        self.set_level(Level::Trace);
    }

    /// Registers the interception callback. It receives every delivered record
    /// synchronously, on the logging thread, before the statement completes;
    /// while registered it replaces console delivery.
    pub fn set_callback(&self, callback: impl Fn(&Record) + Send + Sync + 'static) {
        *self
            .shared
            .callback
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(Box::new(callback));
    }

    /// Removes the interception callback; records go to the console sink again.
    pub fn clear_callback(&self) {
        *self
            .shared
            .callback
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }

    /// Re-points the sink configuration at `path` and keeps watching it for
    /// changes. Errors are swallowed: an unreadable or invalid file leaves the
    /// built-in console defaults in force and stops any previous watcher.
    pub fn set_config_file(&self, path: impl AsRef<Path>) {
        self.set_config_file_every(path.as_ref(), WATCH_INTERVAL);
    }

    pub(crate) fn set_config_file_every(&self, path: &Path, interval: Duration) {
        self.shared.stop_watch();
        match Config::load(path) {
            Ok(config) => {
                self.shared.apply_config(&config);
                Shared::start_watch(&self.shared, path.to_path_buf(), interval);
            }
            Err(_) => {
                // logging configuration must never abort the host process
            }
        }
    }

    /// Asks the sink for additional detail (source location on every line).
    pub fn set_verbose_mode(&self) {
        self.shared.sink.set_verbose(true);
    }

    /// Begins a statement builder against this instance. The macros call this
    /// after the gate passes; the builder delivers on drop.
    pub fn statement(
        &self,
        level: Level,
        file: &'static str,
        line: u32,
        function: &'static str,
    ) -> Statement<'_> {
        Statement::new(self, level, file, line, function)
    }

    /// Delivery path: re-validate the gate, then callback or sink.
    pub(crate) fn deliver(&self, record: Record) {
        if !self.is_enabled(record.level()) {
            return;
        }
        let callback = self
            .shared
            .callback
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        match &*callback {
            Some(callback) => callback(&record),
            None => self.shared.sink.write(&self.shared.name, &record),
        }
    }
}

impl Shared {
    fn apply_config(&self, config: &Config) {
        if let Some(level) = config.level {
            self.threshold.store(level as u8, Ordering::Relaxed);
        }
        if let Some(pattern) = &config.pattern {
            self.sink.set_pattern(PatternLayout::parse(pattern));
        }
        if let Some(verbose) = config.verbose {
            self.sink.set_verbose(verbose);
        }
    }

    fn stop_watch(&self) {
        let mut watch = self
            .watch
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(old) = watch.take() {
            old.stop.store(true, Ordering::Relaxed);
        }
    }

    /// Polls the file's mtime on `interval` and re-applies it on change. The
    /// thread holds only a weak reference, so it exits once the instance dies
    /// or the watch is re-pointed.
    fn start_watch(shared: &Arc<Shared>, path: PathBuf, interval: Duration) {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = stop.clone();
        let weak = Arc::downgrade(shared);
        let mut last_modified = modified_time(&path);
        std::thread::spawn(move || {
            loop {
                std::thread::sleep(interval);
                if thread_stop.load(Ordering::Relaxed) {
                    return;
                }
                let Some(shared) = weak.upgrade() else {
                    return;
                };
                let modified = modified_time(&path);
                if modified != last_modified {
                    last_modified = modified;
                    // invalid content on reload keeps the last good configuration
                    if let Ok(config) = Config::load(&path) {
                        shared.apply_config(&config);
                    }
                }
            }
        });
        let mut watch = shared
            .watch
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *watch = Some(WatchHandle { stop });
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|metadata| metadata.modified()).ok()
}

impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instance")
            .field("name", &self.shared.name)
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}

/*
Boilerplate notes.

Clone hands out another handle to the same state, which is exactly what the
registry needs when it returns the default instance; it is not a deep copy.
PartialEq could mean name equality or provenance; neither is obviously right, so
neither is implemented. Default is omitted: an instance needs a name, and the
"default instance" is the registry's concern, not this type's.
*/

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn counting_instance(name: &str) -> (Instance, Arc<Mutex<Vec<Record>>>) {
        let instance = Instance::new(name);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let captured = seen.clone();
        instance.set_callback(move |record| captured.lock().unwrap().push(record.clone()));
        (instance, seen)
    }

    #[test]
    fn gate_table_is_exhaustive() {
        let (instance, seen) = counting_instance("gate-table");
        let statement_levels = [
            Level::Fatal,
            Level::Error,
            Level::Warn,
            Level::Info,
            Level::Debug,
            Level::Trace,
        ];
        for threshold in Level::ALL {
            instance.set_level(threshold);
            for level in statement_levels {
                seen.lock().unwrap().clear();
                drop(instance.statement(level, file!(), line!(), "tests::gate"));
                let delivered = !seen.lock().unwrap().is_empty();
                let expected = threshold != Level::Off && level <= threshold;
                assert_eq!(
                    delivered, expected,
                    "level {level:?} against threshold {threshold:?}"
                );
                assert_eq!(instance.is_enabled(level), expected);
            }
        }
    }

    #[test]
    fn off_statement_level_never_passes() {
        let instance = Instance::new("off-gate");
        instance.set_trace();
        assert!(!instance.is_enabled(Level::Off));
    }

    #[test]
    fn convenience_setters_match_set_level() {
        let instance = Instance::new("setters");
        instance.set_off();
        assert_eq!(instance.level(), Level::Off);
        instance.set_fatal();
        assert_eq!(instance.level(), Level::Fatal);
        instance.set_error();
        assert_eq!(instance.level(), Level::Error);
        instance.set_warn();
        assert_eq!(instance.level(), Level::Warn);
        instance.set_info();
        assert_eq!(instance.level(), Level::Info);
        instance.set_debug();
        assert_eq!(instance.level(), Level::Debug);
        instance.set_trace();
        assert_eq!(instance.level(), Level::Trace);
    }

    #[test]
    fn set_level_is_idempotent() {
        let (instance, seen) = counting_instance("idempotent");
        instance.set_level(Level::Info);
        instance.set_level(Level::Info);
        drop(instance.statement(Level::Info, file!(), line!(), "tests::fn"));
        drop(instance.statement(Level::Debug, file!(), line!(), "tests::fn"));
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn clear_callback_restores_sink_delivery_path() {
        let (instance, seen) = counting_instance("clear-cb");
        instance.clear_callback();
        // nothing to assert on stderr; the point is the callback no longer fires
        drop(instance.statement(Level::Fatal, file!(), line!(), "tests::fn"));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn invalid_config_path_falls_back_silently() {
        let (instance, seen) = counting_instance("bad-config");
        instance.set_config_file("/nonexistent/loggate.conf");
        drop(
            instance.statement(Level::Debug, file!(), line!(), "tests::fn") << "still works",
        );
        assert_eq!(seen.lock().unwrap().len(), 1);
        assert_eq!(instance.level(), Level::Trace);
    }

    #[test]
    fn config_file_applies_immediately() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "level = ERR").unwrap();
        file.flush().unwrap();

        let instance = Instance::new("config-now");
        instance.set_config_file(file.path());
        assert_eq!(instance.level(), Level::Error);

        // re-pointing at the same file changes nothing observable
        instance.set_config_file(file.path());
        assert_eq!(instance.level(), Level::Error);
    }

    #[test]
    fn config_file_hot_reloads_on_change() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "level = ERR\n").unwrap();

        let instance = Instance::new("config-reload");
        instance.set_config_file_every(file.path(), Duration::from_millis(10));
        assert_eq!(instance.level(), Level::Error);

        // give the rewrite a distinct mtime, then wait for the watcher
        std::thread::sleep(Duration::from_millis(50));
        std::fs::write(file.path(), "level = WARNING\n").unwrap();
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while instance.level() != Level::Warn {
            assert!(
                std::time::Instant::now() < deadline,
                "watcher never picked up the change"
            );
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn reload_with_invalid_content_keeps_last_good_configuration() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "level = ERR\n").unwrap();

        let instance = Instance::new("config-bad-reload");
        instance.set_config_file_every(file.path(), Duration::from_millis(10));
        assert_eq!(instance.level(), Level::Error);

        std::thread::sleep(Duration::from_millis(50));
        std::fs::write(file.path(), "level = NOT A LEVEL\n").unwrap();
        std::thread::sleep(Duration::from_millis(200));
        assert_eq!(instance.level(), Level::Error);
    }

    #[test]
    fn concurrent_logging_and_reconfiguration_stay_coherent() {
        let (instance, seen) = counting_instance("concurrent");
        let writer = {
            let instance = instance.clone();
            std::thread::spawn(move || {
                for _ in 0..500 {
                    instance.set_level(Level::Debug);
                    instance.set_level(Level::Warn);
                }
            })
        };
        for i in 0..500 {
            drop(instance.statement(Level::Warn, file!(), line!(), "tests::fn") << "tick" << i);
        }
        writer.join().unwrap();
        // Warn always passes both Debug and Warn thresholds, so nothing is lost
        // and every record arrived intact.
        let records = seen.lock().unwrap();
        assert_eq!(records.len(), 500);
        assert!(records.iter().all(|r| r.content().starts_with("tick ")));
    }
}
