use std::collections::HashMap;
use std::env as stdenv;

/// User-level view of the process environment used by the runner.
///
/// Values in `vars` shadow the live process environment. A key mapped to
/// `None` is treated as unset even if the process has it, which lets callers
/// (and tests) describe the "variable absent" case without touching global state.
/// Keys missing from `vars` are read from the process on every lookup.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Key-value overrides of environment variables. `None` means "unset".
    pub vars: HashMap<String, Option<String>>,
}

impl Environment {
    /// Snapshot the current process environment into a new `Environment` instance.
    ///
    /// Every variable present now is copied, so later changes to it in the process
    /// are not observed. Use [`Environment::default`] for live lookups.
    /// Entries that are not valid unicode are decoded lossily.
    pub fn new() -> Self {
        let vars = stdenv::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    Some(v.to_string_lossy().into_owned()),
                )
            })
            .collect();
        Self { vars }
    }

    /// Get the value of an environment variable.
    ///
    /// Looks up the key in `self.vars` first, falling back to the process environment.
    pub fn get_var(&self, key: &str) -> Option<String> {
        match self.vars.get(key) {
            Some(value) => value.clone(),
            None => stdenv::var_os(key).map(|v| v.to_string_lossy().into_owned()),
        }
    }

    /// Set or override an environment variable in `self.vars`.
    pub fn set_var(&mut self, key: impl Into<String>, val: impl Into<String>) {
        self.vars.insert(key.into(), Some(val.into()));
    }

    /// Mark a variable as unset, regardless of the process environment.
    pub fn remove_var(&mut self, key: impl Into<String>) {
        self.vars.insert(key.into(), None);
    }
}

/// Serialises tests that read or modify the process environment.
#[cfg(test)]
pub(crate) fn lock_process_env() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};
    static MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
    MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Sets (or removes, on `None`) a process variable. Hold [`lock_process_env`] while calling.
#[cfg(test)]
pub(crate) fn set_process_var(key: &str, value: Option<&std::ffi::OsStr>) {
    // SAFETY: callers hold `lock_process_env`, and every test reading the process
    // environment takes that lock too.
    unsafe {
        match value {
            Some(v) => stdenv::set_var(key, v),
            None => stdenv::remove_var(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::env::{Environment, lock_process_env, set_process_var};
    use std::ffi::OsStr;

    #[test]
    fn test_env_set_and_get_var() {
        let mut env = Environment::default();

        // initially absent
        assert_eq!(env.get_var("SOME_RANDOM_ENV_VAR_12345"), None);

        env.set_var("KEY", "VALUE");

        assert_eq!(env.get_var("KEY"), Some("VALUE".to_string()));
    }

    #[test]
    fn test_env_remove_var_shadows_process() {
        let _lock = lock_process_env();
        let mut env = Environment::default();
        assert!(env.get_var("PATH").is_some());

        env.remove_var("PATH");
        assert_eq!(env.get_var("PATH"), None);
    }

    #[test]
    fn test_env_reads_from_process_env() {
        let _lock = lock_process_env();
        let env = Environment::new();
        assert!(env.get_var("PATH").is_some());
    }

    #[test]
    fn test_snapshot_and_live_lookups() {
        let _lock = lock_process_env();
        let key = "SURTUR_ENV_TEST_SNAPSHOT";

        set_process_var(key, Some(OsStr::new("before")));
        let snapshot = Environment::new();
        let live = Environment::default();

        set_process_var(key, Some(OsStr::new("after")));
        assert_eq!(snapshot.get_var(key).as_deref(), Some("before"));
        assert_eq!(live.get_var(key).as_deref(), Some("after"));

        set_process_var(key, None);
        assert_eq!(live.get_var(key), None);
    }

    #[test]
    #[cfg(unix)]
    fn test_snapshot_decodes_non_utf8_lossily() {
        use std::os::unix::ffi::OsStrExt;

        let _lock = lock_process_env();
        let key = "SURTUR_ENV_TEST_NON_UTF8";

        set_process_var(key, Some(OsStr::from_bytes(b"foo\xffbar")));
        let snapshot = Environment::new();
        let live = Environment::default();
        set_process_var(key, None);

        assert_eq!(snapshot.get_var(key).as_deref(), Some("foo\u{FFFD}bar"));
        assert_eq!(live.get_var(key), None);
    }
}
