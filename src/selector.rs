//! Decides whether a named test should run, based on the `SURTUR_TESTS` value.
//!
//! The value is either absent (nothing runs), starts with the wildcard `*`
//! (everything runs), or is a list of test names as understood by
//! [`split_into_tokens`](crate::lexer::split_into_tokens).

use crate::env::Environment;
use crate::lexer;
use log::{debug, trace};

/// Name of the environment variable holding the selection.
pub const SELECTOR_VAR: &str = "SURTUR_TESTS";

/// Marker that selects every test when it is the first character of the value.
pub const WILDCARD: char = '*';

/// A selection over an explicit raw value.
///
/// The raw value is parsed again on every query; nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector<'a> {
    raw: Option<&'a str>,
}

impl<'a> Selector<'a> {
    /// Create a selector from the raw value. `None` stands for an unset variable.
    pub fn new(raw: Option<&'a str>) -> Self {
        Self { raw }
    }

    /// The raw value this selector was created from.
    pub fn raw(&self) -> Option<&'a str> {
        self.raw
    }

    /// True when the value starts with [`WILDCARD`].
    ///
    /// Only the first character is inspected, so `*foo` is a wildcard too.
    pub fn is_wildcard(&self) -> bool {
        self.raw.is_some_and(|raw| raw.starts_with(WILDCARD))
    }

    /// Names listed by the raw value. Empty when unset.
    pub fn tokens(&self) -> Vec<String> {
        self.raw.map(lexer::split_into_tokens).unwrap_or_default()
    }

    /// Whether the test called `name` is selected.
    pub fn is_enabled(&self, name: &str) -> bool {
        let Some(raw) = self.raw else {
            trace!("{} is unset, skipping {}", SELECTOR_VAR, name);
            return false;
        };

        if self.is_wildcard() {
            return true;
        }

        let enabled = lexer::split_into_tokens(raw)
            .iter()
            .any(|token| token == name);
        debug!("{} in {:?}: {}", name, raw, enabled);
        enabled
    }
}

/// Reads the raw selection from `env`, to be borrowed into a [`Selector`]:
///
/// ```
/// use surtur_tests::env::Environment;
/// use surtur_tests::selector::{self, Selector, SELECTOR_VAR};
///
/// let mut env = Environment::default();
/// env.set_var(SELECTOR_VAR, "lexer, parser");
/// let raw = selector::raw_value(&env);
/// let selector = Selector::new(raw.as_deref());
/// assert!(selector.is_enabled("parser"));
/// assert!(!selector.is_enabled("pars"));
/// ```
pub fn raw_value(env: &Environment) -> Option<String> {
    env.get_var(SELECTOR_VAR)
}

/// Whether the test called `name` is selected by the process environment.
///
/// Reads `SURTUR_TESTS` again on every call, so changes to the process
/// environment between calls are observed.
pub fn is_enabled(name: &str) -> bool {
    let raw = std::env::var_os(SELECTOR_VAR).map(|v| v.to_string_lossy().into_owned());
    Selector::new(raw.as_deref()).is_enabled(name)
}
