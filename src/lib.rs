//! Environment-selected tests.
//!
//! A test is run only when its name is listed in the `SURTUR_TESTS` environment
//! variable, or when that variable starts with the wildcard `*`. Names in the
//! variable may be separated by any character that cannot appear in a name, so
//! `SURTUR_TESTS="lexer,parser"` and `SURTUR_TESTS="lexer parser"` are equivalent.
//!
//! The building blocks are the tokenizer in [`lexer`], the predicate in
//! [`selector`], and a [`Runner`] that walks a [`Registry`] of named test bodies,
//! printing pass/fail status for each selected entry.

mod builtin;
pub mod command;
pub mod env;
pub mod lexer;
pub mod registry;
pub mod runner;
pub mod selector;
pub mod style;

pub use builtin::self_checks;
pub use registry::Registry;
/// Just a convenient re-export of the test runner.
///
/// See [`Runner`] for the high-level API and examples.
pub use runner::Runner;
pub use selector::{Selector, is_enabled};
