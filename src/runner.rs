use crate::command::ExitCode;
use crate::env::Environment;
use crate::lexer;
use crate::registry::Registry;
use crate::selector::{self, Selector};
use crate::style::Palette;
use log::{debug, info};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result};
use std::io::Write;

/// First failed test of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub name: String,
    pub message: String,
}

/// Outcome of [`Runner::run`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub skipped: usize,
    pub failure: Option<Failure>,
}

impl Summary {
    pub fn exit_code(&self) -> ExitCode {
        if self.failure.is_some() { 1 } else { 0 }
    }
}

/// Names that are empty or start with `!` are disabled and never reach the selector.
pub fn is_runnable_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('!')
}

/// Runs the selected entries of a [`Registry`].
///
/// The selection comes from `SURTUR_TESTS` as seen through the runner's
/// [`Environment`]; it is looked up again for every entry. Whether process
/// changes are observed depends on that environment: [`Environment::default`]
/// reads the process live, [`Environment::new`] is a snapshot.
///
/// Example
/// ```
/// use surtur_tests::env::Environment;
/// use surtur_tests::registry::Registry;
/// use surtur_tests::runner::Runner;
///
/// let mut env = Environment::default();
/// env.set_var("SURTUR_TESTS", "adds");
///
/// let mut registry = Registry::new();
/// registry.register("adds", |_| {
///     anyhow::ensure!(1 + 1 == 2);
///     Ok(())
/// });
/// registry.register("ignored", |_| Err(anyhow::anyhow!("not selected")));
///
/// let mut out: Vec<u8> = Vec::new();
/// let summary = Runner::new(env, registry).with_color(false).run(&mut out).unwrap();
/// assert_eq!(summary.passed, 1);
/// assert_eq!(summary.exit_code(), 0);
/// ```
pub struct Runner {
    env: Environment,
    registry: Registry,
    palette: Palette,
}

impl Runner {
    /// Create a runner over a custom registry.
    pub fn new(env: Environment, registry: Registry) -> Self {
        Self {
            env,
            registry,
            palette: Palette::default(),
        }
    }

    /// Turn ANSI colors in the output on or off.
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.palette = Palette::new(enabled);
        self
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    fn is_selected(&self, name: &str) -> bool {
        if !is_runnable_name(name) {
            return false;
        }
        let raw = selector::raw_value(&self.env);
        Selector::new(raw.as_deref()).is_enabled(name)
    }

    /// Run every selected test in registration order.
    ///
    /// Stops at the first failing test. Only I/O errors on `out` are returned as errors;
    /// test failures are reported through [`Summary::failure`].
    pub fn run(&self, out: &mut dyn Write) -> anyhow::Result<Summary> {
        let p = self.palette;
        let mut summary = Summary::default();

        for entry in self.registry.iter() {
            let name = entry.name.as_str();
            if !self.is_selected(name) {
                debug!("skipping {:?}", name);
                summary.skipped += 1;
                continue;
            }

            writeln!(
                out,
                "{}Running Test{}: {}{}{}",
                p.blue(),
                p.white(),
                p.bold(),
                name,
                p.standard()
            )?;

            match entry.body.run(out) {
                Ok(()) => {
                    writeln!(
                        out,
                        "Test {}{}{}, {}passed!{}",
                        p.bold(),
                        name,
                        p.standard(),
                        p.green(),
                        p.white()
                    )?;
                    summary.passed += 1;
                }
                Err(err) => {
                    let message = format!("{:#}", err);
                    writeln!(out, "{}Assertion failed{}: {}", p.red(), p.white(), message)?;
                    summary.failure = Some(Failure {
                        name: name.to_string(),
                        message,
                    });
                    break;
                }
            }
        }

        info!(
            "{} passed, {} skipped, failure: {:?}",
            summary.passed,
            summary.skipped,
            summary.failure.as_ref().map(|f| f.name.as_str())
        );
        Ok(summary)
    }

    /// Print every registered name and whether the current selection runs it.
    pub fn list(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        for name in self.registry.names() {
            let mark = if self.is_selected(name) { 'x' } else { ' ' };
            writeln!(out, "[{}] {}", mark, name)?;
        }
        Ok(())
    }

    /// Describe how `line`, taken as a `SURTUR_TESTS` value, selects the registered tests.
    fn explain(&self, line: &str, out: &mut dyn Write) -> anyhow::Result<()> {
        let selector = Selector::new(Some(line));
        if selector.is_wildcard() {
            writeln!(out, "wildcard: every test is selected")?;
        } else {
            writeln!(out, "tokens: {:?}", lexer::split_into_tokens(line))?;
        }

        let selected: Vec<&str> = self
            .registry
            .names()
            .filter(|name| is_runnable_name(name) && selector.is_enabled(name))
            .collect();
        if selected.is_empty() {
            writeln!(out, "no registered test is selected")?;
        } else {
            writeln!(out, "selected: {}", selected.join(", "))?;
        }
        Ok(())
    }

    /// Interactive prompt: every line is tried as a selection value.
    pub fn repl(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;

        loop {
            match rl.readline("SURTUR_TESTS> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    if let Err(err) = self.explain(&line, &mut std::io::stdout()) {
                        println!("Error: {:#}", err);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("Eof");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }
}

impl Default for Runner {
    /// A runner over the live process environment and the built-in self checks.
    ///
    /// Nothing is copied up front, so `SURTUR_TESTS` is read from the process
    /// for every entry unless overridden through [`Runner::env_mut`].
    fn default() -> Self {
        Self::new(Environment::default(), crate::builtin::self_checks())
    }
}
