use anyhow::Result;
use std::io::Write;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates that every selected test passed; 1 indicates a failure.
pub type ExitCode = i32;

/// Object-safe trait for the body of a named test.
///
/// A body signals failure by returning an error, typically through
/// [`anyhow::ensure!`]. Anything written to `out` ends up between the
/// runner's "Running Test" and "passed!" lines.
///
/// The runner prints `Assertion failed: ` followed by the error's own message,
/// so the wording is up to the body: `ensure!(a == b, "a is not equal to b")`
/// prints that text, while a bare `ensure!(a == b)` prints anyhow's default
/// "Condition failed: ..." message.
pub trait TestBody {
    /// Executes the test.
    fn run(&self, out: &mut dyn Write) -> Result<()>;
}

impl<F> TestBody for F
where
    F: Fn(&mut dyn Write) -> Result<()>,
{
    fn run(&self, out: &mut dyn Write) -> Result<()> {
        self(out)
    }
}
