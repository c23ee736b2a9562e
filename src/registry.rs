use crate::command::TestBody;
use std::io::Write;

/// A registered test: its name and the body to run.
pub struct TestEntry {
    pub name: String,
    pub body: Box<dyn TestBody>,
}

/// Ordered dispatch table of named tests.
///
/// Entries run in insertion order. Names are not checked for uniqueness.
#[derive(Default)]
pub struct Registry {
    entries: Vec<TestEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a test under `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, body: F) -> &mut Self
    where
        F: Fn(&mut dyn Write) -> anyhow::Result<()> + 'static,
    {
        self.register_body(name, Box::new(body))
    }

    /// Add an already boxed test body under `name`.
    pub fn register_body(&mut self, name: impl Into<String>, body: Box<dyn TestBody>) -> &mut Self {
        self.entries.push(TestEntry {
            name: name.into(),
            body,
        });
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
