//! ANSI escape codes used for runner output.

pub const BLUE: &str = "\x1b[1;34m";
pub const RED: &str = "\x1b[1;31m";
pub const WHITE: &str = "\x1b[0m";
pub const GREEN: &str = "\x1b[32m";

pub const BOLD: &str = "\x1b[1m";
pub const STANDARD: &str = "\x1b[0m";

/// Either the escape codes above, or empty strings when color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn pick(&self, code: &'static str) -> &'static str {
        if self.enabled { code } else { "" }
    }

    pub fn blue(&self) -> &'static str {
        self.pick(BLUE)
    }

    pub fn red(&self) -> &'static str {
        self.pick(RED)
    }

    pub fn white(&self) -> &'static str {
        self.pick(WHITE)
    }

    pub fn green(&self) -> &'static str {
        self.pick(GREEN)
    }

    pub fn bold(&self) -> &'static str {
        self.pick(BOLD)
    }

    pub fn standard(&self) -> &'static str {
        self.pick(STANDARD)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true)
    }
}
