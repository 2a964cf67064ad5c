/// Generic game renderer trait and the text screen it produces
use std::fmt;

/// One rendered screen: a title plus body lines, free of terminal codes.
///
/// Presenters decide how to decorate it (frame, colors, refresh effect).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    pub title: String,
    pub lines: Vec<String>,
}

impl Screen {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), lines: Vec::new() }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }
}

#[cfg(test)]
impl Screen {
    pub fn contains(&self, needle: &str) -> bool {
        self.title.contains(needle) || self.lines.iter().any(|l| l.contains(needle))
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Pure rendering of a game state plus the current status message
pub trait GameRenderer<State> {
    fn render(&self, state: &State, message: &str) -> Screen;
}
