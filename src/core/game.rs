/// Core game interface for line-driven terminal games
use std::fmt;

/// Where a single game stands after the latest input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Main game trait driven by the engine loop.
///
/// A game owns whatever it needs to start new rounds (word lists, random
/// sources) while each round lives in an explicit `State` value that the
/// engine threads through the loop. Parsing and rule checks are plain
/// functions so they can be tested without a terminal.
pub trait LineGame {
    /// Everything that describes one round in progress
    type State;

    /// A validated player move
    type Input;

    /// Rejected input, shown to the player in the status line
    type Error: fmt::Display;

    const NAME: &'static str;

    /// Start a fresh round
    fn new_game(&mut self) -> Self::State;

    /// Turn one line typed by the player into a move
    fn parse_line(line: &str) -> Result<Self::Input, Self::Error>;

    /// Apply a move, returning the message for the status line
    fn handle_input(state: &mut Self::State, input: Self::Input) -> Result<String, Self::Error>;

    fn status(state: &Self::State) -> GameStatus;

    /// Status line shown before the first move
    fn opening_message(_state: &Self::State) -> String {
        String::new()
    }

    /// Status line shown once the round is won or lost
    fn closing_message(state: &Self::State) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_in_progress_is_open() {
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Won.is_over());
        assert!(GameStatus::Lost.is_over());
    }
}
