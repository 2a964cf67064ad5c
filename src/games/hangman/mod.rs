/// Hangman game module
pub mod game;
pub mod renderer;
pub mod words;

pub use game::{parse_guess, GuessError, GuessOutcome, HangmanGame, HangmanInput, HangmanState, MAX_ATTEMPTS};
pub use renderer::HangmanRenderer;
pub use words::{WordBank, WordBankError, DEFAULT_WORDS};
