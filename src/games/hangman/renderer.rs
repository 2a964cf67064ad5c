/// Hangman-specific renderer - pure state to text, no terminal access
use crate::core::renderer::{GameRenderer, Screen};
use crate::games::hangman::game::HangmanState;

pub const TITLE: &str = "--- HANGMAN CRT EDITION ---";
const INPUT_PLACEHOLDER: &str = " >_ ";

/// Gallows drawings indexed by number of wrong guesses
pub const STAGES: [&str; 7] = [
    r"
   -----
   |   |
       |
       |
       |
       |
---------",
    r"
   -----
   |   |
   O   |
       |
       |
       |
---------",
    r"
   -----
   |   |
   O   |
   |   |
       |
       |
---------",
    r"
   -----
   |   |
   O   |
  /|   |
       |
       |
---------",
    r"
   -----
   |   |
   O   |
  /|\  |
       |
       |
---------",
    r"
   -----
   |   |
   O   |
  /|\  |
  /    |
       |
---------",
    r"
   -----
   |   |
   O   |
  /|\  |
  / \  |
       |
---------",
];

/// Drawing for a given number of wrong guesses, clamped to the last stage
pub fn stage(wrong_guesses: u8) -> &'static str {
    let index = (wrong_guesses as usize).min(STAGES.len() - 1);
    // Skip the leading newline that keeps the raw strings aligned
    &STAGES[index][1..]
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HangmanRenderer;

impl GameRenderer<HangmanState> for HangmanRenderer {
    fn render(&self, state: &HangmanState, message: &str) -> Screen {
        let mut screen = Screen::new(TITLE);
        screen.blank();
        for line in stage(state.wrong_guesses()).lines() {
            screen.push(format!("    {}", line));
        }
        screen.blank();
        screen.push(format!(" Word: {}", state.masked_word()));

        let guessed: Vec<String> = state.guessed().map(String::from).collect();
        screen.push(format!(" Guessed Letters: {}", guessed.join(", ")));
        screen.push(format!(" Incorrect Guesses Left: {}", state.remaining_attempts()));
        screen.blank();
        screen.push(format!(" Status: {}", message));
        screen.blank();
        screen.push(INPUT_PLACEHOLDER);
        screen
    }
}
