use std::collections::BTreeSet;

use rand::Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::core::game::{GameStatus, LineGame};
use crate::games::hangman::renderer::STAGES;
use crate::games::hangman::words::WordBank;

/// Wrong guesses allowed; one per drawing after the empty gallows
pub const MAX_ATTEMPTS: u8 = (STAGES.len() - 1) as u8;

/// Why a line of input did not count as a turn
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("Invalid input. Please enter a single letter (A-Z).")]
    Empty,
    #[error("Invalid input. Please enter a single letter (A-Z).")]
    NotSingleLetter,
    #[error("Invalid input. Please enter a single letter (A-Z).")]
    NotALetter,
    #[error("You already guessed '{0}'. Try again.")]
    AlreadyGuessed(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Hit,
    Miss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HangmanState {
    word: String,
    guessed: BTreeSet<char>,
    remaining_attempts: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HangmanInput {
    Guess(char),
}

impl HangmanState {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_ascii_uppercase(),
            guessed: BTreeSet::new(),
            remaining_attempts: MAX_ATTEMPTS,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Guessed letters in alphabetical order
    pub fn guessed(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed.iter().copied()
    }

    pub fn remaining_attempts(&self) -> u8 {
        self.remaining_attempts
    }

    pub fn wrong_guesses(&self) -> u8 {
        MAX_ATTEMPTS - self.remaining_attempts
    }

    /// Secret word with unguessed letters replaced by `_`, space separated
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| if self.guessed.contains(&c) { c } else { '_' })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn status(&self) -> GameStatus {
        if self.word.chars().all(|c| self.guessed.contains(&c)) {
            GameStatus::Won
        } else if self.remaining_attempts == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Apply one letter. Rejected guesses leave the state untouched.
    pub fn guess(&mut self, letter: char) -> Result<GuessOutcome, GuessError> {
        if !letter.is_ascii_alphabetic() {
            return Err(GuessError::NotALetter);
        }
        let letter = letter.to_ascii_uppercase();

        if self.guessed.contains(&letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        self.guessed.insert(letter);
        if self.word.contains(letter) {
            Ok(GuessOutcome::Hit)
        } else {
            self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
            Ok(GuessOutcome::Miss)
        }
    }
}

/// Read a guess from one line of input, ignoring surrounding whitespace
pub fn parse_guess(line: &str) -> Result<char, GuessError> {
    let mut chars = line.trim().chars();
    let letter = chars.next().ok_or(GuessError::Empty)?;
    if chars.next().is_some() {
        return Err(GuessError::NotSingleLetter);
    }
    if !letter.is_ascii_alphabetic() {
        return Err(GuessError::NotALetter);
    }
    Ok(letter.to_ascii_uppercase())
}

/// Pure game implementation - no UI concerns
pub struct HangmanGame<R: Rng> {
    bank: WordBank,
    rng: R,
}

impl<R: Rng> HangmanGame<R> {
    pub fn new(bank: WordBank, rng: R) -> Self {
        Self { bank, rng }
    }
}

impl<R: Rng> LineGame for HangmanGame<R> {
    type State = HangmanState;
    type Input = HangmanInput;
    type Error = GuessError;

    const NAME: &'static str = "CRT Hangman";

    fn new_game(&mut self) -> Self::State {
        let word = self.bank.pick(&mut self.rng);
        trace!(word, "secret word chosen");
        HangmanState::new(word)
    }

    fn parse_line(line: &str) -> Result<Self::Input, Self::Error> {
        parse_guess(line).map(HangmanInput::Guess)
    }

    fn handle_input(state: &mut Self::State, input: Self::Input) -> Result<String, Self::Error> {
        let HangmanInput::Guess(letter) = input;
        let outcome = state.guess(letter)?;
        debug!(%letter, ?outcome, remaining = state.remaining_attempts(), "guess applied");

        let message = match outcome {
            GuessOutcome::Hit => format!("Good guess! '{}' is in the word.", letter),
            GuessOutcome::Miss => format!("'{}' is not in the word.", letter),
        };
        Ok(message)
    }

    fn status(state: &Self::State) -> GameStatus {
        state.status()
    }

    fn opening_message(_state: &Self::State) -> String {
        "Guess a letter.".to_string()
    }

    fn closing_message(state: &Self::State) -> String {
        match state.status() {
            GameStatus::Won => "CONGRATULATIONS! You guessed the word!".to_string(),
            GameStatus::Lost => format!("GAME OVER! The word was '{}'.", state.word()),
            GameStatus::InProgress => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::words::DEFAULT_WORDS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn play(state: &mut HangmanState, letters: &str) {
        for letter in letters.chars() {
            let _ = state.guess(letter);
        }
    }

    #[test]
    fn max_attempts_matches_drawings() {
        assert_eq!(MAX_ATTEMPTS, 6);
    }

    #[test]
    fn new_state_is_fresh_for_every_bank_word() {
        for word in DEFAULT_WORDS {
            let state = HangmanState::new(word);
            assert_eq!(state.remaining_attempts(), MAX_ATTEMPTS);
            assert_eq!(state.guessed().count(), 0);
            assert_eq!(state.status(), GameStatus::InProgress);
        }
    }

    #[test]
    fn word_is_uppercased() {
        let state = HangmanState::new("rust");
        assert_eq!(state.word(), "RUST");
        assert_eq!(state.masked_word(), "_ _ _ _");
    }

    #[test]
    fn python_all_hits_wins() {
        let mut state = HangmanState::new("PYTHON");
        for letter in "PYTHON".chars() {
            assert_eq!(state.guess(letter), Ok(GuessOutcome::Hit));
        }
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.remaining_attempts(), 6);
        assert_eq!(state.masked_word(), "P Y T H O N");
    }

    #[test]
    fn python_all_misses_loses() {
        let mut state = HangmanState::new("PYTHON");
        for (i, letter) in "ZQXKVW".chars().enumerate() {
            assert_eq!(state.status(), GameStatus::InProgress);
            assert_eq!(state.guess(letter), Ok(GuessOutcome::Miss));
            assert_eq!(state.remaining_attempts(), MAX_ATTEMPTS - 1 - i as u8);
        }
        assert_eq!(state.status(), GameStatus::Lost);
        assert_eq!(state.remaining_attempts(), 0);
        assert_eq!(state.wrong_guesses(), MAX_ATTEMPTS);
    }

    #[test]
    fn repeated_letters_count_once() {
        let mut state = HangmanState::new("PROGRAMMING");
        play(&mut state, "pRoGaMiN");
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.remaining_attempts(), MAX_ATTEMPTS);
    }

    #[test]
    fn win_arrives_with_misses_mixed_in() {
        let mut state = HangmanState::new("RETRO");
        play(&mut state, "ZRQETO");
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.remaining_attempts(), MAX_ATTEMPTS - 2);
    }

    #[test]
    fn repeat_guess_changes_nothing() {
        let mut state = HangmanState::new("PIXEL");
        state.guess('Z').unwrap();
        state.guess('P').unwrap();
        let before = state.clone();

        assert_eq!(state.guess('Z'), Err(GuessError::AlreadyGuessed('Z')));
        assert_eq!(state.guess('p'), Err(GuessError::AlreadyGuessed('P')));
        assert_eq!(state, before);
    }

    #[test]
    fn non_letter_guess_changes_nothing() {
        let mut state = HangmanState::new("PIXEL");
        let before = state.clone();
        assert_eq!(state.guess('7'), Err(GuessError::NotALetter));
        assert_eq!(state.guess('é'), Err(GuessError::NotALetter));
        assert_eq!(state, before);
    }

    #[test]
    fn masked_word_reveals_every_occurrence() {
        let mut state = HangmanState::new("CONSOLE");
        play(&mut state, "OC");
        assert_eq!(state.masked_word(), "C O _ _ O _ _");
    }

    #[test]
    fn guessed_letters_are_sorted() {
        let mut state = HangmanState::new("PIXEL");
        play(&mut state, "XAPZ");
        assert_eq!(state.guessed().collect::<String>(), "APXZ");
    }

    #[test]
    fn parse_guess_accepts_one_letter() {
        assert_eq!(parse_guess("p"), Ok('P'));
        assert_eq!(parse_guess("  Q \n"), Ok('Q'));
    }

    #[test]
    fn parse_guess_rejects_bad_lines() {
        assert_eq!(parse_guess(""), Err(GuessError::Empty));
        assert_eq!(parse_guess("   "), Err(GuessError::Empty));
        assert_eq!(parse_guess("ab"), Err(GuessError::NotSingleLetter));
        assert_eq!(parse_guess("7"), Err(GuessError::NotALetter));
        assert_eq!(parse_guess("?"), Err(GuessError::NotALetter));
    }

    #[test]
    fn invalid_lines_never_touch_state() {
        let mut state = HangmanState::new("PYTHON");
        state.guess('P').unwrap();
        let before = state.clone();
        for line in ["7", "", "ab", "  ", "%", "p"] {
            let applied = HangmanGame::<StdRng>::parse_line(line)
                .and_then(|input| HangmanGame::<StdRng>::handle_input(&mut state, input));
            assert!(applied.is_err(), "{line:?} should be rejected");
        }
        assert_eq!(state, before);
    }

    #[test]
    fn handle_input_reports_hits_and_misses() {
        let mut state = HangmanState::new("PYTHON");
        let hit = HangmanGame::<StdRng>::handle_input(&mut state, HangmanInput::Guess('P'));
        assert_eq!(hit, Ok("Good guess! 'P' is in the word.".to_string()));
        let miss = HangmanGame::<StdRng>::handle_input(&mut state, HangmanInput::Guess('Z'));
        assert_eq!(miss, Ok("'Z' is not in the word.".to_string()));
        let again = HangmanGame::<StdRng>::handle_input(&mut state, HangmanInput::Guess('Z'));
        assert_eq!(
            again.unwrap_err().to_string(),
            "You already guessed 'Z'. Try again."
        );
    }

    #[test]
    fn closing_messages() {
        let mut won = HangmanState::new("RETRO");
        play(&mut won, "RETO");
        assert_eq!(
            HangmanGame::<StdRng>::closing_message(&won),
            "CONGRATULATIONS! You guessed the word!"
        );

        let mut lost = HangmanState::new("RETRO");
        play(&mut lost, "ABCDFG");
        assert_eq!(
            HangmanGame::<StdRng>::closing_message(&lost),
            "GAME OVER! The word was 'RETRO'."
        );
    }

    #[test]
    fn seeded_games_pick_the_same_word() {
        let mut a = HangmanGame::new(WordBank::default(), StdRng::seed_from_u64(99));
        let mut b = HangmanGame::new(WordBank::default(), StdRng::seed_from_u64(99));
        for _ in 0..5 {
            assert_eq!(a.new_game().word(), b.new_game().word());
        }
    }
}
