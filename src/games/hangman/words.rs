use rand::Rng;
use thiserror::Error;

/// Words used when no list is supplied on the command line
pub const DEFAULT_WORDS: [&str; 15] = [
    "PYTHON", "PROGRAMMING", "COMPUTER", "DEVELOPER", "ALGORITHM",
    "TERMINAL", "SCANLINE", "RETRO", "HANGMAN", "KEYBOARD",
    "MONITOR", "ELECTRONIC", "VINTAGE", "CONSOLE", "PIXEL",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordBankError {
    #[error("word list is empty")]
    Empty,
    #[error("word '{0}' must contain only letters A-Z")]
    InvalidWord(String),
}

/// Non-empty list of uppercase candidate words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Build a bank from arbitrary input, normalizing to trimmed uppercase.
    ///
    /// Blank entries are skipped; anything else that is not purely ASCII
    /// letters is rejected so every secret word stays winnable.
    pub fn new<I, S>(words: I) -> Result<Self, WordBankError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bank = Vec::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            if !word.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(WordBankError::InvalidWord(word.to_string()));
            }
            bank.push(word.to_ascii_uppercase());
        }

        if bank.is_empty() {
            return Err(WordBankError::Empty);
        }
        Ok(Self { words: bank })
    }

    /// Uniform pick from the bank
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &str {
        &self.words[rng.random_range(0..self.words.len())]
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self { words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect() }
    }
}
