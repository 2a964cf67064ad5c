use std::time::Duration;

use clap::{ArgAction, Parser};
use tracing::Level;

use crate::core::engine::EngineSettings;
use crate::core::terminal::CrtStyle;

#[derive(Debug, Parser)]
#[command(name = "crt-hangman")]
#[command(about = "Hangman on a green-screen terminal")]
#[command(version)]
pub struct Cli {
    /// Seed for the word picker (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Comma-separated words replacing the built-in list
    #[arg(long, value_delimiter = ',')]
    pub words: Option<Vec<String>>,

    /// Plain text output: no colors, borders or delays
    #[arg(long)]
    pub plain: bool,

    /// Delay between rows of the scanline refresh, in milliseconds
    #[arg(long, default_value_t = 5)]
    pub scan_delay_ms: u64,

    /// Skip the boot banner
    #[arg(long)]
    pub no_boot: bool,

    /// Play a single game without offering a replay
    #[arg(long)]
    pub once: bool,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Presentation choice resolved from the flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Plain,
    Crt(CrtStyle),
}

/// Settings the binary needs, resolved from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub words: Option<Vec<String>>,
    pub presentation: Presentation,
    pub engine: EngineSettings,
    pub log_level: Level,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let presentation = if cli.plain {
            Presentation::Plain
        } else {
            Presentation::Crt(CrtStyle {
                scan_delay: Duration::from_millis(cli.scan_delay_ms),
                ..CrtStyle::default()
            })
        };

        let log_level = match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };

        Self {
            seed: cli.seed,
            words: cli.words,
            presentation,
            engine: EngineSettings { boot_banner: !cli.no_boot, replay: !cli.once },
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Config {
        let argv = std::iter::once("crt-hangman").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().into()
    }

    #[test]
    fn defaults() {
        let config = config(&[]);
        assert_eq!(config.seed, None);
        assert_eq!(config.words, None);
        assert_eq!(config.presentation, Presentation::Crt(CrtStyle::default()));
        assert_eq!(config.engine, EngineSettings::default());
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn words_are_split_on_commas() {
        let config = config(&["--words", "rust,tokio,serde"]);
        assert_eq!(
            config.words,
            Some(vec!["rust".to_string(), "tokio".to_string(), "serde".to_string()])
        );
    }

    #[test]
    fn plain_and_single_game() {
        let config = config(&["--plain", "--once", "--no-boot", "--seed", "7"]);
        assert_eq!(config.presentation, Presentation::Plain);
        assert_eq!(config.engine, EngineSettings { boot_banner: false, replay: false });
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn scan_delay_is_configurable() {
        let config = config(&["--scan-delay-ms", "0"]);
        match config.presentation {
            Presentation::Crt(style) => assert!(style.scan_delay.is_zero()),
            Presentation::Plain => panic!("expected CRT presentation"),
        }
    }

    #[test]
    fn verbosity_raises_log_level() {
        assert_eq!(config(&["-v"]).log_level, Level::INFO);
        assert_eq!(config(&["-vv"]).log_level, Level::DEBUG);
        assert_eq!(config(&["-vvvv"]).log_level, Level::TRACE);
    }

    #[test]
    fn bad_seed_is_rejected() {
        assert!(Cli::try_parse_from(["crt-hangman", "--seed", "abc"]).is_err());
    }
}
