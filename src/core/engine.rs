use crate::core::game::{GameStatus, LineGame};
use crate::core::renderer::GameRenderer;
use crate::core::terminal::Presenter;
use anyhow::Result;
use std::io::{self, BufRead};
use tracing::{debug, info};

const GUESS_PROMPT: &str = "Enter your guess: ";
const REPLAY_PROMPT: &str = "\nPlay again? (yes/no): ";
const QUIT_COMMANDS: [&str; 2] = ["quit", "exit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    /// Show the boot banner before the first round
    pub boot_banner: bool,
    /// Offer another round after each finished one
    pub replay: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self { boot_banner: true, replay: true }
    }
}

/// What happened over a whole session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub played: u32,
    pub won: u32,
    pub quit: bool,
}

/// Turn loop phases
enum Phase {
    Prompting,
    Processing(String),
    Terminal(GameStatus),
}

enum RoundEnd {
    Finished(GameStatus),
    Quit,
}

/// Synchronous driver: read a line, update the state, redraw
pub struct Engine<G, R, P>
where
    G: LineGame,
    R: GameRenderer<G::State>,
    P: Presenter,
{
    game: G,
    renderer: R,
    presenter: P,
    settings: EngineSettings,
}

impl<G, R, P> Engine<G, R, P>
where
    G: LineGame,
    R: GameRenderer<G::State>,
    P: Presenter,
{
    pub fn new(game: G, renderer: R, presenter: P, settings: EngineSettings) -> Self {
        Self { game, renderer, presenter, settings }
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Play rounds until the player quits, declines a replay, or input ends
    pub fn run<B: BufRead>(&mut self, mut input: B) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        info!(game = G::NAME, "session started");

        if self.settings.boot_banner {
            self.presenter.notice(&format!("Booting up {}...", G::NAME))?;
        }

        loop {
            match self.play_round(&mut input)? {
                RoundEnd::Quit => {
                    summary.quit = true;
                    break;
                }
                RoundEnd::Finished(status) => {
                    summary.played += 1;
                    if status == GameStatus::Won {
                        summary.won += 1;
                    }
                    if !self.settings.replay || !self.ask_replay(&mut input)? {
                        break;
                    }
                }
            }
        }

        self.presenter.notice(&format!("Thanks for playing {}!", G::NAME))?;
        info!(played = summary.played, won = summary.won, quit = summary.quit, "session ended");
        Ok(summary)
    }

    fn play_round<B: BufRead>(&mut self, input: &mut B) -> Result<RoundEnd> {
        let mut state = self.game.new_game();
        let message = G::opening_message(&state);
        self.draw(&state, &message)?;
        debug!("round started");

        let mut phase = Phase::Prompting;
        loop {
            phase = match phase {
                Phase::Prompting => {
                    self.presenter.prompt(GUESS_PROMPT)?;
                    match read_line(input)? {
                        None => {
                            debug!("input closed");
                            return Ok(RoundEnd::Quit);
                        }
                        Some(line) if is_quit(&line) => return Ok(RoundEnd::Quit),
                        Some(line) => Phase::Processing(line),
                    }
                }
                Phase::Processing(line) => {
                    let message = match G::parse_line(&line)
                        .and_then(|input| G::handle_input(&mut state, input))
                    {
                        Ok(message) => message,
                        Err(e) => {
                            debug!(line = line.trim(), error = %e, "input rejected");
                            e.to_string()
                        }
                    };

                    let status = G::status(&state);
                    if status.is_over() {
                        Phase::Terminal(status)
                    } else {
                        self.draw(&state, &message)?;
                        Phase::Prompting
                    }
                }
                Phase::Terminal(status) => {
                    let closing = G::closing_message(&state);
                    self.draw(&state, &closing)?;
                    info!(?status, "round over");
                    return Ok(RoundEnd::Finished(status));
                }
            };
        }
    }

    fn ask_replay<B: BufRead>(&mut self, input: &mut B) -> Result<bool> {
        self.presenter.prompt(REPLAY_PROMPT)?;
        let answer = read_line(input)?.unwrap_or_default();
        Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "yes" | "y"))
    }

    fn draw(&mut self, state: &G::State, message: &str) -> io::Result<()> {
        let screen = self.renderer.render(state, message);
        self.presenter.present(&screen)
    }
}

/// Next line without its terminator, or `None` at end of input.
///
/// Bytes that are not UTF-8 become replacement characters, which the game
/// then rejects like any other bad guess.
fn read_line<B: BufRead>(input: &mut B) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    while matches!(buf.last(), Some(b'\n' | b'\r')) {
        buf.pop();
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

fn is_quit(line: &str) -> bool {
    let line = line.trim();
    QUIT_COMMANDS.iter().any(|cmd| line.eq_ignore_ascii_case(cmd))
}
