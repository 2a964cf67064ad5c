/// Terminal presenters: turn a rendered `Screen` into bytes on a writer.
///
/// `CrtTerminal` draws the bordered green-phosphor look with a scanline
/// refresh, `PlainTerminal` prints bare text for dumb terminals and tests.
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::core::renderer::Screen;

pub const SCREEN_WIDTH: usize = 80;
pub const SCREEN_HEIGHT: usize = 24;

/// Usable columns between "| " and " |"
const INNER_WIDTH: usize = SCREEN_WIDTH - 4;
/// Rows between the top and bottom border
const INNER_HEIGHT: usize = SCREEN_HEIGHT - 2;

/// Narrow output interface the engine talks to
pub trait Presenter {
    /// Redraw the whole screen
    fn present(&mut self, screen: &Screen) -> io::Result<()>;

    /// Standalone message outside the game screen (boot banner, farewell)
    fn notice(&mut self, text: &str) -> io::Result<()>;

    /// Input prompt, left on the current line
    fn prompt(&mut self, text: &str) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Border,
    Title,
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub kind: RowKind,
    pub text: String,
}

/// Lay a screen out as a fixed 80x24 bordered frame.
///
/// Long lines are cut at the inner width, missing rows are padded with
/// blanks and surplus rows are dropped, so every frame has the same shape.
pub fn frame(screen: &Screen) -> Vec<Row> {
    let border = format!("+{}+", "-".repeat(SCREEN_WIDTH - 2));
    let mut rows = Vec::with_capacity(SCREEN_HEIGHT);
    rows.push(Row { kind: RowKind::Border, text: border.clone() });

    let title = format!("{:^width$}", clip(&screen.title), width = INNER_WIDTH);
    rows.push(Row { kind: RowKind::Title, text: format!("| {} |", title) });

    let body = screen
        .lines
        .iter()
        .map(|line| line.as_str())
        .chain(std::iter::repeat(""))
        .take(INNER_HEIGHT - 1);
    for line in body {
        rows.push(Row {
            kind: RowKind::Body,
            text: format!("| {:<width$} |", clip(line), width = INNER_WIDTH),
        });
    }

    rows.push(Row { kind: RowKind::Border, text: border });
    rows
}

fn clip(line: &str) -> String {
    line.chars().take(INNER_WIDTH).collect()
}

/// Timing of the cosmetic effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrtStyle {
    /// Pause after each drawn row, simulating the beam sweeping down
    pub scan_delay: Duration,
    /// How long standalone notices stay up
    pub notice_pause: Duration,
}

impl Default for CrtStyle {
    fn default() -> Self {
        Self {
            scan_delay: Duration::from_millis(5),
            notice_pause: Duration::from_millis(1500),
        }
    }
}

#[derive(Clone, Copy)]
enum Glow {
    Dim,
    Bright,
    Blink,
}

/// Green-on-black presenter with borders and a scanline refresh
pub struct CrtTerminal<W: Write> {
    out: W,
    style: CrtStyle,
}

impl<W: Write> CrtTerminal<W> {
    pub fn new(out: W, style: CrtStyle) -> Self {
        Self { out, style }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    /// Queue text in phosphor colors, resetting afterwards
    fn glow(&mut self, text: &str, glow: Glow) -> io::Result<()> {
        self.out.queue(SetForegroundColor(Color::Green))?;
        self.out.queue(SetBackgroundColor(Color::Black))?;
        match glow {
            Glow::Dim => {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
            Glow::Bright => {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            Glow::Blink => {
                self.out.queue(SetAttribute(Attribute::Bold))?;
                self.out.queue(SetAttribute(Attribute::SlowBlink))?;
            }
        }
        self.out.queue(Print(text))?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(ResetColor)?;
        Ok(())
    }

    fn linger(&self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

impl<W: Write> Presenter for CrtTerminal<W> {
    fn present(&mut self, screen: &Screen) -> io::Result<()> {
        self.clear_screen()?;
        for row in frame(screen) {
            match row.kind {
                RowKind::Border => self.glow(&row.text, Glow::Dim)?,
                RowKind::Body => self.glow(&row.text, Glow::Bright)?,
                RowKind::Title => {
                    // Only the title text blinks; its side borders stay dim
                    let title = row
                        .text
                        .strip_prefix("| ")
                        .and_then(|t| t.strip_suffix(" |"))
                        .unwrap_or(&row.text);
                    self.glow("| ", Glow::Dim)?;
                    self.glow(title, Glow::Blink)?;
                    self.glow(" |", Glow::Dim)?;
                }
            }
            self.out.queue(Print("\n"))?;
            // Flush per row so the refresh visibly sweeps top to bottom
            self.out.flush()?;
            self.linger(self.style.scan_delay);
        }
        Ok(())
    }

    fn notice(&mut self, text: &str) -> io::Result<()> {
        self.clear_screen()?;
        self.glow(text, Glow::Bright)?;
        self.out.queue(Print("\n"))?;
        self.out.flush()?;
        self.linger(self.style.notice_pause);
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.glow(text, Glow::Bright)?;
        self.out.flush()
    }
}

/// Escape-free presenter
pub struct PlainTerminal<W: Write> {
    out: W,
}

impl<W: Write> PlainTerminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for PlainTerminal<W> {
    fn present(&mut self, screen: &Screen) -> io::Result<()> {
        writeln!(self.out)?;
        write!(self.out, "{}", screen)?;
        self.out.flush()
    }

    fn notice(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }
}
