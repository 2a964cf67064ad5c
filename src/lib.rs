pub mod core {
	pub mod engine;
	pub mod game;
	pub mod renderer;
	pub mod terminal;
}

pub mod cli;
pub mod games;

// Re-export for convenience
pub use crate::core::engine::{Engine, EngineSettings, SessionSummary};
pub use crate::core::game::{GameStatus, LineGame};
