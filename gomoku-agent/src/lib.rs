//! # Gomoku Agent
//!
//! Picks a Gomoku move by asking a language model:
//! 1. Render the board and legal moves into a prompt
//! 2. Call the completion endpoint
//! 3. Pull a `{"row", "col"}` object out of the reply
//! 4. Check it against the game's own rules
//! 5. Strict style: ask once more with a repair prompt
//! 6. Otherwise fall back to a deterministic legal move
//!
//! The host framework owns the board; the agent only reads it through
//! [`GameState`].

mod agent;
pub mod fallback;
pub mod game;
pub mod parse;
pub mod prompt;

pub use agent::{Agent, AgentConfig, LlmAgent, Resolution};
pub use fallback::Stage;
pub use game::{BoardFormat, GameState, Move, Player};
pub use gomoku_error::{Error, ErrorKind, Result};
pub use prompt::{PromptBuilder, PromptStyle};
