//! # Prompt construction
//!
//! Renders the `[system, user]` message pair the model sees each turn.
//!
//! Two styles exist and each is internally consistent:
//! - **Strict**: JSON board, enumerated legal moves, priority guidance, and a
//!   shorter repair prompt for a second attempt.
//! - **Casual**: human-readable grid with a legend, no legal-move list and no
//!   repair prompt.

use crate::game::{BoardFormat, GameState, Move, Player};
use gomoku_llm::ChatMessage;

/// Which prompt/parse/fallback policy the agent follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptStyle {
    #[default]
    Strict,
    Casual,
}

impl PromptStyle {
    /// Board serialization this style embeds in the user prompt
    pub fn board_format(&self) -> BoardFormat {
        match self {
            PromptStyle::Strict => BoardFormat::Json,
            PromptStyle::Casual => BoardFormat::Standard,
        }
    }

    /// Only the strict style gets a second model call
    pub fn has_repair(&self) -> bool {
        matches!(self, PromptStyle::Strict)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptStyle::Strict => "strict",
            PromptStyle::Casual => "casual",
        }
    }
}

const STRICT_SYSTEM_PROMPT: &str = "\
You are a Gomoku move selector.
Think silently and do not reveal your reasoning.
Return only a single JSON object with two integer fields: \"row\" and \"col\".
Never include any other text, explanations, tags, or code fences.";

const OUTPUT_SHAPE: &str = r#"{"row": <int>, "col": <int>}"#;

/// Builds prompts for one side in one style. Pure; no I/O.
#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder {
    style: PromptStyle,
    player: Player,
}

impl PromptBuilder {
    pub fn new(style: PromptStyle, player: Player) -> Self {
        Self { style, player }
    }

    pub fn style(&self) -> PromptStyle {
        self.style
    }

    pub fn system_prompt(&self, board_size: usize) -> String {
        match self.style {
            PromptStyle::Strict => STRICT_SYSTEM_PROMPT.to_string(),
            PromptStyle::Casual => format!(
                "You are an expert Gomoku (five in a row) player. \
                 You play {} and your opponent plays {}. \
                 The board is {}x{}. Five of your stones in a row horizontally, \
                 vertically or diagonally wins the game.",
                self.player,
                self.player.rival(),
                board_size,
                board_size
            ),
        }
    }

    /// Render the first-attempt messages from raw inputs
    pub fn render(&self, board: &str, board_size: usize, legal: &[Move]) -> Vec<ChatMessage> {
        let user = match self.style {
            PromptStyle::Strict => self.strict_user_prompt(board, board_size, legal),
            PromptStyle::Casual => self.casual_user_prompt(board),
        };

        vec![
            ChatMessage::system(self.system_prompt(board_size)),
            ChatMessage::user(user),
        ]
    }

    /// Render the first-attempt messages straight from a game state
    pub fn messages<G: GameState + ?Sized>(&self, state: &G, legal: &[Move]) -> Vec<ChatMessage> {
        let board = state.format_board(self.style.board_format());
        self.render(&board, state.board_size(), legal)
    }

    /// Second-attempt messages after an invalid answer. `None` for casual.
    pub fn repair_messages(&self, board_size: usize, legal: &[Move]) -> Option<Vec<ChatMessage>> {
        if !self.style.has_repair() {
            return None;
        }

        let user = format!(
            "Your previous selection was invalid.\n\
             Choose exactly one pair from these legal moves and return JSON only:\n\
             {}\n\n\
             Output exactly: {}",
            legal_moves_json(legal),
            OUTPUT_SHAPE
        );

        Some(vec![
            ChatMessage::system(self.system_prompt(board_size)),
            ChatMessage::user(user),
        ])
    }

    fn strict_user_prompt(&self, board: &str, board_size: usize, legal: &[Move]) -> String {
        format!(
            "You are {player}. Opponent is {rival}. Grid is {size}x{size} with 0-based indices.\n\
             \n\
             Board (JSON):\n\
             {board}\n\
             \n\
             Legal moves (choose exactly one pair from this list):\n\
             {legal}\n\
             \n\
             Priorities:\n\
             1) If you can win in one move this turn, play that move.\n\
             2) Else, if the opponent can win on their next turn, block that move.\n\
             3) Else, extend/defend your longest line, preferring central positions and adjacency to your stones.\n\
             \n\
             Output exactly one line, JSON only, no other text:\n\
             {shape}",
            player = self.player,
            rival = self.player.rival(),
            size = board_size,
            board = board,
            legal = legal_moves_json(legal),
            shape = OUTPUT_SHAPE,
        )
    }

    fn casual_user_prompt(&self, board: &str) -> String {
        format!(
            "Current board (rows and columns are 0-indexed):\n\
             {board}\n\
             \n\
             Legend: {player} = your stones, {rival} = opponent stones, . = empty\n\
             \n\
             Choose your next move and answer with JSON only: {shape}",
            board = board,
            player = self.player,
            rival = self.player.rival(),
            shape = OUTPUT_SHAPE,
        )
    }
}

/// Legal moves as a JSON array of `[row, col]` pairs
pub fn legal_moves_json(legal: &[Move]) -> String {
    let pairs: Vec<[i32; 2]> = legal.iter().map(|m| [m.row, m.col]).collect();
    serde_json::to_string(&pairs).unwrap_or_default()
}
