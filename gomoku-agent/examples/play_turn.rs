//! Example: ask a real model for one move on a small mid-game board
//!
//! Run with:
//!   # Endpoint and key from PROF_BASE_URL / PROF_API_KEY (or .env):
//!   cargo run --example play_turn
//!
//!   # Casual prompt style instead of strict:
//!   cargo run --example play_turn -- --casual
//!
//!   # Just print the prompts:
//!   cargo run --example play_turn -- --prompt-only
//!
//! Set RUST_LOG=gomoku_agent=debug to watch each stage.

use gomoku_agent::{
    AgentConfig, BoardFormat, GameState, LlmAgent, Move, Player, PromptBuilder, PromptStyle,
};
use std::env;
use tracing_subscriber::EnvFilter;

const SIZE: usize = 9;

/// Bare-bones board: stones only, any empty cell is legal.
struct Board {
    cells: [[Option<Player>; SIZE]; SIZE],
}

impl Board {
    fn with_stones(stones: &[(usize, usize, Player)]) -> Self {
        let mut cells = [[None; SIZE]; SIZE];
        for &(row, col, player) in stones {
            cells[row][col] = Some(player);
        }
        Self { cells }
    }
}

impl GameState for Board {
    fn board_size(&self) -> usize {
        SIZE
    }

    fn format_board(&self, format: BoardFormat) -> String {
        let symbol = |cell: &Option<Player>| cell.map(|p| p.symbol()).unwrap_or(".");
        match format {
            BoardFormat::Json => {
                let rows: Vec<Vec<&str>> = self
                    .cells
                    .iter()
                    .map(|row| row.iter().map(symbol).collect())
                    .collect();
                serde_json::to_string(&rows).unwrap_or_default()
            }
            BoardFormat::Standard => self
                .cells
                .iter()
                .map(|row| row.iter().map(symbol).collect::<Vec<_>>().join(" "))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_none() {
                    moves.push(Move::new(r as i32, c as i32));
                }
            }
        }
        moves
    }

    fn is_valid_move(&self, row: i32, col: i32) -> bool {
        Move::new(row, col).in_bounds(SIZE) && self.cells[row as usize][col as usize].is_none()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let style = if args.iter().any(|arg| arg == "--casual") {
        PromptStyle::Casual
    } else {
        PromptStyle::Strict
    };
    let prompt_only = args.iter().any(|arg| arg == "--prompt-only");

    // Black threatens an open four on row 4
    let board = Board::with_stones(&[
        (4, 2, Player::Black),
        (4, 3, Player::Black),
        (4, 4, Player::Black),
        (3, 3, Player::White),
        (5, 5, Player::White),
    ]);
    let player = Player::White;

    if prompt_only {
        let prompts = PromptBuilder::new(style, player);
        for message in prompts.messages(&board, &board.legal_moves()) {
            println!("=== {:?} ===\n{}\n", message.role, message.content);
        }
        return Ok(());
    }

    let agent = LlmAgent::new(player, AgentConfig::from_env().with_style(style))?;
    let resolution = agent.resolve(&board).await?;

    println!("{} plays {} ({})", player, resolution.mv, resolution.stage);
    Ok(())
}
