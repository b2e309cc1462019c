//! Shared fixtures: an in-memory board and a scripted completion backend.

#![allow(dead_code)]

use gomoku_agent::{BoardFormat, GameState, Move};
use gomoku_llm::{
    CompletionRequest, CompletionResponse, FinishReason, LlmProvider, ProviderError, Usage,
};
use std::cell::Cell;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Board whose legality is spelled out by the test.
pub struct FakeBoard {
    size: usize,
    legal: Vec<Move>,
    /// Listed as legal but refused by `is_valid_move`
    refused: Vec<Move>,
    /// Not listed but accepted by `is_valid_move`
    unlisted_valid: Vec<Move>,
    /// Returned from the second `legal_moves()` call onwards
    requery: Option<Vec<Move>>,
    legal_queries: Cell<usize>,
}

impl FakeBoard {
    pub fn new(size: usize, legal: &[(i32, i32)]) -> Self {
        Self {
            size,
            legal: to_moves(legal),
            refused: Vec::new(),
            unlisted_valid: Vec::new(),
            requery: None,
            legal_queries: Cell::new(0),
        }
    }

    pub fn refusing(mut self, moves: &[(i32, i32)]) -> Self {
        self.refused = to_moves(moves);
        self
    }

    pub fn also_valid(mut self, moves: &[(i32, i32)]) -> Self {
        self.unlisted_valid = to_moves(moves);
        self
    }

    pub fn requery_returns(mut self, moves: &[(i32, i32)]) -> Self {
        self.requery = Some(to_moves(moves));
        self
    }

    pub fn legal_queries(&self) -> usize {
        self.legal_queries.get()
    }
}

impl GameState for FakeBoard {
    fn board_size(&self) -> usize {
        self.size
    }

    fn format_board(&self, format: BoardFormat) -> String {
        let rows: Vec<Vec<u8>> = vec![vec![0; self.size]; self.size];
        match format {
            BoardFormat::Json => serde_json::to_string(&rows).unwrap(),
            BoardFormat::Standard => rows
                .iter()
                .map(|row| row.iter().map(|_| ".").collect::<Vec<_>>().join(" "))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    fn legal_moves(&self) -> Vec<Move> {
        let calls = self.legal_queries.get();
        self.legal_queries.set(calls + 1);
        match (&self.requery, calls) {
            (Some(requery), n) if n > 0 => requery.clone(),
            _ => self.legal.clone(),
        }
    }

    fn is_valid_move(&self, row: i32, col: i32) -> bool {
        let mv = Move::new(row, col);
        if !mv.in_bounds(self.size) || self.refused.contains(&mv) {
            return false;
        }
        self.legal.contains(&mv) || self.unlisted_valid.contains(&mv)
    }
}

fn to_moves(pairs: &[(i32, i32)]) -> Vec<Move> {
    pairs.iter().copied().map(Move::from).collect()
}

/// One canned answer from the scripted backend
pub enum Reply {
    Text(&'static str),
    NoContent,
    Fail(ProviderError),
}

/// Completion backend that replays canned replies and records requests.
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn texts(texts: &[&'static str]) -> Self {
        Self::new(texts.iter().map(|&t| Reply::Text(t)).collect())
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn request(&self, index: usize) -> CompletionRequest {
        self.requests.lock().unwrap()[index].clone()
    }
}

impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, ProviderError> {
        self.requests.lock().unwrap().push(request);
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("agent made more completion calls than scripted");

        let content = match reply {
            Reply::Text(text) => Some(text.to_string()),
            Reply::NoContent => None,
            Reply::Fail(err) => return Err(err),
        };

        Ok(CompletionResponse {
            id: format!("scripted-{}", self.calls()),
            model: "scripted-model".to_string(),
            content,
            finish_reason: FinishReason::Stop,
            usage: Usage::default(),
        })
    }
}
