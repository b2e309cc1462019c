//! # gomoku-llm
//!
//! Chat-completion plumbing for the gomoku agent.
//!
//! ## Core Concepts
//! - **ChatMessage**: fixed-shape `{role, content}` record
//! - **LlmProvider**: trait every completion backend implements
//! - **OpenAIProvider**: HTTP client for OpenAI-compatible endpoints
//! - **ProviderConfig**: explicit endpoint/model/key configuration

pub mod provider;

pub use gomoku_error::{Error, ErrorKind, ErrorStatus, Result};
pub use provider::{
    ChatMessage, CompletionRequest, CompletionResponse, FinishReason, LlmProvider,
    OpenAIProvider, ProviderConfig, ProviderError, Role, Usage, API_KEY_VAR, BASE_URL_VAR,
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
};
