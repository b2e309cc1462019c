//! # gomoku-error
//!
//! Unified error handling for the gomoku LLM agent.
//!
//! ## Design
//!
//! - **ErrorKind**: What went wrong (e.g., NetworkFailed, NoLegalMoves)
//! - **ErrorStatus**: Whether retrying the turn makes sense
//! - **Error Context**: Key-value pairs that help locate the cause
//! - **Error Source**: The wrapped underlying error, without leaking its type
//!
//! ## Usage
//!
//! ```rust
//! use gomoku_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::NoLegalMoves, "board is full")
//!         .with_operation("agent::get_move")
//!         .with_context("board_size", "15"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, gomoku_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - An error is handled once; callers further up only append context
//! - No blanket `From<OtherError>` impls for library error types

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using the gomoku Error
pub type Result<T> = std::result::Result<T, Error>;
