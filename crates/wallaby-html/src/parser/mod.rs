//! Single-pass state machine building a tree from markup characters.

/// Parser state machine implementation.
pub mod core;
/// Input and buffer helpers for the state machine.
pub mod helpers;

pub use self::core::{ParseOutput, Parser, ParserState};
