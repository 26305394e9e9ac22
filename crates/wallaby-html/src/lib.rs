//! Lenient HTML/XML parser for the wallaby toolkit.
//!
//! # Scope
//!
//! A single pass over the input characters drives a six-state machine
//! (`Text`, `TagOpen`, `TagClose`, `AttributeName`, `AttributeValue`,
//! `Comment`) that builds a [`wallaby_dom::Node`] tree directly, with an
//! explicit stack of open ancestor elements resolving closing tags.
//!
//! Malformed markup never fails the parse: unmatched closing tags and tags
//! still open at end of input degrade to a best-effort tree plus structural
//! [`ParseWarning`]s, the way lenient browser-adjacent tools behave.
//!
//! # Not implemented
//!
//! - Entity decoding (`&amp;` stays four characters of text)
//! - DOCTYPE, CDATA, and processing-instruction semantics (skipped as
//!   markup noise, never surfaced as nodes)
//! - Implicit tag closing beyond the void-element set
//! - Template-expression interpolation (`${...}` / `{{...}}`)

/// Parse options.
pub mod options;
/// State machine and tree construction.
pub mod parser;
/// Errors and structural warnings.
pub mod warning;

pub use options::ParseOptions;
pub use parser::{ParseOutput, Parser, ParserState};
pub use warning::{ParseError, ParseWarning, WarningKind};

use wallaby_dom::Node;

/// Parse markup with default options, discarding warnings.
///
/// Returns `None` when the input parses to zero nodes, the single node when
/// exactly one top-level node was parsed, and a [`Node::Template`] wrapper
/// when there was more than one.
#[must_use]
pub fn parse(markup: &str) -> Option<Node> {
    Parser::new(markup, ParseOptions::default()).run().root
}

/// Parse markup with explicit options, keeping structural warnings.
#[must_use]
pub fn parse_with(markup: &str, options: &ParseOptions) -> ParseOutput {
    Parser::new(markup, options.clone()).run()
}

/// Parse raw bytes with explicit options.
///
/// # Errors
///
/// Returns [`ParseError::InvalidInput`] if the bytes are not valid UTF-8.
/// This is the only fatal error the parser knows; once the input is text,
/// parsing always produces a result.
pub fn parse_bytes(bytes: &[u8], options: &ParseOptions) -> Result<ParseOutput, ParseError> {
    let markup = std::str::from_utf8(bytes).map_err(|e| ParseError::InvalidInput {
        valid_up_to: e.valid_up_to(),
    })?;
    Ok(parse_with(markup, options))
}
