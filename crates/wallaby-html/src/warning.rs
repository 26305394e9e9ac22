//! Errors and structural warnings reported by the parser.
//!
//! The taxonomy is deliberately small: the only fatal error is input that is
//! not text at all. Everything structural (a closing tag with no opener, a
//! tag left open at end of input) is a warning carried alongside the
//! best-effort tree, never a failure.

use core::fmt;

use thiserror::Error;

/// Fatal input-contract violation. Aborts the call; nothing is recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input bytes were not valid UTF-8.
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidInput {
        /// Length of the valid prefix, in bytes.
        valid_up_to: usize,
    },
}

/// What kind of structural anomaly a warning describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A closing tag matched nothing on the ancestor stack. The stack is
    /// left unchanged; no phantom element is invented.
    UnmatchedClosingTag,
    /// A tag was still open when the input ended. The element stays in the
    /// tree with whatever children it accumulated.
    UnclosedTag,
}

/// A non-fatal structural anomaly: message material plus where it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// The anomaly category.
    pub kind: WarningKind,
    /// The tag name involved, case as written.
    pub tag: String,
    /// Byte offset of the offending `<` in the input.
    pub offset: usize,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WarningKind::UnmatchedClosingTag => write!(
                f,
                "closing tag </{}> at byte {} has no matching opening tag",
                self.tag, self.offset
            ),
            WarningKind::UnclosedTag => write!(
                f,
                "tag <{}> opened at byte {} was never closed",
                self.tag, self.offset
            ),
        }
    }
}
