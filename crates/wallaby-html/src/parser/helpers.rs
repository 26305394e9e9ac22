//! Input, buffer, and commit helpers used by the state machine.

use std::mem;

use wallaby_dom::{Attribute, Node};

use super::core::Parser;

// =============================================================================
// Input helpers
// =============================================================================

impl Parser {
    /// Consume the next input character, advancing the byte position.
    /// Returns `None` at end of input.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next()?;
        self.current_pos += c.len_utf8();
        Some(c)
    }

    /// Look at the next character without consuming it.
    #[must_use]
    pub(super) fn peek(&self) -> Option<char> {
        self.input[self.current_pos..].chars().next()
    }

    /// Check whether the upcoming characters match `target` exactly.
    #[must_use]
    pub(super) fn next_chars_are(&self, target: &str) -> bool {
        self.input[self.current_pos..].starts_with(target)
    }

    /// Consume `count` characters. Used after a successful lookahead.
    pub(super) fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            if self.consume().is_none() {
                break;
            }
        }
    }
}

// =============================================================================
// Tree and buffer helpers
// =============================================================================

impl Parser {
    /// Attach a finished node at the current insertion point: the innermost
    /// open element, or the top-level root list when the stack is empty.
    pub(super) fn append_node(&mut self, node: Node) {
        if let Some(open) = self.stack.last_mut() {
            open.data.children.push(node);
        } else {
            self.roots.push(node);
        }
    }

    /// Commit pending character data as a text node, applying whitespace
    /// collapsing unless `preserve_whitespace` is set. A run that collapses
    /// to nothing produces no node at all.
    pub(super) fn flush_text(&mut self) {
        if self.text_buf.is_empty() {
            return;
        }
        let raw = mem::take(&mut self.text_buf);
        let content = if self.options.preserve_whitespace {
            raw
        } else {
            collapse_indentation(&raw)
        };
        if !content.is_empty() {
            self.append_node(Node::Text(content));
        }
    }

    /// Commit a boolean-style attribute: the accumulated name becomes its
    /// own value (`checked` → `checked="checked"`). No-op when no name is
    /// pending.
    pub(super) fn commit_bare_attribute(&mut self) {
        self.attr_ready = false;
        if self.attr_name.is_empty() {
            return;
        }
        let name = mem::take(&mut self.attr_name);
        let value = name.clone();
        self.tag.props.push(Attribute::new(name, value));
    }

    /// Commit the accumulated name/value pair as an attribute.
    pub(super) fn commit_attribute(&mut self) {
        let name = mem::take(&mut self.attr_name);
        let value = mem::take(&mut self.attr_value);
        self.quote = None;
        self.attr_ready = false;
        if !name.is_empty() {
            self.tag.props.push(Attribute::new(name, value));
        }
    }
}

/// Collapse source indentation out of a text run: a newline and every
/// whitespace character following it are dropped, while spaces that have no
/// preceding newline stay put.
pub(super) fn collapse_indentation(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\n' {
            while chars.peek().is_some_and(|&next| next.is_whitespace()) {
                let _ = chars.next();
            }
        } else {
            out.push(c);
        }
    }
    out
}
