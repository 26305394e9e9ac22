//! The parser core: a six-state character machine and the open-element stack.
//!
//! One pass over the input, O(1) auxiliary state beyond the ancestor stack.
//! Each call owns all of its state, so concurrent parses never interact.

use std::mem;

use strum_macros::Display;

use wallaby_dom::{Attribute, ElementData, Node, is_void_tag};

use crate::options::ParseOptions;
use crate::warning::{ParseWarning, WarningKind};

/// The parser state machine.
///
/// Transitions: `Text ⇄ TagOpen → TagClose → Text`;
/// `TagClose → AttributeName ⇄ AttributeValue → TagClose`;
/// `Text → Comment → Text`. The initial state is `Text`; there is no
/// terminal state, end of input just triggers the final text commit and the
/// unclosed-tag sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ParserState {
    /// Accumulating character data between tags.
    Text,
    /// Accumulating a tag name right after `<` (or `</`).
    TagOpen,
    /// Inside `< ... >` after the name, scanning for attributes or the
    /// closing `>` / `/>`.
    TagClose,
    /// Accumulating an attribute name.
    AttributeName,
    /// Accumulating an attribute value, quoted or bare.
    AttributeValue,
    /// Accumulating comment content until the literal `-->`.
    Comment,
}

/// The in-progress tag record, committed when its `>` is reached.
#[derive(Debug, Default)]
pub(super) struct TagRecord {
    pub(super) name: String,
    pub(super) props: Vec<Attribute>,
    /// Set when the tag started with `</`.
    pub(super) closing: bool,
    /// Set when a `/` was seen just before `>`.
    pub(super) self_closing: bool,
    /// Set for `<!...>` / `<?...>` markup we scan past without emitting.
    pub(super) discard: bool,
    /// Byte offset of the opening `<`.
    pub(super) offset: usize,
}

/// An entry on the ancestor stack: an element still waiting for its close.
#[derive(Debug)]
pub(super) struct OpenElement {
    pub(super) data: ElementData,
    /// The element's name matched the `ignore` list; the whole subtree is
    /// dropped when this entry pops.
    pub(super) ignored: bool,
    /// Byte offset of the opening `<`, for the unclosed-tag warning.
    pub(super) offset: usize,
}

/// Result of a parse: the root node (per the root-result rule) plus any
/// structural warnings gathered along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutput {
    /// `None` for zero top-level nodes, the node itself for exactly one,
    /// a [`Node::Template`] wrapper for more than one.
    pub root: Option<Node>,
    /// Structural anomalies, in input order.
    pub warnings: Vec<ParseWarning>,
}

/// Single-pass markup parser.
///
/// Create one per input, call [`Parser::run`], read the [`ParseOutput`].
pub struct Parser {
    pub(super) state: ParserState,
    pub(super) input: String,
    pub(super) current_pos: usize,
    pub(super) options: ParseOptions,

    /// Ancestor stack: innermost open element last. The insertion point for
    /// new children is the top entry, or the root list when empty.
    pub(super) stack: Vec<OpenElement>,
    /// Committed top-level nodes.
    pub(super) roots: Vec<Node>,
    pub(super) warnings: Vec<ParseWarning>,

    /// Pending character data, flushed when a tag or comment starts.
    pub(super) text_buf: String,
    /// Pending comment content, delimiters excluded.
    pub(super) comment_buf: String,
    pub(super) tag: TagRecord,
    pub(super) attr_name: String,
    pub(super) attr_value: String,
    /// The quote character delimiting the current attribute value, if any.
    pub(super) quote: Option<char>,
    /// An attribute name has been accumulated and whitespace followed it:
    /// it commits (name as its own value) when the next name starts or the
    /// tag closes.
    pub(super) attr_ready: bool,
}

impl Parser {
    /// Create a parser over `markup` with the given options.
    #[must_use]
    pub fn new(markup: impl Into<String>, options: ParseOptions) -> Self {
        Self {
            state: ParserState::Text,
            input: markup.into(),
            current_pos: 0,
            options,
            stack: Vec::new(),
            roots: Vec::new(),
            warnings: Vec::new(),
            text_buf: String::new(),
            comment_buf: String::new(),
            tag: TagRecord::default(),
            attr_name: String::new(),
            attr_value: String::new(),
            quote: None,
            attr_ready: false,
        }
    }

    /// Run the machine to end of input and return the tree plus warnings.
    #[must_use]
    pub fn run(mut self) -> ParseOutput {
        while let Some(c) = self.consume() {
            match self.state {
                ParserState::Text => self.handle_text(c),
                ParserState::TagOpen => self.handle_tag_open(c),
                ParserState::TagClose => self.handle_tag_close(c),
                ParserState::AttributeName => self.handle_attribute_name(c),
                ParserState::AttributeValue => self.handle_attribute_value(c),
                ParserState::Comment => self.handle_comment(c),
            }
        }
        self.finish()
    }

    /// `Text` state: everything is character data until a `<` that actually
    /// starts a tag or comment. A stray `<` (as in `a < b`) stays literal.
    fn handle_text(&mut self, c: char) {
        if c != '<' {
            self.text_buf.push(c);
            return;
        }
        let tag_offset = self.current_pos - 1;
        if self.next_chars_are("!--") {
            self.advance_by(3);
            self.flush_text();
            self.comment_buf.clear();
            self.state = ParserState::Comment;
            return;
        }
        match self.peek() {
            // DOCTYPE declarations, CDATA sections, processing instructions:
            // scanned to their `>` and dropped, never surfaced as nodes.
            Some('!' | '?') => {
                self.flush_text();
                self.tag = TagRecord {
                    discard: true,
                    offset: tag_offset,
                    ..TagRecord::default()
                };
                self.state = ParserState::TagClose;
            }
            Some(next) if is_name_char(next) || next == '/' => {
                self.flush_text();
                self.tag = TagRecord {
                    offset: tag_offset,
                    ..TagRecord::default()
                };
                self.state = ParserState::TagOpen;
            }
            _ => self.text_buf.push('<'),
        }
    }

    /// `TagOpen` state: accumulate the tag name.
    fn handle_tag_open(&mut self, c: char) {
        match c {
            '/' if self.tag.name.is_empty() && !self.tag.closing => {
                self.tag.closing = true;
            }
            '/' => {
                self.tag.self_closing = true;
                self.state = ParserState::TagClose;
            }
            '>' => self.commit_tag(),
            c if is_name_char(c) => self.tag.name.push(c),
            // Whitespace (or any other non-name character) ends the name and
            // moves into the attribute region.
            _ => self.state = ParserState::TagClose,
        }
    }

    /// `TagClose` state: between the tag name and `>`, looking for the next
    /// attribute name or the end of the tag.
    fn handle_tag_close(&mut self, c: char) {
        match c {
            '>' => self.commit_tag(),
            '/' => self.tag.self_closing = true,
            c if is_name_char(c) => {
                // A name after a stray `/` means that slash was not a
                // self-close after all.
                self.tag.self_closing = false;
                self.attr_name.clear();
                self.attr_name.push(c);
                self.attr_ready = false;
                self.state = ParserState::AttributeName;
            }
            _ => {}
        }
    }

    /// `AttributeName` state.
    fn handle_attribute_name(&mut self, c: char) {
        match c {
            '=' => {
                self.attr_value.clear();
                self.quote = None;
                self.attr_ready = false;
                self.state = ParserState::AttributeValue;
            }
            '>' => {
                self.commit_bare_attribute();
                self.commit_tag();
            }
            '/' => {
                self.commit_bare_attribute();
                self.tag.self_closing = true;
                self.state = ParserState::TagClose;
            }
            c if is_name_char(c) => {
                if self.attr_ready {
                    // `checked disabled`: the ready attribute commits with
                    // its name as its own value, and a new one starts.
                    self.commit_bare_attribute();
                }
                self.attr_name.push(c);
            }
            c if c.is_whitespace() => self.attr_ready = true,
            _ => {}
        }
    }

    /// `AttributeValue` state: quoted values take everything verbatim up to
    /// the matching quote (`<`, `>`, `/`, whitespace included); bare values
    /// end at whitespace or the end of the tag.
    fn handle_attribute_value(&mut self, c: char) {
        if let Some(q) = self.quote {
            if c == q {
                self.commit_attribute();
                self.state = ParserState::TagClose;
            } else {
                self.attr_value.push(c);
            }
            return;
        }
        if self.attr_value.is_empty() {
            match c {
                '"' | '\'' => {
                    self.quote = Some(c);
                    return;
                }
                c if c.is_whitespace() => return,
                _ => {}
            }
        }
        match c {
            '>' => {
                self.commit_attribute();
                self.commit_tag();
            }
            // `href=a/b` keeps its slash; only `/>` closes the tag.
            '/' if self.peek() == Some('>') => {
                self.commit_attribute();
                self.tag.self_closing = true;
                self.state = ParserState::TagClose;
            }
            c if c.is_whitespace() => {
                self.commit_attribute();
                self.state = ParserState::TagClose;
            }
            _ => self.attr_value.push(c),
        }
    }

    /// `Comment` state: verbatim accumulation (nested `<`, `>`, even
    /// `<!--`) until the buffer ends with the literal terminator.
    fn handle_comment(&mut self, c: char) {
        self.comment_buf.push(c);
        if self.comment_buf.ends_with("-->") {
            let content = self.comment_buf[..self.comment_buf.len() - 3].to_string();
            self.append_node(Node::Comment(content));
            self.comment_buf.clear();
            self.state = ParserState::Text;
        }
    }

    /// Commit the in-progress tag record on `>`.
    fn commit_tag(&mut self) {
        let tag = mem::take(&mut self.tag);
        self.state = ParserState::Text;
        if tag.discard || tag.name.is_empty() {
            return;
        }
        if tag.closing {
            self.handle_closing_tag(&tag.name, tag.offset);
            return;
        }
        let ignored = self
            .options
            .ignore
            .iter()
            .any(|t| t.eq_ignore_ascii_case(&tag.name));
        let void = is_void_tag(&tag.name, self.options.void_tags.as_deref());
        let data = ElementData {
            tag_name: tag.name,
            props: tag.props,
            children: Vec::new(),
        };
        if void || tag.self_closing {
            // Leaf: never enters the stack, content after it is a sibling.
            if !ignored {
                self.append_node(Node::Element(data));
            }
        } else {
            self.stack.push(OpenElement {
                data,
                ignored,
                offset: tag.offset,
            });
        }
    }

    /// Resolve `</name>` against the ancestor stack, innermost first.
    ///
    /// On a match the stack pops down to and including that entry, folding
    /// each popped element into its parent (elements above the match close
    /// implicitly). On no match the stack is left alone and a warning is
    /// recorded; no phantom node is invented.
    fn handle_closing_tag(&mut self, name: &str, offset: usize) {
        let Some(matched) = self
            .stack
            .iter()
            .rposition(|open| open.data.tag_name.eq_ignore_ascii_case(name))
        else {
            self.warnings.push(ParseWarning {
                kind: WarningKind::UnmatchedClosingTag,
                tag: name.to_string(),
                offset,
            });
            return;
        };
        while self.stack.len() > matched {
            if let Some(open) = self.stack.pop() {
                if self.stack.len() > matched {
                    // Implicitly closed by an outer closing tag: the element
                    // stays in the tree, but it was never closed itself.
                    self.warnings.push(ParseWarning {
                        kind: WarningKind::UnclosedTag,
                        tag: open.data.tag_name.clone(),
                        offset: open.offset,
                    });
                }
                if open.ignored {
                    continue;
                }
                self.append_node(Node::Element(open.data));
            }
        }
    }

    /// End of input: final text commit and the unclosed-tag sweep, walked
    /// from innermost to outermost.
    fn finish(mut self) -> ParseOutput {
        if self.state == ParserState::Comment && !self.comment_buf.is_empty() {
            // Unterminated comment: keep what we saw.
            let content = mem::take(&mut self.comment_buf);
            self.append_node(Node::Comment(content));
        }
        self.flush_text();
        while let Some(open) = self.stack.pop() {
            self.warnings.push(ParseWarning {
                kind: WarningKind::UnclosedTag,
                tag: open.data.tag_name.clone(),
                offset: open.offset,
            });
            if open.ignored {
                continue;
            }
            self.append_node(Node::Element(open.data));
        }
        ParseOutput {
            root: Node::from_roots(self.roots),
            warnings: self.warnings,
        }
    }
}

/// Tag and attribute name characters: letters, digits, hyphen, colon.
/// The colon admits XML-namespaced names like `custom:element`.
pub(super) fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == ':'
}
