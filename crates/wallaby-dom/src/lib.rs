//! Tree data model for the wallaby markup toolkit.
//!
//! This crate defines the [`Node`] tree that the parser produces and the
//! renderer consumes. Neither side depends on the other; they meet here.
//!
//! # Design
//!
//! Nodes are plain owned values with no parent links. The parser keeps an
//! explicit ancestor stack while it builds the tree, so the finished tree is
//! acyclic and can be cloned, compared, and serialized without cycle checks.
//!
//! Attributes are stored as an ordered sequence rather than a map: source
//! order is preserved on re-render, and duplicate attribute names all survive
//! into the sequence. Deduplication is deliberately *not* performed.

pub mod wire;

/// Wire `type` sentinel for text nodes.
pub const TEXT_TYPE: &str = "#text";
/// Wire `type` sentinel for comment nodes.
pub const COMMENT_TYPE: &str = "#comments";
/// Wire `type` sentinel for the synthetic multi-root wrapper.
pub const TEMPLATE_TYPE: &str = "template";
/// Wire prop name carrying the content of a text node.
pub const TEXT_CONTENT_PROP: &str = "textContent";
/// Wire prop name carrying the content of a comment node.
pub const COMMENT_TEXT_PROP: &str = "text";

/// The default set of void (self-closing) elements.
///
/// A tag in this set can never have children and always renders without a
/// separate closing tag. Matching is ASCII-case-insensitive. Callers of both
/// the parser and the renderer may supply their own set instead.
pub const VOID_TAGS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Returns true if `name` is a void element under the effective set.
///
/// `overrides`, when present, replaces [`VOID_TAGS`] entirely.
#[must_use]
pub fn is_void_tag(name: &str, overrides: Option<&[String]>) -> bool {
    match overrides {
        Some(tags) => tags.iter().any(|t| t.eq_ignore_ascii_case(name)),
        None => VOID_TAGS.iter().any(|t| t.eq_ignore_ascii_case(name)),
    }
}

/// An attribute on an element: a name/value pair.
///
/// Boolean-style attributes (`checked` with no `=`) are stored with the name
/// as their own value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Attribute {
    /// Attribute name. May contain namespace colons (`xmlns:custom`).
    pub name: String,
    /// Raw attribute value, unescaped at the model level.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Element-specific data: tag name, ordered attributes, ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementData {
    /// Tag name, case preserved. May contain namespace colons, hyphens,
    /// and digits (`custom:element`, `my-widget`).
    pub tag_name: String,
    /// Ordered attribute list. Insertion order and duplicates are preserved.
    pub props: Vec<Attribute>,
    /// Ordered child nodes. An empty vec means "no children".
    pub children: Vec<Node>,
}

impl ElementData {
    /// Create element data for `tag_name` with no attributes or children.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            props: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Returns the value of the first attribute named `name`, if any.
    ///
    /// Duplicate attributes are all retained in `props`; this helper looks at
    /// the first occurrence only.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

/// A node in the parsed markup tree.
///
/// Nodes are created by the parser (or built programmatically) and are
/// read-only inputs to the renderer. No node holds a reference to its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with a tag name, attributes, and children.
    Element(ElementData),
    /// A run of raw text. Adjacent text nodes are *not* coalesced; a comment
    /// or an ignored tag in the middle of text legitimately splits it.
    Text(String),
    /// A comment's raw content, without the `<!--` / `-->` delimiters.
    Comment(String),
    /// Synthetic wrapper holding multiple top-level siblings. Only ever
    /// appears as the root of a tree, never nested, and carries no
    /// attributes.
    Template(Vec<Node>),
}

impl Node {
    /// Create an element node with no attributes or children.
    #[must_use]
    pub fn element(tag_name: impl Into<String>) -> Self {
        Self::Element(ElementData::new(tag_name))
    }

    /// Create a text node.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Create a comment node.
    #[must_use]
    pub fn comment(content: impl Into<String>) -> Self {
        Self::Comment(content.into())
    }

    /// Wrap a list of top-level nodes according to the root-result rule:
    /// zero nodes yield `None`, a single node is returned directly, and two
    /// or more are wrapped in a [`Node::Template`].
    ///
    /// Consumers must not assume a template wrapper is always present.
    #[must_use]
    pub fn from_roots(mut roots: Vec<Self>) -> Option<Self> {
        match roots.len() {
            0 => None,
            1 => roots.pop(),
            _ => Some(Self::Template(roots)),
        }
    }

    /// The element's tag name, if this node is an element.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::Element(data) => Some(data.tag_name.as_str()),
            _ => None,
        }
    }

    /// Element data, if this node is an element.
    #[must_use]
    pub fn as_element(&self) -> Option<&ElementData> {
        match self {
            Self::Element(data) => Some(data),
            _ => None,
        }
    }

    /// Text content, if this node is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(content) => Some(content.as_str()),
            _ => None,
        }
    }

    /// Comment content, if this node is a comment.
    #[must_use]
    pub fn as_comment(&self) -> Option<&str> {
        match self {
            Self::Comment(content) => Some(content.as_str()),
            _ => None,
        }
    }

    /// Child nodes of an element or template; empty for text and comments.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Element(data) => &data.children,
            Self::Template(children) => children,
            _ => &[],
        }
    }

    /// Concatenated text of this node and all its descendants, in document
    /// order. Comments contribute nothing.
    #[must_use]
    pub fn text_content(&self) -> String {
        fn collect(node: &Node, out: &mut String) {
            match node {
                Node::Text(content) => out.push_str(content),
                Node::Comment(_) => {}
                _ => {
                    for child in node.children() {
                        collect(child, out);
                    }
                }
            }
        }
        let mut out = String::new();
        collect(self, &mut out);
        out
    }
}
