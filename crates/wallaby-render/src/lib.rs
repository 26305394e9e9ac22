//! Tree-to-markup serializer for the wallaby toolkit.
//!
//! Depends only on the [`wallaby_dom`] data model, never on the parser, so
//! programmatically built trees render exactly like parsed ones.
//!
//! Rendering never fails: a template wrapper disappears into its children,
//! an element with no usable tag name renders as the empty string, and a
//! missing root renders as the empty string. A partially malformed tree
//! degrades instead of aborting the whole render.

/// Markup escaping tables for text and attribute values.
pub mod escape;

pub use escape::{escape_attribute, escape_text};

use wallaby_dom::{Node, TEXT_CONTENT_PROP, is_void_tag};

/// Options accepted by [`render`].
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Insert newlines and indentation between an opening tag, its children,
    /// and its closing tag, but only when the element actually has
    /// non-empty rendered children. Childless and self-closing elements are
    /// never split across lines.
    pub pretty: bool,
    /// One level of indentation in pretty mode. Two spaces by default.
    pub indent: String,
    /// Replacement for the default void-element set
    /// ([`wallaby_dom::VOID_TAGS`]).
    pub self_closing_tags: Option<Vec<String>>,
    /// Force self-closing syntax (`<tag />`) for *any* childless element,
    /// not just the void set.
    pub xml_mode: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: "  ".to_string(),
            self_closing_tags: None,
            xml_mode: false,
        }
    }
}

/// Render a single tree to markup.
#[must_use]
pub fn render(tree: &Node, options: &RenderOptions) -> String {
    render_node(tree, options)
}

/// Render a list of sibling trees to markup, concatenated (one per line in
/// pretty mode).
#[must_use]
pub fn render_all(trees: &[Node], options: &RenderOptions) -> String {
    join_rendered(trees, options)
}

/// Render an optional root, as returned by the parser. `None` renders as
/// the empty string.
#[must_use]
pub fn render_root(root: Option<&Node>, options: &RenderOptions) -> String {
    root.map(|node| render(node, options)).unwrap_or_default()
}

/// Render sibling nodes, skipping ones that render empty.
fn join_rendered(nodes: &[Node], options: &RenderOptions) -> String {
    let rendered: Vec<String> = nodes
        .iter()
        .map(|node| render_node(node, options))
        .filter(|piece| !piece.is_empty())
        .collect();
    if options.pretty {
        rendered.join("\n")
    } else {
        rendered.concat()
    }
}

/// Prefix every line of an already-rendered body with one indent level.
/// Nesting accumulates as each ancestor prefixes its own level.
fn indent_body(body: &str, indent: &str) -> String {
    body.lines()
        .map(|line| format!("{indent}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_node(node: &Node, options: &RenderOptions) -> String {
    match node {
        // The wrapper itself never appears in output.
        Node::Template(children) => join_rendered(children, options),
        Node::Text(content) => escape_text(content),
        // Comment content is not visible markup; it goes out verbatim.
        Node::Comment(content) => format!("<!--{content}-->"),
        Node::Element(data) => {
            if data.tag_name.is_empty() {
                return String::new();
            }
            let mut open = format!("<{}", data.tag_name);
            for prop in &data.props {
                // `textContent` is the text-node carrier in the wire format,
                // never a real attribute.
                if prop.name == TEXT_CONTENT_PROP {
                    continue;
                }
                open.push(' ');
                open.push_str(&prop.name);
                open.push_str("=\"");
                open.push_str(&escape_attribute(&prop.value));
                open.push('"');
            }
            let self_closes = data.children.is_empty()
                && (options.xml_mode
                    || is_void_tag(&data.tag_name, options.self_closing_tags.as_deref()));
            if self_closes {
                open.push_str(" />");
                return open;
            }
            let body = join_rendered(&data.children, options);
            if body.is_empty() {
                return format!("{open}></{}>", data.tag_name);
            }
            if options.pretty {
                format!(
                    "{open}>\n{}\n</{}>",
                    indent_body(&body, &options.indent),
                    data.tag_name
                )
            } else {
                format!("{open}>{body}</{}>", data.tag_name)
            }
        }
    }
}
