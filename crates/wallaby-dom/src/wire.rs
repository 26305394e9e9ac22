//! JSON wire format for [`Node`] trees.
//!
//! The interop shape is `{"type": ..., "props": [...], "children": [...]}`:
//!
//! - `type` is `"#text"`, `"#comments"`, `"template"`, or an element tag name;
//! - `props` is an ordered *array* of `{name, value}` objects, never a keyed
//!   map, so attribute order and duplicates survive persistence;
//! - `children` is omitted when empty;
//! - text nodes carry a single `textContent` prop, comments a single `text`
//!   prop.
//!
//! [`Node`] serializes to and deserializes from exactly this shape via an
//! internal wire struct.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    Attribute, COMMENT_TEXT_PROP, COMMENT_TYPE, ElementData, Node, TEMPLATE_TYPE,
    TEXT_CONTENT_PROP, TEXT_TYPE,
};

/// The persisted shape of a single node.
#[derive(Serialize, Deserialize)]
struct WireNode {
    /// Node kind: a sentinel or an element tag name.
    #[serde(rename = "type")]
    kind: String,
    /// Ordered attribute pairs. Always present for elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    props: Option<Vec<Attribute>>,
    /// Child nodes, omitted when there are none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<WireNode>>,
}

impl From<&Node> for WireNode {
    fn from(node: &Node) -> Self {
        match node {
            Node::Text(content) => Self {
                kind: TEXT_TYPE.to_string(),
                props: Some(vec![Attribute::new(TEXT_CONTENT_PROP, content.clone())]),
                children: None,
            },
            Node::Comment(content) => Self {
                kind: COMMENT_TYPE.to_string(),
                props: Some(vec![Attribute::new(COMMENT_TEXT_PROP, content.clone())]),
                children: None,
            },
            Node::Template(children) => Self {
                kind: TEMPLATE_TYPE.to_string(),
                props: None,
                children: Some(children.iter().map(Self::from).collect()),
            },
            Node::Element(data) => Self {
                kind: data.tag_name.clone(),
                props: Some(data.props.clone()),
                children: if data.children.is_empty() {
                    None
                } else {
                    Some(data.children.iter().map(Self::from).collect())
                },
            },
        }
    }
}

impl From<WireNode> for Node {
    fn from(wire: WireNode) -> Self {
        let children = |children: Option<Vec<WireNode>>| -> Vec<Self> {
            children
                .unwrap_or_default()
                .into_iter()
                .map(Self::from)
                .collect()
        };
        match wire.kind.as_str() {
            TEXT_TYPE => Self::Text(take_prop(wire.props, TEXT_CONTENT_PROP)),
            COMMENT_TYPE => Self::Comment(take_prop(wire.props, COMMENT_TEXT_PROP)),
            TEMPLATE_TYPE => Self::Template(children(wire.children)),
            _ => Self::Element(ElementData {
                tag_name: wire.kind,
                props: wire.props.unwrap_or_default(),
                children: children(wire.children),
            }),
        }
    }
}

/// Pull the first prop with the given name out of a wire prop list.
fn take_prop(props: Option<Vec<Attribute>>, name: &str) -> String {
    props
        .unwrap_or_default()
        .into_iter()
        .find(|p| p.name == name)
        .map(|p| p.value)
        .unwrap_or_default()
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireNode::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        WireNode::deserialize(deserializer).map(Self::from)
    }
}
