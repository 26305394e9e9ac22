//! Integration tests for the serializer, on programmatically built trees.

use wallaby_dom::{Attribute, ElementData, Node};
use wallaby_render::{RenderOptions, render, render_all, render_root};

/// Helper to build an element with attributes and children.
fn element(tag: &str, props: Vec<(&str, &str)>, children: Vec<Node>) -> Node {
    Node::Element(ElementData {
        tag_name: tag.to_string(),
        props: props
            .into_iter()
            .map(|(name, value)| Attribute::new(name, value))
            .collect(),
        children,
    })
}

/// Helper for render with default options.
fn compact(node: &Node) -> String {
    render(node, &RenderOptions::default())
}

/// Remove every whitespace character; pretty mode must add nothing else.
fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

// ========== basic shapes ==========

#[test]
fn test_element_with_text_child() {
    let node = element("p", vec![], vec![Node::text("hi")]);
    assert_eq!(compact(&node), "<p>hi</p>");
}

#[test]
fn test_childless_non_void_gets_a_closing_tag() {
    assert_eq!(compact(&element("div", vec![], vec![])), "<div></div>");
}

#[test]
fn test_void_element_self_closes() {
    let node = element("img", vec![("src", "a.jpg")], vec![]);
    assert_eq!(compact(&node), r#"<img src="a.jpg" />"#);
}

#[test]
fn test_xml_mode_self_closes_any_childless_element() {
    let options = RenderOptions {
        xml_mode: true,
        ..RenderOptions::default()
    };
    assert_eq!(render(&element("div", vec![], vec![]), &options), "<div />");
    // an element with children is unaffected
    let parent = element("div", vec![], vec![Node::text("x")]);
    assert_eq!(render(&parent, &options), "<div>x</div>");
}

#[test]
fn test_self_closing_set_override() {
    let options = RenderOptions {
        self_closing_tags: Some(vec!["widget".to_string()]),
        ..RenderOptions::default()
    };
    assert_eq!(render(&element("widget", vec![], vec![]), &options), "<widget />");
    // the default set no longer applies
    assert_eq!(render(&element("br", vec![], vec![]), &options), "<br></br>");
}

#[test]
fn test_template_wrapper_is_invisible() {
    let node = Node::Template(vec![
        element("a", vec![], vec![]),
        element("b", vec![], vec![Node::text("x")]),
    ]);
    assert_eq!(compact(&node), "<a></a><b>x</b>");
}

#[test]
fn test_render_all_concatenates_siblings() {
    let nodes = vec![Node::text("a"), element("br", vec![], vec![])];
    assert_eq!(render_all(&nodes, &RenderOptions::default()), "a<br />");
}

#[test]
fn test_render_root_none_is_empty() {
    assert_eq!(render_root(None, &RenderOptions::default()), "");
}

// ========== degraded trees ==========

#[test]
fn test_empty_tag_name_renders_as_empty_string() {
    let node = element("", vec![("id", "x")], vec![Node::text("gone")]);
    assert_eq!(compact(&node), "");
}

#[test]
fn test_children_rendering_empty_keeps_element_on_one_line() {
    let node = element("div", vec![], vec![element("", vec![], vec![])]);
    assert_eq!(compact(&node), "<div></div>");
    let options = RenderOptions {
        pretty: true,
        ..RenderOptions::default()
    };
    assert_eq!(render(&node, &options), "<div></div>");
}

// ========== escaping ==========

#[test]
fn test_text_escapes_three_characters() {
    let node = element("p", vec![], vec![Node::text("a & b < c > d")]);
    assert_eq!(compact(&node), "<p>a &amp; b &lt; c &gt; d</p>");
}

#[test]
fn test_attribute_values_escape_five_characters() {
    let node = element("div", vec![("title", r#"a "b" & <c> 'd'"#)], vec![]);
    assert_eq!(
        compact(&node),
        r#"<div title="a &quot;b&quot; &amp; &lt;c&gt; &#39;d&#39;"></div>"#
    );
}

#[test]
fn test_attributes_always_use_double_quotes_in_source_order() {
    let node = element("div", vec![("b", "2"), ("a", "1")], vec![]);
    assert_eq!(compact(&node), r#"<div b="2" a="1"></div>"#);
}

#[test]
fn test_duplicate_attributes_render_twice() {
    let node = element("div", vec![("class", "a"), ("class", "b")], vec![]);
    assert_eq!(compact(&node), r#"<div class="a" class="b"></div>"#);
}

#[test]
fn test_text_content_prop_is_filtered_from_attributes() {
    let node = element("div", vec![("textContent", "x"), ("id", "y")], vec![]);
    assert_eq!(compact(&node), r#"<div id="y"></div>"#);
}

#[test]
fn test_comment_renders_verbatim_without_escaping() {
    let node = Node::comment(" a & <b> ");
    assert_eq!(compact(&node), "<!-- a & <b> -->");
}

// ========== pretty printing ==========

#[test]
fn test_pretty_indents_nested_children() {
    let tree = element(
        "div",
        vec![],
        vec![element("p", vec![], vec![Node::text("text")])],
    );
    let options = RenderOptions {
        pretty: true,
        ..RenderOptions::default()
    };
    assert_eq!(
        render(&tree, &options),
        "<div>\n  <p>\n    text\n  </p>\n</div>"
    );
}

#[test]
fn test_pretty_respects_indent_option() {
    let tree = element("div", vec![], vec![Node::text("x")]);
    let options = RenderOptions {
        pretty: true,
        indent: "\t".to_string(),
        ..RenderOptions::default()
    };
    assert_eq!(render(&tree, &options), "<div>\n\tx\n</div>");
}

#[test]
fn test_pretty_keeps_self_closing_elements_on_one_line() {
    let tree = element("div", vec![], vec![element("br", vec![], vec![])]);
    let options = RenderOptions {
        pretty: true,
        ..RenderOptions::default()
    };
    assert_eq!(render(&tree, &options), "<div>\n  <br />\n</div>");
}

#[test]
fn test_pretty_adds_structure_not_content() {
    let tree = element(
        "div",
        vec![("id", "a")],
        vec![
            element("p", vec![], vec![Node::text("one"), Node::comment("c")]),
            element("img", vec![("src", "x.png")], vec![]),
            element("span", vec![], vec![]),
        ],
    );
    let plain = render(&tree, &RenderOptions::default());
    let pretty = render(
        &tree,
        &RenderOptions {
            pretty: true,
            ..RenderOptions::default()
        },
    );
    assert_eq!(strip_whitespace(&pretty), strip_whitespace(&plain));
    assert_ne!(pretty, plain);
}
