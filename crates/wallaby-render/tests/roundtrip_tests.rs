//! Parse → render round-trip tests across the parser and serializer.

use wallaby_dom::Node;
use wallaby_html::{ParseOptions, parse, parse_with};
use wallaby_render::{RenderOptions, render, render_root};

/// Parse with defaults and render compactly.
fn roundtrip(markup: &str) -> String {
    render_root(parse(markup).as_ref(), &RenderOptions::default())
}

/// Collapse whitespace between tags, the comparison from the round-trip
/// stability property.
fn normalize(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut chars = markup.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '>' {
            out.push(c);
            while chars.peek().is_some_and(|next| next.is_whitespace()) {
                let _ = chars.next();
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Remove every whitespace character.
fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn test_round_trip_is_stable_for_well_formed_markup() {
    let cases = [
        "<div>hello</div>",
        r#"<div id="a"><span class="b">text</span></div>"#,
        "<ul><li>one</li><li>two</li></ul>",
        r#"<img src="a.jpg" />"#,
        "<p>before<!-- note -->after</p>",
        r#"<custom:element xmlns:custom="urn:x"><inner />tail</custom:element>"#,
    ];
    for markup in cases {
        assert_eq!(normalize(&roundtrip(markup)), normalize(markup), "case: {markup}");
    }
}

#[test]
fn test_second_round_trip_is_identity() {
    // escaping reaches a fixed point after one render of a parsed tree
    let once = roundtrip("<div>a b<br><em>c</em></div>");
    assert_eq!(roundtrip(&once), once);
}

#[test]
fn test_entities_double_escape_because_nothing_decodes_them() {
    // `&amp;` parses as four literal characters, so the renderer escapes the
    // ampersand again. Expected, not a bug.
    assert_eq!(roundtrip("<p>&amp;</p>"), "<p>&amp;amp;</p>");
}

#[test]
fn test_void_element_round_trips_regardless_of_xml_mode() {
    let root = parse("<img src='a.jpg' />").expect("tree");
    assert_eq!(root.tag_name(), Some("img"));
    assert!(root.children().is_empty());
    let plain = render(&root, &RenderOptions::default());
    let xml = render(
        &root,
        &RenderOptions {
            xml_mode: true,
            ..RenderOptions::default()
        },
    );
    assert_eq!(plain, r#"<img src="a.jpg" />"#);
    assert_eq!(xml, plain);
}

#[test]
fn test_unmatched_closing_tag_warns_and_still_renders() {
    let output = parse_with("<div><span>text</div>", &ParseOptions::default());
    assert!(output.warnings.iter().any(|w| w.tag == "span"));
    let rendered = render_root(output.root.as_ref(), &RenderOptions::default());
    assert_eq!(rendered, "<div><span>text</span></div>");
}

#[test]
fn test_multiple_roots_render_without_the_wrapper() {
    let root = parse("<div>A</div><span>B</span>").expect("tree");
    assert!(matches!(root, Node::Template(_)));
    assert_eq!(
        render(&root, &RenderOptions::default()),
        "<div>A</div><span>B</span>"
    );
}

#[test]
fn test_ignored_subtree_never_reaches_the_output() {
    let options = ParseOptions {
        ignore: vec!["script".to_string()],
        ..ParseOptions::default()
    };
    for markup in [
        "<div><script>x()</script><p>Keep</p></div>",
        "<div><SCRIPT>x()</SCRIPT><p>Keep</p></div>",
    ] {
        let output = parse_with(markup, &options);
        let rendered = render_root(output.root.as_ref(), &RenderOptions::default());
        assert_eq!(rendered, "<div><p>Keep</p></div>");
        assert!(!rendered.to_ascii_lowercase().contains("<script"));
        assert!(!rendered.contains("x()"));
    }
}

#[test]
fn test_attribute_quotes_normalize_to_double() {
    let output = parse_with(r#"<div title='Say "Hi"'>"#, &ParseOptions::default());
    let rendered = render_root(output.root.as_ref(), &RenderOptions::default());
    assert_eq!(rendered, r#"<div title="Say &quot;Hi&quot;"></div>"#);
}

#[test]
fn test_pretty_render_of_parsed_tree_changes_only_whitespace() {
    let root = parse("<div><ul><li>a</li><li>b</li></ul><hr></div>").expect("tree");
    let plain = render(&root, &RenderOptions::default());
    let pretty = render(
        &root,
        &RenderOptions {
            pretty: true,
            ..RenderOptions::default()
        },
    );
    assert_eq!(strip_whitespace(&pretty), strip_whitespace(&plain));
}

#[test]
fn test_duplicate_attributes_survive_the_full_cycle() {
    assert_eq!(
        roundtrip(r#"<div class="a" class="b"></div>"#),
        r#"<div class="a" class="b"></div>"#
    );
}

#[test]
fn test_indented_source_renders_compactly() {
    let markup = "<div>\n  <p>x</p>\n</div>";
    assert_eq!(roundtrip(markup), "<div><p>x</p></div>");
}
