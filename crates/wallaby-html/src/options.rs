//! Options controlling a parse. All options are independent and composable.

/// Options accepted by [`crate::Parser`].
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Tag names whose entire subtree is dropped from the output tree:
    /// opening tag, all descendants (nested comments and nested ignored tags
    /// included), and the matching closing tag. Matched
    /// ASCII-case-insensitively, so `["script"]` also filters `<SCRIPT>`.
    /// Sibling structure and the ancestor stack discipline are untouched.
    pub ignore: Vec<String>,

    /// Keep text runs exactly as written.
    ///
    /// By default a newline followed by any run of whitespace is collapsed
    /// away, treating it as source indentation rather than content; a bare
    /// run of spaces with no preceding newline is always preserved. Setting
    /// this disables all collapsing.
    pub preserve_whitespace: bool,

    /// Replacement for the default void-element set
    /// ([`wallaby_dom::VOID_TAGS`]). A tag in the effective set commits as a
    /// childless leaf as soon as its opening tag ends, whether or not it was
    /// written with a trailing `/`.
    pub void_tags: Option<Vec<String>>,
}
