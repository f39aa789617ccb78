//! Markdown to HTML rendering for blog posts.

use pulldown_cmark::{Options, Parser, html};

/// Renders markdown with the GFM extensions enabled.
///
/// Enabled extensions:
///
/// - tables
/// - strikethrough
/// - task lists
/// - footnotes
///
/// Inline and block HTML is passed through unchanged, so posts stored as raw
/// HTML render as-is. Content comes from the store, never from visitors.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(source, options);

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
