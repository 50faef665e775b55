//! Markdown rendering for the bundled API reference.
//!
//! The reference is one Markdown document; each `## ` heading starts a
//! section the documentation page lists in its sidebar.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, html};

/// One `## ` section of a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocSection {
    pub id: String,
    pub title: String,
    /// Section body including its heading line.
    pub markdown: String,
}

pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Raw HTML never reaches the DOM.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Lowercase, alphanumerics kept, everything else collapsed to `-`.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_owned()
}

/// Split a document on level-2 headings. Text before the first heading is
/// dropped; fenced code is not inspected for headings.
#[must_use]
pub fn split_sections(markdown: &str) -> Vec<DocSection> {
    let mut sections: Vec<DocSection> = Vec::new();
    let mut in_fence = false;
    for line in markdown.lines() {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
        }
        let heading = if in_fence { None } else { line.strip_prefix("## ") };
        if let Some(title) = heading {
            let title = title.trim().to_owned();
            sections.push(DocSection { id: slugify(&title), title, markdown: String::new() });
        }
        if let Some(current) = sections.last_mut() {
            current.markdown.push_str(line);
            current.markdown.push('\n');
        }
    }
    sections
}

/// Sections whose text contains `term`, case-insensitively. Blank term keeps all.
#[must_use]
pub fn filter_sections<'a>(sections: &'a [DocSection], term: &str) -> Vec<&'a DocSection> {
    let needle = term.trim().to_lowercase();
    sections
        .iter()
        .filter(|s| needle.is_empty() || s.markdown.to_lowercase().contains(&needle))
        .collect()
}
