use super::*;

const DOC: &str = "# API\nintro\n\n## Authentication\n`POST /login`\n\n```text\n## not a heading\n```\n\n## Users & Roles\n`GET /api/users`\n";

#[test]
fn render_strips_raw_html() {
    let html = render_markdown_html("**bold** <script>alert(1)</script>");
    assert!(html.contains("<strong>bold</strong>"));
    assert!(!html.contains("<script>"));
}

#[test]
fn render_supports_tables() {
    let html = render_markdown_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
    assert!(html.contains("<table>"));
}

#[test]
fn slugify_collapses_punctuation() {
    assert_eq!(slugify("Users & Roles"), "users-roles");
    assert_eq!(slugify("  Change Log  "), "change-log");
}

#[test]
fn split_sections_ignores_fenced_headings() {
    let sections = split_sections(DOC);
    let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Authentication", "Users & Roles"]);
    assert!(sections[0].markdown.contains("## not a heading"));
    assert_eq!(sections[1].id, "users-roles");
}

#[test]
fn filter_sections_matches_body_text() {
    let sections = split_sections(DOC);
    let hits = filter_sections(&sections, "API/USERS");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Users & Roles");
    assert_eq!(filter_sections(&sections, " ").len(), 2);
}
