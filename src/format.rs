//! Rendering of message content for display.
//!
//! Content is untrusted: `render_html` never lets raw HTML or script URLs
//! through, and `render_plain` never lets terminal control sequences through.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

const UNSAFE_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

fn parser(content: &str) -> Parser<'_> {
    Parser::new_ext(content, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES)
}

fn is_unsafe_url(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    UNSAFE_SCHEMES.iter().any(|scheme| normalized.starts_with(scheme))
}

fn neutralize(url: CowStr<'_>) -> CowStr<'_> {
    if is_unsafe_url(&url) {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

/// Markdown to HTML with embedded HTML escaped and script links defused.
pub fn render_html(content: &str) -> String {
    let events = parser(content).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
            link_type,
            dest_url: neutralize(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
            link_type,
            dest_url: neutralize(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(content.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

/// Markdown to plain terminal text: emphasis dropped, lists bulleted,
/// code kept verbatim.
pub fn render_plain(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    // One entry per open list: the next ordinal for ordered lists.
    let mut lists: Vec<Option<u64>> = Vec::new();

    for event in parser(content) {
        match event {
            Event::Text(text) | Event::Code(text) | Event::Html(text) | Event::InlineHtml(text) => {
                push_clean(&mut out, &text)
            }
            Event::SoftBreak => out.push(' '),
            Event::HardBreak => out.push('\n'),
            Event::Rule => out.push_str("---\n\n"),
            Event::Start(Tag::List(start)) => {
                if !lists.is_empty() {
                    ensure_newline(&mut out);
                }
                lists.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                lists.pop();
                if lists.is_empty() {
                    ensure_newline(&mut out);
                    out.push('\n');
                }
            }
            Event::Start(Tag::Item) => {
                let depth = lists.len().saturating_sub(1);
                out.push_str(&"  ".repeat(depth));
                match lists.last_mut() {
                    Some(Some(n)) => {
                        out.push_str(&format!("{n}. "));
                        *n += 1;
                    }
                    _ => out.push_str("- "),
                }
            }
            Event::End(TagEnd::Item) => ensure_newline(&mut out),
            Event::Start(Tag::CodeBlock(_)) => ensure_newline(&mut out),
            Event::End(TagEnd::CodeBlock) => {
                ensure_newline(&mut out);
                out.push('\n');
            }
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_)) => {
                if lists.is_empty() {
                    out.push_str("\n\n");
                } else {
                    ensure_newline(&mut out);
                }
            }
            Event::TaskListMarker(done) => out.push_str(if done { "[x] " } else { "[ ] " }),
            _ => {}
        }
    }

    out.trim_end().to_string()
}

/// Appends `text` without C0/C1 control characters (ESC, BEL, CSI, ...),
/// keeping newlines and tabs.
fn push_clean(out: &mut String, text: &str) {
    out.extend(
        text.chars()
            .filter(|c| !c.is_control() || *c == '\n' || *c == '\t'),
    );
}

fn ensure_newline(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}
