//! Snapshot rendering helpers.
//!
//! Functions for turning rendered components into strings suitable for
//! snapshot testing and assertions.

use crate::component::Component;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a component to its html string.
///
/// A render error becomes the text `error: {message}`, so a snapshot shows
/// the failure instead of aborting the test.
///
/// # Examples
///
/// ```ignore
/// use hx_components::testing::render_to_string;
/// use hx_components::widgets::Label;
///
/// let output = render_to_string(&mut Label::new("Hello"));
/// assert!(output.contains("Hello"));
/// ```
pub fn render_to_string(component: &mut dyn Component) -> String {
    match component.render() {
        Ok(markup) => markup.into_string(),
        Err(err) => format!("error: {err}"),
    }
}

/// Render a component and lay the html out one tag per line.
pub fn render_pretty(component: &mut dyn Component) -> String {
    pretty_html(&render_to_string(component))
}

/// Lay out an html string one tag or text run per line, indented by depth.
///
/// Whitespace-only text is dropped. Lines are joined with `'\n'` and the
/// final line has no trailing newline.
pub fn pretty_html(html: &str) -> String {
    let mut lines = Vec::new();
    let mut depth = 0usize;
    let mut rest = html;
    while !rest.is_empty() {
        let (token, tail) = if rest.starts_with('<') {
            match rest.find('>') {
                Some(end) => rest.split_at(end + 1),
                None => (rest, ""),
            }
        } else {
            rest.split_at(rest.find('<').unwrap_or(rest.len()))
        };
        rest = tail;

        let text = token.trim();
        if text.is_empty() {
            continue;
        }
        if text.starts_with("</") {
            depth = depth.saturating_sub(1);
            lines.push(format!("{}{}", "  ".repeat(depth), text));
            continue;
        }
        lines.push(format!("{}{}", "  ".repeat(depth), text));
        if text.starts_with('<') && opens_element(text) {
            depth += 1;
        }
    }
    lines.join("\n")
}

/// Number of `<{tag}` openings in `html`.
pub fn count_tag(html: &str, tag: &str) -> usize {
    let open = format!("<{tag}");
    html.match_indices(&open)
        .filter(|(start, _)| {
            html[start + open.len()..]
                .chars()
                .next()
                .is_some_and(|next| next == '>' || next == ' ' || next == '/')
        })
        .count()
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

/// Whether a start tag opens an element that a later end tag closes.
fn opens_element(tag: &str) -> bool {
    if tag.starts_with("<!") || tag.ends_with("/>") {
        return false;
    }
    let name: String = tag[1..]
        .chars()
        .take_while(|ch| ch.is_ascii_alphanumeric() || *ch == '-')
        .collect();
    !VOID_ELEMENTS.contains(&name.to_ascii_lowercase().as_str())
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentExt;
    use crate::widgets::{Application, Label};

    // ── render_to_string ─────────────────────────────────────────────

    #[test]
    fn render_to_string_returns_markup() {
        let mut label = Label::new("Hello").with_id("lbl");
        assert_eq!(
            render_to_string(&mut label),
            r#"<span id="lbl" name="lbl" class="label bold label-text">Hello</span>"#
        );
    }

    #[test]
    fn render_error_is_reported_as_text() {
        let mut app = Application::new("Empty").with_id("app");
        assert_eq!(
            render_to_string(&mut app),
            "error: application: no child component for slot `main`"
        );
    }

    // ── pretty_html ──────────────────────────────────────────────────

    #[test]
    fn pretty_nested_elements() {
        let html = r#"<div id="a"><span>Hi</span><input type="text"><br></div>"#;
        insta::assert_snapshot!(pretty_html(html), @r#"
        <div id="a">
          <span>
            Hi
          </span>
          <input type="text">
          <br>
        </div>
        "#);
    }

    #[test]
    fn pretty_doctype_and_whitespace() {
        let html = "<!DOCTYPE html>\n<html>  <body></body></html>";
        assert_eq!(
            pretty_html(html),
            "<!DOCTYPE html>\n<html>\n  <body>\n  </body>\n</html>"
        );
    }

    #[test]
    fn pretty_unclosed_tag_is_kept() {
        assert_eq!(pretty_html("text<div"), "text\n<div");
    }

    // ── count_tag ────────────────────────────────────────────────────

    #[test]
    fn count_tag_matches_whole_names() {
        let html = "<div><span></span><div class=\"x\"></div><divider></divider></div>";
        assert_eq!(count_tag(html, "div"), 2);
        assert_eq!(count_tag(html, "span"), 1);
        assert_eq!(count_tag(html, "table"), 0);
    }
}
