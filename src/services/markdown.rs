//! Markdown-lite rendering for chat replies and analysis panels.
//!
//! Supports exactly what the canned templates use: `**bold**`,
//! `*italic*`, `- ` bullet lines, and blank-line paragraph breaks.
//! Emphasis pairs never span lines. A trailing list is always closed, so
//! the output never leaks an open `<ul>`.

/// Render a template into presentational HTML.
pub fn render(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 64);
    let mut in_list = false;

    for raw_line in text.lines() {
        let line = apply_emphasis(raw_line.trim());
        if let Some(item) = line.strip_prefix("- ") {
            if !in_list {
                out.push_str("<ul>");
                in_list = true;
            }
            out.push_str("<li>");
            out.push_str(item.trim());
            out.push_str("</li>");
        } else {
            if in_list {
                out.push_str("</ul>");
                in_list = false;
            }
            if !line.is_empty() {
                out.push_str("<p>");
                out.push_str(&line);
                out.push_str("</p>");
            }
        }
    }

    if in_list {
        out.push_str("</ul>");
    }

    out
}

/// `**..**` then `*..*`, shortest-match, within a single line.
fn apply_emphasis(line: &str) -> String {
    let strong = wrap_pairs(line, "**", "strong");
    wrap_pairs(&strong, "*", "em")
}

fn wrap_pairs(text: &str, marker: &str, tag: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(marker) {
        let after = &rest[start + marker.len()..];
        match after.find(marker) {
            Some(end) => {
                out.push_str(&rest[..start]);
                out.push('<');
                out.push_str(tag);
                out.push('>');
                out.push_str(&after[..end]);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
                rest = &after[end + marker.len()..];
            }
            None => {
                // Unpaired marker stays verbatim.
                out.push_str(&rest[..start + marker.len()]);
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
