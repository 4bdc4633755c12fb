//! Canonical shell assembly and whitespace collapse.

use std::sync::LazyLock;

use regex::Regex;

use crate::Options;
use crate::document::IconDocument;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static BETWEEN_TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s+<").unwrap());

/// Emit the canonical `<svg>` shell around the document's payload, then
/// collapse whitespace.
pub fn serialize(doc: &IconDocument, options: &Options) -> String {
    let mut out = String::new();
    push_shell_open(&mut out, doc.view_box.as_deref(), options);
    out.push_str(&doc.inner);
    out.push_str("</svg>");

    collapse_whitespace(&out)
}

/// The opening tag with the fixed, ordered attribute list.
fn push_shell_open(out: &mut String, extracted: Option<&str>, options: &Options) {
    // Extracted values pass through verbatim; only a stray double quote
    // (possible in a single-quoted source value) needs escaping.
    let view_box = match extracted {
        Some(vb) if options.keep_view_box => vb.replace('"', "&quot;"),
        _ => options.default_view_box.to_string(),
    };

    out.push_str("<svg");
    push_attr(out, "width", &options.width.to_string());
    push_attr(out, "height", &options.height.to_string());
    out.push_str(" viewBox=\"");
    out.push_str(&view_box);
    out.push('"');
    push_attr(out, "stroke", &options.stroke);
    push_attr(out, "stroke-width", &format_number(options.stroke_width));
    push_attr(out, "stroke-linecap", &options.stroke_linecap);
    push_attr(out, "stroke-linejoin", &options.stroke_linejoin);
    push_attr(out, "fill", &options.fill);
    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_escaped_attr(out, value);
    out.push('"');
}

/// Collapse whitespace runs to one space, drop the space between `>` and
/// `<`, and trim.
pub fn collapse_whitespace(s: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(s, " ");
    let tight = BETWEEN_TAGS.replace_all(&collapsed, "><");
    tight.trim().to_string()
}

/// Format a number as the shortest string that round-trips, without a
/// trailing `.0` for integral values.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".into();
    }

    if n.fract() == 0.0 && n.abs() < 1e15 {
        return format!("{}", n as i64);
    }

    let mut buf = ryu::Buffer::new();
    buf.format(n).to_string()
}

fn push_escaped_attr(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}
