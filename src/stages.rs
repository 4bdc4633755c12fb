//! Canonicalization stages.
//!
//! Every stage is a pattern substitution over text. Order matters: comments
//! and the prolog are gone before anything is extracted, so recoloring never
//! matches inside a comment.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::document::IconDocument;

static XML_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\?xml[^?]*\?>\s*").unwrap());

static DOCTYPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<!DOCTYPE[^>]*>\s*").unwrap());

static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

static VIEW_BOX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)viewBox\s*=\s*(?:"([^"]+)"|'([^']+)')"#).unwrap()
});

// Greedy body: runs to the last closing tag.
static OUTER_SVG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<svg[^>]*>(.*)</svg>").unwrap());

// Assignments start at whitespace, so `data-fill=` is not a paint attribute.
// Group 1 is that whitespace, kept on rewrite.
static FILL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(^|\s)fill\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

static STROKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(^|\s)stroke\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

static COLOR_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(^|\s)style\s*=\s*(?:"[^"]*(?:fill|stroke):[^"]*"|'[^']*(?:fill|stroke):[^']*')"#,
    )
    .unwrap()
});

/// Run stages 1 through 7 in order.
pub fn run_stages(doc: IconDocument) -> IconDocument {
    let doc = strip_prolog(doc);
    let doc = strip_comments(doc);
    let doc = extract_view_box(doc);
    let doc = extract_inner(doc);
    let doc = recolor_fill(doc);
    let doc = recolor_stroke(doc);
    strip_color_styles(doc)
}

/// Remove every XML declaration and doctype, with trailing whitespace.
pub fn strip_prolog(doc: IconDocument) -> IconDocument {
    let markup = {
        let without_decl = XML_DECLARATION.replace_all(&doc.markup, "");
        DOCTYPE.replace_all(&without_decl, "").into_owned()
    };
    doc.with_markup(markup)
}

/// Remove every comment, including multi-line ones.
pub fn strip_comments(doc: IconDocument) -> IconDocument {
    let markup = COMMENT.replace_all(&doc.markup, "").into_owned();
    doc.with_markup(markup)
}

/// Capture the first `viewBox` value verbatim.
pub fn extract_view_box(doc: IconDocument) -> IconDocument {
    let view_box = VIEW_BOX
        .captures(&doc.markup)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string());
    doc.with_view_box(view_box)
}

/// Take the trimmed markup between the outer `<svg>` tags.
///
/// Input without a matching pair yields an empty payload, not an error.
pub fn extract_inner(doc: IconDocument) -> IconDocument {
    let inner = OUTER_SVG
        .captures(&doc.markup)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();
    doc.with_inner(inner)
}

pub fn recolor_fill(doc: IconDocument) -> IconDocument {
    let inner = recolor(&FILL, "fill", &doc.inner);
    doc.with_inner(inner)
}

pub fn recolor_stroke(doc: IconDocument) -> IconDocument {
    let inner = recolor(&STROKE, "stroke", &doc.inner);
    doc.with_inner(inner)
}

/// Drop `style` attributes that declare `fill:` or `stroke:`.
pub fn strip_color_styles(doc: IconDocument) -> IconDocument {
    let inner = COLOR_STYLE.replace_all(&doc.inner, "${1}").into_owned();
    doc.with_inner(inner)
}

/// Rewrite every assignment matched by `re` to `currentColor`, unless its
/// value is exactly `none`.
fn recolor(re: &Regex, attr: &str, markup: &str) -> String {
    re.replace_all(markup, |caps: &Captures| {
        let value = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
        if value == "none" {
            caps[0].to_string()
        } else {
            format!("{}{}=\"currentColor\"", &caps[1], attr)
        }
    })
    .into_owned()
}
