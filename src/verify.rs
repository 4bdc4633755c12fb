//! Conformance check for canonical output.
//!
//! The canonicalizer never rejects input; this is an opt-in check that a
//! produced document actually has the canonical shape.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::Options;
use crate::error::IconError;
use crate::serialize::format_number;

/// Outer element attributes, in output order.
pub const SHELL_ATTRS: [&str; 8] = [
    "width",
    "height",
    "viewBox",
    "stroke",
    "stroke-width",
    "stroke-linecap",
    "stroke-linejoin",
    "fill",
];

/// Check that `svg` is a canonical document for `options`.
pub fn verify(svg: &str, options: &Options) -> Result<(), IconError> {
    check_whitespace(svg)?;

    let mut reader = Reader::from_str(svg);
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                if depth == 0 {
                    check_root(&start, options, &mut seen_root)?;
                } else {
                    check_paint(&start)?;
                }
                depth += 1;
            }
            Event::Empty(start) => {
                if depth == 0 {
                    check_root(&start, options, &mut seen_root)?;
                } else {
                    check_paint(&start)?;
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
            }
            Event::Text(text) => {
                if depth == 0 && !text.iter().all(u8::is_ascii_whitespace) {
                    return Err(nonconforming("text outside the outer element"));
                }
            }
            Event::Comment(_) => return Err(nonconforming("comment present")),
            Event::Decl(_) => return Err(nonconforming("XML declaration present")),
            Event::DocType(_) => return Err(nonconforming("doctype present")),
            Event::PI(_) => return Err(nonconforming("processing instruction present")),
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(nonconforming("no outer element"));
    }

    Ok(())
}

fn check_root(
    start: &BytesStart,
    options: &Options,
    seen_root: &mut bool,
) -> Result<(), IconError> {
    if *seen_root {
        return Err(nonconforming("more than one outer element"));
    }
    *seen_root = true;

    if start.name().into_inner() != b"svg" {
        return Err(nonconforming("outer element is not <svg>"));
    }

    let attrs = read_attrs(start)?;
    let names: Vec<&str> = attrs.iter().map(|(k, _)| k.as_str()).collect();
    if names != SHELL_ATTRS {
        return Err(nonconforming(format!(
            "outer attributes are [{}]",
            names.join(", ")
        )));
    }

    let expected = [
        options.width.to_string(),
        options.height.to_string(),
        String::new(),
        options.stroke.clone(),
        format_number(options.stroke_width),
        options.stroke_linecap.clone(),
        options.stroke_linejoin.clone(),
        options.fill.clone(),
    ];

    for ((name, value), want) in attrs.iter().zip(&expected) {
        if name == "viewBox" {
            if value.trim().is_empty() {
                return Err(nonconforming("empty viewBox"));
            }
        } else if value != want {
            return Err(nonconforming(format!(
                "{}=\"{}\", expected \"{}\"",
                name, value, want
            )));
        }
    }

    Ok(())
}

fn check_paint(start: &BytesStart) -> Result<(), IconError> {
    for (name, value) in read_attrs(start)? {
        match name.as_str() {
            "fill" | "stroke" if value != "none" && value != "currentColor" => {
                return Err(nonconforming(format!("{}=\"{}\" in payload", name, value)));
            }
            "style" if value.contains("fill:") || value.contains("stroke:") => {
                return Err(nonconforming(format!("style=\"{}\" sets paint", value)));
            }
            _ => {}
        }
    }
    Ok(())
}

fn read_attrs(start: &BytesStart) -> Result<Vec<(String, String)>, IconError> {
    let mut attrs = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| nonconforming(format!("invalid attribute: {}", e)))?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = attr.unescape_value()?.into_owned();
        attrs.push((key, value));
    }
    Ok(attrs)
}

fn check_whitespace(svg: &str) -> Result<(), IconError> {
    if svg != svg.trim() {
        return Err(nonconforming("leading or trailing whitespace"));
    }
    if svg.chars().any(|c| c.is_whitespace() && c != ' ') || svg.contains("  ") {
        return Err(nonconforming("uncollapsed whitespace"));
    }
    if svg.contains("> <") {
        return Err(nonconforming("whitespace between tags"));
    }
    Ok(())
}

fn nonconforming(msg: impl Into<String>) -> IconError {
    IconError::Nonconforming(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonicalize;

    const SHELL: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" fill="none">"#;

    #[test]
    fn test_canonical_output_verifies() {
        let out = canonicalize(
            r##"<?xml version="1.0"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32">
  <!-- layer -->
  <g stroke="#333">
    <path fill="red" style="fill:red" d="M0 0"/>
    <circle fill="none" cx="4" cy="4" r="2"/>
  </g>
</svg>"##,
        );
        verify(&out, &Options::default()).unwrap();
    }

    #[test]
    fn test_rejects_foreign_paint() {
        let svg = format!(r##"{}<path fill="#000"/></svg>"##, SHELL);
        assert!(matches!(
            verify(&svg, &Options::default()),
            Err(IconError::Nonconforming(_))
        ));
    }

    #[test]
    fn test_rejects_reordered_shell() {
        let svg = r#"<svg height="24" width="24" viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" fill="none"></svg>"#;
        assert!(verify(svg, &Options::default()).is_err());
    }

    #[test]
    fn test_rejects_wrong_fixed_value() {
        let svg = SHELL.replace("stroke-width=\"1.5\"", "stroke-width=\"2\"") + "</svg>";
        assert!(verify(&svg, &Options::default()).is_err());
    }

    #[test]
    fn test_rejects_metadata_and_whitespace() {
        let with_comment = format!("{}<!--x--></svg>", SHELL);
        assert!(verify(&with_comment, &Options::default()).is_err());

        let loose = format!("{}<g> <path/></g></svg>", SHELL);
        assert!(verify(&loose, &Options::default()).is_err());

        let newline = format!("{}\n</svg>", SHELL);
        assert!(verify(&newline, &Options::default()).is_err());
    }
}
