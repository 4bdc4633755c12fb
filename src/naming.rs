//! Filesystem-safe icon names.

use std::sync::LazyLock;

use regex::Regex;

static UNSAFE_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*]"#).unwrap());

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Name used when nothing survives sanitizing.
pub const PLACEHOLDER_NAME: &str = "unnamed";

/// Turn a design element's name into a file stem.
pub fn sanitize_name(name: &str) -> String {
    let safe = UNSAFE_CHARS.replace_all(name, "_");
    let safe = WHITESPACE.replace_all(&safe, "_");
    let safe = SEPARATORS.replace_all(&safe, "_");
    let safe = safe.trim_matches('_');

    if safe.is_empty() {
        PLACEHOLDER_NAME.to_string()
    } else {
        safe.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("arrow-left"), "arrow-left");
        assert_eq!(sanitize_name("Icons / Arrow Left"), "Icons_Arrow_Left");
        assert_eq!(sanitize_name("a:b*c?"), "a_b_c");
        assert_eq!(sanitize_name("  spaced\tout  "), "spaced_out");
        assert_eq!(sanitize_name("__x__"), "x");
    }

    #[test]
    fn test_sanitize_name_placeholder() {
        assert_eq!(sanitize_name(""), "unnamed");
        assert_eq!(sanitize_name("<>|"), "unnamed");
        assert_eq!(sanitize_name("   "), "unnamed");
    }
}
