//! Minimal icon document model.
//!
//! This is deliberately not a DOM: the canonicalizer only needs the whole
//! text, the `viewBox` value and the markup nested in the outer element.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::serialize::format_number;

/// One icon document as it moves through the pipeline.
///
/// Each stage takes a document by value and returns the next state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconDocument {
    /// The original input, never rewritten.
    pub raw: String,
    /// The whole text as rewritten by the stages so far.
    pub markup: String,
    /// The literal `viewBox` value, if the input declared one.
    pub view_box: Option<String>,
    /// Markup nested between the outer element's tags.
    pub inner: String,
}

impl IconDocument {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            markup: raw.clone(),
            raw,
            view_box: None,
            inner: String::new(),
        }
    }

    pub fn with_markup(self, markup: String) -> Self {
        Self { markup, ..self }
    }

    pub fn with_view_box(self, view_box: Option<String>) -> Self {
        Self { view_box, ..self }
    }

    pub fn with_inner(self, inner: String) -> Self {
        Self { inner, ..self }
    }
}

/// A `viewBox` value used when the input declares none.
///
/// Extracted values are never parsed; this type only exists so that
/// configured defaults are well formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// Parse four numbers separated by whitespace and/or commas.
    pub fn parse(s: &str) -> Option<Self> {
        let nums: Vec<f64> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect::<Result<_, _>>()
            .ok()?;

        match nums.as_slice() {
            &[min_x, min_y, width, height]
                if nums.iter().all(|n| n.is_finite()) && width >= 0.0 && height >= 0.0 =>
            {
                Some(Self::new(min_x, min_y, width, height))
            }
            _ => None,
        }
    }
}

impl Default for ViewBox {
    fn default() -> Self {
        Self::new(0.0, 0.0, 24.0, 24.0)
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            format_number(self.min_x),
            format_number(self.min_y),
            format_number(self.width),
            format_number(self.height)
        )
    }
}

impl TryFrom<String> for ViewBox {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).ok_or_else(|| format!("invalid viewBox `{}`", s))
    }
}

impl From<ViewBox> for String {
    fn from(vb: ViewBox) -> Self {
        vb.to_string()
    }
}
