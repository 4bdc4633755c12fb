//! iconcanon - canonicalize exported SVG icons
//!
//! Rewrites an arbitrary SVG icon into a fixed shell: constant size, a kept
//! or default `viewBox`, no prolog or comments, and paint recolored to
//! `currentColor` so the icon can be tinted by its container.
//!
//! The rewrite is done at the text level. Attribute order in the output is
//! fixed and the payload is passed through untouched apart from recoloring.

mod batch;
mod config;
mod document;
mod error;
mod naming;
mod select;
mod serialize;
mod stages;
mod verify;

use serde::{Deserialize, Serialize};

use crate::config::finite_number;

pub use batch::*;
pub use config::*;
pub use document::*;
pub use error::*;
pub use naming::*;
pub use select::*;
pub use serialize::*;
pub use stages::*;
pub use verify::*;

/// Canonicalize an SVG string with the default shell.
pub fn canonicalize(svg: &str) -> String {
    canonicalize_with_options(svg, &Options::default())
}

/// Canonicalize an SVG string with a custom shell.
pub fn canonicalize_with_options(svg: &str, options: &Options) -> String {
    let doc = run_stages(IconDocument::new(svg));
    serialize(&doc, options)
}

/// Canonicalize raw file contents. Fails only if they are not UTF-8.
pub fn canonicalize_bytes(bytes: &[u8], options: &Options) -> Result<String, IconError> {
    let svg = std::str::from_utf8(bytes)?;
    Ok(canonicalize_with_options(svg, options))
}

/// Attributes of the canonical outer element.
///
/// Output attribute order is fixed regardless of these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Options {
    pub width: u32,
    pub height: u32,
    /// Used when the input has no `viewBox`, or always if `keep_view_box` is off
    pub default_view_box: ViewBox,
    /// Keep the input's `viewBox` when it has one
    pub keep_view_box: bool,
    pub stroke: String,
    #[serde(deserialize_with = "finite_number")]
    pub stroke_width: f64,
    pub stroke_linecap: String,
    pub stroke_linejoin: String,
    pub fill: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            width: 24,
            height: 24,
            default_view_box: ViewBox::default(),
            keep_view_box: true,
            stroke: "currentColor".into(),
            stroke_width: 1.5,
            stroke_linecap: "round".into(),
            stroke_linejoin: "round".into(),
            fill: "none".into(),
        }
    }
}
