//! Icon selection over a design document's node tree.
//!
//! The tree is the JSON file structure returned by the design tool's API,
//! saved to disk. Fetching it is left to the caller.

use serde::Deserialize;

use crate::error::IconError;
use crate::naming::sanitize_name;

/// A saved design file. Only the node tree is read.
#[derive(Debug, Clone, Deserialize)]
pub struct DesignFile {
    pub document: DesignNode,
}

impl DesignFile {
    pub fn from_json(json: &str) -> Result<Self, IconError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Find a top-level page by exact name.
    pub fn find_page(&self, name: &str) -> Option<&DesignNode> {
        self.document.children.iter().find(|page| page.name == name)
    }

    pub fn page_names(&self) -> impl Iterator<Item = &str> {
        self.document.children.iter().map(|page| page.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Document,
    Canvas,
    Frame,
    Component,
    ComponentSet,
    Section,
    Group,
    #[serde(other)]
    Other,
}

impl NodeKind {
    /// Kinds that can be exported as an icon.
    fn is_icon_container(&self) -> bool {
        matches!(self, Self::Frame | Self::Component | Self::ComponentSet)
    }

    /// Kinds that count as one level of grouping.
    fn adds_depth(&self) -> bool {
        matches!(self, Self::Section | Self::Frame)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct BoundingBox {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub absolute_bounding_box: Option<BoundingBox>,
    #[serde(default)]
    pub children: Vec<DesignNode>,
}

fn default_visible() -> bool {
    true
}

/// Size range an element must fall in, on both axes, to count as an icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectRule {
    pub min_size: f64,
    pub max_size: f64,
}

impl Default for SelectRule {
    fn default() -> Self {
        Self {
            min_size: 8.0,
            max_size: 128.0,
        }
    }
}

impl SelectRule {
    fn fits(&self, bounds: BoundingBox) -> bool {
        let in_range = |v: f64| (self.min_size..=self.max_size).contains(&v);
        in_range(bounds.width) && in_range(bounds.height)
    }
}

/// An element selected for export.
#[derive(Debug, Clone, PartialEq)]
pub struct IconCandidate {
    pub id: String,
    pub name: String,
    pub width: f64,
    pub height: f64,
}

impl IconCandidate {
    /// Output file name derived from the element's name.
    pub fn file_name(&self) -> String {
        format!("{}.svg", sanitize_name(&self.name))
    }
}

/// Collect icons on a page.
///
/// Icons sit at the top of the page or one grouping level down. A matching
/// element is not searched further.
pub fn select_icons(page: &DesignNode, rule: &SelectRule) -> Vec<IconCandidate> {
    let mut icons = Vec::new();
    collect(page, rule, 0, &mut icons);
    icons
}

fn collect(node: &DesignNode, rule: &SelectRule, depth: usize, icons: &mut Vec<IconCandidate>) {
    // Depth never decreases, so nothing below this can match.
    if !node.visible || depth > 1 {
        return;
    }

    if node.kind.is_icon_container() {
        let bounds = node.absolute_bounding_box.unwrap_or_default();
        if rule.fits(bounds) {
            icons.push(IconCandidate {
                id: node.id.clone(),
                name: node.name.clone(),
                width: bounds.width,
                height: bounds.height,
            });
            return;
        }
    }

    let child_depth = if node.kind.adds_depth() { depth + 1 } else { depth };
    for child in &node.children {
        collect(child, rule, child_depth, icons);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILE: &str = r#"{
      "document": {
        "id": "0:0", "name": "Document", "type": "DOCUMENT",
        "children": [
          { "id": "1:0", "name": "Cover", "type": "CANVAS", "children": [] },
          {
            "id": "2:0", "name": "Icons", "type": "CANVAS",
            "children": [
              { "id": "2:1", "name": "arrow / left", "type": "COMPONENT",
                "absoluteBoundingBox": { "x": 0, "y": 0, "width": 24, "height": 24 } },
              { "id": "2:2", "name": "hidden", "type": "COMPONENT", "visible": false,
                "absoluteBoundingBox": { "x": 0, "y": 0, "width": 24, "height": 24 } },
              { "id": "2:3", "name": "banner", "type": "FRAME",
                "absoluteBoundingBox": { "x": 0, "y": 0, "width": 1200, "height": 400 },
                "children": [
                  { "id": "2:4", "name": "close", "type": "FRAME",
                    "absoluteBoundingBox": { "x": 0, "y": 0, "width": 16, "height": 16 },
                    "children": [
                      { "id": "2:5", "name": "inner", "type": "COMPONENT",
                        "absoluteBoundingBox": { "x": 0, "y": 0, "width": 16, "height": 16 } }
                    ] },
                  { "id": "2:6", "name": "board", "type": "FRAME",
                    "absoluteBoundingBox": { "x": 0, "y": 0, "width": 600, "height": 400 },
                    "children": [
                      { "id": "2:7", "name": "too deep", "type": "COMPONENT",
                        "absoluteBoundingBox": { "x": 0, "y": 0, "width": 24, "height": 24 } }
                    ] }
                ] },
              { "id": "2:8", "name": "Group 1", "type": "GROUP",
                "children": [
                  { "id": "2:9", "name": "grouped", "type": "COMPONENT_SET",
                    "absoluteBoundingBox": { "x": 0, "y": 0, "width": 32, "height": 32 } }
                ] },
              { "id": "2:10", "name": "tiny", "type": "COMPONENT",
                "absoluteBoundingBox": { "x": 0, "y": 0, "width": 4, "height": 24 } },
              { "id": "2:11", "name": "label", "type": "TEXT" }
            ]
          }
        ]
      }
    }"#;

    #[test]
    fn test_find_page() {
        let file = DesignFile::from_json(FILE).unwrap();
        assert!(file.find_page("Icons").is_some());
        assert!(file.find_page("Missing").is_none());
        assert_eq!(file.page_names().collect::<Vec<_>>(), ["Cover", "Icons"]);
    }

    #[test]
    fn test_select_icons() {
        let file = DesignFile::from_json(FILE).unwrap();
        let page = file.find_page("Icons").unwrap();
        let icons = select_icons(page, &SelectRule::default());

        let ids: Vec<&str> = icons.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["2:1", "2:4", "2:9"]);
        assert_eq!(icons[0].file_name(), "arrow_left.svg");
        assert_eq!(icons[1].width, 16.0);
    }

    #[test]
    fn test_section_adds_depth() {
        let json = r#"{ "document": { "type": "DOCUMENT", "children": [
          { "name": "Icons", "type": "CANVAS", "children": [
            { "id": "s", "name": "Section", "type": "SECTION", "children": [
              { "id": "a", "name": "a", "type": "FRAME",
                "absoluteBoundingBox": { "width": 20, "height": 20 } }
            ] }
          ] }
        ] } }"#;
        let file = DesignFile::from_json(json).unwrap();
        let icons = select_icons(file.find_page("Icons").unwrap(), &SelectRule::default());
        assert_eq!(icons.len(), 1);
        assert_eq!(icons[0].id, "a");
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            DesignFile::from_json("{"),
            Err(IconError::Json(_))
        ));
    }
}
