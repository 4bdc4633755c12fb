use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("input is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("directory walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("invalid profile: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid design document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("nonconforming output: {0}")]
    Nonconforming(String),
}
