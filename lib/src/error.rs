/// Error type for the linkcollection library
///
/// Read failures on the data files never show up here: `Storage::read_json`
/// absorbs them and hands back the default value instead.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// Update/delete referencing an id that is not in the collection
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// Disk write rejected; the cause is logged, not carried
    #[error("{0}")]
    WriteFailure(String),

    /// Malformed import file
    #[error("Parse error: {0}")]
    ParseFailure(String),

    /// I/O errors (import/export files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML parsing/serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Invalid input or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Browser integration errors
    #[error("Browser error: {0}")]
    Browser(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

/// Which collection a `NotFound` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Bookmark,
    Folder,
    Tag,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Bookmark => "Bookmark",
            EntityKind::Folder => "Folder",
            EntityKind::Tag => "Tag",
        };
        f.write_str(name)
    }
}

impl LinkError {
    pub fn not_found(kind: EntityKind, id: &str) -> Self {
        LinkError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn write_failure(message: &str) -> Self {
        LinkError::WriteFailure(message.to_string())
    }
}

/// Result type alias using LinkError
pub type Result<T> = std::result::Result<T, LinkError>;

impl From<String> for LinkError {
    fn from(s: String) -> Self {
        LinkError::Other(s)
    }
}

impl From<&str> for LinkError {
    fn from(s: &str) -> Self {
        LinkError::Other(s.to_string())
    }
}

impl From<serde_yaml::Error> for LinkError {
    fn from(err: serde_yaml::Error) -> Self {
        LinkError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for LinkError {
    fn from(err: serde_json::Error) -> Self {
        LinkError::Json(err.to_string())
    }
}

impl From<simd_json::Error> for LinkError {
    fn from(err: simd_json::Error) -> Self {
        LinkError::Json(err.to_string())
    }
}
