use std::fmt;

#[derive(Debug)]
pub enum MenuError {
    /// Snapshot file could not be read
    SnapshotRead { path: String, source: std::io::Error },

    /// Snapshot file is not valid YAML for the expected schema
    SnapshotParse {
        path: String,
        source: serde_yaml::Error,
    },
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::SnapshotRead { path, source } => {
                write!(f, "Failed to read snapshot '{}': {}", path, source)
            }
            MenuError::SnapshotParse { path, source } => {
                write!(f, "Failed to parse snapshot '{}': {}", path, source)
            }
        }
    }
}

impl std::error::Error for MenuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MenuError::SnapshotRead { source, .. } => Some(source),
            MenuError::SnapshotParse { source, .. } => Some(source),
        }
    }
}
