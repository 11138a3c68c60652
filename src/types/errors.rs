use std::fmt;

// === TabError ===

/// Errors related to tab collection operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TabError {
    /// Tab with the given ID was not found.
    NotFound(String),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::NotFound(id) => write!(f, "Tab not found: {}", id),
        }
    }
}

impl std::error::Error for TabError {}

// === SurfaceError ===

/// Errors reported by an embedded browsing surface when a command could not
/// be handed to the underlying widget.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// The widget rejected or failed to run the command.
    CommandFailed(String),
    /// A history traversal was requested with no entry in that direction.
    NoHistoryEntry(&'static str),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::CommandFailed(msg) => write!(f, "Surface command failed: {}", msg),
            SurfaceError::NoHistoryEntry(direction) => {
                write!(f, "No history entry to go {}", direction)
            }
        }
    }
}

impl std::error::Error for SurfaceError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
