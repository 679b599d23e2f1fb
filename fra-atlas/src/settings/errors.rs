use fra_atlas_ui_layers::RegistryError;
use thiserror::Error;

/// Errors emitted while reading, writing, or validating settings.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    /// Filesystem operation failed.
    #[error("settings IO failed")]
    Io(#[from] std::io::Error),
    /// JSON serialization or deserialization failed.
    #[error("settings JSON failed")]
    Json(#[from] serde_json::Error),
    /// The configured layer list cannot form a registry.
    #[error("invalid layer list: {0}")]
    Layers(#[from] RegistryError),
}
