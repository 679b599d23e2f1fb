use thiserror::Error;

/// Errors raised while building a layer registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("layer `{0}` has an empty id")]
    EmptyId(String),
    #[error("duplicate layer id `{0}`")]
    DuplicateId(String),
    #[error("invalid indicator colour `{0}`, expected #rrggbb")]
    InvalidColor(String),
}
