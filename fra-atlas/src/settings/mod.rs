//! Persisted application settings (`settings.json`).

mod errors;
mod model;
mod storage;

pub(crate) use model::SettingsData;
pub(crate) use storage::{
    SettingsLoadStatus, load_settings, save_settings, settings_path,
};
