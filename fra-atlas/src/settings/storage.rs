use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::errors::SettingsError;
use super::model::SettingsData;

const APP_DIR: &str = "fra-atlas";
const SETTINGS_FILE: &str = "settings.json";

/// How the settings file was found on disk.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SettingsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading settings from disk.
#[derive(Debug, Clone)]
pub(crate) struct SettingsLoad {
    settings: SettingsData,
    status: SettingsLoadStatus,
}

impl SettingsLoad {
    pub(crate) fn new(
        settings: SettingsData,
        status: SettingsLoadStatus,
    ) -> Self {
        Self { settings, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (SettingsData, SettingsLoadStatus) {
        (self.settings, self.status)
    }
}

pub(crate) fn load_settings() -> Result<SettingsLoad, SettingsError> {
    load_settings_from_path(&settings_path())
}

pub(crate) fn save_settings(
    settings: &SettingsData,
) -> Result<(), SettingsError> {
    save_settings_to_path(&settings_path(), settings)
}

/// `$HOME/.config/fra-atlas/settings.json`, or the temp dir without `HOME`.
pub(crate) fn settings_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join(APP_DIR)
            .join(SETTINGS_FILE);
    }

    std::env::temp_dir().join(APP_DIR).join(SETTINGS_FILE)
}

fn load_settings_from_path(path: &Path) -> Result<SettingsLoad, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(SettingsLoad::new(
                SettingsData::default(),
                SettingsLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let parsed = match serde_json::from_str::<serde_json::Value>(&data) {
        Ok(value) => value,
        Err(err) => {
            return Ok(SettingsLoad::new(
                SettingsData::default(),
                SettingsLoadStatus::Invalid(format!("{err}")),
            ));
        },
    };

    Ok(SettingsLoad::new(
        SettingsData::from_json(&parsed),
        SettingsLoadStatus::Loaded,
    ))
}

fn save_settings_to_path(
    path: &Path,
    settings: &SettingsData,
) -> Result<(), SettingsError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let payload = serde_json::to_string_pretty(settings)?;
    write_atomic(path, payload.as_bytes())?;

    Ok(())
}

/// Write `payload` next to `path` under a per-process name, flush it to
/// disk, then move it over `path`. The temp file is removed on failure.
fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = temp_sibling(path);
    let written = File::create(&tmp_path)
        .and_then(|mut file| {
            file.write_all(payload)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&tmp_path, path));

    if written.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    written
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from(SETTINGS_FILE));
    path.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}
