use std::path::PathBuf;

use fra_atlas_ui_layers::{
    DEFAULT_SIDEBAR_WIDTH, LayerDescriptor, LayerRegistry, parse_hex_color,
};
use serde::Serialize;

use super::errors::SettingsError;

/// Typed settings payload used for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub(crate) struct SettingsData {
    sidebar: SidebarSettingsData,
    map: MapSettingsData,
}

/// Layer sidebar settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SidebarSettingsData {
    width: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_layer: Option<String>,
    layers: Vec<LayerSettings>,
}

impl Default for SidebarSettingsData {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIDEBAR_WIDTH,
            default_layer: None,
            layers: LayerRegistry::default()
                .iter()
                .map(LayerSettings::from_descriptor)
                .collect(),
        }
    }
}

/// Map viewport settings.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub(crate) struct MapSettingsData {
    #[serde(skip_serializing_if = "Option::is_none")]
    tile_cache_dir: Option<PathBuf>,
}

/// One layer entry as written in `settings.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct LayerSettings {
    id: String,
    name: String,
    color: String,
    icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl LayerSettings {
    #[cfg(test)]
    pub(crate) fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
            description: None,
        }
    }

    fn from_descriptor(layer: &LayerDescriptor) -> Self {
        let color = layer.indicator_color();
        let [r, g, b] = [color.r, color.g, color.b]
            .map(|channel| (channel * 255.0).round() as u8);
        Self {
            id: layer.id().to_string(),
            name: layer.display_name().to_string(),
            color: format!("#{r:02x}{g:02x}{b:02x}"),
            icon: layer.icon().to_string(),
            description: layer.description().map(ToString::to_string),
        }
    }

    fn to_descriptor(&self) -> Result<LayerDescriptor, SettingsError> {
        let color = parse_hex_color(&self.color)?;
        let layer = LayerDescriptor::new(
            self.id.as_str(),
            self.name.as_str(),
            color,
            self.icon.as_str(),
        );
        Ok(match &self.description {
            Some(description) => layer.with_description(description.as_str()),
            None => layer,
        })
    }

    fn from_json(value: &serde_json::Value) -> Option<Self> {
        let id =
            read_string_field(value, "id").filter(|v| is_non_empty(v))?;
        let name = read_string_field(value, "name")
            .filter(|v| is_non_empty(v))
            .unwrap_or_else(|| id.clone());
        let color = read_string_field(value, "color")?;
        let icon = read_string_field(value, "icon").unwrap_or_default();
        let description = read_string_field(value, "description")
            .filter(|v| is_non_empty(v));

        Some(Self {
            id,
            name,
            color,
            icon,
            description,
        })
    }
}

impl SettingsData {
    /// Sidebar width in logical pixels.
    pub(crate) fn sidebar_width(&self) -> f32 {
        self.sidebar.width
    }

    /// Layer preselected at startup, if configured.
    pub(crate) fn default_layer(&self) -> Option<&str> {
        self.sidebar.default_layer.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn set_default_layer(&mut self, value: Option<String>) {
        self.sidebar.default_layer = value;
    }

    pub(crate) fn layers(&self) -> &[LayerSettings] {
        &self.sidebar.layers
    }

    #[cfg(test)]
    pub(crate) fn set_layers(&mut self, value: Vec<LayerSettings>) {
        self.sidebar.layers = value;
    }

    /// Directory with cached `{z}/{x}/{y}.png` tiles.
    pub(crate) fn tile_cache_dir(&self) -> Option<&std::path::Path> {
        self.map.tile_cache_dir.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn set_tile_cache_dir(&mut self, value: Option<PathBuf>) {
        self.map.tile_cache_dir = value;
    }

    /// Build the layer registry from the configured entries.
    pub(crate) fn layer_registry(
        &self,
    ) -> Result<LayerRegistry, SettingsError> {
        let layers = self
            .sidebar
            .layers
            .iter()
            .map(LayerSettings::to_descriptor)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LayerRegistry::new(layers)?)
    }

    /// Read settings from parsed JSON, keeping defaults for absent or
    /// malformed fields.
    pub(crate) fn from_json(value: &serde_json::Value) -> Self {
        let mut settings = SettingsData::default();

        if let Some(sidebar) = value.get("sidebar") {
            if let Some(width) = sidebar
                .get("width")
                .and_then(serde_json::Value::as_f64)
                .filter(|width| width.is_finite() && *width > 0.0)
            {
                settings.sidebar.width = width as f32;
            }

            if let Some(layer) = read_string_field(sidebar, "default_layer")
                .filter(|value| is_non_empty(value))
            {
                settings.sidebar.default_layer = Some(layer);
            }

            if let Some(layers) = read_layers(sidebar.get("layers")) {
                settings.sidebar.layers = layers;
            }
        }

        if let Some(map) = value.get("map") {
            if let Some(dir) = read_string_field(map, "tile_cache_dir")
                .filter(|value| is_non_empty(value))
            {
                settings.map.tile_cache_dir = Some(PathBuf::from(dir));
            }
        }

        settings
    }
}

fn read_layers(
    value: Option<&serde_json::Value>,
) -> Option<Vec<LayerSettings>> {
    let entries = value?.as_array()?;
    let layers = entries
        .iter()
        .map(LayerSettings::from_json)
        .collect::<Option<Vec<_>>>();

    if layers.is_none() {
        log::warn!(
            "settings layer list ignored: every entry needs `id` and `color`"
        );
    }
    layers
}

fn read_string_field(value: &serde_json::Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(serde_json::Value::as_str)
        .map(ToString::to_string)
}

fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use fra_atlas_ui_layers::LayerRegistry;
    use serde_json::json;

    use super::{LayerSettings, SettingsData};
    use super::SettingsError;

    #[test]
    fn given_default_settings_when_registry_built_then_matches_builtins() {
        let registry = SettingsData::default()
            .layer_registry()
            .expect("built-in layers are valid");
        let expected = LayerRegistry::default();

        assert_eq!(registry.len(), expected.len());
        for (built, builtin) in registry.iter().zip(expected.iter()) {
            assert_eq!(built.id(), builtin.id());
            assert_eq!(built.display_name(), builtin.display_name());
            assert_eq!(built.indicator_color(), builtin.indicator_color());
            assert_eq!(built.description(), builtin.description());
        }
    }

    #[test]
    fn given_partial_json_when_parsed_then_missing_fields_keep_defaults() {
        let settings = SettingsData::from_json(&json!({
            "sidebar": { "default_layer": "settlements" },
            "map": { "tile_cache_dir": "/var/cache/tiles" }
        }));

        assert_eq!(settings.default_layer(), Some("settlements"));
        assert_eq!(settings.sidebar_width(), 300.0);
        assert_eq!(
            settings.tile_cache_dir(),
            Some(Path::new("/var/cache/tiles"))
        );
        assert_eq!(settings.layers(), SettingsData::default().layers());
    }

    #[test]
    fn given_invalid_width_when_parsed_then_default_width_is_kept() {
        let settings = SettingsData::from_json(&json!({
            "sidebar": { "width": -20 }
        }));
        assert_eq!(settings.sidebar_width(), 300.0);
    }

    #[test]
    fn given_custom_layers_when_parsed_then_registry_uses_them_in_order() {
        let settings = SettingsData::from_json(&json!({
            "sidebar": {
                "layers": [
                    { "id": "a", "name": "Layer A", "color": "#ff0000", "icon": "🅰" },
                    { "id": "b", "color": "#0000ff" }
                ]
            }
        }));

        let registry = settings.layer_registry().expect("valid layers");
        let ids: Vec<&str> =
            registry.iter().map(|layer| layer.id().as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(
            registry.get("b").map(|layer| layer.display_name()),
            Some("b")
        );
    }

    #[test]
    fn given_layer_entry_without_color_when_parsed_then_list_is_ignored() {
        let settings = SettingsData::from_json(&json!({
            "sidebar": { "layers": [{ "id": "a" }] }
        }));
        assert_eq!(settings.layers(), SettingsData::default().layers());
    }

    #[test]
    fn given_duplicate_or_bad_colour_when_registry_built_then_error() {
        let mut settings = SettingsData::default();
        settings.set_layers(vec![
            LayerSettings::new("a", "A", "#000000", ""),
            LayerSettings::new("a", "Again", "#ffffff", ""),
        ]);
        assert!(matches!(
            settings.layer_registry(),
            Err(SettingsError::Layers(_))
        ));

        settings.set_layers(vec![LayerSettings::new("a", "A", "green", "")]);
        assert!(matches!(
            settings.layer_registry(),
            Err(SettingsError::Layers(_))
        ));
    }
}
