#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use fra_atlas_ui_layers::LayerRegistry;
use fra_atlas_ui_map::MapOptions;
use iced::{Element, Subscription, Task, Theme};

use crate::settings::{self, SettingsData, SettingsLoadStatus};
use crate::theme::ThemeManager;
use crate::widgets::layers::{LayersEvent, LayersWidget};
use crate::widgets::map::{MapEvent, MapWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;
pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

const APP_TITLE: &str = "FRA Atlas";

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // Layers widget
    Layers(LayersEvent),
    // Map widget
    Map(MapEvent),
    // Direct operations
    Keyboard(iced::keyboard::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) layers: LayersWidget,
    pub(crate) map: MapWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let settings = load_startup_settings();
        let registry = layer_registry_or_builtin(&settings);
        log::debug!("layer registry holds {} layers", registry.len());

        let widgets = Widgets {
            layers: LayersWidget::new(
                registry,
                settings.default_layer(),
                settings.sidebar_width(),
            ),
            map: MapWidget::new(
                MapOptions::default(),
                settings.tile_cache_dir().map(ToOwned::to_owned),
            ),
        };

        let app = App {
            theme_manager: ThemeManager::new(),
            widgets,
        };

        (app, Task::done(AppEvent::IcedReady))
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from(APP_TITLE)
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}

/// Registry configured in `settings`, or the built-in layers when the
/// configured list cannot form a registry.
fn layer_registry_or_builtin(settings: &SettingsData) -> LayerRegistry {
    match settings.layer_registry() {
        Ok(registry) => registry,
        Err(err) => {
            log::warn!("{err}; using the built-in layers");
            LayerRegistry::default()
        },
    }
}

/// Read settings from disk, falling back to defaults on any problem.
///
/// A missing file is created with the defaults so it can be edited.
fn load_startup_settings() -> SettingsData {
    let path = settings::settings_path();
    let load = match settings::load_settings() {
        Ok(load) => load,
        Err(err) => {
            log::warn!("failed to read {}: {err}", path.display());
            return SettingsData::default();
        },
    };

    let (data, status) = load.into_parts();
    match status {
        SettingsLoadStatus::Loaded => {
            log::info!("settings loaded from {}", path.display());
        },
        SettingsLoadStatus::Missing => match settings::save_settings(&data) {
            Ok(()) => {
                log::info!("default settings written to {}", path.display());
            },
            Err(err) => {
                log::warn!(
                    "failed to write default settings to {}: {err}",
                    path.display()
                );
            },
        },
        SettingsLoadStatus::Invalid(message) => {
            log::warn!(
                "settings file {} is invalid, using defaults: {message}",
                path.display()
            );
        },
    }
    data
}

#[cfg(test)]
mod tests {
    use fra_atlas_ui_layers::LayerRegistry;
    use serde_json::json;

    use super::layer_registry_or_builtin;
    use crate::settings::SettingsData;

    #[test]
    fn given_layer_with_bad_colour_when_registry_built_then_builtins_are_used()
    {
        let settings = SettingsData::from_json(&json!({
            "sidebar": {
                "layers": [{ "id": "rivers", "color": "blue" }]
            }
        }));

        assert_eq!(
            layer_registry_or_builtin(&settings),
            LayerRegistry::default()
        );
    }

    #[test]
    fn given_duplicate_layer_ids_when_registry_built_then_builtins_are_used() {
        let settings = SettingsData::from_json(&json!({
            "sidebar": {
                "layers": [
                    { "id": "rivers", "color": "#0066cc" },
                    { "id": "rivers", "color": "#003366" }
                ]
            }
        }));

        assert_eq!(
            layer_registry_or_builtin(&settings),
            LayerRegistry::default()
        );
    }

    #[test]
    fn given_valid_custom_layers_when_registry_built_then_they_are_kept() {
        let settings = SettingsData::from_json(&json!({
            "sidebar": {
                "layers": [{ "id": "rivers", "color": "#0066cc" }]
            }
        }));

        let registry = layer_registry_or_builtin(&settings);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("rivers"));
    }
}
