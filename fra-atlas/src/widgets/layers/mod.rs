mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{LayersEffect, LayersEvent, LayersIntent};
use fra_atlas_ui_layers::LayerRegistry;
use iced::Task;
pub(crate) use model::LayersViewModel;
use state::LayersState;

/// Layers sidebar widget owning the selection controller.
pub(crate) struct LayersWidget {
    state: LayersState,
}

impl LayersWidget {
    /// Construct the widget over `registry`, preselecting `default_layer`
    /// when it is registered.
    pub(crate) fn new(
        registry: LayerRegistry,
        default_layer: Option<&str>,
        width: f32,
    ) -> Self {
        Self {
            state: LayersState::new(registry, default_layer, width),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, event: LayersIntent) -> Task<LayersEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> LayersViewModel<'_> {
        LayersViewModel {
            selection: self.state.selection(),
            hovered: self.state.hovered(),
            focused: self.state.focused(),
            width: self.state.width(),
        }
    }

    /// Active layer id (first layer when unset, `""` when empty).
    pub(crate) fn active(&self) -> &str {
        self.state.selection().active()
    }

    /// Display name of the active layer, `"None"` when it does not resolve.
    pub(crate) fn active_display_name(&self) -> &str {
        self.state.selection().active_display_name()
    }
}
