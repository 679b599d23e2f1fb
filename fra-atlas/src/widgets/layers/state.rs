use fra_atlas_ui_layers::{
    LayerHover, LayerId, LayerRegistry, LayerSelection,
};

use super::event::LayersEffect;

/// Internal runtime state of the layers sidebar.
#[derive(Debug)]
pub(super) struct LayersState {
    selection: LayerSelection<LayersEffect>,
    hovered: Option<LayerId>,
    focused: Option<usize>,
    width: f32,
}

impl LayersState {
    pub(super) fn new(
        registry: LayerRegistry,
        default_layer: Option<&str>,
        width: f32,
    ) -> Self {
        let selection = LayerSelection::with_default(registry, default_layer)
            .on_select(LayersEffect::LayerSelected);

        Self {
            selection,
            hovered: None,
            focused: None,
            width,
        }
    }

    pub(super) fn selection(&self) -> &LayerSelection<LayersEffect> {
        &self.selection
    }

    pub(super) fn hovered(&self) -> Option<&LayerId> {
        self.hovered.as_ref()
    }

    pub(super) fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub(super) fn width(&self) -> f32 {
        self.width
    }

    pub(super) fn select(&mut self, id: LayerId) -> Option<LayersEffect> {
        self.selection.select(id)
    }

    pub(super) fn apply_hover(&mut self, hover: LayerHover) {
        hover.apply(&mut self.hovered);
    }

    /// Move the focus ring by `step` rows, clamped to the list.
    ///
    /// Without focus the ring starts on the active row, or the first row.
    pub(super) fn move_focus(&mut self, step: isize) {
        let len = self.selection.registry().len();
        if len == 0 {
            self.focused = None;
            return;
        }

        let next = match self.focused {
            Some(index) => index.saturating_add_signed(step).min(len - 1),
            None => self
                .selection
                .registry()
                .position(self.selection.active())
                .unwrap_or(0),
        };
        self.focused = Some(next);
    }

    /// Id of the focused row, if any.
    pub(super) fn focused_layer(&self) -> Option<LayerId> {
        let index = self.focused?;
        self.selection
            .registry()
            .iter()
            .nth(index)
            .map(|layer| layer.id().clone())
    }

    pub(super) fn clear_focus(&mut self) {
        self.focused = None;
    }
}
