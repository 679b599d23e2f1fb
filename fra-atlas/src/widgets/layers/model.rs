use fra_atlas_ui_layers::{LayerId, LayerSelection};

use super::event::LayersEffect;

/// Read-only view model for the layers sidebar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LayersViewModel<'a> {
    pub(crate) selection: &'a LayerSelection<LayersEffect>,
    pub(crate) hovered: Option<&'a LayerId>,
    pub(crate) focused: Option<usize>,
    pub(crate) width: f32,
}
