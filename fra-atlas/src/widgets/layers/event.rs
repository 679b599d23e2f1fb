use fra_atlas_ui_layers::{LayerHover, LayerId};

/// Intent events handled by the layers sidebar.
#[derive(Debug, Clone)]
pub(crate) enum LayersIntent {
    Select(LayerId),
    Hover(LayerHover),
    FocusNext,
    FocusPrevious,
    ActivateFocused,
    ClearFocus,
}

/// Effect events produced by the layers reducer.
#[derive(Debug, Clone)]
pub(crate) enum LayersEffect {
    LayerSelected(LayerId),
}

/// Layers event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum LayersEvent {
    /// Intent event reduced by the layers widget.
    Intent(LayersIntent),
    /// External effect orchestrated by app-level routing.
    Effect(LayersEffect),
}
