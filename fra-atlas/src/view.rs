use iced::widget::row;
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::theme::ThemeProps;
use crate::widgets::layers::LayersEvent;
use crate::widgets::layers::view::{self as layers_view, LayersViewProps};
use crate::widgets::map::MapEvent;
use crate::widgets::map::view::{self as map_view, MapViewProps};

/// Render the root application view: layer sidebar beside the map.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props = ThemeProps::new(theme);

    let sidebar = layers_view::view(LayersViewProps {
        vm: app.widgets.layers.vm(),
        theme: theme_props,
    })
    .map(|intent| AppEvent::Layers(LayersEvent::Intent(intent)));

    let map = map_view::view(MapViewProps {
        vm: app.widgets.map.vm(),
        active_layer_name: app.widgets.layers.active_display_name(),
        theme: theme_props,
    })
    .map(|intent| AppEvent::Map(MapEvent::Intent(intent)));

    row![sidebar, map]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
