use fra_atlas_ui_map::MapView;
use iced::widget::{column, container, row, stack, text};
use iced::{Element, Font, Length, Theme, alignment};

use super::event::MapIntent;
use super::model::{
    INFO_ACTIVE_LAYER_LABEL, INFO_COORDINATES_LABEL, INFO_SCALE_LABEL,
    INFO_ZOOM_LABEL, MapViewModel,
};
use crate::theme::ThemeProps;

const INFO_MARGIN: f32 = 16.0;
const INFO_PADDING: f32 = 12.0;
const INFO_SPACING: f32 = 24.0;
const INFO_LABEL_SIZE: f32 = 12.0;
const INFO_VALUE_SIZE: f32 = 14.0;

/// Props for the map view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MapViewProps<'a> {
    pub(crate) vm: MapViewModel<'a>,
    pub(crate) active_layer_name: &'a str,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the map with the info panel overlay.
pub(crate) fn view(
    props: MapViewProps<'_>,
) -> Element<'_, MapIntent, Theme, iced::Renderer> {
    let theme = props.theme.theme;

    let map = MapView::new(props.vm.viewport)
        .tile_cache(props.vm.tile_cache)
        .on_zoom(MapIntent::Zoom)
        .on_pan(MapIntent::Pan)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| theme.panel())
        .view();

    let overlay = container(info_panel(props))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(INFO_MARGIN)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top);

    stack![map, overlay].into()
}

fn info_panel(
    props: MapViewProps<'_>,
) -> Element<'_, MapIntent, Theme, iced::Renderer> {
    let theme = props.theme.theme;
    let muted = theme.iced_palette().muted_text;

    let entry = |label: &'static str, value: String, font: Font| {
        column![
            text(label).size(INFO_LABEL_SIZE).color(muted),
            text(value).size(INFO_VALUE_SIZE).font(font),
        ]
        .spacing(2)
    };

    let content = row![
        entry(
            INFO_ACTIVE_LAYER_LABEL,
            props.active_layer_name.to_string(),
            Font::DEFAULT,
        ),
        entry(
            INFO_COORDINATES_LABEL,
            props.vm.coordinates_label(),
            Font::MONOSPACE,
        ),
        entry(INFO_ZOOM_LABEL, props.vm.zoom_label(), Font::MONOSPACE),
        entry(INFO_SCALE_LABEL, props.vm.scale_label(), Font::MONOSPACE),
    ]
    .spacing(INFO_SPACING);

    container(content)
        .padding(INFO_PADDING)
        .style(move |_| theme.overlay_card())
        .into()
}
