use fra_atlas_ui_layers::{LayerSidebar, default_row_style};
use iced::{Color, Element, Length, Theme};

use super::event::LayersIntent;
use super::model::LayersViewModel;
use crate::theme::ThemeProps;

/// Props for the layers sidebar view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LayersViewProps<'a> {
    pub(crate) vm: LayersViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the layer list with the selection footer.
pub(crate) fn view(
    props: LayersViewProps<'_>,
) -> Element<'_, LayersIntent, Theme, iced::Renderer> {
    let theme = props.theme.theme;

    LayerSidebar::from_selection(props.vm.selection)
        .hovered(props.vm.hovered)
        .focused(props.vm.focused)
        .on_select(LayersIntent::Select)
        .on_hover(LayersIntent::Hover)
        .width(Length::Fixed(props.vm.width))
        .row_style(move |context| {
            let palette = theme.iced_palette();
            let mut style = default_row_style(context.status);
            style.text_color = Some(palette.text);
            if context.status.is_selected {
                style.border.color = palette.accent;
            } else if context.status.is_focused {
                style.border.color = Color {
                    a: 0.4,
                    ..palette.accent
                };
            }
            style
        })
        .style(move |_| theme.panel())
        .view()
}
