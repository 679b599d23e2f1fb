use iced::widget::{column, container, row, text};
use iced::{Color, Element, Length};
use fra_atlas_ui_layers::{
    LayerDescriptor, LayerHover, LayerId, LayerRegistry, LayerRowContext,
    LayerSelection, LayerSidebar,
};

#[derive(Debug, Clone)]
enum Message {
    Selected(LayerId),
    Hover(LayerHover),
}

struct AppState {
    selection: LayerSelection,
    hovered: Option<LayerId>,
    log: Vec<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let registry = LayerRegistry::new(vec![
            LayerDescriptor::new("roads", "Roads", Color::BLACK, "🛣️"),
            LayerDescriptor::new(
                "rivers",
                "Rivers",
                Color::from_rgb8(0x00, 0x66, 0xcc),
                "🏞️",
            )
            .with_description("Perennial and seasonal rivers"),
        ])
        .unwrap_or_default();

        Self {
            selection: LayerSelection::with_default(registry, Some("roads")),
            hovered: None,
            log: Vec::new(),
        }
    }
}

fn update(state: &mut AppState, message: Message) {
    match message {
        Message::Selected(id) => {
            state.log.push(format!("selected {id}"));
            let _ = state.selection.select(id);
        },
        Message::Hover(hover) => hover.apply(&mut state.hovered),
    }
}

fn view(state: &AppState) -> Element<'_, Message> {
    let sidebar = LayerSidebar::from_selection(&state.selection)
        .hovered(state.hovered.as_ref())
        .on_select(Message::Selected)
        .on_hover(Message::Hover)
        .row_style(row_style)
        .width(Length::Fixed(260.0))
        .view();

    let log = state
        .log
        .iter()
        .rev()
        .take(10)
        .fold(column![text("Events")].spacing(4), |col, entry| {
            col.push(text(entry.as_str()).size(12))
        });

    row![sidebar, container(log).padding(16).width(Length::Fill)].into()
}

fn row_style(context: &LayerRowContext<'_>) -> container::Style {
    let mut style = fra_atlas_ui_layers::default_row_style(context.status);
    if context.status.is_selected {
        style.border.color = context.layer.indicator_color();
    }
    style
}

fn main() -> iced::Result {
    iced::run(update, view)
}
