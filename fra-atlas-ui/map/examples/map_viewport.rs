use iced::widget::{column, container, text};
use iced::{Element, Length, Vector};
use fra_atlas_ui_map::{MapOptions, MapView, MapViewport, TileCache};

#[derive(Debug, Clone)]
enum Message {
    Zoom(i8),
    Pan(Vector),
}

struct AppState {
    viewport: MapViewport,
    tile_cache: Option<TileCache>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            viewport: MapViewport::mount(MapOptions::default()),
            // Point at a `{z}/{x}/{y}.png` directory to draw real tiles.
            tile_cache: std::env::var_os("MAP_TILE_CACHE").map(TileCache::new),
        }
    }
}

fn update(state: &mut AppState, message: Message) {
    match message {
        Message::Zoom(delta) => {
            if state.viewport.zoom_by(delta) {
                if let Some(cache) = state.tile_cache.as_mut() {
                    cache.retain_zoom(state.viewport.zoom());
                }
            }
        },
        Message::Pan(delta) => state.viewport.pan_by(delta),
    }
}

fn view(state: &AppState) -> Element<'_, Message> {
    let map = MapView::new(&state.viewport)
        .tile_cache(state.tile_cache.as_ref())
        .on_zoom(Message::Zoom)
        .on_pan(Message::Pan)
        .height(Length::Fill)
        .view();

    let status = text(format!(
        "{} · zoom {}",
        state.viewport.center(),
        state.viewport.zoom()
    ))
    .size(12);

    container(column![map, status].spacing(8))
        .padding(16)
        .into()
}

fn main() -> iced::Result {
    iced::run(update, view)
}
