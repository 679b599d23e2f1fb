use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{
    self, Frame, Geometry, Path as CanvasPath, Stroke, Text as CanvasText,
};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme, Vector, mouse};

use crate::tile_cache::TileCache;
use crate::viewport::MapViewport;

const PLACEHOLDER_LIGHT: Color = Color::from_rgb(0.93, 0.92, 0.88);
const PLACEHOLDER_DARK: Color = Color::from_rgb(0.89, 0.88, 0.84);
const GRID_COLOR: Color = Color::from_rgba(0.45, 0.45, 0.45, 0.35);
const LABEL_COLOR: Color = Color::from_rgba(0.3, 0.3, 0.3, 0.8);
const SCALE_COLOR: Color = Color::from_rgb(0.2, 0.2, 0.2);
const SCALE_MARGIN: f32 = 10.0;
const SCALE_HEIGHT: f32 = 6.0;
const ATTRIBUTION_MARGIN: f32 = 6.0;
const TEXT_SIZE: f32 = 11.0;

type PanAction<'a, Message> = dyn Fn(Vector) -> Message + 'a;
type ZoomAction<'a, Message> = dyn Fn(i8) -> Message + 'a;

/// Drag tracking for the canvas.
#[derive(Debug, Default)]
pub struct MapCanvasState {
    drag_origin: Option<Point>,
}

/// Canvas program drawing the tile grid, scale bar and attribution of a
/// [`MapViewport`].
///
/// Tiles are looked up in an optional [`TileCache`]. Tiles that are not
/// cached are drawn as labelled placeholders.
pub struct MapCanvas<'a, Message> {
    viewport: &'a MapViewport,
    tile_cache: Option<&'a TileCache>,
    on_pan: Option<Box<PanAction<'a, Message>>>,
    on_zoom: Option<Box<ZoomAction<'a, Message>>>,
}

impl<'a, Message> MapCanvas<'a, Message> {
    pub fn new(viewport: &'a MapViewport) -> Self {
        Self {
            viewport,
            tile_cache: None,
            on_pan: None,
            on_zoom: None,
        }
    }

    pub fn tile_cache(mut self, cache: Option<&'a TileCache>) -> Self {
        self.tile_cache = cache;
        self
    }

    /// Emit a message with the drag delta while the map is dragged.
    pub fn on_pan(mut self, on_pan: impl Fn(Vector) -> Message + 'a) -> Self {
        self.on_pan = Some(Box::new(on_pan));
        self
    }

    /// Emit a message with `+1` / `-1` on wheel scroll.
    pub fn on_zoom(mut self, on_zoom: impl Fn(i8) -> Message + 'a) -> Self {
        self.on_zoom = Some(Box::new(on_zoom));
        self
    }

    fn draw_tiles(&self, frame: &mut Frame, size: Size) {
        let source = self.viewport.tile_source();
        let tile_size = source.tile_size() as f32;
        let tile_extent = Size::new(tile_size, tile_size);

        for tile in self.viewport.visible_tiles(size) {
            let bounds = Rectangle::new(tile.origin, tile_extent);
            let cached = self
                .tile_cache
                .and_then(|cache| cache.get(source, tile.coord));

            if let Some(handle) = cached {
                frame.draw_image(bounds, canvas::Image::new(handle));
                continue;
            }

            let fill = if (tile.coord.x + tile.coord.y) % 2 == 0 {
                PLACEHOLDER_LIGHT
            } else {
                PLACEHOLDER_DARK
            };
            let path = CanvasPath::rectangle(tile.origin, tile_extent);
            frame.fill(&path, fill);
            frame.stroke(
                &path,
                Stroke::default().with_color(GRID_COLOR).with_width(1.0),
            );
            frame.fill_text(CanvasText {
                content: tile.coord.to_string(),
                position: Point::new(
                    tile.origin.x + tile_size / 2.0,
                    tile.origin.y + tile_size / 2.0,
                ),
                align_x: Horizontal::Center.into(),
                align_y: Vertical::Center,
                color: LABEL_COLOR,
                size: TEXT_SIZE.into(),
                ..Default::default()
            });
        }
    }

    fn draw_scale(&self, frame: &mut Frame, size: Size) {
        let Some(bar) = self.viewport.scale_bar() else {
            return;
        };

        let left = SCALE_MARGIN;
        let baseline = size.height - SCALE_MARGIN;
        let bar_path = CanvasPath::new(|builder| {
            builder.move_to(Point::new(left, baseline - SCALE_HEIGHT));
            builder.line_to(Point::new(left, baseline));
            builder.line_to(Point::new(left + bar.width, baseline));
            builder.line_to(Point::new(
                left + bar.width,
                baseline - SCALE_HEIGHT,
            ));
        });
        frame.stroke(
            &bar_path,
            Stroke::default().with_color(SCALE_COLOR).with_width(2.0),
        );
        frame.fill_text(CanvasText {
            content: bar.label,
            position: Point::new(left + 4.0, baseline - SCALE_HEIGHT - 2.0),
            align_y: Vertical::Bottom,
            color: SCALE_COLOR,
            size: TEXT_SIZE.into(),
            ..Default::default()
        });
    }

    fn draw_attribution(&self, frame: &mut Frame, size: Size) {
        let attribution = self.viewport.tile_source().attribution();
        if attribution.is_empty() {
            return;
        }

        frame.fill_text(CanvasText {
            content: attribution.to_string(),
            position: Point::new(
                size.width - ATTRIBUTION_MARGIN,
                size.height - ATTRIBUTION_MARGIN,
            ),
            align_x: Horizontal::Right.into(),
            align_y: Vertical::Bottom,
            color: LABEL_COLOR,
            size: TEXT_SIZE.into(),
            ..Default::default()
        });
    }
}

impl<Message> canvas::Program<Message> for MapCanvas<'_, Message> {
    type State = MapCanvasState;

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let size = bounds.size();
        let mut frame = Frame::new(renderer, size);

        frame.fill_rectangle(Point::ORIGIN, size, PLACEHOLDER_DARK);
        self.draw_tiles(&mut frame, size);
        self.draw_scale(&mut frame, size);
        self.draw_attribution(&mut frame, size);

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let iced::Event::Mouse(event) = event else {
            return None;
        };

        match event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let position = cursor.position_in(bounds)?;
                state.drag_origin = Some(position);
                Some(canvas::Action::capture())
            },
            mouse::Event::CursorMoved { .. } => {
                let origin = state.drag_origin?;
                let position = cursor.position_in(bounds)?;
                state.drag_origin = Some(position);
                let on_pan = self.on_pan.as_ref()?;
                let delta = position - origin;
                Some(canvas::Action::publish(on_pan(delta)).and_capture())
            },
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                state.drag_origin.take().map(|_| canvas::Action::capture())
            },
            mouse::Event::CursorLeft => {
                state.drag_origin = None;
                None
            },
            mouse::Event::WheelScrolled { delta } => {
                cursor.position_in(bounds)?;
                let on_zoom = self.on_zoom.as_ref()?;
                let steps = wheel_steps(*delta);
                (steps != 0).then(|| {
                    canvas::Action::publish(on_zoom(steps)).and_capture()
                })
            },
            _ => None,
        }
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.drag_origin.is_some() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Collapse a wheel delta into a single zoom step.
fn wheel_steps(delta: mouse::ScrollDelta) -> i8 {
    let y = match delta {
        mouse::ScrollDelta::Lines { y, .. } => y,
        mouse::ScrollDelta::Pixels { y, .. } => y,
    };

    if y > 0.0 {
        1
    } else if y < 0.0 {
        -1
    } else {
        0
    }
}
