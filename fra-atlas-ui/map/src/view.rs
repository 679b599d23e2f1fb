use iced::widget::{Canvas, button, column, container, stack, text};
use iced::{Element, Length, Padding, Theme, Vector, alignment};

use crate::canvas::MapCanvas;
use crate::controls::ControlPosition;
use crate::tile_cache::TileCache;
use crate::viewport::MapViewport;

pub const DEFAULT_MAP_HEIGHT: f32 = 500.0;

const ZOOM_BUTTON_SIZE: f32 = 30.0;
const CONTROL_MARGIN: f32 = 10.0;

type ZoomAction<'a, Message> = dyn Fn(i8) -> Message + 'a;
type PanAction<'a, Message> = dyn Fn(Vector) -> Message + 'a;
type FrameStyle<'a> = dyn Fn(&Theme) -> container::Style + 'a;

/// Map surface: tile canvas plus the zoom control overlay.
///
/// The view is stateless. Zoom and pan requests are reported through
/// [`MapView::on_zoom`] and [`MapView::on_pan`]; apply them to the
/// [`MapViewport`] in your update loop.
pub struct MapView<'a, Message: Clone + 'a> {
    viewport: &'a MapViewport,
    tile_cache: Option<&'a TileCache>,
    on_zoom: Option<Box<ZoomAction<'a, Message>>>,
    on_pan: Option<Box<PanAction<'a, Message>>>,
    width: Length,
    height: Length,
    style: Option<Box<FrameStyle<'a>>>,
}

impl<'a, Message> MapView<'a, Message>
where
    Message: Clone + 'a,
{
    pub fn new(viewport: &'a MapViewport) -> Self {
        Self {
            viewport,
            tile_cache: None,
            on_zoom: None,
            on_pan: None,
            width: Length::Fill,
            height: Length::Fixed(DEFAULT_MAP_HEIGHT),
            style: None,
        }
    }

    /// Cache the tiles are drawn from.
    pub fn tile_cache(mut self, cache: Option<&'a TileCache>) -> Self {
        self.tile_cache = cache;
        self
    }

    /// Emit a zoom step (`+1` or `-1`) from the buttons or the wheel.
    pub fn on_zoom(mut self, on_zoom: impl Fn(i8) -> Message + 'a) -> Self {
        self.on_zoom = Some(Box::new(on_zoom));
        self
    }

    /// Emit a drag delta while the map is dragged.
    pub fn on_pan(mut self, on_pan: impl Fn(Vector) -> Message + 'a) -> Self {
        self.on_pan = Some(Box::new(on_pan));
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Override the frame style around the map.
    pub fn style(
        mut self,
        style: impl Fn(&Theme) -> container::Style + 'a,
    ) -> Self {
        self.style = Some(Box::new(style));
        self
    }

    /// Build the `Element` for the map.
    pub fn view(self) -> Element<'a, Message> {
        let viewport = self.viewport;
        let zoom_messages = self.on_zoom.as_ref().map(|on_zoom| {
            (
                viewport.can_zoom_in().then(|| on_zoom(1)),
                viewport.can_zoom_out().then(|| on_zoom(-1)),
            )
        });

        let mut program =
            MapCanvas::new(viewport).tile_cache(self.tile_cache);
        if let Some(on_zoom) = self.on_zoom {
            program = program.on_zoom(on_zoom);
        }
        if let Some(on_pan) = self.on_pan {
            program = program.on_pan(on_pan);
        }

        let canvas = Canvas::new(program)
            .width(Length::Fill)
            .height(Length::Fill);

        let mut layers: Vec<Element<'a, Message>> = vec![canvas.into()];
        if let (Some(control), Some((zoom_in, zoom_out))) =
            (viewport.zoom_control(), zoom_messages)
        {
            layers.push(zoom_buttons(control.position, zoom_in, zoom_out));
        }

        let frame = container(stack(layers))
            .width(self.width)
            .height(self.height)
            .clip(true);

        match self.style {
            Some(style) => frame.style(move |theme| style(theme)).into(),
            None => frame.style(container::bordered_box).into(),
        }
    }
}

fn zoom_buttons<'a, Message: Clone + 'a>(
    position: ControlPosition,
    zoom_in: Option<Message>,
    zoom_out: Option<Message>,
) -> Element<'a, Message> {
    let control_button = |label: &'a str, message: Option<Message>| {
        button(
            text(label)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .width(Length::Fixed(ZOOM_BUTTON_SIZE))
        .height(Length::Fixed(ZOOM_BUTTON_SIZE))
        .padding(0)
        .on_press_maybe(message)
    };

    let buttons = column![
        control_button("+", zoom_in),
        control_button("−", zoom_out)
    ]
    .spacing(2);

    let (align_x, align_y) = match position {
        ControlPosition::TopLeft => {
            (alignment::Horizontal::Left, alignment::Vertical::Top)
        },
        ControlPosition::TopRight => {
            (alignment::Horizontal::Right, alignment::Vertical::Top)
        },
        ControlPosition::BottomLeft => {
            (alignment::Horizontal::Left, alignment::Vertical::Bottom)
        },
        ControlPosition::BottomRight => {
            (alignment::Horizontal::Right, alignment::Vertical::Bottom)
        },
    };

    container(buttons)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding::new(CONTROL_MARGIN))
        .align_x(align_x)
        .align_y(align_y)
        .into()
}
