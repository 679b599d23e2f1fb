use iced::widget::{
    Column, Space, column, container, mouse_area, row, scrollable, text,
    tooltip,
};
use iced::{Border, Color, Element, Length, Theme, alignment, mouse};

use crate::registry::{LayerDescriptor, LayerId, LayerRegistry};
use crate::selection::{LayerSelection, NO_SELECTION_LABEL};

pub const DEFAULT_SIDEBAR_WIDTH: f32 = 300.0;
pub const SIDEBAR_TITLE: &str = "Map Layers";

const SWATCH_SIZE: f32 = 16.0;
const SWATCH_RADIUS: f32 = 3.0;
const ROW_PADDING: u16 = 12;
const ROW_SPACING: f32 = 12.0;
const ROW_RADIUS: f32 = 6.0;
const ROW_BORDER_WIDTH: f32 = 2.0;
const LIST_SPACING: f32 = 8.0;
const NAME_SIZE: f32 = 14.0;
const DESCRIPTION_SIZE: f32 = 12.0;
const ICON_SIZE: f32 = 18.0;
const TITLE_SIZE: f32 = 18.0;
const FOOTER_SIZE: f32 = 12.0;

/// Presentation state of one row, derived from the selection and the
/// pointer/keyboard position. Nothing else feeds row styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowStatus {
    pub is_selected: bool,
    pub is_hovered: bool,
    pub is_focused: bool,
}

/// Pointer crossing a row boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerHover {
    Entered(LayerId),
    Left(LayerId),
}

impl LayerHover {
    /// Fold the crossing into the tracked hovered row.
    ///
    /// Leaving a row clears the hover only while that row is still the
    /// hovered one. The next row's enter may be dispatched first.
    pub fn apply(self, hovered: &mut Option<LayerId>) {
        match self {
            Self::Entered(id) => *hovered = Some(id),
            Self::Left(id) => {
                if hovered.as_ref() == Some(&id) {
                    *hovered = None;
                }
            },
        }
    }
}

/// Rendering context passed to row callbacks.
#[derive(Debug, Clone, Copy)]
pub struct LayerRowContext<'a> {
    pub index: usize,
    pub layer: &'a LayerDescriptor,
    pub status: RowStatus,
}

impl LayerRowContext<'_> {
    /// Pressed state exposed to assistive technology.
    pub fn is_pressed(&self) -> bool {
        self.status.is_selected
    }

    /// Screen-reader label for the row.
    pub fn accessible_label(&self) -> String {
        accessible_label(self.layer.display_name(), self.status.is_selected)
    }
}

/// `Select {name} layer`, with a suffix for the selected row.
pub fn accessible_label(name: &str, is_selected: bool) -> String {
    if is_selected {
        format!("Select {name} layer (currently selected)")
    } else {
        format!("Select {name} layer")
    }
}

/// Footer summary for the current selection.
pub fn footer_label<M>(selection: &LayerSelection<M>) -> String {
    footer_label_for(selection.registry(), selection.active())
}

fn footer_label_for(registry: &LayerRegistry, active: &str) -> String {
    let name = registry
        .get(active)
        .map(LayerDescriptor::display_name)
        .unwrap_or(NO_SELECTION_LABEL);
    format!("Selected: {name}")
}

/// Derive the row contexts for a registry in registry order.
pub fn layer_rows<'a>(
    registry: &'a LayerRegistry,
    active: &str,
    hovered: Option<&LayerId>,
    focused: Option<usize>,
) -> Vec<LayerRowContext<'a>> {
    registry
        .iter()
        .enumerate()
        .map(|(index, layer)| LayerRowContext {
            index,
            layer,
            status: RowStatus {
                is_selected: !active.is_empty() && layer.id() == active,
                is_hovered: hovered.is_some_and(|id| id == layer.id()),
                is_focused: focused == Some(index),
            },
        })
        .collect()
}

/// Default row styling: blue border and tint when selected, light tint on
/// hover, a faint border on the keyboard focus row.
pub fn default_row_style(status: RowStatus) -> container::Style {
    let accent = Color::from_rgb8(0x3b, 0x82, 0xf6);
    let background = if status.is_selected {
        Some(Color::from_rgb8(0xf0, 0xf9, 0xff).into())
    } else if status.is_hovered {
        Some(Color::from_rgb8(0xf9, 0xfa, 0xfb).into())
    } else {
        None
    };
    let border_color = if status.is_selected {
        accent
    } else if status.is_focused {
        Color { a: 0.4, ..accent }
    } else {
        Color::TRANSPARENT
    };

    container::Style {
        background,
        text_color: Some(Color::from_rgb8(0x37, 0x41, 0x51)),
        border: Border {
            color: border_color,
            width: ROW_BORDER_WIDTH,
            radius: ROW_RADIUS.into(),
        },
        ..Default::default()
    }
}

type SelectAction<'a, Message> = dyn Fn(LayerId) -> Message + 'a;
type HoverAction<'a, Message> = dyn Fn(LayerHover) -> Message + 'a;
type RowStyle<'a> = dyn Fn(&LayerRowContext<'a>) -> container::Style + 'a;
type PanelStyle<'a> = dyn Fn(&Theme) -> container::Style + 'a;

/// Vertical sidebar listing every registered layer.
///
/// The sidebar does not own any state. Feed it the active id (usually from a
/// [`LayerSelection`]) plus the hovered/focused rows from your app state, and
/// route [`LayerSidebar::on_select`] back into [`LayerSelection::select`].
pub struct LayerSidebar<'a, Message: Clone + 'a> {
    registry: &'a LayerRegistry,
    active: &'a str,
    hovered: Option<&'a LayerId>,
    focused: Option<usize>,
    on_select: Option<Box<SelectAction<'a, Message>>>,
    on_hover: Option<Box<HoverAction<'a, Message>>>,
    row_style: Option<Box<RowStyle<'a>>>,
    style: Option<Box<PanelStyle<'a>>>,
    width: Length,
    title: &'a str,
}

impl<'a, Message> LayerSidebar<'a, Message>
where
    Message: Clone + 'a,
{
    /// Sidebar over `registry` with `active` highlighted.
    pub fn new(registry: &'a LayerRegistry, active: &'a str) -> Self {
        Self {
            registry,
            active,
            hovered: None,
            focused: None,
            on_select: None,
            on_hover: None,
            row_style: None,
            style: None,
            width: Length::Fixed(DEFAULT_SIDEBAR_WIDTH),
            title: SIDEBAR_TITLE,
        }
    }

    /// Sidebar bound to a selection controller.
    pub fn from_selection<M>(selection: &'a LayerSelection<M>) -> Self {
        Self::new(selection.registry(), selection.active())
    }

    /// Row currently under the pointer.
    pub fn hovered(mut self, id: Option<&'a LayerId>) -> Self {
        self.hovered = id;
        self
    }

    /// Row holding the keyboard focus ring.
    pub fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }

    /// Emit a message when a row is activated.
    pub fn on_select(
        mut self,
        on_select: impl Fn(LayerId) -> Message + 'a,
    ) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    /// Emit a message when the pointer enters or leaves a row.
    ///
    /// Fold the crossings with [`LayerHover::apply`].
    pub fn on_hover(
        mut self,
        on_hover: impl Fn(LayerHover) -> Message + 'a,
    ) -> Self {
        self.on_hover = Some(Box::new(on_hover));
        self
    }

    /// Override row styling.
    pub fn row_style(
        mut self,
        row_style: impl Fn(&LayerRowContext<'a>) -> container::Style + 'a,
    ) -> Self {
        self.row_style = Some(Box::new(row_style));
        self
    }

    /// Override the panel container style.
    pub fn style(
        mut self,
        style: impl Fn(&Theme) -> container::Style + 'a,
    ) -> Self {
        self.style = Some(Box::new(style));
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Build the `Element` for the sidebar.
    pub fn view(self) -> Element<'a, Message> {
        let rows =
            layer_rows(self.registry, self.active, self.hovered, self.focused);

        let mut list = Column::new().spacing(LIST_SPACING).width(Length::Fill);
        for context in &rows {
            list = list.push(self.row(context));
        }

        let header = text(self.title).size(TITLE_SIZE);
        let footer = text(footer_label_for(self.registry, self.active))
            .size(FOOTER_SIZE);

        let list = scrollable(list).height(Length::Fill);

        let content = column![header, list, footer]
            .spacing(16)
            .width(Length::Fill);

        let panel = container(content)
            .padding(16)
            .width(self.width)
            .height(Length::Fill);

        match self.style {
            Some(style) => panel.style(move |theme| style(theme)).into(),
            None => panel.style(container::bordered_box).into(),
        }
    }

    fn row(&self, context: &LayerRowContext<'a>) -> Element<'a, Message> {
        let layer = context.layer;
        let swatch_color = layer.indicator_color();
        let swatch = container(
            Space::new()
                .width(Length::Fixed(SWATCH_SIZE))
                .height(Length::Fixed(SWATCH_SIZE)),
        )
        .style(move |_| container::Style {
            background: Some(swatch_color.into()),
            border: Border {
                radius: SWATCH_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let mut labels = column![text(layer.display_name()).size(NAME_SIZE)];
        if let Some(description) = layer.description() {
            labels = labels.push(
                text(description)
                    .size(DESCRIPTION_SIZE)
                    .color(Color::from_rgb8(0x6b, 0x72, 0x80)),
            );
        }

        let content = row![
            swatch,
            text(layer.icon()).size(ICON_SIZE),
            labels.width(Length::Fill)
        ]
        .spacing(ROW_SPACING)
        .align_y(alignment::Vertical::Center);

        let style = match self.row_style.as_ref() {
            Some(row_style) => row_style(context),
            None => default_row_style(context.status),
        };
        let body = container(content)
            .padding(ROW_PADDING)
            .width(Length::Fill)
            .style(move |_| style);

        let id = layer.id().clone();
        let mut area =
            mouse_area(body).interaction(mouse::Interaction::Pointer);
        if let Some(on_select) = self.on_select.as_ref() {
            area = area.on_press(on_select(id.clone()));
        }
        if let Some(on_hover) = self.on_hover.as_ref() {
            area = area
                .on_enter(on_hover(LayerHover::Entered(id.clone())))
                .on_exit(on_hover(LayerHover::Left(id)));
        }

        tooltip(
            area,
            container(text(context.accessible_label()).size(FOOTER_SIZE))
                .padding(6)
                .style(container::rounded_box),
            tooltip::Position::Bottom,
        )
        .into()
    }
}
