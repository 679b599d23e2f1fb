//! Map layer selection for [`iced`] applications.
//!
//! The crate has three parts:
//! - [`LayerRegistry`]: the ordered, read-only list of [`LayerDescriptor`]s;
//! - [`LayerSelection`]: the controller owning the active layer id;
//! - [`LayerSidebar`]: a stateless view that renders the registry and
//!   reports row activation and hover.
//!
//! Row styling is computed from [`RowStatus`] (selected, hovered, focused),
//! so the view never mutates styles imperatively.
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::Element;
//! use fra_atlas_ui_layers::{
//!     LayerHover, LayerId, LayerRegistry, LayerSelection, LayerSidebar,
//! };
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Select(LayerId),
//!     Hover(LayerHover),
//! }
//!
//! struct State {
//!     selection: LayerSelection,
//!     hovered: Option<LayerId>,
//! }
//!
//! fn update(state: &mut State, message: Message) {
//!     match message {
//!         Message::Select(id) => {
//!             let _ = state.selection.select(id);
//!         },
//!         Message::Hover(hover) => hover.apply(&mut state.hovered),
//!     }
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     LayerSidebar::from_selection(&state.selection)
//!         .hovered(state.hovered.as_ref())
//!         .on_select(Message::Select)
//!         .on_hover(Message::Hover)
//!         .view()
//! }
//! ```

mod error;
mod registry;
mod selection;
mod view;

pub use error::RegistryError;
pub use registry::{LayerDescriptor, LayerId, LayerRegistry, parse_hex_color};
pub use selection::{LayerSelection, NO_SELECTION_LABEL};
pub use view::{
    DEFAULT_SIDEBAR_WIDTH, LayerHover, LayerRowContext, LayerSidebar, RowStatus,
    SIDEBAR_TITLE, accessible_label, default_row_style, footer_label,
    layer_rows,
};
