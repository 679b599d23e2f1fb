use fra_atlas_ui_layers::LayerId;
use iced::Task;

use super::event::{LayersEvent, LayersIntent};
use super::state::LayersState;

/// Reduce a layers intent into state updates and effect events.
pub(super) fn reduce(
    state: &mut LayersState,
    event: LayersIntent,
) -> Task<LayersEvent> {
    match event {
        LayersIntent::Select(id) => select(state, id),
        LayersIntent::Hover(hover) => {
            state.apply_hover(hover);
            Task::none()
        },
        LayersIntent::FocusNext => {
            state.move_focus(1);
            Task::none()
        },
        LayersIntent::FocusPrevious => {
            state.move_focus(-1);
            Task::none()
        },
        LayersIntent::ActivateFocused => match state.focused_layer() {
            Some(id) => select(state, id),
            None => Task::none(),
        },
        LayersIntent::ClearFocus => {
            state.clear_focus();
            Task::none()
        },
    }
}

fn select(state: &mut LayersState, id: LayerId) -> Task<LayersEvent> {
    match state.select(id) {
        Some(effect) => Task::done(LayersEvent::Effect(effect)),
        None => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use fra_atlas_ui_layers::{LayerHover, LayerId, LayerRegistry};

    use crate::widgets::layers::{LayersIntent, LayersWidget};

    fn widget() -> LayersWidget {
        LayersWidget::new(LayerRegistry::default(), None, 300.0)
    }

    #[test]
    fn given_default_registry_when_created_then_forest_cover_is_active() {
        let widget = widget();
        assert_eq!(widget.active(), "forest-cover");
        assert_eq!(widget.active_display_name(), "Forest Cover");
    }

    #[test]
    fn given_select_intent_when_reduced_then_active_layer_changes() {
        let mut widget = widget();
        let _task = widget
            .reduce(LayersIntent::Select(LayerId::from("settlements")));

        assert_eq!(widget.active(), "settlements");
        assert_eq!(widget.active_display_name(), "Settlements");
    }

    #[test]
    fn given_unknown_layer_when_selected_then_footer_falls_back_to_none() {
        let mut widget = widget();
        let _task =
            widget.reduce(LayersIntent::Select(LayerId::from("unknown-id")));

        assert_eq!(widget.active(), "unknown-id");
        assert_eq!(widget.active_display_name(), "None");
    }

    #[test]
    fn given_hover_intents_when_reduced_then_hovered_row_tracks_pointer() {
        let mut widget = widget();
        let _task = widget.reduce(LayersIntent::Hover(LayerHover::Entered(
            LayerId::from("satellite"),
        )));
        assert_eq!(
            widget.vm().hovered.map(LayerId::as_str),
            Some("satellite")
        );

        let _task = widget.reduce(LayersIntent::Hover(LayerHover::Left(
            LayerId::from("satellite"),
        )));
        assert!(widget.vm().hovered.is_none());
    }

    #[test]
    fn given_stale_exit_after_next_enter_when_reduced_then_hover_is_kept() {
        let mut widget = widget();
        let _task = widget.reduce(LayersIntent::Hover(LayerHover::Entered(
            LayerId::from("cfr-claims"),
        )));
        let _task = widget.reduce(LayersIntent::Hover(LayerHover::Entered(
            LayerId::from("ifr-claims"),
        )));
        let _task = widget.reduce(LayersIntent::Hover(LayerHover::Left(
            LayerId::from("cfr-claims"),
        )));

        assert_eq!(
            widget.vm().hovered.map(LayerId::as_str),
            Some("ifr-claims")
        );
    }

    #[test]
    fn given_no_focus_when_focus_moves_then_ring_starts_on_active_row() {
        let mut widget = LayersWidget::new(
            LayerRegistry::default(),
            Some("ifr-claims"),
            300.0,
        );
        let _task = widget.reduce(LayersIntent::FocusNext);
        assert_eq!(widget.vm().focused, Some(2));

        let _task = widget.reduce(LayersIntent::FocusNext);
        assert_eq!(widget.vm().focused, Some(3));
    }

    #[test]
    fn given_focus_at_edges_when_moved_then_stays_inside_list() {
        let mut widget = widget();
        let _task = widget.reduce(LayersIntent::FocusPrevious);
        let _task = widget.reduce(LayersIntent::FocusPrevious);
        assert_eq!(widget.vm().focused, Some(0));

        for _ in 0..10 {
            let _task = widget.reduce(LayersIntent::FocusNext);
        }
        assert_eq!(widget.vm().focused, Some(4));
    }

    #[test]
    fn given_focused_row_when_activated_then_it_becomes_active() {
        let mut widget = widget();
        let _task = widget.reduce(LayersIntent::FocusNext);
        let _task = widget.reduce(LayersIntent::FocusNext);
        let _task = widget.reduce(LayersIntent::ActivateFocused);

        assert_eq!(widget.active(), "settlements");
    }

    #[test]
    fn given_no_focus_when_activated_then_selection_is_unchanged() {
        let mut widget = widget();
        let _task = widget.reduce(LayersIntent::ActivateFocused);
        assert_eq!(widget.active(), "forest-cover");

        let _task = widget.reduce(LayersIntent::FocusNext);
        let _task = widget.reduce(LayersIntent::ClearFocus);
        assert!(widget.vm().focused.is_none());
    }

    #[test]
    fn given_empty_registry_when_focus_moves_then_nothing_is_focused() {
        let mut widget = LayersWidget::new(LayerRegistry::empty(), None, 300.0);
        let _task = widget.reduce(LayersIntent::FocusNext);

        assert!(widget.vm().focused.is_none());
        assert_eq!(widget.active(), "");
        assert_eq!(widget.active_display_name(), "None");
    }
}
