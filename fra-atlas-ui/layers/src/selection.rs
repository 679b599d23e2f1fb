use std::fmt;

use crate::registry::{LayerDescriptor, LayerId, LayerRegistry};

/// Footer text shown when the active id does not resolve to a descriptor.
pub const NO_SELECTION_LABEL: &str = "None";

type SelectCallback<M> = dyn FnMut(LayerId) -> M;

/// Owner of the active layer id.
///
/// The controller is the single writer of the selection. It is seeded from an
/// optional default at construction and only changes through [`select`].
/// Selection is permissive: ids that are not in the registry are accepted and
/// become active, they simply resolve to no descriptor.
///
/// The optional callback turns every selection into a value of type `M`,
/// which is how the owner of the controller gets notified. In an iced
/// application `M` is usually the message fed back into `update`.
///
/// [`select`]: LayerSelection::select
pub struct LayerSelection<M = ()> {
    registry: LayerRegistry,
    active: Option<LayerId>,
    on_select: Option<Box<SelectCallback<M>>>,
}

impl<M> LayerSelection<M> {
    /// Create a controller with the first registry entry active.
    pub fn new(registry: LayerRegistry) -> Self {
        Self::with_default(registry, None)
    }

    /// Create a controller seeded from `default_selected`.
    ///
    /// The default is used only when it names an existing descriptor, the
    /// first registry entry is used otherwise. An empty registry starts with
    /// no active layer.
    pub fn with_default(
        registry: LayerRegistry,
        default_selected: Option<&str>,
    ) -> Self {
        let active = default_selected
            .and_then(|id| registry.get(id))
            .or_else(|| registry.first())
            .map(|layer| layer.id().clone());

        if let Some(requested) = default_selected {
            if !registry.contains(requested) && !registry.is_empty() {
                log::debug!(
                    "default layer `{requested}` is not registered, falling back to the first layer"
                );
            }
        }

        Self {
            registry,
            active,
            on_select: None,
        }
    }

    /// Register the selection subscriber.
    pub fn on_select(
        mut self,
        on_select: impl FnMut(LayerId) -> M + 'static,
    ) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    /// Make `id` the active layer and notify the subscriber once.
    ///
    /// Returns the subscriber output, or `None` if nobody subscribed.
    pub fn select(&mut self, id: impl Into<LayerId>) -> Option<M> {
        let id = id.into();
        if !self.registry.contains(id.as_str()) {
            log::debug!("selected layer `{id}` is not registered");
        }

        self.active = Some(id.clone());
        self.on_select.as_mut().map(|notify| notify(id))
    }

    /// Active layer id, the first registry id when unset, or `""`.
    pub fn active(&self) -> &str {
        match &self.active {
            Some(id) => id.as_str(),
            None => self
                .registry
                .first()
                .map(|layer| layer.id().as_str())
                .unwrap_or(""),
        }
    }

    /// Whether any layer is active.
    ///
    /// Only a controller over an empty registry that has never been
    /// selected reports `false`.
    pub fn has_active(&self) -> bool {
        self.active.is_some() || !self.registry.is_empty()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.has_active() && self.active() == id
    }

    /// Descriptor for the active id, `None` when it does not resolve.
    pub fn active_descriptor(&self) -> Option<&LayerDescriptor> {
        self.registry.get(self.active())
    }

    /// Display name of the active layer, or [`NO_SELECTION_LABEL`].
    pub fn active_display_name(&self) -> &str {
        self.active_descriptor()
            .map(LayerDescriptor::display_name)
            .unwrap_or(NO_SELECTION_LABEL)
    }

    pub fn registry(&self) -> &LayerRegistry {
        &self.registry
    }
}

impl<M> fmt::Debug for LayerSelection<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerSelection")
            .field("registry", &self.registry)
            .field("active", &self.active)
            .field("has_subscriber", &self.on_select.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use iced::Color;

    use super::{LayerSelection, NO_SELECTION_LABEL};
    use crate::registry::{LayerDescriptor, LayerId, LayerRegistry};

    fn two_layer_registry() -> LayerRegistry {
        LayerRegistry::new(vec![
            LayerDescriptor::new("roads", "Roads", Color::BLACK, "R"),
            LayerDescriptor::new(
                "rivers",
                "Rivers",
                Color::from_rgb8(0x00, 0x66, 0xcc),
                "W",
            ),
        ])
        .expect("unique ids")
    }

    fn recording_selection(
        registry: LayerRegistry,
    ) -> (LayerSelection, Rc<RefCell<Vec<LayerId>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let selection = LayerSelection::new(registry)
            .on_select(move |id| sink.borrow_mut().push(id));
        (selection, calls)
    }

    #[test]
    fn given_default_registry_without_default_when_created_then_forest_cover_is_active()
     {
        let selection: LayerSelection =
            LayerSelection::new(LayerRegistry::default());
        assert_eq!(selection.active(), "forest-cover");
        assert_eq!(selection.active_display_name(), "Forest Cover");
    }

    #[test]
    fn given_default_naming_second_layer_when_created_then_second_is_active() {
        let selection: LayerSelection =
            LayerSelection::with_default(two_layer_registry(), Some("rivers"));
        assert_eq!(selection.active(), "rivers");
    }

    #[test]
    fn given_unregistered_default_when_created_then_first_layer_is_active() {
        let selection: LayerSelection =
            LayerSelection::with_default(two_layer_registry(), Some("lakes"));
        assert_eq!(selection.active(), "roads");
    }

    #[test]
    fn given_empty_registry_when_created_then_nothing_is_active() {
        let selection: LayerSelection =
            LayerSelection::with_default(LayerRegistry::empty(), Some("roads"));
        assert_eq!(selection.active(), "");
        assert!(!selection.has_active());
        assert!(selection.active_descriptor().is_none());
        assert_eq!(selection.active_display_name(), NO_SELECTION_LABEL);
    }

    #[test]
    fn given_registered_id_when_selected_then_active_and_notified_once() {
        let (mut selection, calls) =
            recording_selection(LayerRegistry::default());

        let _ = selection.select("settlements");

        assert_eq!(selection.active(), "settlements");
        assert_eq!(selection.active_display_name(), "Settlements");
        assert_eq!(calls.borrow().as_slice(), &[LayerId::from("settlements")]);
    }

    #[test]
    fn given_unknown_id_when_selected_then_active_with_placeholder_name() {
        let (mut selection, calls) =
            recording_selection(LayerRegistry::default());

        let _ = selection.select("unknown-id");

        assert_eq!(selection.active(), "unknown-id");
        assert!(selection.active_descriptor().is_none());
        assert_eq!(selection.active_display_name(), "None");
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn given_same_id_selected_twice_when_inspected_then_state_is_unchanged_but_notified_twice()
     {
        let (mut selection, calls) =
            recording_selection(LayerRegistry::default());

        let _ = selection.select("cfr-claims");
        let after_first = selection.active().to_string();
        let _ = selection.select("cfr-claims");

        assert_eq!(selection.active(), after_first);
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn given_empty_registry_when_selected_then_moves_to_has_active_state() {
        let mut selection: LayerSelection =
            LayerSelection::new(LayerRegistry::empty());
        assert!(!selection.has_active());

        let _ = selection.select("external-layer");
        assert!(selection.has_active());
        assert!(selection.is_active("external-layer"));
    }

    #[test]
    fn given_builtin_registry_when_empty_id_selected_then_still_has_active() {
        let (mut selection, calls) =
            recording_selection(LayerRegistry::default());

        let _ = selection.select("");

        assert!(selection.has_active());
        assert_eq!(selection.active(), "");
        assert!(selection.is_active(""));
        assert!(!selection.is_active("forest-cover"));
        assert_eq!(selection.active_display_name(), NO_SELECTION_LABEL);
        assert_eq!(calls.borrow().as_slice(), &[LayerId::from("")]);
    }

    #[test]
    fn given_subscriber_mapping_to_message_when_selected_then_message_returned()
    {
        let mut selection = LayerSelection::new(LayerRegistry::default())
            .on_select(|id| format!("layer:{id}"));

        assert_eq!(
            selection.select("satellite"),
            Some(String::from("layer:satellite"))
        );
    }

    #[test]
    fn given_no_subscriber_when_selected_then_nothing_returned() {
        let mut selection: LayerSelection =
            LayerSelection::new(LayerRegistry::default());
        assert_eq!(selection.select("satellite"), None);
        assert_eq!(selection.active(), "satellite");
    }
}
