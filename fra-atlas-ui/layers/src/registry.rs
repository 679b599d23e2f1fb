use std::collections::HashSet;
use std::fmt;

use iced::Color;

use crate::error::RegistryError;

/// Stable layer identifier.
///
/// Ids are plain strings so callers can drive selection from external layer
/// catalogues. An id is never reused for a different semantic layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LayerId(String);

impl LayerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LayerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LayerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for LayerId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LayerId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Immutable description of a selectable map layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerDescriptor {
    id: LayerId,
    display_name: String,
    indicator_color: Color,
    icon: String,
    description: Option<String>,
}

impl LayerDescriptor {
    /// Create a descriptor without a description.
    pub fn new(
        id: impl Into<LayerId>,
        display_name: impl Into<String>,
        indicator_color: Color,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            indicator_color,
            icon: icon.into(),
            description: None,
        }
    }

    /// Attach a human readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn id(&self) -> &LayerId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn indicator_color(&self) -> Color {
        self.indicator_color
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Read-only ordered sequence of layer descriptors.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerRegistry {
    layers: Vec<LayerDescriptor>,
}

impl LayerRegistry {
    /// Build a registry, rejecting empty and duplicate ids.
    pub fn new(layers: Vec<LayerDescriptor>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(layers.len());
        for layer in &layers {
            if layer.id.is_empty() {
                return Err(RegistryError::EmptyId(
                    layer.display_name().to_string(),
                ));
            }
            if !seen.insert(layer.id.as_str()) {
                return Err(RegistryError::DuplicateId(layer.id.to_string()));
            }
        }

        Ok(Self { layers })
    }

    /// Registry without any layers. Nothing can be active in it.
    pub fn empty() -> Self {
        Self { layers: Vec::new() }
    }

    /// Resolve a descriptor by id. Unknown ids resolve to `None`.
    pub fn get(&self, id: &str) -> Option<&LayerDescriptor> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn first(&self) -> Option<&LayerDescriptor> {
        self.layers.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LayerDescriptor> {
        self.layers.iter()
    }

    pub fn as_slice(&self) -> &[LayerDescriptor] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Position of a layer in registry order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.layers.iter().position(|layer| layer.id == id)
    }
}

impl Default for LayerRegistry {
    /// The built-in atlas layers.
    fn default() -> Self {
        Self {
            layers: vec![
                LayerDescriptor::new(
                    "forest-cover",
                    "Forest Cover",
                    Color::from_rgb8(0x22, 0xc5, 0x5e),
                    "🌲",
                )
                .with_description("Shows forest coverage areas"),
                LayerDescriptor::new(
                    "settlements",
                    "Settlements",
                    Color::from_rgb8(0x3b, 0x82, 0xf6),
                    "🏠",
                )
                .with_description("Human settlement areas"),
                LayerDescriptor::new(
                    "ifr-claims",
                    "IFR Claims",
                    Color::from_rgb8(0xf9, 0x73, 0x16),
                    "📍",
                )
                .with_description("Individual Forest Rights claims"),
                LayerDescriptor::new(
                    "cfr-claims",
                    "CFR Claims",
                    Color::from_rgb8(0xa8, 0x55, 0xf7),
                    "📍",
                )
                .with_description("Community Forest Rights claims"),
                LayerDescriptor::new(
                    "satellite",
                    "Satellite View",
                    Color::from_rgb8(0x6b, 0x72, 0x80),
                    "🛰️",
                )
                .with_description("Satellite imagery overlay"),
            ],
        }
    }
}

impl<'a> IntoIterator for &'a LayerRegistry {
    type Item = &'a LayerDescriptor;
    type IntoIter = std::slice::Iter<'a, LayerDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Parse a `#rrggbb` (or `#rgb`) colour into an iced colour.
pub fn parse_hex_color(value: &str) -> Result<Color, RegistryError> {
    let invalid = || RegistryError::InvalidColor(value.to_string());
    let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;

    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|ch| [ch, ch]).collect(),
        6 => hex.to_string(),
        _ => return Err(invalid()),
    };

    let channel = |range: std::ops::Range<usize>| {
        expanded
            .get(range)
            .and_then(|part| u8::from_str_radix(part, 16).ok())
            .ok_or_else(invalid)
    };

    Ok(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{LayerDescriptor, LayerRegistry, parse_hex_color};
    use crate::error::RegistryError;

    #[test]
    fn given_default_registry_when_listed_then_five_builtins_in_order() {
        let registry = LayerRegistry::default();
        let ids: Vec<&str> =
            registry.iter().map(|layer| layer.id().as_str()).collect();

        assert_eq!(
            ids,
            vec![
                "forest-cover",
                "settlements",
                "ifr-claims",
                "cfr-claims",
                "satellite"
            ]
        );
        assert_eq!(
            registry.get("satellite").map(|layer| layer.display_name()),
            Some("Satellite View")
        );
    }

    #[test]
    fn given_unknown_id_when_lookup_then_absent() {
        let registry = LayerRegistry::default();
        assert!(registry.get("unknown-id").is_none());
        assert!(registry.position("unknown-id").is_none());
    }

    #[test]
    fn given_duplicate_ids_when_building_registry_then_error() {
        let layers = vec![
            LayerDescriptor::new("roads", "Roads", Color::BLACK, "R"),
            LayerDescriptor::new("roads", "Roads again", Color::WHITE, "R"),
        ];

        let err = LayerRegistry::new(layers)
            .expect_err("duplicate ids must be rejected");
        assert!(matches!(err, RegistryError::DuplicateId(id) if id == "roads"));
    }

    #[test]
    fn given_empty_id_when_building_registry_then_error() {
        let layers = vec![
            LayerDescriptor::new("roads", "Roads", Color::BLACK, "R"),
            LayerDescriptor::new("", "Nameless", Color::WHITE, "?"),
        ];

        let err = LayerRegistry::new(layers)
            .expect_err("empty ids must be rejected");
        assert!(
            matches!(err, RegistryError::EmptyId(name) if name == "Nameless")
        );
    }

    #[test]
    fn given_hex_values_when_parsed_then_channels_match() {
        assert_eq!(
            parse_hex_color("#22c55e").expect("valid colour"),
            Color::from_rgb8(0x22, 0xc5, 0x5e)
        );
        assert_eq!(
            parse_hex_color("#fff").expect("valid short colour"),
            Color::from_rgb8(0xff, 0xff, 0xff)
        );
        assert!(parse_hex_color("22c55e").is_err());
        assert!(parse_hex_color("#22c55").is_err());
        assert!(parse_hex_color("#zzzzzz").is_err());
    }
}
