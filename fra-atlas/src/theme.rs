use fra_atlas_ui_layers::parse_hex_color;
use iced::theme::Palette;
use iced::widget::container;
use iced::{Border, Color, Shadow, Theme, Vector};

/// Hex colour palette of the atlas screens.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) background: String,
    pub(crate) text: String,
    pub(crate) muted_text: String,
    pub(crate) border: String,
    pub(crate) accent: String,
    pub(crate) success: String,
    pub(crate) warning: String,
    pub(crate) danger: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            background: String::from("#ffffff"),
            text: String::from("#111827"),
            muted_text: String::from("#6b7280"),
            border: String::from("#e5e7eb"),
            accent: String::from("#3b82f6"),
            success: String::from("#22c55e"),
            warning: String::from("#f59e0b"),
            danger: String::from("#ef4444"),
        }
    }
}

/// [`ColorPalette`] resolved into iced colours.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IcedColorPalette {
    pub(crate) background: Color,
    pub(crate) text: Color,
    pub(crate) muted_text: Color,
    pub(crate) border: Color,
    pub(crate) accent: Color,
    pub(crate) success: Color,
    pub(crate) warning: Color,
    pub(crate) danger: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            background: color_or(&p.background, Color::WHITE),
            text: color_or(&p.text, Color::BLACK),
            muted_text: color_or(&p.muted_text, Color::BLACK),
            border: color_or(&p.border, Color::BLACK),
            accent: color_or(&p.accent, Color::BLACK),
            success: color_or(&p.success, Color::BLACK),
            warning: color_or(&p.warning, Color::BLACK),
            danger: color_or(&p.danger, Color::BLACK),
        }
    }
}

fn color_or(value: &str, fallback: Color) -> Color {
    parse_hex_color(value).unwrap_or_else(|err| {
        log::warn!("theme colour ignored: {err}");
        fallback
    })
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_palette(
            String::from("atlas-light"),
            &ColorPalette::default(),
        )
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.text,
            primary: palette.accent,
            success: palette.success,
            warning: palette.warning,
            danger: palette.danger,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn from_palette(id: String, raw_palette: &ColorPalette) -> Self {
        Self {
            id,
            iced_palette: IcedColorPalette::from(raw_palette),
        }
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }

    /// Floating card drawn over the map.
    pub(crate) fn overlay_card(&self) -> container::Style {
        let palette = self.iced_palette;
        container::Style {
            background: Some(palette.background.into()),
            text_color: Some(palette.text),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: 8.0.into(),
            },
            shadow: Shadow {
                color: Color {
                    a: 0.15,
                    ..Color::BLACK
                },
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            ..container::Style::default()
        }
    }

    /// Bordered panel hosting the sidebar and the map.
    pub(crate) fn panel(&self) -> container::Style {
        let palette = self.iced_palette;
        container::Style {
            background: Some(palette.background.into()),
            text_color: Some(palette.text),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..container::Style::default()
        }
    }
}

/// Theme props passed from the app into widget views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Owns the current application theme.
#[derive(Debug, Clone, Default)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{AppTheme, ColorPalette, IcedColorPalette};

    #[test]
    fn given_default_palette_when_resolved_then_accent_matches_selection_blue()
    {
        let palette = IcedColorPalette::from(&ColorPalette::default());
        assert_eq!(palette.accent, Color::from_rgb8(0x3b, 0x82, 0xf6));
        assert_eq!(palette.background, Color::WHITE);
    }

    #[test]
    fn given_invalid_hex_when_resolved_then_fallback_is_used() {
        let raw = ColorPalette {
            background: String::from("white"),
            ..ColorPalette::default()
        };
        let theme = AppTheme::from_palette(String::from("test"), &raw);
        assert_eq!(theme.iced_palette().background, Color::WHITE);
    }
}
