//! Theme support for the task manager.
//!
//! Two themes exist, light and dark. [`ThemeName`] is the persisted identity of
//! a theme; [`Theme`] pairs it with the color palette the GUI paints with.
//!
//! # Examples
//!
//! ```
//! use rtodo::theme::{Theme, ThemeName};
//!
//! let theme = Theme::for_name(ThemeName::Dark);
//! assert_eq!(theme.name.toggled(), ThemeName::Light);
//! println!("Dark background: {:?}", theme.colors.background);
//! ```

use crate::error::ThemeParseError;
use egui::Color32;
use std::fmt;
use std::str::FromStr;

/// Identity of a presentation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

impl ThemeName {
    /// The storage value: `"light"` or `"dark"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }

    /// Class name applied to the presentation surface, e.g. `dark-theme`.
    pub fn class_name(self) -> String {
        format!("{}-theme", self.as_str())
    }

    /// Label for the control that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeName::Light => "🌙 Dark theme",
            ThemeName::Dark => "☀ Light theme",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// Color palette for a theme, covering all UI elements
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,

    // Semantic colors
    pub accent: Color32,
    pub danger: Color32,
    pub warning: Color32,
}

/// A theme with its palette.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: ThemeName,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn for_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Light => light_theme(),
            ThemeName::Dark => dark_theme(),
        }
    }

    /// Starting egui visuals for this theme, before palette overrides.
    pub fn base_visuals(&self) -> egui::Visuals {
        match self.name {
            ThemeName::Light => egui::Visuals::light(),
            ThemeName::Dark => egui::Visuals::dark(),
        }
    }

    /// Applies the palette to egui visuals
    pub fn apply_to_visuals(&self, visuals: &mut egui::Visuals) {
        let colors = &self.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.accent;
        visuals.error_fg_color = colors.danger;
        visuals.warn_fg_color = colors.warning;
    }
}

fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        colors: ThemeColors {
            background: Color32::from_rgb(248, 248, 248),
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),

            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),

            accent: Color32::from_rgb(40, 100, 200),
            danger: Color32::from_rgb(200, 40, 40),
            warning: Color32::from_rgb(230, 120, 20),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        colors: ThemeColors {
            background: Color32::from_rgb(39, 39, 39),
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),

            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),

            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),

            accent: Color32::from_rgb(52, 152, 219),
            danger: Color32::from_rgb(231, 76, 60),
            warning: Color32::from_rgb(243, 156, 18),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemeName::default(), ThemeName::Light);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(ThemeName::Light.toggled(), ThemeName::Dark);
        assert_eq!(ThemeName::Light.toggled().toggled(), ThemeName::Light);
    }

    #[test]
    fn test_parse() {
        assert_eq!("dark".parse::<ThemeName>(), Ok(ThemeName::Dark));
        assert_eq!("light".parse::<ThemeName>(), Ok(ThemeName::Light));
        assert_eq!("Dark".parse::<ThemeName>(), Err(ThemeParseError("Dark".to_string())));
    }

    #[test]
    fn test_class_name() {
        assert_eq!(ThemeName::Dark.class_name(), "dark-theme");
    }

    #[test]
    fn test_palettes_differ() {
        let light = Theme::for_name(ThemeName::Light);
        let dark = Theme::for_name(ThemeName::Dark);
        assert_eq!(light.name, ThemeName::Light);
        assert_ne!(light.colors.background, dark.colors.background);
    }

    #[test]
    fn test_apply_overrides_text_color() {
        let theme = Theme::for_name(ThemeName::Dark);
        let mut visuals = theme.base_visuals();
        theme.apply_to_visuals(&mut visuals);
        assert_eq!(visuals.override_text_color, Some(theme.colors.text));
        assert_eq!(visuals.panel_fill, theme.colors.panel_background);
    }
}
