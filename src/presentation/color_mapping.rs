//! Color mapping for task entries.
//!
//! This module provides functions for:
//! - Getting the palette of the active theme
//! - Picking the title color of a rendered entry

use egui::Color32;
use rtodo::{TaskEntry, Theme, ThemeColors, ThemeName};

/// Returns the palette for `theme`.
pub fn theme_colors(theme: ThemeName) -> ThemeColors {
    Theme::for_name(theme).colors
}

/// Completed tasks are dimmed; active ones use the regular text color.
pub fn entry_title_color(entry: &TaskEntry, colors: &ThemeColors) -> Color32 {
    if entry.completed {
        colors.text_dim
    } else {
        colors.text
    }
}
