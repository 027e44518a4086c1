//! Theme state management.
//!
//! This module encapsulates the currently active theme.

use rtodo::ThemeName;

/// State related to the visual theme.
///
/// Responsibilities:
/// - Tracking the active theme
/// - Switching between light and dark
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeState {
    current: ThemeName,
}

impl ThemeState {
    /// Creates a new theme state with a specific theme.
    pub fn with_theme(current: ThemeName) -> Self {
        Self { current }
    }

    // ===== Theme Queries =====

    pub fn current(&self) -> ThemeName {
        self.current
    }

    // ===== Theme Mutations =====

    /// Switches to the other theme and returns it.
    pub fn toggle(&mut self) -> ThemeName {
        self.current = self.current.toggled();
        self.current
    }
}
