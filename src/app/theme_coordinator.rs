//! Theme switching and persistence coordination.

use crate::app::{AppState, Environment};
use crate::presentation::PresentationSurface;
use rtodo::{PersistenceAdapter, Theme, ThemeName};
use tracing::info;

/// Coordinates theme switching, application and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Applies `theme` to the presentation surface.
    pub fn apply_theme(surface: &mut dyn PresentationSurface, theme: ThemeName) {
        surface.apply_theme(theme);
    }

    /// Switches to the other theme, applies it, and persists it immediately.
    pub fn toggle_theme(state: &mut AppState, env: &mut Environment<'_>) {
        let theme = state.theme.toggle();
        Self::apply_theme(env.surface, theme);
        PersistenceAdapter::save_theme(env.storage, theme);
        info!(%theme, "theme changed");
    }

    /// Applies the theme palette to the egui context.
    ///
    /// Called every frame to ensure theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context, theme: ThemeName) {
        let theme = Theme::for_name(theme);
        let mut visuals = theme.base_visuals();
        theme.apply_to_visuals(&mut visuals);
        ctx.set_visuals(visuals);
    }
}
