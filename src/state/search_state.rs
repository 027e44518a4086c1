//! Search term state.

/// Current search term applied to the task view.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    term: String,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Returns true if a non-empty term narrows the view.
    pub fn is_active(&self) -> bool {
        !self.term.is_empty()
    }

    pub fn set_term(&mut self, term: String) {
        self.term = term;
    }
}
