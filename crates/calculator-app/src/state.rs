use calculator_core::Calculator;

// AppState holds the session's calculator. It is not persisted.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct AppState {
    pub(crate) calculator: Calculator,
}

impl AppState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }
}
