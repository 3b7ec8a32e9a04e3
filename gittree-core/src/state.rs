use crate::registry::SessionRegistry;

/// Everything the UI renders from. Only `update::apply_action` and
/// `update::apply_event` mutate it.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub registry: SessionRegistry,
    /// Whether an external directory picker is configured. Without one, Open shows an
    /// inline path prompt.
    pub external_picker: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(external_picker: bool) -> Self {
        Self {
            registry: SessionRegistry::new(),
            external_picker,
            should_quit: false,
        }
    }
}
