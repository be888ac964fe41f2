use bookshelf_client::Volume;

/// The single externally observable output of the search controller.
///
/// Exactly one variant is active at any time. `Loading` is published
/// synchronously when a request starts; the other two are terminal for that
/// request and hold until the next one begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Success { items: Vec<Volume>, has_next: bool },
    Error(String),
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}
