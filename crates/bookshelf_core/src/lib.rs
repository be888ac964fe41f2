//! Bookshelf core: the search controller and its observable view state.
mod controller;
mod view_state;

pub use controller::{SearchController, SEED_QUERY};
pub use view_state::ViewState;
