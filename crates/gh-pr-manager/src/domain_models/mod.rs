//! Domain models shared by state, reducers and views

mod loading_state;
mod pr_key;
mod sort_order;

pub use loading_state::LoadingState;
pub use pr_key::PrKey;
pub use sort_order::SortOrder;
