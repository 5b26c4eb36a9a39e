mod card;
mod card_grid;
mod empty_state;
mod status_bar;

pub use card::{CardComponent, CardEvent};
pub use card_grid::{CardGrid, CardGridState};
pub use empty_state::EmptyState;
pub use status_bar::StatusBar;
