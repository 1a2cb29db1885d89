mod chrome;
mod collection;
mod empty_state;
mod product_card;
mod product_list;

pub use chrome::*;
pub use collection::*;
pub use empty_state::*;
pub use product_card::*;
pub use product_list::*;

/// The backend diagnostics page, served outside this app.
pub const DIAGNOSTICS_PATH: &str = "/test";
