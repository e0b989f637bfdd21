//! Form builder state module

mod history;
mod model;
mod palette;
mod store;
mod templates;

pub use history::{History, HISTORY_LIMIT};
pub use model::*;
pub use palette::{palette, DEFAULT_OPTIONS};
pub use store::FormStore;
pub use templates::default_templates;
