//! Form filling: what the filler and preview views drive

mod session;
mod validation;

pub use session::{FillSession, SubmitError};
pub use validation::validate_field;
