mod config;
mod form;
mod submission;
mod types;
mod validation;

pub use config::*;
pub use form::*;
pub use submission::*;
pub use types::*;
pub use validation::*;
