use thiserror::Error;

mod calendar;
mod date_only;
mod domain_types;

pub use calendar::*;
pub use date_only::*;
pub use domain_types::*;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid access token: {reason}")]
    InvalidToken { reason: String },

    #[error("Invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),
}
