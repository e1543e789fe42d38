use thiserror::Error;
use visitors::{Day, VisitorError};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Normal distribution error: {0}")]
    Distribution(#[from] rand_distr::NormalError),

    #[error(transparent)]
    Domain(#[from] VisitorError),

    #[error("No data generated for {0}")]
    MissingDay(Day),
}
