use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

/// Every variant is an invalid argument supplied by the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("grid size must be greater than 0, got {size}")]
    InvalidGridSize { size: usize },

    #[error("trial count must be greater than 0, got {trials}")]
    InvalidTrialCount { trials: usize },

    #[error("site ({row}, {col}) is out of range for a {size}x{size} grid")]
    SiteOutOfRange { row: usize, col: usize, size: usize },

    #[error("vacancy must be within [0, 1], got {vacancy}")]
    InvalidVacancy { vacancy: f64 },
}

impl Error {
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::InvalidGridSize { .. }
            | Error::InvalidTrialCount { .. }
            | Error::SiteOutOfRange { .. }
            | Error::InvalidVacancy { .. } => true,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
