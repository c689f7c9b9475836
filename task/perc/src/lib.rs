#![forbid(unsafe_code)]

mod error;
mod grid;
mod probability;
mod stats;

pub use error::{Error, Result};
pub use grid::Percolation;
pub use probability::{evaluate_probability, DEFAULT_PROBABILITY_TRIALS};
pub use stats::{estimate_threshold, run_trial, PercolationStats, CONFIDENCE_95};
