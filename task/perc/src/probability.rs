use crate::{Error, Percolation, Result};

use rand::{distributions::Bernoulli, prelude::Distribution, Rng};

////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_PROBABILITY_TRIALS: usize = 10_000;

impl Percolation {
    /// Creates a new grid with every site opened independently at random.
    ///
    /// # Arguments
    ///
    /// * `size` - grid size.
    /// * `vacancy` - probability of any given site being open.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVacancy`] if `vacancy` is not within `[0, 1]`,
    /// and [`Error::InvalidGridSize`] if `size` is 0.
    pub fn random<R: Rng + ?Sized>(size: usize, vacancy: f64, rng: &mut R) -> Result<Self> {
        let distribution = Bernoulli::new(vacancy).map_err(|_| Error::InvalidVacancy { vacancy })?;
        let mut percolation = Percolation::new(size)?;

        for row in 1..=size {
            for col in 1..=size {
                if distribution.sample(rng) {
                    percolation.open(row, col)?;
                }
            }
        }

        Ok(percolation)
    }
}

/// Returns an estimate of the probability that a random `size`-by-`size`
/// grid with the given `vacancy` percolates, as the share of `trials` random
/// grids that do.
pub fn evaluate_probability<R: Rng + ?Sized>(
    size: usize,
    vacancy: f64,
    trials: usize,
    rng: &mut R,
) -> Result<f64> {
    if trials == 0 {
        return Err(Error::InvalidTrialCount { trials });
    }

    let mut percolated = 0;
    for _ in 0..trials {
        if Percolation::random(size, vacancy, rng)?.percolates() {
            percolated += 1;
        }
    }

    let probability = percolated as f64 / trials as f64;
    log::info!("{size}x{size} grid with vacancy {vacancy} percolates in {percolated}/{trials} trials");

    Ok(probability)
}

////////////////////////////////////////////////////////////////////////////////
