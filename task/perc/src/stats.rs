use crate::{Error, Percolation, Result};

use rand::Rng;
use statrs::statistics::Statistics;

////////////////////////////////////////////////////////////////////////////////

/// Critical value of the standard normal distribution for a two-sided 95%
/// confidence interval.
pub const CONFIDENCE_95: f64 = 1.96;

/// Percolation threshold statistics gathered over independent trials.
///
/// Every trial starts from a fully blocked `size`-by-`size` grid and opens
/// uniformly random blocked sites until the grid percolates. The fraction of
/// open sites at that moment is the threshold of the trial.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    size: usize,
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Runs `trials` experiments on a `size`-by-`size` grid using the thread
    /// local random generator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGridSize`] or [`Error::InvalidTrialCount`] if
    /// `size` or `trials` is 0.
    pub fn new(size: usize, trials: usize) -> Result<Self> {
        Self::with_rng(size, trials, &mut rand::thread_rng())
    }

    /// Same as [`PercolationStats::new`], but draws sites from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(size: usize, trials: usize, rng: &mut R) -> Result<Self> {
        validate(size, trials)?;

        let thresholds = (0..trials)
            .map(|trial| {
                let threshold = run_trial(size, &mut *rng)?;
                log::debug!("trial #{trial}: threshold {threshold}");
                Ok(threshold)
            })
            .collect::<Result<Vec<_>>>()?;

        let stats = Self { size, thresholds };
        log::info!(
            "{trials} trials on a {size}x{size} grid: mean {}, stddev {}",
            stats.mean(),
            stats.stddev()
        );

        Ok(stats)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Returns recorded thresholds in trial order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        self.thresholds.iter().mean()
    }

    /// Sample standard deviation of the percolation threshold.
    ///
    /// The sample variance of a single trial is undefined, so with one trial
    /// this returns `f64::NAN`.
    pub fn stddev(&self) -> f64 {
        self.thresholds.iter().std_dev()
    }

    /// Low endpoint of the 95% confidence interval. `f64::NAN` with one trial.
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    /// High endpoint of the 95% confidence interval. `f64::NAN` with one trial.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }
}

/// Runs a single trial on a fresh `size`-by-`size` grid and returns the
/// fraction of sites open at the moment it first percolates.
///
/// Sites are drawn uniformly with replacement; draws that hit an open site
/// are discarded.
pub fn run_trial<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<f64> {
    let mut percolation = Percolation::new(size)?;

    while !percolation.percolates() {
        let row = rng.gen_range(1..=size);
        let col = rng.gen_range(1..=size);
        if !percolation.is_open(row, col)? {
            percolation.open(row, col)?;
        }
    }

    Ok(percolation.number_of_open_sites() as f64 / (size * size) as f64)
}

/// Returns the mean percolation threshold over `trials` experiments.
pub fn estimate_threshold<R: Rng + ?Sized>(size: usize, trials: usize, rng: &mut R) -> Result<f64> {
    PercolationStats::with_rng(size, trials, rng).map(|stats| stats.mean())
}

fn validate(size: usize, trials: usize) -> Result<()> {
    if size == 0 {
        return Err(Error::InvalidGridSize { size });
    }
    if trials == 0 {
        return Err(Error::InvalidTrialCount { trials });
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
