use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::result::ForecastError;

/// Row indices of a train/test partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Deterministically partition `n` rows into train and test indices.
///
/// - `n_test = ceil(n * test_ratio)`, the remainder trains.
/// - Indices `0..n` are shuffled by a `StdRng` seeded with `seed`; the first
///   `n_test` shuffled indices form the test partition.
///
/// The same `(n, test_ratio, seed)` always yields the same partition.
pub fn train_test_split(n: usize, test_ratio: f64, seed: u64) -> Result<Split, ForecastError> {
    if !(test_ratio.is_finite() && test_ratio > 0.0 && test_ratio < 1.0) {
        return Err(ForecastError::InvalidInput(format!(
            "test_ratio must be in (0, 1), got {test_ratio}"
        )));
    }

    let n_test = (n as f64 * test_ratio).ceil() as usize;
    if n_test == 0 || n_test >= n {
        return Err(ForecastError::InvalidInput(format!(
            "test_ratio {test_ratio} over {n} row(s) leaves an empty partition"
        )));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let train = indices.split_off(n_test);
    Ok(Split {
        train,
        test: indices,
    })
}
