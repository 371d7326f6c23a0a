//! Proportional split ratios.
//!
//! Windows Terminal sizes a new pane as a fraction of the pane being split,
//! not of the whole window. Carving `n` equal regions out of a shrinking
//! remainder therefore needs a diminishing series of ratios: the split that
//! leaves `k` regions to go must hand `k / (k + 1)` of the current pane to
//! the new one.

use crate::error::{MpwtError, Result};

/// Compute the split ratios for `n` successive splits.
///
/// `sizes(n)[i] = (n - i) / (n - i + 1)`, so the series runs from
/// `n / (n + 1)` down to `1 / 2`.
///
/// # Errors
///
/// Returns [`MpwtError::InvalidCount`] when `n` is zero.
///
/// # Examples
///
/// ```
/// use mpwt::splitter::sizes;
///
/// let s = sizes(3).unwrap();
/// assert_eq!(s.len(), 3);
/// assert_eq!(s[0], 0.75);
/// assert_eq!(s[2], 0.5);
/// ```
pub fn sizes(n: usize) -> Result<Vec<f64>> {
    if n < 1 {
        return Err(MpwtError::InvalidCount(n));
    }

    Ok((0..n)
        .map(|i| {
            let remaining = (n - i) as f64;
            remaining / (remaining + 1.0)
        })
        .collect())
}
