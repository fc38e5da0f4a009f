//! Fixed-edge density histogram anchored at the lower spec limit
//!
//! Bin edges run from LSL to USL regardless of the padded display range,
//! so edges can sit outside the visible axis. Densities follow the usual
//! fixed-edge convention: values outside the edges are excluded, and the
//! area over the counted values sums to 1.

use thiserror::Error;

/// Number of bins between LSL and USL.
pub const DEFAULT_BIN_COUNT: usize = 19;

/// The limits span no usable width (USL == LSL, or undefined).
#[derive(Debug, Error)]
#[error("degenerate limit range: LSL {lsl} to USL {usl} spans no usable bin width")]
pub struct DegenerateRangeError {
    pub usl: f64,
    pub lsl: f64,
}

/// A binned distribution: `bin_count + 1` edges, `bin_count` counts and
/// densities.
#[derive(Debug, Clone)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<u64>,
    pub densities: Vec<f64>,
}

impl Histogram {
    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Width of one bin.
    pub fn bin_width(&self) -> f64 {
        match self.edges.as_slice() {
            [first, .., last] => (last - first) / self.counts.len() as f64,
            _ => 0.0,
        }
    }

    /// Number of values that fell inside the edges.
    pub fn counted(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn max_density(&self) -> f64 {
        self.densities.iter().cloned().fold(0.0, f64::max)
    }

    /// Index of the bin containing `value`, if it lies within the edges.
    /// Bins are half-open on the right except the last, which is closed.
    pub fn bin_of(&self, value: f64) -> Option<usize> {
        if self.counts.is_empty() {
            return None;
        }
        let (first, last) = (*self.edges.first()?, *self.edges.last()?);
        if !value.is_finite() || value < first || value > last {
            return None;
        }
        let width = self.bin_width();
        let index = ((value - first) / width) as usize;
        Some(index.min(self.counts.len() - 1))
    }
}

/// Bin `values` into `bin_count` density bins between `lsl` and `usl`.
///
/// Non-finite values are dropped before binning. Densities are normalized
/// over the values that fell inside the edges; if none did, all densities
/// are zero.
pub fn compute_histogram(
    values: &[f64],
    lsl: f64,
    usl: f64,
    bin_count: usize,
) -> Result<Histogram, DegenerateRangeError> {
    let span = usl - lsl;
    if !span.is_finite() || span == 0.0 {
        return Err(DegenerateRangeError { usl, lsl });
    }
    let width = span / bin_count as f64;
    if !width.is_finite() || width <= 0.0 {
        return Err(DegenerateRangeError { usl, lsl });
    }

    let edges: Vec<f64> = (0..=bin_count).map(|i| lsl + i as f64 * width).collect();
    let top = edges[bin_count];

    let mut counts = vec![0u64; bin_count];
    for &value in values {
        if !value.is_finite() || value < lsl || value > top {
            continue;
        }
        let index = (((value - lsl) / width) as usize).min(bin_count - 1);
        counts[index] += 1;
    }

    let counted: u64 = counts.iter().sum();
    let densities = if counted == 0 {
        vec![0.0; bin_count]
    } else {
        counts
            .iter()
            .map(|&c| c as f64 / (counted as f64 * width))
            .collect()
    };

    Ok(Histogram {
        edges,
        counts,
        densities,
    })
}
