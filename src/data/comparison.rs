//! Pointwise differences between two percentile series.

use crate::data::percentiles::{Percentile, PercentileRecord, PercentileSeries, PERCENTILE_PAIRS};

/// Difference records `base - comparator` for every band edge.
///
/// Only the overlapping prefix of the two series contributes; the comparator
/// is never extrapolated past its own end. An edge is undefined in the
/// result if it is undefined on either side.
pub fn diff_series(base: &[PercentileRecord], comparator: &[PercentileRecord]) -> PercentileSeries {
    base.iter()
        .zip(comparator)
        .enumerate()
        .map(|(i, (b, c))| {
            let mut record = PercentileRecord::new(i as u32);
            for pair in PERCENTILE_PAIRS {
                for p in [pair.upper, pair.lower] {
                    record.set(p, edge_diff(b, c, p));
                }
            }
            record
        })
        .collect()
}

fn edge_diff(base: &PercentileRecord, comparator: &PercentileRecord, p: Percentile) -> Option<f64> {
    Some(base.get(p)? - comparator.get(p)?)
}

/// Largest absolute difference of the outer edges (percentile100 and
/// percentile0) over the aligned steps. Zero when nothing is comparable.
pub fn max_distance(base: &[PercentileRecord], comparator: &[PercentileRecord]) -> f64 {
    base.iter()
        .zip(comparator)
        .flat_map(|(b, c)| {
            [Percentile::P100, Percentile::P0]
                .into_iter()
                .filter_map(move |p| edge_diff(b, c, p))
        })
        .fold(0.0_f64, |acc, d| acc.max(d.abs()))
}

/// Axis domains used while comparing two series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonDomain {
    /// Number of time steps on the x axis: the longer of the two series.
    pub x_len: usize,
    /// Symmetric value domain `[-max_distance, max_distance]`.
    pub y: [f64; 2],
}

pub fn comparison_domain(base: &[PercentileRecord], comparator: &[PercentileRecord]) -> ComparisonDomain {
    let m = max_distance(base, comparator);
    ComparisonDomain {
        x_len: base.len().max(comparator.len()),
        y: [-m, m],
    }
}
