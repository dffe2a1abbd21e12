//! Distance aggregation for the Kasiski examination

use std::collections::BTreeMap;

use tracing::debug;

/// Greatest common divisor by repeated remainder.
///
/// `gcd(12, 18) == 6`; `gcd(a, 0) == a`.
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// GCD over a collection of distances.
///
/// An empty collection yields the sentinel `1`, which carries no evidence
/// about the key length. Use [`DistanceSummary::common_factor`] to tell the
/// two cases apart.
pub fn gcd_of(distances: &[usize]) -> usize {
    match distances.split_first() {
        Some((&first, rest)) => rest.iter().fold(first, |acc, &d| gcd(acc, d)),
        None => 1,
    }
}

/// How often one distance value occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceCount {
    pub distance: usize,
    pub count: usize,
}

/// Histogram over distinct distances, most frequent first.
///
/// Equal counts are ordered by ascending distance.
pub fn histogram(distances: &[usize]) -> Vec<DistanceCount> {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for &distance in distances {
        *counts.entry(distance).or_default() += 1;
    }

    let mut ranked: Vec<DistanceCount> = counts
        .into_iter()
        .map(|(distance, count)| DistanceCount { distance, count })
        .collect();
    // Stable sort keeps ascending distance among equal counts
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Number of distances divisible by each candidate key length.
///
/// Returns `(length, count)` for every length in `2..=max_length`.
pub fn factor_tally(distances: &[usize], max_length: usize) -> Vec<(usize, usize)> {
    (2..=max_length)
        .map(|length| {
            let count = distances.iter().filter(|&&d| d % length == 0).count();
            (length, count)
        })
        .collect()
}

/// Aggregated distances from one or more n-gram indexes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DistanceSummary {
    distances: Vec<usize>,
}

impl DistanceSummary {
    pub fn new(distances: Vec<usize>) -> Self {
        debug!(count = distances.len(), "aggregated repeat distances");
        Self { distances }
    }

    /// Combines two summaries, keeping every distance from both.
    pub fn merge(&self, other: &DistanceSummary) -> DistanceSummary {
        let mut distances = self.distances.clone();
        distances.extend_from_slice(&other.distances);
        DistanceSummary { distances }
    }

    pub fn distances(&self) -> &[usize] {
        &self.distances
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// GCD of all distances, `1` when there are none.
    pub fn gcd(&self) -> usize {
        gcd_of(&self.distances)
    }

    /// GCD of all distances, or `None` when no repeats were found.
    pub fn common_factor(&self) -> Option<usize> {
        (!self.distances.is_empty()).then(|| self.gcd())
    }

    pub fn histogram(&self) -> Vec<DistanceCount> {
        histogram(&self.distances)
    }

    pub fn factor_tally(&self, max_length: usize) -> Vec<(usize, usize)> {
        factor_tally(&self.distances, max_length)
    }
}
