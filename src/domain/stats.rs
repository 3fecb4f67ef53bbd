// Monthly count statistics
use super::observation::{Month, Observation};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate of one species' whole-count totals for one calendar month
/// across all recorded years.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyStats {
    pub month: Month,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (n - 1 denominator); 0 when fewer than two
    /// samples exist for the month.
    pub std: f64,
    pub min: u32,
    pub max: u32,
}

/// Stats table for one species, months ordered Jan through Dec.
#[derive(Debug, Clone, Serialize)]
pub struct StatsView {
    pub species: String,
    pub rows: Vec<MonthlyStats>,
}

/// Group observations by month and compute per-month stats, ordered Jan
/// through Dec. Months with no observations are absent from the result.
pub fn monthly_stats(observations: &[Observation]) -> Vec<MonthlyStats> {
    let mut by_month: BTreeMap<Month, Vec<u32>> = BTreeMap::new();
    for obs in observations {
        by_month.entry(obs.month).or_default().push(obs.count);
    }

    by_month
        .into_iter()
        .map(|(month, counts)| {
            let n = counts.len() as f64;
            let mean = counts.iter().map(|&c| c as f64).sum::<f64>() / n;
            MonthlyStats {
                month,
                mean,
                median: median(&counts),
                std: sample_std(&counts, mean),
                min: counts.iter().copied().min().unwrap_or(0),
                max: counts.iter().copied().max().unwrap_or(0),
            }
        })
        .collect()
}

fn median(counts: &[u32]) -> f64 {
    let mut sorted = counts.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    }
}

fn sample_std(counts: &[u32], mean: f64) -> f64 {
    if counts.len() < 2 {
        return 0.0;
    }
    let sum_sq = counts
        .iter()
        .map(|&c| {
            let diff = c as f64 - mean;
            diff * diff
        })
        .sum::<f64>();
    (sum_sq / (counts.len() as f64 - 1.0)).sqrt()
}
