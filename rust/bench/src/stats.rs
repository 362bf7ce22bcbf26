//! Win-rate statistics in big blinds per 100 hands.

use serde::Serialize;

/// z-score for a two-sided 95% normal interval.
const Z_95: f64 = 1.96;

/// Result of a benchmark match.
///
/// Samples are one duplicate unit each (a deal replayed under every seating),
/// so the interval reflects variance left after duplication.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchSummary {
    pub bb_per_100: f64,
    /// Half-width of the 95% confidence interval, in bb/100
    pub ci95: f64,
    /// Sample standard deviation of the per-unit result, in bb/100
    pub std_dev: f64,
    /// Mean net chips per hand
    pub mean_net: f64,
    pub hands_played: usize,
}

impl MatchSummary {
    /// `unit_nets` holds the candidate's net chips for each duplicate unit,
    /// each unit covering `hands_per_unit` hands.
    pub fn from_units(unit_nets: &[f64], hands_per_unit: usize, big_blind: u32) -> Self {
        let hands_played = unit_nets.len() * hands_per_unit;
        if unit_nets.is_empty() || hands_per_unit == 0 || big_blind == 0 {
            return Self {
                bb_per_100: 0.0,
                ci95: 0.0,
                std_dev: 0.0,
                mean_net: 0.0,
                hands_played,
            };
        }
        let per_unit = hands_per_unit as f64;
        let bb = f64::from(big_blind);
        // bb/100 of each unit
        let rates: Vec<f64> = unit_nets
            .iter()
            .map(|net| net / per_unit / bb * 100.0)
            .collect();
        let (mean, std_dev) = mean_and_sd(&rates);
        let ci95 = if rates.len() > 1 {
            Z_95 * std_dev / (rates.len() as f64).sqrt()
        } else {
            0.0
        };
        Self {
            bb_per_100: mean,
            ci95,
            std_dev,
            mean_net: unit_nets.iter().sum::<f64>() / hands_played as f64,
            hands_played,
        }
    }

    /// Lower and upper bounds of the 95% interval.
    pub fn interval(&self) -> (f64, f64) {
        (self.bb_per_100 - self.ci95, self.bb_per_100 + self.ci95)
    }
}

/// Mean and sample (n - 1) standard deviation.
pub fn mean_and_sd(xs: &[f64]) -> (f64, f64) {
    if xs.is_empty() {
        return (0.0, 0.0);
    }
    let n = xs.len() as f64;
    let mean = xs.iter().sum::<f64>() / n;
    if xs.len() < 2 {
        return (mean, 0.0);
    }
    let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, var.sqrt())
}
