//! Gauge sampling for the right panel. Stateless: every frame gets a fresh
//! draw from each gauge's fixed range and nothing carries over.

use crate::config::METRIC_TABLE;
use crate::rng::RandomSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    /// Integer percentage inside the gauge's configured range.
    pub value: i64,
}

/// Sample every gauge in table order.
pub fn sample_metrics(rng: &mut dyn RandomSource) -> Vec<Metric> {
    METRIC_TABLE
        .iter()
        .map(|&(label, lo, hi)| Metric {
            label,
            value: rng.int_between(lo, hi),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedRandom, SeededRandom};

    #[test]
    fn samples_follow_table_order() {
        let mut rng = ScriptedRandom::new();
        for v in [80, 90, 60, 30] {
            rng.queue_int(v);
        }
        let sample = sample_metrics(&mut rng);
        let labels: Vec<&str> = sample.iter().map(|m| m.label).collect();
        assert_eq!(labels, ["CPU LOAD", "AI LOAD", "SIGNAL", "LATENCY"]);
        let values: Vec<i64> = sample.iter().map(|m| m.value).collect();
        assert_eq!(values, [80, 90, 60, 30]);
    }

    #[test]
    fn every_sample_stays_inside_its_inclusive_range() {
        let mut rng = SeededRandom::from_seed(11);
        for _ in 0..500 {
            for (metric, &(label, lo, hi)) in sample_metrics(&mut rng).iter().zip(&METRIC_TABLE) {
                assert_eq!(metric.label, label);
                assert!(
                    (lo..=hi).contains(&metric.value),
                    "{label} sampled {} outside [{lo}, {hi}]",
                    metric.value
                );
            }
        }
    }
}
