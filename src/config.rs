//! Estimator configuration.

use crate::compare::Showdown;

/// How the completions to evaluate are chosen.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sampling {
    /// Draw `sample_cap` distinct completion indices uniformly and build
    /// only those. Enumerates everything when the cap covers all completions.
    #[default]
    Direct,
    /// Enumerate every completion, shuffle the list, keep a prefix.
    Materialize,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EstimatorConfig {
    /// Maximum number of completions evaluated. 0 evaluates none.
    pub sample_cap: usize,
    /// Fixed RNG seed for reproducible estimates.
    pub seed: Option<u64>,
    pub sampling: Sampling,
    pub showdown: Showdown,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            sample_cap: 100_000,
            seed: None,
            sampling: Sampling::default(),
            showdown: Showdown::default(),
        }
    }
}

impl EstimatorConfig {
    pub fn sample_cap(mut self, cap: usize) -> Self {
        self.sample_cap = cap;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn showdown(mut self, showdown: Showdown) -> Self {
        self.showdown = showdown;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let c = EstimatorConfig::default()
            .sample_cap(500)
            .seed(7)
            .sampling(Sampling::Materialize)
            .showdown(Showdown::BestFive);
        assert_eq!(c.sample_cap, 500);
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.sampling, Sampling::Materialize);
        assert_eq!(c.showdown, Showdown::BestFive);
        assert_eq!(EstimatorConfig::default().sample_cap, 100_000);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_and_partial_input() {
        let c = EstimatorConfig::default().seed(3).showdown(Showdown::BestFive);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(serde_json::from_str::<EstimatorConfig>(&json).unwrap(), c);

        // missing fields fall back to defaults
        let partial: EstimatorConfig = serde_json::from_str(r#"{"sample_cap": 250}"#).unwrap();
        assert_eq!(partial, EstimatorConfig::default().sample_cap(250));
    }
}
