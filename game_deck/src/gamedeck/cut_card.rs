//! Cut-card placement for shoes.
//!
//! A cut card marks how many cards may remain before a shoe is due for a
//! reshuffle. Its depth is randomized inside a band so players can't count on
//! an exact position.

use log::debug;
use rand::{Rng, rngs::ThreadRng};
use serde::{Deserialize, Serialize};
use std::env;

use super::errors::{DeckError, DeckResult};
use crate::constants::{
    BASE_PERCENT_ENV, DEFAULT_BASE_PERCENT, DEFAULT_DEVIATION_PERCENT, DEVIATION_PERCENT_ENV,
    MAX_PERCENTAGE, MIN_PERCENTAGE,
};

/// Cut-card configuration
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct CutCardConfig {
    /// Base depth as a fraction of the shoe (e.g., 0.80 = 80%)
    pub base_percent: f64,

    /// Fluctuation around the base depth as a fraction (e.g., 0.04 = ±4%)
    pub deviation_percent: f64,
}

impl Default for CutCardConfig {
    fn default() -> Self {
        Self {
            base_percent: DEFAULT_BASE_PERCENT,
            deviation_percent: DEFAULT_DEVIATION_PERCENT,
        }
    }
}

impl CutCardConfig {
    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `CUT_CARD_BASE_PERCENT`: Base depth (default: 0.80)
    /// - `CUT_CARD_DEVIATION_PERCENT`: Fluctuation (default: 0.04)
    ///
    /// # Errors
    ///
    /// * `DeckError::InvalidArgument` - If a variable isn't a number or the
    ///   resulting band is invalid
    pub fn from_env() -> DeckResult<Self> {
        let config = Self {
            base_percent: percent_from_env(BASE_PERCENT_ENV, DEFAULT_BASE_PERCENT)?,
            deviation_percent: percent_from_env(
                DEVIATION_PERCENT_ENV,
                DEFAULT_DEVIATION_PERCENT,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// * `DeckError::InvalidArgument` - If the JSON is malformed or the band is
    ///   invalid
    pub fn from_json(json: &str) -> DeckResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DeckError::InvalidArgument(format!("cut-card config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// Both percentages must lie in [0.0, 1.0] and the band
    /// `[base - deviation, base + deviation]` must not spill outside it.
    pub fn validate(&self) -> DeckResult<()> {
        let range = MIN_PERCENTAGE..=MAX_PERCENTAGE;
        if !range.contains(&self.base_percent) {
            return Err(DeckError::InvalidArgument(format!(
                "base percent must be in [0.0, 1.0], got {}",
                self.base_percent
            )));
        }
        if !range.contains(&self.deviation_percent) {
            return Err(DeckError::InvalidArgument(format!(
                "deviation percent must be in [0.0, 1.0], got {}",
                self.deviation_percent
            )));
        }
        if self.base_percent - self.deviation_percent < MIN_PERCENTAGE {
            return Err(DeckError::InvalidArgument(
                "deviation percent is too big: minimum cut position is less than zero".to_string(),
            ));
        }
        if self.base_percent + self.deviation_percent > MAX_PERCENTAGE {
            return Err(DeckError::InvalidArgument(
                "deviation percent is too big: maximum cut position exceeds the shoe size"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

fn percent_from_env(name: &str, default: f64) -> DeckResult<f64> {
    match env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| {
            DeckError::InvalidArgument(format!("{name} must be a number, got {value:?}"))
        }),
        Err(_) => Ok(default),
    }
}

/// Computes randomized cut-card positions.
///
/// Positions count cards *remaining*: once a shoe holds fewer cards than the
/// position, its cut card is out.
#[derive(Clone, Debug)]
pub struct CutCardCalculator<R = ThreadRng> {
    config: CutCardConfig,
    rng: R,
}

impl CutCardCalculator<ThreadRng> {
    /// Create a calculator backed by the thread-local generator
    ///
    /// # Errors
    ///
    /// * `DeckError::InvalidArgument` - If a percentage is outside [0.0, 1.0]
    ///   or the fluctuation band spills outside it
    pub fn new(base_percent: f64, deviation_percent: f64) -> DeckResult<Self> {
        Self::with_rng(base_percent, deviation_percent, rand::rng())
    }

    /// Create a calculator from a loaded [`CutCardConfig`]
    ///
    /// # Errors
    ///
    /// Same as [`CutCardCalculator::new`].
    pub fn from_config(config: &CutCardConfig) -> DeckResult<Self> {
        Self::new(config.base_percent, config.deviation_percent)
    }
}

impl<R: Rng> CutCardCalculator<R> {
    /// Create a calculator drawing from `rng`
    ///
    /// # Errors
    ///
    /// Same as [`CutCardCalculator::new`].
    pub fn with_rng(base_percent: f64, deviation_percent: f64, rng: R) -> DeckResult<Self> {
        let config = CutCardConfig {
            base_percent,
            deviation_percent,
        };
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn base_percent(&self) -> f64 {
        self.config.base_percent
    }

    pub fn deviation_percent(&self) -> f64 {
        self.config.deviation_percent
    }

    /// Configuration this calculator was built with
    pub fn config(&self) -> &CutCardConfig {
        &self.config
    }

    /// Pick a cut-card position for a shoe of `shoe_size` cards.
    ///
    /// The result is uniform over `[max(0, base - fluct), min(n, base + fluct)]`
    /// where `base = round(base_percent * n)` and
    /// `fluct = round(deviation_percent * n)`.
    ///
    /// # Errors
    ///
    /// * `DeckError::InvalidArgument` - If `shoe_size` is zero
    pub fn calculate_position(&mut self, shoe_size: usize) -> DeckResult<usize> {
        if shoe_size == 0 {
            return Err(DeckError::InvalidArgument(
                "shoe size must be positive".to_string(),
            ));
        }

        let (low, high) = self.bounds(shoe_size);
        let position = self.rng.random_range(low..=high);
        debug!("Cut card for {shoe_size}-card shoe placed at {position} (band {low}..={high})");
        Ok(position)
    }

    /// Inclusive band `calculate_position` draws from.
    pub fn bounds(&self, shoe_size: usize) -> (usize, usize) {
        let size = shoe_size as f64;
        let base_position = (self.config.base_percent * size).round() as usize;
        let fluctuation = (self.config.deviation_percent * size).round() as usize;
        let low = base_position.saturating_sub(fluctuation);
        let high = (base_position + fluctuation).min(shoe_size);
        (low, high)
    }
}

impl Default for CutCardCalculator<ThreadRng> {
    fn default() -> Self {
        Self {
            config: CutCardConfig::default(),
            rng: rand::rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_default_configuration() {
        let calculator: CutCardCalculator = CutCardCalculator::default();
        assert_eq!(calculator.base_percent(), 0.80);
        assert_eq!(calculator.deviation_percent(), 0.04);
        assert!(CutCardConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_percentages() {
        for (base, deviation) in [(-0.1, 0.0), (1.1, 0.0), (0.5, -0.1), (0.5, 1.5), (f64::NAN, 0.0)]
        {
            assert!(
                matches!(
                    CutCardCalculator::new(base, deviation),
                    Err(DeckError::InvalidArgument(_))
                ),
                "({base}, {deviation}) should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_band_outside_unit_interval() {
        let Err(DeckError::InvalidArgument(low)) = CutCardCalculator::new(0.1, 0.2) else {
            panic!("band below zero should be rejected");
        };
        assert!(low.contains("less than zero"));

        let Err(DeckError::InvalidArgument(high)) = CutCardCalculator::new(0.9, 0.2) else {
            panic!("band above one should be rejected");
        };
        assert!(high.contains("exceeds the shoe size"));
    }

    #[test]
    fn test_band_edges_are_allowed() {
        assert!(CutCardCalculator::new(0.5, 0.5).is_ok());
        assert!(CutCardCalculator::new(0.0, 0.0).is_ok());
        assert!(CutCardCalculator::new(1.0, 0.0).is_ok());
    }

    #[test]
    fn test_zero_shoe_size() {
        let mut calculator: CutCardCalculator = CutCardCalculator::default();
        assert!(matches!(
            calculator.calculate_position(0),
            Err(DeckError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_positions_stay_in_band() {
        let mut calculator =
            CutCardCalculator::with_rng(0.75, 0.05, StdRng::seed_from_u64(42)).unwrap();
        // 312 cards: base 234, fluctuation 16
        assert_eq!(calculator.bounds(312), (218, 250));
        for _ in 0..1000 {
            let position = calculator.calculate_position(312).unwrap();
            assert!((218..=250).contains(&position));
        }
    }

    #[test]
    fn test_zero_deviation_is_exact() {
        let mut calculator = CutCardCalculator::new(0.5, 0.0).unwrap();
        assert_eq!(calculator.calculate_position(52), Ok(26));
        assert_eq!(calculator.calculate_position(1), Ok(1));
    }

    #[test]
    fn test_seeded_calculators_agree() {
        let mut first = CutCardCalculator::with_rng(0.8, 0.1, StdRng::seed_from_u64(3)).unwrap();
        let mut second = CutCardCalculator::with_rng(0.8, 0.1, StdRng::seed_from_u64(3)).unwrap();
        for _ in 0..20 {
            assert_eq!(
                first.calculate_position(416),
                second.calculate_position(416)
            );
        }
    }

    #[test]
    fn test_from_config_keeps_band() {
        let config = CutCardConfig {
            base_percent: 0.6,
            deviation_percent: 0.1,
        };
        let calculator = CutCardCalculator::from_config(&config).unwrap();
        assert_eq!(calculator.config(), &config);

        let bad = CutCardConfig {
            base_percent: 0.05,
            deviation_percent: 0.1,
        };
        assert!(CutCardCalculator::from_config(&bad).is_err());
    }

    #[test]
    fn test_config_from_json() {
        let config = CutCardConfig::from_json(r#"{"base_percent": 0.7}"#).unwrap();
        assert_eq!(config.base_percent, 0.7);
        assert_eq!(config.deviation_percent, DEFAULT_DEVIATION_PERCENT);

        assert!(CutCardConfig::from_json(r#"{"base_percent": 0.99, "deviation_percent": 0.1}"#).is_err());
        assert!(CutCardConfig::from_json("not json").is_err());
    }
}
