//! Defaults and environment variable names.

/// Default cut-card depth: the cut card sits 80% of the way into the shoe.
pub const DEFAULT_BASE_PERCENT: f64 = 0.80;

/// Default cut-card fluctuation around the base depth (plus or minus 4%).
pub const DEFAULT_DEVIATION_PERCENT: f64 = 0.04;

/// Lowest accepted cut-card percentage.
pub const MIN_PERCENTAGE: f64 = 0.0;

/// Highest accepted cut-card percentage.
pub const MAX_PERCENTAGE: f64 = 1.0;

/// Cut-card threshold meaning "the cut card never comes out".
pub const NO_CUT_CARD: usize = 0;

/// Environment variable overriding the base cut-card depth.
pub const BASE_PERCENT_ENV: &str = "CUT_CARD_BASE_PERCENT";

/// Environment variable overriding the cut-card fluctuation.
pub const DEVIATION_PERCENT_ENV: &str = "CUT_CARD_DEVIATION_PERCENT";
