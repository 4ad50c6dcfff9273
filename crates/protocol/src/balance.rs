use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_TILT_DEGREES: f64 = 20.0;
pub const DEFAULT_SIZE_CHANGE_RATIO: f64 = 1.30;

/// One of the two categories weighed on the seesaw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Good,
    Low,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Tuning knobs for the tilt/scale mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    /// Rotation magnitude reached when one side holds every item.
    pub max_tilt_degrees: f64,
    /// Scale applied to the dominant side. The other side gets the reciprocal.
    pub size_change_ratio: f64,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            max_tilt_degrees: DEFAULT_MAX_TILT_DEGREES,
            size_change_ratio: DEFAULT_SIZE_CHANGE_RATIO,
        }
    }
}

/// Counts for both sides plus the mapping configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceInput {
    pub good_count: u64,
    pub low_count: u64,
    #[serde(default)]
    pub config: BalanceConfig,
}

impl BalanceInput {
    pub fn new(good_count: u64, low_count: u64) -> Self {
        Self {
            good_count,
            low_count,
            config: BalanceConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BalanceConfig) -> Self {
        self.config = config;
        self
    }
}

/// Output of the balance computation, ready to be embedded in a scene.
///
/// `tilt_degrees` is positive when the good side dominates and negative when
/// the low side does. Scale factors are reciprocal whenever `dominant` is set
/// and both `1.0` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceResult {
    pub tilt_degrees: f64,
    pub good_scale_factor: f64,
    pub low_scale_factor: f64,
    pub dominant: Option<Side>,
}

impl BalanceResult {
    /// No tilt, no scaling.
    pub const NEUTRAL: Self = Self {
        tilt_degrees: 0.0,
        good_scale_factor: 1.0,
        low_scale_factor: 1.0,
        dominant: None,
    };

    pub fn scale_factor(&self, side: Side) -> f64 {
        match side {
            Side::Good => self.good_scale_factor,
            Side::Low => self.low_scale_factor,
        }
    }
}

impl Default for BalanceResult {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
