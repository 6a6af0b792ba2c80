use crate::error::ConfigError;

/// Threshold multiplier used by one of the two known deployments of the detector.
pub const THRESHOLD_MULTIPLIER_A: f32 = 10.65;
/// Threshold multiplier used by the other known deployment. The two deployments
/// disagree and neither value is known to be the intended one.
pub const THRESHOLD_MULTIPLIER_B: f32 = 10.8;

/// The smallest window size that can be analyzed.
pub const MIN_WINDOW_SIZE: usize = 8;
/// The largest window size that can be analyzed. The autopower spectrum
/// is computed from a zero padded window of twice this size.
pub const MAX_WINDOW_SIZE: usize = 2048;

/// Tunable parameters of an [`AnalysisEngine`](crate::AnalysisEngine).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EngineConfig {
    /// The number of samples in each frame. Must be a power of two
    /// in `MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE`.
    pub window_size: usize,
    /// The audio sample rate in Hz.
    pub sample_rate: f32,
    /// The number of past spectral flux values kept.
    pub flux_history_capacity: usize,
    /// The number of most recent flux values averaged to get the adaptive threshold.
    pub thresholding_window_size: usize,
    /// Scales the mean recent flux to get the onset threshold.
    pub threshold_multiplier: f32,
    /// Lowest reportable fundamental frequency in Hz.
    pub min_frequency: f32,
    /// Highest reportable fundamental frequency in Hz.
    pub max_frequency: f32,
    /// Magnitudes are clamped to this value before taking the logarithm.
    pub log_floor: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            window_size: 2048,
            sample_rate: 48000.0,
            flux_history_capacity: 70,
            thresholding_window_size: 11,
            threshold_multiplier: THRESHOLD_MULTIPLIER_A,
            min_frequency: 70.0,
            max_frequency: 1200.0,
            log_floor: 1e-10,
        }
    }
}

impl EngineConfig {
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_flux_history_capacity(mut self, capacity: usize) -> Self {
        self.flux_history_capacity = capacity;
        self
    }

    pub fn with_thresholding_window_size(mut self, size: usize) -> Self {
        self.thresholding_window_size = size;
        self
    }

    pub fn with_threshold_multiplier(mut self, multiplier: f32) -> Self {
        self.threshold_multiplier = multiplier;
        self
    }

    pub fn with_frequency_range(mut self, min_frequency: f32, max_frequency: f32) -> Self {
        self.min_frequency = min_frequency;
        self.max_frequency = max_frequency;
        self
    }

    pub fn with_log_floor(mut self, log_floor: f32) -> Self {
        self.log_floor = log_floor;
        self
    }

    /// The half open range of cepstrum indices searched for a pitch peak.
    /// Only meaningful for a validated config.
    pub fn quefrency_range(&self) -> (usize, usize) {
        let start = (self.sample_rate / self.max_frequency) as usize;
        let end = (self.sample_rate / self.min_frequency) as usize;
        (start, end)
    }

    /// Checks that the parameters describe an engine that can be built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let window_size = self.window_size;
        if !window_size.is_power_of_two()
            || window_size < MIN_WINDOW_SIZE
            || window_size > MAX_WINDOW_SIZE
        {
            return Err(ConfigError::UnsupportedWindowSize(window_size));
        }
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(ConfigError::InvalidSampleRate(self.sample_rate));
        }
        if self.flux_history_capacity == 0 {
            return Err(ConfigError::EmptyFluxHistory);
        }
        if self.thresholding_window_size == 0
            || self.thresholding_window_size > self.flux_history_capacity
        {
            return Err(ConfigError::InvalidThresholdingWindow {
                window: self.thresholding_window_size,
                capacity: self.flux_history_capacity,
            });
        }
        if !self.threshold_multiplier.is_finite() || self.threshold_multiplier <= 0.0 {
            return Err(ConfigError::InvalidThresholdMultiplier(
                self.threshold_multiplier,
            ));
        }

        let (min, max) = (self.min_frequency, self.max_frequency);
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || max <= min {
            return Err(ConfigError::InvalidFrequencyRange { min, max });
        }
        let nyquist = 0.5 * self.sample_rate;
        if max > nyquist {
            return Err(ConfigError::FrequencyAboveNyquist { max, nyquist });
        }

        // A peak must have a neighbour on each side inside the searched range.
        let (start, end) = self.quefrency_range();
        if end > window_size || end < start + 3 {
            return Err(ConfigError::InvalidQuefrencyRange {
                start,
                end,
                window_size,
            });
        }

        if !self.log_floor.is_finite() || self.log_floor <= 0.0 {
            return Err(ConfigError::InvalidLogFloor(self.log_floor));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.quefrency_range(), (40, 685));
    }

    #[test]
    fn test_both_known_multipliers_are_valid() {
        for multiplier in [THRESHOLD_MULTIPLIER_A, THRESHOLD_MULTIPLIER_B] {
            let config = EngineConfig::default().with_threshold_multiplier(multiplier);
            assert_eq!(config.validate(), Ok(()));
        }
    }

    #[test]
    fn test_window_size_validation() {
        for window_size in [0, 4, 1000, 4096] {
            let config = EngineConfig::default().with_window_size(window_size);
            assert_eq!(
                config.validate(),
                Err(ConfigError::UnsupportedWindowSize(window_size))
            );
        }
    }

    #[test]
    fn test_thresholding_window_must_fit_history() {
        let config = EngineConfig::default()
            .with_flux_history_capacity(5)
            .with_thresholding_window_size(6);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidThresholdingWindow {
                window: 6,
                capacity: 5
            })
        );
        let config = EngineConfig::default().with_flux_history_capacity(0);
        assert_eq!(config.validate(), Err(ConfigError::EmptyFluxHistory));
    }

    #[test]
    fn test_frequency_range_validation() {
        let config = EngineConfig::default().with_frequency_range(500.0, 100.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFrequencyRange { .. })
        ));

        let config = EngineConfig::default().with_frequency_range(70.0, 30000.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FrequencyAboveNyquist { .. })
        ));

        // 48000 / 20 = 2400 cepstrum bins, more than the window holds.
        let config = EngineConfig::default().with_frequency_range(20.0, 1200.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidQuefrencyRange {
                start: 40,
                end: 2400,
                window_size: 2048
            })
        );
    }

    #[test]
    fn test_rejects_non_finite_parameters() {
        let config = EngineConfig::default().with_sample_rate(f32::NAN);
        assert!(config.validate().is_err());
        let config = EngineConfig::default().with_threshold_multiplier(f32::INFINITY);
        assert!(config.validate().is_err());
        let config = EngineConfig::default().with_log_floor(0.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidLogFloor(0.0)));
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn test_partial_config_from_json() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "threshold_multiplier": 10.8, "min_frequency": 80.0 }"#)
                .unwrap();
        assert_eq!(config.threshold_multiplier, THRESHOLD_MULTIPLIER_B);
        assert_eq!(config.min_frequency, 80.0);
        assert_eq!(config.window_size, 2048);
    }
}
