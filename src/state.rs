use crate::error::ConfigError;
use crate::flux_history::FluxHistory;
use crate::spectrum::Spectrum;

/// Mutable per session detector state.
///
/// One instance belongs to exactly one audio session. It carries everything
/// that links consecutive frames, so feeding frames of two sessions through
/// the same state corrupts the onset detection of both.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorState {
    pub(crate) previous_spectrum: Spectrum,
    pub(crate) flux_history: FluxHistory,
    pub(crate) previous_pruned_flux: f32,
    pub(crate) warming_up: bool,
}

impl DetectorState {
    /// State for a new session. The previous spectrum is silent and the
    /// session starts out warming up.
    pub fn new(window_size: usize, flux_history_capacity: usize) -> Result<Self, ConfigError> {
        Ok(DetectorState {
            previous_spectrum: Spectrum::silent(window_size),
            flux_history: FluxHistory::new(flux_history_capacity)?,
            previous_pruned_flux: 0.0,
            warming_up: true,
        })
    }

    pub fn previous_spectrum(&self) -> &Spectrum {
        &self.previous_spectrum
    }

    pub fn flux_history(&self) -> &FluxHistory {
        &self.flux_history
    }

    pub fn previous_pruned_flux(&self) -> f32 {
        self.previous_pruned_flux
    }

    /// True until the first frame has been processed.
    pub fn is_warming_up(&self) -> bool {
        self.warming_up
    }
}
