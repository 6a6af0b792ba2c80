//! [Audio onset detection](https://en.wikipedia.org/wiki/Onset_(audio)) using rectified
//! [spectral flux](https://www.audiolabs-erlangen.de/resources/MIR/FMP/C6/C6S1_NoveltySpectral.html)
//! and an adaptive threshold.
//!
//! The flux of each spectrum is compared to a multiple of the mean of the most
//! recent flux values. Flux exceeding that threshold is kept as "pruned" flux,
//! anything else counts as zero. An onset is reported whenever the pruned flux
//! rises compared to the previous frame.

use crate::config::EngineConfig;
use crate::error::{AnalysisError, Result};
use crate::spectrum::Spectrum;
use crate::state::DetectorState;

/// The values computed for one spectrum by [`OnsetDetector::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluxFrame {
    /// Sum of positive per bin power differences to the previous spectrum.
    pub flux: f32,
    /// The adaptive threshold the flux was compared to.
    pub threshold: f32,
    /// `flux - threshold` if the flux reached the threshold, otherwise 0.
    pub pruned_flux: f32,
    pub is_onset: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnsetDetector {
    thresholding_window_size: usize,
    threshold_multiplier: f32,
}

impl OnsetDetector {
    pub fn new(thresholding_window_size: usize, threshold_multiplier: f32) -> Self {
        OnsetDetector {
            thresholding_window_size,
            threshold_multiplier,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        OnsetDetector::new(
            config.thresholding_window_size,
            config.threshold_multiplier,
        )
    }

    /// Feeds the next spectrum of a session and returns true if it starts a new note.
    /// Warm-up is not handled here.
    ///
    /// A spectrum with a different number of bins than the previous one is
    /// rejected with [`AnalysisError::SpectrumSizeMismatch`] and leaves the state unchanged.
    pub fn update(&self, state: &mut DetectorState, spectrum: Spectrum) -> Result<bool> {
        Ok(self.evaluate(state, spectrum)?.is_onset)
    }

    /// Like [`update`](Self::update), but returns all intermediate values.
    pub fn evaluate(&self, state: &mut DetectorState, spectrum: Spectrum) -> Result<FluxFrame> {
        if spectrum.len() != state.previous_spectrum.len() {
            return Err(AnalysisError::SpectrumSizeMismatch {
                expected: state.previous_spectrum.len(),
                actual: spectrum.len(),
            });
        }
        let flux = spectrum.flux_from(&state.previous_spectrum);
        state.flux_history.push(flux);

        let threshold = state
            .flux_history
            .recent_mean(self.thresholding_window_size)
            * self.threshold_multiplier;
        let pruned_flux = if threshold <= flux {
            flux - threshold
        } else {
            0.0
        };
        let is_onset = pruned_flux > state.previous_pruned_flux;

        state.previous_pruned_flux = pruned_flux;
        state.previous_spectrum = spectrum;

        Ok(FluxFrame {
            flux,
            threshold,
            pruned_flux,
            is_onset,
        })
    }
}
