use log::{debug, trace, warn};

use crate::cepstrum::FundamentalFrequencyEstimator;
use crate::common::freq_to_midi_note;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::frame::decode_le_f32;
use crate::onset::OnsetDetector;
use crate::spectrum::SpectrumAnalyzer;
use crate::state::DetectorState;

/// Detects note onsets in a stream of fixed size frames and estimates the
/// fundamental frequency of each new note.
///
/// An engine holds the state of exactly one audio session and must not be
/// shared between sessions. Create one engine per session and drop it when
/// the session ends.
pub struct AnalysisEngine {
    config: EngineConfig,
    spectrum_analyzer: SpectrumAnalyzer,
    onset_detector: OnsetDetector,
    estimator: FundamentalFrequencyEstimator,
    state: DetectorState,
    frames_processed: u64,
}

impl AnalysisEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let engine = AnalysisEngine {
            spectrum_analyzer: SpectrumAnalyzer::new(config.window_size)?,
            onset_detector: OnsetDetector::from_config(&config),
            estimator: FundamentalFrequencyEstimator::new(&config)?,
            state: DetectorState::new(config.window_size, config.flux_history_capacity)?,
            frames_processed: 0,
            config,
        };
        debug!(
            "Created analysis engine: window size {}, sample rate {} Hz, threshold multiplier {}, range {}-{} Hz",
            config.window_size,
            config.sample_rate,
            config.threshold_multiplier,
            config.min_frequency,
            config.max_frequency
        );
        Ok(engine)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The detector state, e.g for comparing snapshots.
    pub fn state(&self) -> &DetectorState {
        &self.state
    }

    /// True until the first frame has been processed. The first frame
    /// never reports a note since there is no previous spectrum to compare to.
    pub fn is_warming_up(&self) -> bool {
        self.state.warming_up
    }

    /// The number of frames processed successfully.
    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    /// Processes the next frame of the session.
    ///
    /// Returns the fundamental frequency in Hz if the frame starts a new note,
    /// or `None` if it does not, if it is the first frame of the session or if
    /// the frequency is outside the configured range.
    ///
    /// A frame whose length differs from the window size is rejected with
    /// [`AnalysisError::InvalidFrameSize`](crate::AnalysisError::InvalidFrameSize) and leaves the engine unchanged.
    pub fn process(&mut self, frame: &[f32]) -> Result<Option<f32>> {
        let spectrum = match self.spectrum_analyzer.compute(frame) {
            Ok(spectrum) => spectrum,
            Err(error) => {
                warn!("Rejected frame: {}", error);
                return Err(error);
            }
        };

        let flux_frame = self.onset_detector.evaluate(&mut self.state, spectrum)?;
        self.frames_processed += 1;
        trace!(
            "Frame {}: flux {}, threshold {}, pruned flux {}, onset {}",
            self.frames_processed,
            flux_frame.flux,
            flux_frame.threshold,
            flux_frame.pruned_flux,
            flux_frame.is_onset
        );

        if self.state.warming_up {
            self.state.warming_up = false;
            return Ok(None);
        }
        if !flux_frame.is_onset {
            return Ok(None);
        }

        let frequency = self.estimator.estimate(frame)?;
        match frequency {
            Some(frequency) => debug!(
                "Note detected at frame {}: {} Hz (MIDI note {:.2})",
                self.frames_processed,
                frequency,
                freq_to_midi_note(frequency)
            ),
            None => trace!(
                "Onset at frame {} without a fundamental frequency in range",
                self.frames_processed
            ),
        }
        Ok(frequency)
    }

    /// Decodes a payload of little endian 32 bit float samples and processes it
    /// as one frame. Malformed payloads leave the engine unchanged.
    pub fn process_le_bytes(&mut self, bytes: &[u8]) -> Result<Option<f32>> {
        let frame = decode_le_f32(bytes).map_err(|error| {
            warn!("Rejected payload: {}", error);
            error
        })?;
        self.process(&frame)
    }
}

impl core::fmt::Debug for AnalysisEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AnalysisEngine")
            .field("config", &self.config)
            .field("warming_up", &self.state.warming_up)
            .field("frames_processed", &self.frames_processed)
            .finish()
    }
}
