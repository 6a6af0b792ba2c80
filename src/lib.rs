//! Note onset detection and [pitch](https://en.wikipedia.org/wiki/Pitch_%28music%29) estimation
//! for streaming monophonic audio.
//!
//! Frames of a fixed size are fed to an [`AnalysisEngine`] one at a time. Each frame
//! is turned into an autopower spectrum, and the rectified
//! [spectral flux](https://www.audiolabs-erlangen.de/resources/MIR/FMP/C6/C6S1_NoveltySpectral.html)
//! between consecutive spectra is compared to an adaptive threshold to find note
//! onsets. When a frame starts a new note, its fundamental frequency is estimated
//! from the peak of the [real cepstrum](https://en.wikipedia.org/wiki/Cepstrum).
//! The engine reports a frequency for frames that start a note and nothing otherwise.
//!
//! Features
//! * `no_std` compatible, using `alloc`.
//! * Real-only FFTs.
//! * All thresholds and ranges are configurable through [`EngineConfig`].
//!
//! An engine holds the state of a single audio session. Sessions must never
//! share an engine.
//!
//! # Examples
//!
//! ```
//! use micro_note::{AnalysisEngine, EngineConfig};
//!
//! let config = EngineConfig::default();
//! let mut engine = AnalysisEngine::new(config).unwrap();
//!
//! // A tone at 440 Hz with a few harmonics.
//! let tone: Vec<f32> = (0..config.window_size)
//!     .map(|i| {
//!         let t = i as f32 / config.sample_rate;
//!         (1..=5)
//!             .map(|h| 0.5 / h as f32 * (2.0 * core::f32::consts::PI * 440.0 * h as f32 * t).sin())
//!             .sum::<f32>()
//!     })
//!     .collect();
//!
//! // The first frame of a session never reports a note.
//! assert_eq!(engine.process(&vec![0.0_f32; config.window_size]).unwrap(), None);
//!
//! // The tone is a new note.
//! let frequency = engine.process(&tone).unwrap().unwrap();
//! assert!((frequency - 440.0).abs() < 5.0);
//!
//! // Holding the note does not report it again.
//! assert_eq!(engine.process(&tone).unwrap(), None);
//! ```

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod cepstrum;
pub mod common;
mod config;
mod engine;
mod error;
mod flux_history;
pub mod frame;
mod onset;
mod spectrum;
mod state;
#[cfg(test)]
mod test_signals;

pub use cepstrum::FundamentalFrequencyEstimator;
pub use config::{
    EngineConfig, MAX_WINDOW_SIZE, MIN_WINDOW_SIZE, THRESHOLD_MULTIPLIER_A,
    THRESHOLD_MULTIPLIER_B,
};
pub use engine::AnalysisEngine;
pub use error::{AnalysisError, ConfigError, Result};
pub use flux_history::FluxHistory;
pub use onset::{FluxFrame, OnsetDetector};
pub use spectrum::{Spectrum, SpectrumAnalyzer};
pub use state::DetectorState;
