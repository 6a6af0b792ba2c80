use alloc::{boxed::Box, vec};
use core::ops::Deref;

use crate::common::{apply_window, hann_window, real_fft};
use crate::config::{MAX_WINDOW_SIZE, MIN_WINDOW_SIZE};
use crate::error::{AnalysisError, ConfigError, Result};

/// An autopower spectrum. Holds one non-negative power value per bin.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    power: Box<[f32]>,
}

impl Spectrum {
    /// A spectrum of `len` bins, all zero.
    pub fn silent(len: usize) -> Self {
        Spectrum {
            power: vec![0.0; len].into_boxed_slice(),
        }
    }

    /// Wraps precomputed power values, which must be non-negative.
    pub fn from_power(power: impl Into<Box<[f32]>>) -> Self {
        Spectrum {
            power: power.into(),
        }
    }

    pub fn power(&self) -> &[f32] {
        &self.power
    }

    /// The [rectified spectral flux](https://www.audiolabs-erlangen.de/resources/MIR/FMP/C6/C6S1_NoveltySpectral.html)
    /// from `previous` to this spectrum, i.e the sum of all per bin power increases.
    /// Decreases do not contribute. Only the bins both spectra have are compared;
    /// [`OnsetDetector`](crate::OnsetDetector) rejects spectra of differing lengths.
    pub fn flux_from(&self, previous: &Spectrum) -> f32 {
        self.power
            .iter()
            .zip(previous.power.iter())
            .map(|(power, prev)| (power - prev).max(0.0))
            .sum()
    }
}

impl Deref for Spectrum {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.power
    }
}

/// Computes autopower spectra of Hann windowed frames of a fixed size.
///
/// Each frame is windowed, zero padded to twice its length and transformed.
/// Bins are scaled by the window size and the first `window_size` bins of
/// `|X · conj(X)|` make up the spectrum.
#[derive(Debug, Clone)]
pub struct SpectrumAnalyzer {
    window: Box<[f32]>,
}

impl SpectrumAnalyzer {
    pub fn new(window_size: usize) -> core::result::Result<Self, ConfigError> {
        if !window_size.is_power_of_two()
            || window_size < MIN_WINDOW_SIZE
            || window_size > MAX_WINDOW_SIZE
        {
            return Err(ConfigError::UnsupportedWindowSize(window_size));
        }
        Ok(SpectrumAnalyzer {
            window: hann_window(window_size),
        })
    }

    pub fn window_size(&self) -> usize {
        self.window.len()
    }

    pub fn compute(&self, frame: &[f32]) -> Result<Spectrum> {
        let window_size = self.window_size();
        if frame.len() != window_size {
            return Err(AnalysisError::InvalidFrameSize {
                expected: window_size,
                actual: frame.len(),
            });
        }

        let mut padded = vec![0.0_f32; 2 * window_size];
        padded[..window_size].copy_from_slice(frame);
        apply_window(&self.window, &mut padded[..window_size]);

        let fft = real_fft(&mut padded)
            .ok_or(ConfigError::UnsupportedWindowSize(window_size))?;
        // The real FFT yields exactly window_size bins. Clear the Nyquist
        // coefficient packed into the imaginary part of the DC bin, since the
        // Nyquist bin lies past the kept range.
        fft[0].im = 0.;

        let scale = 1.0 / (window_size as f32);
        let power = fft
            .iter()
            .map(|z| {
                let z = *z * scale;
                z.norm_sqr()
            })
            .collect();
        Ok(Spectrum { power })
    }
}
