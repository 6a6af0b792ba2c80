//! Fundamental frequency estimation using the
//! [real cepstrum](https://en.wikipedia.org/wiki/Cepstrum).
//!
//! The harmonics of a pitched sound form a regularly spaced comb in the
//! log magnitude spectrum. The inverse transform of the log spectrum
//! turns that comb into a peak at the quefrency (lag) of the fundamental
//! period, which makes the cepstrum more robust than the raw spectrum for
//! harmonic rich signals.

use alloc::{boxed::Box, vec};

use crate::common::real_fft;
use crate::config::EngineConfig;
use crate::error::{AnalysisError, ConfigError, Result};

/// Estimates the fundamental frequency of a frame from the location of the
/// largest real cepstrum value inside a configured frequency range.
#[derive(Debug, Clone)]
pub struct FundamentalFrequencyEstimator {
    window_size: usize,
    sample_rate: f32,
    min_frequency: f32,
    max_frequency: f32,
    /// Magnitudes below this value are clamped before taking the logarithm.
    log_floor: f32,
    /// First searched cepstrum index, `floor(sample_rate / max_frequency)`.
    start: usize,
    /// One past the last searched cepstrum index, `floor(sample_rate / min_frequency)`.
    end: usize,
}

impl FundamentalFrequencyEstimator {
    pub fn new(config: &EngineConfig) -> core::result::Result<Self, ConfigError> {
        config.validate()?;
        let (start, end) = config.quefrency_range();
        Ok(FundamentalFrequencyEstimator {
            window_size: config.window_size,
            sample_rate: config.sample_rate,
            min_frequency: config.min_frequency,
            max_frequency: config.max_frequency,
            log_floor: config.log_floor,
            start,
            end,
        })
    }

    /// The half open range of cepstrum indices searched for a peak.
    pub fn quefrency_range(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Computes the real cepstrum `real(ifft(ln(|fft(frame)|)))` of a frame.
    /// The result has the same length as the frame and is always finite
    /// for finite input.
    pub fn cepstrum(&self, frame: &[f32]) -> Result<Box<[f32]>> {
        let n = self.window_size;
        if frame.len() != n {
            return Err(AnalysisError::InvalidFrameSize {
                expected: n,
                actual: frame.len(),
            });
        }
        let half = n / 2;
        let floor_sq = self.log_floor * self.log_floor;
        // ln(max(|z|, floor)) computed from the squared magnitude.
        let log_magnitude = |norm_sqr: f32| 0.5 * libm::logf(norm_sqr.max(floor_sq));

        // Log magnitude spectrum. The spectrum of a real signal is conjugate
        // symmetric, so only bins 0..=n/2 are computed and mirrored.
        let mut buffer = frame.to_vec();
        let mut log_spectrum = vec![0.0_f32; n];
        {
            let fft = real_fft(&mut buffer).ok_or(ConfigError::UnsupportedWindowSize(n))?;
            log_spectrum[0] = log_magnitude(fft[0].re * fft[0].re);
            log_spectrum[half] = log_magnitude(fft[0].im * fft[0].im);
            for (k, z) in fft.iter().enumerate().skip(1) {
                let value = log_magnitude(z.norm_sqr());
                log_spectrum[k] = value;
                log_spectrum[n - k] = value;
            }
        }

        // The log spectrum is real and even, so its inverse transform equals
        // its forward transform scaled by 1 / n and is real and even too.
        let ifft = real_fft(&mut log_spectrum).ok_or(ConfigError::UnsupportedWindowSize(n))?;
        let scale = 1.0 / (n as f32);
        let mut cepstrum = vec![0.0_f32; n].into_boxed_slice();
        cepstrum[0] = scale * ifft[0].re;
        cepstrum[half] = scale * ifft[0].im;
        for (q, z) in ifft.iter().enumerate().skip(1) {
            cepstrum[q] = scale * z.re;
            cepstrum[n - q] = scale * z.re;
        }
        Ok(cepstrum)
    }

    /// Estimates the fundamental frequency of a frame in Hz.
    ///
    /// Returns `Ok(None)` if the cepstral peak is outside the configured
    /// frequency range, or sits on either end of the searched quefrency
    /// range, where it is an artifact of cutting the search short rather than
    /// a period of the signal.
    ///
    /// Since the end points are never reported, the estimates lie in
    /// `sample_rate / (end - 2)..=sample_rate / (start + 1)`, where `start..end`
    /// is the [`quefrency_range`](Self::quefrency_range). With the default
    /// configuration that is about 70.3 Hz to 1170.7 Hz, so a tone at exactly
    /// `max_frequency` gives no estimate.
    pub fn estimate(&self, frame: &[f32]) -> Result<Option<f32>> {
        let cepstrum = self.cepstrum(frame)?;
        let searched = &cepstrum[self.start..self.end];

        let mut peak: Option<(usize, f32)> = None;
        for (index, value) in searched.iter().enumerate() {
            if !value.is_finite() {
                continue;
            }
            match peak {
                Some((_, max)) if *value <= max => {}
                _ => peak = Some((index, *value)),
            }
        }

        let peak_index = match peak {
            Some((index, _)) if index > 0 && index + 1 < searched.len() => index,
            _ => return Ok(None),
        };

        let frequency = self.sample_rate / ((self.start + peak_index) as f32);
        if frequency < self.min_frequency || frequency > self.max_frequency {
            return Ok(None);
        }
        Ok(Some(frequency))
    }
}
