//! Synthetic signals for tests.

use alloc::vec::Vec;

/// A sine of a given amplitude starting at phase 0.
pub fn sine(frequency: f32, sample_rate: f32, len: usize, amplitude: f32) -> Vec<f32> {
    let omega = 2.0 * core::f64::consts::PI * (frequency as f64) / (sample_rate as f64);
    (0..len)
        .map(|i| amplitude * (omega * i as f64).sin() as f32)
        .collect()
}

/// A tone with `harmonic_count` partials, partial `h` having amplitude `0.5 / h`.
pub fn harmonic_tone(
    frequency: f32,
    sample_rate: f32,
    len: usize,
    harmonic_count: usize,
) -> Vec<f32> {
    let mut tone = alloc::vec![0.0; len];
    for h in 1..=harmonic_count {
        let partial = sine(frequency * h as f32, sample_rate, len, 0.5 / h as f32);
        for (value, p) in tone.iter_mut().zip(partial) {
            *value += p;
        }
    }
    tone
}

/// Deterministic uniform noise in `[-amplitude, amplitude]` from a xorshift
/// generator. `seed` must not be 0.
pub fn noise(len: usize, amplitude: f32, seed: u32) -> Vec<f32> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            amplitude * ((state as f32 / u32::MAX as f32) * 2.0 - 1.0)
        })
        .collect()
}

/// A harmonic tone with added noise of a given amplitude.
pub fn noisy_harmonic_tone(
    frequency: f32,
    sample_rate: f32,
    len: usize,
    harmonic_count: usize,
    noise_amplitude: f32,
) -> Vec<f32> {
    let mut tone = harmonic_tone(frequency, sample_rate, len, harmonic_count);
    for (value, n) in tone.iter_mut().zip(noise(len, noise_amplitude, 0x1234_5678)) {
        *value += n;
    }
    tone
}
