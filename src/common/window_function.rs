//! [Window functions](https://en.wikipedia.org/wiki/Window_function).

use alloc::{boxed::Box, vec};
use core::f64::consts::PI;

/// Returns the coefficients of a symmetric
/// [Hann window](https://en.wikipedia.org/wiki/Window_function#Hann_and_Hamming_windows)
/// of a given length, `0.5 - 0.5 cos(2 pi n / (len - 1))`, with zeros at both end points.
pub fn hann_window(len: usize) -> Box<[f32]> {
    if len < 2 {
        return vec![1.0_f32; len].into_boxed_slice();
    }
    let scale = 2. * PI / ((len - 1) as f64);
    (0..len)
        .map(|n| (0.5 - 0.5 * libm::cos(scale * n as f64)) as f32)
        .collect()
}

/// Point-wise multiplication of a buffer and precomputed window coefficients.
pub fn apply_window(window: &[f32], buffer: &mut [f32]) {
    for (value, coefficient) in buffer.iter_mut().zip(window) {
        *value *= coefficient;
    }
}
