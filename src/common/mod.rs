//! Common algorithms and utilities.

mod fft;
mod midi;
mod window_function;

pub use fft::real_fft;
pub use midi::{freq_to_midi_note, midi_note_name, midi_note_octave};
pub use window_function::{apply_window, hann_window};
