//! Prints the notes detected in a WAV file.
//!
//! ```text
//! RUST_LOG=micro_note=debug cargo run --example wav_notes -- path/to/file.wav
//! ```
//!
//! Only the first channel is analyzed. The file is processed in consecutive,
//! non-overlapping frames at its own sample rate.

use std::env;
use std::process;

use micro_note::common::{freq_to_midi_note, midi_note_name, midi_note_octave};
use micro_note::{AnalysisEngine, EngineConfig};

fn read_first_channel(path: &str) -> Result<(u32, Vec<f32>), hound::Error> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels as usize;
    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let scale = 1. / ((1_i64 << (spec.bits_per_sample - 1)) as f32);
            reader
                .samples::<i32>()
                .map(|sample| sample.map(|s| s as f32 * scale))
                .collect::<Result<_, _>>()?
        }
    };
    let first_channel = samples.into_iter().step_by(channels.max(1)).collect();
    Ok((spec.sample_rate, first_channel))
}

fn main() {
    env_logger::init();

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: wav_notes <file.wav>");
            process::exit(1);
        }
    };

    let (sample_rate, samples) = match read_first_channel(&path) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("Failed to read {}: {}", path, error);
            process::exit(1);
        }
    };

    let config = EngineConfig::default().with_sample_rate(sample_rate as f32);
    let mut engine = match AnalysisEngine::new(config) {
        Ok(engine) => engine,
        Err(error) => {
            eprintln!("Unsupported input: {}", error);
            process::exit(1);
        }
    };

    println!(
        "Analyzing {} samples at {} Hz in frames of {}",
        samples.len(),
        sample_rate,
        config.window_size
    );
    for (frame_index, frame) in samples.chunks_exact(config.window_size).enumerate() {
        // Chunks are exactly one window long, so processing cannot fail.
        if let Ok(Some(frequency)) = engine.process(frame) {
            let time_s = (frame_index * config.window_size) as f32 / config.sample_rate;
            let note_number = freq_to_midi_note(frequency);
            println!(
                "t = {:7.3} s | {:8.2} Hz | {}{}",
                time_s,
                frequency,
                midi_note_name(note_number),
                midi_note_octave(note_number)
            );
        }
    }
}
