use std::f32::consts::PI;
use std::thread;

use micro_note::{AnalysisEngine, EngineConfig};

fn tone(frequency: f32, config: &EngineConfig) -> Vec<f32> {
    (0..config.window_size)
        .map(|i| {
            let t = i as f32 / config.sample_rate;
            (1..=5)
                .map(|h| 0.5 / h as f32 * (2.0 * PI * frequency * h as f32 * t).sin())
                .sum::<f32>()
        })
        .collect()
}

/// Plays each note for a few frames followed by a few frames of silence,
/// starting with a single silent warm-up frame.
fn session_frames(notes: &[f32], config: &EngineConfig) -> Vec<Vec<f32>> {
    let silence = vec![0.0_f32; config.window_size];
    let mut frames = vec![silence.clone()];
    for note in notes {
        let tone = tone(*note, config);
        for _ in 0..3 {
            frames.push(tone.clone());
        }
        for _ in 0..12 {
            frames.push(silence.clone());
        }
    }
    frames
}

fn detect(frames: &[Vec<f32>], config: EngineConfig) -> Vec<f32> {
    let mut engine = AnalysisEngine::new(config).unwrap();
    frames
        .iter()
        .filter_map(|frame| engine.process(frame).unwrap())
        .collect()
}

#[test]
fn concurrent_sessions_do_not_interfere() {
    let config = EngineConfig::default();
    let sessions: Vec<Vec<f32>> = vec![
        vec![110.0, 220.0, 440.0],
        vec![440.0, 330.0],
        vec![196.0, 196.0, 523.25, 98.0],
        vec![],
    ];

    let handles: Vec<_> = sessions
        .iter()
        .cloned()
        .map(|notes| {
            thread::spawn(move || {
                let frames = session_frames(&notes, &config);
                // Each session owns its engine for its whole lifetime.
                (notes, detect(&frames, config))
            })
        })
        .collect();

    for handle in handles {
        let (notes, detected) = handle.join().unwrap();
        assert_eq!(detected.len(), notes.len(), "notes {:?}, detected {:?}", notes, detected);
        for (expected, frequency) in notes.iter().zip(detected.iter()) {
            let tolerance = 0.02 * expected;
            assert!(
                (frequency - expected).abs() <= tolerance,
                "expected {} Hz, detected {} Hz",
                expected,
                frequency
            );
        }
    }
}

#[test]
fn sequential_results_match_concurrent_results() {
    let config = EngineConfig::default();
    let frames = session_frames(&[261.63, 293.66, 329.63], &config);
    let sequential = detect(&frames, config);

    let concurrent: Vec<Vec<f32>> = (0..4)
        .map(|_| {
            let frames = frames.clone();
            thread::spawn(move || detect(&frames, config))
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    for detected in concurrent {
        assert_eq!(detected, sequential);
    }
}
