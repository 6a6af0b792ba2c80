use micromath::F32Ext;

const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Converts a frequency in Hz to a [MIDI](https://en.wikipedia.org/wiki/MIDI) note number
/// (with a fractional part). A4 at 440 Hz is note 69.
pub fn freq_to_midi_note(freq: f32) -> f32 {
    12.0 * F32Ext::log2(freq) - 36.376316562295926
}

/// The pitch class name of the nearest MIDI note, e.g. `"A"` for 440 Hz.
pub fn midi_note_name(note_number: f32) -> &'static str {
    let nearest = F32Ext::round(note_number).max(0.0) as usize;
    NOTE_NAMES[nearest % 12]
}

/// The octave of the nearest MIDI note in scientific pitch notation, i.e 4 for A4.
pub fn midi_note_octave(note_number: f32) -> i32 {
    let nearest = F32Ext::round(note_number) as i32;
    nearest.div_euclid(12) - 1
}
