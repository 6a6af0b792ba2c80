use core::convert::TryInto;

use microfft::Complex32;

macro_rules! dispatch_rfft {
    ($buffer:expr, $($size:literal => $rfft:path),+ $(,)?) => {
        match $buffer.len() {
            $($size => {
                let input: Result<&mut [f32; $size], _> = $buffer.try_into();
                match input {
                    Ok(input) => Some(&mut $rfft(input)[..]),
                    Err(_) => None,
                }
            })+
            _ => None,
        }
    };
}

/// Performs an in-place real FFT on a buffer whose length is a power of two in `8..=4096`.
/// Returns `None` for any other length.
///
/// The result holds the first `len / 2` bins. The real-valued coefficient at the Nyquist
/// frequency is packed into the imaginary part of the DC bin.
pub fn real_fft(buffer: &mut [f32]) -> Option<&mut [Complex32]> {
    dispatch_rfft!(
        buffer,
        8 => microfft::real::rfft_8,
        16 => microfft::real::rfft_16,
        32 => microfft::real::rfft_32,
        64 => microfft::real::rfft_64,
        128 => microfft::real::rfft_128,
        256 => microfft::real::rfft_256,
        512 => microfft::real::rfft_512,
        1024 => microfft::real::rfft_1024,
        2048 => microfft::real::rfft_2048,
        4096 => microfft::real::rfft_4096,
    )
}
