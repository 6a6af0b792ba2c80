use thiserror::Error;

/// Reasons an [`EngineConfig`](crate::EngineConfig) can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("unsupported window size {0}, expected a power of two in 8..=2048")]
    UnsupportedWindowSize(usize),
    #[error("sample rate must be finite and positive, got {0}")]
    InvalidSampleRate(f32),
    #[error("flux history capacity must be greater than 0")]
    EmptyFluxHistory,
    #[error("thresholding window size {window} must be in 1..={capacity}")]
    InvalidThresholdingWindow { window: usize, capacity: usize },
    #[error("threshold multiplier must be finite and positive, got {0}")]
    InvalidThresholdMultiplier(f32),
    #[error("invalid frequency range {min} Hz - {max} Hz")]
    InvalidFrequencyRange { min: f32, max: f32 },
    #[error("maximum frequency {max} Hz is above the Nyquist frequency {nyquist} Hz")]
    FrequencyAboveNyquist { max: f32, nyquist: f32 },
    #[error("cepstral search range {start}..{end} does not fit a window of {window_size} samples")]
    InvalidQuefrencyRange {
        start: usize,
        end: usize,
        window_size: usize,
    },
    #[error("log floor must be finite and positive, got {0}")]
    InvalidLogFloor(f32),
}

/// Errors surfaced by the analysis engine.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AnalysisError {
    /// The frame length does not match the configured window size.
    /// The transport violated the framing contract; detector state is untouched.
    #[error("expected a frame of {expected} samples, got {actual}")]
    InvalidFrameSize { expected: usize, actual: usize },
    /// A raw payload whose byte length is not a multiple of 4.
    #[error("payload of {len} bytes is not a sequence of 32 bit floats")]
    MisalignedPayload { len: usize },
    /// A spectrum whose bin count differs from the previous spectrum of the session.
    #[error("expected a spectrum of {expected} bins, got {actual}")]
    SpectrumSizeMismatch { expected: usize, actual: usize },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = AnalysisError> = core::result::Result<T, E>;
