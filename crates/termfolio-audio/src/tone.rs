//! Oscillator tones with an exponential decay envelope.

/// Oscillator shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
}

impl Waveform {
    /// Sample the waveform at `phase` in `[0, 1)`. Output is in `[-1, 1]`.
    pub fn sample(self, phase: f32) -> f32 {
        match self {
            Self::Sine => (phase * core::f32::consts::TAU).sin(),
            Self::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            },
            Self::Sawtooth => 2.0 * phase - 1.0,
        }
    }
}

/// A fixed-shape UI tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    pub waveform: Waveform,
    pub frequency_hz: f32,
    pub duration_ms: u32,
    /// Starting gain; decays to `FLOOR_GAIN` over the duration.
    pub gain: f32,
}

impl ToneSpec {
    /// Short square click for each typed character.
    pub const KEYSTROKE: Self = Self {
        waveform: Waveform::Square,
        frequency_hz: 600.0,
        duration_ms: 20,
        gain: 0.01,
    };

    /// Soft sine blip when a command runs.
    pub const COMMAND: Self = Self {
        waveform: Waveform::Sine,
        frequency_hz: 800.0,
        duration_ms: 50,
        gain: 0.02,
    };

    /// Low sawtooth buzz for unknown commands.
    pub const ERROR: Self = Self {
        waveform: Waveform::Sawtooth,
        frequency_hz: 200.0,
        duration_ms: 150,
        gain: 0.02,
    };
}

/// Gain the envelope decays to by the final sample.
pub const FLOOR_GAIN: f32 = 0.0001;

/// Number of mono samples a tone occupies at `sample_rate`.
pub fn sample_count(spec: &ToneSpec, sample_rate: u32) -> usize {
    (u64::from(sample_rate) * u64::from(spec.duration_ms) / 1000) as usize
}

/// Render `spec` to mono f32 PCM at `sample_rate`.
pub fn synthesize(spec: &ToneSpec, sample_rate: u32) -> Vec<f32> {
    let n = sample_count(spec, sample_rate);
    if n == 0 {
        return Vec::new();
    }
    let ratio = if spec.gain > FLOOR_GAIN {
        FLOOR_GAIN / spec.gain
    } else {
        1.0
    };
    let last = (n - 1).max(1) as f32;
    let rate = sample_rate as f32;
    (0..n)
        .map(|i| {
            let progress = i as f32 / last;
            let envelope = spec.gain * ratio.powf(progress);
            let phase = (i as f32 * spec.frequency_hz / rate).fract();
            spec.waveform.sample(phase) * envelope
        })
        .collect()
}
