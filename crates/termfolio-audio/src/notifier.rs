//! Preference-gated tone playback.

use termfolio_types::error::Result;

use crate::tone::{ToneSpec, synthesize};

/// An audio output device able to play a mono f32 buffer.
pub trait ToneSink {
    /// Queue `samples` for playback. Must not block for the tone's duration.
    fn play(&mut self, samples: &[f32], sample_rate: u32) -> Result<()>;

    /// The device's native rate, if it has one. Tones are rendered at this
    /// rate instead of the configured one.
    fn sample_rate(&self) -> Option<u32> {
        None
    }
}

/// Plays the three UI tones when sound is enabled.
///
/// Every call is fire-and-forget: a disabled notifier, a missing device, or a
/// device error all result in silence.
pub struct SoundNotifier {
    sink: Option<Box<dyn ToneSink>>,
    enabled: bool,
    sample_rate: u32,
    keystroke: Vec<f32>,
    command: Vec<f32>,
    error: Vec<f32>,
}

impl SoundNotifier {
    /// Create a notifier over `sink`, disabled until `set_enabled(true)`.
    pub fn new(sink: Option<Box<dyn ToneSink>>, sample_rate: u32) -> Self {
        let sample_rate = sink
            .as_ref()
            .and_then(|s| s.sample_rate())
            .unwrap_or(sample_rate);
        Self {
            sink,
            enabled: false,
            sample_rate,
            keystroke: synthesize(&ToneSpec::KEYSTROKE, sample_rate),
            command: synthesize(&ToneSpec::COMMAND, sample_rate),
            error: synthesize(&ToneSpec::ERROR, sample_rate),
        }
    }

    /// A notifier with no output device.
    pub fn silent() -> Self {
        Self::new(None, 44_100)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a device is attached.
    pub fn has_output(&self) -> bool {
        self.sink.is_some()
    }

    pub fn keystroke(&mut self) {
        Self::emit(&mut self.sink, self.enabled, &self.keystroke, self.sample_rate);
    }

    pub fn command_executed(&mut self) {
        Self::emit(&mut self.sink, self.enabled, &self.command, self.sample_rate);
    }

    pub fn error_tone(&mut self) {
        Self::emit(&mut self.sink, self.enabled, &self.error, self.sample_rate);
    }

    fn emit(sink: &mut Option<Box<dyn ToneSink>>, enabled: bool, pcm: &[f32], rate: u32) {
        if !enabled {
            return;
        }
        let Some(sink) = sink.as_mut() else {
            return;
        };
        if let Err(e) = sink.play(pcm, rate) {
            log::debug!("Could not play sound: {e}");
        }
    }
}

impl std::fmt::Debug for SoundNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundNotifier")
            .field("enabled", &self.enabled)
            .field("has_output", &self.sink.is_some())
            .field("sample_rate", &self.sample_rate)
            .finish()
    }
}
