//! Audio subsystem: short synthesized UI tones.
//!
//! Three fixed tones (keystroke, command executed, error) are rendered to PCM
//! by `tone::synthesize` and handed to a `ToneSink` backend. The
//! `SoundNotifier` gates playback on the user's sound preference and swallows
//! every backend failure.

mod notifier;
#[cfg(feature = "sdl")]
mod sdl_sink;
pub mod tone;

pub use notifier::{SoundNotifier, ToneSink};
#[cfg(feature = "sdl")]
pub use sdl_sink::SdlToneSink;
pub use tone::{ToneSpec, Waveform, synthesize};

/// Open the platform's default tone sink, if one is compiled in and a device
/// is available.
pub fn default_sink() -> Option<Box<dyn ToneSink>> {
    #[cfg(feature = "sdl")]
    {
        match SdlToneSink::open() {
            Ok(sink) => return Some(Box::new(sink)),
            Err(e) => log::warn!("Audio unavailable: {e}"),
        }
    }
    #[cfg(not(feature = "sdl"))]
    log::info!("Built without an audio backend; sound effects are silent");
    None
}
