//! SDL2 audio-queue tone sink.

use sdl2::audio::{AudioQueue, AudioSpecDesired};

use termfolio_types::error::{Result, TermfolioError};

use crate::notifier::ToneSink;

/// Plays tones through an SDL2 mono f32 audio queue.
pub struct SdlToneSink {
    queue: AudioQueue<f32>,
    // Dropped after the queue (declaration order).
    _sdl: sdl2::Sdl,
}

impl SdlToneSink {
    /// Open the default output device.
    pub fn open() -> Result<Self> {
        let sdl = sdl2::init().map_err(|e| TermfolioError::Audio(e.to_string()))?;
        let audio = sdl
            .audio()
            .map_err(|e| TermfolioError::Audio(e.to_string()))?;
        let desired = AudioSpecDesired {
            freq: Some(44_100),
            channels: Some(1),
            samples: None,
        };
        let queue = audio
            .open_queue::<f32, _>(None, &desired)
            .map_err(|e| TermfolioError::Audio(e.to_string()))?;
        queue.resume();
        log::info!("SDL2 audio initialized: {} Hz", queue.spec().freq);
        Ok(Self { queue, _sdl: sdl })
    }
}

impl ToneSink for SdlToneSink {
    fn play(&mut self, samples: &[f32], _sample_rate: u32) -> Result<()> {
        // A new tone replaces whatever is still queued.
        self.queue.clear();
        self.queue
            .queue_audio(samples)
            .map_err(|e| TermfolioError::Audio(e.to_string()))
    }

    fn sample_rate(&self) -> Option<u32> {
        u32::try_from(self.queue.spec().freq).ok()
    }
}
