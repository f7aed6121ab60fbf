//! The decorative ASCII cat in the side panel.
//!
//! Runs on its own clock and never touches session state. Sleeping frames
//! cycle slowly with a floating "z" overlay; hovering the pointer over the
//! panel switches to the faster patting frames.

use std::time::{Duration, Instant};

const SLEEP_FRAMES: [&str; 4] = [
    r"    |\___/|
   /  - -  \    z
  ( ==  ᴗ  == ) z
   )         ( z
  (  ~~~~~~  )
 (____________)",
    r"    |\___/|
   /  - -  \
  ( ==  ᴗ  == ) z
   )         ( z
  (  ~~~~~~  )z
 (____________)",
    r"    |\___/|
   /  - -  \   z
  ( ==  ᴗ  == )z
   )         (z
  (  ~~~~~~  )
 (____________)",
    r"    |\___/|
   /  - -  \
  ( ==  ᴗ  == )
   )         ( z
  (  ~~~~~~  )z
 (____________)",
];

const PAT_FRAMES: [&str; 4] = [
    r"    |\___/|   ♡
   /  ^ ^  \  ♡
  ( ==  ω  == )
   )  ~~~~  (  *pat*
  (    ♡    )  *pat*
 ( (  )   (  ) )
(__(__)___(__)__)",
    r"    |\___/|
   /  > <  \  ♡♡
  ( ==  v  == )
   )  ~~~~  (
  (    ♡    ) *purr*
 ( (  )   (  ) )
(__(__)___(__)__)",
    r"    |\___/|  ♡
   /  ^ ^  \ ♡
  ( == UwU == )
   )  ~~~~  (  nya~
  (    ♡    )
 ( (  )   (  ) )
(__(__)___(__)__)",
    r"    |\___/|
   /  ◠ ◠  \  ♡
  ( ==  ▽  == )
   )  ~~~~  ( *happy*
  (    ♡    )
 ( (  )   (  ) )
(__(__)___(__)__)",
];

pub const SLEEP_HINT: &str = "💤 Sleeping... hover to give pats 💤";
pub const PAT_HINT: &str = "✨ Purring happily~ ✨";

/// Overlay drawn above the sleeping cat.
pub const Z_OVERLAY: &str = "z   z   z";

#[derive(Debug, Clone)]
pub struct CatAnimation {
    sleep_interval: Duration,
    pat_interval: Duration,
    z_interval: Duration,
    patting: bool,
    frame: usize,
    show_z: bool,
    last_frame: Instant,
    last_z: Instant,
}

impl CatAnimation {
    pub fn new(
        sleep_interval: Duration,
        pat_interval: Duration,
        z_interval: Duration,
        now: Instant,
    ) -> Self {
        Self {
            sleep_interval,
            pat_interval,
            z_interval,
            patting: false,
            frame: 0,
            show_z: true,
            last_frame: now,
            last_z: now,
        }
    }

    fn frames(&self) -> &'static [&'static str] {
        if self.patting {
            &PAT_FRAMES
        } else {
            &SLEEP_FRAMES
        }
    }

    fn interval(&self) -> Duration {
        if self.patting {
            self.pat_interval
        } else {
            self.sleep_interval
        }
    }

    /// Start or stop patting. Changing mode restarts from the first frame.
    pub fn set_hovering(&mut self, hovering: bool, now: Instant) {
        if hovering == self.patting {
            return;
        }
        self.patting = hovering;
        self.frame = 0;
        self.last_frame = now;
        self.last_z = now;
        if hovering {
            self.show_z = false;
        }
    }

    /// Advance the frame and overlay timers. Returns `true` if anything
    /// visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        let interval = self.interval();
        while !interval.is_zero() && now.duration_since(self.last_frame) >= interval {
            self.frame = (self.frame + 1) % self.frames().len();
            self.last_frame += interval;
            changed = true;
        }
        if !self.patting {
            while !self.z_interval.is_zero() && now.duration_since(self.last_z) >= self.z_interval {
                self.show_z = !self.show_z;
                self.last_z += self.z_interval;
                changed = true;
            }
        }
        changed
    }

    pub fn is_patting(&self) -> bool {
        self.patting
    }

    pub fn frame_index(&self) -> usize {
        self.frame
    }

    pub fn frame(&self) -> &'static str {
        self.frames()[self.frame]
    }

    /// Whether the "z" overlay is drawn. Never while patting.
    pub fn show_z(&self) -> bool {
        !self.patting && self.show_z
    }

    pub fn hint(&self) -> &'static str {
        if self.patting { PAT_HINT } else { SLEEP_HINT }
    }

    /// Lines of the tallest frame, for sizing the panel.
    pub fn max_height() -> usize {
        SLEEP_FRAMES
            .iter()
            .chain(PAT_FRAMES.iter())
            .map(|f| f.lines().count())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLEEP: Duration = Duration::from_millis(800);
    const PAT: Duration = Duration::from_millis(250);
    const Z: Duration = Duration::from_millis(3000);

    fn cat(now: Instant) -> CatAnimation {
        CatAnimation::new(SLEEP, PAT, Z, now)
    }

    #[test]
    fn starts_asleep() {
        let c = cat(Instant::now());
        assert!(!c.is_patting());
        assert_eq!(c.frame(), SLEEP_FRAMES[0]);
        assert_eq!(c.hint(), SLEEP_HINT);
        assert!(c.show_z());
    }

    #[test]
    fn sleeping_frames_cycle() {
        let t0 = Instant::now();
        let mut c = cat(t0);
        assert!(!c.tick(t0 + Duration::from_millis(799)));
        assert!(c.tick(t0 + SLEEP));
        assert_eq!(c.frame_index(), 1);
        c.tick(t0 + SLEEP * 4);
        assert_eq!(c.frame_index(), 0);
    }

    #[test]
    fn hover_switches_to_patting() {
        let t0 = Instant::now();
        let mut c = cat(t0);
        c.tick(t0 + SLEEP * 2);
        c.set_hovering(true, t0 + SLEEP * 2);
        assert!(c.is_patting());
        assert_eq!(c.frame_index(), 0);
        assert_eq!(c.hint(), PAT_HINT);
        assert!(!c.show_z());

        c.tick(t0 + SLEEP * 2 + PAT * 3);
        assert_eq!(c.frame_index(), 3);
        assert_eq!(c.frame(), PAT_FRAMES[3]);
    }

    #[test]
    fn leaving_resets_frame() {
        let t0 = Instant::now();
        let mut c = cat(t0);
        c.set_hovering(true, t0);
        c.tick(t0 + PAT * 2);
        c.set_hovering(false, t0 + PAT * 2);
        assert_eq!(c.frame_index(), 0);
        assert_eq!(c.frame(), SLEEP_FRAMES[0]);
        // The overlay comes back on the next toggle.
        assert!(!c.show_z());
        c.tick(t0 + PAT * 2 + Z);
        assert!(c.show_z());
    }

    #[test]
    fn z_overlay_toggles_while_sleeping() {
        let t0 = Instant::now();
        let mut c = cat(t0);
        c.tick(t0 + Z);
        assert!(!c.show_z());
        c.tick(t0 + Z * 2);
        assert!(c.show_z());
    }

    #[test]
    fn repeated_hover_is_noop() {
        let t0 = Instant::now();
        let mut c = cat(t0);
        c.set_hovering(true, t0);
        c.tick(t0 + PAT);
        c.set_hovering(true, t0 + PAT);
        assert_eq!(c.frame_index(), 1);
    }

    #[test]
    fn tallest_frame() {
        assert_eq!(CatAnimation::max_height(), 7);
    }
}
