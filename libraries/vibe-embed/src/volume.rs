//! Volume control for the embedded player
//!
//! The embed takes a linear 0-100 volume, so no dB mapping happens here;
//! this only tracks level and mute the way the transport bar exposes them.

/// Default volume level
pub const DEFAULT_VOLUME: u8 = 80;

/// Volume controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume {
    /// Volume level (0-100)
    level: u8,

    /// Mute state (preserves volume level)
    muted: bool,
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(DEFAULT_VOLUME)
    }
}

impl Volume {
    /// Create new volume controller, clamping to 100
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
            muted: false,
        }
    }

    /// Set volume level (0-100)
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
    }

    /// Get current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Value to send to the embed
    ///
    /// Returns 0 if muted, otherwise the level
    pub fn effective(&self) -> u8 {
        if self.muted {
            0
        } else {
            self.level
        }
    }
}
