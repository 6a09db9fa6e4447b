//! Animation playback control
//!
//! Plays one clip at a time and reports when a one-shot clip finishes. A
//! finished clip holds its last frame until another clip is requested.

use super::clip::ClipSpec;

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Animation is playing
    Playing,
    /// Animation is paused
    Paused,
    /// Animation has stopped
    #[default]
    Stopped,
}

/// Sprite animation player
#[derive(Debug)]
pub struct AnimationPlayer {
    /// Current clip
    clip: Option<ClipSpec>,
    /// Current playback time in seconds
    current_time: f32,
    /// Playback speed multiplier
    speed: f32,
    /// Current playback state
    state: PlaybackState,
}

impl AnimationPlayer {
    /// Create a new animation player
    #[must_use]
    pub fn new() -> Self {
        Self {
            clip: None,
            current_time: 0.0,
            speed: 1.0,
            state: PlaybackState::Stopped,
        }
    }

    /// Start `clip` from its first frame.
    ///
    /// If `clip` is already the current clip and `restart_if_playing` is
    /// false, nothing changes. Returns whether playback (re)started.
    pub fn play(&mut self, clip: &ClipSpec, restart_if_playing: bool) -> bool {
        if !restart_if_playing && self.current_key() == Some(clip.key.as_str()) {
            return false;
        }
        self.clip = Some(clip.clone());
        self.current_time = 0.0;
        self.state = PlaybackState::Playing;
        true
    }

    /// Pause playback
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Resume paused playback
    pub fn resume(&mut self) {
        if self.state == PlaybackState::Paused {
            self.state = PlaybackState::Playing;
        }
    }

    /// Advance playback (call each frame).
    ///
    /// Returns the key of a one-shot clip on the update where it finishes.
    pub fn update(&mut self, delta_time: f32) -> Option<String> {
        if self.state != PlaybackState::Playing {
            return None;
        }
        let clip = self.clip.as_ref()?;

        let duration = clip.duration();
        if duration <= 0.0 && clip.looping {
            // Nothing to advance through; a looping clip still never finishes
            self.current_time = 0.0;
            return None;
        }

        self.current_time += delta_time * self.speed;

        if self.current_time < duration {
            return None;
        }

        if clip.looping {
            self.current_time %= duration;
            None
        } else {
            self.current_time = duration;
            self.state = PlaybackState::Stopped;
            Some(clip.key.clone())
        }
    }

    /// Key of the current clip, if any
    #[must_use]
    pub fn current_key(&self) -> Option<&str> {
        self.clip.as_ref().map(|c| c.key.as_str())
    }

    /// Sheet frame currently shown
    #[must_use]
    pub fn current_frame(&self) -> Option<u32> {
        self.clip.as_ref().map(|c| c.frame_at(self.current_time))
    }

    /// Get current playback time
    #[must_use]
    pub const fn current_time(&self) -> f32 {
        self.current_time
    }

    /// Get playback state
    #[must_use]
    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    /// Check if currently playing
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing)
    }

    /// Set playback speed multiplier (clamped to be non-negative)
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(0.0);
    }

    /// Get the normalized playback time (0.0 to 1.0)
    #[must_use]
    pub fn normalized_time(&self) -> f32 {
        if let Some(clip) = &self.clip
            && clip.duration() > 0.0
        {
            return self.current_time / clip.duration();
        }
        0.0
    }
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}
