//! Sprite-sheet animation clips
//!
//! A clip is a contiguous frame range of the character sheet played at a fixed
//! rate. Looping clips never finish; one-shot clips report completion once.

use serde::{Deserialize, Serialize};

/// One named frame range of the sprite sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipSpec {
    /// Clip key, e.g. `"run"`
    pub key: String,
    /// First frame index (inclusive)
    pub first_frame: u32,
    /// Last frame index (inclusive)
    pub last_frame: u32,
    /// Frames per second
    pub frame_rate: f32,
    /// Whether playback wraps around
    pub looping: bool,
}

impl ClipSpec {
    /// Create a clip spec
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        first_frame: u32,
        last_frame: u32,
        frame_rate: f32,
        looping: bool,
    ) -> Self {
        Self {
            key: key.into(),
            first_frame,
            last_frame,
            frame_rate,
            looping,
        }
    }

    /// Number of frames in the range
    #[must_use]
    pub fn frame_count(&self) -> u32 {
        self.last_frame
            .saturating_sub(self.first_frame)
            .saturating_add(1)
    }

    /// Playback length in seconds
    #[must_use]
    pub fn duration(&self) -> f32 {
        if self.frame_rate <= 0.0 {
            return 0.0;
        }
        self.frame_count() as f32 / self.frame_rate
    }

    /// Sheet frame shown at `time` seconds into the clip
    #[must_use]
    pub fn frame_at(&self, time: f32) -> u32 {
        let offset = (time.max(0.0) * self.frame_rate) as u32;
        self.first_frame
            .saturating_add(offset.min(self.frame_count() - 1))
    }
}

/// All clips known to the character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipCatalog {
    clips: Vec<ClipSpec>,
}

impl ClipCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self { clips: Vec::new() }
    }

    /// Layout of the bladekeeper sheet (64x64 cells)
    #[must_use]
    pub fn bladekeeper() -> Self {
        let mut catalog = Self::new();
        catalog.insert(ClipSpec::new("idle", 0, 7, 10.0, true));
        catalog.insert(ClipSpec::new("run", 8, 15, 15.0, true));
        catalog.insert(ClipSpec::new("jump", 16, 19, 10.0, false));
        catalog.insert(ClipSpec::new("fall", 20, 23, 10.0, true));

        catalog.insert(ClipSpec::new("attack_1_anticipation", 24, 26, 15.0, false));
        catalog.insert(ClipSpec::new("attack_1_contact", 27, 28, 15.0, false));
        catalog.insert(ClipSpec::new("attack_1_recovery", 29, 31, 12.0, false));

        catalog.insert(ClipSpec::new("attack_2_anticipation", 32, 34, 15.0, false));
        catalog.insert(ClipSpec::new("attack_2_contact", 35, 36, 15.0, false));
        catalog.insert(ClipSpec::new("attack_2_recovery", 37, 39, 12.0, false));

        catalog.insert(ClipSpec::new("attack_3_anticipation", 40, 42, 12.0, false));
        catalog.insert(ClipSpec::new("attack_3_contact", 43, 45, 15.0, false));
        catalog.insert(ClipSpec::new("attack_3_recovery", 46, 49, 10.0, false));
        catalog
    }

    /// Add a clip, replacing any clip with the same key
    pub fn insert(&mut self, clip: ClipSpec) {
        match self.clips.iter_mut().find(|c| c.key == clip.key) {
            Some(existing) => *existing = clip,
            None => self.clips.push(clip),
        }
    }

    /// Look up a clip by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ClipSpec> {
        self.clips.iter().find(|c| c.key == key)
    }

    /// Number of clips
    #[must_use]
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    /// Check if the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Iterate over clips
    pub fn iter(&self) -> impl Iterator<Item = &ClipSpec> {
        self.clips.iter()
    }
}

impl Default for ClipCatalog {
    fn default() -> Self {
        Self::bladekeeper()
    }
}
