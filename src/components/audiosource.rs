//! Audio output components.
//!
//! The shell never plays sound itself; it only adjusts the volume of
//! [`AudioSource`] components, which the host mirrors to its mixer.

use bevy_ecs::prelude::{Component, Entity};

/// An audio output with its own volume.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct AudioSource {
    /// Identifier of the clip this source plays.
    pub clip: String,
    /// Looping sources are assumed to be music.
    pub looping: bool,
    volume: f32,
}

impl AudioSource {
    pub fn new(clip: impl Into<String>, looping: bool) -> Self {
        Self {
            clip: clip.into(),
            looping,
            volume: 1.0,
        }
    }

    pub fn with_volume(mut self, volume: f32) -> Self {
        self.set_volume(volume);
        self
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Set the volume, clamped to [0, 1]. NaN mutes the source.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = if volume.is_nan() {
            0.0
        } else {
            volume.clamp(0.0, 1.0)
        };
    }
}

/// Marks the entity holding the background music source.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct MusicTag;

/// A gameplay object that plays sound effects through `source`.
#[derive(Component, Clone, Copy, Debug)]
pub struct SoundEffectEmitter {
    pub source: Option<Entity>,
    /// Disabled emitters are skipped during discovery.
    pub enabled: bool,
}

impl SoundEffectEmitter {
    pub fn new(source: Entity) -> Self {
        Self {
            source: Some(source),
            enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_source_is_full_volume() {
        let s = AudioSource::new("theme", true);
        assert_eq!(s.volume(), 1.0);
        assert!(s.looping);
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut s = AudioSource::new("hit", false).with_volume(2.0);
        assert_eq!(s.volume(), 1.0);
        s.set_volume(-0.5);
        assert_eq!(s.volume(), 0.0);
        s.set_volume(0.4);
        assert_eq!(s.volume(), 0.4);
    }

    #[test]
    fn test_nan_volume_mutes() {
        let mut s = AudioSource::new("hit", false);
        s.set_volume(f32::NAN);
        assert_eq!(s.volume(), 0.0);
    }
}
