//! Sound cue definitions
//!
//! The fire-and-forget cues the simulation emits for the audio collaborator.

/// Sound cue identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Player takes contact damage
    Hit,
    /// A hostile is struck by melee or pointer attack
    EnemyHit,
    /// A tile is chipped by mining
    Mine,
    /// Begin the looping cave ambience
    StartAmbient,
    /// Stop the looping cave ambience
    StopAmbient,
}

impl SoundCue {
    /// Get the file path for this cue
    pub fn file_path(&self) -> &'static str {
        match self {
            SoundCue::Hit => "assets/sounds/hit.ogg",
            SoundCue::EnemyHit => "assets/sounds/enemy_hit.ogg",
            SoundCue::Mine => "assets/sounds/mine.ogg",
            SoundCue::StartAmbient | SoundCue::StopAmbient => "assets/sounds/cave_ambient.ogg",
        }
    }

    /// Get the default volume for this cue (0.0 - 1.0)
    pub fn default_volume(&self) -> f64 {
        match self {
            SoundCue::Hit => 0.7,
            SoundCue::EnemyHit => 0.6,
            SoundCue::Mine => 0.5,
            SoundCue::StartAmbient | SoundCue::StopAmbient => 0.4,
        }
    }
}
