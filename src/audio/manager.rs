//! Audio manager using Kira
//!
//! Plays simulation cues fire-and-forget; every failure degrades to silence.

use std::collections::HashMap;
use std::path::Path;

use kira::{
    manager::{backend::DefaultBackend, AudioManager as KiraManager, AudioManagerSettings},
    sound::static_sound::{StaticSoundData, StaticSoundHandle, StaticSoundSettings},
    tween::Tween,
    Volume,
};

use super::cues::SoundCue;

/// Audio manager that handles all cue playback
pub struct AudioManager {
    /// Kira audio manager; None when the backend failed to initialize
    manager: Option<KiraManager>,
    /// Preloaded sound data
    sounds: HashMap<SoundCue, StaticSoundData>,
    /// Handle to the looping ambience, while it plays
    ambient: Option<StaticSoundHandle>,
    /// Master volume (0.0 - 1.0)
    master_volume: f64,
    /// SFX volume multiplier (0.0 - 1.0)
    sfx_volume: f64,
    /// Whether audio is enabled
    enabled: bool,
}

impl AudioManager {
    /// Create a new audio manager
    pub fn new() -> Self {
        let manager = match KiraManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(m) => {
                log::info!("Audio manager initialized successfully");
                Some(m)
            }
            Err(e) => {
                log::warn!("Failed to initialize audio manager: {}. Audio disabled.", e);
                None
            }
        };

        let mut audio = Self {
            manager,
            sounds: HashMap::new(),
            ambient: None,
            master_volume: 1.0,
            sfx_volume: 0.7,
            enabled: true,
        };

        audio.preload_sounds();
        audio
    }

    /// Preload every cue's sound file
    fn preload_sounds(&mut self) {
        let cues = [
            SoundCue::Hit,
            SoundCue::EnemyHit,
            SoundCue::Mine,
            SoundCue::StartAmbient,
        ];
        for cue in cues {
            if let Err(e) = self.load_sound(cue) {
                log::debug!("Could not preload sound {:?}: {}", cue, e);
            }
        }
    }

    /// Load a cue's sound file
    fn load_sound(&mut self, cue: SoundCue) -> Result<(), String> {
        if self.sounds.contains_key(&cue) {
            return Ok(());
        }

        let path = cue.file_path();
        if !Path::new(path).exists() {
            return Err(format!("Sound file not found: {}", path));
        }

        match StaticSoundData::from_file(path) {
            Ok(data) => {
                self.sounds.insert(cue, data);
                Ok(())
            }
            Err(e) => Err(format!("Failed to load sound {}: {:?}", path, e)),
        }
    }

    /// Dispatch one simulation cue
    pub fn dispatch(&mut self, cue: SoundCue) {
        match cue {
            SoundCue::StartAmbient => self.start_ambient(),
            SoundCue::StopAmbient => self.stop_ambient(),
            _ => self.play(cue),
        }
    }

    /// Play a one-shot cue
    pub fn play(&mut self, cue: SoundCue) {
        if !self.enabled || self.manager.is_none() {
            return;
        }

        if !self.sounds.contains_key(&cue) {
            if let Err(e) = self.load_sound(cue) {
                log::debug!("Cannot play sound {:?}: {}", cue, e);
                return;
            }
        }

        let sound_data = match self.sounds.get(&cue) {
            Some(data) => data.clone(),
            None => return,
        };

        let final_volume = cue.default_volume() * self.sfx_volume * self.master_volume;
        let settings = StaticSoundSettings::new().volume(Volume::Amplitude(final_volume));

        if let Some(manager) = &mut self.manager {
            if let Err(e) = manager.play(sound_data.with_settings(settings)) {
                log::debug!("Failed to play sound {:?}: {:?}", cue, e);
            }
        }
    }

    /// Start the looping ambience (idempotent while already playing)
    fn start_ambient(&mut self) {
        if !self.enabled || self.manager.is_none() || self.ambient.is_some() {
            return;
        }

        let cue = SoundCue::StartAmbient;
        if !self.sounds.contains_key(&cue) {
            if let Err(e) = self.load_sound(cue) {
                log::debug!("Cannot start ambience: {}", e);
                return;
            }
        }

        let sound_data = match self.sounds.get(&cue) {
            Some(data) => data.clone(),
            None => return,
        };

        let final_volume = cue.default_volume() * self.sfx_volume * self.master_volume;
        let settings = StaticSoundSettings::new()
            .volume(Volume::Amplitude(final_volume))
            .loop_region(0.0..);

        if let Some(manager) = &mut self.manager {
            match manager.play(sound_data.with_settings(settings)) {
                Ok(handle) => self.ambient = Some(handle),
                Err(e) => log::debug!("Failed to start ambience: {:?}", e),
            }
        }
    }

    /// Stop the looping ambience if it is playing
    fn stop_ambient(&mut self) {
        if let Some(mut handle) = self.ambient.take() {
            handle.stop(Tween::default());
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, volume: f64) {
        self.master_volume = volume.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, volume: f64) {
        self.sfx_volume = volume.clamp(0.0, 1.0);
    }

    /// Enable or disable audio
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.stop_ambient();
        }
        self.enabled = enabled;
    }

    /// Check if audio is enabled and the backend is available
    pub fn is_enabled(&self) -> bool {
        self.enabled && self.manager.is_some()
    }
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}
