//! Game settings and preferences
//!
//! Serialized as JSON so hosts can persist them between sessions.

use serde::{Deserialize, Serialize};

use crate::consts::{LUDICROUS_SPEED, NORMAL_SPEED};

/// Movement speed presets offered in the lobby
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpeedPreset {
    #[default]
    Normal,
    Ludicrous,
}

impl SpeedPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedPreset::Normal => "Normal",
            SpeedPreset::Ludicrous => "Ludicrous",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(SpeedPreset::Normal),
            "ludicrous" => Some(SpeedPreset::Ludicrous),
            _ => None,
        }
    }

    /// Distance travelled per logical tick for this preset
    pub fn movement_speed(&self) -> f32 {
        match self {
            SpeedPreset::Normal => NORMAL_SPEED,
            SpeedPreset::Ludicrous => LUDICROUS_SPEED,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Movement speed preset for new rounds
    pub speed: SpeedPreset,

    // === Audio ===
    /// Whether the game track plays at all
    pub music_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume while a crash cue plays
    pub ducked_music_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed: SpeedPreset::Normal,

            // Audio
            music_enabled: true,
            master_volume: 0.8,
            music_volume: 0.7,
            sfx_volume: 1.0,
            ducked_music_volume: 0.2,
        }
    }
}

impl Settings {
    /// Serialize for host-side persistence
    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    /// Restore persisted settings, falling back to defaults on any decode
    /// failure so a stale blob never blocks startup.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("discarding unreadable settings: {err}");
                Self::default()
            }
        }
    }
}
