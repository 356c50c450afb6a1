//! Persistent settings for the explorer app.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::section::Section;
use crate::simulation::SimulationConfig;

/// Longest allowed section transition phase, in seconds
const MAX_TRANSITION_SECS: f32 = 2.0;

/// All persistable UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Section shown at launch
    #[serde(default)]
    pub active_section: Section,

    /// Length of each enter/exit phase when switching sections
    #[serde(default = "default_transition_secs")]
    pub transition_secs: f32,

    /// Start the simulation as soon as the visualization is shown
    #[serde(default)]
    pub simulate_on_launch: bool,

    #[serde(default)]
    pub simulation: SimulationConfig,
}

fn default_transition_secs() -> f32 {
    0.3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            active_section: Section::Overview,
            transition_secs: default_transition_secs(),
            simulate_on_launch: false,
            simulation: SimulationConfig::default(),
        }
    }
}

impl Settings {
    /// Get the path to the settings file
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("clawdbot-explorer");
            p.push("settings.json");
            p
        })
    }

    /// Clamp out-of-range values from a hand-edited file
    pub fn sanitized(mut self) -> Self {
        self.transition_secs = if self.transition_secs.is_finite() {
            self.transition_secs.clamp(0.0, MAX_TRANSITION_SECS)
        } else {
            default_transition_secs()
        };
        self.simulation = self.simulation.sanitized();
        self
    }

    /// Read and parse settings from `path`
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
        Ok(settings.sanitized())
    }

    /// Write settings to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;
        std::fs::write(path, json)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
    }

    /// Load settings from disk, returning defaults if file doesn't exist or is invalid
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            warn!("Could not determine config directory, using defaults");
            return Self::default();
        };

        if !path.exists() {
            // First launch, nothing saved yet
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to `path`, logging instead of failing. Returns true on success.
    pub fn save(&self, path: Option<&Path>) -> bool {
        let Some(path) = path else {
            warn!("Could not determine config directory, settings not saved");
            return false;
        };

        match self.save_to(path) {
            Ok(()) => {
                info!("Saved settings to {:?}", path);
                true
            }
            Err(e) => {
                warn!("{}", e);
                false
            }
        }
    }
}
