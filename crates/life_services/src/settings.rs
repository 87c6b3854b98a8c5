//! Settings management

use life_core::{GridDims, TicksPerFrame};
use life_render::{GridLayout, Palette, Rgba, SurfaceError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Viewer settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid: GridSettings,
    pub playback: PlaybackSettings,
    pub profiler: ProfilerSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Cell edge in physical pixels, excluding the separator line.
    pub cell_size: u32,
    pub grid_color: Rgba,
    pub dead_color: Rgba,
    pub alive_color: Rgba,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    pub ticks_per_frame: TicksPerFrame,
    /// Start playing as soon as the viewer starts.
    pub autoplay: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilerSettings {
    /// Number of frames the statistics are taken over.
    pub window: usize,
}

impl Default for GridSettings {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            cell_size: 5,
            grid_color: palette.grid,
            dead_color: palette.dead,
            alive_color: palette.alive,
        }
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            ticks_per_frame: TicksPerFrame::ONE,
            autoplay: true,
        }
    }
}

impl Default for ProfilerSettings {
    fn default() -> Self {
        Self { window: 100 }
    }
}

impl GridSettings {
    pub fn palette(&self) -> Palette {
        Palette {
            grid: self.grid_color,
            dead: self.dead_color,
            alive: self.alive_color,
        }
    }

    /// Fails when the grid would not fit in `u32` pixel coordinates.
    pub fn layout(&self, dims: GridDims) -> Result<GridLayout, SurfaceError> {
        GridLayout::new(self.cell_size, dims)
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Also covers malformed color strings.
    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cell size must be at least 1 pixel")]
    ZeroCellSize,

    #[error("profiler window must hold at least one frame")]
    ZeroWindow,
}

impl Settings {
    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn to_json_string(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.grid.cell_size == 0 {
            return Err(SettingsError::ZeroCellSize);
        }
        if self.profiler.window == 0 {
            return Err(SettingsError::ZeroWindow);
        }
        Ok(())
    }
}
