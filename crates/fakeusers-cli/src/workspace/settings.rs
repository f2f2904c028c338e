use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use fakeusers_core::{DEFAULT_PAGE_SIZE, GenerationParams, Region};
use fakeusers_core::Result as CoreResult;

use super::atomic::write_bytes_atomic;
use super::WorkspaceResult;

pub const DEFAULT_SETTINGS_FILE: &str = "fakeusers.toml";

/// Defaults read from `fakeusers.toml`. Command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub region: Region,
    pub error_rate: f64,
    pub seed: String,
    pub page_size: u32,
    pub run_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            region: Region::Usa,
            error_rate: 0.0,
            seed: "0".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            run_dir: PathBuf::from("runs"),
        }
    }
}

impl Settings {
    /// Validated generation parameters for these settings.
    pub fn params(&self) -> CoreResult<GenerationParams> {
        GenerationParams::new(self.region, self.error_rate, self.seed.clone(), self.page_size)
    }
}

/// Load `explicit` if given (it must exist), else `./fakeusers.toml` when
/// present, else defaults.
pub fn load_settings(explicit: Option<&Path>) -> WorkspaceResult<Settings> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_SETTINGS_FILE);
            if !fallback.exists() {
                return Ok(Settings::default());
            }
            fallback
        }
    };
    let content = std::fs::read_to_string(&path)?;
    let settings: Settings = toml::from_str(&content)?;
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &Settings) -> WorkspaceResult<()> {
    let encoded = toml::to_string_pretty(settings)?;
    write_bytes_atomic(path, encoded.as_bytes())
}
