use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::models::Coordinates;
use crate::retrieval::{DEFAULT_API_BASE, DEFAULT_MODEL};

pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];
pub const MODEL_VAR: &str = "PROSPECTOR_MODEL";
pub const API_BASE_VAR: &str = "PROSPECTOR_API_BASE";
pub const DATA_DIR_VAR: &str = "PROSPECTOR_DATA_DIR";
pub const LAT_VAR: &str = "PROSPECTOR_LAT";
pub const LNG_VAR: &str = "PROSPECTOR_LNG";

const APP_DIR_NAME: &str = "prospect-finder";

/// Read an environment variable, treating blank values as unset
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Directory holding persisted history
///
/// `PROSPECTOR_DATA_DIR` wins; otherwise the platform data directory.
pub fn get_data_dir() -> Result<PathBuf> {
    if let Some(dir) = non_empty_var(DATA_DIR_VAR) {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(base.join(APP_DIR_NAME))
}

/// Generative service settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

impl ServiceSettings {
    /// Load from the environment; only the API key is required
    pub fn from_env() -> Result<Self> {
        let Some(api_key) = API_KEY_VARS.iter().find_map(|name| non_empty_var(name)) else {
            bail!("GEMINI_API_KEY environment variable not set");
        };

        Ok(Self {
            api_key,
            model: non_empty_var(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: non_empty_var(API_BASE_VAR).unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        })
    }
}

/// Default coordinates from `PROSPECTOR_LAT` / `PROSPECTOR_LNG`
///
/// Both must be set; one without the other is an error.
pub fn coordinates_from_env() -> Result<Option<Coordinates>> {
    match (non_empty_var(LAT_VAR), non_empty_var(LNG_VAR)) {
        (None, None) => Ok(None),
        (Some(lat), Some(lng)) => {
            let latitude: f64 = lat.parse().with_context(|| format!("Invalid {}: {}", LAT_VAR, lat))?;
            let longitude: f64 =
                lng.parse().with_context(|| format!("Invalid {}: {}", LNG_VAR, lng))?;
            Ok(Some(Coordinates::new(latitude, longitude)?))
        }
        _ => bail!("{} and {} must be set together", LAT_VAR, LNG_VAR),
    }
}
