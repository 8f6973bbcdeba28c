//! Bench config persistence: save and load [`BenchConfig`] as YAML or JSON.
//!
//! The format is picked by file extension. A missing file is not an error
//! for [`load_config_or_default`]; the analyses fall back to the built-in
//! bench literals so a fresh checkout runs without any setup.

use std::path::Path;

use crate::config::BenchConfig;
use crate::error::ScopeError;

/// Load a bench config from a `.yaml`/`.yml` or `.json` file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<BenchConfig, ScopeError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    match extension(path).as_deref() {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&text)?),
        Some("json") => Ok(serde_json::from_str(&text)?),
        other => Err(ScopeError::UnsupportedConfigFormat(
            other.unwrap_or_default().to_string(),
        )),
    }
}

/// Save a bench config next to the data it describes.
pub fn save_config<P: AsRef<Path>>(path: P, config: &BenchConfig) -> Result<(), ScopeError> {
    let path = path.as_ref();
    let text = match extension(path).as_deref() {
        Some("yaml") | Some("yml") => serde_yaml::to_string(config)?,
        Some("json") => serde_json::to_string_pretty(config)?,
        other => {
            return Err(ScopeError::UnsupportedConfigFormat(
                other.unwrap_or_default().to_string(),
            ))
        }
    };
    std::fs::write(path, text)?;
    Ok(())
}

/// Load a bench config, falling back to [`BenchConfig::default`] when the
/// file does not exist. A file that exists but fails to parse is still an
/// error: silently ignoring a broken config would analyze the wrong bench.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<BenchConfig, ScopeError> {
    let path = path.as_ref();
    if !path.exists() {
        log::info!(
            "no bench config at {}, using built-in defaults",
            path.display()
        );
        return Ok(BenchConfig::default());
    }
    let config = load_config(path)?;
    log::info!("bench config loaded from {}", path.display());
    Ok(config)
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
}
