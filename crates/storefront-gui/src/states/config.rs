use std::path::Path;

use anyhow::Context;
use storefront_core::config::StorefrontConfig;
use tracing::{info, warn};

/// Read from the working directory at startup when present.
pub const CONFIG_FILE_NAME: &str = "storefront.toml";

pub fn read_config(path: &Path) -> anyhow::Result<StorefrontConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
}

/// Startup configuration. A missing file means defaults; a broken one is
/// logged and also falls back to defaults.
pub fn load_startup_config() -> StorefrontConfig {
    let path = Path::new(CONFIG_FILE_NAME);
    if !path.exists() {
        return StorefrontConfig::default();
    }
    match read_config(path) {
        Ok(config) => {
            info!(path = %path.display(), "Config loaded");
            config
        }
        Err(e) => {
            warn!(error = %format!("{e:#}"), "Using default config");
            StorefrontConfig::default()
        }
    }
}
