use std::error::Error;
use std::fs;
use std::path::Path;

use seedwell_core::{ErrorInfo, GeneratorConfig, RandError};

/// Reads a YAML generator configuration and checks its bounds.
pub fn load_config(path: &Path) -> Result<GeneratorConfig, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    let config: GeneratorConfig = serde_yaml::from_str(&contents).map_err(|err| {
        RandError::Config(
            ErrorInfo::new("config-parse", "generator config is not valid YAML")
                .with_context("path", path.display().to_string())
                .with_context("cause", err.to_string()),
        )
    })?;
    config.validate()?;
    Ok(config)
}
