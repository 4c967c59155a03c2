use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Process-wide board dimensions, fixed at deployment. Every game created by
/// this process uses the same grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { rows: 6, columns: 7 }
    }
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<(), String> {
        if self.rows < 4 || self.rows > 20 {
            return Err("rows must be between 4 and 20".to_string());
        }
        if self.columns < 4 || self.columns > 20 {
            return Err("columns must be between 4 and 20".to_string());
        }
        Ok(())
    }
}

impl BoardConfig {
    /// Reads the config from a YAML file. A missing file yields the default
    /// 6x7 board; an unreadable or invalid file is an error.
    pub fn from_yaml_file(file_path: &str) -> Result<Self, String> {
        let content = match std::fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(format!("Failed to read config file: {}", err)),
        };

        let config: Self = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to parse config file: {}", e))?;

        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        Ok(config)
    }
}
