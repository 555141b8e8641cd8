use std::path::PathBuf;

use crate::errors::AppError;

pub const DEFAULT_STORAGE_DIR: &str = "./.instance";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Json,
    Mem,
}

impl StorageMediums {
    pub fn is_which(&self) -> &str {
        match self {
            StorageMediums::Json => "json",
            StorageMediums::Mem => "mem",
        }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.trim().to_lowercase().as_str() {
            "json" => Ok(StorageMediums::Json),
            "mem" => Ok(StorageMediums::Mem),
            other => Err(AppError::Config(format!(
                "{other:?} is not a recognized storage medium (json, mem)"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub storage_medium: StorageMediums,
    pub storage_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_medium: StorageMediums::Json,
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
        }
    }
}

impl Config {
    /// Builds a config from the raw `STORAGE_CHOICE` and `CONTACTS_STORAGE_DIR`
    /// values; missing or blank values keep the defaults.
    pub fn from_values(choice: Option<&str>, dir: Option<&str>) -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(choice) = choice {
            config.storage_medium = StorageMediums::from(choice)?;
        }
        if let Some(dir) = dir.filter(|d| !d.trim().is_empty()) {
            config.storage_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_json_in_instance_dir() -> Result<(), AppError> {
        let config = Config::from_values(None, None)?;

        assert_eq!(config.storage_medium, StorageMediums::Json);
        assert_eq!(config.storage_dir, PathBuf::from("./.instance"));
        Ok(())
    }

    #[test]
    fn explicit_values_win() -> Result<(), AppError> {
        let config = Config::from_values(Some("MEM"), Some("/tmp/book"))?;

        assert_eq!(config.storage_medium.is_which(), "mem");
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/book"));
        Ok(())
    }

    #[test]
    fn rejects_unknown_medium() {
        let err = Config::from_values(Some("txt"), None).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
