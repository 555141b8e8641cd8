pub mod csv_port;
pub mod memory;
pub mod records;
pub mod stores;

use crate::config::{Config, StorageMediums};
use crate::errors::AppError;
use std::fs;
use std::path::Path;

/// Key under which the whole contact list is kept.
pub const CONTACTS_KEY: &str = "contacts";

/// A durable key-value medium holding serialized text.
pub trait ContactStore {
    /// `None` when nothing was ever written under `key`.
    fn read(&self, key: &str) -> Result<Option<String>, AppError>;

    fn write(&self, key: &str, value: &str) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

pub fn parse_storage_type(config: &Config) -> Result<Box<dyn ContactStore>, AppError> {
    match config.storage_medium {
        StorageMediums::Json => Ok(Box::new(stores::JsonStorage::new(&config.storage_dir))),
        StorageMediums::Mem => Ok(Box::new(memory::MemStorage::default())),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
