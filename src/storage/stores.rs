use super::*;

use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::PathBuf;

/// File-backed storage: every key is a `<key>.json` file inside `dir`.
pub struct JsonStorage {
    pub medium: String,
    pub dir: PathBuf,
}

impl JsonStorage {
    pub fn new(dir: &Path) -> Self {
        Self {
            medium: "json".to_string(),
            dir: dir.to_path_buf(),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl ContactStore for JsonStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key);
        if !fs::exists(&path)? {
            return Ok(None);
        }

        let mut file = OpenOptions::new().read(true).open(&path)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;

        let data = String::from_utf8(bytes)
            .map_err(|e| AppError::PersistenceParse(format!("{path:?} is not UTF-8: {e}")))?;

        log::debug!("Read {} bytes from {:?}", data.len(), path);
        Ok(Some(data))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.path_for(key);
        create_file_parent(&path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        file.write_all(value.as_bytes())?;

        log::debug!("Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
