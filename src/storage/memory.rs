use super::*;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// In-process storage. Clones share the same map, so a handle kept aside
/// sees everything written through another.
#[derive(Debug, Clone, Default)]
pub struct MemStorage {
    data: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `value` under `key`. Not counted as a write.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Number of `write` calls made through any handle.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl ContactStore for MemStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.data.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() -> Result<(), AppError> {
        let storage = MemStorage::new();
        let handle = storage.clone();

        assert_eq!(handle.read(CONTACTS_KEY)?, None);
        storage.write(CONTACTS_KEY, "[]")?;
        assert_eq!(handle.read(CONTACTS_KEY)?, Some("[]".to_string()));
        assert_eq!(handle.write_count(), 1);
        Ok(())
    }

    #[test]
    fn seeded_entry_is_not_a_write() -> Result<(), AppError> {
        let storage = MemStorage::with_entry(CONTACTS_KEY, "[]");

        assert_eq!(storage.read(CONTACTS_KEY)?.as_deref(), Some("[]"));
        assert_eq!(storage.write_count(), 0);
        Ok(())
    }
}
