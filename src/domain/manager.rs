use super::*;

use chrono::Utc;
use std::collections::HashMap;

use crate::storage::records::{decode_contacts, encode_contacts};
use crate::storage::{CONTACTS_KEY, ContactStore};

/// Owns the contact book and mirrors every change into durable storage.
///
/// Contacts are kept by id, with `order` recording insertion order, which is
/// the order `list` returns. Each mutation rewrites the whole snapshot.
pub struct ContactManager {
    mem: HashMap<i64, Contact>,
    order: Vec<i64>,
    storage: Box<dyn ContactStore>,
    last_id: i64,
}

impl ContactManager {
    /// An empty book over `storage`. Nothing is read until `load`.
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        Self {
            mem: HashMap::new(),
            order: Vec::new(),
            storage,
            last_id: 0,
        }
    }

    /// Creates the book and loads whatever `storage` holds.
    pub fn open(storage: Box<dyn ContactStore>) -> Result<Self, AppError> {
        let mut manager = Self::new(storage);
        manager.load()?;
        Ok(manager)
    }

    pub fn get_medium(&self) -> &str {
        self.storage.get_medium()
    }

    /// Replaces the in-memory book with the stored snapshot.
    ///
    /// Missing, blank and corrupt snapshots all leave the book empty; corrupt
    /// ones are logged. Never writes.
    pub fn load(&mut self) -> Result<usize, AppError> {
        self.mem.clear();
        self.order.clear();

        let data = match self.storage.read(CONTACTS_KEY) {
            Ok(Some(data)) => data,
            Ok(None) => {
                log::debug!("No stored contacts in {} storage", self.get_medium());
                return Ok(0);
            }
            Err(AppError::PersistenceParse(e)) => {
                log::error!("Ignoring stored contacts: {e}");
                return Ok(0);
            }
            Err(e) => return Err(e),
        };

        if data.trim().is_empty() {
            return Ok(0);
        }

        let contacts = match decode_contacts(&data) {
            Ok(contacts) => contacts,
            Err(e) => {
                log::error!("Ignoring stored contacts: {e}");
                return Ok(0);
            }
        };

        for contact in contacts {
            self.last_id = self.last_id.max(contact.id);
            self.order.push(contact.id);
            self.mem.insert(contact.id, contact);
        }

        log::debug!("Loaded {} contacts", self.order.len());
        Ok(self.order.len())
    }

    pub fn list(&self) -> Vec<&Contact> {
        self.order
            .iter()
            .filter_map(|id| self.mem.get(id))
            .collect()
    }

    pub fn get(&self, id: i64) -> Option<&Contact> {
        self.mem.get(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// A failed write leaves the book as it was.
    pub fn add(&mut self, draft: &ContactDraft, mode: ValidationMode) -> Result<Contact, AppError> {
        let valid = draft.validate(mode)?;
        let before = self.order.len();
        let contact = self.insert(valid)?;

        if let Err(e) = self.save() {
            self.truncate(before);
            return Err(e);
        }
        log::info!("Added contact {} ({})", contact.id, contact.full_name());
        Ok(contact)
    }

    /// Replaces the contact with `id`, keeping its place in the list.
    pub fn update(
        &mut self,
        id: i64,
        draft: &ContactDraft,
        mode: ValidationMode,
    ) -> Result<Contact, AppError> {
        if !self.mem.contains_key(&id) {
            return Err(AppError::NotFound(format!("Contact {id}")));
        }

        let contact = draft.validate(mode)?.with_id(id);
        let previous = self.mem.insert(id, contact.clone());

        if let Err(e) = self.save() {
            if let Some(previous) = previous {
                self.mem.insert(id, previous);
            }
            return Err(e);
        }
        log::info!("Updated contact {id}");
        Ok(contact)
    }

    /// Returns whether a contact was removed. Unknown ids are not an error.
    pub fn remove(&mut self, id: i64) -> Result<bool, AppError> {
        let Some(removed) = self.mem.remove(&id) else {
            log::debug!("Contact {id} already gone");
            return Ok(false);
        };
        let position = self.order.iter().position(|&kept| kept == id);
        self.order.retain(|&kept| kept != id);

        if let Err(e) = self.save() {
            let at = position.unwrap_or(self.order.len());
            self.order.insert(at, id);
            self.mem.insert(id, removed);
            return Err(e);
        }
        log::info!("Removed contact {} ({})", id, removed.full_name());
        Ok(true)
    }

    /// Fills an empty book with the demo contacts. A book that already has
    /// contacts is left alone.
    pub fn seed_demo(&mut self) -> Result<usize, AppError> {
        if !self.is_empty() {
            return Ok(0);
        }

        let valid = demo::demo_drafts()
            .iter()
            .map(|draft| draft.validate(ValidationMode::Strict))
            .collect::<Result<Vec<ValidContact>, AppError>>()?;
        self.import(valid)
    }

    /// Appends already validated contacts under fresh ids and writes once.
    /// All or nothing: on any failure the book is left as it was.
    pub fn import(&mut self, contacts: Vec<ValidContact>) -> Result<usize, AppError> {
        if contacts.is_empty() {
            return Ok(0);
        }

        let before = self.order.len();
        let total = contacts.len();
        let mut stored = Ok(());
        for contact in contacts {
            if let Err(e) = self.insert(contact) {
                stored = Err(e);
                break;
            }
        }

        if let Err(e) = stored.and_then(|()| self.save()) {
            self.truncate(before);
            return Err(e);
        }
        log::info!("Imported {total} contacts");
        Ok(total)
    }

    /// Substring search over full name and phones, in list order.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        search::filter_contacts(self.list(), query)
    }

    pub fn fuzzy_search_name(&self, query: &str) -> Result<Vec<&Contact>, AppError> {
        search::fuzzy_search_name(self.list(), query)
    }

    fn insert(&mut self, valid: ValidContact) -> Result<Contact, AppError> {
        let contact = valid.with_id(self.next_id()?);
        self.order.push(contact.id);
        self.mem.insert(contact.id, contact.clone());
        Ok(contact)
    }

    /// Drops every contact appended after the first `len`.
    fn truncate(&mut self, len: usize) {
        for id in self.order.drain(len..) {
            self.mem.remove(&id);
        }
    }

    /// Millisecond clock, bumped past the last issued id when two adds land
    /// in the same millisecond.
    fn next_id(&mut self) -> Result<i64, AppError> {
        let bumped = self
            .last_id
            .checked_add(1)
            .ok_or(AppError::IdsExhausted(self.last_id))?;
        let id = Utc::now().timestamp_millis().max(bumped);
        self.last_id = id;
        Ok(id)
    }

    fn save(&self) -> Result<(), AppError> {
        let data = encode_contacts(self.list())?;
        self.storage.write(CONTACTS_KEY, &data)?;
        log::debug!("Saved {} contacts", self.order.len());
        Ok(())
    }
}
