pub use crate::cli::{command, run_app};
pub use crate::config::{Config, StorageMediums};
pub use crate::domain::{
    Category, Contact, ContactDraft, ContactManager, ValidContact, ValidationMode,
    contact, manager, phone, search,
};
pub use crate::errors::{AppError, ValidationError};
pub use crate::storage::{self, CONTACTS_KEY, ContactStore, memory::MemStorage, parse_storage_type};
