pub mod contact;
pub mod demo;
pub mod manager;
pub mod phone;
pub mod search;

pub use crate::errors::AppError;
pub use contact::{Category, Contact, ContactDraft, ValidContact, ValidationMode};
pub use manager::ContactManager;
