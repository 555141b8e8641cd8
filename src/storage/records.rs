use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::contact::{Category, Contact};
use crate::errors::AppError;

/// On-disk shape of one contact. Every field is required.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContactRecord {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    // Older snapshots call it `type`
    #[serde(alias = "type")]
    pub category: String,
    pub phones: Vec<String>,
}

impl From<&Contact> for ContactRecord {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name.clone(),
            surname: contact.surname.clone(),
            patronymic: contact.patronymic.clone(),
            category: contact.category.to_string(),
            phones: contact.phones.clone(),
        }
    }
}

impl ContactRecord {
    pub fn into_contact(self) -> Result<Contact, AppError> {
        if self.phones.is_empty() {
            return Err(AppError::PersistenceParse(format!(
                "contact {} has no phone numbers",
                self.id
            )));
        }

        Ok(Contact {
            id: self.id,
            name: self.name,
            surname: self.surname,
            patronymic: self.patronymic,
            category: Category::parse_lenient(&self.category),
            phones: self.phones,
        })
    }
}

pub fn encode_contacts<'a, I>(contacts: I) -> Result<String, AppError>
where
    I: IntoIterator<Item = &'a Contact>,
{
    let records: Vec<ContactRecord> = contacts.into_iter().map(ContactRecord::from).collect();
    Ok(serde_json::to_string(&records)?)
}

/// Rebuilds contacts from a stored snapshot, rejecting anything malformed
/// instead of guessing.
pub fn decode_contacts(data: &str) -> Result<Vec<Contact>, AppError> {
    let records: Vec<ContactRecord> =
        serde_json::from_str(data).map_err(|e| AppError::PersistenceParse(e.to_string()))?;

    let mut seen: HashSet<i64> = HashSet::with_capacity(records.len());
    let mut contacts = Vec::with_capacity(records.len());

    for record in records {
        if !seen.insert(record.id) {
            return Err(AppError::PersistenceParse(format!(
                "duplicate contact id {}",
                record.id
            )));
        }
        contacts.push(record.into_contact()?);
    }

    Ok(contacts)
}
