use std::fmt;
use std::str::FromStr;

use super::phone::{check_phone_quick, normalize_phone_list};
use crate::errors::{AppError, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    Work,
    Family,
    Friend,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Work,
        Category::Family,
        Category::Friend,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Family => "family",
            Category::Friend => "friend",
            Category::Other => "other",
        }
    }

    /// Unrecognized or empty text falls back to `Other`.
    pub fn parse_lenient(text: &str) -> Self {
        text.parse().unwrap_or_else(|_| {
            if !text.trim().is_empty() {
                log::warn!("Unknown category {:?}, using \"other\"", text);
            }
            Category::Other
        })
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| ValidationError::UnknownCategory(s.trim().to_string()).into())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub category: Category,
    pub phones: Vec<String>,
}

impl Contact {
    /// `surname name patronymic`, skipping empty parts.
    pub fn full_name(&self) -> String {
        [&self.surname, &self.name, &self.patronymic]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<&str>>()
            .join(" ")
    }
}

/// How strictly a draft's phones are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Comma separated list, every entry fully normalized.
    #[default]
    Strict,
    /// A single entry, only letters rejected. Used by quick add/edit.
    Quick,
}

/// Unvalidated input from an add or edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub category: String,
    pub phones: String,
}

/// A draft that passed validation, waiting for an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub category: Category,
    pub phones: Vec<String>,
}

impl ContactDraft {
    pub fn new(name: &str, phones: &str) -> Self {
        Self {
            name: name.to_string(),
            phones: phones.to_string(),
            ..Self::default()
        }
    }

    pub fn surname(mut self, surname: &str) -> Self {
        self.surname = surname.to_string();
        self
    }

    pub fn patronymic(mut self, patronymic: &str) -> Self {
        self.patronymic = patronymic.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    /// Pre-fills a draft from a stored contact, phones joined the way the
    /// edit form shows them.
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            surname: contact.surname.clone(),
            patronymic: contact.patronymic.clone(),
            category: contact.category.to_string(),
            phones: contact.phones.join(", "),
        }
    }

    pub fn validate(&self, mode: ValidationMode) -> Result<ValidContact, AppError> {
        let phones = match mode {
            ValidationMode::Strict => normalize_phone_list(&self.phones)?,
            ValidationMode::Quick => vec![check_phone_quick(&self.phones)?],
        };

        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingRequiredField("name").into());
        }

        Ok(ValidContact {
            name: name.to_string(),
            surname: self.surname.trim().to_string(),
            patronymic: self.patronymic.trim().to_string(),
            category: Category::parse_lenient(&self.category),
            phones,
        })
    }
}

impl ValidContact {
    pub fn with_id(self, id: i64) -> Contact {
        Contact {
            id,
            name: self.name,
            surname: self.surname,
            patronymic: self.patronymic,
            category: self.category,
            phones: self.phones,
        }
    }
}
