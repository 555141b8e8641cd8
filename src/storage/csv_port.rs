use super::*;

use csv::{Reader, Writer};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::phone::check_phone_quick;
use crate::domain::{Category, Contact, ValidContact};
use crate::errors::ValidationError;

const EXPORT_PATH: &str = "./import_export/exported.csv";
const IMPORT_PATH: &str = "./import_export/contacts.csv";

/// One CSV line. Phones share a single column, comma separated.
#[derive(Debug, Serialize, Deserialize)]
pub struct CsvRow {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub patronymic: String,
    #[serde(default)]
    pub category: String,
    pub phones: String,
}

impl From<&Contact> for CsvRow {
    fn from(contact: &Contact) -> Self {
        Self {
            id: Some(contact.id),
            name: contact.name.clone(),
            surname: contact.surname.clone(),
            patronymic: contact.patronymic.clone(),
            category: contact.category.to_string(),
            phones: contact.phones.join(", "),
        }
    }
}

impl CsvRow {
    /// Rows come from exports, whose phones may have been entered in quick
    /// mode, so each listed number is only checked for letters.
    pub fn into_valid(self) -> Result<ValidContact, AppError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingRequiredField("name").into());
        }

        let phones = self
            .phones
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(check_phone_quick)
            .collect::<Result<Vec<String>, AppError>>()?;
        if phones.is_empty() {
            return Err(ValidationError::EmptyPhoneList.into());
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

pub fn export_contacts_to_csv(
    contacts: &[&Contact],
    des: Option<&str>,
) -> Result<(PathBuf, u64), AppError> {
    let mut file_path = PathBuf::from(des.unwrap_or(EXPORT_PATH));

    if file_path.is_dir() {
        file_path = file_path.join("exported.csv");
    } else if file_path.extension().is_none_or(|ext| ext != "csv") {
        return Err(AppError::Config(
            "Export file must be a .csv file".to_string(),
        ));
    }

    create_file_parent(&file_path)?;
    let mut writer = Writer::from_path(&file_path)?;

    let mut counter: u64 = 0;
    for &contact in contacts {
        writer.serialize(CsvRow::from(contact))?;
        counter += 1;
    }
    writer.flush()?;

    Ok((file_path, counter))
}

/// Reads every row of a CSV file, failing on the first bad one. Ids in the
/// file are ignored.
pub fn import_contacts_from_csv(
    src: Option<&str>,
) -> Result<(PathBuf, Vec<ValidContact>), AppError> {
    let file_path = PathBuf::from(src.unwrap_or(IMPORT_PATH));

    if !file_path.exists() {
        return Err(AppError::NotFound("CSV file".to_string()));
    }
    if file_path.extension().is_none_or(|ext| ext != "csv") {
        return Err(AppError::Config("File not .csv".to_string()));
    }

    let mut reader = Reader::from_path(&file_path)?;

    let mut contacts = Vec::new();
    for (line, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        let contact = row.into_valid().inspect_err(|e| {
            log::warn!("Rejected CSV row {}: {e}", line + 1);
        })?;
        contacts.push(contact);
    }

    Ok((file_path, contacts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Contact {
        Contact {
            id: 9,
            name: "Ivan".to_string(),
            surname: "Ivanov".to_string(),
            patronymic: String::new(),
            category: Category::Friend,
            phones: vec![
                "+7 (999) 123-45-67".to_string(),
                "+7 (999) 765-43-21".to_string(),
            ],
        }
    }

    #[test]
    fn export_then_import_keeps_fields() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("out.csv");
        let contact = sample();

        let (written, total) = export_contacts_to_csv(&[&contact], path.to_str())?;
        assert_eq!(total, 1);
        assert_eq!(written, path);

        let (_, contacts) = import_contacts_from_csv(path.to_str())?;
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].clone().with_id(contact.id), contact);
        Ok(())
    }

    #[test]
    fn quick_phones_survive_import() -> Result<(), AppError> {
        let row = CsvRow {
            id: None,
            name: " Bob ".to_string(),
            surname: String::new(),
            patronymic: String::new(),
            category: "gym".to_string(),
            phones: "8 800 555, ,112".to_string(),
        };

        let valid = row.into_valid()?;
        assert_eq!(valid.name, "Bob");
        assert_eq!(valid.category, Category::Other);
        assert_eq!(valid.phones, vec!["8 800 555", "112"]);
        Ok(())
    }

    #[test]
    fn rows_need_a_name_and_a_phone() {
        let row = |name: &str, phones: &str| CsvRow {
            id: None,
            name: name.to_string(),
            surname: String::new(),
            patronymic: String::new(),
            category: String::new(),
            phones: phones.to_string(),
        };

        let err = row("", "+79991234567").into_valid().unwrap_err();
        assert_eq!(
            err.validation(),
            Some(&ValidationError::MissingRequiredField("name"))
        );

        let err = row("Ivan", " , ").into_valid().unwrap_err();
        assert_eq!(err.validation(), Some(&ValidationError::EmptyPhoneList));

        let err = row("Ivan", "+7999 call").into_valid().unwrap_err();
        assert_eq!(err.validation(), Some(&ValidationError::ContainsLetters));
    }

    #[test]
    fn export_into_directory_uses_default_name() -> Result<(), AppError> {
        let dir = tempdir()?;

        let (written, _) = export_contacts_to_csv(&[], dir.path().to_str())?;
        assert_eq!(written, dir.path().join("exported.csv"));
        Ok(())
    }

    #[test]
    fn rejects_non_csv_paths() -> Result<(), AppError> {
        let dir = tempdir()?;
        let txt = dir.path().join("contacts.txt");
        fs::write(&txt, "name,phones\n")?;

        assert!(export_contacts_to_csv(&[], txt.to_str()).is_err());
        assert!(import_contacts_from_csv(txt.to_str()).is_err());
        assert!(matches!(
            import_contacts_from_csv(dir.path().join("missing.csv").to_str()),
            Err(AppError::NotFound(_))
        ));
        Ok(())
    }
}
