use crate::{
    cli::{display_contact, display_contact_details},
    config::Config,
    prelude::{
        AppError, Category, Contact, ContactDraft, ContactManager, ValidationError,
        ValidationMode,
        command::{Cli, Commands, ContactFields},
        parse_storage_type,
        phone::PhoneReq,
        search::filter_by_category,
        storage::csv_port::{export_contacts_to_csv, import_contacts_from_csv},
    },
};
use clap::Parser;
use dotenv::dotenv;

pub fn run_app() -> Result<(), AppError> {
    // Lets a .env file feed the clap `env` fallbacks
    dotenv().ok();
    let cli = Cli::parse();

    let config = Config::from_values(Some(&cli.storage_choice), cli.storage_dir.as_deref())?;
    log::debug!(
        "Storage: {} in {:?}",
        config.storage_medium.is_which(),
        config.storage_dir
    );

    let mut storage = ContactManager::open(parse_storage_type(&config)?)?;

    match cli.command {
        Commands::Add { fields } => {
            let mode = mode_for(&fields);
            let draft = apply_fields(ContactDraft::default(), fields);

            let contact = storage
                .add(&draft, mode)
                .inspect_err(|e| phone_hint(e, mode))?;

            println!("Contact added successfully");
            println!("{}", display_contact(&contact));
            Ok(())
        }

        Commands::List { category, reverse } => {
            let mut contacts = storage.list();

            if let Some(category) = category {
                let category = category.parse::<Category>()?;
                contacts = filter_by_category(contacts, category);
            }

            if contacts.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            if reverse {
                contacts.reverse();
            }

            print_contacts(&contacts);
            Ok(())
        }

        Commands::Edit { id, fields } => {
            let current = storage
                .get(id)
                .ok_or_else(|| AppError::NotFound(format!("Contact {id}")))?;

            let mode = mode_for(&fields);
            let mut draft = ContactDraft::from_contact(current);
            if mode == ValidationMode::Quick {
                // the quick form edits the first number only
                draft.phones = current.phones.first().cloned().unwrap_or_default();
            }
            let draft = apply_fields(draft, fields);

            let contact = storage
                .update(id, &draft, mode)
                .inspect_err(|e| phone_hint(e, mode))?;

            println!("Contact updated successfully");
            println!("{}", display_contact(&contact));
            Ok(())
        }

        Commands::Delete { id } => {
            if storage.remove(id)? {
                println!("Contact deleted successfully");
            } else {
                eprintln!("{}", AppError::NotFound(format!("Contact {id}")));
            }
            Ok(())
        }

        Commands::Show { id } => {
            let contact = storage
                .get(id)
                .ok_or_else(|| AppError::NotFound(format!("Contact {id}")))?;

            println!("{}", display_contact_details(contact));
            Ok(())
        }

        Commands::Search { query, fuzzy } => {
            let found = if fuzzy {
                storage.fuzzy_search_name(&query)?
            } else {
                storage.search(&query)
            };

            if found.is_empty() {
                println!("Couldn't find a contact with {query}");
                return Ok(());
            }

            print_contacts(&found);
            Ok(())
        }

        Commands::Seed => {
            let total = storage.seed_demo()?;

            if total == 0 {
                println!("Contact book is not empty, nothing seeded");
            } else {
                println!("Added {total} demo contacts");
            }
            Ok(())
        }

        // Import contacts into storage from .csv file
        Commands::Import { src } => {
            let (path, contacts) = import_contacts_from_csv(src.as_deref())?;
            let total = storage.import(contacts)?;

            println!("Successfully imported {} contacts from {:?}.", total, path);
            Ok(())
        }

        Commands::Export { des } => {
            let (path, total) = export_contacts_to_csv(&storage.list(), des.as_deref())?;

            println!("Successfully exported {} contacts to {:?}.", total, path);
            Ok(())
        }
    }
}

fn mode_for(fields: &ContactFields) -> ValidationMode {
    if fields.quick {
        ValidationMode::Quick
    } else {
        ValidationMode::Strict
    }
}

/// Overwrites the draft with every field given on the command line.
fn apply_fields(mut draft: ContactDraft, fields: ContactFields) -> ContactDraft {
    if let Some(name) = fields.name {
        draft.name = name;
    }
    if let Some(surname) = fields.surname {
        draft.surname = surname;
    }
    if let Some(patronymic) = fields.patronymic {
        draft.patronymic = patronymic;
    }
    if let Some(category) = fields.category {
        draft.category = category;
    }
    if let Some(phones) = fields.phones {
        draft.phones = phones;
    }
    draft
}

/// Reminds the user of the expected phone format after a rejected phone.
fn phone_hint(err: &AppError, mode: ValidationMode) {
    match err.validation() {
        None
        | Some(ValidationError::MissingRequiredField(_))
        | Some(ValidationError::UnknownCategory(_)) => {}
        Some(_) => match mode {
            ValidationMode::Strict => eprintln!("{}", PhoneReq::strict()),
            ValidationMode::Quick => eprintln!("{}", PhoneReq::quick()),
        },
    }
}

fn print_contacts(contacts: &[&Contact]) {
    for contact in contacts {
        println!("{}", display_contact(contact));
    }
}
