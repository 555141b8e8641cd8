pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::Contact;

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "{:>14}  {:<40} {:<8} {}",
        contact.id,
        contact.full_name(),
        contact.category,
        contact.phones.join(", ")
    )
}

pub fn display_contact_details(contact: &Contact) -> String {
    let mut output = format!(
        "Id: {}\n\
        Name: {}\n\
        Surname: {}\n\
        Patronymic: {}\n\
        Category: {}\n\
        Phones:",
        contact.id, contact.name, contact.surname, contact.patronymic, contact.category
    );

    for phone in &contact.phones {
        output.push_str(&format!("\n  {phone}"));
    }
    output
}
