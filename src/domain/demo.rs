use super::ContactDraft;

// (name, surname, patronymic, category, phone)
const DEMO_CONTACTS: [(&str, &str, &str, &str, &str); 15] = [
    ("Александр", "Иванов", "Петрович", "work", "+7 (999) 123-45-67"),
    ("Мария", "Петрова", "Сергеевна", "family", "+7 (999) 234-56-78"),
    ("Дмитрий", "Сидоров", "Александрович", "friend", "+7 (999) 345-67-89"),
    ("Анна", "Козлова", "Владимировна", "work", "+7 (999) 456-78-90"),
    ("Сергей", "Новиков", "Игоревич", "friend", "+7 (999) 567-89-01"),
    ("Елена", "Морозова", "Дмитриевна", "family", "+7 (999) 678-90-12"),
    ("Андрей", "Волков", "Сергеевич", "work", "+7 (999) 789-01-23"),
    ("Ольга", "Лебедева", "Андреевна", "friend", "+7 (999) 890-12-34"),
    ("Иван", "Соколов", "Петрович", "other", "+7 (999) 901-23-45"),
    ("Татьяна", "Павлова", "Николаевна", "work", "+7 (999) 012-34-56"),
    ("Михаил", "Федоров", "Владимирович", "friend", "+7 (999) 111-22-33"),
    ("Наталья", "Медведева", "Ивановна", "family", "+7 (999) 222-33-44"),
    ("Владимир", "Егоров", "Александрович", "work", "+7 (999) 333-44-55"),
    ("Юлия", "Орлова", "Сергеевна", "friend", "+7 (999) 444-55-66"),
    ("Павел", "Макаров", "Дмитриевич", "other", "+7 (999) 555-66-77"),
];

/// Drafts for the sample book offered on first launch.
pub fn demo_drafts() -> Vec<ContactDraft> {
    DEMO_CONTACTS
        .iter()
        .map(|(name, surname, patronymic, category, phone)| {
            ContactDraft::new(name, phone)
                .surname(surname)
                .patronymic(patronymic)
                .category(category)
        })
        .collect()
}
