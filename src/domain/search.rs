use rust_fuzzy_search::fuzzy_compare;

use crate::prelude::{AppError, Category, Contact};

const MAX_SEARCH_LENGTH: usize = 30;
const TOP_RESULTS: usize = 10;
const MIN_DISTANCE: f32 = 0.4;

/// Case-insensitive substring match against `surname name patronymic` or
/// any phone. An empty query keeps everything.
pub fn filter_contacts<'a>(contacts: Vec<&'a Contact>, query: &str) -> Vec<&'a Contact> {
    let query = query.to_lowercase();

    contacts
        .into_iter()
        .filter(|c| {
            let full_name = format!("{} {} {}", c.surname, c.name, c.patronymic).to_lowercase();
            let phones = c.phones.join(" ").to_lowercase();
            full_name.contains(&query) || phones.contains(&query)
        })
        .collect()
}

pub fn filter_by_category(contacts: Vec<&Contact>, category: Category) -> Vec<&Contact> {
    contacts
        .into_iter()
        .filter(|c| c.category == category)
        .collect()
}

/// Best fuzzy matches on full name, strongest first.
pub fn fuzzy_search_name<'a>(
    contacts: Vec<&'a Contact>,
    query: &str,
) -> Result<Vec<&'a Contact>, AppError> {
    let query = query.trim().to_lowercase();

    if query.is_empty() {
        return Err(AppError::Search("No name provided".to_string()));
    }
    if query.chars().count() > MAX_SEARCH_LENGTH {
        return Err(AppError::Search("Search string too long".to_string()));
    }

    // Scores are scaled to integers so they sort without float comparisons
    let mut scored: Vec<(i32, &Contact)> = contacts
        .into_iter()
        .filter_map(|contact| {
            let distance = (fuzzy_compare(&contact.full_name().to_lowercase(), &query) * 1000.0) as i32;
            (distance >= (MIN_DISTANCE * 1000.0) as i32).then_some((distance, contact))
        })
        .collect();

    // Stable, so ties stay in list order
    scored.sort_by_key(|&(distance, _)| std::cmp::Reverse(distance));

    Ok(scored
        .into_iter()
        .take(TOP_RESULTS)
        .map(|(_, contact)| contact)
        .collect())
}
