use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{AppError, ValidationError};

pub const MIN_DIGITS: usize = 11;
pub const MAX_DIGITS: usize = 15;

/// Latin and Cyrillic letters. `ё`/`Ё` sit outside the `а-я` range and are
/// not matched.
static LETTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Zа-яА-Я]").expect("letter pattern is valid"));

pub struct PhoneReq;

impl PhoneReq {
    pub fn strict() -> String {
        format!(
            "Number must begin with + and contain {} to {} digits, no letters. \
            Separate several numbers with commas",
            MIN_DIGITS, MAX_DIGITS
        )
    }

    pub fn quick() -> String {
        "Number must not contain letters".to_string()
    }
}

/// Turns raw user input into the canonical `+C (AAA) BBB-CC-DD` form.
///
/// Digits past the eleventh are dropped from the output.
pub fn normalize_phone(raw: &str) -> Result<String, AppError> {
    // Spaces, parentheses and hyphens are formatting only
    let cleaned: String = raw
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '(' | ')' | '-')))
        .collect();

    if !cleaned.starts_with('+') {
        return Err(ValidationError::MissingPlusPrefix.into());
    }

    if contains_letters(&cleaned) {
        return Err(ValidationError::ContainsLetters.into());
    }

    let digits: Vec<char> = cleaned.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < MIN_DIGITS {
        return Err(ValidationError::TooFewDigits(digits.len()).into());
    }
    if digits.len() > MAX_DIGITS {
        return Err(ValidationError::TooManyDigits(digits.len()).into());
    }

    let [country_code, subscriber @ ..] = digits.as_slice() else {
        return Err(ValidationError::TooFewDigits(0).into());
    };

    let part = |start: usize, end: usize| subscriber[start..end].iter().collect::<String>();

    Ok(format!(
        "+{} ({}) {}-{}-{}",
        country_code,
        part(0, 3),
        part(3, 6),
        part(6, 8),
        part(8, 10)
    ))
}

/// The lenient single-phone check used by quick add/edit: only letters are
/// rejected, the text is kept as typed (trimmed).
pub fn check_phone_quick(raw: &str) -> Result<String, AppError> {
    let phone = raw.trim();

    if phone.is_empty() {
        return Err(ValidationError::EmptyPhoneList.into());
    }
    if contains_letters(phone) {
        return Err(ValidationError::ContainsLetters.into());
    }

    Ok(phone.to_string())
}

/// Splits a comma separated list and normalizes every non-empty entry.
/// The first failing entry fails the whole list.
pub fn normalize_phone_list(raw: &str) -> Result<Vec<String>, AppError> {
    let parts: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if parts.is_empty() {
        return Err(ValidationError::EmptyPhoneList.into());
    }

    parts.into_iter().map(normalize_phone).collect()
}

pub fn contains_letters(text: &str) -> bool {
    LETTERS.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(result: Result<String, AppError>) -> Option<ValidationError> {
        result.err().and_then(|e| e.validation().cloned())
    }

    #[test]
    fn formats_russian_mobile() -> Result<(), AppError> {
        assert_eq!(normalize_phone("+79991234567")?, "+7 (999) 123-45-67");
        assert_eq!(normalize_phone(" +7 (999) 123-45-67 ")?, "+7 (999) 123-45-67");
        assert_eq!(normalize_phone("+7-999-123-45-67")?, "+7 (999) 123-45-67");
        Ok(())
    }

    #[test]
    fn normalizing_twice_changes_nothing() -> Result<(), AppError> {
        for raw in ["+79991234567", "+1 415 555 12 12", "+4420794600001"] {
            let once = normalize_phone(raw)?;
            assert_eq!(normalize_phone(&once)?, once);
        }
        Ok(())
    }

    #[test]
    fn rejects_missing_plus() {
        assert_eq!(
            kind(normalize_phone("79991234567")),
            Some(ValidationError::MissingPlusPrefix)
        );
        assert_eq!(
            kind(normalize_phone("")),
            Some(ValidationError::MissingPlusPrefix)
        );
    }

    #[test]
    fn rejects_latin_and_cyrillic_letters() {
        assert_eq!(
            kind(normalize_phone("+7999abc1234567")),
            Some(ValidationError::ContainsLetters)
        );
        assert_eq!(
            kind(normalize_phone("+7999бвг1234567")),
            Some(ValidationError::ContainsLetters)
        );
    }

    #[test]
    fn yo_is_not_in_the_letter_range() {
        assert!(contains_letters("Жж"));
        assert!(contains_letters("z"));
        assert!(!contains_letters("ё"));
        assert!(!contains_letters("Ё"));
        assert!(!contains_letters("+7 (999) 123-45-67"));
    }

    #[test]
    fn plus_check_comes_before_letter_check() {
        assert_eq!(
            kind(normalize_phone("abc79991234567")),
            Some(ValidationError::MissingPlusPrefix)
        );
    }

    #[test]
    fn rejects_wrong_digit_counts() {
        assert_eq!(
            kind(normalize_phone("+7991234")),
            Some(ValidationError::TooFewDigits(7))
        );
        assert_eq!(
            kind(normalize_phone("+1234567890123456")),
            Some(ValidationError::TooManyDigits(16))
        );
    }

    #[test]
    fn digits_past_eleventh_are_dropped() -> Result<(), AppError> {
        assert_eq!(normalize_phone("+441234567890123")?, "+4 (412) 345-67-89");
        Ok(())
    }

    #[test]
    fn ignores_other_punctuation() -> Result<(), AppError> {
        assert_eq!(normalize_phone("+7.999.123.45.67")?, "+7 (999) 123-45-67");
        Ok(())
    }

    #[test]
    fn list_splits_on_commas_and_skips_blanks() -> Result<(), AppError> {
        let phones = normalize_phone_list("+79991234567, ,+79997654321,")?;
        assert_eq!(phones, vec!["+7 (999) 123-45-67", "+7 (999) 765-43-21"]);
        Ok(())
    }

    #[test]
    fn list_fails_on_first_bad_entry() {
        let err = normalize_phone_list("+79991234567, 89991234567").unwrap_err();
        assert_eq!(err.validation(), Some(&ValidationError::MissingPlusPrefix));
    }

    #[test]
    fn empty_list_is_rejected() {
        let err = normalize_phone_list(" , ,").unwrap_err();
        assert_eq!(err.validation(), Some(&ValidationError::EmptyPhoneList));
    }

    #[test]
    fn quick_check_only_rejects_letters() -> Result<(), AppError> {
        assert_eq!(check_phone_quick(" 8 999 123 ")?, "8 999 123");
        assert_eq!(
            kind(check_phone_quick("call me")),
            Some(ValidationError::ContainsLetters)
        );
        assert_eq!(
            kind(check_phone_quick("   ")),
            Some(ValidationError::EmptyPhoneList)
        );
        Ok(())
    }
}
