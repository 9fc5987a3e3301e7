use serde::Serialize;

use super::errors::{DomainError, DomainResult};

/// Field separator used by the on-disk snapshot.
pub const FIELD_DELIMITER: char = ';';

/// A single phone book entry: a phone number and the subscriber's name.
///
/// Subscribers are immutable once built. Construction rejects values that
/// could not be stored faithfully: empty fields, fields with leading or
/// trailing whitespace, and fields containing the snapshot delimiter or a
/// line break.
///
/// # Examples
///
/// ```
/// use phonebook::domain::Subscriber;
///
/// let dan = Subscriber::new("555", "Dan").unwrap();
/// assert_eq!(dan.number(), "555");
/// assert_eq!(dan.name(), "Dan");
///
/// assert!(Subscriber::new("", "Dan").is_err());
/// assert!(Subscriber::new("555", "Dan;Eve").is_err());
/// assert!(Subscriber::new(" 555", "Dan").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subscriber {
    number: String,
    name: String,
}

impl Subscriber {
    /// Builds a subscriber after checking both fields.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyField`] if either field is empty or blank,
    /// [`DomainError::SurroundingWhitespace`] if either starts or ends with
    /// whitespace, or [`DomainError::ForbiddenCharacter`] if either contains
    /// `;`, `\n` or `\r`.
    pub fn new(number: impl Into<String>, name: impl Into<String>) -> DomainResult<Self> {
        let number = number.into();
        let name = name.into();
        validate_field("number", &number)?;
        validate_field("name", &name)?;
        Ok(Self { number, name })
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_parts(self) -> (String, String) {
        (self.number, self.name)
    }
}

fn validate_field(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    // The snapshot reader trims every field.
    if value.trim() != value {
        return Err(DomainError::SurroundingWhitespace {
            field,
            value: value.to_string(),
        });
    }
    if value.contains([FIELD_DELIMITER, '\n', '\r']) {
        return Err(DomainError::ForbiddenCharacter {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_values_verbatim() {
        let subscriber = Subscriber::new("+1 (555) 010", "dan  O'Neil").unwrap();
        assert_eq!(subscriber.number(), "+1 (555) 010");
        assert_eq!(subscriber.name(), "dan  O'Neil");
    }

    #[test]
    fn test_surrounding_whitespace_rejected() {
        assert!(matches!(
            Subscriber::new(" 555", "Dan"),
            Err(DomainError::SurroundingWhitespace { field: "number", .. })
        ));
        assert!(matches!(
            Subscriber::new("555", "Dan "),
            Err(DomainError::SurroundingWhitespace { field: "name", .. })
        ));
        assert!(matches!(
            Subscriber::new("555\t", "Dan"),
            Err(DomainError::SurroundingWhitespace { field: "number", .. })
        ));
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert_eq!(
            Subscriber::new("   ", "Dan"),
            Err(DomainError::EmptyField { field: "number" })
        );
        assert_eq!(
            Subscriber::new("", "Dan"),
            Err(DomainError::EmptyField { field: "number" })
        );
        assert_eq!(
            Subscriber::new("555", ""),
            Err(DomainError::EmptyField { field: "name" })
        );
    }

    #[test]
    fn test_delimiter_and_line_breaks_rejected() {
        assert!(matches!(
            Subscriber::new("5;55", "Dan"),
            Err(DomainError::ForbiddenCharacter { field: "number", .. })
        ));
        assert!(matches!(
            Subscriber::new("555", "Dan\nEve"),
            Err(DomainError::ForbiddenCharacter { field: "name", .. })
        ));
        assert!(matches!(
            Subscriber::new("55\r5", "Dan"),
            Err(DomainError::ForbiddenCharacter { field: "number", .. })
        ));
    }

    #[test]
    fn test_unicode_passes_through() {
        let subscriber = Subscriber::new("+7 900 000", "Иван").unwrap();
        assert_eq!(subscriber.name(), "Иван");
        assert_eq!(
            subscriber.into_parts(),
            ("+7 900 000".to_string(), "Иван".to_string())
        );
    }
}
