use thiserror::Error;

/// Errors raised by the record store and by subscriber construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("a subscriber with number {number} already exists")]
    DuplicateKey { number: String },
    #[error("subscriber {field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("subscriber {field} {value:?} starts or ends with whitespace")]
    SurroundingWhitespace { field: &'static str, value: String },
    #[error("subscriber {field} {value:?} contains a delimiter or line break")]
    ForbiddenCharacter { field: &'static str, value: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
