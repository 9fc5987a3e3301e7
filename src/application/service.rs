//! Phone book service coordinating the record store and its snapshot.
//!
//! A [`PhoneBook`] is built once per process and handed to whoever needs it.
//! It loads the snapshot when constructed and writes a fresh snapshot after
//! every successful mutation.

use tracing::info;

use crate::domain::{Directory, DomainResult, Subscriber};
use crate::infrastructure::{FileRepository, SnapshotStore};

/// The phone book: an in-memory [`Directory`] kept in sync with a [`SnapshotStore`].
///
/// # Examples
///
/// ```no_run
/// use phonebook::application::PhoneBook;
/// use phonebook::infrastructure::FileRepository;
///
/// let mut book = PhoneBook::open(FileRepository::new("phonebook.txt"));
/// book.add("555", "Dan").unwrap();
/// assert_eq!(book.find_name_by_number("555"), Some("Dan"));
/// assert!(book.remove("555"));
/// ```
#[derive(Debug)]
pub struct PhoneBook<S: SnapshotStore = FileRepository> {
    directory: Directory,
    store: S,
}

impl<S: SnapshotStore> PhoneBook<S> {
    /// Creates the phone book from whatever `store` currently holds.
    pub fn open(store: S) -> Self {
        let directory = store.load();
        Self { directory, store }
    }

    /// Adds a subscriber and saves the snapshot.
    ///
    /// # Errors
    ///
    /// Fails with [`DomainError::DuplicateKey`](crate::domain::DomainError::DuplicateKey)
    /// when the number is already taken, or with a validation error when a
    /// field is empty or contains a delimiter. Nothing is saved on failure.
    pub fn add(&mut self, number: impl Into<String>, name: impl Into<String>) -> DomainResult<()> {
        let subscriber = Subscriber::new(number, name)?;
        let number = subscriber.number().to_string();
        self.directory.insert(subscriber)?;
        info!(%number, "subscriber added");
        self.store.save(&self.directory);
        Ok(())
    }

    /// Removes the subscriber with `number`, saving only if something was removed.
    pub fn remove(&mut self, number: &str) -> bool {
        if self.directory.remove(number).is_none() {
            return false;
        }
        info!(%number, "subscriber removed");
        self.store.save(&self.directory);
        true
    }

    pub fn find_name_by_number(&self, number: &str) -> Option<&str> {
        self.directory.find_name_by_number(number)
    }

    pub fn find_numbers_by_name(&self, name: &str) -> Vec<&str> {
        self.directory.find_numbers_by_name(name)
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
