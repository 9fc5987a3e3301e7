//! In-memory record store for the phone book.
//!
//! The directory maps phone numbers to subscriber names. Numbers are unique
//! keys; names may repeat. Entries keep the order in which they were added,
//! which is also the order they are written to disk.

use std::collections::HashMap;

use super::errors::{DomainError, DomainResult};
use super::models::Subscriber;

/// Unique-by-number collection of subscribers.
///
/// # Examples
///
/// ```
/// use phonebook::domain::{Directory, DomainError, Subscriber};
///
/// let mut directory = Directory::new();
/// directory.insert(Subscriber::new("555", "Dan").unwrap()).unwrap();
/// directory.insert(Subscriber::new("777", "Dan").unwrap()).unwrap();
///
/// assert_eq!(directory.find_name_by_number("555"), Some("Dan"));
/// assert_eq!(directory.find_numbers_by_name("Dan"), vec!["555", "777"]);
///
/// let duplicate = directory.insert(Subscriber::new("555", "Eve").unwrap());
/// assert!(matches!(duplicate, Err(DomainError::DuplicateKey { .. })));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Directory {
    entries: Vec<Subscriber>,
    positions: HashMap<String, usize>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a subscriber whose number is not yet present.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicateKey`] if the number is already stored.
    /// The directory is left untouched in that case.
    pub fn insert(&mut self, subscriber: Subscriber) -> DomainResult<()> {
        if self.positions.contains_key(subscriber.number()) {
            return Err(DomainError::DuplicateKey {
                number: subscriber.number().to_string(),
            });
        }
        self.positions
            .insert(subscriber.number().to_string(), self.entries.len());
        self.entries.push(subscriber);
        Ok(())
    }

    /// Removes the subscriber with the given number.
    ///
    /// Returns the removed subscriber, or `None` when the number is unknown.
    pub fn remove(&mut self, number: &str) -> Option<Subscriber> {
        let index = self.positions.remove(number)?;
        let removed = self.entries.remove(index);
        // Everything after the hole shifted left by one.
        for subscriber in &self.entries[index..] {
            if let Some(position) = self.positions.get_mut(subscriber.number()) {
                *position -= 1;
            }
        }
        Some(removed)
    }

    /// Looks up the name stored for an exact-match number.
    pub fn find_name_by_number(&self, number: &str) -> Option<&str> {
        self.positions
            .get(number)
            .map(|&index| self.entries[index].name())
    }

    /// Returns every number whose name equals `name` exactly, in insertion order.
    pub fn find_numbers_by_name(&self, name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|subscriber| subscriber.name() == name)
            .map(Subscriber::number)
            .collect()
    }

    pub fn contains(&self, number: &str) -> bool {
        self.positions.contains_key(number)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all subscribers in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Subscriber> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Subscriber;
    type IntoIter = std::slice::Iter<'a, Subscriber>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscriber(number: &str, name: &str) -> Subscriber {
        Subscriber::new(number, name).unwrap()
    }

    fn directory_with(entries: &[(&str, &str)]) -> Directory {
        let mut directory = Directory::new();
        for (number, name) in entries {
            directory.insert(subscriber(number, name)).unwrap();
        }
        directory
    }

    #[test]
    fn test_new_directory_is_empty() {
        let directory = Directory::new();
        assert!(directory.is_empty());
        assert_eq!(directory.len(), 0);
        assert_eq!(directory.find_name_by_number("555"), None);
        assert!(directory.find_numbers_by_name("Dan").is_empty());
    }

    #[test]
    fn test_distinct_inserts_are_all_findable() {
        let entries = [("100", "Alice"), ("200", "Bob"), ("300", "Carol")];
        let directory = directory_with(&entries);

        assert_eq!(directory.len(), 3);
        for (number, name) in entries {
            assert!(directory.contains(number));
            assert_eq!(directory.find_name_by_number(number), Some(name));
        }
    }

    #[test]
    fn test_duplicate_insert_leaves_directory_unchanged() {
        let mut directory = directory_with(&[("555", "Dan")]);

        let result = directory.insert(subscriber("555", "Eve"));

        assert_eq!(
            result,
            Err(DomainError::DuplicateKey {
                number: "555".to_string()
            })
        );
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.find_name_by_number("555"), Some("Dan"));
        assert!(directory.find_numbers_by_name("Eve").is_empty());
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let directory = directory_with(&[("555", "Dan")]);

        assert_eq!(directory.find_name_by_number(" 555"), None);
        assert_eq!(directory.find_name_by_number("5550"), None);
        assert!(directory.find_numbers_by_name("dan").is_empty());
        assert!(directory.find_numbers_by_name("Dan ").is_empty());
    }

    #[test]
    fn test_find_numbers_by_shared_name() {
        let directory = directory_with(&[
            ("100", "Alice"),
            ("200", "Bob"),
            ("300", "Alice"),
            ("400", "Alice"),
        ]);

        assert_eq!(directory.find_numbers_by_name("Alice"), vec!["100", "300", "400"]);
        assert_eq!(directory.find_numbers_by_name("Bob"), vec!["200"]);
        assert!(directory.find_numbers_by_name("Zed").is_empty());
    }

    #[test]
    fn test_remove_absent_number() {
        let mut directory = directory_with(&[("555", "Dan")]);

        assert_eq!(directory.remove("777"), None);
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.find_name_by_number("555"), Some("Dan"));
    }

    #[test]
    fn test_remove_present_number_removes_only_that_entry() {
        let mut directory = directory_with(&[("100", "Alice"), ("200", "Bob"), ("300", "Carol")]);

        assert_eq!(directory.remove("200"), Some(subscriber("200", "Bob")));

        assert_eq!(directory.len(), 2);
        assert!(!directory.contains("200"));
        assert_eq!(directory.find_name_by_number("100"), Some("Alice"));
        assert_eq!(directory.find_name_by_number("300"), Some("Carol"));
    }

    #[test]
    fn test_remove_keeps_order_and_positions_consistent() {
        let mut directory =
            directory_with(&[("1", "A"), ("2", "B"), ("3", "C"), ("4", "D")]);

        directory.remove("1");
        directory.remove("3");
        directory.insert(subscriber("5", "E")).unwrap();

        let numbers: Vec<&str> = directory.iter().map(Subscriber::number).collect();
        assert_eq!(numbers, vec!["2", "4", "5"]);
        assert_eq!(directory.find_name_by_number("2"), Some("B"));
        assert_eq!(directory.find_name_by_number("4"), Some("D"));
        assert_eq!(directory.find_name_by_number("5"), Some("E"));
        assert_eq!(directory.remove("4"), Some(subscriber("4", "D")));
        assert_eq!(directory.find_name_by_number("5"), Some("E"));
    }

    #[test]
    fn test_number_can_be_reused_after_removal() {
        let mut directory = directory_with(&[("555", "Dan")]);

        directory.remove("555");

        assert!(directory.insert(subscriber("555", "Eve")).is_ok());
        assert_eq!(directory.find_name_by_number("555"), Some("Eve"));
    }

    #[test]
    fn test_into_iterator_yields_insertion_order() {
        let directory = directory_with(&[("300", "Carol"), ("100", "Alice")]);

        let names: Vec<&str> = (&directory).into_iter().map(Subscriber::name).collect();
        assert_eq!(names, vec!["Carol", "Alice"]);
    }
}
