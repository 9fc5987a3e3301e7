//! Phonebook - Console Contact Directory Library
//!
//! A single-user phone book that keeps number/name pairs in memory and
//! mirrors them to a `;`-delimited text file after every change.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
