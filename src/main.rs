//! Phonebook - Console Contact Directory
//!
//! Loads the phone book snapshot, then serves the add/find/delete menu on
//! stdin/stdout until the user exits.

use std::io;

use phonebook::application::PhoneBook;
use phonebook::infrastructure::{init_logging, AppConfig, FileRepository};
use phonebook::presentation::{Menu, Theme};

/// Entry point for the phone book console application.
///
/// The snapshot path comes from the first argument, then `PHONEBOOK_FILE`,
/// then `phonebook.txt` in the working directory.
///
/// # Errors
///
/// Returns an error if the console cannot be read or written. Snapshot
/// failures are logged and never end the process.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let config = AppConfig::from_env();
    tracing::debug!(path = %config.phonebook_path.display(), "starting phone book");

    let mut book = PhoneBook::open(FileRepository::new(config.phonebook_path));
    let mut menu = Menu::new(io::stdin().lock(), io::stdout()).with_theme(Theme::detect());
    menu.run(&mut book)?;

    Ok(())
}
