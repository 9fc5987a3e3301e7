use std::io::{self, BufRead};
use std::str::FromStr;

use thiserror::Error;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddSubscriber,
    FindByNumber,
    FindByName,
    DeleteSubscriber,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::AddSubscriber,
        MenuChoice::FindByNumber,
        MenuChoice::FindByName,
        MenuChoice::DeleteSubscriber,
        MenuChoice::Exit,
    ];

    pub fn key(self) -> u32 {
        match self {
            MenuChoice::AddSubscriber => 1,
            MenuChoice::FindByNumber => 2,
            MenuChoice::FindByName => 3,
            MenuChoice::DeleteSubscriber => 4,
            MenuChoice::Exit => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddSubscriber => "Add subscriber",
            MenuChoice::FindByNumber => "Find subscriber by number",
            MenuChoice::FindByName => "Find subscriber by name",
            MenuChoice::DeleteSubscriber => "Delete subscriber",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// A menu selection that could not be understood. The user is asked again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{0:?} is not a number")]
    NotANumber(String),
    #[error("there is no option {0}")]
    UnknownOption(u32),
}

impl FromStr for MenuChoice {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let key: u32 = trimmed
            .parse()
            .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.key() == key)
            .ok_or(InputError::UnknownOption(key))
    }
}

/// Reads one line and strips surrounding whitespace. Returns `None` at end of input.
///
/// Bytes that are not valid UTF-8 are replaced instead of failing the read.
pub fn read_trimmed_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
}
