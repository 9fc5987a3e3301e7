use std::ffi::OsString;
use std::path::PathBuf;

use super::persistence::DEFAULT_PHONEBOOK_FILE;

/// Environment variable that overrides the snapshot file location.
pub const PHONEBOOK_FILE_ENV: &str = "PHONEBOOK_FILE";

/// Runtime settings for the phone book binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub phonebook_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            phonebook_path: PathBuf::from(DEFAULT_PHONEBOOK_FILE),
        }
    }
}

impl AppConfig {
    /// Reads the first command-line argument and `PHONEBOOK_FILE`.
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::args_os().nth(1),
            std::env::var_os(PHONEBOOK_FILE_ENV),
        )
    }

    /// Picks the snapshot path: command-line argument, then environment, then default.
    /// Empty values count as unset. Paths are used as given, including any
    /// non-UTF-8 bytes or surrounding spaces.
    pub fn resolve(cli_path: Option<OsString>, env_path: Option<OsString>) -> Self {
        cli_path
            .into_iter()
            .chain(env_path)
            .find(|value| !value.is_empty())
            .map(|path| Self {
                phonebook_path: PathBuf::from(path),
            })
            .unwrap_or_default()
    }
}
