//! Flat-file snapshot storage for the phone book.
//!
//! The snapshot is plain text, one `number;name` record per line, with no
//! header and no quoting. Reading is lenient: blank and malformed lines are
//! skipped, and a repeated number keeps its first occurrence.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use csv::{ByteRecord, QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::domain::{Directory, FIELD_DELIMITER, Subscriber};

/// Snapshot file used when nothing else is configured.
pub const DEFAULT_PHONEBOOK_FILE: &str = "phonebook.txt";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("snapshot could not be read: {0}")]
    Csv(#[from] csv::Error),
}

/// Storage backend holding the full snapshot of a [`Directory`].
///
/// Implementations absorb their own failures: `load` falls back to an empty
/// directory and `save` leaves the previous snapshot in place, reporting the
/// problem through the log.
pub trait SnapshotStore {
    fn load(&self) -> Directory;
    fn save(&self, directory: &Directory);
}

/// Snapshot store backed by a single text file that is rewritten on every save.
#[derive(Debug, Clone)]
pub struct FileRepository {
    path: PathBuf,
}

impl FileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the snapshot file. A missing file is an empty directory.
    pub fn try_load(&self) -> Result<Directory, PersistenceError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot file yet");
                return Ok(Directory::new());
            }
            Err(e) => return Err(e.into()),
        };
        read_snapshot(file)
    }

    /// Overwrites the snapshot file with the full contents of `directory`.
    pub fn try_save(&self, directory: &Directory) -> Result<(), PersistenceError> {
        let file = File::create(&self.path)?;
        write_snapshot(file, directory)
    }
}

impl Default for FileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_PHONEBOOK_FILE)
    }
}

impl SnapshotStore for FileRepository {
    fn load(&self) -> Directory {
        match self.try_load() {
            Ok(directory) => {
                info!(path = %self.path.display(), subscribers = directory.len(), "phone book loaded");
                directory
            }
            Err(err) => {
                error!(path = %self.path.display(), %err, "failed to load phone book, starting empty");
                Directory::new()
            }
        }
    }

    fn save(&self, directory: &Directory) {
        match self.try_save(directory) {
            Ok(()) => {
                debug!(path = %self.path.display(), subscribers = directory.len(), "phone book saved")
            }
            Err(err) => {
                error!(path = %self.path.display(), %err, "failed to save phone book, file may be stale")
            }
        }
    }
}

/// Parses a snapshot from any reader.
///
/// Lines that are not valid UTF-8 are decoded lossily rather than failing the
/// whole load, so one damaged line never hides the rest of the file.
pub fn read_snapshot<R: Read>(source: R) -> Result<Directory, PersistenceError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER as u8)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(source);

    let mut directory = Directory::new();
    let mut record = ByteRecord::new();
    while reader.read_byte_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let fields: Vec<Cow<'_, str>> = record.iter().map(String::from_utf8_lossy).collect();
        if fields.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        if fields.iter().any(|field| matches!(field, Cow::Owned(_))) {
            warn!(line, "snapshot line is not valid UTF-8, invalid bytes replaced");
        }
        let Some(subscriber) = parse_fields(&fields) else {
            debug!(line, "skipping malformed snapshot line");
            continue;
        };
        if let Err(err) = directory.insert(subscriber) {
            warn!(line, %err, "skipping repeated number in snapshot, keeping the first entry");
        }
    }
    Ok(directory)
}

/// Writes every subscriber in `directory` as a `number;name` line.
pub fn write_snapshot<W: Write>(sink: W, directory: &Directory) -> Result<(), PersistenceError> {
    let mut writer = WriterBuilder::new()
        .delimiter(FIELD_DELIMITER as u8)
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink);

    for subscriber in directory {
        writer.serialize(subscriber)?;
    }
    writer.flush()?;
    Ok(())
}

// Only the first two fields count. Each is trimmed, which also covers
// whitespace around the whole line.
fn parse_fields(fields: &[Cow<'_, str>]) -> Option<Subscriber> {
    let number = fields.first()?.trim();
    let name = fields.get(1)?.trim();
    Subscriber::new(number, name).ok()
}
