//! Note-file naming, discovery, and backup.
//!
//! A notes directory holds one file per day, named by date
//! (`note.2020.Jun.07.txt`). The helpers here locate today's file or the
//! most recent one and make the `.backup` safety copy before a rewrite;
//! reading and writing the files themselves is left to the caller.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// File-name pattern for daily notes, e.g. `note.2020.Jun.07.txt`.
pub const NOTE_FILE_FORMAT: &str = "note.%Y.%b.%d.txt";

/// Name of the safety copy written before a note is rewritten in place.
pub const BACKUP_FILE_NAME: &str = ".backup";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("notes directory not found: {0}")]
    NotesDirNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// File name for the note of `date`.
pub fn note_file_name(date: NaiveDate) -> String {
    date.format(NOTE_FILE_FORMAT).to_string()
}

/// Path of the note for `date` inside `notes_dir`.
pub fn note_path(notes_dir: &Path, date: NaiveDate) -> PathBuf {
    notes_dir.join(note_file_name(date))
}

/// Finds the newest note in `notes_dir`, judged by the date encoded in
/// the file name. Entries that do not match the note naming pattern are
/// ignored. `Ok(None)` when the directory holds no notes at all.
pub fn most_recent_note(notes_dir: &Path) -> Result<Option<PathBuf>, IoError> {
    if !notes_dir.is_dir() {
        return Err(IoError::NotesDirNotFound(notes_dir.to_path_buf()));
    }

    let mut newest: Option<(NaiveDate, PathBuf)> = None;
    for entry in fs::read_dir(notes_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let Ok(date) = NaiveDate::parse_from_str(name, NOTE_FILE_FORMAT) else {
            continue;
        };
        if newest.as_ref().map_or(true, |(latest, _)| date > *latest) {
            newest = Some((date, entry.path()));
        }
    }
    Ok(newest.map(|(_, path)| path))
}

/// Copies the note for `date` to the `.backup` file. A missing source is
/// fine; the first write of a day has nothing to back up.
pub fn back_up(notes_dir: &Path, date: NaiveDate) -> Result<(), IoError> {
    let source = note_path(notes_dir, date);
    if !source.exists() {
        return Ok(());
    }
    fs::copy(&source, notes_dir.join(BACKUP_FILE_NAME))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn note_names_encode_the_date() {
        assert_eq!(note_file_name(date(2020, 6, 7)), "note.2020.Jun.07.txt");
        assert_eq!(note_file_name(date(2021, 12, 25)), "note.2021.Dec.25.txt");
    }

    #[test]
    fn most_recent_note_picks_the_latest_date() {
        let dir = TempDir::new().unwrap();
        for name in [
            "note.2020.Jun.05.txt",
            "note.2020.Jun.07.txt",
            "note.2020.Jun.06.txt",
            "unrelated.txt",
            ".backup",
        ] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let newest = most_recent_note(dir.path()).unwrap().unwrap();
        assert_eq!(newest, dir.path().join("note.2020.Jun.07.txt"));
    }

    #[test]
    fn most_recent_note_is_none_without_notes() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("unrelated.txt"), "").unwrap();
        assert_eq!(most_recent_note(dir.path()).unwrap(), None);
    }

    #[test]
    fn most_recent_note_requires_the_directory() {
        let missing = Path::new("/this/path/does/not/exist");
        assert!(matches!(
            most_recent_note(missing),
            Err(IoError::NotesDirNotFound(_))
        ));
    }

    #[test]
    fn back_up_copies_todays_note() {
        let dir = TempDir::new().unwrap();
        let today = date(2020, 6, 7);
        fs::write(note_path(dir.path(), today), "contents").unwrap();

        back_up(dir.path(), today).unwrap();

        let backup = fs::read_to_string(dir.path().join(BACKUP_FILE_NAME)).unwrap();
        assert_eq!(backup, "contents");
    }

    #[test]
    fn back_up_without_a_source_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        back_up(dir.path(), date(2020, 6, 7)).unwrap();
        assert!(!dir.path().join(BACKUP_FILE_NAME).exists());
    }
}
