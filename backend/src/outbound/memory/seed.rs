//! JSON seed documents for the in-memory directory.
//!
//! A seed file holds the three collections the service reads:
//!
//! ```json
//! {
//!   "users": [{"id": "u-1", "firstName": "Anna", "surname": "Olsen",
//!              "email": "anna@example.com", "studyFieldId": "sf-1"}],
//!   "pages": [{"id": "p-1", "name": "Westerdals Kor"}],
//!   "studyFields": [{"id": "sf-1", "name": "Programmering"}]
//! }
//! ```
//!
//! Every collection is optional.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Page, StudyField, User};

/// Errors returned while loading a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The file could not be opened or read.
    #[error("failed to read seed at {path}: {source}")]
    Read {
        /// Path to the seed file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid seed document.
    #[error("failed to parse seed at {path}: {source}")]
    Parse {
        /// Path to the seed file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Collections loaded from a seed file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Seed {
    /// Stored users.
    pub users: Vec<User>,
    /// Stored pages.
    pub pages: Vec<Page>,
    /// Study-field reference data.
    pub study_fields: Vec<StudyField>,
}

/// Read and parse the seed file at `path`.
pub fn load_seed(path: &Path) -> Result<Seed, SeedError> {
    let read_error = |source: std::io::Error| SeedError::Read {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "seed path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let payload = dir.read(Path::new(file_name)).map_err(read_error)?;
    serde_json::from_slice(&payload).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    fn write_seed(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write seed");
        file
    }

    #[rstest]
    fn loads_all_collections() {
        let file = write_seed(
            r#"{
                "users": [{"id": "u-1", "firstName": "Anna", "surname": "Olsen",
                           "email": "anna@example.com", "studyFieldId": "sf-1"}],
                "pages": [{"id": "p-1", "name": "Westerdals Kor"}],
                "studyFields": [{"id": "sf-1", "name": "Programmering"}]
            }"#,
        );

        let seed = load_seed(file.path()).expect("seed loads");

        assert_eq!(seed.users.len(), 1);
        assert_eq!(
            seed.users[0].study_field_id().map(AsRef::<str>::as_ref),
            Some("sf-1")
        );
        assert_eq!(seed.pages[0].name(), "Westerdals Kor");
        assert_eq!(seed.study_fields[0].name(), "Programmering");
    }

    #[rstest]
    fn missing_collections_default_to_empty() {
        let file = write_seed(r#"{"pages": []}"#);

        let seed = load_seed(file.path()).expect("seed loads");

        assert_eq!(seed, Seed::default());
    }

    #[rstest]
    fn malformed_json_is_a_parse_error() {
        let file = write_seed("{ not json");

        let err = load_seed(file.path()).expect_err("parse fails");

        assert!(matches!(err, SeedError::Parse { .. }));
    }

    #[rstest]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.json");

        let err = load_seed(&path).expect_err("read fails");

        assert!(matches!(err, SeedError::Read { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
