// src/storage/mod.rs
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::utils::error::StorageError;

#[derive(Debug)]
pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager rooted at the given directory,
    /// creating it if needed. A pre-existing directory is fine; a
    /// pre-existing regular file at that path is rejected.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        if base_path.exists() && !base_path.is_dir() {
            return Err(StorageError::NotADirectory(
                base_path.display().to_string(),
            ));
        }
        fs::create_dir_all(&base_path)?;

        Ok(Self { base_dir: base_path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Writes one record as `doc{index}.txt` (1-based index, no zero
    /// padding), replacing any previous file of that name. The file
    /// handle is scoped to this call and closed on every exit path.
    pub fn save_document(&self, index: usize, text: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("doc{}.txt", index));

        let mut file = fs::File::create(&file_path)?;
        file.write_all(text.as_bytes())?;

        Ok(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("out");

        let storage = StorageManager::new(&target).unwrap();

        assert!(target.is_dir());
        assert_eq!(storage.base_dir(), target.as_path());
    }

    #[test]
    fn existing_directory_is_accepted() {
        let dir = tempfile::tempdir().unwrap();

        StorageManager::new(dir.path()).unwrap();
        StorageManager::new(dir.path()).unwrap();
    }

    #[test]
    fn rejects_path_that_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("occupied");
        fs::write(&blocker, "not a directory").unwrap();

        let err = StorageManager::new(&blocker).unwrap_err();

        assert!(matches!(err, StorageError::NotADirectory(_)));
    }

    #[test]
    fn save_document_writes_full_text() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();

        let path = storage.save_document(3, "the whole record\nwith two lines").unwrap();

        assert_eq!(path, dir.path().join("doc3.txt"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "the whole record\nwith two lines"
        );
    }

    #[test]
    fn save_document_truncates_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();

        storage.save_document(1, "a much longer first version").unwrap();
        storage.save_document(1, "short").unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("doc1.txt")).unwrap(),
            "short"
        );
    }
}
