use std::{fs, io, path::{Path, PathBuf}};

use crate::backend::{KeyValueStore, Result};

/// Keeps each key in its own `<key>.json` file under a directory.
pub struct FileKvStore {
    directory: PathBuf
}

impl FileKvStore {
    pub fn new(directory: impl AsRef<Path>) -> FileKvStore {
        FileKvStore { directory: directory.as_ref().to_path_buf() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into())
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.directory)?;

        // write aside and rename so a crash never leaves half a file
        let path = self.path_for(key);
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value)?;
        fs::rename(&staging, &path)?;
        return Ok(());
    }
}


#[cfg(test)]
mod tests {
    use crate::backend::{FileKvStore, KeyValueStore};
    use rstest::rstest;

    #[rstest]
    fn missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKvStore::new(dir.path());
        assert!(store.get("transactions").unwrap().is_none());
    }

    #[rstest]
    fn set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKvStore::new(dir.path().join("nested"));

        store.set("transactions", "[]").unwrap();
        store.set("transactions", "[1]").unwrap();

        assert_eq!(store.get("transactions").unwrap().as_deref(), Some("[1]"));
        assert!(store.path_for("transactions").exists());
        assert!(!store.path_for("transactions").with_extension("json.tmp").exists());
    }

    #[rstest]
    fn unwritable_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();

        let store = FileKvStore::new(&blocker);
        assert!(store.set("transactions", "[]").is_err());
    }
}
