//! Storage for segment files.
//!
//! A [`Directory`] is a flat namespace of text files. [`LocalDirectory`] maps
//! it onto one filesystem directory; [`MemoryDirectory`] keeps everything in
//! process, which is what the tests and dry runs use.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{IndexError, IndexResult};

/// A flat collection of named text files.
pub trait Directory {
    /// Create `name` empty, truncating it if it exists.
    ///
    /// # Errors
    ///
    /// Fails if the backing store refuses the write.
    fn create_file(&mut self, name: &str) -> IndexResult<()>;

    /// Replace the contents of `name`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Fails if the backing store refuses the write.
    fn write_file(&mut self, name: &str, content: &str) -> IndexResult<()>;

    /// Read the whole of `name`.
    ///
    /// # Errors
    ///
    /// [`IndexError::FileNotFound`] if there is no such file.
    fn read_file(&self, name: &str) -> IndexResult<String>;

    /// Names of every file, sorted.
    ///
    /// # Errors
    ///
    /// Fails if the backing store cannot be listed.
    fn list_files(&self) -> IndexResult<Vec<String>>;
}

/// A directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalDirectory {
    root: PathBuf,
}

impl LocalDirectory {
    /// Create a fresh index directory at `path`.
    ///
    /// # Errors
    ///
    /// [`IndexError::DirectoryExists`] if anything already exists at `path`,
    /// [`IndexError::Io`] if it cannot be created.
    pub fn create(path: impl Into<PathBuf>) -> IndexResult<Self> {
        let root = path.into();
        if root.exists() {
            return Err(IndexError::DirectoryExists(root));
        }
        fs::create_dir_all(&root).map_err(|source| IndexError::Io {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    /// Open an existing index directory.
    ///
    /// # Errors
    ///
    /// [`IndexError::Io`] if `path` is not a readable directory.
    pub fn open(path: impl Into<PathBuf>) -> IndexResult<Self> {
        let root = path.into();
        let metadata = fs::metadata(&root).map_err(|source| IndexError::Io {
            path: root.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(IndexError::Io {
                path: root,
                source: ErrorKind::NotADirectory.into(),
            });
        }
        Ok(Self { root })
    }

    /// Where the files live.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.root
    }

    fn io_error(&self, name: &str) -> impl FnOnce(std::io::Error) -> IndexError {
        let path = self.root.join(name);
        move |source| IndexError::Io { path, source }
    }
}

impl Directory for LocalDirectory {
    fn create_file(&mut self, name: &str) -> IndexResult<()> {
        let _ = fs::File::create(self.root.join(name)).map_err(self.io_error(name))?;
        Ok(())
    }

    fn write_file(&mut self, name: &str, content: &str) -> IndexResult<()> {
        fs::write(self.root.join(name), content).map_err(self.io_error(name))
    }

    fn read_file(&self, name: &str) -> IndexResult<String> {
        match fs::read_to_string(self.root.join(name)) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(IndexError::FileNotFound(name.to_owned()))
            }
            Err(err) => Err(self.io_error(name)(err)),
        }
    }

    fn list_files(&self) -> IndexResult<Vec<String>> {
        let entries = fs::read_dir(&self.root).map_err(self.io_error(""))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(self.io_error(""))?;
            if entry.path().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// An in-process directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDirectory {
    files: BTreeMap<String, String>,
}

impl MemoryDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Directory for MemoryDirectory {
    fn create_file(&mut self, name: &str) -> IndexResult<()> {
        let _ = self.files.insert(name.to_owned(), String::new());
        Ok(())
    }

    fn write_file(&mut self, name: &str, content: &str) -> IndexResult<()> {
        let _ = self.files.insert(name.to_owned(), content.to_owned());
        Ok(())
    }

    fn read_file(&self, name: &str) -> IndexResult<String> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| IndexError::FileNotFound(name.to_owned()))
    }

    fn list_files(&self) -> IndexResult<Vec<String>> {
        Ok(self.files.keys().cloned().collect())
    }
}
