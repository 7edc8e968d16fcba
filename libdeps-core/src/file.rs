use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Strategy for putting rendered content at a destination path.
pub trait FileWriter {
    /// Write `content` to `path`.
    fn write(&self, path: &Path, content: &str) -> Result<WriteResult>;
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was replaced or created
    Written,
    /// Existing file already had the same content and was left alone
    Unchanged,
    /// Content was added after the existing file content
    Appended,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the file atomically, but only when the content differs
    #[default]
    CopyIfDifferent,
    /// Add to the end of whatever the file already holds
    Append,
}

impl WriteMode {
    /// Select the mode from the append flag of an invocation.
    pub fn from_append(append: bool) -> Self {
        if append {
            WriteMode::Append
        } else {
            WriteMode::CopyIfDifferent
        }
    }

    /// The writer implementing this mode.
    pub fn writer(self) -> Box<dyn FileWriter> {
        match self {
            WriteMode::CopyIfDifferent => Box::new(CopyIfDifferent),
            WriteMode::Append => Box::new(Append),
        }
    }
}

/// Writes to a temporary sibling file, then renames it over the destination
/// only if the bytes differ from what is already there.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyIfDifferent;

impl FileWriter for CopyIfDifferent {
    fn write(&self, path: &Path, content: &str) -> Result<WriteResult> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = tempfile::Builder::new()
            .prefix(".libdeps")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|source| Error::Open {
                path: path.to_path_buf(),
                source,
            })?;

        let write_err = |source: io::Error| Error::Write {
            path: path.to_path_buf(),
            source,
        };

        temp.write_all(content.as_bytes()).map_err(write_err)?;
        temp.flush().map_err(write_err)?;

        if same_content(path, content.as_bytes()) {
            tracing::debug!("{} is up to date", path.display());
            // Dropping the temp file removes it
            return Ok(WriteResult::Unchanged);
        }

        match_permissions(&temp, path).map_err(write_err)?;
        temp.persist(path).map_err(|e| write_err(e.error))?;
        Ok(WriteResult::Written)
    }
}

/// Opens the destination in append mode and writes after existing content.
#[derive(Debug, Clone, Copy, Default)]
pub struct Append;

impl FileWriter for Append {
    fn write(&self, path: &Path, content: &str) -> Result<WriteResult> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| Error::Open {
                path: path.to_path_buf(),
                source,
            })?;

        file.write_all(content.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(WriteResult::Appended)
    }
}

/// Unreadable or missing destinations count as different.
fn same_content(path: &Path, content: &[u8]) -> bool {
    fs::read(path).is_ok_and(|existing| existing == content)
}

fn match_permissions(temp: &NamedTempFile, dest: &Path) -> io::Result<()> {
    match fs::metadata(dest) {
        Ok(meta) => fs::set_permissions(temp.path(), meta.permissions()),
        Err(_) => default_permissions(temp.path()),
    }
}

#[cfg(unix)]
fn default_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}

/// A file to be generated
pub struct File {
    path: PathBuf,
    content: String,
    mode: WriteMode,
}

impl File {
    /// Create a new file with the given path and content (default mode: copy if different)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            mode: WriteMode::default(),
        }
    }

    /// Set the write mode
    pub fn with_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    /// Write the file according to its mode
    pub fn write(&self) -> Result<WriteResult> {
        self.mode.writer().write(&self.path, &self.content)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_from_append() {
        assert_eq!(WriteMode::from_append(true), WriteMode::Append);
        assert_eq!(WriteMode::from_append(false), WriteMode::CopyIfDifferent);
        assert_eq!(WriteMode::default(), WriteMode::CopyIfDifferent);
    }

    #[test]
    fn test_copy_if_different_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deps.cmake");

        let result = File::new(&path, "hello").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
        assert_eq!(entries(temp.path()), vec!["deps.cmake"]);
    }

    #[test]
    fn test_copy_if_different_replaces_changed_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deps.cmake");
        fs::write(&path, "first").unwrap();

        let result = File::new(&path, "second").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert_eq!(entries(temp.path()), vec!["deps.cmake"]);
    }

    #[test]
    fn test_copy_if_different_leaves_identical_file_alone() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deps.cmake");
        fs::write(&path, "same").unwrap();
        let before = fs::metadata(&path).unwrap().modified().unwrap();

        let result = File::new(&path, "same").write().unwrap();

        assert_eq!(result, WriteResult::Unchanged);
        let after = fs::metadata(&path).unwrap().modified().unwrap();
        assert_eq!(before, after);
        assert_eq!(entries(temp.path()), vec!["deps.cmake"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_if_different_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deps.cmake");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        File::new(&path, "new").write().unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }

    #[test]
    fn test_copy_if_different_missing_directory_is_open_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("deps.cmake");

        let err = File::new(&path, "content").write().unwrap_err();

        assert!(matches!(err, Error::Open { .. }));
        assert_eq!(err.path(), path.as_path());
        assert!(err.to_string().starts_with("Error Writing "));
        assert!(!path.exists());
    }

    #[test]
    fn test_append_creates_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deps.cmake");

        let result = File::new(&path, "block")
            .with_mode(WriteMode::Append)
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Appended);
        assert_eq!(fs::read_to_string(&path).unwrap(), "block");
    }

    #[test]
    fn test_append_preserves_existing_bytes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deps.cmake");
        fs::write(&path, "not even ( valid").unwrap();

        let file = File::new(&path, "+block").with_mode(WriteMode::Append);
        file.write().unwrap();
        file.write().unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "not even ( valid+block+block"
        );
    }

    #[test]
    fn test_append_missing_directory_is_open_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("deps.cmake");

        let err = Append.write(&path, "content").unwrap_err();

        assert!(matches!(err, Error::Open { .. }));
    }
}
