use super::error::simulated_io_error;
use crate::testing::TestReporter;
use chrono::{DateTime, Local};
use nix::sys::stat::Mode;
use std::collections::HashMap;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Metadata for one directory entry
#[derive(Debug, Clone, PartialEq)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    pub is_dir: bool,
    pub mode: Mode,
    pub modified: DateTime<Local>,
}

impl FileInfo {
    /// Entry with placeholder permissions and the current time as mtime
    pub fn new(name: impl Into<String>, size: u64, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            size,
            is_dir,
            mode: Mode::empty(),
            modified: Local::now(),
        }
    }

    fn from_entry(entry: &std::fs::DirEntry) -> io::Result<Self> {
        let metadata = entry.metadata()?;
        Ok(Self {
            name: entry.file_name().to_string_lossy().into_owned(),
            size: metadata.len(),
            is_dir: metadata.is_dir(),
            mode: Mode::from_bits_truncate(metadata.permissions().mode() as nix::libc::mode_t),
            modified: DateTime::from(metadata.modified()?),
        })
    }
}

/// Abstraction for filesystem access to enable testing without real files
pub trait DirReader {
    /// Entries of `dirname`, sorted by name
    fn read_dir(&self, dirname: &Path) -> io::Result<Vec<FileInfo>>;
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;
    /// The user's home directory, empty if unknown
    fn home_dir_path(&self) -> PathBuf;
}

/// Real directory reader using std::fs
#[derive(Debug, Clone, Copy, Default)]
pub struct RealDirReader;

impl DirReader for RealDirReader {
    fn read_dir(&self, dirname: &Path) -> io::Result<Vec<FileInfo>> {
        tracing::debug!(path = %dirname.display(), "reading directory");

        let mut entries = std::fs::read_dir(dirname)?
            .map(|entry| FileInfo::from_entry(&entry?))
            .collect::<io::Result<Vec<_>>>()?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        tracing::debug!(path = %path.display(), "reading file");
        std::fs::read(path)
    }

    fn home_dir_path(&self) -> PathBuf {
        std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default()
    }
}

/// Configurable stand-in for [`RealDirReader`]
///
/// Setting `expected_dirname` or `expected_filename` makes the mock check
/// every call's argument and report mismatches to `reporter`. Such an
/// expectation without a reporter is a broken test and panics.
///
/// Expected paths and `return_read_file_value_for_path` keys are compared
/// as [`Path`]s, i.e. component-wise: `/a/` matches `/a`, `/a/./b` matches
/// `/a/b`. No other normalisation (`..`, symlinks) happens.
#[derive(Default)]
pub struct MockDirReader<'a> {
    pub expected_dirname: Option<PathBuf>,
    pub expected_filename: Option<PathBuf>,
    pub reporter: Option<&'a dyn TestReporter>,
    pub should_error_read_dir: bool,
    pub should_error_read_file: bool,
    pub return_read_dir_value: Option<Vec<FileInfo>>,
    pub return_read_file_value: Option<Vec<u8>>,
    /// Consulted only when `return_read_file_value` is unset
    pub return_read_file_value_for_path: HashMap<PathBuf, Vec<u8>>,
    pub return_home_dir_path: Option<PathBuf>,
}

impl<'a> MockDirReader<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reporter(mut self, reporter: &'a dyn TestReporter) -> Self {
        self.reporter = Some(reporter);
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.return_read_file_value_for_path
            .insert(path.into(), contents.into());
        self
    }

    fn reporter(&self) -> &'a dyn TestReporter {
        match self.reporter {
            Some(reporter) => reporter,
            None => {
                panic!("MockDirReader needs to report a failure but has no reporter attached")
            }
        }
    }

    fn check_argument(&self, operation: &str, expected: Option<&Path>, actual: &Path) {
        let Some(expected) = expected else {
            return;
        };
        let reporter = self.reporter();
        if actual != expected {
            reporter.report_failure(format!(
                "path provided to {} was not the expected value. Expected {}, got {}",
                operation,
                expected.display(),
                actual.display()
            ));
        }
    }
}

impl DirReader for MockDirReader<'_> {
    fn read_dir(&self, dirname: &Path) -> io::Result<Vec<FileInfo>> {
        if self.should_error_read_dir {
            tracing::trace!(path = %dirname.display(), "mock read_dir forced to fail");
            return Err(simulated_io_error());
        }

        self.check_argument("read_dir", self.expected_dirname.as_deref(), dirname);

        Ok(self.return_read_dir_value.clone().unwrap_or_default())
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        if self.should_error_read_file {
            tracing::trace!(path = %path.display(), "mock read_file forced to fail");
            return Err(simulated_io_error());
        }

        self.check_argument("read_file", self.expected_filename.as_deref(), path);

        if let Some(contents) = &self.return_read_file_value {
            return Ok(contents.clone());
        }

        Ok(self
            .return_read_file_value_for_path
            .get(path)
            .cloned()
            .unwrap_or_default())
    }

    fn home_dir_path(&self) -> PathBuf {
        match &self.return_home_dir_path {
            Some(path) => path.clone(),
            None => {
                self.reporter().report_failure(String::from(
                    "home_dir_path was called but no return_home_dir_path was provided",
                ));
                PathBuf::new()
            }
        }
    }
}
