//! Placement of test stubs below the tests directory.
//!
//! Directories are prepared before the target is chosen, so an aborted
//! resolution can still leave freshly created directories behind. Nothing is
//! ever deleted or overwritten.
//!
//! The existence check and the later write are separate filesystem calls.
//! Two concurrent runs aimed at the same file may both pass the check; which
//! content survives is undefined.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ResolveError {
    #[error("'{}' already exists", .path.display())]
    #[diagnostic(
        code(emugen::already_exists),
        help("existing tests are never overwritten; pick another test name or directory")
    )]
    AlreadyExists { path: PathBuf },

    #[error("sub-subdirectory '{sub_sub_dir}' given without a subdirectory")]
    #[diagnostic(
        code(emugen::missing_sub_dir),
        help("a sub-subdirectory is nested inside a subdirectory; pass both")
    )]
    MissingSubDir { sub_sub_dir: String },

    #[error("failed to create directory '{}'", .path.display())]
    #[diagnostic(code(emugen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where a test stub should go: the tests directory plus up to two levels.
///
/// Empty directory names count as not given.
#[derive(Debug, Clone)]
pub struct TestLocation {
    base: PathBuf,
    sub_dir: Option<String>,
    sub_sub_dir: Option<String>,
}

/// Outcome of a successful [`TestLocation::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Directory the file goes into
    pub dir: PathBuf,
    /// Full path of the file to create
    pub path: PathBuf,
    /// Directories created while resolving, outermost first
    pub created_dirs: Vec<PathBuf>,
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

impl TestLocation {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            sub_dir: None,
            sub_sub_dir: None,
        }
    }

    pub fn sub_dir(mut self, dir: impl Into<String>) -> Self {
        self.sub_dir = non_empty(dir.into());
        self
    }

    pub fn sub_sub_dir(mut self, dir: impl Into<String>) -> Self {
        self.sub_sub_dir = non_empty(dir.into());
        self
    }

    /// Directories that must exist before a file is placed, outermost first.
    ///
    /// The sub-subdirectory is only included when a subdirectory is given;
    /// a lone sub-subdirectory prepares just the base before `target` rejects it.
    fn required_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.base.clone()];
        if let Some(sub) = &self.sub_dir {
            let sub_path = self.base.join(sub);
            if let Some(sub_sub) = &self.sub_sub_dir {
                dirs.push(sub_path.clone());
                dirs.push(sub_path.join(sub_sub));
            } else {
                dirs.push(sub_path);
            }
        }
        dirs
    }

    /// Create each missing directory, one level at a time.
    ///
    /// Already existing directories are left alone, so calling this twice is
    /// harmless. Returns the directories that were actually created.
    pub fn ensure_dirs(&self) -> Result<Vec<PathBuf>, ResolveError> {
        let mut created = Vec::new();
        for dir in self.required_dirs() {
            if dir.exists() {
                continue;
            }
            fs::create_dir(&dir).map_err(|source| ResolveError::Io {
                path: dir.clone(),
                source,
            })?;
            log::debug!("created directory {}", dir.display());
            created.push(dir);
        }
        Ok(created)
    }

    /// Pick the target path for `file_name` without touching the filesystem.
    pub fn target(&self, file_name: &str) -> Result<PathBuf, ResolveError> {
        let dir = match (&self.sub_dir, &self.sub_sub_dir) {
            (Some(sub), Some(sub_sub)) => self.base.join(sub).join(sub_sub),
            (Some(sub), None) => self.base.join(sub),
            (None, None) => self.base.clone(),
            (None, Some(sub_sub)) => {
                return Err(ResolveError::MissingSubDir {
                    sub_sub_dir: sub_sub.clone(),
                });
            }
        };

        let path = dir.join(file_name);
        if path.exists() {
            return Err(ResolveError::AlreadyExists { path });
        }
        Ok(path)
    }

    /// Prepare directories, then pick the target path for `file_name`.
    pub fn resolve(&self, file_name: &str) -> Result<Resolved, ResolveError> {
        let created_dirs = self.ensure_dirs()?;
        let path = self.target(file_name)?;
        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.base.clone());

        log::debug!("resolved test stub path {}", path.display());
        Ok(Resolved {
            dir,
            path,
            created_dirs,
        })
    }
}
