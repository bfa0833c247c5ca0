//! Project configuration read from `emugen.toml`.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use emugen_core::paths;
use miette::SourceSpan;
use serde::Deserialize;
use toml::Spanned;

use crate::{Error, Result};

/// Project layout for generated files.
///
/// Every value is optional in `emugen.toml`; a project without the file gets
/// [`Config::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub paths: PathsConfig,
}

/// Base directories, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathsConfig {
    /// Where mock headers are written
    pub mocks: PathBuf,
    /// Where test stubs (and their subdirectories) live
    pub tests: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            mocks: PathBuf::from(paths::MOCKS_DIR),
            tests: PathBuf::from(paths::TESTS_DIR),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    paths: RawPaths,
}

#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPaths {
    mocks: Option<Spanned<String>>,
    tests: Option<Spanned<String>>,
}

impl Config {
    /// File name looked up in the project root.
    pub const FILE_NAME: &'static str = "emugen.toml";

    /// Parse an emugen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Load `emugen.toml` from the project root, falling back to defaults when absent.
    pub fn discover(root: &Path) -> Result<Self> {
        let path = root.join(Self::FILE_NAME);
        if path.is_file() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Absolute mocks directory for a project root.
    pub fn mocks_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.mocks)
    }

    /// Absolute tests directory for a project root.
    pub fn tests_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.tests)
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, Config::FILE_NAME)
    }
}

fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let raw: RawConfig =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;

    let defaults = PathsConfig::default();
    let mocks = match raw.paths.mocks {
        Some(value) => validate_dir("mocks", value, content, filename)?,
        None => defaults.mocks,
    };
    let tests = match raw.paths.tests {
        Some(value) => validate_dir("tests", value, content, filename)?,
        None => defaults.tests,
    };

    Ok(Config {
        paths: PathsConfig { mocks, tests },
    })
}

fn validate_dir(key: &str, value: Spanned<String>, src: &str, filename: &str) -> Result<PathBuf> {
    let span: Option<SourceSpan> = Some(value.span().into());
    let dir = value.into_inner();

    if dir.trim().is_empty() {
        return Err(Error::validation_at(
            format!("paths.{} must not be empty", key),
            src,
            filename,
            span,
        ));
    }
    if Path::new(&dir).is_absolute() {
        return Err(Error::validation_at(
            format!("paths.{} must be relative to the project root", key),
            src,
            filename,
            span,
        ));
    }

    Ok(PathBuf::from(dir))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.paths.mocks, PathBuf::from("lib/Emulation/Mocks"));
        assert_eq!(config.paths.tests, PathBuf::from("test"));
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_str(
            r#"
            [paths]
            tests = "test/unit"
            "#,
        )
        .unwrap();

        assert_eq!(config.paths.mocks, PathBuf::from("lib/Emulation/Mocks"));
        assert_eq!(config.paths.tests, PathBuf::from("test/unit"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::from_str(
            r#"
            [paths]
            fixtures = "x"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_empty_dir_rejected() {
        let err = Config::from_str(
            r#"
            [paths]
            mocks = "  "
            "#,
        )
        .unwrap_err();

        match *err {
            Error::Validation { message, span, .. } => {
                assert_eq!(message, "paths.mocks must not be empty");
                assert!(span.is_some());
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_absolute_dir_rejected() {
        let err = Config::from_str(
            r#"
            [paths]
            tests = "/tmp/tests"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_discover_without_file() {
        let temp = TempDir::new().unwrap();
        let config = Config::discover(temp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_discover_reads_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("emugen.toml"),
            "[paths]\nmocks = \"src/mocks\"\n",
        )
        .unwrap();

        let config = Config::discover(temp.path()).unwrap();
        assert_eq!(
            config.mocks_dir(temp.path()),
            temp.path().join("src").join("mocks")
        );
        assert_eq!(config.tests_dir(temp.path()), temp.path().join("test"));
    }
}
