//! Reports for the mock and test generators.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Which generator produced a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubKind {
    Mock,
    Test,
}

impl StubKind {
    fn label(self) -> &'static str {
        match self {
            Self::Mock => "Mock",
            Self::Test => "Test",
        }
    }
}

/// Report data from writing a stub.
#[derive(Debug)]
pub struct GenerateReport {
    pub kind: StubKind,
    /// The written file.
    pub path: PathBuf,
    /// Whether an existing file was replaced.
    pub replaced: bool,
    /// Directories created on the way.
    pub created_dirs: Vec<PathBuf>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.replaced {
            out.warning(&format!("replaced existing {}", self.path.display()));
        }

        if !self.created_dirs.is_empty() {
            out.section("Created directories");
            for dir in &self.created_dirs {
                out.added_item(&dir.display().to_string());
            }
            out.newline();
        }

        out.preformatted(&format!("{} stub generated...", self.kind.label()));
        out.added_item(&self.path.display().to_string());
    }
}

/// Report data for `--dry-run`.
#[derive(Debug)]
pub struct PreviewReport {
    /// Where the file would be written.
    pub path: PathBuf,
    pub content: String,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        out.divider(&self.path.display().to_string());
        out.preformatted(&self.content);
        out.divider("Summary");
        out.preformatted("1 file would be generated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorded(Vec<String>);

    impl Output for Recorded {
        fn section(&mut self, name: &str) {
            self.0.push(format!("section {}", name));
        }

        fn added_item(&mut self, text: &str) {
            self.0.push(format!("+ {}", text));
        }

        fn warning(&mut self, msg: &str) {
            self.0.push(format!("warning {}", msg));
        }

        fn divider(&mut self, label: &str) {
            self.0.push(format!("-- {}", label));
        }

        fn preformatted(&mut self, text: &str) {
            self.0.push(text.to_string());
        }

        fn newline(&mut self) {
            self.0.push(String::new());
        }
    }

    #[test]
    fn test_mock_report() {
        let mut out = Recorded::default();
        GenerateReport {
            kind: StubKind::Mock,
            path: PathBuf::from("lib/Emulation/Mocks/MockFoo.hpp"),
            replaced: false,
            created_dirs: Vec::new(),
        }
        .render(&mut out);

        assert_eq!(
            out.0,
            ["Mock stub generated...", "+ lib/Emulation/Mocks/MockFoo.hpp"]
        );
    }

    #[test]
    fn test_replaced_mock_warns() {
        let mut out = Recorded::default();
        GenerateReport {
            kind: StubKind::Mock,
            path: PathBuf::from("MockFoo.hpp"),
            replaced: true,
            created_dirs: Vec::new(),
        }
        .render(&mut out);

        assert_eq!(out.0[0], "warning replaced existing MockFoo.hpp");
    }

    #[test]
    fn test_test_report_lists_created_dirs() {
        let mut out = Recorded::default();
        GenerateReport {
            kind: StubKind::Test,
            path: PathBuf::from("test/net/test_x.cpp"),
            replaced: false,
            created_dirs: vec![PathBuf::from("test/net")],
        }
        .render(&mut out);

        assert_eq!(
            out.0,
            [
                "section Created directories",
                "+ test/net",
                "",
                "Test stub generated...",
                "+ test/net/test_x.cpp",
            ]
        );
    }

    #[test]
    fn test_preview_report() {
        let mut out = Recorded::default();
        PreviewReport {
            path: PathBuf::from("test/test_x.cpp"),
            content: "body".to_string(),
        }
        .render(&mut out);

        assert_eq!(
            out.0,
            [
                "-- test/test_x.cpp",
                "body",
                "-- Summary",
                "1 file would be generated",
            ]
        );
    }
}
