use clap::Args;
use emugen_codegen::{ResolveError, TestLocation, TestStub};
use emugen_core::{GeneratedFile, WriteResult};
use eyre::{Context, Result};

use super::{Project, UnwrapOrExit, exit_with};
use crate::reports::{GenerateReport, PreviewReport, Report, StubKind, TerminalOutput};

#[derive(Args)]
#[command(
    after_help = "Test names with spaces should be wrapped in quotes. The `test_` prefix is added for you."
)]
pub struct TestCommand {
    /// Test name, e.g. "Wifi Reconnect" for test_wifi_reconnect.cpp
    #[arg(short = 't', long = "testName", visible_alias = "test-name")]
    test_name: Option<String>,

    /// Directory directly under the tests directory
    #[arg(short = 's', long = "subDir", visible_alias = "sub-dir")]
    sub_dir: Option<String>,

    /// Directory under the subdirectory
    #[arg(short = 'S', long = "subSubDir", visible_alias = "sub-sub-dir")]
    sub_sub_dir: Option<String>,

    /// Preview the stub without creating directories or files
    #[arg(long)]
    dry_run: bool,
}

impl TestCommand {
    pub fn run(&self, project: &Project) -> Result<()> {
        let stub = TestStub::new(self.test_name.as_deref().unwrap_or_default());
        let file_name = stub.file_name();
        let location = TestLocation::new(project.config.tests_dir(&project.root))
            .sub_dir(self.sub_dir.as_deref().unwrap_or_default())
            .sub_sub_dir(self.sub_sub_dir.as_deref().unwrap_or_default());

        let mut out = TerminalOutput::new();

        if self.dry_run {
            let path = location.target(&file_name).unwrap_or_exit();
            PreviewReport {
                path,
                content: stub.render(),
            }
            .render(&mut out);
            return Ok(());
        }

        let resolved = location.resolve(&file_name).unwrap_or_exit();

        let result = stub
            .write(&resolved.dir)
            .wrap_err("Failed to write test stub")?;
        if result == WriteResult::Skipped {
            // Created between the check and the write.
            exit_with(ResolveError::AlreadyExists {
                path: resolved.path,
            });
        }

        GenerateReport {
            kind: StubKind::Test,
            path: resolved.path,
            replaced: false,
            created_dirs: resolved.created_dirs,
        }
        .render(&mut out);

        Ok(())
    }
}
