use clap::{Args, builder::NonEmptyStringValueParser};
use emugen_codegen::MockHeader;
use emugen_core::GeneratedFile;
use eyre::{Context, Result};

use super::Project;
use crate::reports::{GenerateReport, PreviewReport, Report, StubKind, TerminalOutput};

#[derive(Args)]
#[command(after_help = "Class names should be in PascalCase, e.g. `emugen mock -c TinyGsm`")]
pub struct MockCommand {
    /// PascalCase class name; the header declares Mock<CLASS>
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    class: String,

    /// Stub type (reserved for struct stubs, currently ignored)
    #[arg(short = 't', long = "type")]
    stub_type: Option<String>,

    /// Preview the header without writing to disk
    #[arg(long)]
    dry_run: bool,
}

impl MockCommand {
    pub fn run(&self, project: &Project) -> Result<()> {
        if let Some(stub_type) = &self.stub_type {
            log::warn!("stub type '{}' is not supported yet, ignoring", stub_type);
        }

        let header = MockHeader::new(&self.class);
        let dir = project.config.mocks_dir(&project.root);
        let path = header.path(&dir);
        log::debug!("mock {} with guard {}", header.class_name(), header.guard());

        let mut out = TerminalOutput::new();

        if self.dry_run {
            PreviewReport {
                path,
                content: header.render(),
            }
            .render(&mut out);
            return Ok(());
        }

        let replaced = path.exists();
        header
            .write(&dir)
            .wrap_err("Failed to write mock header")?;

        GenerateReport {
            kind: StubKind::Mock,
            path,
            replaced,
            created_dirs: Vec::new(),
        }
        .render(&mut out);

        Ok(())
    }
}
