mod completions;
mod mock;
mod test_stub;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use emugen_codegen::ResolveError;
use emugen_manifest::Config;
use eyre::{Result, bail};
use miette::Diagnostic;
use mock::MockCommand;
use test_stub::TestCommand;

/// Print a diagnostic with pretty formatting and exit with status 1
pub(crate) fn exit_with<E>(err: E) -> !
where
    E: Diagnostic + Send + Sync + 'static,
{
    eprintln!("{:?}", miette::Report::new(err));
    std::process::exit(1);
}

/// Extension trait for exiting on domain errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for emugen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with(*e),
        }
    }
}

impl<T> UnwrapOrExit<T> for std::result::Result<T, ResolveError> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with(e),
        }
    }
}

/// Project root and its emugen.toml
pub(crate) struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    fn load(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            bail!("Project root '{}' is not a directory", root.display());
        }

        let config = Config::discover(root).unwrap_or_exit();
        log::debug!(
            "project root {}, mocks in {}, tests in {}",
            root.display(),
            config.paths.mocks.display(),
            config.paths.tests.display()
        );

        Ok(Self {
            root: root.to_path_buf(),
            config,
        })
    }
}

#[derive(Parser)]
#[command(name = "emugen")]
#[command(version)]
#[command(about = "Generate mock headers and test stubs for emulated embedded tests")]
pub(crate) struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root that generated paths are relative to
    #[arg(long, global = true, default_value = ".")]
    pub project_root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Mock(cmd) => cmd.run(&Project::load(&self.project_root)?),
            Commands::Test(cmd) => cmd.run(&Project::load(&self.project_root)?),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an empty mock class header
    Mock(MockCommand),

    /// Generate an empty unit test stub
    Test(TestCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
