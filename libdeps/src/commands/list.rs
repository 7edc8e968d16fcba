use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use libdeps_model::Project;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to the project description (defaults to ./libdeps.toml)
    #[arg(short, long, default_value = "libdeps.toml")]
    pub project: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let project = Project::from_file(&self.project).unwrap_or_exit();
        ops::list(&project).render(&mut TerminalOutput::new());
        Ok(())
    }
}
