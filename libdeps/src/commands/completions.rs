use std::{io, path::PathBuf};

use clap::{Args, CommandFactory};
use eyre::{Context, Result};
use libdeps_core::File;

use super::Cli;

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    shell: clap_complete::Shell,

    /// Write the script to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();

        let Some(path) = &self.output else {
            clap_complete::generate(self.shell, &mut cmd, name, &mut io::stdout());
            return Ok(());
        };

        let mut buffer = Vec::new();
        clap_complete::generate(self.shell, &mut cmd, name, &mut buffer);
        let script = String::from_utf8(buffer).wrap_err("completion script is not UTF-8")?;

        File::new(path, script)
            .write()
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}
