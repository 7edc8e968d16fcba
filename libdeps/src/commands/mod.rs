mod completions;
mod export;
mod list;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use export::ExportCommand;
use list::ListCommand;
use tracing_subscriber::EnvFilter;

/// Extension trait for exiting on diagnostic errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for libdeps_model::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for libdeps_export::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "libdeps")]
#[command(version)]
#[command(about = "Export library link dependencies as a CMake script")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Show debug output (same as RUST_LOG=debug)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Export(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }

    /// Install the stderr log subscriber. `RUST_LOG` takes precedence over flags.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::new(self.filter_directives(std::env::var("RUST_LOG").ok()));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    }

    fn filter_directives(&self, rust_log: Option<String>) -> String {
        rust_log.unwrap_or_else(|| self.log_level().to_string())
    }

    fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write the dependency script: export <file> [APPEND]
    Export(ExportCommand),

    /// List library targets and their link dependencies
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_level_flags() {
        let cli = Cli::parse_from(["libdeps", "list"]);
        assert_eq!(cli.log_level(), "warn");

        let cli = Cli::parse_from(["libdeps", "-v", "list"]);
        assert_eq!(cli.log_level(), "debug");

        let cli = Cli::parse_from(["libdeps", "list", "--quiet"]);
        assert_eq!(cli.log_level(), "error");
    }

    #[test]
    fn test_rust_log_overrides_flags() {
        let cli = Cli::parse_from(["libdeps", "-v", "list"]);
        assert_eq!(
            cli.filter_directives(Some("libdeps_export=trace".to_string())),
            "libdeps_export=trace"
        );
        assert_eq!(cli.filter_directives(None), "debug");

        let cli = Cli::parse_from(["libdeps", "-q", "list"]);
        assert_eq!(cli.filter_directives(Some("info".to_string())), "info");
        assert_eq!(cli.filter_directives(None), "error");
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["libdeps", "-v", "-q", "list"]).is_err());
    }

    #[test]
    fn test_export_accepts_zero_positional_arguments() {
        // The usage error is raised by the exporter, not by clap
        assert!(Cli::try_parse_from(["libdeps", "export"]).is_ok());
    }
}
