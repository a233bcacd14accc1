//! Command-line interface for git-pep8-hook.
//!
//! The hook is a single command: parse flags, resolve the configuration
//! snapshot, check the staged files, and map the aggregate verdict to a
//! process exit code.

use crate::config::Config;
use crate::core::error::Result;
use crate::core::executor::Executor;
use crate::core::runner::RepoChecker;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Git pre-commit hook that blocks commits on pep8 style violations.
#[derive(Debug, Parser)]
#[command(
    name = "pep8-hook",
    author,
    version,
    about = "Git pre-commit hook that blocks commits on pep8 style violations",
    long_about = r#"
pep8-hook checks every Python file staged for commit with a pep8-style
checker and blocks the commit when any file reports more violations than
the configured per-file maximum.

Options in the [pep8_pre_commit_hook] section of the config file (by
default setup.cfg) override the command line: recognized keys are
`command`, `params` and `max-violations-per-file`.
"#
)]
pub struct Cli {
    /// Maximum number of violations. Files with a higher violation count
    /// will stop the commit.
    #[arg(long, default_value_t = 0)]
    pub max_violations_per_file: u32,

    /// Path to pep8 executable.
    #[arg(long = "pep8", default_value = "pep8", value_name = "PATH")]
    pub pep8: String,

    /// Path to pep8 config file. Options in the config will override the
    /// command line parameters.
    #[arg(long, default_value = "setup.cfg", value_name = "PATH")]
    pub config: String,

    /// Custom pep8 parameters to add to the pep8 command.
    #[arg(long = "pep8-params", value_name = "PARAMS", allow_hyphen_values = true)]
    pub pep8_params: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Use color output.
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Always use color.
    Always,
    /// Auto-detect color support.
    #[default]
    Auto,
    /// Never use color.
    Never,
}

/// Runs the hook.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);
    setup_color(cli.color);

    let config = Config::resolve(
        cli.pep8,
        cli.max_violations_per_file,
        cli.pep8_params,
        cli.config,
    )?;

    if !Executor::command_exists(&config.checker) {
        tracing::debug!(checker = %config.checker, "checker not found on PATH, launch may fail");
    }

    let report = RepoChecker::new(config)?.run()?;

    if report.success() {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::debug!(failed = report.failed_count(), "blocking commit");
        Ok(ExitCode::FAILURE)
    }
}

/// Sets up logging based on verbosity flags.
fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Sets up color output.
fn setup_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => {
            console::set_colors_enabled(true);
            console::set_colors_enabled_stderr(true);
        }
        ColorChoice::Never => {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }
        ColorChoice::Auto => {
            // Let console crate auto-detect
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_version() {
        let cli = Cli::try_parse_from(["pep8-hook", "--version"]);
        assert!(cli.is_err()); // --version causes early exit
    }

    #[test]
    fn test_cli_help() {
        let cli = Cli::try_parse_from(["pep8-hook", "--help"]);
        assert!(cli.is_err()); // --help causes early exit
    }

    // =========================================================================
    // Flag parsing tests
    // =========================================================================

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["pep8-hook"]).expect("parse");
        assert_eq!(cli.max_violations_per_file, 0);
        assert_eq!(cli.pep8, "pep8");
        assert_eq!(cli.config, "setup.cfg");
        assert_eq!(cli.pep8_params, None);
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_max_violations() {
        let cli = Cli::try_parse_from(["pep8-hook", "--max-violations-per-file", "5"])
            .expect("parse");
        assert_eq!(cli.max_violations_per_file, 5);
    }

    #[test]
    fn test_parse_max_violations_rejects_negative() {
        let result = Cli::try_parse_from(["pep8-hook", "--max-violations-per-file", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_checker_path() {
        let cli =
            Cli::try_parse_from(["pep8-hook", "--pep8", "/opt/bin/pycodestyle"]).expect("parse");
        assert_eq!(cli.pep8, "/opt/bin/pycodestyle");
    }

    #[test]
    fn test_parse_config_path() {
        let cli = Cli::try_parse_from(["pep8-hook", "--config", "tox.ini"]).expect("parse");
        assert_eq!(cli.config, "tox.ini");
    }

    #[test]
    fn test_parse_pep8_params() {
        let cli = Cli::try_parse_from(["pep8-hook", "--pep8-params", "--statistics -v"])
            .expect("parse");
        assert_eq!(cli.pep8_params.as_deref(), Some("--statistics -v"));
    }

    #[test]
    fn test_parse_verbose_flag() {
        let cli = Cli::try_parse_from(["pep8-hook", "--verbose"]).expect("parse");
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_quiet_flag() {
        let cli = Cli::try_parse_from(["pep8-hook", "-q"]).expect("parse");
        assert!(cli.quiet);
    }

    // =========================================================================
    // ColorChoice tests
    // =========================================================================

    #[test]
    fn test_parse_color_always() {
        let cli = Cli::try_parse_from(["pep8-hook", "--color", "always"]).expect("parse");
        assert_eq!(cli.color, ColorChoice::Always);
    }

    #[test]
    fn test_parse_color_never() {
        let cli = Cli::try_parse_from(["pep8-hook", "--color", "never"]).expect("parse");
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn test_parse_color_auto_default() {
        let cli = Cli::try_parse_from(["pep8-hook"]).expect("parse");
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn test_parse_color_invalid() {
        let result = Cli::try_parse_from(["pep8-hook", "--color", "rainbow"]);
        assert!(result.is_err());
    }
}
