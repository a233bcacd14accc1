//! Style-checker invocation and violation counting.
//!
//! The external checker's output contract is one line on standard output
//! per reported violation, so counting violations is counting lines.

use crate::config::Config;
use crate::core::error::Result;
use crate::core::executor::Executor;

/// Outcome of running the checker against one file.
#[derive(Debug, Clone)]
pub struct CheckerRun {
    /// Number of violations the checker reported.
    pub violations: usize,
    /// Raw checker output, printed when the file fails.
    pub output: String,
}

/// Builds the checker command line for one file.
///
/// Custom parameters are forwarded verbatim, split on whitespace. The
/// `--config=` option is appended unless the custom parameters already
/// mention `--config` - a literal substring check, kept as-is because
/// alternate spellings of the same option are the user's responsibility.
/// The target path always goes last.
pub fn violation_command(config: &Config, path: &str) -> Vec<String> {
    let mut command = vec![config.checker.clone()];

    match &config.checker_params {
        Some(params) => {
            command.extend(params.split_whitespace().map(String::from));
            if !params.contains("--config") {
                command.push(format!("--config={}", config.config_file));
            }
        }
        None => {
            command.push(format!("--config={}", config.config_file));
        }
    }

    command.push(path.to_string());
    command
}

/// Counts violations in checker output: one per line, blank lines
/// included.
#[must_use]
pub fn count_violations(output: &str) -> usize {
    output.lines().count()
}

/// Runs the checker against one file and counts its reported violations.
///
/// The checker's exit status is deliberately ignored; pep8 exits nonzero
/// whenever it reports anything, and the threshold comparison belongs to
/// the caller. A spawn failure aborts the whole run.
pub fn run(executor: &Executor, config: &Config, path: &str) -> Result<CheckerRun> {
    let command = violation_command(config, path);
    tracing::debug!(?command, "running checker");

    let result = executor.execute(&command)?;
    let output = result.stdout_lossy().into_owned();

    Ok(CheckerRun {
        violations: count_violations(&output),
        output,
    })
}
