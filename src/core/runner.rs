//! Repository checking orchestration.
//!
//! This module drives a hook run: list the staged files, keep the Python
//! ones, check each against the configured threshold in listing order,
//! and report whether the commit may proceed. Everything is sequential;
//! the progress output and the aggregate verdict both depend on it.

use crate::config::Config;
use crate::core::checker;
use crate::core::error::Result;
use crate::core::executor::Executor;
use crate::core::git::GitRepo;
use crate::core::python;
use console::style;
use std::io::Write;

/// Result of checking a single file.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    /// Path of the checked file, relative to the repository root.
    pub path: String,
    /// Number of violations the checker reported.
    pub violations: usize,
    /// Whether the file stayed within the threshold.
    pub passed: bool,
}

/// Result of checking every staged Python file.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Per-file outcomes, in listing order.
    pub outcomes: Vec<FileOutcome>,
}

impl RunReport {
    /// Returns true if every checked file passed. A run with nothing to
    /// check passes trivially.
    #[must_use]
    pub fn success(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// Returns the number of files that passed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// Returns the number of files that failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed).count()
    }
}

/// Checker for the staged files of one repository.
#[derive(Debug)]
pub struct RepoChecker {
    config: Config,
    repo: GitRepo,
    executor: Executor,
}

impl RepoChecker {
    /// Creates a checker for the repository containing the current
    /// directory.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::with_repo(config, GitRepo::discover()?))
    }

    /// Creates a checker for a specific repository.
    #[must_use]
    pub fn with_repo(config: Config, repo: GitRepo) -> Self {
        Self {
            config,
            repo,
            executor: Executor::new(),
        }
    }

    /// Checks every staged Python file against the violation threshold.
    ///
    /// Returns the aggregate report; the caller decides process exit.
    /// Files that vanished since staging are skipped with a notice, and a
    /// failing file does not stop the remaining ones from being checked.
    pub fn run(&self) -> Result<RunReport> {
        let staged = self.repo.staged_files()?;
        tracing::debug!(count = staged.len(), "staged files listed");

        let python_files = self.filter_python_files(staged)?;

        if python_files.is_empty() {
            tracing::debug!("no Python files staged, nothing to check");
            return Ok(RunReport::default());
        }

        self.check_files(&python_files)
    }

    /// Keeps the staged paths that are Python sources.
    ///
    /// Vanished files get a skip notice; anything that is simply not
    /// Python is dropped silently.
    fn filter_python_files(&self, staged: Vec<String>) -> Result<Vec<String>> {
        let mut python_files = Vec::new();

        for path in staged {
            match python::is_python_file(&self.repo.root().join(&path)) {
                Ok(true) => python_files.push(path),
                Ok(false) => {}
                Err(e) if e.is_skippable() => {
                    tracing::warn!(%path, "staged file vanished before checking");
                    println!("File not found (probably deleted): {path}\t\tSKIPPED");
                }
                Err(e) => return Err(e),
            }
        }

        Ok(python_files)
    }

    /// Runs the checker over each file, printing progress as it goes.
    fn check_files(&self, python_files: &[String]) -> Result<RunReport> {
        let total = python_files.len();
        let max = self.config.max_violations_per_file;
        let mut outcomes = Vec::with_capacity(total);

        for (i, path) in python_files.iter().enumerate() {
            print!(
                "Running {} on {} (file {}/{})..\t",
                self.config.checker,
                path,
                i + 1,
                total
            );
            let _ = std::io::stdout().flush();

            let target = self.repo.root().join(path);
            let run = checker::run(&self.executor, &self.config, &target.to_string_lossy())?;

            let passed = run.violations <= max as usize;
            let verdict = if passed {
                style("PASSED").green()
            } else {
                style("FAILED").red()
            };

            println!("{} violations (max {}) - {}", run.violations, max, verdict);
            if !passed {
                println!("{}", run.output);
            }

            outcomes.push(FileOutcome {
                path: path.clone(),
                violations: run.violations,
                passed,
            });
        }

        Ok(RunReport { outcomes })
    }
}
