//! # git-pep8-hook
//!
//! Git pre-commit hook that gates commits on Python code style.
//!
//! The hook lists the files staged for commit, keeps the Python sources,
//! runs a pep8-style checker against each one, and blocks the commit when
//! any file reports more violations than the configured per-file maximum.
//!
//! ## Features
//!
//! - **Staged-only checking**: Only files added or modified in the pending
//!   commit are checked, diffed against `HEAD` (or the empty tree for a
//!   repository with no commits yet)
//! - **Python detection**: By `.py` extension or a `#!...python` shebang
//!   on the first line
//! - **Configurable threshold**: Per-file maximum violation count via flag
//!   or a `[pep8_pre_commit_hook]` section in `setup.cfg`
//!
//! ## Example
//!
//! ```rust,no_run
//! use git_pep8_hook::{Config, RepoChecker};
//!
//! fn main() -> git_pep8_hook::Result<()> {
//!     let config = Config::resolve(
//!         "pep8".to_string(),
//!         0,
//!         None,
//!         "setup.cfg".to_string(),
//!     )?;
//!
//!     let report = RepoChecker::new(config)?.run()?;
//!
//!     if report.success() {
//!         Ok(())
//!     } else {
//!         std::process::exit(1);
//!     }
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;

// Re-export main types for convenience
pub use config::Config;
pub use core::error::{Error, Result};
pub use core::executor::{ExecutionResult, Executor};
pub use core::git::GitRepo;
pub use core::runner::{FileOutcome, RepoChecker, RunReport};
