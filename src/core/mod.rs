//! Core functionality for git-pep8-hook.

pub mod checker;
pub mod error;
pub mod executor;
pub mod git;
pub mod python;
pub mod runner;

pub use error::{Error, Result};
