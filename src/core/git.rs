//! Git repository operations.
//!
//! This module provides utilities for interacting with Git repositories:
//! finding the repository root, resolving the diff base for the pending
//! commit, and listing the files staged for it.

use crate::core::error::{Error, Result};
use crate::core::executor::Executor;
use std::path::{Path, PathBuf};

/// Hash of the empty tree, used as the diff base when the repository has
/// no commits yet.
pub const EMPTY_TREE_HASH: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

/// Represents a Git repository.
#[derive(Debug, Clone)]
pub struct GitRepo {
    /// Root directory of the repository (where .git is).
    root: PathBuf,
    executor: Executor,
}

impl GitRepo {
    /// Discovers the Git repository from the current directory.
    pub fn discover() -> Result<Self> {
        Self::discover_from(&std::env::current_dir().map_err(|e| Error::io("get current dir", e))?)
    }

    /// Discovers the Git repository from a specific path.
    pub fn discover_from(path: &Path) -> Result<Self> {
        let executor = Executor::new();
        let output = executor.execute_in(path, &["git", "rev-parse", "--show-toplevel"])?;

        if !output.success() {
            return Err(Error::NotGitRepo);
        }

        let root = output
            .stdout_lossy()
            .lines()
            .next()
            .map(PathBuf::from)
            .ok_or(Error::NotGitRepo)?;

        Ok(Self { root, executor })
    }

    /// Returns the root directory of the repository.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the base reference to diff the index against.
    ///
    /// A repository with no commits has no `HEAD` to resolve, so the
    /// well-known empty-tree hash stands in for it.
    pub fn diff_base(&self) -> Result<String> {
        let output =
            self.executor
                .execute_in(&self.root, &["git", "rev-parse", "--verify", "HEAD"])?;

        if output.success() {
            Ok("HEAD".to_string())
        } else {
            Ok(EMPTY_TREE_HASH.to_string())
        }
    }

    /// Returns the list of files staged for the pending commit, relative
    /// to the repository root, in Git's native diff order.
    ///
    /// Only added and modified files are included; deletions, renames and
    /// the like are not candidates for checking.
    pub fn staged_files(&self) -> Result<Vec<String>> {
        let base = self.diff_base()?;
        let output =
            self.executor
                .execute_in(&self.root, &["git", "diff-index", "--cached", &base])?;

        if !output.success() {
            return Err(Error::git(
                "diff-index",
                output.stderr_lossy().trim().to_string(),
            ));
        }

        Ok(parse_diff_index(&output.stdout_lossy()))
    }
}

/// Parses `git diff-index` output into the staged paths to check.
///
/// Each line carries whitespace-separated fields with the change kind at
/// index 4 and the path at index 5. The column positions are part of the
/// plumbing contract, so the parse lives in this one function.
fn parse_diff_index(output: &str) -> Vec<String> {
    let mut files = Vec::new();

    for line in output.lines() {
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if let (Some(kind), Some(path)) = (fields.get(4), fields.get(5)) {
            if *kind == "A" || *kind == "M" {
                files.push((*path).to_string());
            }
        }
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, GitRepo) {
        let temp = TempDir::new().expect("create temp dir");
        let path = temp.path();

        Command::new("git")
            .args(["init"])
            .current_dir(path)
            .output()
            .expect("init repo");

        Command::new("git")
            .args(["config", "user.email", "test@test.com"])
            .current_dir(path)
            .output()
            .expect("set email");

        Command::new("git")
            .args(["config", "user.name", "Test"])
            .current_dir(path)
            .output()
            .expect("set name");

        let repo = GitRepo::discover_from(path).expect("discover repo");
        (temp, repo)
    }

    fn git(repo: &GitRepo, args: &[&str]) {
        Command::new("git")
            .args(args)
            .current_dir(repo.root())
            .output()
            .expect("run git");
    }

    // =========================================================================
    // Discovery tests
    // =========================================================================

    #[test]
    fn test_discover_repo() {
        let (temp, repo) = create_test_repo();
        let expected = temp.path().canonicalize().expect("canonicalize temp");
        let actual = repo.root().canonicalize().expect("canonicalize root");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let (temp, _) = create_test_repo();

        let subdir = temp.path().join("src/lib");
        std::fs::create_dir_all(&subdir).expect("create subdir");

        let repo = GitRepo::discover_from(&subdir).expect("discover from subdir");
        let expected = temp.path().canonicalize().expect("canonicalize temp");
        let actual = repo.root().canonicalize().expect("canonicalize root");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_not_git_repo() {
        let temp = TempDir::new().expect("create temp dir");
        let result = GitRepo::discover_from(temp.path());
        assert!(matches!(result, Err(Error::NotGitRepo)));
    }

    // =========================================================================
    // Diff base tests
    // =========================================================================

    #[test]
    fn test_diff_base_empty_history() {
        let (_temp, repo) = create_test_repo();
        assert_eq!(repo.diff_base().expect("diff base"), EMPTY_TREE_HASH);
    }

    #[test]
    fn test_diff_base_after_commit() {
        let (_temp, repo) = create_test_repo();
        git(&repo, &["commit", "--allow-empty", "-m", "msg"]);
        assert_eq!(repo.diff_base().expect("diff base"), "HEAD");
    }

    // =========================================================================
    // Staged files tests
    // =========================================================================

    #[test]
    fn test_staged_files_round_trip() {
        let (temp, repo) = create_test_repo();

        // Empty tree
        assert!(repo.staged_files().expect("staged").is_empty());

        // Create file 'a'
        std::fs::write(temp.path().join("a"), "foo").expect("write file");
        assert!(repo.staged_files().expect("staged").is_empty());

        // Add 'a'
        git(&repo, &["add", "a"]);
        assert_eq!(repo.staged_files().expect("staged"), vec!["a".to_string()]);

        // Commit 'a'
        git(&repo, &["commit", "-m", "msg"]);
        assert!(repo.staged_files().expect("staged").is_empty());

        // Edit 'a' without staging
        std::fs::write(temp.path().join("a"), "bar").expect("write file");
        assert!(repo.staged_files().expect("staged").is_empty());

        // Add 'a' again
        git(&repo, &["add", "a"]);
        assert_eq!(repo.staged_files().expect("staged"), vec!["a".to_string()]);
    }

    #[test]
    fn test_staged_files_excludes_deleted() {
        let (temp, repo) = create_test_repo();

        std::fs::write(temp.path().join("a"), "foo").expect("write file");
        git(&repo, &["add", "a"]);
        git(&repo, &["commit", "-m", "msg"]);

        git(&repo, &["rm", "a"]);
        assert!(repo.staged_files().expect("staged").is_empty());
    }

    #[test]
    fn test_staged_files_multiple_in_diff_order() {
        let (temp, repo) = create_test_repo();

        std::fs::write(temp.path().join("b.py"), "").expect("write b");
        std::fs::write(temp.path().join("a.py"), "").expect("write a");
        git(&repo, &["add", "."]);

        let staged = repo.staged_files().expect("staged");
        assert_eq!(staged, vec!["a.py".to_string(), "b.py".to_string()]);
    }

    // =========================================================================
    // Plumbing parse tests
    // =========================================================================

    const SHA_A: &str = "0000000000000000000000000000000000000000";
    const SHA_B: &str = "8a4b2f9136c06a6df57834a7b9f04d928f5927c0";

    #[test]
    fn test_parse_diff_index_added_and_modified() {
        let output = format!(
            ":000000 100644 {SHA_A} {SHA_B} A\tnew.py\n:100644 100644 {SHA_B} {SHA_A} M\tchanged.py\n"
        );
        assert_eq!(
            parse_diff_index(&output),
            vec!["new.py".to_string(), "changed.py".to_string()]
        );
    }

    #[test]
    fn test_parse_diff_index_skips_other_kinds() {
        let output = format!(
            ":100644 000000 {SHA_B} {SHA_A} D\tgone.py\n:100644 100644 {SHA_B} {SHA_A} M\tkept.py\n"
        );
        assert_eq!(parse_diff_index(&output), vec!["kept.py".to_string()]);
    }

    #[test]
    fn test_parse_diff_index_empty_output() {
        assert!(parse_diff_index("").is_empty());
        assert!(parse_diff_index("\n\n").is_empty());
    }

    #[test]
    fn test_parse_diff_index_short_line_ignored() {
        assert!(parse_diff_index("garbage line").is_empty());
    }
}
