//! Tests for the git ignore oracle against real repositories

use std::path::Path;

use docs_exclude::adapters::git::{GitIgnoreOracle, IgnoreStatus};
use docs_exclude::core::ports::IgnoreOracle;

use crate::common::git_repo::TempGitRepo;

fn oracle(repo: &TempGitRepo) -> GitIgnoreOracle {
    GitIgnoreOracle::new(repo.path().to_path_buf())
}

#[test]
fn test_ignored_file() {
    let repo = TempGitRepo::new();
    repo.gitignore("*.log\n");
    repo.write_file("docs/debug.log", "noise");

    let path = repo.path().join("docs/debug.log");
    assert_eq!(oracle(&repo).status(&path).unwrap(), IgnoreStatus::Ignored);
    assert!(oracle(&repo).is_ignored(&path));
}

#[test]
fn test_tracked_pattern_not_ignored() {
    let repo = TempGitRepo::new();
    repo.gitignore("*.log\n");
    repo.write_file("docs/index.md", "# Home");

    let path = repo.path().join("docs/index.md");
    assert_eq!(oracle(&repo).status(&path).unwrap(), IgnoreStatus::NotIgnored);
    assert!(!oracle(&repo).is_ignored(&path));
}

#[test]
fn test_ignored_directory_contents() {
    let repo = TempGitRepo::new();
    repo.gitignore("site/\n");
    repo.write_file("site/index.html", "<html>");

    assert!(oracle(&repo).is_ignored(&repo.path().join("site/index.html")));
}

#[test]
fn test_negated_rule_keeps_file() {
    let repo = TempGitRepo::new();
    repo.gitignore("*.md\n!keep.md\n");
    repo.write_file("keep.md", "keep");
    repo.write_file("drop.md", "drop");

    assert!(!oracle(&repo).is_ignored(&repo.path().join("keep.md")));
    assert!(oracle(&repo).is_ignored(&repo.path().join("drop.md")));
}

#[test]
fn test_git_dir_always_ignored() {
    let repo = TempGitRepo::new();
    assert!(oracle(&repo).is_ignored(&repo.path().join(".git")));
}

#[test]
fn test_path_outside_repository_is_not_ignored() {
    let repo = TempGitRepo::new();
    repo.gitignore("*\n");

    // git exits 128 for paths outside the repository
    let status = oracle(&repo).status(Path::new("/definitely/outside/file.md")).unwrap();
    assert!(matches!(status, IgnoreStatus::Unknown(Some(_))));
    assert!(!oracle(&repo).is_ignored(Path::new("/definitely/outside/file.md")));
}
