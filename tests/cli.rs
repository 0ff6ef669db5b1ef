use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn setup_git_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::process::Command::new("git")
        .args(["init"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    dir
}

fn gitease(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gitease").unwrap();
    cmd.arg("--no-color").arg("-C").arg(dir);
    // Keep git from discovering a repository above the temp dir
    if let Some(parent) = dir.parent() {
        cmd.env("GIT_CEILING_DIRECTORIES", parent);
    }
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    Command::cargo_bin("gitease")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("commit"))
        .stdout(predicate::str::contains("completion"));
}

#[test]
fn test_clean_outside_repository_reports_fetch_error() {
    let dir = TempDir::new().unwrap();

    gitease(dir.path())
        .arg("clean")
        .write_stdin("all\ny\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Error: failed to get candidates with git clean -nd",
        ))
        .stdout(predicate::str::contains("Delete these files").not())
        .stdout(predicate::str::contains("Enter the numbers").not());
}

#[test]
fn test_clean_with_nothing_untracked() {
    let dir = setup_git_repo();

    gitease(dir.path())
        .arg("clean")
        .assert()
        .success()
        .stdout("No files to clean.\n");
}

#[test]
fn test_clean_rejects_then_deletes_everything() {
    let dir = setup_git_repo();
    fs::write(dir.path().join("a.txt"), "tmp").unwrap();
    fs::create_dir(dir.path().join("build")).unwrap();
    fs::write(dir.path().join("build/out.o"), "obj").unwrap();

    gitease(dir.path())
        .arg("clean")
        .write_stdin("1\nn\nall\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] a.txt"))
        .stdout(predicate::str::contains("[2] build/"))
        .stdout(predicate::str::ends_with("Selected files deleted.\n"));

    assert!(!dir.path().join("a.txt").exists());
    assert!(!dir.path().join("build").exists());
}

#[test]
fn test_clean_deletes_only_selected() {
    let dir = setup_git_repo();
    fs::write(dir.path().join("keep.txt"), "tmp").unwrap();
    fs::write(dir.path().join("drop.txt"), "tmp").unwrap();

    // git lists untracked paths alphabetically: drop.txt, keep.txt
    gitease(dir.path())
        .arg("clean")
        .write_stdin("7\n1\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid number: 7"))
        .stdout(predicate::str::contains("Selected files deleted."));

    assert!(!dir.path().join("drop.txt").exists());
    assert!(dir.path().join("keep.txt").exists());
}

#[test]
fn test_clean_cancel_keeps_files() {
    let dir = setup_git_repo();
    fs::write(dir.path().join("a.txt"), "tmp").unwrap();

    gitease(dir.path())
        .arg("clean")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));

    assert!(dir.path().join("a.txt").exists());
}

#[test]
fn test_clean_list_json() {
    let dir = setup_git_repo();
    fs::write(dir.path().join("scratch.txt"), "tmp").unwrap();

    let assert = gitease(dir.path())
        .args(["clean", "list", "--json"])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value[0]["index"], 1);
    assert_eq!(value[0]["path"], "scratch.txt");
}

#[test]
fn test_completion_script() {
    Command::cargo_bin("gitease")
        .unwrap()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gitease"));
}

#[test]
fn test_dynamic_completion_for_unknown_topic_is_silent() {
    let dir = TempDir::new().unwrap();

    gitease(dir.path())
        .args(["__complete", "unknown"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_clean_selecting_glob_named_file_keeps_matching_siblings() {
    let dir = setup_git_repo();
    fs::write(dir.path().join("*.log"), "literal").unwrap();
    fs::write(dir.path().join("keep.log"), "tmp").unwrap();

    gitease(dir.path())
        .arg("clean")
        .write_stdin("1\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] *.log"))
        .stdout(predicate::str::contains("Selected files deleted."));

    assert!(!dir.path().join("*.log").exists());
    assert!(dir.path().join("keep.log").exists());
}

#[test]
fn test_clean_deletes_names_git_would_quote_or_pad() {
    let dir = setup_git_repo();
    let names = ["café.txt", "say \"hi\".txt", "trail.txt "];
    for name in names {
        fs::write(dir.path().join(name), "tmp").unwrap();
    }

    gitease(dir.path())
        .arg("clean")
        .write_stdin("all\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("café.txt"))
        .stdout(predicate::str::contains("Selected files deleted."));

    for name in names {
        assert!(!dir.path().join(name).exists(), "{name:?} still exists");
    }
}
