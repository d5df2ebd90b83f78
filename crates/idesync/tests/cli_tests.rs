use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn idesync(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("idesync").unwrap();
    cmd.env("IDESYNC_HOME", home).env_remove("RUST_LOG");
    cmd
}

fn init_repo(path: &Path, origin: Option<&str>) -> git2::Repository {
    fs::create_dir_all(path).unwrap();
    let repo = git2::Repository::init(path).unwrap();
    if let Some(url) = origin {
        repo.remote("origin", url).unwrap();
    }
    repo
}

fn commit_file(repo: &git2::Repository, name: &str, content: &str) {
    let workdir = repo.workdir().unwrap();
    fs::write(workdir.join(name), content).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(name)).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
    let sig = git2::Signature::now("test", "test@example.com").unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
        .unwrap();
}

#[test]
fn test_help_output() {
    let mut cmd = Command::cargo_bin("idesync").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "IDE Configuration Synchronization Tool",
        ))
        .stdout(predicate::str::contains("discover"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_output() {
    let mut cmd = Command::cargo_bin("idesync").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_discover_reports_repositories_and_ide_configs() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    init_repo(
        &work.path().join("app"),
        Some("git@github.com:acme/app.git"),
    );
    fs::create_dir_all(work.path().join("app/.vscode")).unwrap();
    fs::create_dir_all(work.path().join("app/.idea")).unwrap();
    init_repo(&work.path().join("libs/util"), None);

    idesync(home.path())
        .arg("discover")
        .arg("--dir")
        .arg(work.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Repository discovered at").count(2))
        .stdout(predicate::str::contains("IDE config found at").count(2))
        .stdout(predicate::str::contains("origin git@github.com:acme/app.git"))
        .stdout(predicate::str::contains("github.com/acme/app"))
        .stdout(predicate::str::contains("(no remotes)"));
}

#[test]
fn test_discover_continues_past_unreadable_repository() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    fs::create_dir_all(work.path().join("broken/.git")).unwrap();
    init_repo(&work.path().join("fine"), None);

    idesync(home.path())
        .args(["discover", "-d"])
        .arg(work.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to read remotes"))
        .stdout(predicate::str::contains("Repository discovered at").count(1))
        .stdout(predicate::str::contains("Unreadable: 1"));
}

#[test]
fn test_discover_missing_directory_still_exits_zero() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    idesync(home.path())
        .arg("discover")
        .arg("--dir")
        .arg(work.path().join("missing"))
        .assert()
        .success()
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_init_local_only() {
    let home = TempDir::new().unwrap();
    let db = home.path().join("db");

    idesync(home.path())
        .arg("init")
        .write_stdin(format!("{}\ny\n", db.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Database repository created at"));

    assert!(db.join(".git").exists());
    let saved = fs::read_to_string(home.path().join("config.toml")).unwrap();
    assert!(saved.contains("local_only = true"));
    assert!(saved.contains("database_repo_url = \"\""));
}

#[test]
fn test_init_clones_remote() {
    let home = TempDir::new().unwrap();
    let upstream_dir = TempDir::new().unwrap();
    let upstream = init_repo(upstream_dir.path(), None);
    commit_file(&upstream, "README.md", "shared IDE settings");

    let url = format!("file://{}", upstream_dir.path().display());
    let db = home.path().join("db");

    idesync(home.path())
        .arg("init")
        .write_stdin(format!("{}\nn\n{url}\n", db.display()))
        .assert()
        .success();

    assert!(db.join("README.md").exists());
    let saved = fs::read_to_string(home.path().join("config.toml")).unwrap();
    assert!(saved.contains(&url));
    assert!(saved.contains("local_only = false"));
}

#[test]
fn test_init_rejects_non_empty_database_path() {
    let home = TempDir::new().unwrap();
    let db = home.path().join("db");
    fs::create_dir_all(&db).unwrap();
    fs::write(db.join("existing.txt"), "data").unwrap();

    idesync(home.path())
        .arg("init")
        .write_stdin(format!("{}\ny\n", db.display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "database path must be an empty directory",
        ));

    assert!(!home.path().join("config.toml").exists());
}

#[test]
fn test_init_without_input_fails() {
    let home = TempDir::new().unwrap();

    idesync(home.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read input"));
}

#[test]
fn test_config_shows_defaults() {
    let home = TempDir::new().unwrap();

    idesync(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("not saved yet"))
        .stdout(predicate::str::contains("Local only:        false"));
}

#[test]
fn test_unknown_subcommand() {
    let mut cmd = Command::cargo_bin("idesync").unwrap();
    cmd.arg("unknown")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_no_subcommand() {
    let mut cmd = Command::cargo_bin("idesync").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_for_subcommands() {
    for subcommand in ["discover", "init", "config"] {
        let mut cmd = Command::cargo_bin("idesync").unwrap();
        cmd.args([subcommand, "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage"));
    }
}
