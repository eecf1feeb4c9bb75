use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

fn repo_descriptor() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../Formula/xlsq.json")
}

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("xlsq-formula").expect("xlsq-formula binary is built");
    cmd.env("NO_COLOR", "1").env_remove("XLSQ_LOG");
    cmd
}

/// Copies the repository descriptor and Ruby formula into a scratch directory.
fn scratch_formula() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("xlsq.json");
    fs::copy(repo_descriptor(), &json).unwrap();
    fs::copy(repo_descriptor().with_extension("rb"), dir.path().join("xlsq.rb")).unwrap();
    (dir, json)
}

#[test]
fn committed_ruby_formula_matches_the_descriptor() {
    cmd()
        .arg("--formula")
        .arg(repo_descriptor())
        .args(["render", "--check"])
        .assert()
        .success()
        .stdout(contains("is up to date"));
}

#[test]
fn render_to_stdout_prints_the_formula() {
    let expected = fs::read_to_string(repo_descriptor().with_extension("rb")).unwrap();
    cmd()
        .arg("--formula")
        .arg(repo_descriptor())
        .args(["render", "--output", "-"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn lint_flags_the_placeholder_checksum() {
    cmd()
        .arg("--formula")
        .arg(repo_descriptor())
        .arg("lint")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("YOUR_SHA256_HERE"));
}

#[test]
fn checksum_prints_the_digest() {
    let dir = tempfile::tempdir().unwrap();
    let archive = dir.path().join("xlsq-v0.1.0.tar.gz");
    fs::write(&archive, b"abc").unwrap();

    cmd()
        .arg("--formula")
        .arg(repo_descriptor())
        .arg("checksum")
        .arg(&archive)
        .assert()
        .success()
        .stdout(contains(ABC));
}

#[test]
fn checksum_verify_refuses_the_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let archive = dir.path().join("xlsq-v0.1.0.tar.gz");
    fs::write(&archive, b"abc").unwrap();

    cmd()
        .arg("--formula")
        .arg(repo_descriptor())
        .args(["checksum", "--verify"])
        .arg(&archive)
        .assert()
        .failure()
        .stderr(contains("placeholder"))
        .stderr(contains(ABC));
}

#[test]
fn version_bump_needs_a_new_checksum_to_pass_lint() {
    let (dir, json) = scratch_formula();

    cmd()
        .arg("--formula")
        .arg(&json)
        .args(["bump", "0.2.0"])
        .assert()
        .success()
        .stdout(contains("v0.2.0.tar.gz"))
        .stdout(contains("placeholder"));
    let rb = fs::read_to_string(dir.path().join("xlsq.rb")).unwrap();
    assert!(rb.contains("archive/v0.2.0.tar.gz"));
    cmd()
        .arg("--formula")
        .arg(&json)
        .arg("lint")
        .assert()
        .failure();

    cmd()
        .arg("--formula")
        .arg(&json)
        .args(["bump", "0.3.0", "--sha256", ABC])
        .assert()
        .success();
    cmd()
        .arg("--formula")
        .arg(&json)
        .arg("lint")
        .assert()
        .success()
        .stdout(contains("xlsq 0.3.0 passes lint"));

    cmd()
        .arg("--formula")
        .arg(&json)
        .arg("checksum")
        .arg("--verify")
        .arg(dir.path().join("xlsq.rb"))
        .assert()
        .failure()
        .stderr(contains("Checksum mismatch"));
}

#[test]
fn failed_bump_leaves_the_descriptor_alone() {
    let (dir, json) = scratch_formula();
    let before = fs::read_to_string(&json).unwrap();
    let rb = dir.path().join("xlsq.rb");
    fs::remove_file(&rb).unwrap();
    fs::create_dir(&rb).unwrap();

    cmd()
        .arg("--formula")
        .arg(&json)
        .args(["bump", "0.2.0"])
        .assert()
        .failure()
        .stderr(contains("Failed to write"));
    assert_eq!(fs::read_to_string(&json).unwrap(), before);
}

#[test]
fn missing_descriptor_is_reported() {
    cmd()
        .args(["--formula", "/nonexistent/xlsq.json", "lint"])
        .assert()
        .failure()
        .stderr(contains("Failed to read formula"));
}

#[cfg(unix)]
#[test]
fn test_step_runs_against_a_prefix() {
    use std::os::unix::fs::PermissionsExt;

    let prefix = tempfile::tempdir().unwrap();
    let bin = prefix.path().join("bin");
    fs::create_dir_all(&bin).unwrap();
    let exe = bin.join("xlsq");
    fs::write(
        &exe,
        "#!/bin/sh\necho 'A CLI tool for reading and searching Excel files'\n",
    )
    .unwrap();
    fs::set_permissions(&exe, fs::Permissions::from_mode(0o755)).unwrap();

    cmd()
        .arg("--formula")
        .arg(repo_descriptor())
        .arg("test")
        .arg("--prefix")
        .arg(prefix.path())
        .assert()
        .success()
        .stdout(contains("xlsq passes its test"));
}

#[test]
fn test_step_fails_without_an_installed_binary() {
    let prefix = tempfile::tempdir().unwrap();
    cmd()
        .arg("--formula")
        .arg(repo_descriptor())
        .arg("test")
        .arg("--prefix")
        .arg(prefix.path())
        .assert()
        .failure()
        .stderr(contains("is not installed"));
}
