use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Run kaidoku with given args.
fn kaidoku() -> Command {
    cargo_bin_cmd!("kaidoku")
}

#[test]
fn crack_missing_book_file_fails_up_front() {
    let dir = assert_fs::TempDir::new().unwrap();

    // No material/ directory here, so the default book path is missing
    kaidoku()
        .current_dir(dir.path())
        .args(["crack", "ある暗号文"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn crack_missing_api_key_fails_before_any_oracle_call() {
    let dir = assert_fs::TempDir::new().unwrap();
    let book = dir.child("book.txt");
    book.write_str("吾輩は猫である\n").unwrap();

    kaidoku()
        .current_dir(dir.path())
        .env_remove("GEMINI_API_KEY")
        .args([
            "crack",
            "ある暗号文",
            "--book",
            book.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn crack_empty_xor_key_fails_up_front() {
    let dir = assert_fs::TempDir::new().unwrap();
    let book = dir.child("book.txt");
    book.write_str("吾輩は猫である\n").unwrap();

    kaidoku()
        .current_dir(dir.path())
        .args([
            "crack",
            "ある暗号文",
            "--book",
            book.path().to_str().unwrap(),
            "--xor-key",
            "",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn crack_rejects_non_numeric_max_candidates() {
    kaidoku()
        .args(["crack", "ある暗号文", "--max-candidates", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn crack_config_override_points_at_another_book() {
    let dir = assert_fs::TempDir::new().unwrap();
    let config = dir.child("kaidoku.toml");
    config
        .write_str("[defaults]\nbook = \"does/not/exist.txt\"\n")
        .unwrap();

    kaidoku()
        .current_dir(dir.path())
        .args(["crack", "ある暗号文"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does/not/exist.txt"));
}
