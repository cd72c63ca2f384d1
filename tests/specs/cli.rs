//! Behavioral specs for argument handling and directory resolution.

use crate::prelude::*;

// =============================================================================
// Directory Resolution Specs
// =============================================================================

/// > Default folders are created when neither is given
#[test]
fn creates_default_folders() {
    let project = Project::empty();

    project.cmd().write_stdin("exit\n").assert().success();

    assert!(project.path().join("dirty").is_dir());
    assert!(project.path().join("clean").is_dir());
}

/// > Invalid or non-directory paths exit with status 1
#[test]
fn missing_dirty_folder_exits_one() {
    let project = Project::with_dirs();

    project
        .cmd()
        .args(["-d", "nope"])
        .write_stdin("exit\n")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("nope is not a valid directory"));
}

/// > A file is not a valid pattern folder
#[test]
fn file_as_folder_exits_one() {
    let project = Project::with_dirs();
    project.file("list.txt", "cat\n");

    project
        .cmd()
        .args(["list.txt", "clean"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("is not a valid directory"));
}

/// > Legacy positional folders are accepted
#[test]
fn positional_folders() {
    let project = Project::empty();
    project.file("bad/a.txt", "cat\n").file("good/b.txt", "cat\n");

    project
        .cmd()
        .args(["bad", "good"])
        .write_stdin("cat\nexit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("triggers 1 dirty patterns"))
        .stdout(predicates::str::contains("matches 1 clean patterns"));
}

/// > -no-clean never reads the clean folder
#[test]
fn legacy_no_clean_skips_clean_folder() {
    let project = Project::with_dirs();
    // Would fail to compile if it were loaded
    project.file("dirty/a.txt", "cat\n").file("clean/b.txt", "(\n");

    project
        .cmd()
        .arg("-no-clean")
        .write_stdin("cat\nexit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("triggers 1 dirty patterns"))
        .stdout(predicates::str::contains("clean patterns").not());
}

// =============================================================================
// Fatal Load Error Specs
// =============================================================================

/// > An invalid pattern terminates the process with a diagnostic
#[test]
fn invalid_pattern_is_fatal() {
    let project = Project::with_dirs();
    project.file("dirty/a.txt", "[oops\n");

    project
        .cmd()
        .write_stdin("cat\nexit\n")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("invalid pattern"))
        .stderr(predicates::str::contains("a.txt"));
}

/// > An unreadable pattern file terminates the process
#[test]
fn non_utf8_pattern_file_is_fatal() {
    let project = Project::with_dirs();
    std::fs::write(project.path().join("dirty/bin.txt"), [0xff, 0xfe, 0xfd]).unwrap();

    project
        .cmd()
        .write_stdin("exit\n")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("failed to read"));
}

// =============================================================================
// One-shot Specs
// =============================================================================

/// > --word checks words without prompting
#[test]
fn word_flag_skips_prompt() {
    let project = Project::with_dirs();
    project.file("dirty/a.txt", "cat\n");

    project
        .cmd()
        .args(["--word", "the cat sat", "-w", "dog"])
        .assert()
        .success()
        .stdout(predicates::str::contains("input:").not())
        .stdout(predicates::str::contains("The word 'the cat sat' triggers 1 dirty patterns"))
        .stdout(predicates::str::contains(
            "The word 'dog' does not trigger any of the regex patterns.",
        ));
}

/// > JSON output writes one object per word
#[test]
fn json_output() {
    let project = Project::with_dirs();
    project.file("dirty/a.txt", "cat\n");

    let output = project.cmd().args(["-o", "json", "-w", "cat"]).output().unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["word"], "cat");
    assert_eq!(value["triggered"], true);
    assert_eq!(value["dirty"][0]["pattern"], r"\bcat\b");
    assert_eq!(value["dirty"][0]["file"], "a.txt");
}

// =============================================================================
// Logging Specs
// =============================================================================

/// > A load summary is printed on every start
#[test]
fn prints_load_summary() {
    let project = Project::with_dirs();
    project.file("dirty/a.txt", "cat\ndog\ncat\n").file("clean/b.txt", "hot dog\n");

    project
        .cmd()
        .write_stdin("exit\n")
        .assert()
        .success()
        .stderr(predicates::str::contains("loaded 3 dirty patterns (2 unique) from 1 files"))
        .stderr(predicates::str::contains("loaded 1 clean patterns (1 unique) from 1 files"))
        .stderr(predicates::str::contains("reading dirty file").not());
}

/// > --verbose adds per-file detail
#[test]
fn verbose_prints_per_file_detail() {
    let project = Project::with_dirs();
    project.file("dirty/a.txt", "cat\n");

    project
        .cmd()
        .arg("--verbose")
        .write_stdin("exit\n")
        .assert()
        .success()
        .stderr(predicates::str::contains("reading dirty file: a.txt"));
}
