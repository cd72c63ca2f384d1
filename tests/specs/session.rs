//! Behavioral specs for the interactive prompt.

use crate::prelude::*;

/// > exit terminates the loop with status 0
#[test]
fn exit_terminates_normally() {
    let project = Project::with_dirs();

    project
        .cmd()
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Enter a word to check against the regex patterns. Type 'exit' to exit",
        ))
        .stdout(predicates::str::contains("input: "));
}

/// > End of input terminates the loop with status 0
#[test]
fn end_of_input_terminates_normally() {
    let project = Project::with_dirs();

    project.cmd().write_stdin("").assert().success();
}

/// > Word boundaries stop "foo" matching inside "foobar"
#[test]
fn word_boundary_prevents_trigger() {
    let project = Project::with_dirs();
    project.file("dirty/a.txt", "foo\n").file("clean/b.txt", "bar\n");

    project
        .cmd()
        .write_stdin("foobar\nexit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "The word 'foobar' does not trigger any of the regex patterns.",
        ))
        .stdout(predicates::str::contains("Files Found").not());
}

/// > A dirty match prints one row with its source file
#[test]
fn dirty_match_reports_row() {
    let project = Project::with_dirs();
    project.file("dirty/animals.txt", "cat\n");

    project
        .cmd()
        .write_stdin("the cat sat\nexit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("The word 'the cat sat' triggers 1 dirty patterns"))
        .stdout(predicates::str::contains(row("Pattern", "Files Found")))
        .stdout(predicates::str::contains(row(r"\bcat\b", "animals.txt")))
        .stdout(predicates::str::contains("clean patterns").not());
}

/// > Clean patterns are reported only alongside a dirty match
#[test]
fn clean_match_requires_dirty_match() {
    let project = Project::with_dirs();
    project.file("dirty/a.txt", "cat\n").file("clean/b.txt", "food\n");

    project
        .cmd()
        .write_stdin("food\ncat food\nexit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "The word 'food' does not trigger any of the regex patterns.",
        ))
        .stdout(predicates::str::contains("The word 'cat food' matches 1 clean patterns"))
        .stdout(predicates::str::contains(row(r"\bfood\b", "b.txt")));
}

/// > Duplicate patterns across files collapse; the later file is reported
#[test]
fn duplicate_pattern_reports_last_file() {
    let project = Project::with_dirs();
    project.file("dirty/a.txt", "cat\n").file("dirty/b.txt", "cat\n");

    project
        .cmd()
        .write_stdin("cat\nexit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("triggers 1 dirty patterns"))
        .stdout(predicates::str::contains(row(r"\bcat\b", "b.txt")));
}
