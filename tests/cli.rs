use assert_cmd::Command;
use predicates::prelude::*;

fn irlex() -> Command {
    Command::cargo_bin("irlex").unwrap()
}

#[test]
fn dumps_tokens_from_stdin() {
    irlex()
        .write_stdin("t1 = ADD t2, 42.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Identifier 0..2 @0:0 \"t1\""))
        .stdout(predicate::str::contains("Number 13..15 @0:13 \"42\""))
        .stdout(predicate::str::contains("Dot 15..16 @0:15"))
        .stdout(predicate::str::contains("LineEnd 16..17 @0:16"))
        .stdout(predicate::str::ends_with("EndOfInput 17..17 @1:0\n"));
}

#[test]
fn reads_a_file() {
    irlex()
        .arg("tests/lex/assignment.ir")
        .assert()
        .success()
        .stdout(predicate::str::contains("Number 16..23 @1:4 \"1.5E+10\""));
}

#[test]
fn skips_line_ends() {
    irlex()
        .arg("--skip-line-ends")
        .write_stdin("a\n\nb\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("LineEnd").not())
        .stdout(predicate::str::contains("Identifier 3..4 @2:0 \"b\""));
}

#[test]
fn hex_numbers() {
    irlex()
        .arg("--hex")
        .write_stdin("mov eax, 0x1F")
        .assert()
        .success()
        .stdout(predicate::str::contains("Number 9..13 @0:9 \"0x1F\""));

    irlex()
        .write_stdin("mov eax, 0x1F")
        .assert()
        .success()
        .stdout(predicate::str::contains("Number 9..10 @0:9 \"0\""));
}

#[test]
fn invalid_tokens_are_reported_but_not_fatal() {
    irlex()
        .write_stdin("\"open\nx")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid 5..5 @0:5"))
        .stdout(predicate::str::contains("Identifier 6..7 @1:0 \"x\""));
}

#[test]
fn strict_mode_fails_on_invalid_tokens() {
    irlex()
        .arg("--strict")
        .write_stdin("a \"open")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid token at 0:7"));
}

#[test]
fn missing_file() {
    irlex()
        .arg("tests/lex/does-not-exist.ir")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read"));
}
