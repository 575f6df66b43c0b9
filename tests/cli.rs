// Command-line behaviour of the igra binary: output and exit codes

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn igra() -> Command {
    let mut cmd = Command::cargo_bin("igra").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn prints_tokens_then_json() {
    let file = source_file("moj broj x = 5; zapocni_igru napisi(x); zavrsi_igru;");

    igra()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1:1-3"))
        .stdout(predicate::str::contains("IntLiteral     '5' = 5"))
        .stdout(predicate::str::contains("1:53-53    Eof            '<eof>'"))
        .stdout(predicate::str::contains("\"item\": \"Var\""))
        .stdout(predicate::str::contains("\"expr\": \"Call\""));
}

#[test]
fn tree_format_without_tokens() {
    let file = source_file("zapocni_igru x = 1 + 2; zavrsi_igru;");

    igra()
        .args(["--format", "tree", "--no-tokens"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(
            "Program\n  Block zapocni_igru\n    Assign\n      Ident x\n      Binary +\n        Literal 1\n        Literal 2\n",
        );
}

#[test]
fn source_format_prints_program() {
    let file = source_file("zapocni_igru ako(a){napisi(a);} zavrsi_igru;");

    igra()
        .args(["--format", "source", "--no-tokens"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("zapocni_igru\n    ako (a) {\n        napisi(a);\n    }\nzavrsi_igru;\n");
}

#[test]
fn verbose_reports_progress() {
    let file = source_file("zapocni_igru zavrsi_igru;");

    igra()
        .args(["-v", "--no-tokens"])
        .arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Parsing "))
        .stderr(predicate::str::contains("Tokenized 4 tokens."))
        .stderr(predicate::str::contains(
            "Parsed successfully. Found 1 top-level items.",
        ));
}

#[test]
fn lexical_error_exits_66() {
    let file = source_file("zapocni_igru napisi(\"abc); zavrsi_igru;");

    igra()
        .arg(file.path())
        .assert()
        .code(66)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with(
            "error: Lexer error at line 1, column 21: Unterminated string literal",
        ))
        .stderr(predicate::str::ends_with(format!("{}\n", "^".repeat(19))));
}

#[test]
fn syntax_error_exits_65() {
    let file = source_file("zapocni_igru\nako (x > 0 { }\nzavrsi_igru;");

    igra()
        .arg(file.path())
        .assert()
        .code(65)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Parse error at line 2, column 12: Expected ')' after condition, found '{'",
        ))
        .stderr(predicate::str::contains("2 | ako (x > 0 { }"));
}

#[test]
fn missing_argument_exits_64() {
    igra().assert().code(64);
}

#[test]
fn extra_argument_exits_64() {
    let file = source_file("zapocni_igru zavrsi_igru;");
    igra().arg(file.path()).arg("drugi.igra").assert().code(64);
}

#[test]
fn unknown_format_exits_64() {
    let file = source_file("zapocni_igru zavrsi_igru;");
    igra()
        .args(["--format", "xml"])
        .arg(file.path())
        .assert()
        .code(64);
}

#[test]
fn help_exits_0() {
    igra()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn unreadable_file_exits_1() {
    let dir = tempfile::tempdir().unwrap();

    igra()
        .arg(dir.path().join("nema.igra"))
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error: cannot read"));
}

#[test]
fn deep_nesting_exits_65() {
    let depth = 20_000;
    let file = source_file(&format!(
        "zapocni_igru x = {}1{}; zavrsi_igru;",
        "(".repeat(depth),
        ")".repeat(depth)
    ));

    igra()
        .args(["--no-tokens", "--format", "tree"])
        .arg(file.path())
        .assert()
        .code(65)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Nesting too deep, found '('"));
}
