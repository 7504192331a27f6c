use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::io::Write;

fn histo() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("histo").unwrap()
}

#[test]
fn letters_from_stdin() {
    let assert = histo()
        .arg("letters")
        .write_stdin("ab ab\ncc")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(&lines[..4], &["a|**", "b|**", "c|**", "d|"]);
    assert_eq!(lines[26], "observed = 8, counted = 6, skipped = 2");
}

#[test]
fn words_ignore_trailing_word() {
    histo()
        .args(["words", "--format", "table", "--skip-empty"])
        .write_stdin("a bb ccc")
        .assert()
        .success()
        .stdout("  1 | 1\n  2 | 1\nobserved = 8, counted = 2, skipped = 6\n");
}

#[test]
fn words_count_trailing_word() {
    histo()
        .args(["words", "--trailing", "count", "--format", "table", "--skip-empty"])
        .write_stdin("a bb ccc")
        .assert()
        .success()
        .stdout(predicate::str::contains("  3 | 1\n"));
}

#[test]
fn digits_json() {
    let assert = histo()
        .args(["digits", "--format", "json", "--percentiles", "50"])
        .write_stdin("x = 1 + 22 * 333\n")
        .assert()
        .success();

    let json: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["mode"], "digits");
    assert_eq!(json["counted"], 6);
    assert_eq!(json["skipped"], 11);
    assert_eq!(json["white_space"], 7);
    assert_eq!(json["other"], 4);
    assert_eq!(json["buckets"][3]["count"], 3);
    assert_eq!(json["percentiles"][0]["bucket"], 2);
}

#[test]
fn whitespace_bars() {
    histo()
        .args(["whitespace"])
        .write_stdin("a b\tc\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "newline|*\n    tab|*\n  blank|*\n",
        ));
}

#[test]
fn lines_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "four\n\nsix666\r\nfour").unwrap();

    histo()
        .args(["lines", "--format", "table", "--skip-empty", "--input"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("  0 | 1\n  4 | 2\n  6 | 1\nobserved = 4, counted = 4, skipped = 0\n");
}

#[test]
fn zero_buckets() {
    histo()
        .args(["letters", "--buckets", "0"])
        .write_stdin("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "the number of buckets must be greater than zero",
        ));
}

#[test]
fn word_longer_than_histogram() {
    histo()
        .args(["words", "--buckets", "5"])
        .write_stdin("tiny enormous words\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bucket index 8 is outside"));
}

#[test]
fn missing_input() {
    histo()
        .args(["letters", "--input", "/nonexistent/histo/input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open"));
}
