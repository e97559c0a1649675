use assert_cmd::Command;
use predicates::prelude::*;

fn tickstats() -> Command {
    Command::cargo_bin("tickstats").expect("binary built")
}

#[test]
fn no_arguments_prints_usage_and_succeeds() {
    tickstats()
        .assert()
        .success()
        .stdout(predicate::str::contains("need to specify input file"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn prints_report_for_a_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trades.csv");
    std::fs::write(&path, tickstats_mock::csv("TWO_DAY").unwrap()).unwrap();

    tickstats()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("trades: 8 over 2 day(s)"))
        .stdout(predicate::str::contains("trades below price q1/q2/q3: 2 / 4 / 6"))
        .stdout(predicate::str::contains("2012-09-04 max=+25000 min=+15000"));
}

#[test]
fn malformed_file_fails_with_message_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(
        &path,
        tickstats_mock::to_csv(&[("2012-09-03", "09:15:00", "100.00", 1)]),
    )
    .unwrap();

    tickstats()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn missing_file_fails() {
    tickstats()
        .arg("does/not/exist.csv")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn empty_file_fails() {
    let file = tempfile::NamedTempFile::new().unwrap();
    tickstats()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}
