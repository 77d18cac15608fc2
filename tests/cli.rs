use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

const BINARY: &str = "bioutils";
const TWO_SEQUENCES: &str = "tests/data/two_sequences.fa";
type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn file_doesnt_exist() -> TestResult {
    let mut cmd = Command::cargo_bin(BINARY)?;

    cmd.arg("parse").arg("file_which_does_not_exist.fa");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));

    Ok(())
}

#[test]
fn parse_to_fasta() -> TestResult {
    Command::cargo_bin(BINARY)?
        .args(["parse", TWO_SEQUENCES])
        .assert()
        .success()
        .stdout(">seq1 first sample\nCAGTCAGTACGTACGTGTACTGCCGTA\n>seq2\nGGATCCAAGCTT\n");

    Ok(())
}

#[test]
fn parse_to_json() -> TestResult {
    let output = Command::cargo_bin(BINARY)?
        .args(["parse", "--json", TWO_SEQUENCES])
        .output()?;
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(records[1]["id"], "seq2");
    assert_eq!(records[1]["sequence"], "GGATCCAAGCTT");

    Ok(())
}

#[test]
fn convert_json_records() -> TestResult {
    let temp = assert_fs::NamedTempFile::new("converted.fa")?;

    Command::cargo_bin(BINARY)?
        .args(["convert", "tests/data/records.json", "-o"])
        .arg(temp.path())
        .assert()
        .success();
    temp.assert(">a\nACGT\n>b desc\nGGCC\n");

    Ok(())
}

#[test]
fn convert_rejects_bad_input() -> TestResult {
    let temp = assert_fs::NamedTempFile::new("rejected.fa")?;

    Command::cargo_bin(BINARY)?
        .args(["convert", "tests/data/bad_records.json", "-o"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("record 1"));
    temp.assert(predicate::path::missing());

    Command::cargo_bin(BINARY)?
        .args(["convert", "tests/data/records.json", "--format", "genbank", "-o"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("genbank format is not available yet"));

    Ok(())
}

#[test]
fn revcomp_file() -> TestResult {
    Command::cargo_bin(BINARY)?
        .args(["revcomp", TWO_SEQUENCES])
        .assert()
        .success()
        .stdout(predicate::str::contains(">seq2\nAAGCTTGGATCC\n"));

    Ok(())
}

#[test]
fn stats_report() -> TestResult {
    let output = Command::cargo_bin(BINARY)?
        .args(["stats", TWO_SEQUENCES])
        .output()?;
    assert!(output.status.success());

    let stats: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(stats[0]["length"], 27);
    assert_eq!(stats[0]["valid_dna"], true);
    assert_eq!(stats[1]["gc_content"], 50.0);

    Ok(())
}

#[test]
fn melting_temperature() -> TestResult {
    Command::cargo_bin(BINARY)?
        .args(["tm", "CAGTCAGTACGTACGTGTACTGCCGTA"])
        .assert()
        .success()
        .stdout("59.87\n");

    Ok(())
}

#[test]
fn hash_string() -> TestResult {
    Command::cargo_bin(BINARY)?
        .args(["hash", "abc"])
        .assert()
        .success()
        .stdout("23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7\n");

    Ok(())
}

#[test]
fn sequence_info() -> TestResult {
    let output = Command::cargo_bin(BINARY)?
        .args(["info", "AC GT", "--description", "dropped"])
        .output()?;
    assert!(output.status.success());

    let info: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert!(info["description"].is_null());
    assert_eq!(info["sequence"], "ACGT");
    assert_eq!(info["sequence_id"].as_str().map(str::len), Some(32));

    Ok(())
}

#[test]
fn list_by_extension() -> TestResult {
    let dir = assert_fs::TempDir::new()?;
    dir.child("a.fa").touch()?;
    dir.child("b.fa").touch()?;
    dir.child("c.fq").touch()?;

    Command::cargo_bin(BINARY)?
        .arg("list")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.fa").and(predicate::str::contains("b.fa")))
        .stdout(predicate::str::contains("c.fq").not());

    Command::cargo_bin(BINARY)?
        .arg("list")
        .arg(dir.path())
        .args(["-e", ".bam"])
        .assert()
        .failure();

    Ok(())
}

#[test]
fn gzip_program_failure_is_reported() -> TestResult {
    let dir = assert_fs::TempDir::new()?;
    let file = dir.child("a.fa");
    file.write_str(">a\nACGT\n")?;

    Command::cargo_bin(BINARY)?
        .args(["gzip", "--gzip-program", "false"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to gzip"));

    Ok(())
}

#[test]
fn enzymes_list() -> TestResult {
    Command::cargo_bin(BINARY)?
        .arg("enzymes")
        .assert()
        .success()
        .stdout(predicate::str::contains("EcoRI\n"));

    Ok(())
}
