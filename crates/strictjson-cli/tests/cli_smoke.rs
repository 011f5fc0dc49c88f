use assert_cmd::prelude::*;
use predicates::prelude::*;
use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("strictjson-cli"))
        .arg("--help")
        .assert()
        .success();
    Ok(())
}

#[test]
fn normalizes_file_into_success_envelope() -> Result<(), Box<dyn std::error::Error>> {
    let input = "{\n  \"a\": 1,\n  \"b\": [true, \"x\"]\n}\n";
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", input)?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("strictjson-cli"))
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let envelope: serde_json::Value = serde_json::from_str(&String::from_utf8(output.stdout)?)?;
    assert_eq!(envelope["ok"], serde_json::Value::Bool(true));
    assert_eq!(
        envelope["parsed_content"],
        serde_json::json!({"a": 1, "b": [true, "x"]})
    );
    assert!(envelope.get("error").is_none());
    Ok(())
}

#[test]
fn reads_stdin_when_no_file_given() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("strictjson-cli"))
        .write_stdin("[1, 2, 3]")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"parsed_content\":[1,2,3]"));
    Ok(())
}

#[test]
fn malformed_input_yields_failure_envelope_and_nonzero_exit() -> Result<(), Box<dyn std::error::Error>>
{
    let output = Command::new(assert_cmd::cargo::cargo_bin!("strictjson-cli"))
        .write_stdin("{oops")
        .output()?;
    assert!(!output.status.success());
    let envelope: serde_json::Value = serde_json::from_str(&String::from_utf8(output.stdout)?)?;
    assert_eq!(envelope["ok"], serde_json::Value::Bool(false));
    let error = envelope["error"].as_str().unwrap_or_default();
    assert!(error.starts_with("JsonDecodeError: "), "got {error}");
    Ok(())
}

#[test]
fn threshold_flag_switches_large_arrays_to_summaries() -> Result<(), Box<dyn std::error::Error>> {
    let input = "[1, 2, 3, 4, 5, 6]";

    let output = Command::new(assert_cmd::cargo::cargo_bin!("strictjson-cli"))
        .args(["--threshold", "5"])
        .write_stdin(input)
        .output()?;
    assert!(output.status.success());
    let envelope: serde_json::Value = serde_json::from_str(&String::from_utf8(output.stdout)?)?;
    let summary = &envelope["parsed_content"];
    assert_eq!(summary["__ndarray__"], serde_json::Value::Bool(true));
    assert_eq!(summary["dtype"], "int64");
    assert_eq!(summary["shape"], serde_json::json!([6]));
    assert_eq!(summary["min"], serde_json::json!(1.0));
    assert_eq!(summary["max"], serde_json::json!(6.0));

    // Same input below the default threshold stays a plain array.
    Command::new(assert_cmd::cargo::cargo_bin!("strictjson-cli"))
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"parsed_content\":[1,2,3,4,5,6]"));
    Ok(())
}

#[test]
fn no_summarize_flag_expands_everything() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("strictjson-cli"))
        .args(["--threshold", "2", "--no-summarize"])
        .write_stdin("[1, 2, 3, 4]")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"parsed_content\":[1,2,3,4]"));
    Ok(())
}

#[test]
fn sample_flag_bounds_the_summary_sample() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(assert_cmd::cargo::cargo_bin!("strictjson-cli"))
        .args(["--threshold", "3", "--sample", "2"])
        .write_stdin("[9, 8, 7, 6]")
        .output()?;
    assert!(output.status.success());
    let envelope: serde_json::Value = serde_json::from_str(&String::from_utf8(output.stdout)?)?;
    assert_eq!(envelope["parsed_content"]["sample"], serde_json::json!([9, 8]));
    Ok(())
}
