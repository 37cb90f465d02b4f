use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::prelude::predicate;

fn check(
    file_name: &str,
    content: &str,
    additional_args: &[&str],
) -> Result<assert_cmd::assert::Assert, Box<dyn std::error::Error>> {
    let file = NamedTempFile::new(file_name)?;
    file.write_str(content)?;
    let mut cmd = Command::cargo_bin("argame")?;
    cmd.arg("check").arg("-f").arg(file.path()).args(additional_args);
    let assert = cmd.assert();
    file.close()?;
    Ok(assert)
}

#[test]
fn test_check_json() -> Result<(), Box<dyn std::error::Error>> {
    let instance = r#"{"Arguments": {"a": "it rains", "b": "the sky is blue"}, "Attack Relations": [["a", "b"]]}"#;
    check("af.json", instance, &["--print"])?
        .success()
        .stdout(predicate::eq("arg(a).\narg(b).\natt(a,b).\n"));
    Ok(())
}

#[test]
fn test_print_unreadable_identifier() -> Result<(), Box<dyn std::error::Error>> {
    let instance = r#"{"Arguments": {"a": "it rains", "b,c": "the sky is blue"}, "Attack Relations": [["a", "b,c"]]}"#;
    check("af.json", instance, &[])?.success();
    check("af.json", instance, &["--print"])?
        .failure()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn test_check_apx() -> Result<(), Box<dyn std::error::Error>> {
    check("af.apx", "arg(a).\narg(b).\natt(b,a).\n", &["-r", "apx"])?
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn test_check_unknown_reference() -> Result<(), Box<dyn std::error::Error>> {
    let instance = r#"{"Arguments": {"a": "it rains"}, "Attack Relations": [["a", "z"]]}"#;
    check("af.json", instance, &[])?.failure();
    Ok(())
}

#[test]
fn test_check_malformed_json() -> Result<(), Box<dyn std::error::Error>> {
    check("af.json", r#"{"Arguments": {"#, &[])?.failure();
    Ok(())
}

#[test]
fn test_check_missing_file() {
    let mut cmd = Command::cargo_bin("argame").unwrap();
    cmd.arg("check")
        .arg("-f")
        .arg("/this/file/does/not/exist.json")
        .assert()
        .failure();
}

#[test]
fn test_check_missing_input_arg() {
    let mut cmd = Command::cargo_bin("argame").unwrap();
    cmd.arg("check").assert().failure();
}
