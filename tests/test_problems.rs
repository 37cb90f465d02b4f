use assert_cmd::Command;
use predicates::prelude::predicate;

#[test]
fn test_problems() {
    let expected = "[SE-AD,SE-CO,SE-GR,SE-PR,EE-AD,EE-CO,EE-GR,EE-PR,DC-AD,DC-CO,DC-GR,DC-PR,DS-AD,DS-CO,DS-GR,DS-PR]\n";
    let mut cmd = Command::cargo_bin("argame").unwrap();
    cmd.arg("problems")
        .assert()
        .success()
        .stdout(predicate::eq(expected));
}
