// Integration testing by invoking the CLI as a subprocess.
use std::fs;

#[test]
fn new_with_preset_scaffolds_non_interactively() {
    let root = tempfile::tempdir().unwrap();
    let preset = root.path().join("answers.toml");
    let destination = root.path().join("app");
    fs::write(
        &preset,
        r#"
        project = "web"
        language = "type-script"
        state_management = "none"
        authentication = "none"
        styling = "none"
        "#,
    )
    .unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("forja").unwrap();
    cmd.arg("new")
        .arg(&destination)
        .arg("--preset")
        .arg(&preset)
        .arg("--yes")
        .arg("--skip-install");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("package.json"));

    assert!(destination.join("package.json").is_file());
    assert!(destination.join("src/App.tsx").is_file());
}

#[test]
fn new_with_incomplete_preset_fails_with_the_missing_category() {
    let root = tempfile::tempdir().unwrap();
    let preset = root.path().join("answers.toml");
    let destination = root.path().join("app");
    fs::write(&preset, "project = \"web\"").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("forja").unwrap();
    cmd.arg("new")
        .arg(&destination)
        .arg("--preset")
        .arg(&preset)
        .arg("--yes")
        .arg("--skip-install");

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("language"));

    assert!(!destination.exists());
}

#[test]
fn list_prints_every_category() {
    let mut cmd = assert_cmd::Command::cargo_bin("forja").unwrap();
    cmd.arg("list");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("TailwindCSS"))
        .stdout(predicates::str::contains("GraphQL"))
        .stdout(predicates::str::contains("Postgres"));
}
