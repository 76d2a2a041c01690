//! End-to-end tests driving the codecombine binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn codecombine() -> Command {
    Command::cargo_bin("codecombine").unwrap()
}

fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        let path = root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

#[test]
fn test_combine_matching_files_only() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("src");
    write_tree(
        &root,
        &[
            ("X.java", "class X {}"),
            ("Y.txt", "not for export"),
            ("sub/Z.java", "class Z {}"),
        ],
    );
    let output = temp.path().join("all_code.txt");

    codecombine()
        .args(["--roots", root.to_str().unwrap()])
        .args(["--extensions", ".java"])
        .args(["--output", output.to_str().unwrap()])
        .args(["--output-format", "plain", "--no-pause"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added:").count(2))
        .stdout(predicate::str::contains("Files combined and saved to:"));

    let combined = fs::read_to_string(&output).unwrap();
    assert!(combined.contains("class X {}"));
    assert!(combined.contains("class Z {}"));
    assert!(combined.contains("===== "));
    assert!(!combined.contains("not for export"));
    // Y.txt was never enumerated, so it is not reported as missing either.
    assert!(!combined.contains("Y.txt"));
}

#[test]
fn test_delimiter_format() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("src");
    write_tree(&root, &[("Book.java", "class Book {}")]);
    let output = temp.path().join("out.txt");

    codecombine()
        .args(["--roots", root.to_str().unwrap()])
        .args(["--extensions", ".java"])
        .args(["--output", output.to_str().unwrap()])
        .args(["--output-format", "plain", "--no-pause"])
        .assert()
        .success();

    let combined = fs::read_to_string(&output).unwrap();
    let expected = format!(
        "\n\n===== {} =====\n\nclass Book {{}}",
        root.join("Book.java").display()
    );
    assert_eq!(combined, expected);
}

#[test]
fn test_output_is_overwritten_between_runs() {
    let temp = TempDir::new().unwrap();
    let root_a = temp.path().join("a");
    let root_b = temp.path().join("b");
    write_tree(&root_a, &[("first.java", "first run payload")]);
    write_tree(&root_b, &[("second.java", "second run payload")]);
    let output = temp.path().join("out.txt");

    for root in [&root_a, &root_b] {
        codecombine()
            .args(["--roots", root.to_str().unwrap()])
            .args(["--extensions", ".java"])
            .args(["--output", output.to_str().unwrap()])
            .args(["--output-format", "plain", "--no-pause"])
            .assert()
            .success();
    }

    let combined = fs::read_to_string(&output).unwrap();
    assert!(!combined.contains("first run payload"));
    assert!(combined.contains("second run payload"));
}

#[test]
fn test_missing_roots_warn_but_complete() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("all_code.txt");

    // Default profile roots do not exist inside the temp dir.
    codecombine()
        .current_dir(temp.path())
        .args(["--output-format", "plain", "--no-pause", "-v"])
        .args(["--output", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Root directory not found"));

    // The run still truncates/creates the output file.
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_unopenable_output_fails() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("src");
    write_tree(&root, &[("A.java", "a")]);
    let output = temp.path().join("no_such_dir/out.txt");

    codecombine()
        .args(["--roots", root.to_str().unwrap()])
        .args(["--extensions", ".java"])
        .args(["--output", output.to_str().unwrap()])
        .args(["--output-format", "plain", "--no-pause"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot open output file"));
}

#[test]
fn test_empty_extension_override_is_config_error() {
    codecombine()
        .args(["--extensions", " , "])
        .args(["--output-format", "plain", "--no-pause"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_dry_run_lists_plan_without_writing() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("src");
    write_tree(&root, &[("A.java", "a"), ("B.java", "b")]);
    let output = temp.path().join("out.txt");

    codecombine()
        .args(["--roots", root.to_str().unwrap()])
        .args(["--extensions", ".java"])
        .args(["--output", output.to_str().unwrap()])
        .args(["--output-format", "plain", "--no-pause", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Files that would be combined: 2"))
        .stdout(predicate::str::contains("A.java"));

    assert!(!output.exists());
}

#[test]
fn test_generate_config() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("codecombine.toml");

    codecombine()
        .args(["--generate-config", "--config", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated sample configuration"));

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[scan]"));
    assert!(content.contains("[output]"));
}

#[test]
fn test_config_file_drives_run() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("code");
    write_tree(&root, &[("Main.java", "class Main {}")]);
    let output = temp.path().join("from_config.txt");

    let config_path = temp.path().join("job.toml");
    fs::write(
        &config_path,
        format!(
            "[scan]\nroots = [{:?}]\nextensions = [\".java\"]\n\n[output]\nfile = {:?}\npause_on_exit = false\n",
            root.to_str().unwrap(),
            output.to_str().unwrap(),
        ),
    )
    .unwrap();

    codecombine()
        .args(["--config", config_path.to_str().unwrap()])
        .args(["--output-format", "plain"])
        .assert()
        .success();

    assert!(fs::read_to_string(&output).unwrap().contains("class Main {}"));
}

#[test]
fn test_json_output_mode() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("src");
    write_tree(&root, &[("A.java", "a")]);
    let output = temp.path().join("out.txt");

    let assert = codecombine()
        .args(["--roots", root.to_str().unwrap()])
        .args(["--extensions", ".java"])
        .args(["--output", output.to_str().unwrap()])
        .args(["--output-format", "json", "--no-pause"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let entry_line = stdout
        .lines()
        .find(|l| l.contains("\"type\":\"entry\""))
        .expect("an entry object should be emitted");
    let value: serde_json::Value = serde_json::from_str(entry_line).unwrap();
    assert_eq!(value["outcome"], "written");
}

#[test]
fn test_case_sensitive_suffix_filter() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("src");
    write_tree(&root, &[("Lower.java", "lower"), ("Upper.JAVA", "upper")]);
    let output = temp.path().join("out.txt");

    codecombine()
        .args(["--roots", root.to_str().unwrap()])
        .args(["--extensions", ".java"])
        .args(["--output", output.to_str().unwrap()])
        .args(["--output-format", "plain", "--no-pause"])
        .assert()
        .success();

    let combined = fs::read_to_string(&output).unwrap();
    assert!(combined.contains("lower"));
    assert!(!combined.contains("upper"));
}
