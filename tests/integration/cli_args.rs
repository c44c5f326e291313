//! Argument handling: help, version and usage errors.

use predicates::prelude::*;

use crate::common::{TestProject, gotemplater_command};

/// Running with no arguments prints help and succeeds without touching files
#[test]
fn test_no_arguments_prints_help() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--execute"))
        .stdout(predicate::str::contains("EXAMPLES:"));

    let entries = std::fs::read_dir(project.path()).unwrap().count();
    assert_eq!(entries, 0);
}

#[test]
fn test_help_flag() {
    gotemplater_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gotemplater -f yaml -d data.yaml template.html"));
}

#[test]
fn test_version_flag() {
    gotemplater_command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// An unknown flag fails before any output file is created
#[test]
fn test_unrecognized_flag() {
    let project = TestProject::with_site().unwrap();

    project
        .command()
        .args(["--bogus", "-d", "site.json", "-o", "out.html", "layout.html"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unrecognized flag \"--bogus\""));

    assert!(!project.exists("out.html"));
}

#[test]
fn test_unrecognized_short_flag() {
    let project = TestProject::with_site().unwrap();

    project
        .command()
        .args(["-z", "layout.html"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unrecognized flag"));
}

/// Joined values and `--` are not flag spellings
#[test]
fn test_joined_values_are_unrecognized() {
    let project = TestProject::with_site().unwrap();

    for args in [
        vec!["-d", "site.json", "-oout1.html", "layout.html"],
        vec!["-d", "site.json", "--output=out2.html", "layout.html"],
        vec!["--", "-x"],
    ] {
        project
            .command()
            .args(&args)
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Unrecognized flag"));
    }

    assert!(!project.exists("out1.html"));
    assert!(!project.exists("out2.html"));
}

#[test]
fn test_missing_template_argument() {
    let project = TestProject::with_site().unwrap();

    project
        .command()
        .args(["-d", "site.json"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unsupported_format() {
    let project = TestProject::with_site().unwrap();

    project
        .command()
        .args(["-f", "TOML", "-d", "site.json", "-o", "out.html", "layout.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("The data format \"toml\" is invalid or not supported"));

    assert!(!project.exists("out.html"));
}

#[test]
fn test_format_is_case_insensitive() {
    let project = TestProject::with_site().unwrap();
    project.write("title.txt", "{{.site.title}}").unwrap();

    let stdout = project.render(&["-f", "YaMl", "-d", "site.yaml", "title.txt"]);
    assert_eq!(stdout, "Docs");
}

/// A flag value may itself start with a hyphen
#[test]
fn test_hyphen_value_is_taken_literally() {
    let project = TestProject::with_site().unwrap();
    project.write("title.txt", "{{.site.title}}").unwrap();

    project.command().args(["-d", "site.json", "-o", "-e", "title.txt"]).assert().success();

    assert_eq!(project.read("-e").unwrap(), "Docs");
}

#[test]
fn test_repeated_flag_last_value_wins() {
    let project = TestProject::with_site().unwrap();
    project.write("other.json", r#"{"site": {"title": "Other"}}"#).unwrap();
    project.write("title.txt", "{{.site.title}}").unwrap();

    let stdout = project.render(&["-d", "site.json", "-d", "other.json", "title.txt"]);
    assert_eq!(stdout, "Other");
}

/// Data and content cannot both be read from stdin
#[test]
fn test_stdin_conflict() {
    let project = TestProject::with_site().unwrap();

    project
        .command()
        .args(["-c", "-", "-o", "out.html", "layout.html"])
        .write_stdin("{}")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Standard input can only be read once"));

    assert!(!project.exists("out.html"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let project = TestProject::with_site().unwrap();
    project.write("title.txt", "{{.site.title}}").unwrap();

    project
        .command()
        .args(["-v", "-d", "site.json", "title.txt"])
        .assert()
        .success()
        .stdout("Docs")
        .stderr(predicate::str::contains("Rendered"));
}
