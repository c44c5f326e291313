//! Data decoding: JSON, YAML, stdin and malformed input.

use predicates::prelude::*;

use crate::common::TestProject;

const SUMMARY: &str =
    "{{.site.title}}: {{range .site.pages}}{{.}} {{end}}count={{.count}} draft={{.draft}}";

/// Equivalent JSON and YAML documents render byte-identical output
#[test]
fn test_json_and_yaml_render_identically() {
    let project = TestProject::with_site().unwrap();
    project.write("summary.txt", SUMMARY).unwrap();

    let from_json = project.render(&["-d", "site.json", "summary.txt"]);
    let from_yaml = project.render(&["-f", "yaml", "-d", "site.yaml", "summary.txt"]);

    assert_eq!(from_json, from_yaml);
    assert!(from_json.starts_with("Docs: intro usage "));
}

#[test]
fn test_data_from_stdin() {
    let project = TestProject::with_site().unwrap();
    project.write("hello.txt", "Hello {{.Name}}").unwrap();

    project
        .command()
        .arg("hello.txt")
        .write_stdin(r#"{"Name": "Ada"}"#)
        .assert()
        .success()
        .stdout("Hello Ada");
}

#[test]
fn test_yaml_data_from_explicit_stdin() {
    let project = TestProject::with_site().unwrap();
    project.write("hello.txt", "Hello {{.Name}}").unwrap();

    project
        .command()
        .args(["-f", "yaml", "-d", "-", "hello.txt"])
        .write_stdin("Name: Grace\n")
        .assert()
        .success()
        .stdout("Hello Grace");
}

/// Empty data is an empty mapping, so static templates still render
#[test]
fn test_empty_data_renders_static_template() {
    let project = TestProject::new().unwrap();
    project.write("empty.json", "").unwrap();
    project.write("static.txt", "static text").unwrap();

    let stdout = project.render(&["-d", "empty.json", "static.txt"]);
    assert_eq!(stdout, "static text");

    project
        .command()
        .arg("static.txt")
        .write_stdin("")
        .assert()
        .success()
        .stdout("static text");
}

#[test]
fn test_invalid_json() {
    let project = TestProject::with_site().unwrap();
    project.write("broken.json", r#"{"site": "#).unwrap();

    project
        .command()
        .args(["-d", "broken.json", "-o", "out.html", "layout.html"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to decode json data"));

    assert!(!project.exists("out.html"));
}

#[test]
fn test_invalid_yaml() {
    let project = TestProject::with_site().unwrap();
    project.write("broken.yaml", "site: [unclosed\n").unwrap();

    project
        .command()
        .args(["-f", "yaml", "-d", "broken.yaml", "layout.html"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to decode yaml data"));
}

#[test]
fn test_top_level_must_be_a_mapping() {
    let project = TestProject::with_site().unwrap();
    project.write("list.json", "[1, 2, 3]").unwrap();

    project
        .command()
        .args(["-d", "list.json", "layout.html"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must be a mapping at the top level"));
}

#[test]
fn test_missing_data_file() {
    let project = TestProject::with_site().unwrap();

    project
        .command()
        .args(["-d", "nope.json", "-o", "out.html", "layout.html"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nope.json"));

    assert!(!project.exists("out.html"));
}
