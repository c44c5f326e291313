//! Root and named template execution across several files.

use predicates::prelude::*;

use crate::common::TestProject;

/// `-e main` runs a template defined in one file that calls one from another
#[test]
fn test_execute_named_template_across_files() {
    let project = TestProject::with_site().unwrap();
    project.write("body.html", "<p>Body</p>").unwrap();

    let stdout = project.render(&[
        "-d",
        "site.json",
        "-c",
        "body.html",
        "-e",
        "main",
        "layout.html",
        "partial.html",
    ]);

    assert_eq!(stdout, "<h1>Docs</h1><ul><li>intro</li><li>usage</li></ul><p>Body</p>");
}

/// Without `-e` the root is the last file with a body, so partials may come first
#[test]
fn test_page_is_root_whatever_the_file_order() {
    let project = TestProject::with_site().unwrap();
    project.write("index.html", r#"[{{template "nav" .}}]"#).unwrap();

    let stdout = project.render(&["-d", "site.json", "index.html", "partial.html"]);
    assert_eq!(stdout, "[<ul><li>intro</li><li>usage</li></ul>]");

    let stdout = project.render(&["-d", "site.json", "partial.html", "index.html"]);
    assert_eq!(stdout, "[<ul><li>intro</li><li>usage</li></ul>]");
}

#[test]
fn test_later_body_is_root() {
    let project = TestProject::new().unwrap();
    project.write("a.html", "A").unwrap();
    project.write("b.html", "B").unwrap();

    let stdout = project.render(&["a.html", "b.html"]);
    assert_eq!(stdout, "B");
}

#[test]
fn test_definitions_only_render_nothing() {
    let project = TestProject::with_site().unwrap();

    let stdout = project.render(&["-d", "site.json", "layout.html", "partial.html"]);
    assert_eq!(stdout, "");
}

#[test]
fn test_execute_by_file_name() {
    let project = TestProject::with_site().unwrap();
    project.write("first.txt", "first").unwrap();
    project.write("second.txt", "second {{.count}}").unwrap();

    let stdout = project.render(&["-d", "site.json", "-e", "second.txt", "first.txt", "second.txt"]);
    assert_eq!(stdout, "second 3");
}

#[test]
fn test_unknown_template_name_suggests_closest() {
    let project = TestProject::with_site().unwrap();

    project
        .command()
        .args(["-d", "site.json", "-e", "mian", "-o", "out.html", "layout.html", "partial.html"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Template \"mian\" is not defined"))
        .stderr(predicate::str::contains("Did you mean \"main\"?"));

    assert!(!project.exists("out.html"));
}

#[test]
fn test_parse_error_names_the_file() {
    let project = TestProject::with_site().unwrap();
    project.write("broken.html", "{{if .draft}}never closed").unwrap();

    project
        .command()
        .args(["-d", "site.json", "layout.html", "broken.html"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse template"))
        .stderr(predicate::str::contains("broken.html"));
}

#[test]
fn test_missing_template_file() {
    let project = TestProject::with_site().unwrap();

    project
        .command()
        .args(["-d", "site.json", "nope.html"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nope.html"));
}
