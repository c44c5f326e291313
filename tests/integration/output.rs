//! Output destination handling.

use std::fs;

use crate::common::TestProject;

/// Writing to `-o` produces exactly what stdout would have shown
#[test]
fn test_output_file_matches_stdout() {
    let project = TestProject::with_site().unwrap();
    let args = ["-d", "site.json", "-e", "main", "layout.html", "partial.html"];

    let stdout = project.render(&args);

    project.command().args(args).args(["-o", "out.html"]).assert().success().stdout("");

    assert_eq!(project.read("out.html").unwrap(), stdout);
}

#[test]
fn test_output_replaces_existing_file() {
    let project = TestProject::with_site().unwrap();
    project.write("title.txt", "{{.site.title}}").unwrap();
    project.write("out.txt", "a much longer previous rendering").unwrap();

    project.command().args(["-d", "site.json", "-o", "out.txt", "title.txt"]).assert().success();

    assert_eq!(project.read("out.txt").unwrap(), "Docs");
}

/// A failed render leaves an existing output file as it was
#[test]
fn test_failed_render_keeps_existing_output() {
    let project = TestProject::with_site().unwrap();
    project.write("out.html", "previous").unwrap();

    project
        .command()
        .args(["-d", "site.json", "-e", "missing", "-o", "out.html", "layout.html"])
        .assert()
        .code(1);

    assert_eq!(project.read("out.html").unwrap(), "previous");
}

#[test]
fn test_output_directory_must_exist() {
    let project = TestProject::with_site().unwrap();
    project.write("title.txt", "{{.site.title}}").unwrap();

    project
        .command()
        .args(["-d", "site.json", "-o", "no/such/dir/out.txt", "title.txt"])
        .assert()
        .code(1);

    assert!(!project.file("no").exists());
}

#[test]
fn test_absolute_output_path() {
    let project = TestProject::with_site().unwrap();
    project.write("title.txt", "{{.site.title}}").unwrap();
    let out = project.file("abs.txt");

    project
        .command()
        .args(["-d", "site.json", "-o"])
        .arg(&out)
        .arg("title.txt")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(out).unwrap(), "Docs");
}
