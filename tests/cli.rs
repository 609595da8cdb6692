//! Integration tests for the sitegrade CLI

use std::thread;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

use sitegrade::server::StaticServer;

fn sitegrade() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("sitegrade"))
}

const PAGE: &str = "<!DOCTYPE html>\n<html>\n<head><title>Sample</title></head>\n\
                    <body><h1>Hello</h1></body>\n</html>\n";

/// Expected report for [`PAGE`] against checks `h1`, `img`, `title`
const REPORT: &str = "{\n    \"h1\": true,\n    \"img\": false,\n    \"title\": true\n}";

fn write(temp: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = temp.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Starts a server for `contents` on an ephemeral port, returning its URL
fn serve_page(temp: &TempDir, contents: &str) -> String {
    let page = write(temp, "served.html", contents);
    let server = StaticServer::bind("127.0.0.1:0", &page).unwrap();
    let port = server.port();
    thread::spawn(move || server.run());
    format!("http://127.0.0.1:{port}/")
}

#[test]
fn test_version() {
    sitegrade()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sitegrade"));
}

#[test]
fn test_help() {
    sitegrade()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grade HTML pages"))
        .stdout(predicate::str::contains("--checks"));
}

#[test]
fn test_grades_local_files_with_defaults() {
    let temp = TempDir::new().unwrap();
    write(&temp, "index.html", PAGE);
    // Out of order plus a duplicate; the report comes out sorted and deduped.
    write(&temp, "checks.json", r#"["title", "img", "h1", "title"]"#);

    sitegrade()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(format!("{REPORT}\n"));

    let on_disk = std::fs::read_to_string(temp.path().join("checked.json")).unwrap();
    assert_eq!(on_disk, REPORT);
}

#[test]
fn test_explicit_paths_override_defaults() {
    let temp = TempDir::new().unwrap();
    write(&temp, "page.html", PAGE);
    write(&temp, "rules.json", r#"["h1"]"#);

    sitegrade()
        .current_dir(temp.path())
        .args(["--file", "page.html", "--checks", "rules.json", "--outfile", "graded.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"h1\": true"));

    assert!(temp.path().join("graded.json").exists());
    assert!(!temp.path().join("checked.json").exists());
}

#[test]
fn test_missing_html_file_fails() {
    let temp = TempDir::new().unwrap();
    write(&temp, "checks.json", r#"["h1"]"#);

    sitegrade()
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("index.html does not exist"));

    assert!(!temp.path().join("checked.json").exists());
}

#[test]
fn test_missing_checks_file_fails() {
    let temp = TempDir::new().unwrap();
    write(&temp, "index.html", PAGE);

    sitegrade()
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("checks.json does not exist"));
}

#[test]
fn test_malformed_checks_fail() {
    let temp = TempDir::new().unwrap();
    write(&temp, "index.html", PAGE);
    write(&temp, "checks.json", r#"{"h1": true}"#);

    sitegrade()
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid checks json"));
}

#[test]
fn test_invalid_selector_fails_without_a_report() {
    let temp = TempDir::new().unwrap();
    write(&temp, "index.html", PAGE);
    write(&temp, "checks.json", r#"["h1", "???"]"#);

    sitegrade()
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid selector"));

    assert!(!temp.path().join("checked.json").exists());
}

#[test]
fn test_grades_non_utf8_pages() {
    let temp = TempDir::new().unwrap();
    // Latin-1 page: the 0xE9 byte is not valid UTF-8.
    std::fs::write(
        temp.path().join("index.html"),
        b"<html><body><h1>caf\xE9</h1></body></html>",
    )
    .unwrap();
    write(&temp, "checks.json", r#"["h1", "img"]"#);

    sitegrade()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"h1\": true"));
}

#[test]
fn test_reruns_are_byte_identical() {
    let temp = TempDir::new().unwrap();
    write(&temp, "index.html", PAGE);
    write(&temp, "checks.json", r#"["h1", "img", "title"]"#);

    sitegrade().current_dir(temp.path()).assert().success();
    let first = std::fs::read_to_string(temp.path().join("checked.json")).unwrap();

    sitegrade().current_dir(temp.path()).assert().success();
    let second = std::fs::read_to_string(temp.path().join("checked.json")).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, REPORT);
}

#[test]
fn test_unreachable_url_fails() {
    let temp = TempDir::new().unwrap();
    write(&temp, "checks.json", r#"["h1"]"#);

    // Port 9 is the discard service, which nothing listens on here.
    sitegrade()
        .current_dir(temp.path())
        .args(["--url", "http://127.0.0.1:9/"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unable to load html from"));

    assert!(!temp.path().join("checked.json").exists());
}

#[test]
fn test_grades_a_served_page() {
    let temp = TempDir::new().unwrap();
    write(&temp, "checks.json", r#"["title", "img", "h1"]"#);
    let url = serve_page(&temp, PAGE);

    sitegrade()
        .current_dir(temp.path())
        .args(["--url", &url])
        .assert()
        .success()
        .stdout(format!("{REPORT}\n"));

    let on_disk = std::fs::read_to_string(temp.path().join("checked.json")).unwrap();
    assert_eq!(on_disk, REPORT);
}

#[test]
fn test_url_takes_precedence_over_file() {
    let temp = TempDir::new().unwrap();
    // The local file has an h1; the served page does not.
    write(&temp, "index.html", PAGE);
    write(&temp, "checks.json", r#"["h1"]"#);
    let url = serve_page(&temp, "<html><body><p>no headline</p></body></html>");

    sitegrade()
        .current_dir(temp.path())
        .args(["--url", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"h1\": false"));
}

#[test]
fn test_serve_with_missing_page_fails() {
    let temp = TempDir::new().unwrap();

    sitegrade()
        .current_dir(temp.path())
        .args(["serve", "--file", "missing.html"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing.html does not exist"));
}
