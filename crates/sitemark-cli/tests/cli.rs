use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn bin_path() -> PathBuf {
    if let Some(path) = env::var_os("CARGO_BIN_EXE_sitemark-cli") {
        return PathBuf::from(path);
    }
    if let Some(path) = env::var_os("CARGO_BIN_EXE_sitemark_cli") {
        return PathBuf::from(path);
    }
    let exe = env::current_exe().expect("current exe");
    let mut debug_dir = exe.as_path();
    while let Some(parent) = debug_dir.parent() {
        if parent.file_name().and_then(|name| name.to_str()) == Some("debug") {
            let candidate = parent.join("sitemark-cli");
            if candidate.exists() {
                return candidate;
            }
        }
        debug_dir = parent;
    }
    panic!("binary path missing");
}

fn run_build(root: &Path) -> Output {
    Command::new(bin_path())
        .args([
            "--content",
            root.join("content").to_str().expect("path"),
            "--static",
            root.join("static").to_str().expect("path"),
            "--template",
            root.join("template.html").to_str().expect("path"),
            "--out",
            root.join("public").to_str().expect("path"),
        ])
        .output()
        .expect("run")
}

fn scaffold_site(root: &Path) {
    fs::create_dir_all(root.join("content/blog")).expect("content dir");
    fs::write(root.join("content/index.md"), "# Home\n\nHello **world**\n").expect("index page");
    fs::write(
        root.join("content/blog/post.md"),
        "# Post\n\n- a\n- b\n",
    )
    .expect("nested page");
    fs::create_dir_all(root.join("static/css")).expect("static dir");
    fs::write(root.join("static/css/style.css"), "body {}\n").expect("stylesheet");
    fs::write(
        root.join("template.html"),
        "<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>",
    )
    .expect("template");
}

#[test]
fn build_generates_pages_and_copies_static() {
    let site = TempDir::new().expect("temp dir");
    let root = site.path();
    scaffold_site(root);

    let output = run_build(root);
    assert!(
        output.status.success(),
        "build failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let index = fs::read_to_string(root.join("public/index.html")).expect("index output");
    assert!(index.contains("<title>Home</title>"), "title interpolated");
    assert!(
        index.contains("<p>Hello <b>world</b></p>"),
        "content interpolated"
    );

    let post = fs::read_to_string(root.join("public/blog/post.html")).expect("nested output");
    assert!(post.contains("<ul><li>a</li><li>b</li></ul>"), "list rendered");

    assert!(
        root.join("public/css/style.css").exists(),
        "static assets copied"
    );
}

#[test]
fn stale_output_is_replaced() {
    let site = TempDir::new().expect("temp dir");
    let root = site.path();
    scaffold_site(root);
    fs::create_dir_all(root.join("public")).expect("stale dir");
    fs::write(root.join("public/stale.txt"), "old").expect("stale file");

    let output = run_build(root);
    assert!(output.status.success(), "expected success exit code");
    assert!(!root.join("public/stale.txt").exists(), "stale output removed");
}

#[test]
fn page_without_title_fails_the_build() {
    let site = TempDir::new().expect("temp dir");
    let root = site.path();
    scaffold_site(root);
    fs::write(root.join("content/untitled.md"), "just a paragraph\n").expect("page");

    let output = run_build(root);
    assert!(!output.status.success(), "expected error exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("title"), "expected title error in stderr");
}

#[test]
fn broken_markdown_fails_the_build() {
    let site = TempDir::new().expect("temp dir");
    let root = site.path();
    scaffold_site(root);
    fs::write(root.join("content/broken.md"), "# Broken\n\nbad `span\n").expect("page");

    let output = run_build(root);
    assert!(!output.status.success(), "expected error exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unmatched"), "expected delimiter error in stderr");
}

#[test]
fn unexpected_argument_prints_usage() {
    let output = Command::new(bin_path())
        .arg("--bogus")
        .output()
        .expect("run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"), "expected usage in stderr");
}
