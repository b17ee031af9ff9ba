#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

/// Writes an executable stub standing in for the Ruby interpreter.
fn write_stub(dir: &Path, body: &str) -> PathBuf {
    let stub = dir.join("fake-ruby");
    fs::write(&stub, format!("#!/bin/sh\n{body}")).unwrap();
    fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();
    stub
}

#[test]
fn generates_glue_from_stub_interpreter() {
    let temp = tempdir().unwrap();
    let stub = write_stub(
        temp.path(),
        "printf 'OpenStruct,Class\\nVERSION,String\\n'\n",
    );
    let out = temp.path().join("out/ostruct.rs");

    let mut cmd = Command::cargo_bin("autoimport").unwrap();
    cmd.env("AUTOIMPORT_RUBY", &stub)
        .arg("/checkout/lib")
        .arg("ostruct")
        .arg(&out)
        .arg("/checkout/lib/ostruct.rb,/checkout/lib/ostruct/version.rb")
        .assert()
        .success()
        .stdout(contains("✓ Generated glue for `ostruct`"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("// This file is generated by autoimport."));
    assert!(content.contains(r#"pub const PACKAGE: &str = "ostruct";"#));
    // Source paths are normalized: base prefix and .rb extension stripped.
    assert!(content.contains("\"ostruct\","));
    assert!(content.contains("\"ostruct/version\","));
    assert!(!content.contains("/checkout/lib"));
    assert!(!content.contains(".rb"));
    // Discovered constants land in the CONSTANTS table.
    assert!(content.contains(r#"("OpenStruct", Some("Class")),"#));
    assert!(content.contains(r#"("VERSION", Some("String")),"#));
    // ostruct is in the builtin implementor table.
    assert!(content.contains("//! - impl File for OpenStruct"));
}

#[test]
fn source_list_is_optional() {
    let temp = tempdir().unwrap();
    let stub = write_stub(temp.path(), "printf 'Set,Class\\n'\n");
    let out = temp.path().join("set.rs");

    let mut cmd = Command::cargo_bin("autoimport").unwrap();
    cmd.env("AUTOIMPORT_RUBY", &stub)
        .arg("/checkout/lib")
        .arg("set")
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("pub const SOURCES: &[&str] = &[\n];"));
    assert!(content.contains(r#"("Set", Some("Class")),"#));
}

#[test]
fn interpreter_failure_leaves_no_output_file() {
    let temp = tempdir().unwrap();
    let stub = write_stub(temp.path(), "echo 'cannot load such file' >&2\nexit 1\n");
    let out = temp.path().join("broken.rs");

    let mut cmd = Command::cargo_bin("autoimport").unwrap();
    cmd.env("AUTOIMPORT_RUBY", &stub)
        .arg("/checkout/lib")
        .arg("nonesuch")
        .arg(&out)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("constant discovery failed"));

    // The output is written only after subprocess output is fully captured,
    // so a failed scan must not produce a file.
    assert!(!out.exists());
}

#[test]
fn unknown_package_gets_no_implementor_docs() {
    let temp = tempdir().unwrap();
    let stub = write_stub(temp.path(), "printf 'Widget,Class\\n'\n");
    let out = temp.path().join("widget.rs");

    let mut cmd = Command::cargo_bin("autoimport").unwrap();
    cmd.env("AUTOIMPORT_RUBY", &stub)
        .arg("/checkout/lib")
        .arg("widget")
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(!content.contains("Known implementations"));
}
