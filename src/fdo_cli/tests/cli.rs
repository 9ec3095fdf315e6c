use assert_cmd::Command;
use predicates::prelude::*;

fn fdo() -> Command {
    Command::cargo_bin("fdo").expect("binary builds")
}

#[test]
fn compile_writes_canonical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("form.fdo");
    let bin = dir.path().join("form.bin");
    std::fs::write(&src, "uni_start_stream\nuni_end_stream\n").unwrap();

    fdo()
        .arg("compile")
        .arg("-i")
        .arg(&src)
        .arg("-o")
        .arg(&bin)
        .assert()
        .success();

    assert_eq!(
        std::fs::read(&bin).unwrap(),
        [0x00, 0x01, 0x00, 0x00, 0x02, 0x00]
    );
}

#[test]
fn decompile_round_trips_source() {
    let dir = tempfile::tempdir().unwrap();
    let bin = dir.path().join("form.bin");
    let out = dir.path().join("out.fdo");
    std::fs::write(&bin, [0x00, 0x01, 0x00, 0x00, 0x02, 0x00]).unwrap();

    fdo()
        .arg("decompile")
        .arg("-i")
        .arg(&bin)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("uni_start_stream"), "{text}");
    assert!(text.contains("uni_end_stream"), "{text}");
}

#[test]
fn parse_errors_can_be_json() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("broken.fdo");
    std::fs::write(&src, "mat_title <\"unterminated\n").unwrap();

    fdo()
        .arg("compile")
        .arg("-i")
        .arg(&src)
        .arg("--errors-json")
        .assert()
        .failure()
        .stdout(predicate::str::contains("parse_error"));
}

#[test]
fn catalog_lookup_prints_the_key() {
    fdo()
        .arg("catalog")
        .arg("--find")
        .arg("uni_start_stream")
        .assert()
        .success()
        .stdout(predicate::str::contains("uni_start_stream"));
}
