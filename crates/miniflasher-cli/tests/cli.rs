use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("miniflasher"))
}

fn repo_root() -> PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn golden(name: &str, file: &str) -> PathBuf {
    repo_root().join("tests").join("golden").join(name).join(file)
}

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("read json")).expect("valid json")
}

#[test]
fn help_lists_every_command() {
    for command in ["read", "write", "check", "request"] {
        cmd().arg(command).arg("--help").assert().success();
    }
}

#[test]
fn invalid_slot_is_a_usage_error() {
    let temp = TempDir::new().expect("tempdir");
    cmd()
        .arg("request")
        .arg("5")
        .arg("-o")
        .arg(temp.path().join("request.syx"))
        .assert()
        .failure()
        .stderr(contains("between 1 and 4"));
}

#[test]
fn read_to_stdout_matches_golden_document() {
    let assert = cmd()
        .arg("read")
        .arg("1")
        .arg("--dump")
        .arg(golden("factory", "dump.syx"))
        .arg("--stdout")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let actual: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(actual, read_json(&golden("factory", "preset.json")));
}

#[test]
fn read_refuses_overwrite_without_force() {
    let temp = TempDir::new().expect("tempdir");
    let target = temp.path().join("presets").join("fast.json");

    cmd()
        .arg("read")
        .arg("2")
        .arg(&target)
        .arg("--dump")
        .arg(golden("fast_arp", "dump.syx"))
        .assert()
        .success()
        .stderr(contains("OK:"));
    assert_eq!(read_json(&target), read_json(&golden("fast_arp", "preset.json")));

    cmd()
        .arg("read")
        .arg("2")
        .arg(&target)
        .arg("--dump")
        .arg(golden("fast_arp", "dump.syx"))
        .assert()
        .failure()
        .stderr(contains("already exists").and(contains("hint:")));

    cmd()
        .arg("read")
        .arg("2")
        .arg(&target)
        .arg("--dump")
        .arg(golden("fast_arp", "dump.syx"))
        .arg("--force")
        .arg("--quiet")
        .assert()
        .success()
        .stderr(contains("OK:").not());
}

#[test]
fn read_rejects_slot_mismatch() {
    cmd()
        .arg("read")
        .arg("3")
        .arg("--dump")
        .arg(golden("factory", "dump.syx"))
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(contains("dump holds preset slot 1, expected slot 3"));
}

#[test]
fn read_requires_json_target() {
    let temp = TempDir::new().expect("tempdir");
    cmd()
        .arg("read")
        .arg("1")
        .arg(temp.path().join("preset.yaml"))
        .arg("--dump")
        .arg(golden("factory", "dump.syx"))
        .assert()
        .failure()
        .stderr(contains("must be a .json file"));
}

#[test]
fn read_rejects_ambiguous_dump_pattern() {
    let temp = TempDir::new().expect("tempdir");
    let dump = fs::read(golden("factory", "dump.syx")).expect("read dump");
    fs::write(temp.path().join("a.syx"), &dump).expect("write a");
    fs::write(temp.path().join("b.syx"), &dump).expect("write b");

    cmd()
        .arg("read")
        .arg("1")
        .arg("--dump")
        .arg(temp.path().join("*.syx"))
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(contains("multiple files match pattern"));
}

#[test]
fn read_pattern_skips_files_that_are_not_dumps() {
    let temp = TempDir::new().expect("tempdir");
    let dump = fs::read(golden("factory", "dump.syx")).expect("read dump");
    fs::write(temp.path().join("slot1.syx"), &dump).expect("write dump");
    fs::write(temp.path().join("slot1.txt"), "notes").expect("write notes");

    let output = cmd()
        .arg("read")
        .arg("1")
        .arg("--dump")
        .arg(temp.path().join("slot1.*"))
        .arg("--stdout")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let actual: Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(actual, read_json(&golden("factory", "preset.json")));
}

#[test]
fn write_produces_store_request() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("store.syx");

    cmd()
        .arg("write")
        .arg("2")
        .arg(golden("fast_arp", "preset.json"))
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let store = fs::read(&output).expect("read store");
    let dump = fs::read(golden("fast_arp", "dump.syx")).expect("read dump");
    assert_eq!(store.len(), 110);
    assert_eq!(&store[..8], &[0xF0, 0x47, 0x7F, 0x7C, 0x61, 0x00, 0x01, 0x02]);
    assert_eq!(&store[8..], &dump[8..]);
}

#[test]
fn write_rejects_out_of_range_preset() {
    let temp = TempDir::new().expect("tempdir");
    let mut value = read_json(&golden("factory", "preset.json"));
    value["pad_midi_ch"] = Value::from(16);
    let preset = temp.path().join("bad.json");
    fs::write(&preset, value.to_string()).expect("write preset");
    let output = temp.path().join("store.syx");

    cmd()
        .arg("write")
        .arg("1")
        .arg(&preset)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(contains("pad_midi_ch must be in 0..=15, got 16").and(contains("hint:")));
    assert!(!output.exists());
}

#[test]
fn write_names_field_too_wide_for_its_byte() {
    let temp = TempDir::new().expect("tempdir");
    let mut value = read_json(&golden("factory", "preset.json"));
    value["pad_bank_1"][2]["note"] = Value::from(256);
    let preset = temp.path().join("wide.json");
    fs::write(&preset, value.to_string()).expect("write preset");
    let output = temp.path().join("store.syx");

    cmd()
        .arg("write")
        .arg("1")
        .arg(&preset)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .code(2)
        .stderr(
            contains("pad_bank_1[2].note must be in 0..=255, got 256").and(contains("hint:")),
        );
    assert!(!output.exists());
}

#[test]
fn check_names_negative_channel() {
    let temp = TempDir::new().expect("tempdir");
    let mut value = read_json(&golden("factory", "preset.json"));
    value["pad_midi_ch"] = Value::from(-1);
    let preset = temp.path().join("negative.json");
    fs::write(&preset, value.to_string()).expect("write preset");

    cmd()
        .arg("check")
        .arg(&preset)
        .assert()
        .failure()
        .stderr(contains("pad_midi_ch must be in 0..=15, got -1"));
}

#[test]
fn check_all_lists_violations() {
    let temp = TempDir::new().expect("tempdir");
    let mut value = read_json(&golden("factory", "preset.json"));
    value["arpeggio"]["tempo_bpm"] = Value::from(300);
    value["knobs"][3]["low"] = Value::from(120);
    value["knobs"][3]["high"] = Value::from(20);
    let preset = temp.path().join("bad.json");
    fs::write(&preset, value.to_string()).expect("write preset");

    cmd()
        .arg("check")
        .arg(&preset)
        .arg("--all")
        .assert()
        .failure()
        .stderr(
            contains("arpeggio.tempo_bpm")
                .and(contains("knobs[3]"))
                .and(contains("2 violation(s)")),
        );
}

#[test]
fn check_accepts_golden_document() {
    cmd()
        .arg("check")
        .arg(golden("factory", "preset.json"))
        .assert()
        .success()
        .stderr(contains("is valid"));
}

#[test]
fn request_writes_read_request() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("request.syx");

    cmd()
        .arg("request")
        .arg("4")
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let request = fs::read(&output).expect("read request");
    assert_eq!(
        request,
        vec![0xF0, 0x47, 0x7F, 0x7C, 0x63, 0x00, 0x01, 0x04, 0xF7]
    );
}
