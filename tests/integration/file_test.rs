//! Integration tests for single-file conversion content

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn run_csvconv(args: &[&str], cwd: &Path) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_csvconv"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run csvconv");

    (
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
        output.status.success(),
    )
}

#[test]
fn test_round_trip_content() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("in");
    let output = tmp.path().join("out");
    fs::create_dir_all(&input).unwrap();
    fs::create_dir_all(&output).unwrap();

    fs::write(input.join("data.csv"), "a,b,c\n1,2,hello\n").unwrap();

    let (stdout, _, ok) = run_csvconv(
        &[input.to_str().unwrap(), "-o", output.to_str().unwrap()],
        tmp.path(),
    );
    assert!(ok);
    assert!(stdout.contains("Converted 1 file in"), "{}", stdout);
    assert!(stdout.contains("ms."), "{}", stdout);

    let json = fs::read_to_string(output.join("data.json")).unwrap();
    assert_eq!(
        json,
        "[\n  {\n    \"a\": 1,\n    \"b\": 2,\n    \"c\": \"hello\"\n  }\n]"
    );
}

#[test]
fn test_literal_fields_keep_json_types() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("in");
    let output = tmp.path().join("out");
    fs::create_dir_all(&input).unwrap();
    fs::create_dir_all(&output).unwrap();

    fs::write(
        input.join("types.csv"),
        "flag,nothing,quoted,word\ntrue,null,\"x\",hello\n",
    )
    .unwrap();

    let (_, _, ok) = run_csvconv(
        &[
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--plain",
        ],
        tmp.path(),
    );
    assert!(ok);

    let json = fs::read_to_string(output.join("types.json")).unwrap();
    assert_eq!(
        json,
        r#"[{"flag":true,"nothing":null,"quoted":"x","word":"hello"}]"#
    );
}

#[test]
fn test_header_only_file_yields_empty_array() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("in");
    let output = tmp.path().join("out");
    fs::create_dir_all(&input).unwrap();
    fs::create_dir_all(&output).unwrap();

    fs::write(input.join("empty.csv"), "a,b,c\n").unwrap();

    let (_, _, ok) = run_csvconv(
        &[input.to_str().unwrap(), "-o", output.to_str().unwrap()],
        tmp.path(),
    );
    assert!(ok);

    let json = fs::read_to_string(output.join("empty.json")).unwrap();
    assert_eq!(json, "[]");
}

#[test]
fn test_running_twice_is_byte_identical() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("in");
    let output = tmp.path().join("out");
    fs::create_dir_all(&input).unwrap();
    fs::create_dir_all(&output).unwrap();

    fs::write(input.join("data.csv"), "id,name\n1,alpha\n2,beta\n").unwrap();

    let args = [input.to_str().unwrap(), "-o", output.to_str().unwrap()];
    let (_, _, ok) = run_csvconv(&args, tmp.path());
    assert!(ok);
    let first = fs::read(output.join("data.json")).unwrap();

    let (_, _, ok) = run_csvconv(&args, tmp.path());
    assert!(ok);
    let second = fs::read(output.join("data.json")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_pad_missing_flag() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("in");
    let output = tmp.path().join("out");
    fs::create_dir_all(&input).unwrap();
    fs::create_dir_all(&output).unwrap();

    fs::write(input.join("short.csv"), "a,b,c\n1\n").unwrap();

    let (_, _, ok) = run_csvconv(
        &[
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--plain",
            "--pad-missing",
        ],
        tmp.path(),
    );
    assert!(ok);

    let json = fs::read_to_string(output.join("short.json")).unwrap();
    assert_eq!(json, r#"[{"a":1,"b":null,"c":null}]"#);
}
