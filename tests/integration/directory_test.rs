//! Integration tests for batch directory conversion

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
fn test_only_csv_files_are_selected() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("in");
    let output = tmp.path().join("out");
    fs::create_dir_all(&input).unwrap();
    fs::create_dir_all(&output).unwrap();

    fs::write(input.join("a.csv"), "x\n1\n").unwrap();
    fs::write(input.join("b.CSV"), "x\n2\n").unwrap();
    fs::write(input.join("notes.txt"), "ignored").unwrap();
    fs::write(input.join("noext"), "ignored").unwrap();
    fs::create_dir(input.join("folder.csv")).unwrap();

    let (stdout, _, ok) = run_csvconv(
        &[input.to_str().unwrap(), "-o", output.to_str().unwrap()],
        tmp.path(),
    );
    assert!(ok);
    assert!(stdout.contains("Converted 2 files in"), "{}", stdout);

    assert!(output.join("a.json").exists());
    assert!(output.join("b.json").exists());
    assert!(!output.join("notes.json").exists());
    assert!(!output.join("folder.json").exists());
    assert_eq!(fs::read_dir(&output).unwrap().count(), 2);
}

#[test]
fn test_subdirectories_are_skipped_without_recursive() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("in");
    let output = tmp.path().join("out");
    let nested = input.join("sub");
    fs::create_dir_all(&nested).unwrap();
    fs::create_dir_all(&output).unwrap();

    fs::write(input.join("top.csv"), "x\n1\n").unwrap();
    fs::write(nested.join("deep.csv"), "x\n2\n").unwrap();

    let base_args = [input.to_str().unwrap(), "-o", output.to_str().unwrap()];
    let (stdout, _, ok) = run_csvconv(&base_args, tmp.path());
    assert!(ok);
    assert!(stdout.contains("Converted 1 file in"), "{}", stdout);
    assert!(output.join("top.json").exists());
    assert!(!output.join("sub").exists());

    // Recursive mode picks up the nested file and mirrors the layout.
    fs::create_dir_all(output.join("sub")).unwrap();
    let (stdout, _, ok) = run_csvconv(
        &[
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--recursive",
        ],
        tmp.path(),
    );
    assert!(ok);
    assert!(stdout.contains("Converted 2 files in"), "{}", stdout);
    assert!(output.join("sub/deep.json").exists());
}

#[test]
fn test_empty_directory_reports_zero_files() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("in");
    let output = tmp.path().join("out");
    fs::create_dir_all(&input).unwrap();
    fs::create_dir_all(&output).unwrap();

    let (stdout, _, ok) = run_csvconv(
        &[input.to_str().unwrap(), "-o", output.to_str().unwrap()],
        tmp.path(),
    );
    assert!(ok);
    assert!(stdout.contains("Converted 0 files in"), "{}", stdout);
    assert_eq!(fs::read_dir(&output).unwrap().count(), 0);
}

#[test]
fn test_default_layout_reads_files_and_writes_outputs() {
    // With no arguments the binary reads ./files and writes ./outputs,
    // both relative to the current working directory.
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("files")).unwrap();
    fs::create_dir_all(tmp.path().join("outputs")).unwrap();
    fs::write(tmp.path().join("files/report.csv"), "a,b\n1,2\n").unwrap();

    let (stdout, _, ok) = run_csvconv(&[], tmp.path());
    assert!(ok);
    assert!(stdout.contains("Converted 1 file in"), "{}", stdout);
    assert!(tmp.path().join("outputs/report.json").exists());
}
