use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn work_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn run_linediff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("linediff").expect("Failed to find linediff binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }

    cmd
}

/// Captured stdout of a successful run, as UTF-8.
pub fn linediff_stdout(dir: &Path, args: &[&str]) -> String {
    let assert = run_linediff_command(dir, args).assert().success();
    let stdout = assert.get_output().stdout.clone();

    String::from_utf8(stdout).expect("Invalid UTF-8 in output")
}
