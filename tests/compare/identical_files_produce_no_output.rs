use crate::common::command::{linediff_stdout, work_dir};
use crate::common::file::write_lines;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn identical_files_produce_no_output(work_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_lines(work_dir.path(), "src.txt", &["one", "two", "tre"]);
    write_lines(work_dir.path(), "oth.txt", &["one", "two", "tre"]);

    let actual_output = linediff_stdout(work_dir.path(), &["compare", "src.txt", "oth.txt"]);

    pretty_assertions::assert_eq!(actual_output, "");

    Ok(())
}

#[rstest]
fn empty_files_produce_no_output(work_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_lines(work_dir.path(), "src.txt", &[]);
    write_lines(work_dir.path(), "oth.txt", &[]);

    let actual_output = linediff_stdout(work_dir.path(), &["compare", "src.txt", "oth.txt"]);

    pretty_assertions::assert_eq!(actual_output, "");

    Ok(())
}
