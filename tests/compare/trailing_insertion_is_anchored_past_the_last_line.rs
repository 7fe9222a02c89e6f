use crate::common::command::{linediff_stdout, work_dir};
use crate::common::file::write_lines;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn trailing_insertion_is_anchored_past_the_last_line(
    work_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_lines(work_dir.path(), "src.txt", &["one", "two", "tre"]);
    write_lines(work_dir.path(), "oth.txt", &["one", "two", "tre", "yadda"]);

    let expected_output = "@@ line 4 @@\n+yadda\n";
    let actual_output = linediff_stdout(work_dir.path(), &["compare", "src.txt", "oth.txt"]);

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
