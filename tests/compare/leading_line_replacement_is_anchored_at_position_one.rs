use crate::common::command::{linediff_stdout, work_dir};
use crate::common::file::write_lines;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn leading_line_replacement_is_anchored_at_position_one(
    work_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_lines(work_dir.path(), "src.txt", &["one", "two", "tre"]);
    write_lines(work_dir.path(), "oth.txt", &["yadda", "two", "tre"]);

    let expected_output = "@@ line 1 @@\n+yadda\n";
    let actual_output = linediff_stdout(work_dir.path(), &["compare", "src.txt", "oth.txt"]);

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
