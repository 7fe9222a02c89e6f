use crate::common::command::{linediff_stdout, work_dir};
use crate::common::file::write_lines;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn a_single_replaced_line_is_anchored_at_its_own_index(
    work_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_lines(work_dir.path(), "src.txt", &["one", "two", "tre"]);
    write_lines(work_dir.path(), "oth.txt", &["one", "yadda", "tre"]);

    let expected_output = "@@ line 2 @@\n+yadda\n";
    let actual_output = linediff_stdout(work_dir.path(), &["compare", "src.txt", "oth.txt"]);

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn replacement_lines_share_a_block_at_the_replaced_index(
    work_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_lines(work_dir.path(), "src.txt", &["one", "two", "tre"]);
    write_lines(
        work_dir.path(),
        "oth.txt",
        &["one", "yadda", "dabba", "du", "tre"],
    );

    let expected_output = "@@ line 2 @@\n+yadda\n+dabba\n+du\n";
    let actual_output = linediff_stdout(work_dir.path(), &["compare", "src.txt", "oth.txt"]);

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
