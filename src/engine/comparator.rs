/// Line equality for the whole engine: two lines are equal when both are
/// absent, or both are present and their content matches after stripping
/// leading and trailing whitespace. Indentation-only edits therefore compare
/// equal, and end-of-stream never equals a real line.
pub fn trimmed_eq(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.trim() == b.trim(),
        _ => false,
    }
}
