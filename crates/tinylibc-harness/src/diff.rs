//! Expected/actual diff rendering.

/// Renders a minimal line diff between expected and actual output.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    let mut out = String::new();
    for line in expected.lines() {
        out.push_str("- ");
        out.push_str(line);
        out.push('\n');
    }
    for line in actual.lines() {
        out.push_str("+ ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_diff_marks_both_sides() {
        let diff = render_diff("5", "null");
        assert_eq!(diff, "- 5\n+ null\n");
    }
}
