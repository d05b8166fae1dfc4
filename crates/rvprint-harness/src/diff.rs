//! Diff rendering for fixture comparison.

/// Render a line diff between expected and actual output.
///
/// Trailing lines present on only one side are listed too, so a missing
/// final line still shows up.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let mut out = String::new();
    out.push_str("--- expected\n");
    out.push_str("+++ actual\n");
    let mut expected_lines = expected.split('\n');
    let mut actual_lines = actual.split('\n');
    let mut line = 0;
    loop {
        line += 1;
        match (expected_lines.next(), actual_lines.next()) {
            (None, None) => break,
            (Some(e), Some(a)) if e == a => {}
            (e, a) => {
                out.push_str(&format!("@@ line {line} @@\n"));
                if let Some(e) = e {
                    out.push_str(&format!("-{}\n", e.escape_debug()));
                }
                if let Some(a) = a {
                    out.push_str(&format!("+{}\n", a.escape_debug()));
                }
            }
        }
    }
    out
}
