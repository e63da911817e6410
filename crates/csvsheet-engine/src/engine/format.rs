/// Format a number for display.
///
/// Uses the shortest decimal that round-trips, so `60.0` prints as `60` and
/// `50.0 / 3.0` as `16.666666666666668`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}
