//! Game-time formatting utilities.
//!
//! Every timestamp shown next to a highlight goes through this module so
//! the CLI output and the highlight records agree on the `M:SS` layout.

/// Format a game time (seconds from the horn) as `M:SS`.
///
/// Fractional seconds are truncated, not rounded, so a kill at `59.9`
/// still reads `0:59`. Pre-horn times keep a leading minus sign.
///
/// # Examples
/// ```
/// use clash_types::formatting::format_game_time;
/// assert_eq!(format_game_time(600.0), "10:00");
/// assert_eq!(format_game_time(605.7), "10:05");
/// assert_eq!(format_game_time(59.9), "0:59");
/// assert_eq!(format_game_time(-75.0), "-1:15");
/// ```
pub fn format_game_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "0:00".to_string();
    }
    let whole = seconds.trunc() as i64;
    let sign = if whole < 0 { "-" } else { "" };
    let abs = whole.unsigned_abs();
    format!("{}{}:{:02}", sign, abs / 60, abs % 60)
}

/// Format an optional game time, falling back to an empty string.
pub fn format_game_time_opt(seconds: Option<f64>) -> String {
    seconds.map(format_game_time).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_game_time() {
        assert_eq!(format_game_time(0.0), "0:00");
        assert_eq!(format_game_time(59.0), "0:59");
        assert_eq!(format_game_time(60.0), "1:00");
        assert_eq!(format_game_time(612.0), "10:12");
        assert_eq!(format_game_time(3725.4), "62:05");
    }

    #[test]
    fn test_format_game_time_truncates() {
        assert_eq!(format_game_time(600.99), "10:00");
        assert_eq!(format_game_time(0.5), "0:00");
    }

    #[test]
    fn test_format_game_time_pre_horn() {
        assert_eq!(format_game_time(-30.0), "-0:30");
        assert_eq!(format_game_time(-90.5), "-1:30");
    }

    #[test]
    fn test_format_game_time_non_finite() {
        assert_eq!(format_game_time(f64::NAN), "0:00");
        assert_eq!(format_game_time(f64::INFINITY), "0:00");
    }

    #[test]
    fn test_format_game_time_opt() {
        assert_eq!(format_game_time_opt(None), "");
        assert_eq!(format_game_time_opt(Some(125.0)), "2:05");
    }
}
