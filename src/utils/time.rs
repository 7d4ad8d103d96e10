//! Time utilities: parsing HH:MM:SS durations and formatting elapsed seconds.

/// Parse a "HH:MM:SS" duration string into seconds.
///
/// Exactly three integer tokens are required; anything else yields None.
pub fn parse_hms(s: &str) -> Option<i64> {
    let mut parts = s.split(':');
    let h: i64 = parts.next()?.trim().parse().ok()?;
    let m: i64 = parts.next()?.trim().parse().ok()?;
    let sec: i64 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(h * 3600 + m * 60 + sec)
}

/// Format elapsed seconds as zero-padded "HH:MM:SS".
///
/// Hours are unbounded: totals past one day render as "30:00:00", never
/// wrapping around a 24-hour clock.
pub fn format_seconds(total: i64) -> String {
    let total = total.max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
