// Timestamp labels for GViz date cells
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

const PLACEHOLDER: &str = "—";

/// Parses `Date(2024,0,15,10,30,0)` (zero-based month) as emitted by GViz,
/// falling back to RFC 3339 and `YYYY-MM-DD HH:MM:SS`.
pub fn parse_sheet_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(args) = value
        .strip_prefix("Date(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_gviz_args(args);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").ok()
}

fn parse_gviz_args(args: &str) -> Option<NaiveDateTime> {
    let parts: Vec<u32> = args
        .split(',')
        .map(|p| p.trim().parse::<u32>())
        .collect::<Result<_, _>>()
        .ok()?;

    let (year, month0, day, time) = match parts.as_slice() {
        [y, m, d] => (*y, *m, *d, (0, 0, 0)),
        [y, m, d, h, mi, s] => (*y, *m, *d, (*h, *mi, *s)),
        _ => return None,
    };

    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month0 + 1, day)?
        .and_hms_opt(time.0, time.1, time.2)
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Table label, e.g. "15 Jan, 10:30".
pub fn format_full(value: &str) -> String {
    match parse_sheet_date(value) {
        Some(dt) => format!(
            "{:02} {}, {:02}:{:02}",
            dt.day(),
            MONTHS[dt.month0() as usize],
            dt.hour(),
            dt.minute()
        ),
        None if value.is_empty() => PLACEHOLDER.to_string(),
        None => value.to_string(),
    }
}

/// Axis tick label, e.g. "10:30".
pub fn format_short(value: &str) -> String {
    match parse_sheet_date(value) {
        Some(dt) => format!("{:02}:{:02}", dt.hour(), dt.minute()),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gviz_date_zero_based_month() {
        let dt = parse_sheet_date("Date(2024,0,15,10,30,0)").unwrap();
        assert_eq!(dt.to_string(), "2024-01-15 10:30:00");

        let dt = parse_sheet_date("Date(2024,11,31)").unwrap();
        assert_eq!(dt.to_string(), "2024-12-31 00:00:00");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_sheet_date("Date(2024,12,1)").is_none());
        assert!(parse_sheet_date("Date(2024,x,1)").is_none());
        assert!(parse_sheet_date("10:00").is_none());
        assert!(parse_sheet_date("").is_none());
    }

    #[test]
    fn test_parse_plain_formats() {
        let dt = parse_sheet_date("2024-03-05 07:08:09").unwrap();
        assert_eq!(format_short("2024-03-05 07:08:09"), "07:08");
        assert_eq!(dt.day(), 5);
        assert_eq!(format_full("2024-03-05T07:08:09Z"), "05 Mar, 07:08");
    }

    #[test]
    fn test_format_fallbacks() {
        assert_eq!(format_full("Date(2024,0,15,10,30,0)"), "15 Jan, 10:30");
        assert_eq!(format_full(""), "—");
        assert_eq!(format_full("10:00"), "10:00");
        assert_eq!(format_short(""), "");
        assert_eq!(format_short("10:01"), "10:01");
    }
}
