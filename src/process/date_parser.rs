use chrono::{DateTime, Datelike, NaiveDate};

/// Abbreviated French month names, as rendered by the `fr-FR` locale.
const MONTHS_SHORT_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"];

/// Parse the calendar date of a `date` cell.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `DD/MM/YYYY`, RFC 3339 timestamps, and
/// any of the date forms followed by `T` or a space and a time of day (the time
/// is ignored). Returns `None` for anything else.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Some(d) = parse_plain(s) {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    // "YYYY-MM-DD 18:30" / "YYYY-MM-DDT18:30:00"
    if s.len() > 10 && matches!(s.as_bytes()[10], b'T' | b' ') {
        return parse_plain(&s[..10]);
    }
    None
}

fn parse_plain(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// `juin`, `sept.` ...
pub fn month_short_fr(date: NaiveDate) -> &'static str {
    MONTHS_SHORT_FR[date.month0() as usize]
}

/// `1 juin 2024`
pub fn format_long_fr(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), month_short_fr(date), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_date("2024-06-01"), Some(ymd(2024, 6, 1)));
        assert_eq!(parse_date(" 2024-06-01 "), Some(ymd(2024, 6, 1)));
    }

    #[test]
    fn test_parse_alternate_forms() {
        assert_eq!(parse_date("2024/12/14"), Some(ymd(2024, 12, 14)));
        assert_eq!(parse_date("14/12/2024"), Some(ymd(2024, 12, 14)));
        assert_eq!(parse_date("2024-12-14 18:30"), Some(ymd(2024, 12, 14)));
        assert_eq!(parse_date("2024-12-14T18:30:00"), Some(ymd(2024, 12, 14)));
        assert_eq!(parse_date("2024-12-14T18:30:00+01:00"), Some(ymd(2024, 12, 14)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("bientôt"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date("2024-02-30"), None);
    }

    #[test]
    fn test_french_formatting() {
        assert_eq!(month_short_fr(ymd(2024, 2, 3)), "févr.");
        assert_eq!(month_short_fr(ymd(2024, 8, 3)), "août");
        assert_eq!(format_long_fr(ymd(2024, 6, 1)), "1 juin 2024");
        assert_eq!(format_long_fr(ymd(2025, 12, 24)), "24 déc. 2025");
    }
}
