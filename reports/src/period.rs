use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use shared_types::{MonthOption, Period, TransactionRecord};

/// Earliest year offered by the year pickers
pub const FIRST_REPORT_YEAR: i32 = 2023;

const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Reads the calendar date of a `dataRegistro` value.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.fff]` and RFC 3339. The date is
/// taken as written, without converting between time zones.
pub fn parse_registered_date(date_str: &str) -> Option<NaiveDate> {
    let date_str = date_str.trim();
    if date_str.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(datetime) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime.date());
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(date_str) {
        return Some(datetime.date_naive());
    }

    None
}

/// Records with an unreadable date never match any period
pub fn record_in_period(record: &TransactionRecord, period: &Period) -> bool {
    parse_registered_date(&record.registered_date)
        .map(|date| period.matches(date.year(), date.month()))
        .unwrap_or(false)
}

/// Years from `today`'s year down to `first_year`, newest first
pub fn year_options(first_year: i32, today: NaiveDate) -> Vec<i32> {
    (first_year..=today.year()).rev().collect()
}

pub fn month_options() -> Vec<MonthOption> {
    MONTH_NAMES
        .iter()
        .zip(1u32..)
        .map(|(name, value)| MonthOption {
            name: name.to_string(),
            value,
        })
        .collect()
}

/// Header text of a month report, e.g. "março de 2024"
pub fn month_label(year: i32, month: u32) -> Option<String> {
    let name = MONTH_NAMES.get(month.checked_sub(1)? as usize)?;
    Some(format!("{} de {}", name.to_lowercase(), year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        let date = parse_registered_date("2024-03-01").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 3, 1));
    }

    #[test]
    fn test_parse_datetime_shapes() {
        let date = parse_registered_date("2024-12-31T23:59:59").unwrap();
        assert_eq!((date.year(), date.month()), (2024, 12));

        let date = parse_registered_date("2024-12-31T23:59:59.123456").unwrap();
        assert_eq!(date.day(), 31);

        // Calendar date as written, even with an offset
        let date = parse_registered_date("2024-01-01T00:30:00-03:00").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 1, 1));
    }

    #[test]
    fn test_unparseable_dates() {
        assert!(parse_registered_date("").is_none());
        assert!(parse_registered_date("   ").is_none());
        assert!(parse_registered_date("01/03/2024").is_none());
        assert!(parse_registered_date("2024-13-01").is_none());
    }

    #[test]
    fn test_year_options_newest_first() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(year_options(FIRST_REPORT_YEAR, today), vec![2025, 2024, 2023]);

        let before_first = NaiveDate::from_ymd_opt(2022, 6, 1).unwrap();
        assert!(year_options(FIRST_REPORT_YEAR, before_first).is_empty());
    }

    #[test]
    fn test_month_options() {
        let months = month_options();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0].name, "Janeiro");
        assert_eq!(months[0].value, 1);
        assert_eq!(months[11].value, 12);
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(2024, 3).as_deref(), Some("março de 2024"));
        assert!(month_label(2024, 0).is_none());
        assert!(month_label(2024, 13).is_none());
    }
}
