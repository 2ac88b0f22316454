use rust_decimal::{Decimal, RoundingStrategy};
use shared_types::{RawAmount, TransactionRecord};
use std::str::FromStr;

/// Parses a backend amount into an exact decimal.
///
/// Missing, empty or non-numeric amounts count as zero.
pub fn parse_amount(raw: Option<&RawAmount>) -> Decimal {
    let Some(raw) = raw else {
        return Decimal::ZERO;
    };
    let text = raw.as_text();
    let text = text.trim();
    if text.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .unwrap_or(Decimal::ZERO)
}

/// Exact sum of the record amounts.
///
/// An amount that would overflow the running total is left out of it, so a
/// corrupt value cannot take the whole report down.
pub fn sum_amounts<'a, I>(records: I) -> Decimal
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    records
        .into_iter()
        .map(|record| parse_amount(record.amount.as_ref()))
        .fold(Decimal::ZERO, |total, amount| {
            total.checked_add(amount).unwrap_or(total)
        })
}

/// Rounds to cents (midpoint away from zero) and renders exactly two fractional digits
pub fn format_total(total: Decimal) -> String {
    let mut rounded = total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(text: &str) -> Option<RawAmount> {
        Some(RawAmount::from(text))
    }

    #[test]
    fn test_parse_text_and_number() {
        assert_eq!(parse_amount(amount("100.00").as_ref()), Decimal::new(10000, 2));

        let number: RawAmount = serde_json::from_str("50.5").unwrap();
        assert_eq!(parse_amount(Some(&number)), Decimal::new(505, 1));

        assert_eq!(parse_amount(amount("1e2").as_ref()), Decimal::new(100, 0));
    }

    #[test]
    fn test_unparseable_amounts_are_zero() {
        assert_eq!(parse_amount(None), Decimal::ZERO);
        assert_eq!(parse_amount(amount("").as_ref()), Decimal::ZERO);
        assert_eq!(parse_amount(amount("   ").as_ref()), Decimal::ZERO);
        assert_eq!(parse_amount(amount("abc").as_ref()), Decimal::ZERO);
    }

    #[test]
    fn test_non_numeric_json_amount_is_zero() {
        let flag: RawAmount = serde_json::from_str("true").unwrap();
        assert_eq!(parse_amount(Some(&flag)), Decimal::ZERO);
    }

    #[test]
    fn test_sum_skips_overflowing_amount() {
        let record = |valor: &str| TransactionRecord {
            id: None,
            record_type: "Dizimos".to_string(),
            amount: Some(RawAmount::from(valor)),
            registered_date: "2024-01-01".to_string(),
            description: String::new(),
        };
        let records = vec![
            record("79228162514264337593543950335"),
            record("1"),
            record("2.50"),
        ];

        assert_eq!(sum_amounts(&records), Decimal::MAX);
        assert_eq!(sum_amounts(&records[1..]), Decimal::new(350, 2));
    }

    #[test]
    fn test_format_total_two_digits() {
        assert_eq!(format_total(Decimal::new(100, 0)), "100.00");
        assert_eq!(format_total(Decimal::new(505, 1)), "50.50");
        assert_eq!(format_total(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_format_total_rounds_half_away_from_zero() {
        // 10.005 + 5.00
        assert_eq!(format_total(Decimal::new(15005, 3)), "15.01");
        assert_eq!(format_total(Decimal::new(15004, 3)), "15.00");
        assert_eq!(format_total(Decimal::new(-15005, 3)), "-15.01");
    }
}
