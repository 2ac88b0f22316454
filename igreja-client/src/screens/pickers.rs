//! Year and month pickers leading to the report screens.

use crate::navigation::Route;
use crate::session::Session;
use chrono::NaiveDate;
use reports::{month_options, year_options};

/// A button of a picker screen and where it leads
#[derive(Debug, Clone, PartialEq)]
pub struct PickerEntry {
    pub label: String,
    pub route: Route,
}

pub fn contribution_years(session: &Session, first_year: i32, today: NaiveDate) -> Vec<PickerEntry> {
    year_options(first_year, today)
        .into_iter()
        .map(|year| PickerEntry {
            label: year.to_string(),
            route: Route::Contributions {
                session: session.clone(),
                year,
            },
        })
        .collect()
}

pub fn expense_years(session: &Session, first_year: i32, today: NaiveDate) -> Vec<PickerEntry> {
    year_options(first_year, today)
        .into_iter()
        .map(|year| PickerEntry {
            label: year.to_string(),
            route: Route::ExpenseMonths {
                session: session.clone(),
                year,
            },
        })
        .collect()
}

pub fn expense_months(session: &Session, year: i32) -> Vec<PickerEntry> {
    month_options()
        .into_iter()
        .map(|option| PickerEntry {
            label: option.name,
            route: Route::Expenses {
                session: session.clone(),
                year,
                month: option.value,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::session_for;

    #[test]
    fn test_year_pickers_newest_first() {
        let session = session_for(7, "Ana");
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

        let entries = contribution_years(&session, 2023, today);
        let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["2025", "2024", "2023"]);
        assert_eq!(
            entries[0].route,
            Route::Contributions {
                session: session.clone(),
                year: 2025
            }
        );

        let entries = expense_years(&session, 2023, today);
        assert_eq!(entries[2].route.name(), "ExpenseMonths");
    }

    #[test]
    fn test_month_picker() {
        let session = session_for(7, "Ana");
        let entries = expense_months(&session, 2024);

        assert_eq!(entries.len(), 12);
        assert_eq!(entries[2].label, "Março");
        assert_eq!(
            entries[2].route,
            Route::Expenses {
                session,
                year: 2024,
                month: 3
            }
        );
    }
}
