//! Reports Crate
//!
//! Pure transformations from the flat lists returned by the backend into
//! display-ready structures. Nothing here performs I/O.
//!
//! # Architecture
//!
//! - **Types**: records, notices and report sections live in `shared-types`
//! - **Transformations**: grouping, totals and filtering are implemented here
//!
//! # Example
//!
//! ```rust,ignore
//! use reports::{aggregate, CONTRIBUTION_CATEGORIES};
//! use shared_types::Period;
//!
//! let sections = aggregate(&records, CONTRIBUTION_CATEGORIES, Period::year(2024));
//! ```

pub mod aggregate;
pub mod amount;
pub mod categories;
pub mod notices;
pub mod period;

pub use aggregate::{aggregate, aggregate_discovered, build_report};
pub use amount::{format_total, parse_amount, sum_amounts};
pub use categories::CONTRIBUTION_CATEGORIES;
pub use notices::{has_notice_for_member, resolve_first_for_member, resolve_for_member};
pub use period::{month_options, parse_registered_date, year_options, FIRST_REPORT_YEAR};
