use crate::amount::{format_total, sum_amounts};
use crate::period::record_in_period;
use shared_types::{Period, RecordKind, Report, ReportSection, TransactionRecord};
use std::collections::HashSet;

/// Groups records by category for the given period.
///
/// Sections follow the order of `allowed_categories`; records keep their
/// arrival order inside a section. Categories not in the list, records outside
/// the period and categories without records are left out. A category listed
/// twice yields a single section.
pub fn aggregate<S: AsRef<str>>(
    records: &[TransactionRecord],
    allowed_categories: &[S],
    period: Period,
) -> Vec<ReportSection> {
    let filtered = normalized_in_period(records, &period);
    let mut seen = HashSet::new();

    allowed_categories
        .iter()
        .map(|c| c.as_ref())
        .filter(|category| seen.insert(*category))
        .filter_map(|category| collect_section(&filtered, category))
        .collect()
}

/// Like [`aggregate`] without an allow-list: every category in the period is
/// kept, ordered by its first appearance.
pub fn aggregate_discovered(records: &[TransactionRecord], period: Period) -> Vec<ReportSection> {
    let filtered = normalized_in_period(records, &period);

    let mut categories: Vec<&str> = Vec::new();
    for record in &filtered {
        if !categories.contains(&record.record_type.as_str()) {
            categories.push(record.record_type.as_str());
        }
    }

    categories
        .into_iter()
        .filter_map(|category| collect_section(&filtered, category))
        .collect()
}

/// Builds a full report. Without `allowed_categories` the categories are
/// discovered from the records.
pub fn build_report<S: AsRef<str>>(
    kind: RecordKind,
    records: &[TransactionRecord],
    allowed_categories: Option<&[S]>,
    period: Period,
) -> Report {
    let sections = match allowed_categories {
        Some(categories) => aggregate(records, categories, period),
        None => aggregate_discovered(records, period),
    };

    let grand_total = sum_amounts(sections.iter().flat_map(|section| section.items.iter()));

    Report {
        kind,
        period,
        sections,
        grand_total: format_total(grand_total),
    }
}

fn normalized_in_period(records: &[TransactionRecord], period: &Period) -> Vec<TransactionRecord> {
    records
        .iter()
        .filter(|record| record_in_period(record, period))
        .map(|record| TransactionRecord {
            record_type: record.normalized_type(),
            ..record.clone()
        })
        .collect()
}

fn collect_section(filtered: &[TransactionRecord], category: &str) -> Option<ReportSection> {
    let items: Vec<TransactionRecord> = filtered
        .iter()
        .filter(|record| record.record_type == category)
        .cloned()
        .collect();

    if items.is_empty() {
        return None;
    }

    let total = sum_amounts(&items);

    Some(ReportSection {
        title: category.to_string(),
        items,
        total: format_total(total),
    })
}
