use crate::model::record::{EvaluationRecord, RatedRecord};

/// Structural filters narrow the working set before the pipeline runs, so
/// they shape both ranking populations. An empty value list on an axis
/// means no restriction on that axis.
#[derive(Debug, Clone, Default)]
pub struct StructuralFilter {
    pub business_units: Vec<String>,
    pub departments: Vec<String>,
    pub sub_departments: Vec<String>,
    pub managers: Vec<String>,
}

impl StructuralFilter {
    pub fn is_empty(&self) -> bool {
        self.business_units.is_empty()
            && self.departments.is_empty()
            && self.sub_departments.is_empty()
            && self.managers.is_empty()
    }

    pub fn matches(&self, record: &EvaluationRecord) -> bool {
        axis_matches(&self.business_units, &record.business_unit)
            && axis_matches(&self.departments, &record.department)
            && axis_matches(&self.sub_departments, &record.sub_department)
            && axis_matches(&self.managers, &record.manager)
    }

    pub fn apply(&self, records: Vec<EvaluationRecord>) -> Vec<EvaluationRecord> {
        if self.is_empty() {
            return records;
        }
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

fn axis_matches(selected: &[String], value: &str) -> bool {
    selected.is_empty() || selected.iter().any(|s| s == value)
}

/// The quarter-restricted snapshot consumed by distribution and comparison
/// outputs. Trend outputs read the full rated set instead; the temporal
/// filter must never reach them.
pub fn snapshot<'a>(rows: &'a [RatedRecord], quarters: &[String]) -> Vec<&'a RatedRecord> {
    if quarters.is_empty() {
        return rows.iter().collect();
    }
    rows.iter()
        .filter(|r| quarters.iter().any(|q| q == &r.record.quarter))
        .collect()
}

/// Latest quarter by label order, the default snapshot scope when the
/// caller selects none.
pub fn latest_quarter(rows: &[RatedRecord]) -> Option<String> {
    rows.iter().map(|r| r.record.quarter.clone()).max()
}

pub fn filter_by_name<'a>(rows: Vec<&'a RatedRecord>, term: &str) -> Vec<&'a RatedRecord> {
    let needle = term.to_lowercase();
    rows.into_iter()
        .filter(|r| r.record.emp_name.to_lowercase().contains(&needle))
        .collect()
}
