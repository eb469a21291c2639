use std::collections::{BTreeMap, BTreeSet};

use crate::model::boxes::TalentBox;
use crate::model::record::RatedRecord;

/// Trend series always run over the full rated working set; the snapshot
/// quarter filter must not reach them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarterCount {
    pub quarter: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxTrendPoint {
    pub quarter: String,
    pub box_name: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrajectoryPoint {
    pub quarter: String,
    pub global_box: TalentBox,
}

/// Distinct employees per quarter, quarters in label order.
pub fn headcount_by_quarter(rows: &[RatedRecord]) -> Vec<QuarterCount> {
    let mut per_quarter: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for row in rows {
        per_quarter
            .entry(row.record.quarter.as_str())
            .or_default()
            .insert(row.record.emp_id.as_str());
    }
    per_quarter
        .into_iter()
        .map(|(quarter, ids)| QuarterCount {
            quarter: quarter.to_string(),
            count: ids.len(),
        })
        .collect()
}

/// Org-wide box counts per quarter. New to Rate rows carry no rating signal
/// and are left out of the series.
pub fn box_counts_by_quarter(rows: &[RatedRecord]) -> Vec<BoxTrendPoint> {
    let mut per_cell: BTreeMap<(&str, &'static str), usize> = BTreeMap::new();
    for row in rows {
        if row.global_box == TalentBox::NewToRate {
            continue;
        }
        *per_cell
            .entry((row.record.quarter.as_str(), row.global_box.name()))
            .or_default() += 1;
    }
    per_cell
        .into_iter()
        .map(|((quarter, box_name), count)| BoxTrendPoint {
            quarter: quarter.to_string(),
            box_name,
            count,
        })
        .collect()
}

/// One employee's box per quarter, ordered by quarter label.
pub fn employee_trajectory(rows: &[RatedRecord], emp_id: &str) -> Vec<TrajectoryPoint> {
    let mut points: Vec<TrajectoryPoint> = rows
        .iter()
        .filter(|r| r.record.emp_id == emp_id)
        .map(|r| TrajectoryPoint {
            quarter: r.record.quarter.clone(),
            global_box: r.global_box,
        })
        .collect();
    points.sort_by(|a, b| a.quarter.cmp(&b.quarter));
    points
}
