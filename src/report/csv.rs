use std::fmt::Write;

use crate::model::record::RatedRecord;
use crate::report::format_f32_6;

const HEADER: &[&str] = &[
    "Quarter",
    "EMP ID",
    "EMP Name",
    "Business Unit",
    "Department",
    "Sub Department",
    "Manager",
    "Performance Score",
    "Potential Score",
    "Global Perf Pct",
    "Global Pot Pct",
    "Team Perf Pct",
    "Team Pot Pct",
    "Team Rating",
    "Final Rating",
    "Comparison",
];

/// Renders the snapshot rows as a comma-separated export with a stable
/// column order. Missing team percentiles render as empty cells.
pub fn render_rows_csv(rows: &[&RatedRecord]) -> String {
    let mut out = String::new();
    out.push_str(&HEADER.join(","));
    out.push('\n');

    for row in rows {
        let cells = [
            escape_csv(&row.record.quarter),
            escape_csv(&row.record.emp_id),
            escape_csv(&row.record.emp_name),
            escape_csv(&row.record.business_unit),
            escape_csv(&row.record.department),
            escape_csv(&row.record.sub_department),
            escape_csv(&row.record.manager),
            format_f32_6(row.performance_score),
            format_f32_6(row.potential_score),
            format_f32_6(row.global_perf_pct),
            format_f32_6(row.global_pot_pct),
            opt_f32(row.team_perf_pct),
            opt_f32(row.team_pot_pct),
            escape_csv(row.team_box.name()),
            escape_csv(row.global_box.name()),
            escape_csv(row.status.name()),
        ];
        let _ = writeln!(out, "{}", cells.join(","));
    }

    out
}

fn opt_f32(value: Option<f32>) -> String {
    match value {
        Some(v) => format_f32_6(v),
        None => String::new(),
    }
}

fn escape_csv(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
