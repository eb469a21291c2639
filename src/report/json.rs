use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::boxes::{box_order, color_for, definition_for, trajectory_order};
use crate::model::record::RatedRecord;
use crate::report::{ReportInput, ReportMode, SummaryData};
use crate::trends::employee_trajectory;

#[derive(Debug, Serialize)]
struct SummaryDoc<'a> {
    tool: &'a str,
    version: &'a str,
    input: InputDoc<'a>,
    summary: SummarySection<'a>,
    legend: Vec<LegendDoc>,
    trends: TrendsDoc<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rows: Option<Vec<RowDoc<'a>>>,
}

#[derive(Debug, Serialize)]
struct LegendDoc {
    name: &'static str,
    definition: &'static str,
    color: &'static str,
}

#[derive(Debug, Serialize)]
struct InputDoc<'a> {
    path: &'a str,
    quarters: &'a [String],
    n_rows_working: usize,
    n_rows_snapshot: usize,
}

#[derive(Debug, Serialize)]
struct SummarySection<'a> {
    total_headcount: usize,
    evaluated: usize,
    boxes: Vec<BoxDoc<'a>>,
    movement: MovementDoc,
    cutpoints: CutpointsDoc,
}

#[derive(Debug, Serialize)]
struct BoxDoc<'a> {
    name: &'a str,
    count: usize,
    fraction: f32,
}

#[derive(Debug, Serialize)]
struct MovementDoc {
    higher_in_org: usize,
    lower_in_org: usize,
    unchanged: usize,
    no_data: usize,
}

#[derive(Debug, Serialize)]
struct CutpointsDoc {
    perf_low: f32,
    perf_high: f32,
    pot_low: f32,
    pot_high: f32,
}

#[derive(Debug, Serialize)]
struct TrendsDoc<'a> {
    headcount: Vec<TrendCountDoc>,
    box_counts: Vec<BoxTrendDoc>,
    box_axis: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trajectories: Option<Vec<TrajectoryDoc<'a>>>,
}

#[derive(Debug, Serialize)]
struct TrajectoryDoc<'a> {
    emp_id: &'a str,
    points: Vec<TrajectoryPointDoc>,
}

#[derive(Debug, Serialize)]
struct TrajectoryPointDoc {
    quarter: String,
    #[serde(rename = "box")]
    box_name: &'static str,
}

#[derive(Debug, Serialize)]
struct TrendCountDoc {
    quarter: String,
    count: usize,
}

#[derive(Debug, Serialize)]
struct BoxTrendDoc {
    quarter: String,
    #[serde(rename = "box")]
    box_name: &'static str,
    count: usize,
}

#[derive(Debug, Serialize)]
struct RowDoc<'a> {
    quarter: &'a str,
    emp_id: &'a str,
    emp_name: &'a str,
    business_unit: &'a str,
    department: &'a str,
    sub_department: &'a str,
    manager: &'a str,
    performance_score: f32,
    potential_score: f32,
    global_perf_pct: f32,
    global_pot_pct: f32,
    team_perf_pct: Option<f32>,
    team_pot_pct: Option<f32>,
    global_box: &'static str,
    team_box: &'static str,
    status: &'static str,
}

pub fn render_summary_json(
    input: &ReportInput<'_>,
    mode: ReportMode,
) -> Result<String, serde_json::Error> {
    let rows = match mode {
        ReportMode::Full => Some(input.snapshot.iter().map(|r| row_doc(r)).collect()),
        ReportMode::Summary => None,
    };
    let trajectories = match mode {
        ReportMode::Full => Some(trajectory_docs(input)),
        ReportMode::Summary => None,
    };

    let doc = SummaryDoc {
        tool: &input.tool_name,
        version: &input.tool_version,
        input: InputDoc {
            path: &input.source_path,
            quarters: &input.quarters,
            n_rows_working: input.all_rows.len(),
            n_rows_snapshot: input.snapshot.len(),
        },
        summary: summary_section(&input.summary),
        legend: box_order()
            .iter()
            .map(|b| {
                let name = b.name();
                LegendDoc {
                    name,
                    definition: definition_for(name),
                    color: color_for(name),
                }
            })
            .collect(),
        trends: TrendsDoc {
            headcount: input
                .headcount_trend
                .iter()
                .map(|t| TrendCountDoc {
                    quarter: t.quarter.clone(),
                    count: t.count,
                })
                .collect(),
            box_counts: input
                .box_trend
                .iter()
                .map(|t| BoxTrendDoc {
                    quarter: t.quarter.clone(),
                    box_name: t.box_name,
                    count: t.count,
                })
                .collect(),
            box_axis: trajectory_order().iter().map(|b| b.name()).collect(),
            trajectories,
        },
        rows,
    };

    serde_json::to_string_pretty(&doc)
}

/// One trajectory per employee in the snapshot, traced over every quarter
/// of the working set.
fn trajectory_docs<'a>(input: &ReportInput<'a>) -> Vec<TrajectoryDoc<'a>> {
    let ids: BTreeSet<&'a str> = input
        .snapshot
        .iter()
        .map(|r| r.record.emp_id.as_str())
        .collect();
    ids.into_iter()
        .map(|emp_id| TrajectoryDoc {
            emp_id,
            points: employee_trajectory(input.all_rows, emp_id)
                .into_iter()
                .map(|p| TrajectoryPointDoc {
                    quarter: p.quarter,
                    box_name: p.global_box.name(),
                })
                .collect(),
        })
        .collect()
}

fn summary_section(summary: &SummaryData) -> SummarySection<'_> {
    SummarySection {
        total_headcount: summary.total_headcount,
        evaluated: summary.evaluated,
        boxes: summary
            .boxes
            .iter()
            .map(|b| BoxDoc {
                name: b.name,
                count: b.count,
                fraction: b.fraction,
            })
            .collect(),
        movement: MovementDoc {
            higher_in_org: summary.movement.higher_in_org,
            lower_in_org: summary.movement.lower_in_org,
            unchanged: summary.movement.unchanged,
            no_data: summary.movement.no_data,
        },
        cutpoints: CutpointsDoc {
            perf_low: summary.cutpoints.perf_low,
            perf_high: summary.cutpoints.perf_high,
            pot_low: summary.cutpoints.pot_low,
            pot_high: summary.cutpoints.pot_high,
        },
    }
}

fn row_doc(r: &RatedRecord) -> RowDoc<'_> {
    RowDoc {
        quarter: &r.record.quarter,
        emp_id: &r.record.emp_id,
        emp_name: &r.record.emp_name,
        business_unit: &r.record.business_unit,
        department: &r.record.department,
        sub_department: &r.record.sub_department,
        manager: &r.record.manager,
        performance_score: r.performance_score,
        potential_score: r.potential_score,
        global_perf_pct: r.global_perf_pct,
        global_pot_pct: r.global_pot_pct,
        team_perf_pct: r.team_perf_pct,
        team_pot_pct: r.team_pot_pct,
        global_box: r.global_box.name(),
        team_box: r.team_box.name(),
        status: r.status.name(),
    }
}
