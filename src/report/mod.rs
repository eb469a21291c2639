pub mod csv;
pub mod json;
pub mod text;

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::model::boxes::{TalentBox, box_order};
use crate::model::record::RatedRecord;
use crate::model::status::CalibrationStatus;
use crate::model::thresholds::ScoringProfile;
use crate::trends::{BoxTrendPoint, QuarterCount};

#[derive(Debug, Clone)]
pub struct BoxStat {
    pub name: &'static str,
    pub count: usize,
    pub fraction: f32,
}

#[derive(Debug, Clone, Default)]
pub struct MovementStat {
    pub higher_in_org: usize,
    pub lower_in_org: usize,
    pub unchanged: usize,
    pub no_data: usize,
}

/// Score-space positions of the band cuts, used by the presentation layer
/// to draw quadrant cutlines over raw scores.
#[derive(Debug, Clone, Copy)]
pub struct ScoreCutpoints {
    pub perf_low: f32,
    pub perf_high: f32,
    pub pot_low: f32,
    pub pot_high: f32,
}

#[derive(Debug, Clone)]
pub struct SummaryData {
    pub total_headcount: usize,
    pub evaluated: usize,
    pub boxes: Vec<BoxStat>,
    pub movement: MovementStat,
    pub cutpoints: ScoreCutpoints,
}

/// Everything the renderers need for one run.
#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub tool_name: String,
    pub tool_version: String,
    pub source_path: String,
    pub quarters: Vec<String>,
    pub snapshot: Vec<&'a RatedRecord>,
    pub all_rows: &'a [RatedRecord],
    pub summary: SummaryData,
    pub headcount_trend: Vec<QuarterCount>,
    pub box_trend: Vec<BoxTrendPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    Full,
    Summary,
}

pub fn summarize(
    snapshot: &[&RatedRecord],
    working: &[RatedRecord],
    profile: &ScoringProfile,
) -> SummaryData {
    let total_headcount = snapshot.len();
    let evaluated = snapshot
        .iter()
        .filter(|r| r.global_box != TalentBox::NewToRate)
        .count();

    let mut boxes = Vec::with_capacity(box_order().len());
    for &b in box_order() {
        let count = snapshot.iter().filter(|r| r.global_box == b).count();
        let fraction = if total_headcount == 0 {
            0.0
        } else {
            count as f32 / total_headcount as f32
        };
        boxes.push(BoxStat {
            name: b.name(),
            count,
            fraction,
        });
    }

    let mut movement = MovementStat::default();
    for row in snapshot {
        match row.status {
            CalibrationStatus::HigherInOrg => movement.higher_in_org += 1,
            CalibrationStatus::LowerInOrg => movement.lower_in_org += 1,
            CalibrationStatus::Unchanged => movement.unchanged += 1,
            CalibrationStatus::NoData => movement.no_data += 1,
        }
    }

    SummaryData {
        total_headcount,
        evaluated,
        boxes,
        movement,
        cutpoints: score_cutpoints(working, profile),
    }
}

/// Cutlines over the composite score distributions of the whole working
/// set. An empty set falls back to the nominal 3/8 positions on the 0-10
/// scale so consumers always get drawable lines.
pub fn score_cutpoints(working: &[RatedRecord], profile: &ScoringProfile) -> ScoreCutpoints {
    if working.is_empty() {
        return ScoreCutpoints {
            perf_low: 3.0,
            perf_high: 8.0,
            pot_low: 3.0,
            pot_high: 8.0,
        };
    }
    let perf: Vec<f32> = working.iter().map(|r| r.performance_score).collect();
    let pot: Vec<f32> = working.iter().map(|r| r.potential_score).collect();
    ScoreCutpoints {
        perf_low: quantile_indexed(&perf, profile.score_cut_low_q),
        perf_high: quantile_indexed(&perf, profile.score_cut_high_q),
        pot_low: quantile_indexed(&pot, profile.score_cut_low_q),
        pot_high: quantile_indexed(&pot, profile.score_cut_high_q),
    }
}

pub fn write_reports(
    input: &ReportInput<'_>,
    out_dir: &Path,
    mode: ReportMode,
) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let summary_json = json::render_summary_json(input, mode).map_err(std::io::Error::other)?;
    write_file(&out_dir.join("ninebox.summary.json"), &summary_json)?;

    if mode == ReportMode::Full {
        let rows_csv = csv::render_rows_csv(&input.snapshot);
        write_file(&out_dir.join("ninebox.rows.csv"), &rows_csv)?;
    }

    let text = text::render_report_text(input);
    write_file(&out_dir.join("ninebox.report.txt"), &text)?;

    info!("reports written to {}", out_dir.display());
    Ok(())
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn format_f32_6(v: f32) -> String {
    format!("{:.6}", v)
}

pub fn quantile_indexed(values: &[f32], p: f32) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    let idx = ((n - 1) as f32 * p).ceil() as usize;
    sorted[idx]
}
