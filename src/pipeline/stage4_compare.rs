use crate::model::boxes::TalentBox;
use crate::model::status::CalibrationStatus;
use crate::model::thresholds::ScoringProfile;
use crate::pipeline::stage2_rank::PercentileSet;
use crate::pipeline::stage3_classify::Classification;

/// Derives the org-vs-team status per record. Matching box labels always
/// read as unchanged; differing labels only count as movement when the
/// averaged percentile gap clears the tolerance band, so two records can
/// sit in different boxes and still report no change.
pub fn run_stage4(
    classifications: &[Classification],
    pcts: &PercentileSet,
    profile: &ScoringProfile,
) -> Vec<CalibrationStatus> {
    let mut out = Vec::with_capacity(classifications.len());

    for (idx, c) in classifications.iter().enumerate() {
        out.push(compare_record(
            c,
            pcts.global_perf[idx],
            pcts.global_pot[idx],
            pcts.team_perf[idx],
            pcts.team_pot[idx],
            profile,
        ));
    }

    out
}

fn compare_record(
    c: &Classification,
    global_perf: f32,
    global_pot: f32,
    team_perf: Option<f32>,
    team_pot: Option<f32>,
    profile: &ScoringProfile,
) -> CalibrationStatus {
    if c.global_box == TalentBox::NewToRate {
        return CalibrationStatus::NoData;
    }
    if c.global_box == c.team_box {
        return CalibrationStatus::Unchanged;
    }

    let (team_perf, team_pot) = match (team_perf, team_pot) {
        (Some(perf), Some(pot)) => (perf, pot),
        _ => return CalibrationStatus::NoData,
    };

    let avg_global = (global_perf + global_pot) / 2.0;
    let avg_team = (team_perf + team_pot) / 2.0;

    if avg_global > avg_team + profile.org_gap_tolerance {
        CalibrationStatus::HigherInOrg
    } else if avg_global < avg_team - profile.org_gap_tolerance {
        CalibrationStatus::LowerInOrg
    } else {
        CalibrationStatus::Unchanged
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_compare.rs"]
mod tests;
