use crate::model::boxes::{TalentBox, classify};
use crate::model::record::{EvalCategory, EvaluationRecord};
use crate::model::thresholds::ScoringProfile;
use crate::pipeline::stage2_rank::PercentileSet;

#[derive(Debug, Clone)]
pub struct Classification {
    pub global_box: TalentBox,
    pub team_box: TalentBox,
}

/// Applies the grid to both percentile pairs of every record. The
/// insufficient-data category short-circuits to New to Rate without looking
/// at percentiles; those are undefined for such records.
pub fn run_stage3(
    records: &[EvaluationRecord],
    pcts: &PercentileSet,
    profile: &ScoringProfile,
) -> Vec<Classification> {
    let mut out = Vec::with_capacity(records.len());

    for (idx, record) in records.iter().enumerate() {
        if record.category == EvalCategory::NewToRate {
            out.push(Classification {
                global_box: TalentBox::NewToRate,
                team_box: TalentBox::NewToRate,
            });
            continue;
        }

        let global_box = classify(pcts.global_perf[idx], pcts.global_pot[idx], profile);
        let team_box = match (pcts.team_perf[idx], pcts.team_pot[idx]) {
            (Some(perf), Some(pot)) => classify(perf, pot, profile),
            _ => TalentBox::NewToRate,
        };
        out.push(Classification {
            global_box,
            team_box,
        });
    }

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_classify.rs"]
mod tests;
