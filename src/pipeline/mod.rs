pub mod stage1_scores;
pub mod stage2_rank;
pub mod stage3_classify;
pub mod stage4_compare;

use crate::model::record::{EvaluationRecord, RatedRecord};
use crate::model::thresholds::ScoringProfile;
use stage1_scores::run_stage1;
use stage2_rank::run_stage2;
use stage3_classify::run_stage3;
use stage4_compare::run_stage4;

/// Runs the full chain over a working set: composite scores, percent ranks
/// in both populations, grid classification, calibration status. Stateless;
/// every derived value is recomputed from the records alone.
pub fn run_pipeline(records: &[EvaluationRecord], profile: &ScoringProfile) -> Vec<RatedRecord> {
    let scores = run_stage1(records, profile);
    let pcts = run_stage2(records, &scores);
    let classifications = run_stage3(records, &pcts, profile);
    let statuses = run_stage4(&classifications, &pcts, profile);

    let mut out = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        out.push(RatedRecord {
            record: record.clone(),
            performance_score: scores.performance[idx],
            potential_score: scores.potential[idx],
            global_perf_pct: pcts.global_perf[idx],
            global_pot_pct: pcts.global_pot[idx],
            team_perf_pct: pcts.team_perf[idx],
            team_pot_pct: pcts.team_pot[idx],
            global_box: classifications[idx].global_box,
            team_box: classifications[idx].team_box,
            status: statuses[idx],
        });
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/pipeline.rs"]
mod tests;
