use crate::model::record::EvaluationRecord;
use crate::model::thresholds::ScoringProfile;

#[derive(Debug, Clone)]
pub struct CompositeScores {
    pub performance: Vec<f32>,
    pub potential: Vec<f32>,
}

/// Weighted composites over the eight raw sub-scores. Pure and total:
/// unparseable inputs were already coerced to zero at ingestion, so every
/// record gets a score.
pub fn run_stage1(records: &[EvaluationRecord], profile: &ScoringProfile) -> CompositeScores {
    let n = records.len();
    let mut performance = Vec::with_capacity(n);
    let mut potential = Vec::with_capacity(n);

    for record in records {
        let perf = &record.perf;
        let pot = &record.pot;
        performance.push(
            profile.perf_okr_w * perf.okr
                + profile.perf_quality_w * perf.quality
                + profile.perf_ownership_w * perf.ownership
                + profile.perf_delivery_w * perf.delivery,
        );
        potential.push(
            profile.pot_learning_w * pot.learning
                + profile.pot_collaboration_w * pot.collaboration
                + profile.pot_feedback_w * pot.feedback
                + profile.pot_beyond_scope_w * pot.beyond_scope,
        );
    }

    CompositeScores {
        performance,
        potential,
    }
}
