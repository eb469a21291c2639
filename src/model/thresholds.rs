/// Fixed constants of the scoring model. Weights per axis sum to 1.0; band
/// cuts and the org-gap tolerance are business rules pending product
/// confirmation, kept here as named values rather than a config surface.
#[derive(Debug, Clone)]
pub struct ScoringProfile {
    pub perf_okr_w: f32,
    pub perf_quality_w: f32,
    pub perf_ownership_w: f32,
    pub perf_delivery_w: f32,
    pub pot_learning_w: f32,
    pub pot_collaboration_w: f32,
    pub pot_feedback_w: f32,
    pub pot_beyond_scope_w: f32,
    pub band_low: f32,
    pub band_high: f32,
    pub org_gap_tolerance: f32,
    pub score_cut_low_q: f32,
    pub score_cut_high_q: f32,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            perf_okr_w: 0.30,
            perf_quality_w: 0.30,
            perf_ownership_w: 0.20,
            perf_delivery_w: 0.20,
            pot_learning_w: 0.20,
            pot_collaboration_w: 0.30,
            pot_feedback_w: 0.30,
            pot_beyond_scope_w: 0.20,
            band_low: 0.30,
            band_high: 0.80,
            org_gap_tolerance: 0.03,
            score_cut_low_q: 0.30,
            score_cut_high_q: 0.80,
        }
    }
}
