use crate::model::boxes::TalentBox;
use crate::model::status::CalibrationStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalCategory {
    Rated,
    NewToRate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PerfInputs {
    pub okr: f32,
    pub quality: f32,
    pub ownership: f32,
    pub delivery: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PotInputs {
    pub learning: f32,
    pub collaboration: f32,
    pub feedback: f32,
    pub beyond_scope: f32,
}

/// One employee evaluation row for one quarter, as ingested.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRecord {
    pub emp_id: String,
    pub emp_name: String,
    pub manager: String,
    pub business_unit: String,
    pub department: String,
    pub sub_department: String,
    pub quarter: String,
    pub category: EvalCategory,
    pub perf: PerfInputs,
    pub pot: PotInputs,
}

/// The same row after the full pipeline has run: composite scores,
/// percentile ranks in both populations, box labels and calibration status.
/// Team percentiles are absent for records excluded from team ranking.
#[derive(Debug, Clone)]
pub struct RatedRecord {
    pub record: EvaluationRecord,
    pub performance_score: f32,
    pub potential_score: f32,
    pub global_perf_pct: f32,
    pub global_pot_pct: f32,
    pub team_perf_pct: Option<f32>,
    pub team_pot_pct: Option<f32>,
    pub global_box: TalentBox,
    pub team_box: TalentBox,
    pub status: CalibrationStatus,
}
