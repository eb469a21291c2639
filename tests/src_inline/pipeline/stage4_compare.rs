use super::*;

fn classification(global_box: TalentBox, team_box: TalentBox) -> Classification {
    Classification {
        global_box,
        team_box,
    }
}

fn pcts_for_one(
    global_perf: f32,
    global_pot: f32,
    team_perf: Option<f32>,
    team_pot: Option<f32>,
) -> PercentileSet {
    PercentileSet {
        global_perf: vec![global_perf],
        global_pot: vec![global_pot],
        team_perf: vec![team_perf],
        team_pot: vec![team_pot],
    }
}

#[test]
fn test_new_to_rate_is_no_data() {
    let c = vec![classification(TalentBox::NewToRate, TalentBox::NewToRate)];
    let pcts = pcts_for_one(0.0, 0.0, None, None);
    let out = run_stage4(&c, &pcts, &ScoringProfile::default_v1());
    assert_eq!(out[0], CalibrationStatus::NoData);
}

#[test]
fn test_same_box_is_unchanged_regardless_of_gap() {
    let c = vec![classification(TalentBox::Keystone, TalentBox::Keystone)];
    // a huge percentile gap must not matter when the labels agree
    let pcts = pcts_for_one(0.79, 0.79, Some(0.31), Some(0.31));
    let out = run_stage4(&c, &pcts, &ScoringProfile::default_v1());
    assert_eq!(out[0], CalibrationStatus::Unchanged);
}

#[test]
fn test_gap_above_tolerance_is_higher_in_org() {
    let c = vec![classification(TalentBox::ImpactDriver, TalentBox::Keystone)];
    // avg gap 0.031, just outside the band
    let pcts = pcts_for_one(0.531, 0.531, Some(0.5), Some(0.5));
    let out = run_stage4(&c, &pcts, &ScoringProfile::default_v1());
    assert_eq!(out[0], CalibrationStatus::HigherInOrg);
}

#[test]
fn test_gap_below_tolerance_is_lower_in_org() {
    let c = vec![classification(TalentBox::Keystone, TalentBox::ImpactDriver)];
    let pcts = pcts_for_one(0.469, 0.469, Some(0.5), Some(0.5));
    let out = run_stage4(&c, &pcts, &ScoringProfile::default_v1());
    assert_eq!(out[0], CalibrationStatus::LowerInOrg);
}

#[test]
fn test_gap_inside_tolerance_is_unchanged_despite_labels() {
    let c = vec![classification(TalentBox::ImpactDriver, TalentBox::Keystone)];
    // labels differ but the avg gap is 0.029
    let pcts = pcts_for_one(0.529, 0.529, Some(0.5), Some(0.5));
    let out = run_stage4(&c, &pcts, &ScoringProfile::default_v1());
    assert_eq!(out[0], CalibrationStatus::Unchanged);

    let pcts = pcts_for_one(0.471, 0.471, Some(0.5), Some(0.5));
    let out = run_stage4(&c, &pcts, &ScoringProfile::default_v1());
    assert_eq!(out[0], CalibrationStatus::Unchanged);
}

#[test]
fn test_missing_team_percentiles_fall_back_to_no_data() {
    let c = vec![classification(TalentBox::Keystone, TalentBox::NewToRate)];
    let pcts = pcts_for_one(0.5, 0.5, None, None);
    let out = run_stage4(&c, &pcts, &ScoringProfile::default_v1());
    assert_eq!(out[0], CalibrationStatus::NoData);
}
