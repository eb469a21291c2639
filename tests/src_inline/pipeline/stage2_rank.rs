use super::*;
use crate::model::record::{EvalCategory, PerfInputs, PotInputs};

fn record(emp: &str, manager: &str, category: EvalCategory) -> EvaluationRecord {
    EvaluationRecord {
        emp_id: emp.to_string(),
        emp_name: format!("Name {emp}"),
        manager: manager.to_string(),
        business_unit: "Lending".to_string(),
        department: "Risk".to_string(),
        sub_department: "Core".to_string(),
        quarter: "2026-Q1".to_string(),
        category,
        perf: PerfInputs::default(),
        pot: PotInputs::default(),
    }
}

fn scores(perf: Vec<f32>, pot: Vec<f32>) -> CompositeScores {
    CompositeScores {
        performance: perf,
        potential: pot,
    }
}

#[test]
fn test_percent_rank_basic() {
    let values = vec![2.0f32, 4.0, 5.0, 8.0, 9.5];
    let members: Vec<usize> = (0..values.len()).collect();
    let mut ranks = percent_rank(&values, &members);
    ranks.sort_by_key(|&(idx, _)| idx);
    let pcts: Vec<f32> = ranks.iter().map(|&(_, p)| p).collect();
    assert_eq!(pcts, vec![0.2, 0.4, 0.6, 0.8, 1.0]);
}

#[test]
fn test_percent_rank_bounds_and_monotonic() {
    let values = vec![3.0f32, 1.0, 4.0, 1.5, 9.0, 2.6, 5.3];
    let members: Vec<usize> = (0..values.len()).collect();
    let mut ranks = percent_rank(&values, &members);
    ranks.sort_by(|a, b| values[a.0].partial_cmp(&values[b.0]).unwrap());
    let pcts: Vec<f32> = ranks.iter().map(|&(_, p)| p).collect();
    for w in pcts.windows(2) {
        assert!(w[0] <= w[1]);
    }
    for &p in &pcts {
        assert!(p > 0.0 && p <= 1.0);
    }
    assert_eq!(*pcts.last().unwrap(), 1.0);
}

#[test]
fn test_percent_rank_single_member() {
    let values = vec![0.0f32, 7.0];
    let ranks = percent_rank(&values, &[1]);
    assert_eq!(ranks, vec![(1, 1.0)]);
}

#[test]
fn test_percent_rank_empty_population() {
    let ranks = percent_rank(&[], &[]);
    assert!(ranks.is_empty());
}

#[test]
fn test_percent_rank_ties_share_percentile() {
    let values = vec![5.0f32, 5.0, 3.0, 9.0];
    let members: Vec<usize> = (0..values.len()).collect();
    let mut ranks = percent_rank(&values, &members);
    ranks.sort_by_key(|&(idx, _)| idx);
    // both 5.0s share the max-inclusive rank 3/4
    assert_eq!(ranks[0].1, 0.75);
    assert_eq!(ranks[1].1, 0.75);
    assert_eq!(ranks[2].1, 0.25);
    assert_eq!(ranks[3].1, 1.0);
}

#[test]
fn test_percent_rank_tied_maximum_is_one() {
    let values = vec![9.0f32, 9.0, 1.0];
    let members: Vec<usize> = (0..values.len()).collect();
    let mut ranks = percent_rank(&values, &members);
    ranks.sort_by_key(|&(idx, _)| idx);
    assert_eq!(ranks[0].1, 1.0);
    assert_eq!(ranks[1].1, 1.0);
}

#[test]
fn test_global_ranks_cover_all_records() {
    let records = vec![
        record("E1", "M1", EvalCategory::Rated),
        record("E2", "M1", EvalCategory::NewToRate),
        record("E3", "M2", EvalCategory::Rated),
    ];
    let s = scores(vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0]);
    let out = run_stage2(&records, &s);
    // the insufficient-data row still ranks globally
    assert!((out.global_perf[1] - 2.0 / 3.0).abs() < 1e-6);
    assert!((out.global_pot[0] - 1.0).abs() < 1e-6);
}

#[test]
fn test_team_ranks_exclude_new_to_rate() {
    let records = vec![
        record("E1", "M1", EvalCategory::Rated),
        record("E2", "M1", EvalCategory::NewToRate),
        record("E3", "M1", EvalCategory::Rated),
    ];
    // the excluded row has the best raw score; it must not depress anyone
    let s = scores(vec![4.0, 9.0, 6.0], vec![4.0, 9.0, 6.0]);
    let out = run_stage2(&records, &s);

    assert_eq!(out.team_perf[1], None);
    assert_eq!(out.team_pot[1], None);
    // population is the two rated rows only
    assert_eq!(out.team_perf[0], Some(0.5));
    assert_eq!(out.team_perf[2], Some(1.0));
}

#[test]
fn test_team_ranks_are_per_manager() {
    let records = vec![
        record("E1", "M1", EvalCategory::Rated),
        record("E2", "M1", EvalCategory::Rated),
        record("E3", "M2", EvalCategory::Rated),
    ];
    // E3 scores between E1 and E2 but sits alone under M2
    let s = scores(vec![2.0, 8.0, 5.0], vec![2.0, 8.0, 5.0]);
    let out = run_stage2(&records, &s);

    assert_eq!(out.team_perf[0], Some(0.5));
    assert_eq!(out.team_perf[1], Some(1.0));
    assert_eq!(out.team_perf[2], Some(1.0));
}

#[test]
fn test_global_and_team_populations_do_not_mix() {
    let records = vec![
        record("E1", "M1", EvalCategory::Rated),
        record("E2", "M2", EvalCategory::Rated),
        record("E3", "M2", EvalCategory::Rated),
        record("E4", "M2", EvalCategory::Rated),
    ];
    let s = scores(vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 2.0, 3.0, 4.0]);
    let out = run_stage2(&records, &s);

    // lowest org-wide, alone in team
    assert_eq!(out.global_perf[0], 0.25);
    assert_eq!(out.team_perf[0], Some(1.0));
    // lowest of three under M2
    assert_eq!(out.global_perf[1], 0.5);
    assert!((out.team_perf[1].unwrap() - 1.0 / 3.0).abs() < 1e-6);
}
