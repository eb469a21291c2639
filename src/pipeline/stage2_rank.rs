use std::collections::BTreeMap;

use crate::model::record::{EvalCategory, EvaluationRecord};
use crate::pipeline::stage1_scores::CompositeScores;

/// Percent ranks for every record: global ranks over the whole working set,
/// team ranks over the records sharing a manager. Records flagged "New to
/// Rate" are left out of every team population and carry no team rank.
#[derive(Debug, Clone)]
pub struct PercentileSet {
    pub global_perf: Vec<f32>,
    pub global_pot: Vec<f32>,
    pub team_perf: Vec<Option<f32>>,
    pub team_pot: Vec<Option<f32>>,
}

pub fn run_stage2(records: &[EvaluationRecord], scores: &CompositeScores) -> PercentileSet {
    let n = records.len();
    let all: Vec<usize> = (0..n).collect();

    let mut out = PercentileSet {
        global_perf: vec![0.0; n],
        global_pot: vec![0.0; n],
        team_perf: vec![None; n],
        team_pot: vec![None; n],
    };

    for (idx, pct) in percent_rank(&scores.performance, &all) {
        out.global_perf[idx] = pct;
    }
    for (idx, pct) in percent_rank(&scores.potential, &all) {
        out.global_pot[idx] = pct;
    }

    let mut teams: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (idx, record) in records.iter().enumerate() {
        if record.category == EvalCategory::NewToRate {
            continue;
        }
        teams.entry(record.manager.as_str()).or_default().push(idx);
    }

    for members in teams.values() {
        for (idx, pct) in percent_rank(&scores.performance, members) {
            out.team_perf[idx] = Some(pct);
        }
        for (idx, pct) in percent_rank(&scores.potential, members) {
            out.team_pot[idx] = Some(pct);
        }
    }

    out
}

/// Percent rank of each member within its population: the fraction of the
/// population scoring at or below the member, self included. Tied scores
/// share the rank of the last member of the run, so a tied maximum is still
/// 1.0 and a sole member ranks 1.0. An empty population yields nothing.
pub fn percent_rank(scores: &[f32], members: &[usize]) -> Vec<(usize, f32)> {
    let n = members.len();
    if n == 0 {
        return Vec::new();
    }

    let mut order = members.to_vec();
    order.sort_by(|&a, &b| {
        match scores[a]
            .partial_cmp(&scores[b])
            .unwrap_or(std::cmp::Ordering::Equal)
        {
            std::cmp::Ordering::Equal => a.cmp(&b),
            other => other,
        }
    });

    let mut out = Vec::with_capacity(n);
    let mut i = 0usize;
    while i < n {
        let mut j = i + 1;
        while j < n && scores[order[j]] == scores[order[i]] {
            j += 1;
        }
        let pct = j as f32 / n as f32;
        for &idx in &order[i..j] {
            out.push((idx, pct));
        }
        i = j;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_rank.rs"]
mod tests;
