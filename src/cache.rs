use std::time::{Duration, Instant};

use tracing::debug;

use crate::model::record::{EvaluationRecord, RatedRecord};

pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

/// Single-entry result cache keyed by a hash of the working set. A hit is
/// indistinguishable from a fresh run: the pipeline is pure, so rows keyed
/// by identical input are identical. Entries age out after the TTL.
#[derive(Debug)]
pub struct ResultCache {
    ttl: Duration,
    entry: Option<CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
    key: u64,
    computed_at: Instant,
    rows: Vec<RatedRecord>,
}

impl ResultCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    pub fn get(&self, key: u64) -> Option<&[RatedRecord]> {
        let entry = self.entry.as_ref()?;
        if entry.key != key {
            return None;
        }
        if entry.computed_at.elapsed() >= self.ttl {
            debug!("result cache entry expired");
            return None;
        }
        Some(&entry.rows)
    }

    pub fn store(&mut self, key: u64, rows: Vec<RatedRecord>) {
        self.entry = Some(CacheEntry {
            key,
            computed_at: Instant::now(),
            rows,
        });
    }

    pub fn get_or_compute<F>(&mut self, key: u64, compute: F) -> &[RatedRecord]
    where
        F: FnOnce() -> Vec<RatedRecord>,
    {
        if self.get(key).is_none() {
            self.store(key, compute());
        } else {
            debug!("result cache hit");
        }
        // the entry was just stored or verified fresh
        self.entry.as_ref().map(|e| e.rows.as_slice()).unwrap_or(&[])
    }
}

/// Identity of a working set: an order-sensitive FNV-1a hash over every
/// field of every record. Any edit to the data changes the key.
pub fn dataset_key(records: &[EvaluationRecord]) -> u64 {
    let mut hasher = Fnv64::new();
    hasher.update(&(records.len() as u64).to_le_bytes());
    for record in records {
        for text in [
            &record.emp_id,
            &record.emp_name,
            &record.manager,
            &record.business_unit,
            &record.department,
            &record.sub_department,
            &record.quarter,
        ] {
            hasher.update(text.as_bytes());
            hasher.update(&[0]);
        }
        hasher.update(&[match record.category {
            crate::model::record::EvalCategory::Rated => 0,
            crate::model::record::EvalCategory::NewToRate => 1,
        }]);
        for value in [
            record.perf.okr,
            record.perf.quality,
            record.perf.ownership,
            record.perf.delivery,
            record.pot.learning,
            record.pot.collaboration,
            record.pot.feedback,
            record.pot.beyond_scope,
        ] {
            hasher.update(&value.to_le_bytes());
        }
    }
    hasher.finish()
}

struct Fnv64 {
    hash: u64,
}

impl Fnv64 {
    fn new() -> Self {
        Self {
            hash: 0xcbf29ce484222325,
        }
    }

    fn update(&mut self, data: &[u8]) {
        let mut h = self.hash;
        for &b in data {
            h ^= b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        self.hash = h;
    }

    fn finish(&self) -> u64 {
        self.hash
    }
}
