use std::path::{Path, PathBuf};

pub mod table;

use table::{RawTable, load_table};
use thiserror::Error;
use tracing::info;

use crate::model::record::{EvalCategory, EvaluationRecord, PerfInputs, PotInputs};

pub const COL_EMP_ID: &str = "EMP ID";
pub const COL_EMP_NAME: &str = "EMP Name";
pub const COL_MANAGER: &str = "Manager";
pub const COL_BUSINESS_UNIT: &str = "Business Unit";
pub const COL_DEPARTMENT: &str = "Department";
pub const COL_SUB_DEPARTMENT: &str = "Sub Department";
pub const COL_QUARTER: &str = "Quarter";
pub const COL_CATEGORY: &str = "Category";

pub const COL_OKR: &str = "OKR Last Quarter";
pub const COL_QUALITY: &str = "Quality of Output";
pub const COL_OWNERSHIP: &str = "Ownership and Reliability";
pub const COL_DELIVERY: &str = "Delivery";
pub const COL_LEARNING: &str = "Learning Ability";
pub const COL_COLLABORATION: &str = "Collaboration";
pub const COL_FEEDBACK: &str = "Feedback Reception";
pub const COL_BEYOND_SCOPE: &str = "Ownership Beyond Scope";

pub const CATEGORY_NEW_TO_RATE: &str = "New to Rate";

pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_EMP_ID,
    COL_EMP_NAME,
    COL_MANAGER,
    COL_BUSINESS_UNIT,
    COL_DEPARTMENT,
    COL_SUB_DEPARTMENT,
    COL_QUARTER,
    COL_CATEGORY,
    COL_OKR,
    COL_QUALITY,
    COL_OWNERSHIP,
    COL_DELIVERY,
    COL_LEARNING,
    COL_COLLABORATION,
    COL_FEEDBACK,
    COL_BEYOND_SCOPE,
];

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone)]
pub struct DatasetBundle {
    pub source_path: PathBuf,
    pub n_rows_raw: usize,
    pub records: Vec<EvaluationRecord>,
}

/// Loads an evaluation export and maps it onto records. Column presence is
/// checked before any row is touched; a single error names every missing
/// column so the operator fixes the export once.
pub fn load_dataset(path: &Path) -> Result<DatasetBundle, InputError> {
    let raw = load_table(path)?;
    let layout = ColumnLayout::resolve(&raw)?;

    let mut records = Vec::with_capacity(raw.rows.len());
    for row in &raw.rows {
        records.push(layout.record_from_row(row));
    }

    info!(
        "loaded {} evaluation rows from {}",
        records.len(),
        path.display()
    );

    Ok(DatasetBundle {
        source_path: path.to_path_buf(),
        n_rows_raw: raw.rows.len(),
        records,
    })
}

struct ColumnLayout {
    emp_id: usize,
    emp_name: usize,
    manager: usize,
    business_unit: usize,
    department: usize,
    sub_department: usize,
    quarter: usize,
    category: usize,
    okr: usize,
    quality: usize,
    ownership: usize,
    delivery: usize,
    learning: usize,
    collaboration: usize,
    feedback: usize,
    beyond_scope: usize,
}

impl ColumnLayout {
    fn resolve(raw: &RawTable) -> Result<ColumnLayout, InputError> {
        let find = |name: &str| raw.columns.iter().position(|c| c == name);

        let mut missing = Vec::new();
        for &name in REQUIRED_COLUMNS {
            if find(name).is_none() {
                missing.push(name.to_string());
            }
        }
        if !missing.is_empty() {
            return Err(InputError::MissingColumns(missing));
        }

        let pos = |name: &str| find(name).unwrap_or(0);
        Ok(ColumnLayout {
            emp_id: pos(COL_EMP_ID),
            emp_name: pos(COL_EMP_NAME),
            manager: pos(COL_MANAGER),
            business_unit: pos(COL_BUSINESS_UNIT),
            department: pos(COL_DEPARTMENT),
            sub_department: pos(COL_SUB_DEPARTMENT),
            quarter: pos(COL_QUARTER),
            category: pos(COL_CATEGORY),
            okr: pos(COL_OKR),
            quality: pos(COL_QUALITY),
            ownership: pos(COL_OWNERSHIP),
            delivery: pos(COL_DELIVERY),
            learning: pos(COL_LEARNING),
            collaboration: pos(COL_COLLABORATION),
            feedback: pos(COL_FEEDBACK),
            beyond_scope: pos(COL_BEYOND_SCOPE),
        })
    }

    fn record_from_row(&self, row: &[String]) -> EvaluationRecord {
        let text = |idx: usize| row.get(idx).map(|s| s.trim()).unwrap_or("").to_string();
        let score = |idx: usize| score_value(row.get(idx).map(String::as_str).unwrap_or(""));

        let category = if text(self.category) == CATEGORY_NEW_TO_RATE {
            EvalCategory::NewToRate
        } else {
            EvalCategory::Rated
        };

        EvaluationRecord {
            emp_id: text(self.emp_id),
            emp_name: text(self.emp_name),
            manager: text(self.manager),
            business_unit: text(self.business_unit),
            department: text(self.department),
            sub_department: text(self.sub_department),
            quarter: text(self.quarter),
            category,
            perf: PerfInputs {
                okr: score(self.okr),
                quality: score(self.quality),
                ownership: score(self.ownership),
                delivery: score(self.delivery),
            },
            pot: PotInputs {
                learning: score(self.learning),
                collaboration: score(self.collaboration),
                feedback: score(self.feedback),
                beyond_scope: score(self.beyond_scope),
            },
        }
    }
}

/// Sub-score cells that fail to parse count as zero, not as errors.
pub fn score_value(cell: &str) -> f32 {
    cell.trim().parse::<f32>().unwrap_or(0.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
