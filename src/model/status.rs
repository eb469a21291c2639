/// Whether an employee's org-wide standing differs materially from their
/// standing within their manager's team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationStatus {
    NoData,
    Unchanged,
    HigherInOrg,
    LowerInOrg,
}

impl CalibrationStatus {
    pub fn name(self) -> &'static str {
        match self {
            CalibrationStatus::NoData => "no-data",
            CalibrationStatus::Unchanged => "unchanged",
            CalibrationStatus::HigherInOrg => "higher-in-org",
            CalibrationStatus::LowerInOrg => "lower-in-org",
        }
    }
}
