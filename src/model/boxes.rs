use crate::model::thresholds::ScoringProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalentBox {
    RoughDiamond,
    FutureLeader,
    TopTalent,
    InconsistentPlayer,
    Keystone,
    ImpactDriver,
    TalentMismatch,
    Practitioner,
    TrustedAdvisor,
    NewToRate,
}

/// Grid rows are potential bands (low, medium, high), columns are
/// performance bands in the same order. Laid out as a constant so every
/// cell of the 3x3 mapping is visible at a glance.
const BOX_GRID: [[TalentBox; 3]; 3] = [
    // potential low
    [
        TalentBox::TalentMismatch,
        TalentBox::Practitioner,
        TalentBox::TrustedAdvisor,
    ],
    // potential medium
    [
        TalentBox::InconsistentPlayer,
        TalentBox::Keystone,
        TalentBox::ImpactDriver,
    ],
    // potential high
    [
        TalentBox::RoughDiamond,
        TalentBox::FutureLeader,
        TalentBox::TopTalent,
    ],
];

/// Low is strictly below the lower cut; high is strictly above the upper
/// cut, so a percentile of exactly 0.80 stays in the medium band.
pub fn band_for(pct: f32, profile: &ScoringProfile) -> Band {
    if pct < profile.band_low {
        Band::Low
    } else if pct > profile.band_high {
        Band::High
    } else {
        Band::Medium
    }
}

fn band_index(band: Band) -> usize {
    match band {
        Band::Low => 0,
        Band::Medium => 1,
        Band::High => 2,
    }
}

/// Maps a (performance percentile, potential percentile) pair to one of the
/// nine grid boxes. Both inputs are percent ranks in (0, 1]; supplying
/// anything else is a caller bug, not a condition handled here.
pub fn classify(perf_pct: f32, pot_pct: f32, profile: &ScoringProfile) -> TalentBox {
    let perf = band_for(perf_pct, profile);
    let pot = band_for(pot_pct, profile);
    BOX_GRID[band_index(pot)][band_index(perf)]
}

impl TalentBox {
    pub fn name(self) -> &'static str {
        meta(self).name
    }

    pub fn from_name(name: &str) -> Option<TalentBox> {
        BOX_META.iter().find(|m| m.name == name).map(|m| m.bx)
    }

    pub fn definition(self) -> &'static str {
        meta(self).definition
    }

    pub fn color(self) -> &'static str {
        meta(self).color
    }
}

/// Display order for distribution outputs: grid boxes from the top of the
/// grid down, then the tenth bucket.
pub fn box_order() -> &'static [TalentBox] {
    &[
        TalentBox::TopTalent,
        TalentBox::FutureLeader,
        TalentBox::RoughDiamond,
        TalentBox::ImpactDriver,
        TalentBox::Keystone,
        TalentBox::InconsistentPlayer,
        TalentBox::TrustedAdvisor,
        TalentBox::Practitioner,
        TalentBox::TalentMismatch,
        TalentBox::NewToRate,
    ]
}

/// Vertical ordering used by trajectory outputs, worst to best.
pub fn trajectory_order() -> &'static [TalentBox] {
    &[
        TalentBox::TalentMismatch,
        TalentBox::NewToRate,
        TalentBox::Practitioner,
        TalentBox::InconsistentPlayer,
        TalentBox::RoughDiamond,
        TalentBox::Keystone,
        TalentBox::TrustedAdvisor,
        TalentBox::FutureLeader,
        TalentBox::ImpactDriver,
        TalentBox::TopTalent,
    ]
}

#[derive(Debug, Clone, Copy)]
struct BoxMeta {
    bx: TalentBox,
    name: &'static str,
    definition: &'static str,
    color: &'static str,
}

const BOX_META: &[BoxMeta] = &[
    BoxMeta {
        bx: TalentBox::TopTalent,
        name: "Top Talent",
        definition: "Top talent. Consistently exceeds expectations. Retain at all costs.",
        color: "#2d00f7",
    },
    BoxMeta {
        bx: TalentBox::FutureLeader,
        name: "Future Leader",
        definition: "High potential, still learning to deliver top results.",
        color: "#B6F500",
    },
    BoxMeta {
        bx: TalentBox::RoughDiamond,
        name: "Rough Diamond",
        definition: "High raw talent but failing to deliver. Miscast role?",
        color: "#ff8700",
    },
    BoxMeta {
        bx: TalentBox::ImpactDriver,
        name: "Impact Driver",
        definition: "Excellent results, steady growth. Key asset.",
        color: "#FF2DD1",
    },
    BoxMeta {
        bx: TalentBox::Keystone,
        name: "The Keystone",
        definition: "Reliable backbone. Meets expectations consistently.",
        color: "#0aff99",
    },
    BoxMeta {
        bx: TalentBox::InconsistentPlayer,
        name: "Inconsistent Player",
        definition: "Inconsistent results. Needs coaching to decide future.",
        color: "#ffd60a",
    },
    BoxMeta {
        bx: TalentBox::TrustedAdvisor,
        name: "Trusted Advisor",
        definition: "Deep technical expert. Great executor, limited leadership.",
        color: "#FFFCFB",
    },
    BoxMeta {
        bx: TalentBox::Practitioner,
        name: "Practitioner",
        definition: "Meets basic requirements, limited scope for growth.",
        color: "#be0aff",
    },
    BoxMeta {
        bx: TalentBox::TalentMismatch,
        name: "Talent Mismatch",
        definition: "Not meeting expectations. Requires exit plan.",
        color: "#ff0000",
    },
    BoxMeta {
        bx: TalentBox::NewToRate,
        name: "New to Rate",
        definition: "Not enough data to evaluate.",
        color: "#c8c7d6",
    },
];

fn meta(bx: TalentBox) -> &'static BoxMeta {
    // every variant has a row; the fallback is unreachable
    BOX_META
        .iter()
        .find(|m| m.bx == bx)
        .unwrap_or(&BOX_META[0])
}

/// Lookup for downstream consumers keyed by display name. Unknown names
/// resolve to "undefined" rather than failing.
pub fn definition_for(name: &str) -> &'static str {
    match TalentBox::from_name(name) {
        Some(bx) => bx.definition(),
        None => "undefined",
    }
}

pub fn color_for(name: &str) -> &'static str {
    match TalentBox::from_name(name) {
        Some(bx) => bx.color(),
        None => "undefined",
    }
}
