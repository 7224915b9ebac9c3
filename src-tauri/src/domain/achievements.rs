//! Usage: Static achievement catalog and pure unlock evaluation over the tap count.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AchievementTier {
    pub name: &'static str,
    pub requirement: i64,
}

/// Ordered by ascending requirement; evaluation relies on that order.
pub(crate) const CATALOG: [AchievementTier; 7] = [
    AchievementTier {
        name: "Novice",
        requirement: 10,
    },
    AchievementTier {
        name: "Apprentice",
        requirement: 100,
    },
    AchievementTier {
        name: "Pro",
        requirement: 1000,
    },
    AchievementTier {
        name: "Veteran",
        requirement: 10000,
    },
    AchievementTier {
        name: "Legend",
        requirement: 20000,
    },
    AchievementTier {
        name: "Cheater",
        requirement: 50000,
    },
    AchievementTier {
        name: "God",
        requirement: 100000,
    },
];

pub(crate) fn unlocked_tiers(tap_count: i64) -> impl Iterator<Item = &'static AchievementTier> {
    CATALOG
        .iter()
        .filter(move |tier| tier.requirement <= tap_count)
}

pub(crate) fn unlocked_count(tap_count: i64) -> i64 {
    unlocked_tiers(tap_count).count() as i64
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct AchievementRow {
    pub name: String,
    pub requirement: i64,
    pub unlocked: bool,
}

/// Full catalog annotated for the achievements screen, catalog order preserved.
pub(crate) fn list_rows(tap_count: i64) -> Vec<AchievementRow> {
    CATALOG
        .iter()
        .map(|tier| AchievementRow {
            name: tier.name.to_string(),
            requirement: tier.requirement,
            unlocked: tier.requirement <= tap_count,
        })
        .collect()
}
