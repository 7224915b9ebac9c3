//! Usage: Display-only upgrade catalog for the store screen (no purchase flow is wired up).

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub(crate) struct StoreUpgrade {
    pub id: &'static str,
    pub title: &'static str,
    pub cost: i64,
}

pub(crate) fn catalog() -> Vec<StoreUpgrade> {
    vec![
        StoreUpgrade {
            id: "tap-x2",
            title: "Upgrade: 2x tap count",
            cost: 5000,
        },
        StoreUpgrade {
            id: "tap-x5",
            title: "Upgrade: 5x tap count",
            cost: 10000,
        },
    ]
}
