//! Usage: Core domain logic (achievement evaluation, the tap counter, store catalog).

pub(crate) mod achievements;
pub(crate) mod counter;
pub(crate) mod store_catalog;
