use serde::Serialize;

/// Seat picture for one session of one (date, department) query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAvailability {
    pub available: bool,
    pub remaining: i64,
    pub dept_remaining: i64,
}
