use serde::{Deserialize, Serialize};

/// A player account as reported by `/my/agent` and `/register`.
///
/// Snapshots are immutable; re-fetch through the API to observe changes
/// (credits, ship count).
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Absent for account-less agents created through `/register`.
    pub account_id: Option<String>,
    pub symbol: String,
    /// Waypoint symbol of the agent's headquarters.
    pub headquarters: String,
    pub credits: i64,
    pub starting_faction: String,
    pub ship_count: i32,
}
