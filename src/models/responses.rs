use serde::Deserialize;

use crate::models;

/// Plain `{"data": ..}` envelope used by every non-paginated endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// `{"data": [..], "meta": {..}}` envelope for paginated list endpoints.
#[derive(Debug, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: Meta,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct Meta {
    pub total: i64,
    pub page: u32,
    pub limit: u32,
}

/// Payload of a successful `POST /register`.
#[derive(Debug, Deserialize)]
pub struct RegisterData {
    pub token: String,
    pub agent: models::Agent,
}

/// Orbit and dock both answer with just the refreshed nav block.
#[derive(Debug, Deserialize)]
pub struct NavOnlyData {
    pub nav: models::ShipNav,
}

/// Navigate and warp answer with spent fuel plus the new route.
#[derive(Debug, Deserialize)]
pub struct NavigateData {
    pub fuel: models::ShipFuel,
    pub nav: models::ShipNav,
}

/// Jumps are instant but impose a cooldown.
#[derive(Debug, Deserialize)]
pub struct JumpData {
    pub cooldown: models::ShipCooldown,
    pub nav: models::ShipNav,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginated_envelope_carries_meta() {
        let raw = r#"{
            "data": [{"symbol": "COSMIC"}, {"symbol": "VOID"}],
            "meta": {"total": 12, "page": 2, "limit": 2}
        }"#;

        let page: Paginated<models::SystemFaction> = serde_json::from_str(raw).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.meta.total, 12);
        assert_eq!(page.meta.page, 2);
    }
}
