use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ship::{ShipCargo, ShipCooldown};

/// A survey is an opaque signature the extractor endpoint accepts back
/// verbatim, so it both serializes and deserializes.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Survey {
    pub signature: String,
    pub symbol: String,
    pub deposits: Vec<SurveyDeposit>,
    pub expiration: DateTime<Utc>,
    pub size: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SurveyDeposit {
    pub symbol: String,
}

#[derive(Debug, Deserialize)]
pub struct SurveyData {
    pub cooldown: ShipCooldown,
    pub surveys: Vec<Survey>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractionData {
    pub cooldown: ShipCooldown,
    pub extraction: Extraction,
    pub cargo: ShipCargo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    pub ship_symbol: String,
    #[serde(rename = "yield")]
    pub extraction_yield: ExtractionYield,
}

#[derive(Debug, Deserialize)]
pub struct ExtractionYield {
    pub symbol: String,
    pub units: i32,
}
