use crate::client::RequestClient;
use crate::error::Error;
use crate::models::{
    Envelope, ExtractionYield, FlightMode, JumpData, Meta, NavOnlyData, NavigateData, Paginated,
    Ship, ShipNav, Survey, SurveyData, System, Waypoint,
};
use crate::v_info;

/// Systems, waypoints and ship movement for one agent.
///
/// Movement calls take `&mut Ship` and write the refreshed nav (and fuel,
/// cooldown, cargo where the endpoint returns them) back into the ship only
/// when the call succeeds. On failure the ship keeps its previous snapshot.
pub struct NavigationManager {
    requests: RequestClient,
    token: String,
}

impl NavigationManager {
    pub fn new(requests: RequestClient, token: String) -> Self {
        NavigationManager { requests, token }
    }

    pub async fn list_systems(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<(Vec<System>, Meta), Error> {
        let endpoint = format!("/systems{}", page_query(page, limit));
        let systems: Paginated<System> = self.requests.get(&endpoint, Some(&self.token)).await?;
        Ok((systems.data, systems.meta))
    }

    pub async fn list_waypoints(
        &self,
        system_symbol: &str,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<(Vec<Waypoint>, Meta), Error> {
        let endpoint = format!(
            "/systems/{}/waypoints{}",
            system_symbol,
            page_query(page, limit)
        );
        let waypoints: Paginated<Waypoint> =
            self.requests.get(&endpoint, Some(&self.token)).await?;
        Ok((waypoints.data, waypoints.meta))
    }

    pub async fn list_ships(&self) -> Result<Vec<Ship>, Error> {
        let ships: Envelope<Vec<Ship>> = self.requests.get("/my/ships", Some(&self.token)).await?;
        Ok(ships.data)
    }

    pub async fn get_ship(&self, ship_symbol: &str) -> Result<Ship, Error> {
        let endpoint = format!("/my/ships/{}", ship_symbol);
        let ship: Envelope<Ship> = self.requests.get(&endpoint, Some(&self.token)).await?;
        Ok(ship.data)
    }

    /// Move the ship into orbit at its current waypoint.
    pub async fn orbit<'a>(&self, ship: &'a mut Ship) -> Result<&'a ShipNav, Error> {
        let endpoint = format!("/my/ships/{}/orbit", ship.symbol);
        let data: Envelope<NavOnlyData> = self
            .requests
            .post(&endpoint, &self.token, &serde_json::json!({}))
            .await?;
        ship.nav = data.data.nav;
        Ok(&ship.nav)
    }

    /// Dock the ship at its current waypoint.
    pub async fn dock<'a>(&self, ship: &'a mut Ship) -> Result<&'a ShipNav, Error> {
        let endpoint = format!("/my/ships/{}/dock", ship.symbol);
        let data: Envelope<NavOnlyData> = self
            .requests
            .post(&endpoint, &self.token, &serde_json::json!({}))
            .await?;
        ship.nav = data.data.nav;
        Ok(&ship.nav)
    }

    /// Plot a course to a waypoint in the current system.
    pub async fn navigate<'a>(
        &self,
        ship: &'a mut Ship,
        waypoint_symbol: &str,
    ) -> Result<&'a ShipNav, Error> {
        let endpoint = format!("/my/ships/{}/navigate", ship.symbol);
        let body = serde_json::json!({ "waypointSymbol": waypoint_symbol });
        let data: Envelope<NavigateData> =
            self.requests.post(&endpoint, &self.token, &body).await?;
        ship.fuel = data.data.fuel;
        ship.nav = data.data.nav;
        v_info!(
            "🚀 {} underway to {} (arrival {})",
            ship.symbol,
            waypoint_symbol,
            ship.nav.route.arrival
        );
        Ok(&ship.nav)
    }

    /// Warp to a waypoint outside the current system.
    pub async fn warp<'a>(
        &self,
        ship: &'a mut Ship,
        waypoint_symbol: &str,
    ) -> Result<&'a ShipNav, Error> {
        let endpoint = format!("/my/ships/{}/warp", ship.symbol);
        let body = serde_json::json!({ "waypointSymbol": waypoint_symbol });
        let data: Envelope<NavigateData> =
            self.requests.post(&endpoint, &self.token, &body).await?;
        ship.fuel = data.data.fuel;
        ship.nav = data.data.nav;
        Ok(&ship.nav)
    }

    /// Jump through a gate to another system. Instant, but starts a cooldown.
    pub async fn jump<'a>(
        &self,
        ship: &'a mut Ship,
        system_symbol: &str,
    ) -> Result<&'a ShipNav, Error> {
        let endpoint = format!("/my/ships/{}/jump", ship.symbol);
        let body = serde_json::json!({ "systemSymbol": system_symbol });
        let data: Envelope<JumpData> = self.requests.post(&endpoint, &self.token, &body).await?;
        ship.cooldown = data.data.cooldown;
        ship.nav = data.data.nav;
        Ok(&ship.nav)
    }

    /// Switch the travel profile used by subsequent navigate/warp calls.
    pub async fn set_flight_mode<'a>(
        &self,
        ship: &'a mut Ship,
        mode: FlightMode,
    ) -> Result<&'a ShipNav, Error> {
        let endpoint = format!("/my/ships/{}/nav", ship.symbol);
        let body = serde_json::json!({ "flightMode": mode });
        let nav: Envelope<ShipNav> = self.requests.patch(&endpoint, &self.token, &body).await?;
        ship.nav = nav.data;
        Ok(&ship.nav)
    }

    /// Survey the ship's current waypoint for extractable deposits.
    pub async fn survey(&self, ship: &mut Ship) -> Result<Vec<Survey>, Error> {
        let endpoint = format!("/my/ships/{}/survey", ship.symbol);
        let data: Envelope<SurveyData> = self
            .requests
            .post(&endpoint, &self.token, &serde_json::json!({}))
            .await?;
        ship.cooldown = data.data.cooldown;
        Ok(data.data.surveys)
    }

    /// Extract resources, optionally targeting a previously created survey.
    pub async fn extract(
        &self,
        ship: &mut Ship,
        survey: Option<&Survey>,
    ) -> Result<ExtractionYield, Error> {
        let endpoint = format!("/my/ships/{}/extract", ship.symbol);
        let body = match survey {
            Some(survey) => serde_json::json!({ "survey": survey }),
            None => serde_json::json!({}),
        };
        let data: Envelope<crate::models::ExtractionData> =
            self.requests.post(&endpoint, &self.token, &body).await?;
        let data = data.data;
        ship.cooldown = data.cooldown;
        ship.cargo = data.cargo;
        Ok(data.extraction.extraction_yield)
    }
}

/// Build a `?page=..&limit=..` suffix, empty when neither is set.
pub(crate) fn page_query(page: Option<u32>, limit: Option<u32>) -> String {
    let mut params = Vec::new();
    if let Some(page) = page {
        params.push(format!("page={}", page));
    }
    if let Some(limit) = limit {
        params.push(format!("limit={}", limit));
    }

    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}
