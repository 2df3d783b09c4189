use crate::client::RequestClient;
use crate::client::navigation::page_query;
use crate::error::Error;
use crate::models::{Envelope, Faction, Meta, Paginated};

/// Faction endpoints. Listing all factions needs no token; the agent's own
/// faction view does.
pub struct FactionManager {
    requests: RequestClient,
}

impl FactionManager {
    pub fn new(requests: RequestClient) -> Self {
        FactionManager { requests }
    }

    /// All factions in the universe, traits included.
    pub async fn list(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<(Vec<Faction>, Meta), Error> {
        let endpoint = format!("/factions{}", page_query(page, limit));
        let factions: Paginated<Faction> = self.requests.get(&endpoint, None).await?;
        Ok((factions.data, factions.meta))
    }

    /// The factions an agent has standing with.
    pub async fn for_agent(&self, token: &str) -> Result<Vec<Faction>, Error> {
        let factions: Envelope<Vec<Faction>> =
            self.requests.get("/my/factions", Some(token)).await?;
        Ok(factions.data)
    }
}
