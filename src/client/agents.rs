use crate::client::RequestClient;
use crate::error::Error;
use crate::models::{Agent, Envelope, RegisterData};
use crate::storage::{AgentStore, SavedAgent};
use crate::v_info;

/// Agent endpoints plus the local credential store.
///
/// Registration both creates the remote agent and remembers its
/// `{callsign, token}` pair locally, mirroring how the UI keeps every
/// created agent available for later logins.
pub struct AgentManager {
    requests: RequestClient,
    store: AgentStore,
}

impl AgentManager {
    pub fn new(requests: RequestClient, store: AgentStore) -> Self {
        AgentManager { requests, store }
    }

    /// Register a new agent. Callsign and faction are trimmed first; empty
    /// values are rejected before any request is made.
    pub async fn register(&self, callsign: &str, faction: &str) -> Result<RegisterData, Error> {
        let callsign = callsign.trim();
        let faction = faction.trim();

        if callsign.is_empty() {
            return Err(Error::EmptyField("callsign"));
        }
        if faction.is_empty() {
            return Err(Error::EmptyField("faction"));
        }

        let body = serde_json::json!({
            "symbol": callsign,
            "faction": faction,
        });

        let registered: Envelope<RegisterData> =
            self.requests.post_guest("/register", &body).await?;
        let registered = registered.data;

        // Persist under the symbol the API settled on, not the raw input.
        self.store
            .append(&registered.agent.symbol, &registered.token)?;
        v_info!("💾 Saved credentials for {}", registered.agent.symbol);

        Ok(registered)
    }

    /// Fetch the agent a token belongs to.
    pub async fn get_agent(&self, token: &str) -> Result<Agent, Error> {
        let agent: Envelope<Agent> = self.requests.get("/my/agent", Some(token)).await?;
        Ok(agent.data)
    }

    /// Credentials saved on this machine, in the order they were created.
    pub fn saved_agents(&self) -> Result<Vec<SavedAgent>, Error> {
        self.store.list()
    }

    /// Remember an externally obtained token.
    pub fn remember(&self, callsign: &str, token: &str) -> Result<(), Error> {
        self.store.append(callsign, token)
    }
}
