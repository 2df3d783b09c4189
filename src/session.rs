use crate::client::{AgentManager, FactionManager, NavigationManager, RequestClient};
use crate::error::Error;
use crate::models::{Agent, Faction, RegisterData};
use crate::storage::{AgentStore, SavedAgent};
use crate::v_info;

/// One authenticated play session, bound to a single agent's token for its
/// whole lifetime.
pub struct Session {
    agent: Agent,
    token: String,
    navigation: NavigationManager,
    factions: FactionManager,
}

impl Session {
    pub(crate) fn new(requests: RequestClient, token: String, agent: Agent) -> Self {
        let navigation = NavigationManager::new(requests.clone(), token.clone());
        let factions = FactionManager::new(requests);
        Session {
            agent,
            token,
            navigation,
            factions,
        }
    }

    /// The agent snapshot taken when the session started. Use
    /// [`Session::refresh_agent`] to observe newer credits/ship counts.
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn navigation(&self) -> &NavigationManager {
        &self.navigation
    }

    /// Factions this session's agent has standing with.
    pub async fn agent_factions(&self) -> Result<Vec<Faction>, Error> {
        self.factions.for_agent(&self.token).await
    }

    /// Re-fetch the agent behind this session.
    pub async fn refresh_agent(&mut self, agents: &AgentManager) -> Result<&Agent, Error> {
        self.agent = agents.get_agent(&self.token).await?;
        Ok(&self.agent)
    }
}

/// Entry point composing the domain managers.
///
/// Two states: anonymous (no session) and active. `register_agent` and
/// `start_session` both move to active, silently replacing any session that
/// was already running; `logout` returns to anonymous.
pub struct SpaceTradersClient {
    requests: RequestClient,
    agents: AgentManager,
    session: Option<Session>,
}

impl SpaceTradersClient {
    pub fn new() -> Self {
        Self::with_parts(RequestClient::new(), AgentStore::new(crate::AGENTS_FILE))
    }

    pub fn with_parts(requests: RequestClient, store: AgentStore) -> Self {
        let agents = AgentManager::new(requests.clone(), store);
        SpaceTradersClient {
            requests,
            agents,
            session: None,
        }
    }

    pub fn agents(&self) -> &AgentManager {
        &self.agents
    }

    /// Credentials saved on this machine.
    pub fn saved_agents(&self) -> Result<Vec<SavedAgent>, Error> {
        self.agents.saved_agents()
    }

    /// All factions, for picking one at registration time.
    pub async fn factions(&self) -> Result<Vec<Faction>, Error> {
        let manager = FactionManager::new(self.requests.clone());
        let (factions, _) = manager.list(None, None).await?;
        Ok(factions)
    }

    /// Create a new agent, persist its credentials and start a session for
    /// it. Replaces any active session.
    pub async fn register_agent(
        &mut self,
        callsign: &str,
        faction: &str,
    ) -> Result<&Session, Error> {
        let RegisterData { token, agent } = self.agents.register(callsign, faction).await?;
        v_info!("🆕 Registered agent {} ({})", agent.symbol, agent.starting_faction);
        Ok(self.install_session(token, agent))
    }

    /// Start a session for an existing token. Replaces any active session.
    pub async fn start_session(&mut self, token: &str) -> Result<&Session, Error> {
        let agent = self.agents.get_agent(token).await?;
        Ok(self.install_session(token.to_string(), agent))
    }

    /// Check a token against `/my/agent` without touching the current
    /// session.
    pub async fn validate_token(&self, token: &str) -> Result<Agent, Error> {
        self.agents.get_agent(token).await
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    /// Drop the active session, returning to the anonymous state.
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            v_info!("👋 Logged out {}", session.agent.symbol);
        }
    }

    fn install_session(&mut self, token: String, agent: Agent) -> &Session {
        self.session
            .insert(Session::new(self.requests.clone(), token, agent))
    }
}

impl Default for SpaceTradersClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_agent(symbol: &str) -> Agent {
        Agent {
            account_id: Some("acct-1".into()),
            symbol: symbol.to_string(),
            headquarters: "X1-TEST-A1".into(),
            credits: 150000,
            starting_faction: "COSMIC".into(),
            ship_count: 2,
        }
    }

    fn offline_client() -> SpaceTradersClient {
        let requests = RequestClient::with_base_url("http://127.0.0.1:9");
        let store = AgentStore::new(std::env::temp_dir().join("st_session_tests/agents.json"));
        SpaceTradersClient::with_parts(requests, store)
    }

    #[test]
    fn client_starts_anonymous() {
        let client = offline_client();
        assert!(client.session().is_none());
    }

    #[test]
    fn new_session_replaces_the_previous_one() {
        let mut client = offline_client();

        client.install_session("token-a".into(), test_agent("ALPHA"));
        assert_eq!(client.session().unwrap().agent().symbol, "ALPHA");

        client.install_session("token-b".into(), test_agent("BRAVO"));
        let session = client.session().unwrap();
        assert_eq!(session.agent().symbol, "BRAVO");
        assert_eq!(session.token(), "token-b");
    }

    #[test]
    fn logout_returns_to_anonymous() {
        let mut client = offline_client();
        client.install_session("token-a".into(), test_agent("ALPHA"));

        client.logout();
        assert!(client.session().is_none());

        // A second logout is a no-op.
        client.logout();
        assert!(client.session().is_none());
    }

    #[test]
    fn session_keeps_its_token_and_agent_together() {
        let requests = RequestClient::with_base_url("http://127.0.0.1:9");
        let session = Session::new(requests, "token-x".into(), test_agent("XRAY"));
        assert_eq!(session.token(), "token-x");
        assert_eq!(session.agent().symbol, "XRAY");
    }
}
