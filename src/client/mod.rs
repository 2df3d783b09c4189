// Client module - transport plus one manager per API domain

pub mod agents;
pub mod factions;
pub mod navigation;
pub mod request;

pub use agents::AgentManager;
pub use factions::FactionManager;
pub use navigation::NavigationManager;
pub use request::RequestClient;
