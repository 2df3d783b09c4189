// SpaceTraders Console Client
// Typed SDK over the SpaceTraders v2 REST API with local credential storage

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;
pub mod verbosity;

// Re-export commonly used types
pub use models::{
    agent::Agent,
    faction::Faction,
    responses::Meta,
    ship::{FlightMode, Ship, ShipNav},
};

pub use client::{AgentManager, FactionManager, NavigationManager, RequestClient};
pub use config::ConsoleConfig;
pub use error::Error;
pub use session::{Session, SpaceTradersClient};
pub use storage::AgentStore;

// Constants
pub const API_BASE_URL: &str = "https://api.spacetraders.io/v2";
pub const AGENTS_FILE: &str = "storage/agents.json";
