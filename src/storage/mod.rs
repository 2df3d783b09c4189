// Storage module - persistent data kept on the local machine

pub mod agent_store;

pub use agent_store::{AgentStore, SavedAgent};
