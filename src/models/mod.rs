// Models module - wire types for the SpaceTraders v2 API

pub mod agent;
pub mod faction;
pub mod responses;
pub mod ship;
pub mod survey;
pub mod system;
pub mod waypoint;

// Re-export all models for easier imports
pub use agent::*;
pub use faction::*;
pub use responses::*;
pub use ship::*;
pub use survey::*;
pub use system::*;
pub use waypoint::*;
