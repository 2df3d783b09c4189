// Walk a fresh agent through the basic session flow: register, look around,
// put the command ship in orbit and back at the dock.
//
// Requires network access to the live API. Pass a unique callsign:
//   cargo run --example session_tour -- MY-CALLSIGN

use spacetraders_console::{AgentStore, RequestClient, SpaceTradersClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let callsign = std::env::args()
        .nth(1)
        .ok_or("usage: session_tour <callsign>")?;

    let store = AgentStore::new("storage/demo_agents.json");
    let mut client = SpaceTradersClient::with_parts(RequestClient::new(), store);

    let session = client.register_agent(&callsign, "COSMIC").await?;
    let agent = session.agent();
    println!("🆕 Registered {} at {}", agent.symbol, agent.headquarters);

    let ships = session.navigation().list_ships().await?;
    println!("🚢 Starting fleet:");
    for ship in &ships {
        println!("   {} [{}] - {}", ship.symbol, ship.registration.role, ship.nav.status);
    }

    let mut command_ship = ships
        .into_iter()
        .find(|ship| ship.registration.role == "COMMAND")
        .ok_or("no command ship in starting fleet")?;

    session.navigation().orbit(&mut command_ship).await?;
    println!("🛰️  {} now {}", command_ship.symbol, command_ship.nav.status);

    session.navigation().dock(&mut command_ship).await?;
    println!("⚓ {} now {}", command_ship.symbol, command_ship.nav.status);

    let factions = session.agent_factions().await?;
    println!("🏛️  Standing with {} faction(s)", factions.len());

    client.logout();
    println!("👋 Session closed");
    Ok(())
}
