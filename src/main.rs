// SpaceTraders Console - command-line front-end over the client library

use clap::{Parser, Subcommand};

use spacetraders_console::verbosity::set_verbosity_level;
use spacetraders_console::{
    AgentStore, ConsoleConfig, FlightMode, RequestClient, Session, SpaceTradersClient,
};

#[derive(Parser)]
#[command(
    name = "spacetraders-console",
    about = "Console client for the SpaceTraders v2 API",
    version
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Verbosity (0=quiet, 1=basic, 2=full)
    #[arg(short, long, default_value_t = 0)]
    verbose: u8,

    /// Act as this saved callsign instead of the most recent one
    #[arg(long, global = true)]
    callsign: Option<String>,

    /// Act with an explicit token, bypassing saved credentials
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Register a new agent and save its credentials
    Register { callsign: String, faction: String },
    /// List credentials saved on this machine
    Agents,
    /// Check a token against the API and save it on success
    Login { token: String },
    /// Show the current agent
    Status,
    /// List all factions
    Factions,
    /// List your ships
    Ships,
    /// List systems
    Systems {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// List waypoints in a system
    Waypoints {
        system: String,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Move a ship into orbit
    Orbit { ship: String },
    /// Dock a ship
    Dock { ship: String },
    /// Navigate a ship to a waypoint in its system
    Navigate { ship: String, waypoint: String },
    /// Warp a ship to a waypoint in another system
    Warp { ship: String, waypoint: String },
    /// Jump a ship through a gate to another system
    Jump { ship: String, system: String },
    /// Set a ship's flight mode (CRUISE, BURN, DRIFT, STEALTH)
    FlightMode { ship: String, mode: String },
    /// Survey the ship's current waypoint
    Survey { ship: String },
    /// Extract resources at the ship's current waypoint
    Extract { ship: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    set_verbosity_level(cli.verbose);

    let config = ConsoleConfig::load_or_create(&cli.config)?;
    let requests = RequestClient::with_base_url(&config.api.base_url);
    let store = AgentStore::new(config.storage.agents_file.clone());
    let mut client = SpaceTradersClient::with_parts(requests, store);

    match cli.command {
        Command::Register { callsign, faction } => {
            let session = client.register_agent(&callsign, &faction).await?;
            let agent = session.agent();
            println!("🆕 Registered {} with {}", agent.symbol, agent.starting_faction);
            println!("   HQ: {}", agent.headquarters);
            println!("   Credits: {}", agent.credits);
            println!("   Token saved to {}", config.storage.agents_file);
        }
        Command::Agents => {
            let agents = client.saved_agents()?;
            if agents.is_empty() {
                println!("📭 No saved agents yet - try 'register'");
            } else {
                println!("👥 {} saved agent(s):", agents.len());
                for (index, saved) in agents.iter().enumerate() {
                    println!("   {}. {}", index + 1, saved.callsign);
                }
            }
        }
        Command::Login { token } => {
            let agent = client.validate_token(&token).await?;
            client.agents().remember(&agent.symbol, &token)?;
            println!("✅ Token is valid - welcome back, {}", agent.symbol);
        }
        Command::Status => {
            let session = open_session(&mut client, &cli.callsign, &cli.token).await?;
            let agent = session.agent();
            println!("📊 Agent {}", agent.symbol);
            println!("   HQ: {}", agent.headquarters);
            println!("   Credits: {}", agent.credits);
            println!("   Ships: {}", agent.ship_count);
            println!("   Faction: {}", agent.starting_faction);
        }
        Command::Factions => {
            let factions = client.factions().await?;
            println!("🏛️  {} faction(s):", factions.len());
            for faction in factions {
                let recruiting = if faction.is_recruiting { "recruiting" } else { "closed" };
                println!("   {} - {} ({})", faction.symbol, faction.name, recruiting);
            }
        }
        Command::Ships => {
            let session = open_session(&mut client, &cli.callsign, &cli.token).await?;
            let ships = session.navigation().list_ships().await?;
            println!("🚢 {} ship(s):", ships.len());
            for ship in ships {
                println!(
                    "   {} [{}] at {} ({}, {})",
                    ship.symbol,
                    ship.registration.role,
                    ship.nav.waypoint_symbol,
                    ship.nav.status,
                    ship.nav.flight_mode
                );
            }
        }
        Command::Systems { page, limit } => {
            let session = open_session(&mut client, &cli.callsign, &cli.token).await?;
            let (systems, meta) = session.navigation().list_systems(page, limit).await?;
            println!("🌌 Systems (page {} of {} total):", meta.page, meta.total);
            for system in systems {
                println!(
                    "   {} [{}] at ({}, {}) - {} waypoint(s)",
                    system.symbol,
                    system.system_type,
                    system.x,
                    system.y,
                    system.waypoints.len()
                );
            }
        }
        Command::Waypoints { system, page, limit } => {
            let session = open_session(&mut client, &cli.callsign, &cli.token).await?;
            let (waypoints, meta) = session
                .navigation()
                .list_waypoints(&system, page, limit)
                .await?;
            println!("📍 Waypoints in {} (page {} of {} total):", system, meta.page, meta.total);
            for waypoint in waypoints {
                println!(
                    "   {} [{}] at ({}, {})",
                    waypoint.symbol, waypoint.waypoint_type, waypoint.x, waypoint.y
                );
            }
        }
        Command::Orbit { ship } => {
            let session = open_session(&mut client, &cli.callsign, &cli.token).await?;
            let mut ship = session.navigation().get_ship(&ship).await?;
            session.navigation().orbit(&mut ship).await?;
            println!("🛰️  {} is now {}", ship.symbol, ship.nav.status);
        }
        Command::Dock { ship } => {
            let session = open_session(&mut client, &cli.callsign, &cli.token).await?;
            let mut ship = session.navigation().get_ship(&ship).await?;
            session.navigation().dock(&mut ship).await?;
            println!("⚓ {} is now {}", ship.symbol, ship.nav.status);
        }
        Command::Navigate { ship, waypoint } => {
            let session = open_session(&mut client, &cli.callsign, &cli.token).await?;
            let mut ship = session.navigation().get_ship(&ship).await?;
            session.navigation().navigate(&mut ship, &waypoint).await?;
            println!(
                "🚀 {} en route to {} (arrival {}, fuel {}/{})",
                ship.symbol,
                waypoint,
                ship.nav.route.arrival,
                ship.fuel.current,
                ship.fuel.capacity
            );
        }
        Command::Warp { ship, waypoint } => {
            let session = open_session(&mut client, &cli.callsign, &cli.token).await?;
            let mut ship = session.navigation().get_ship(&ship).await?;
            session.navigation().warp(&mut ship, &waypoint).await?;
            println!("🌀 {} warping to {}", ship.symbol, waypoint);
        }
        Command::Jump { ship, system } => {
            let session = open_session(&mut client, &cli.callsign, &cli.token).await?;
            let mut ship = session.navigation().get_ship(&ship).await?;
            session.navigation().jump(&mut ship, &system).await?;
            println!(
                "🕳️  {} jumped to {} (cooldown {}s)",
                ship.symbol, system, ship.cooldown.remaining_seconds
            );
        }
        Command::FlightMode { ship, mode } => {
            // Validated locally; a bad mode never reaches the API.
            let mode: FlightMode = mode.parse()?;
            let session = open_session(&mut client, &cli.callsign, &cli.token).await?;
            let mut ship = session.navigation().get_ship(&ship).await?;
            session.navigation().set_flight_mode(&mut ship, mode).await?;
            println!("🎚️  {} flight mode set to {}", ship.symbol, mode);
        }
        Command::Survey { ship } => {
            let session = open_session(&mut client, &cli.callsign, &cli.token).await?;
            let mut ship = session.navigation().get_ship(&ship).await?;
            let surveys = session.navigation().survey(&mut ship).await?;
            println!("🔭 {} survey(s) created:", surveys.len());
            for survey in surveys {
                let deposits: Vec<&str> =
                    survey.deposits.iter().map(|d| d.symbol.as_str()).collect();
                println!(
                    "   {} [{}] deposits: {} (expires {})",
                    survey.signature,
                    survey.size,
                    deposits.join(", "),
                    survey.expiration
                );
            }
        }
        Command::Extract { ship } => {
            let session = open_session(&mut client, &cli.callsign, &cli.token).await?;
            let mut ship = session.navigation().get_ship(&ship).await?;
            let extracted = session.navigation().extract(&mut ship, None).await?;
            println!(
                "⛏️  {} extracted {} x{} (cargo {}/{})",
                ship.symbol,
                extracted.symbol,
                extracted.units,
                ship.cargo.units,
                ship.cargo.capacity
            );
        }
    }

    Ok(())
}

/// Pick a token (explicit flag, saved callsign, or most recent credential)
/// and start a session for it.
async fn open_session<'a>(
    client: &'a mut SpaceTradersClient,
    callsign: &Option<String>,
    token: &Option<String>,
) -> Result<&'a Session, Box<dyn std::error::Error>> {
    let token = match (token, callsign) {
        (Some(token), _) => token.clone(),
        (None, Some(callsign)) => {
            let saved = client.saved_agents()?;
            saved
                .iter()
                .rev()
                .find(|agent| agent.callsign.eq_ignore_ascii_case(callsign))
                .map(|agent| agent.token.clone())
                .ok_or_else(|| format!("no saved agent named '{}'", callsign))?
        }
        (None, None) => {
            let saved = client.saved_agents()?;
            saved
                .last()
                .map(|agent| agent.token.clone())
                .ok_or("no saved agents - run 'register' or 'login' first")?
        }
    };

    Ok(client.start_session(&token).await?)
}
