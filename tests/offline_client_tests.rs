// Failure-path tests that run without the real API: an unroutable loopback
// port stands in for an unreachable server.

use spacetraders_console::models::Ship;
use spacetraders_console::{
    AgentStore, Error, FlightMode, NavigationManager, RequestClient, SpaceTradersClient,
};

const DEAD_END: &str = "http://127.0.0.1:9";

fn offline_client() -> SpaceTradersClient {
    let requests = RequestClient::with_base_url(DEAD_END);
    let store = AgentStore::new(
        std::env::temp_dir()
            .join("spacetraders_console_tests")
            .join(format!("{}-offline", std::process::id()))
            .join("agents.json"),
    );
    SpaceTradersClient::with_parts(requests, store)
}

fn test_ship() -> Ship {
    let raw = serde_json::json!({
        "symbol": "VOYAGER-1",
        "registration": {
            "name": "VOYAGER-1",
            "factionSymbol": "COSMIC",
            "role": "COMMAND"
        },
        "nav": {
            "systemSymbol": "X1-DF55",
            "waypointSymbol": "X1-DF55-20250Z",
            "route": {
                "destination": {
                    "symbol": "X1-DF55-20250Z",
                    "type": "PLANET",
                    "systemSymbol": "X1-DF55",
                    "x": 10, "y": -5
                },
                "origin": {
                    "symbol": "X1-DF55-69207D",
                    "type": "MOON",
                    "systemSymbol": "X1-DF55",
                    "x": 3, "y": 8
                },
                "departureTime": "2024-01-01T00:00:00.000Z",
                "arrival": "2024-01-01T00:10:00.000Z"
            },
            "status": "DOCKED",
            "flightMode": "CRUISE"
        },
        "crew": {
            "current": 20, "required": 20, "capacity": 40,
            "rotation": "STRICT", "morale": 100, "wages": 0
        },
        "frame": {
            "symbol": "FRAME_FRIGATE", "name": "Frigate",
            "description": "A medium-sized ship.",
            "condition": 100, "integrity": 100,
            "moduleSlots": 8, "mountingPoints": 5, "fuelCapacity": 400,
            "requirements": { "power": 8, "crew": 25 }
        },
        "reactor": {
            "symbol": "REACTOR_FISSION_I", "name": "Fission Reactor",
            "description": "Splits atoms.",
            "requirements": { "crew": 8 }
        },
        "engine": {
            "symbol": "ENGINE_ION_DRIVE_II", "name": "Ion Drive II",
            "description": "Pushes ions.",
            "requirements": { "power": 6, "crew": 8 }
        },
        "cooldown": {
            "shipSymbol": "VOYAGER-1",
            "totalSeconds": 0,
            "remainingSeconds": 0
        },
        "modules": [],
        "mounts": [],
        "cargo": { "capacity": 60, "units": 0, "inventory": [] },
        "fuel": { "current": 400, "capacity": 400 }
    });

    serde_json::from_value(raw).expect("fixture should deserialize")
}

#[tokio::test]
async fn unreachable_api_surfaces_as_transport_error() {
    let client = offline_client();
    let result = client.validate_token("some-token").await;
    assert!(matches!(result, Err(Error::Http(_))));
}

#[tokio::test]
async fn failed_orbit_leaves_nav_untouched() {
    let navigation = NavigationManager::new(
        RequestClient::with_base_url(DEAD_END),
        "token-x".to_string(),
    );
    let mut ship = test_ship();
    let before_status = ship.nav.status.clone();
    let before_waypoint = ship.nav.waypoint_symbol.clone();

    let result = navigation.orbit(&mut ship).await;
    assert!(result.is_err());
    assert_eq!(ship.nav.status, before_status);
    assert_eq!(ship.nav.waypoint_symbol, before_waypoint);
}

#[tokio::test]
async fn failed_dock_and_navigate_retain_prior_snapshot() {
    let navigation = NavigationManager::new(
        RequestClient::with_base_url(DEAD_END),
        "token-x".to_string(),
    );
    let mut ship = test_ship();
    let before_fuel = ship.fuel.current;

    assert!(navigation.dock(&mut ship).await.is_err());
    assert!(navigation.navigate(&mut ship, "X1-DF55-17335A").await.is_err());

    assert_eq!(ship.nav.status, "DOCKED");
    assert_eq!(ship.fuel.current, before_fuel);
    assert_eq!(ship.nav.flight_mode, FlightMode::Cruise);
}

#[tokio::test]
async fn empty_callsign_fails_before_any_request() {
    // The base URL is unroutable, so reaching the network would produce
    // Error::Http instead of the validation error asserted here.
    let client = offline_client();

    let result = client.agents().register("   ", "COSMIC").await;
    assert!(matches!(result, Err(Error::EmptyField("callsign"))));

    let result = client.agents().register("VOYAGER", "").await;
    assert!(matches!(result, Err(Error::EmptyField("faction"))));
}

#[tokio::test]
async fn invalid_flight_mode_never_reaches_the_wire() {
    let result = "SIDEWAYS".parse::<FlightMode>();
    match result {
        Err(Error::InvalidFlightMode(mode)) => assert_eq!(mode, "SIDEWAYS"),
        other => panic!("expected InvalidFlightMode, got {:?}", other),
    }
}

#[tokio::test]
async fn failed_session_start_keeps_client_anonymous() {
    let mut client = offline_client();
    assert!(client.start_session("bad-token").await.is_err());
    assert!(client.session().is_none());
}
