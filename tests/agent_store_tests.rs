use std::path::PathBuf;

use spacetraders_console::AgentStore;

/// Fresh storage path per test so runs don't interfere.
fn scratch_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("spacetraders_console_tests")
        .join(format!("{}-{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&dir);
    dir.join("agents.json")
}

#[test]
fn missing_file_reads_as_empty_list() {
    let store = AgentStore::new(scratch_path("missing"));
    let agents = store.list().expect("list should succeed on missing file");
    assert!(agents.is_empty());
}

#[test]
fn credentials_come_back_in_insertion_order() {
    let store = AgentStore::new(scratch_path("order"));

    store.append("ALPHA", "token-a").unwrap();
    store.append("BRAVO", "token-b").unwrap();
    store.append("CHARLIE", "token-c").unwrap();

    let agents = store.list().unwrap();
    let callsigns: Vec<&str> = agents.iter().map(|a| a.callsign.as_str()).collect();
    assert_eq!(callsigns, ["ALPHA", "BRAVO", "CHARLIE"]);
    assert_eq!(agents[1].token, "token-b");
}

#[test]
fn duplicate_callsigns_are_kept() {
    let store = AgentStore::new(scratch_path("duplicates"));

    store.append("ALPHA", "token-1").unwrap();
    store.append("ALPHA", "token-2").unwrap();

    let agents = store.list().unwrap();
    assert_eq!(agents.len(), 2);
    assert_eq!(agents[0].token, "token-1");
    assert_eq!(agents[1].token, "token-2");
}

#[test]
fn a_second_store_sees_what_the_first_wrote() {
    let path = scratch_path("reload");
    let first = AgentStore::new(&path);
    first.append("NOMAD", "token-n").unwrap();

    let second = AgentStore::new(&path);
    let agents = second.list().unwrap();
    assert_eq!(agents.len(), 1);
    assert_eq!(agents[0].callsign, "NOMAD");
}

#[test]
fn on_disk_shape_matches_the_agents_envelope() {
    let path = scratch_path("shape");
    let store = AgentStore::new(&path);
    store.append("VOYAGER", "token-v").unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["agents"][0]["callsign"], "VOYAGER");
    assert_eq!(value["agents"][0]["token"], "token-v");
}
