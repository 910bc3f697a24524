//! Serialization and file persistence of CPU agent caches

use tempfile::TempDir;
use ttt::{
    CpuAgent, Grid, SerializedAgent, State,
    adapters::{InMemoryRepository, MsgPackRepository},
    ports::StateRepository,
};

mod common;

use common::{grid, ten_cell_cache};

#[test]
fn test_serialize_uses_string_keys_and_plain_arrays() {
    let mut agent = CpuAgent::new();
    agent.set_states(ten_cell_cache());

    let value = serde_json::to_value(agent.serialize()).unwrap();
    let states = value["states"].as_object().expect("states must be an object");
    assert_eq!(states.len(), 2);

    assert_eq!(
        value["states"]["0"]["grid"],
        serde_json::json!([0, 0, 0, 0, 0, 0, 0, 0, 0, 0])
    );
    assert_eq!(
        value["states"]["1"]["grid"],
        serde_json::json!([1, 1, 1, 1, 1, 1, 1, 1, 1, 0])
    );
    assert_eq!(
        value["states"]["0"]["next_states_values"],
        serde_json::json!([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])
    );
    assert_eq!(
        value["states"]["1"]["next_states_transitions"],
        serde_json::json!([9])
    );
}

#[test]
fn test_deserialize_rebuilds_integer_keys() {
    let data: SerializedAgent = serde_json::from_value(serde_json::json!({
        "states": {
            "0": {
                "grid": [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                "next_states_values": [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                "next_states_transitions": [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]
            },
            "1": {
                "grid": [1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
                "next_states_values": [0.0],
                "next_states_transitions": [9]
            }
        }
    }))
    .unwrap();

    let mut agent = CpuAgent::new();
    agent.deserialize(data);

    assert_eq!(agent.states().get(0).unwrap().grid(), &Grid::empty(10));
    assert_eq!(
        agent.states().get(1).unwrap().grid(),
        &grid(&[1, 1, 1, 1, 1, 1, 1, 1, 1, 0])
    );
    assert_eq!(agent.states().get(1).unwrap().next_states_values(), &[0.0]);
    assert_eq!(
        agent.states().get(0).unwrap().next_states_transitions(),
        &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]
    );
}

#[test]
fn test_serialize_deserialize_roundtrip_keeps_learned_values() {
    let mut agent = CpuAgent::new();
    let mut learned = State::new(grid(&[1, 2, 0, 0, 1, 0, 2, 0, 0]));
    learned
        .set_next_states_values(vec![0.1, -0.2, 0.3, 0.4, -0.5])
        .unwrap();
    agent.add_state(State::new(Grid::empty(9)));
    agent.add_state(learned);

    let mut restored = CpuAgent::new();
    restored.deserialize(agent.serialize());

    assert_eq!(restored.serialize(), agent.serialize());
    assert_eq!(
        restored.states().get(1).unwrap().next_states_values(),
        &[0.1, -0.2, 0.3, 0.4, -0.5]
    );
}

#[test]
fn test_save_empty_agent_writes_empty_states() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("agent.json");

    CpuAgent::new().save(&path).unwrap();

    assert!(path.exists());
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(value["states"].as_object().unwrap().is_empty());
}

#[test]
fn test_load_empty_states_document() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("agent.json");
    std::fs::write(&path, r#"{"states": {}}"#).unwrap();

    let mut agent = CpuAgent::new();
    agent.add_state(State::new(Grid::empty(9)));
    agent.load(&path).unwrap();
    assert!(agent.states().is_empty());
}

#[test]
fn test_load_propagates_parse_errors() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("agent.json");
    std::fs::write(&path, "not json").unwrap();

    let mut agent = CpuAgent::new();
    assert!(agent.load(&path).is_err());
}

#[test]
fn test_save_overwrites_existing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("agent.json");

    let mut agent = CpuAgent::new();
    agent.set_states(ten_cell_cache());
    agent.save(&path).unwrap();
    CpuAgent::new().save(&path).unwrap();

    let mut reloaded = CpuAgent::new();
    reloaded.load(&path).unwrap();
    assert!(reloaded.states().is_empty());
}

#[test]
fn test_alternative_repositories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let msgpack_path = temp_dir.path().join("agent.msgpack");

    let mut agent = CpuAgent::new();
    agent.set_states(ten_cell_cache());

    agent.save_with(&MsgPackRepository::new(), &msgpack_path).unwrap();
    let memory = InMemoryRepository::new();
    agent.save_with(&memory, "agent").unwrap();

    let from_disk = MsgPackRepository::new().load(&msgpack_path).unwrap();
    let mut from_memory = CpuAgent::new();
    from_memory.load_with(&memory, "agent").unwrap();

    assert_eq!(from_disk.serialize(), agent.serialize());
    assert_eq!(from_memory.serialize(), agent.serialize());
}
