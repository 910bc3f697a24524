//! Adapters implementing domain ports.
//!
//! Input adapters feed [`crate::ports::MoveInput`]; repository adapters
//! implement [`crate::ports::StateRepository`] for JSON, MessagePack and
//! in-memory storage.

use std::path::Path;

use crate::ports::StateRepository;

pub mod in_memory_repository;
pub mod json_repository;
pub mod line_input;
pub mod msgpack_repository;
pub mod scripted_input;

pub use in_memory_repository::InMemoryRepository;
pub use json_repository::JsonRepository;
pub use line_input::LineInput;
pub use msgpack_repository::MsgPackRepository;
pub use scripted_input::ScriptedInput;

/// Pick a repository from the file extension: `.msgpack`/`.mpk` use
/// MessagePack, anything else JSON.
pub fn repository_for_path(path: &Path) -> Box<dyn StateRepository> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("msgpack" | "mpk") => Box::new(MsgPackRepository::new()),
        _ => Box::new(JsonRepository::new()),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{cache::StateCache, grid::Grid, state::State};

    #[test]
    fn test_repository_follows_extension() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut cache = StateCache::new();
        cache.add_state(State::new(Grid::empty(9)));

        for name in ["agent.json", "agent.msgpack"] {
            let path = temp_dir.path().join(name);
            repository_for_path(&path).save(&cache, &path).unwrap();
            let loaded = repository_for_path(&path).load(&path).unwrap();
            assert_eq!(loaded.len(), 1);
        }

        let msgpack = std::fs::read(temp_dir.path().join("agent.msgpack")).unwrap();
        assert!(serde_json::from_slice::<serde_json::Value>(&msgpack).is_err());
    }
}
