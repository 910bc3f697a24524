//! JSON implementation of the state repository.
//!
//! Writes the interchange format
//! `{"states": {"<seq>": {"grid": [...], "next_states_values": [...], "next_states_transitions": [...]}}}`.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use tracing::info;

use crate::{
    Result,
    cache::{SerializedAgent, StateCache},
    error::Error,
    ports::StateRepository,
};

/// JSON-backed state repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRepository;

impl JsonRepository {
    pub fn new() -> Self {
        Self
    }
}

impl StateRepository for JsonRepository {
    fn save(&self, cache: &StateCache, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, &cache.serialize()).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize state cache to JSON".to_string(),
                message: e.to_string(),
            }
        })?;
        writer.flush().map_err(|source| Error::Io {
            operation: format!("write file {path:?}"),
            source,
        })?;

        info!(states = cache.len(), path = %path.display(), "saved state cache");
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<StateCache> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let data: SerializedAgent = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            Error::SerializationContext {
                operation: format!("parse state cache JSON from {path:?}"),
                message: e.to_string(),
            }
        })?;

        let cache = StateCache::deserialize(data);
        info!(states = cache.len(), path = %path.display(), "loaded state cache");
        Ok(cache)
    }
}
