//! MessagePack implementation of the state repository.
//!
//! Same content as the JSON adapter in a compact binary encoding via
//! rmp_serde. Sequence keys are still written as decimal strings.

use std::{fs::File, path::Path};

use crate::{
    Result,
    cache::{SerializedAgent, StateCache},
    error::Error,
    ports::StateRepository,
};

/// MessagePack-based state repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    pub fn new() -> Self {
        Self
    }
}

impl StateRepository for MsgPackRepository {
    fn save(&self, cache: &StateCache, path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;

        rmp_serde::encode::write(&mut file, &cache.serialize()).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize state cache to MessagePack".to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<StateCache> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let data: SerializedAgent =
            rmp_serde::decode::from_read(&file).map_err(|e| Error::SerializationContext {
                operation: "deserialize state cache from MessagePack".to_string(),
                message: e.to_string(),
            })?;

        Ok(StateCache::deserialize(data))
    }
}
