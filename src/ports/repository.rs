//! Repository port for state cache persistence.

use std::path::Path;

use crate::{Result, cache::StateCache};

/// Port for persisting and loading a [`StateCache`].
///
/// This trait abstracts the storage mechanism so agents can be saved as JSON
/// (the interchange format), MessagePack, or kept in memory for tests.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use ttt::{StateCache, adapters::JsonRepository, ports::StateRepository};
///
/// let repo = JsonRepository::new();
/// repo.save(&StateCache::new(), Path::new("agent.json"))?;
/// let cache = repo.load(Path::new("agent.json"))?;
/// assert!(cache.is_empty());
/// # Ok::<(), ttt::Error>(())
/// ```
pub trait StateRepository {
    /// Save a cache, creating or overwriting whatever is at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination cannot be written or
    /// serialization fails.
    fn save(&self, cache: &StateCache, path: &Path) -> Result<()>;

    /// Load a cache previously written by [`StateRepository::save`].
    ///
    /// # Errors
    ///
    /// Returns an error if the source does not exist or cannot be parsed.
    fn load(&self, path: &Path) -> Result<StateCache>;
}
