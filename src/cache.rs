//! Sequence-keyed store of previously seen states
//!
//! States are stored under an insertion sequence number, not under their
//! grid. Lookup by grid content is a linear scan, which is cheap at
//! tic-tac-toe scale (at most a few thousand reachable boards).

use std::{collections::BTreeMap, fmt, io::Write};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use tracing::debug;

use crate::{
    error::{Error, Result},
    grid::Grid,
    state::State,
};

/// Insertion sequence number, written to text formats as a decimal string.
///
/// `u64::MAX` is not a valid key: it leaves no room for the next insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SequenceKey(pub u64);

impl fmt::Display for SequenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SequenceKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<u64>()
            .ok()
            .and_then(SequenceKey::checked)
            .ok_or_else(|| Error::InvalidSequenceKey { key: s.to_string() })
    }
}

impl SequenceKey {
    fn checked(seq: u64) -> Option<Self> {
        (seq < u64::MAX).then_some(SequenceKey(seq))
    }
}

impl Serialize for SequenceKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SequenceKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct KeyVisitor;

        impl de::Visitor<'_> for KeyVisitor {
            type Value = SequenceKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative integer sequence key")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<SequenceKey, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<SequenceKey, E> {
                SequenceKey::checked(v)
                    .ok_or_else(|| E::custom(Error::InvalidSequenceKey { key: v.to_string() }))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

/// Serialized form of a single cached state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedState {
    pub grid: Grid,
    pub next_states_values: Vec<f64>,
    pub next_states_transitions: Vec<usize>,
}

/// Serialized form of an agent's cache: `{"states": {"<seq>": {...}}}`.
///
/// Keys are kept in ascending numeric order. A missing `states` field
/// deserializes to an empty cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SerializedAgent {
    #[serde(default)]
    pub states: BTreeMap<SequenceKey, SerializedState>,
}

#[derive(Debug, Serialize)]
struct CsvRow {
    seq: u64,
    grid: String,
    transitions: String,
    values: String,
}

/// Append-only cache of states indexed by insertion order
#[derive(Debug, Clone, Default)]
pub struct StateCache {
    states: BTreeMap<u64, State>,
}

impl StateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State stored under sequence number `seq`
    pub fn get(&self, seq: u64) -> Option<&State> {
        self.states.get(&seq)
    }

    /// All entries in ascending sequence order
    pub fn iter(&self) -> impl Iterator<Item = (u64, &State)> {
        self.states.iter().map(|(&seq, state)| (seq, state))
    }

    /// Key the next insertion will use.
    ///
    /// Equal to `len()` for a dense store; for sparse input it continues after
    /// the largest key so no entry is overwritten. If the largest key is
    /// `u64::MAX`, the lowest unused key is taken instead.
    pub fn next_key(&self) -> u64 {
        match self.states.last_key_value() {
            None => 0,
            Some((&seq, _)) => seq.checked_add(1).unwrap_or_else(|| self.lowest_free_key()),
        }
    }

    fn lowest_free_key(&self) -> u64 {
        self.states
            .keys()
            .zip(0u64..)
            .find(|&(&seq, expected)| seq != expected)
            .map_or(self.states.len() as u64, |(_, free)| free)
    }

    /// Whether any cached state has exactly the candidate's grid
    pub fn has_state(&self, candidate: &State) -> bool {
        self.contains_grid(candidate.grid())
    }

    pub fn contains_grid(&self, grid: &Grid) -> bool {
        self.find(grid).is_some()
    }

    /// Insert under the next sequence number without checking for duplicates.
    ///
    /// Returns the key the state was stored under.
    pub fn add_state(&mut self, state: State) -> u64 {
        let seq = self.next_key();
        debug!(seq, grid = %state.grid(), "caching state");
        self.states.insert(seq, state);
        seq
    }

    /// The cached state whose grid equals `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StateNotFound`] if no cached state matches.
    pub fn get_state(&self, grid: &Grid) -> Result<&State> {
        self.find(grid)
            .map(|(_, state)| state)
            .ok_or_else(|| Error::StateNotFound { grid: grid.clone() })
    }

    /// Replace the cached state whose grid matches `new_state`'s.
    ///
    /// Only the matching entry is touched. Returns its sequence number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StateNotFound`] and leaves the cache unchanged if no
    /// cached state has the same grid.
    pub fn update_state(&mut self, new_state: State) -> Result<u64> {
        let seq = self
            .find(new_state.grid())
            .map(|(seq, _)| seq)
            .ok_or_else(|| Error::StateNotFound {
                grid: new_state.grid().clone(),
            })?;
        self.states.insert(seq, new_state);
        Ok(seq)
    }

    fn find(&self, grid: &Grid) -> Option<(u64, &State)> {
        self.iter().find(|(_, state)| state.matches(grid))
    }

    pub fn serialize(&self) -> SerializedAgent {
        let states = self
            .states
            .iter()
            .map(|(&seq, state)| {
                (
                    SequenceKey(seq),
                    SerializedState {
                        grid: state.grid().clone(),
                        next_states_values: state.next_states_values().to_vec(),
                        next_states_transitions: state.next_states_transitions().to_vec(),
                    },
                )
            })
            .collect();
        SerializedAgent { states }
    }

    /// Rebuild a cache from its serialized form, trusting the stored arrays
    pub fn deserialize(data: SerializedAgent) -> Self {
        let states = data
            .states
            .into_iter()
            .map(|(SequenceKey(seq), stored)| {
                (
                    seq,
                    State::from_parts(
                        stored.grid,
                        stored.next_states_values,
                        stored.next_states_transitions,
                    ),
                )
            })
            .collect();
        Self { states }
    }

    /// Write one CSV row per cached state, in sequence order
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv = csv::Writer::from_writer(writer);
        for (seq, state) in self.iter() {
            csv.serialize(CsvRow {
                seq,
                grid: state.grid().to_string(),
                transitions: join(state.next_states_transitions()),
                values: join(state.next_states_values()),
            })?;
        }
        csv.flush()?;
        Ok(self.len())
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
