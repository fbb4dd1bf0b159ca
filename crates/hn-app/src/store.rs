//! In-memory network store.
//!
//! The map itself sits behind an `RwLock` and is only held long enough to
//! insert or look up an entry. Each network has its own `Mutex`, so an update
//! runs as one exclusive section per network: concurrent updates to the same
//! id are serialized and a step always sees a consistent hue snapshot.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, RwLock};

use hn_color::Network;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Opaque network token (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkId(Uuid);

impl NetworkId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NetworkId {
    type Err = AppError;

    /// Anything that is not a UUID cannot name a stored network.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| AppError::NetworkNotFound(s.to_string()))
    }
}

type Entry = Arc<Mutex<Network>>;

#[derive(Default)]
pub struct NetworkStore {
    networks: RwLock<HashMap<NetworkId, Entry>>,
}

impl NetworkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a network under a fresh id.
    pub fn insert(&self, network: Network) -> AppResult<NetworkId> {
        let mut map = self.networks.write().map_err(|_| AppError::StorePoisoned)?;
        let mut id = NetworkId::new_v4();
        while map.contains_key(&id) {
            id = NetworkId::new_v4();
        }
        map.insert(id, Arc::new(Mutex::new(network)));
        Ok(id)
    }

    pub fn contains(&self, id: &NetworkId) -> AppResult<bool> {
        let map = self.networks.read().map_err(|_| AppError::StorePoisoned)?;
        Ok(map.contains_key(id))
    }

    pub fn len(&self) -> AppResult<usize> {
        let map = self.networks.read().map_err(|_| AppError::StorePoisoned)?;
        Ok(map.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.len()? == 0)
    }

    fn entry(&self, id: &NetworkId) -> AppResult<Entry> {
        let map = self.networks.read().map_err(|_| AppError::StorePoisoned)?;
        map.get(id)
            .cloned()
            .ok_or_else(|| AppError::NetworkNotFound(id.to_string()))
    }

    /// Run `f` with exclusive access to one network.
    ///
    /// The map lock is released before `f` runs; only the network's own lock
    /// is held.
    pub fn with_network<T>(
        &self,
        id: &NetworkId,
        f: impl FnOnce(&mut Network) -> AppResult<T>,
    ) -> AppResult<T> {
        let entry = self.entry(id)?;
        let mut guard = entry.lock().map_err(|_| AppError::StorePoisoned)?;
        f(&mut guard)
    }

    /// Clone a network's current state.
    pub fn snapshot(&self, id: &NetworkId) -> AppResult<Network> {
        self.with_network(id, |network| Ok(network.clone()))
    }
}
