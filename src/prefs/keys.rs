// Typed preference values and their storage keys

use super::store::{KeyValueStore, StoreError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A value persisted as JSON under a fixed key
pub trait StorageKey: Serialize + DeserializeOwned {
    const KEY: &'static str;
}

/// Whether button presses give feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HapticsEnabled(pub bool);

impl Default for HapticsEnabled {
    fn default() -> Self {
        HapticsEnabled(true)
    }
}

impl StorageKey for HapticsEnabled {
    const KEY: &'static str = "haptics_enabled";
}

/// Light or dark display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Light,
    Dark,
}

impl Scheme {
    pub fn name(self) -> &'static str {
        match self {
            Scheme::Light => "light",
            Scheme::Dark => "dark",
        }
    }
}

/// The forced theme; absent means follow the system
impl StorageKey for Scheme {
    const KEY: &'static str = "forced_theme";
}

/// Read and decode `T`.
///
/// Returns `None` when nothing is stored, when the read fails, or when the
/// stored text does not decode. Failures are logged.
pub fn load<T: StorageKey>(store: &dyn KeyValueStore) -> Option<T> {
    let raw = match store.get(T::KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            warn!(key = T::KEY, error = %err, "failed to load preference");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key = T::KEY, raw = %raw, error = %err, "malformed stored preference");
            None
        }
    }
}

pub fn load_or_default<T: StorageKey + Default>(store: &dyn KeyValueStore) -> T {
    load(store).unwrap_or_default()
}

pub fn encode<T: StorageKey>(value: &T) -> Result<String, StoreError> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::store::MemoryStore;

    #[test]
    fn test_values_are_stored_as_json() {
        assert_eq!(encode(&HapticsEnabled(false)).expect("encode"), "false");
        assert_eq!(encode(&Scheme::Dark).expect("encode"), "\"dark\"");
    }

    #[test]
    fn test_malformed_value_falls_back() {
        let mut store = MemoryStore::new();
        store.set(HapticsEnabled::KEY, "\"yes\"").expect("set");
        store.set(Scheme::KEY, "\"sepia\"").expect("set");

        assert_eq!(load_or_default::<HapticsEnabled>(&store), HapticsEnabled(true));
        assert_eq!(load::<Scheme>(&store), None);
    }

    #[test]
    fn test_read_failure_falls_back() {
        let mut store = MemoryStore::new();
        store.set(HapticsEnabled::KEY, "false").expect("set");
        store.set_fail_reads(true);
        assert_eq!(load_or_default::<HapticsEnabled>(&store), HapticsEnabled(true));
    }
}
