//! Persisted user preferences
//!
//! Two independent values survive across sessions: whether haptic feedback
//! is on, and an optional forced light/dark theme. Both live in one
//! [`Preferences`] cache that is loaded once at startup and handed to every
//! screen explicitly.
//!
//! Updates follow an optimistic policy: the in-memory value changes at once,
//! subscribers are told, and a write is queued on a background thread. A
//! failed write is logged and otherwise ignored; the in-memory value is never
//! rolled back. Losing a preference write is an accepted tradeoff for values
//! this cheap to set again.
//!
//! - [`store`]: the [`KeyValueStore`] boundary and its file/memory backends
//! - [`keys`]: typed values and the keys they are stored under
//! - `persist`: the background writer

pub mod keys;
mod persist;
pub mod store;

use keys::{HapticsEnabled, StorageKey};
use persist::PersistQueue;
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::{info, warn};

pub use keys::Scheme;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

/// A change broadcast to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceChange {
    HapticsEnabled(bool),
    ForcedTheme(Scheme),
}

/// Process-wide preference cache
pub struct Preferences {
    haptics_enabled: bool,
    forced_theme: Option<Scheme>,
    subscribers: Vec<Sender<PreferenceChange>>,
    writer: PersistQueue,
}

impl Preferences {
    /// Populate the cache from `store`, then hand the store to the writer.
    ///
    /// Unreadable or malformed values fall back to their defaults. The only
    /// error is failing to start the writer thread.
    pub fn load(store: Box<dyn KeyValueStore>) -> Result<Self, StoreError> {
        let HapticsEnabled(haptics_enabled) = keys::load_or_default::<HapticsEnabled>(&*store);
        let forced_theme = keys::load::<Scheme>(&*store);
        info!(haptics_enabled, ?forced_theme, "loaded preferences");

        Ok(Preferences {
            haptics_enabled,
            forced_theme,
            subscribers: Vec::new(),
            writer: PersistQueue::spawn(store)?,
        })
    }

    pub fn haptics_enabled(&self) -> bool {
        self.haptics_enabled
    }

    pub fn set_haptics_enabled(&mut self, enabled: bool) {
        self.haptics_enabled = enabled;
        info!(enabled, "haptics preference changed");
        self.publish(PreferenceChange::HapticsEnabled(enabled));
        self.persist(&HapticsEnabled(enabled));
    }

    pub fn forced_theme(&self) -> Option<Scheme> {
        self.forced_theme
    }

    pub fn set_forced_theme(&mut self, scheme: Scheme) {
        self.forced_theme = Some(scheme);
        info!(?scheme, "theme preference changed");
        self.publish(PreferenceChange::ForcedTheme(scheme));
        self.persist(&scheme);
    }

    /// The scheme to draw with: the forced theme, else `system`
    pub fn scheme(&self, system: Scheme) -> Scheme {
        self.forced_theme.unwrap_or(system)
    }

    /// Receive every subsequent change
    pub fn subscribe(&mut self) -> Receiver<PreferenceChange> {
        let (sender, receiver) = mpsc::channel();
        self.subscribers.push(sender);
        receiver
    }

    /// Wait for queued writes to reach the store
    pub fn flush(&self) {
        self.writer.flush();
    }

    fn publish(&mut self, change: PreferenceChange) {
        self.subscribers
            .retain(|subscriber| subscriber.send(change).is_ok());
    }

    fn persist<T: StorageKey>(&self, value: &T) {
        match keys::encode(value) {
            Ok(text) => self.writer.enqueue(T::KEY, text),
            Err(err) => warn!(key = T::KEY, error = %err, "failed to encode preference"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(store: &MemoryStore) -> Preferences {
        Preferences::load(Box::new(store.clone())).expect("Failed to load preferences")
    }

    #[test]
    fn test_defaults_without_stored_values() {
        let prefs = load(&MemoryStore::new());
        assert!(prefs.haptics_enabled());
        assert_eq!(prefs.forced_theme(), None);
        assert_eq!(prefs.scheme(Scheme::Dark), Scheme::Dark);
    }

    #[test]
    fn test_set_updates_memory_and_store() {
        let store = MemoryStore::new();
        let mut prefs = load(&store);

        prefs.set_haptics_enabled(false);
        prefs.set_forced_theme(Scheme::Light);
        assert!(!prefs.haptics_enabled());
        assert_eq!(prefs.scheme(Scheme::Dark), Scheme::Light);

        prefs.flush();
        assert_eq!(store.raw(HapticsEnabled::KEY).as_deref(), Some("false"));
        assert_eq!(store.raw(Scheme::KEY).as_deref(), Some("\"light\""));
    }

    #[test]
    fn test_failed_write_keeps_optimistic_value() {
        let store = MemoryStore::new();
        store.set_fail_writes(true);
        let mut prefs = load(&store);

        prefs.set_haptics_enabled(false);
        prefs.flush();
        assert!(!prefs.haptics_enabled());
        assert_eq!(store.raw(HapticsEnabled::KEY), None);
    }

    #[test]
    fn test_subscribers_see_changes() {
        let mut prefs = load(&MemoryStore::new());
        let changes = prefs.subscribe();
        let dropped = prefs.subscribe();
        drop(dropped);

        prefs.set_forced_theme(Scheme::Dark);
        prefs.set_haptics_enabled(false);

        let seen: Vec<_> = changes.try_iter().collect();
        assert_eq!(
            seen,
            vec![
                PreferenceChange::ForcedTheme(Scheme::Dark),
                PreferenceChange::HapticsEnabled(false),
            ]
        );
        assert_eq!(prefs.subscribers.len(), 1);
    }
}
