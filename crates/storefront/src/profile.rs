//! Saved account and delivery address.
//!
//! At most one of each record exists. Both load once at startup and are
//! replaced wholesale on save. Persistence is best-effort: a failed write is
//! logged and swallowed, the in-memory value still commits, and the purchase
//! flow never blocks on storage.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::models::{DeliveryAddress, UserProfile};
use crate::storage::{KeyValueStore, keys};

/// Holds the saved account and delivery address, backed by a key-value store.
pub struct ProfileStore {
    storage: Box<dyn KeyValueStore>,
    user: Option<UserProfile>,
    address: Option<DeliveryAddress>,
}

impl ProfileStore {
    /// Open the store and load both records once.
    ///
    /// Missing or unreadable records load as absent; bad profile data never
    /// fails startup.
    #[must_use]
    pub fn load(storage: Box<dyn KeyValueStore>) -> Self {
        let user = read_record(storage.as_ref(), keys::USER);
        let address = read_record(storage.as_ref(), keys::DELIVERY_ADDRESS);
        tracing::debug!(
            has_user = user.is_some(),
            has_address = address.is_some(),
            "profile loaded"
        );
        Self {
            storage,
            user,
            address,
        }
    }

    /// The saved account, if any.
    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// The saved delivery address, if any.
    #[must_use]
    pub fn address(&self) -> Option<&DeliveryAddress> {
        self.address.as_ref()
    }

    /// Replace the saved account wholesale and persist it best-effort.
    pub fn save_account(&mut self, profile: UserProfile) {
        write_record(self.storage.as_mut(), keys::USER, &profile);
        self.user = Some(profile);
    }

    /// Clear the saved account and remove its stored record.
    pub fn sign_out(&mut self) {
        self.user = None;
        if let Err(error) = self.storage.remove(keys::USER) {
            tracing::warn!(%error, "failed to remove stored account");
        }
    }

    /// Replace the saved delivery address wholesale and persist it
    /// best-effort.
    pub fn save_address(&mut self, address: DeliveryAddress) {
        write_record(self.storage.as_mut(), keys::DELIVERY_ADDRESS, &address);
        self.address = Some(address);
    }
}

/// Read and deserialize the record under `key`; any failure is absent.
fn read_record<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Option<T> {
    match storage.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(key, %error, "ignoring unreadable record");
                None
            }
        },
        Ok(None) => None,
        Err(error) => {
            tracing::warn!(key, %error, "storage read failed; treating record as absent");
            None
        }
    }
}

/// Serialize and write `value` under `key`, swallowing failures.
fn write_record<T: Serialize>(storage: &mut dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => {
            if let Err(error) = storage.set(key, &raw) {
                tracing::warn!(key, %error, "storage write failed; keeping in-memory value");
            }
        }
        Err(error) => {
            tracing::warn!(key, %error, "failed to serialize record");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use tamales_dali_core::Email;

    fn profile() -> UserProfile {
        UserProfile::new("Itzel G.", Email::parse("itzel@ejemplo.mx").unwrap()).unwrap()
    }

    fn address() -> DeliveryAddress {
        DeliveryAddress::new(
            "Av. Central",
            "12",
            "Jardines de Morelos",
            "55064",
            Some("Portón verde".to_owned()),
        )
        .unwrap()
    }

    #[test]
    fn test_fresh_store_has_no_records() {
        let store = ProfileStore::load(Box::new(MemoryStore::new()));
        assert!(store.user().is_none());
        assert!(store.address().is_none());
    }

    #[test]
    fn test_save_account_persists_and_reloads() {
        let backend = MemoryStore::new();
        {
            let mut store = ProfileStore::load(Box::new(backend.clone()));
            store.save_account(profile());
        }

        // Same backend, fresh load: simulates the next startup
        let store = ProfileStore::load(Box::new(backend));
        assert_eq!(store.user(), Some(&profile()));
    }

    #[test]
    fn test_save_address_round_trips_identically() {
        let backend = MemoryStore::new();
        {
            let mut store = ProfileStore::load(Box::new(backend.clone()));
            store.save_address(address());
        }

        let store = ProfileStore::load(Box::new(backend));
        assert_eq!(store.address(), Some(&address()));
    }

    #[test]
    fn test_sign_out_clears_memory_and_storage() {
        let backend = MemoryStore::new();
        let mut store = ProfileStore::load(Box::new(backend.clone()));
        store.save_account(profile());

        store.sign_out();

        assert!(store.user().is_none());
        assert!(backend.raw(keys::USER).is_none());
    }

    #[test]
    fn test_save_replaces_wholesale() {
        let backend = MemoryStore::new();
        let mut store = ProfileStore::load(Box::new(backend.clone()));
        store.save_address(address());

        let replacement =
            DeliveryAddress::new("Calle Norte 5", "3B", "Xalostoc", "55310", None).unwrap();
        store.save_address(replacement.clone());

        assert_eq!(store.address(), Some(&replacement));
        let raw = backend.raw(keys::DELIVERY_ADDRESS).unwrap();
        assert!(!raw.contains("Av. Central"));
    }

    #[test]
    fn test_corrupt_record_loads_as_absent() {
        let backend = MemoryStore::new();
        backend.inject(keys::USER, "{not json");

        let store = ProfileStore::load(Box::new(backend));
        assert!(store.user().is_none());
    }

    #[test]
    fn test_failed_write_still_commits_in_memory() {
        let backend = MemoryStore::new();
        backend.set_fail_writes(true);
        let mut store = ProfileStore::load(Box::new(backend.clone()));

        store.save_account(profile());

        assert_eq!(store.user(), Some(&profile()));
        assert!(backend.raw(keys::USER).is_none());
    }
}
