use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// KeyLocks hands out one mutex per natural key, so read-modify-write
/// sequences against the same `namespace:name` serialize within this
/// process. Slots are created on first use and never evicted; the table is
/// bounded by the working set of natural keys.
#[derive(Default)]
pub struct KeyLocks {
    slots: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl KeyLocks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slot for `key`. Callers lock the returned mutex and hold
    /// the guard across the whole resolve-mutate-save sequence.
    pub fn slot(&self, key: &str) -> Arc<Mutex<()>> {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.entry(key.to_string()).or_default().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_shares_a_slot() {
        let locks = KeyLocks::new();
        let a = locks.slot("genki:couchdb");
        let b = locks.slot("genki:couchdb");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_distinct_keys_do_not_contend() {
        let locks = KeyLocks::new();
        let a = locks.slot("genki:couchdb");
        let b = locks.slot("genki:redis");
        assert!(!Arc::ptr_eq(&a, &b));

        // Holding one must not block the other.
        let _guard = a.lock().unwrap();
        assert!(b.try_lock().is_ok());
    }
}
