use dashmap::DashMap;
use serenity::all::UserId;

/// Per-user warning counts, shared between the live event path and backfill
/// scans.
///
/// Counts start at 0, only ever grow except through `reset`, and live for the
/// process lifetime; nothing is persisted.
pub struct WarningStore {
    counts: DashMap<u64, u32>,
}

impl WarningStore {
    pub fn new() -> Self {
        Self {
            counts: DashMap::new(),
        }
    }

    /// Increment a user's count and return the new value
    pub fn increment(&self, user: UserId) -> u32 {
        let mut entry = self.counts.entry(user.get()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// Current count without mutation; users without an entry are at 0
    pub fn get(&self, user: UserId) -> u32 {
        self.counts.get(&user.get()).map(|c| *c).unwrap_or(0)
    }

    /// Set an existing entry back to 0. Returns whether the user had a
    /// recorded entry; the entry itself stays around at 0.
    pub fn reset(&self, user: UserId) -> bool {
        match self.counts.get_mut(&user.get()) {
            Some(mut entry) => {
                *entry = 0;
                true
            }
            None => false,
        }
    }

    /// Number of users with a recorded entry
    pub fn tracked_users(&self) -> usize {
        self.counts.len()
    }
}

impl Default for WarningStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn increments_return_running_count() {
        let store = WarningStore::new();
        let user = UserId::new(42);

        assert_eq!(store.get(user), 0);
        assert_eq!(store.increment(user), 1);
        assert_eq!(store.increment(user), 2);
        assert_eq!(store.increment(user), 3);
        assert_eq!(store.get(user), 3);
    }

    #[test]
    fn counts_are_independent_per_user() {
        let store = WarningStore::new();
        store.increment(UserId::new(1));
        store.increment(UserId::new(1));
        store.increment(UserId::new(2));

        assert_eq!(store.get(UserId::new(1)), 2);
        assert_eq!(store.get(UserId::new(2)), 1);
    }

    #[test]
    fn reset_zeroes_an_existing_entry() {
        let store = WarningStore::new();
        let user = UserId::new(7);
        store.increment(user);
        store.increment(user);

        assert!(store.reset(user));
        assert_eq!(store.get(user), 0);
        // The zeroed entry is still recorded, so a second reset reports it
        assert!(store.reset(user));
    }

    #[test]
    fn reset_reports_unknown_users() {
        let store = WarningStore::new();
        assert!(!store.reset(UserId::new(99)));
        assert_eq!(store.get(UserId::new(99)), 0);
    }

    #[tokio::test]
    async fn concurrent_increments_serialize_to_the_exact_total() {
        let store = Arc::new(WarningStore::new());
        let user = UserId::new(7);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..50 {
                    store.increment(user);
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.get(user), 400);
    }
}
