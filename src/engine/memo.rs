//! Derivation cache keyed on snapshot identity.
//!
//! Derivations are pure functions of the snapshot, so two requests over
//! the same `(address, updated_at)` pair share one result. The upstream
//! bumps `updated_at` on every committed state change, which makes the
//! stamp a sound cache key.

use crate::domain::{AccountSnapshot, TimeMs, WalletAddress};
use crate::engine::balances::{derive_balance_sheet, BalanceSheet};
use crate::engine::health::{derive_health, HealthSummary};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Everything derived from one account snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedViews {
    pub balance_sheet: BalanceSheet,
    pub health: HealthSummary,
}

impl DerivedViews {
    fn derive(account: &AccountSnapshot) -> Self {
        Self {
            balance_sheet: derive_balance_sheet(Some(account)),
            health: derive_health(Some(account)),
        }
    }
}

/// Bounded memo of derived views.
///
/// Derivation is cheap, so the eviction policy is deliberately blunt: when
/// the map reaches capacity it is cleared and repopulated on demand.
#[derive(Debug)]
pub struct ViewCache {
    capacity: usize,
    inner: Mutex<HashMap<(WalletAddress, TimeMs), Arc<DerivedViews>>>,
}

impl ViewCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch the derived views for a snapshot, deriving on first sight of
    /// its identity stamp.
    pub fn get_or_derive(&self, account: &AccountSnapshot) -> Arc<DerivedViews> {
        let key = (account.address.clone(), account.updated_at);
        let mut map = self.lock();
        if let Some(views) = map.get(&key) {
            return Arc::clone(views);
        }
        if map.len() >= self.capacity {
            map.clear();
        }
        let views = Arc::new(DerivedViews::derive(account));
        map.insert(key, Arc::clone(&views));
        views
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<(WalletAddress, TimeMs), Arc<DerivedViews>>> {
        match self.inner.lock() {
            Ok(guard) => guard,
            // A panic while holding the lock cannot leave the map in a
            // broken state; every mutation is a single insert or clear.
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for ViewCache {
    fn default() -> Self {
        Self::new(64)
    }
}
