// In-memory coaster storage.
//
// A single mutex guards the map. Every operation holds it only for the map
// access itself; copying out, serialization and I/O all happen after release.

pub mod record;

pub use record::{coaster_path, Coaster};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Default)]
struct Coasters {
    by_id: HashMap<String, Coaster>,
    last_id: i64,
}

impl Coasters {
    /// Nanosecond timestamp, bumped past the last issued id when the clock
    /// has not moved. Must be called with the store lock held.
    fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_nanos_opt().unwrap_or(0);
        self.last_id = now.max(self.last_id + 1);
        self.last_id.to_string()
    }
}

/// Shared handle to the coaster map. Cloning is cheap and every clone sees
/// the same data.
#[derive(Debug, Clone)]
pub struct CoasterStore {
    coasters: Arc<Mutex<Coasters>>,
    rng: Arc<Mutex<StdRng>>,
}

impl CoasterStore {
    /// Create an empty store whose random picks are seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an empty store with a fixed random seed (reproducible picks)
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            coasters: Arc::new(Mutex::new(Coasters::default())),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Assign a fresh id to `coaster` and store it. Returns the stored record.
    pub fn insert(&self, mut coaster: Coaster) -> Coaster {
        let mut coasters = lock(&self.coasters);
        coaster.id = coasters.next_id();
        coasters.by_id.insert(coaster.id.clone(), coaster.clone());
        coaster
    }

    /// Snapshot of every stored coaster, in no particular order
    pub fn list_all(&self) -> Vec<Coaster> {
        lock(&self.coasters).by_id.values().cloned().collect()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Coaster> {
        lock(&self.coasters).by_id.get(id).cloned()
    }

    /// Uniformly pick one of the ids present at call time.
    ///
    /// Only the id is returned: callers redirect to the canonical resource
    /// rather than serving the record itself.
    pub fn pick_random_id(&self) -> Option<String> {
        let mut ids: Vec<String> = lock(&self.coasters).by_id.keys().cloned().collect();

        match ids.len() {
            0 => None,
            1 => ids.pop(),
            n => {
                let index = lock(&self.rng).gen_range(0..n);
                Some(ids.swap_remove(index))
            }
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.coasters).by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CoasterStore {
    fn default() -> Self {
        Self::new()
    }
}

// A panic while holding the lock cannot leave the map half-written (every
// mutation is a single insert), so a poisoned lock is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
