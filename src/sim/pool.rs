//! Fixed-capacity entity pools
//!
//! Every slot is allocated up front. An empty slot (`None`) is an inactive
//! entity and carries no state; acquiring fills the first empty slot and
//! releasing empties it again. Pools never grow.

/// Fixed-capacity pool of reusable entity slots
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<Option<T>>,
}

impl<T> Pool<T> {
    /// Create a pool with `capacity` empty slots
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots }
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Place `entity` in the first free slot.
    ///
    /// Returns `None` when every slot is active; the entity is dropped.
    pub fn acquire(&mut self, entity: T) -> Option<&mut T> {
        self.acquire_with(|| entity)
    }

    /// Like [`Pool::acquire`], but only builds the entity when a slot is free
    pub fn acquire_with(&mut self, make: impl FnOnce() -> T) -> Option<&mut T> {
        let slot = self.slots.iter_mut().find(|s| s.is_none())?;
        Some(slot.insert(make()))
    }

    /// Empty a slot, returning the entity that was in it
    pub fn release(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Empty every slot
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Active entities with their slot index (slot order)
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|e| (i, e)))
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, s)| s.as_mut().map(|e| (i, e)))
    }

    /// Release every active entity for which `keep` returns false.
    ///
    /// Returns the number of slots released.
    pub fn retain_active(&mut self, mut keep: impl FnMut(&mut T) -> bool) -> usize {
        let mut released = 0;
        for slot in &mut self.slots {
            if slot.as_mut().is_some_and(|entity| !keep(entity)) {
                *slot = None;
                released += 1;
            }
        }
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_fills_first_free_slot() {
        let mut pool = Pool::new(3);
        assert_eq!(pool.active_count(), 0);

        *pool.acquire(1).unwrap() += 10;
        pool.acquire(2).unwrap();
        assert_eq!(pool.get(0), Some(&11));
        assert_eq!(pool.get(1), Some(&2));

        pool.release(0);
        pool.acquire(3).unwrap();
        assert_eq!(pool.get(0), Some(&3));
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn test_acquire_fails_when_full() {
        let mut pool = Pool::new(2);
        assert!(pool.acquire('a').is_some());
        assert!(pool.acquire('b').is_some());
        assert!(pool.is_full());
        assert!(pool.acquire('c').is_none());
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn test_acquire_with_skips_constructor_when_full() {
        let mut pool = Pool::new(1);
        pool.acquire(0u32);
        let mut called = false;
        let got = pool.acquire_with(|| {
            called = true;
            1
        });
        assert!(got.is_none());
        assert!(!called);
    }

    #[test]
    fn test_release_inactive_is_noop() {
        let mut pool: Pool<u8> = Pool::new(2);
        assert_eq!(pool.release(1), None);
        assert_eq!(pool.release(99), None);
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn test_retain_active() {
        let mut pool = Pool::new(5);
        for v in 0..5 {
            pool.acquire(v);
        }
        let released = pool.retain_active(|v| *v % 2 == 0);
        assert_eq!(released, 2);
        let left: Vec<_> = pool.iter_active().map(|(i, v)| (i, *v)).collect();
        assert_eq!(left, vec![(0, 0), (2, 2), (4, 4)]);
    }

    #[test]
    fn test_clear() {
        let mut pool = Pool::new(4);
        pool.acquire(1);
        pool.acquire(2);
        pool.clear();
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.capacity(), 4);
    }
}
