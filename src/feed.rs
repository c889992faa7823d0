//! Testimonial lists handed from a page render to its live stream.
//!
//! The home page reads the store once, renders the first slide and parks
//! the same list under a fresh key. The page's `/testimonials/stream`
//! connection claims it by that key, so the pushed slides count the same
//! items the page rendered and the store is not read a second time.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, PoisonError},
};

use uuid::Uuid;

use crate::models::Testimonial;

/// Lists nobody claimed are dropped oldest-first past this many.
pub const MAX_PARKED: usize = 256;

#[derive(Clone, Debug, Default)]
pub struct FeedCache {
    slots: Arc<Mutex<VecDeque<(String, Vec<Testimonial>)>>>,
}

impl FeedCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps `items` for one stream and returns the key to claim them with.
    pub fn park(&self, items: Vec<Testimonial>) -> String {
        let key = Uuid::new_v4().to_string();
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.push_back((key.clone(), items));
        while slots.len() > MAX_PARKED {
            slots.pop_front();
        }
        key
    }

    /// Takes the list parked under `key`. A key can be claimed once.
    pub fn claim(&self, key: &str) -> Option<Vec<Testimonial>> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let position = slots.iter().position(|(parked, _)| parked == key)?;
        slots.remove(position).map(|(_, items)| items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fallback_testimonials;

    #[test]
    fn claim_is_single_use() {
        let feeds = FeedCache::new();
        let key = feeds.park(fallback_testimonials());
        assert_eq!(feeds.claim(&key).map(|items| items.len()), Some(4));
        assert!(feeds.claim(&key).is_none());
        assert!(feeds.claim("unknown").is_none());
    }

    #[test]
    fn oldest_unclaimed_list_is_evicted() {
        let feeds = FeedCache::new();
        let first = feeds.park(Vec::new());
        let keys: Vec<_> = (0..MAX_PARKED).map(|_| feeds.park(Vec::new())).collect();
        assert!(feeds.claim(&first).is_none());
        assert!(feeds.claim(&keys[0]).is_some());
        assert!(feeds.claim(&keys[MAX_PARKED - 1]).is_some());
    }

    #[test]
    fn clones_share_slots() {
        let feeds = FeedCache::new();
        let key = feeds.clone().park(fallback_testimonials());
        assert!(feeds.claim(&key).is_some());
    }
}
