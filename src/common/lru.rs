use hashlink::LinkedHashMap;
use std::hash::Hash;

/// A simple LRU cache backed by `hashlink::LinkedHashMap`; the front of the
/// map is the least recently used entry.
pub struct LruCache<K, V> {
    map: LinkedHashMap<K, V>,
    capacity: usize,
}

impl<K: Eq + Hash + Clone, V: Clone> LruCache<K, V> {
    /// Create a new cache limited to `capacity` entries. A capacity of zero
    /// keeps nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            map: LinkedHashMap::new(),
            capacity,
        }
    }

    /// Retrieve a value from the cache, updating its recency.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let value = self.map.remove(key)?;
        self.map.insert(key.clone(), value.clone());
        Some(value)
    }

    /// Insert a value, evicting the least recently used entries when full.
    pub fn put(&mut self, key: K, value: V) {
        self.map.remove(&key);
        self.map.insert(key, value);
        while self.map.len() > self.capacity {
            if self.map.pop_front().is_none() {
                break;
            }
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.map.remove(key)
    }

    /// Drop every entry whose key does not satisfy `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) -> usize {
        let doomed: Vec<K> = self.map.keys().filter(|k| !keep(k)).cloned().collect();
        for key in &doomed {
            self.map.remove(key);
        }
        doomed.len()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clear all cached entries.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::LruCache;

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = LruCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);
        assert_eq!(cache.get(&"a"), Some(1));
        cache.put("c", 3);
        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"a"), Some(1));
        assert_eq!(cache.get(&"c"), Some(3));
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut cache = LruCache::new(0);
        cache.put(1, "x");
        assert!(cache.is_empty());
    }

    #[test]
    fn retain_drops_rejected_keys() {
        let mut cache = LruCache::new(4);
        for k in 1..=4 {
            cache.put(k, k * 10);
        }
        assert_eq!(cache.retain(|k| k % 2 == 0), 2);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&2), Some(20));
        assert_eq!(cache.remove(&4), Some(40));
    }
}
