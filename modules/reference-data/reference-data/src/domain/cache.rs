//! Memoization of resolved localized names.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use reference_data_sdk::EntityKind;

type NameKey = (EntityKind, String, String);

/// Concurrent map of `(entity, code, locale)` to the resolved translation.
///
/// Misses (`None`) are cached as well. Entries are tagged with the generation
/// that was current before the store was read; `clear` bumps the generation,
/// so a result computed from a snapshot older than the last write is never
/// served, even when it is inserted after the clear.
#[derive(Debug, Default)]
pub struct LocalizedNameCache {
    generation: AtomicU64,
    entries: DashMap<NameKey, (u64, Option<String>)>,
}

impl LocalizedNameCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation. Read it before querying the store and pass it to
    /// [`LocalizedNameCache::insert`].
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Outer `None` means "not cached"; inner `None` is a cached miss.
    #[must_use]
    pub fn get(&self, entity: EntityKind, code: &str, locale: &str) -> Option<Option<String>> {
        let current = self.generation();
        self.entries
            .get(&(entity, code.to_owned(), locale.to_owned()))
            .and_then(|entry| {
                let (generation, name) = entry.value();
                (*generation == current).then(|| name.clone())
            })
    }

    /// Stores a result computed from a store snapshot taken at `generation`.
    /// Results older than the last `clear` are dropped.
    pub fn insert(
        &self,
        generation: u64,
        entity: EntityKind,
        code: &str,
        locale: &str,
        name: Option<String>,
    ) {
        if generation != self.generation() {
            return;
        }
        self.entries
            .insert((entity, code.to_owned(), locale.to_owned()), (generation, name));
    }

    /// Invalidates every entry. Call after the write has committed.
    pub fn clear(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::non_ascii_literal)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_miss_and_clear() {
        let cache = LocalizedNameCache::new();
        assert_eq!(cache.get(EntityKind::Language, "fr", "fr"), None);

        let generation = cache.generation();
        cache.insert(generation, EntityKind::Language, "fr", "fr", Some("Français".to_owned()));
        cache.insert(generation, EntityKind::Language, "fr", "xx", None);

        assert_eq!(
            cache.get(EntityKind::Language, "fr", "fr"),
            Some(Some("Français".to_owned()))
        );
        assert_eq!(cache.get(EntityKind::Language, "fr", "xx"), Some(None));
        assert_eq!(cache.get(EntityKind::Country, "fr", "fr"), None);
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_result_from_before_clear_is_dropped() {
        let cache = LocalizedNameCache::new();
        let before = cache.generation();

        cache.clear();
        cache.insert(before, EntityKind::Country, "SA", "fr", None);

        assert_eq!(cache.get(EntityKind::Country, "SA", "fr"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_entry_from_older_generation_is_not_served() {
        let cache = LocalizedNameCache::new();
        let generation = cache.generation();
        cache.insert(generation, EntityKind::Country, "SA", "fr", None);

        // A clear racing with the insert above may run between the
        // generation check and the map write.
        cache.generation.fetch_add(1, Ordering::AcqRel);

        assert_eq!(cache.get(EntityKind::Country, "SA", "fr"), None);
    }
}
