//! Per-entity tag set.

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashSet;

/// Lowercase tags attached to an entity.
///
/// This is the entity-local mirror of the
/// [`TagIndex`](crate::resources::tagindex::TagIndex) buckets. Mutation goes
/// through the index so the two sides never drift; this component only
/// exposes reads.
#[derive(Component, Clone, Debug, Default)]
pub struct TagSet {
    tags: FxHashSet<String>,
}

impl TagSet {
    /// Exact-match membership test. Tags are stored lowercase.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub(crate) fn insert(&mut self, tag: String) {
        self.tags.insert(tag);
    }

    pub(crate) fn remove(&mut self, tag: &str) {
        self.tags.remove(tag);
    }

    pub(crate) fn drain(&mut self) -> impl Iterator<Item = String> + '_ {
        self.tags.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_exact_match() {
        let mut tags = TagSet::default();
        tags.insert("enemy".to_string());
        assert!(tags.contains("enemy"));
        assert!(!tags.contains("Enemy"));
    }

    #[test]
    fn drain_empties_the_set() {
        let mut tags = TagSet::default();
        tags.insert("a".to_string());
        tags.insert("b".to_string());
        let drained: Vec<String> = tags.drain().collect();
        assert_eq!(drained.len(), 2);
        assert!(tags.is_empty());
    }
}
