//! Global tag index.
//!
//! The [`TagIndex`] resource buckets entities by tag so gameplay code can
//! ask "who is tagged `enemy`?" without scanning the world. Every entity
//! carrying tags also mirrors them in its own
//! [`TagSet`](crate::components::tags::TagSet); all mutation funnels through
//! this resource so the two sides stay in sync.
//!
//! # How It Works
//!
//! 1. [`tag`](TagIndex::tag) tokenizes the input on commas and spaces and
//!    lowercases each token before inserting it on both sides
//! 2. [`untag`](TagIndex::untag) removes one exact tag; no case folding, so
//!    callers pass the lowercase form
//! 3. [`untag_all`](TagIndex::untag_all) drains the entity's local set and
//!    clears the entity out of every bucket (despawn path)
//!
//! # Related
//!
//! - [`crate::components::tags::TagSet`] – the entity-local mirror
//! - [`crate::actor::tag_actor`] – world-level wrapper

use bevy_ecs::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::components::tags::TagSet;

/// World-global buckets of entities by lowercase tag.
#[derive(Debug, Clone, Resource, Default)]
pub struct TagIndex {
    buckets: FxHashMap<String, FxHashSet<Entity>>,
}

impl TagIndex {
    /// Apply one or more tags to `entity`.
    ///
    /// `input` may hold several tags separated by commas or spaces, e.g.
    /// `"enemy, boss"`. Each token is lowercased and inserted into its
    /// bucket and into the entity's local `tags`.
    pub fn tag(&mut self, tags: &mut TagSet, entity: Entity, input: &str) {
        let tokens: SmallVec<[&str; 8]> = input
            .split([',', ' '])
            .filter(|token| !token.is_empty())
            .collect();
        for token in tokens {
            let tag = token.to_lowercase();
            self.buckets.entry(tag.clone()).or_default().insert(entity);
            tags.insert(tag);
        }
    }

    /// Remove exactly `tag` from `entity`, on both sides.
    ///
    /// No tokenizing or case folding happens here; pass the lowercase form
    /// that [`tag`](TagIndex::tag) stored.
    pub fn untag(&mut self, tags: &mut TagSet, entity: Entity, tag: &str) {
        tags.remove(tag);
        if let Some(bucket) = self.buckets.get_mut(tag) {
            bucket.remove(&entity);
            if bucket.is_empty() {
                self.buckets.remove(tag);
            }
        }
    }

    /// Remove `entity` from every bucket it appears in and clear its local
    /// set. Used when the entity despawns.
    pub fn untag_all(&mut self, tags: &mut TagSet, entity: Entity) {
        for tag in tags.drain() {
            if let Some(bucket) = self.buckets.get_mut(&tag) {
                bucket.remove(&entity);
                if bucket.is_empty() {
                    self.buckets.remove(&tag);
                }
            }
        }
    }

    /// Entities currently holding `tag`. `None` when the bucket is empty.
    pub fn tagged(&self, tag: &str) -> Option<&FxHashSet<Entity>> {
        self.buckets.get(tag)
    }

    /// Number of entities holding `tag`.
    pub fn count(&self, tag: &str) -> usize {
        self.buckets.get(tag).map_or(0, FxHashSet::len)
    }

    /// Iterate over all tags that currently have at least one entity.
    pub fn iter_tags(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_one(world: &mut World) -> Entity {
        world.spawn(TagSet::default()).id()
    }

    #[test]
    fn tag_tokenizes_and_lowercases() {
        let mut world = World::new();
        let e = spawn_one(&mut world);
        let mut index = TagIndex::default();
        let mut tags = TagSet::default();

        index.tag(&mut tags, e, "Enemy, Boss");
        assert!(tags.contains("enemy"));
        assert!(tags.contains("boss"));
        assert_eq!(tags.len(), 2);
        assert!(index.tagged("enemy").is_some_and(|b| b.contains(&e)));
        assert!(index.tagged("boss").is_some_and(|b| b.contains(&e)));
    }

    #[test]
    fn tag_accepts_space_separated_input() {
        let mut world = World::new();
        let e = spawn_one(&mut world);
        let mut index = TagIndex::default();
        let mut tags = TagSet::default();

        index.tag(&mut tags, e, "fast small");
        assert_eq!(tags.len(), 2);
        assert_eq!(index.count("fast"), 1);
    }

    #[test]
    fn untag_is_exact_no_case_folding() {
        let mut world = World::new();
        let e = spawn_one(&mut world);
        let mut index = TagIndex::default();
        let mut tags = TagSet::default();

        index.tag(&mut tags, e, "Enemy");
        // stored lowercase, so the capitalized form does not match
        index.untag(&mut tags, e, "Enemy");
        assert!(tags.contains("enemy"));

        index.untag(&mut tags, e, "enemy");
        assert!(!tags.contains("enemy"));
        assert!(index.tagged("enemy").is_none());
    }

    #[test]
    fn untag_all_clears_both_sides() {
        let mut world = World::new();
        let a = spawn_one(&mut world);
        let b = spawn_one(&mut world);
        let mut index = TagIndex::default();
        let mut tags_a = TagSet::default();
        let mut tags_b = TagSet::default();

        index.tag(&mut tags_a, a, "enemy, boss");
        index.tag(&mut tags_b, b, "enemy");
        index.untag_all(&mut tags_a, a);

        assert!(tags_a.is_empty());
        assert_eq!(index.count("enemy"), 1);
        assert!(index.tagged("boss").is_none());
        assert!(index.tagged("enemy").is_some_and(|bucket| bucket.contains(&b)));
    }

    #[test]
    fn retagging_is_idempotent() {
        let mut world = World::new();
        let e = spawn_one(&mut world);
        let mut index = TagIndex::default();
        let mut tags = TagSet::default();

        index.tag(&mut tags, e, "enemy");
        index.tag(&mut tags, e, "enemy");
        assert_eq!(tags.len(), 1);
        assert_eq!(index.count("enemy"), 1);
    }
}
