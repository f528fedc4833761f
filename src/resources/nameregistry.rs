//! Unique actor-name registry.
//!
//! The [`NameRegistry`] resource maps display names to entities so gameplay
//! code can look actors up by name. Assignment guarantees uniqueness at the
//! moment of assignment: a taken name gets an integer suffix appended.
//!
//! # How It Works
//!
//! 1. [`assign`](NameRegistry::assign) normalizes the requested name (first
//!    character uppercased, empty requests become the default base name)
//! 2. If the name is taken, suffixes `1`, `2`, ... are tried in order and
//!    the first free one wins
//! 3. The winning name is registered and returned; the caller stores it on
//!    the entity's [`ActorName`](crate::components::actorname::ActorName)
//!
//! Renaming an entity does not remove its old entry, so stale names keep
//! resolving until the entity despawns. Long-lived behavior that scene
//! scripts depend on; despawn is the only point that removes entries.
//!
//! # Related
//!
//! - [`crate::actor::set_actor_name`] – assignment plus component update
//! - [`crate::actor::despawn_actor`] – removes the current name entry

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

/// Base name used when an empty name is requested.
const DEFAULT_BASE_NAME: &str = "Actor";

/// World-global map of display names to entities.
#[derive(Debug, Clone, Resource, Default)]
pub struct NameRegistry {
    names: FxHashMap<String, Entity>,
}

impl NameRegistry {
    /// Reserve a unique name for `entity` and return it.
    ///
    /// The requested name is capitalized first; collisions append the first
    /// free integer suffix counting from 1 (`Hero`, `Hero1`, `Hero2`, ...).
    /// An empty request reserves a fresh default name instead.
    pub fn assign(&mut self, entity: Entity, requested: &str) -> String {
        let base = if requested.is_empty() {
            DEFAULT_BASE_NAME.to_string()
        } else {
            capitalize(requested)
        };

        let name = if self.names.contains_key(&base) {
            let mut counter = 1u32;
            loop {
                let candidate = format!("{base}{counter}");
                if !self.names.contains_key(&candidate) {
                    break candidate;
                }
                counter += 1;
            }
        } else {
            base
        };

        self.names.insert(name.clone(), entity);
        name
    }

    /// Entity registered under exactly `name`, if any.
    pub fn get_named(&self, name: &str) -> Option<Entity> {
        self.names.get(name).copied()
    }

    /// Drop the entry for exactly `name`. Other entries pointing at the
    /// same entity are left alone.
    pub fn remove(&mut self, name: &str) {
        self.names.remove(name);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over all registered names and their entities.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Entity)> {
        self.names.iter().map(|(name, &entity)| (name.as_str(), entity))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
