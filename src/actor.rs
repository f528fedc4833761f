//! Actor lifecycle helpers.
//!
//! An actor is an entity carrying the full [`ActorBundle`]. The helpers in
//! this module keep the world-global indexes in step with the entity's
//! components across spawn, rename, tagging and despawn, and start tweens
//! from the actor's current property values.
//!
//! # Lifecycle
//!
//! 1. [`spawn_actor`] creates the bundle and registers a unique name
//! 2. [`tag_actor`] / [`untag_actor`] mutate tags through the
//!    [`TagIndex`](crate::resources::tagindex::TagIndex) so the entity's
//!    local set stays in sync
//! 3. [`despawn_actor`] unregisters the current name, clears every tag and
//!    removes the entity; in-flight tweens and animations vanish silently
//!
//! # Related
//!
//! - [`crate::resources::nameregistry::NameRegistry`] – name uniqueness rules
//! - [`crate::factory::ActorFactory`] – archetype-driven construction

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::actorname::ActorName;
use crate::components::animation::SpriteAnimation;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::size::Size;
use crate::components::sprite::SpriteFrames;
use crate::components::tags::TagSet;
use crate::components::tint::Tint;
use crate::components::tween::ActorTweens;
use crate::math::Color;
use crate::resources::nameregistry::NameRegistry;
use crate::resources::tagindex::TagIndex;

/// Everything a freshly spawned actor carries.
///
/// Defaults: origin position, no rotation, 1x1 size, opaque white tint,
/// empty frame table, no animation, inert tweens, no tags.
#[derive(Bundle, Default)]
pub struct ActorBundle {
    pub name: ActorName,
    pub tags: TagSet,
    pub position: MapPosition,
    pub rotation: Rotation,
    pub size: Size,
    pub tint: Tint,
    pub frames: SpriteFrames,
    pub animation: SpriteAnimation,
    pub tweens: ActorTweens,
}

/// Spawn an actor with default components and register its name.
///
/// An empty `requested` name auto-names the actor.
pub fn spawn_actor(world: &mut World, requested: &str) -> Entity {
    let entity = world.spawn(ActorBundle::default()).id();
    set_actor_name(world, entity, requested);
    entity
}

/// Assign a fresh unique name to `entity` and return the registered form.
///
/// The previous name's registry entry is left in place, so stale names
/// keep resolving to this entity until it despawns.
pub fn set_actor_name(world: &mut World, entity: Entity, requested: &str) -> String {
    let assigned = world
        .resource_mut::<NameRegistry>()
        .assign(entity, requested);
    if let Some(mut name) = world.get_mut::<ActorName>(entity) {
        name.0 = assigned.clone();
    }
    assigned
}

/// Current display name of `entity`, if it is a named actor.
pub fn actor_name(world: &World, entity: Entity) -> Option<&str> {
    world.get::<ActorName>(entity).map(ActorName::as_str)
}

/// Apply comma/space separated tags to `entity`.
pub fn tag_actor(world: &mut World, entity: Entity, input: &str) {
    world.resource_scope(|world, mut index: Mut<TagIndex>| {
        if let Some(mut tags) = world.get_mut::<TagSet>(entity) {
            index.tag(&mut tags, entity, input);
        }
    });
}

/// Remove one exact (lowercase) tag from `entity`.
pub fn untag_actor(world: &mut World, entity: Entity, tag: &str) {
    world.resource_scope(|world, mut index: Mut<TagIndex>| {
        if let Some(mut tags) = world.get_mut::<TagSet>(entity) {
            index.untag(&mut tags, entity, tag);
        }
    });
}

/// Unregister `entity` from the name registry and tag index, then despawn.
///
/// Only the current name is removed; stale entries from earlier renames
/// keep their slot but point at a dead entity. In-flight tweens and
/// animations disappear without broadcasting completion.
pub fn despawn_actor(world: &mut World, entity: Entity) {
    if let Some(name) = world.get::<ActorName>(entity).map(|n| n.0.clone()) {
        world.resource_mut::<NameRegistry>().remove(&name);
    }
    world.resource_scope(|world, mut index: Mut<TagIndex>| {
        if let Some(mut tags) = world.get_mut::<TagSet>(entity) {
            index.untag_all(&mut tags, entity);
        }
    });
    world.despawn(entity);
}

/// Glide `entity` from its current position to `target` over `duration`
/// seconds, broadcasting `message` on arrival.
pub fn move_actor_to(
    world: &mut World,
    entity: Entity,
    target: Vec2,
    duration: f32,
    message: Option<&str>,
) {
    let Some(from) = world.get::<MapPosition>(entity).map(|p| p.pos) else {
        return;
    };
    if let Some(mut tweens) = world.get_mut::<ActorTweens>(entity) {
        tweens.move_to(from, target, duration, message);
    }
}

/// Turn `entity` from its current angle to `target` degrees.
pub fn rotate_actor_to(
    world: &mut World,
    entity: Entity,
    target: f32,
    duration: f32,
    message: Option<&str>,
) {
    let Some(from) = world.get::<Rotation>(entity).map(|r| r.degrees) else {
        return;
    };
    if let Some(mut tweens) = world.get_mut::<ActorTweens>(entity) {
        tweens.rotate_to(from, target, duration, message);
    }
}

/// Fade `entity`'s tint from its current color to `target`.
pub fn change_actor_color_to(
    world: &mut World,
    entity: Entity,
    target: Color,
    duration: f32,
    message: Option<&str>,
) {
    let Some(from) = world.get::<Tint>(entity).map(|t| t.color) else {
        return;
    };
    if let Some(mut tweens) = world.get_mut::<ActorTweens>(entity) {
        tweens.change_color_to(from, target, duration, message);
    }
}

/// Resize `entity` from its current size to `target`.
pub fn change_actor_size_to(
    world: &mut World,
    entity: Entity,
    target: Vec2,
    duration: f32,
    message: Option<&str>,
) {
    let Some(from) = world.get::<Size>(entity).map(Size::get) else {
        return;
    };
    if let Some(mut tweens) = world.get_mut::<ActorTweens>(entity) {
        tweens.change_size_to(from, target, duration, message);
    }
}
