//! Tween update system.
//!
//! [`update_actor_tweens`] advances each actor's four tween slots and
//! applies the interpolated values to the matching components:
//! - position slot → [`MapPosition`](crate::components::mapposition::MapPosition)
//! - rotation slot → [`Rotation`](crate::components::rotation::Rotation)
//! - color slot → [`Tint`](crate::components::tint::Tint)
//! - size slot → [`Size`](crate::components::size::Size)
//!
//! Slots are stepped in that fixed order for every actor, so when several
//! tweens run out on the same tick their completion messages land in the
//! queue in slot order. That ordering is part of the engine's determinism
//! guarantee and not an implementation accident.
//!
//! # Related
//!
//! - [`crate::components::tween::ActorTweens`] – the per-actor slots
//! - [`crate::events::message::ActorMessage`] – the completion broadcast

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::size::Size;
use crate::components::tint::Tint;
use crate::components::tween::ActorTweens;
use crate::events::message::ActorMessage;
use crate::resources::worldtime::WorldTime;

/// Step every actor's tweens and apply the results.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta.
/// - Mutates the four tweened components on each actor.
/// - Writes one [`ActorMessage`] per tween that ran out this tick and had
///   a completion message registered.
pub fn update_actor_tweens(
    world_time: Res<WorldTime>,
    mut query: Query<(
        Entity,
        &mut ActorTweens,
        &mut MapPosition,
        &mut Rotation,
        &mut Tint,
        &mut Size,
    )>,
    mut messages: MessageWriter<ActorMessage>,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, mut tweens, mut position, mut rotation, mut tint, mut size) in query.iter_mut() {
        if tweens.position.interval.should_step() {
            position.pos = tweens.position.interval.step(dt);
            if !tweens.position.interval.should_step() {
                if let Some(name) = tweens.position.message.take() {
                    messages.write(ActorMessage {
                        name,
                        sender: entity,
                    });
                }
            }
        }

        if tweens.rotation.interval.should_step() {
            rotation.degrees = tweens.rotation.interval.step(dt);
            if !tweens.rotation.interval.should_step() {
                if let Some(name) = tweens.rotation.message.take() {
                    messages.write(ActorMessage {
                        name,
                        sender: entity,
                    });
                }
            }
        }

        if tweens.color.interval.should_step() {
            tint.color = tweens.color.interval.step(dt);
            if !tweens.color.interval.should_step() {
                if let Some(name) = tweens.color.message.take() {
                    messages.write(ActorMessage {
                        name,
                        sender: entity,
                    });
                }
            }
        }

        if tweens.size.interval.should_step() {
            let value = tweens.size.interval.step(dt);
            size.set(value.x, value.y);
            if !tweens.size.interval.should_step() {
                if let Some(name) = tweens.size.message.take() {
                    messages.write(ActorMessage {
                        name,
                        sender: entity,
                    });
                }
            }
        }
    }
}
