//! Animation completion events.
//!
//! When a one-shot [`SpriteAnimation`](crate::components::animation::SpriteAnimation)
//! shows its end frame, an [`AnimationFinished`] event is triggered carrying
//! the animation's name. Observers can subscribe to chain follow-up
//! animations or gameplay reactions.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(
//!     |trigger: On<AnimationFinished>, mut query: Query<(&mut SpriteAnimation, &mut SpriteFrames)>| {
//!         if trigger.event().name == "attack" {
//!             if let Ok((mut anim, mut frames)) = query.get_mut(trigger.event().entity) {
//!                 anim.play(&mut frames, 0.1, AnimationKind::Loop, 0, 3, Some("idle"));
//!             }
//!         }
//!     },
//! );
//! ```
//!
//! # Related
//!
//! - [`crate::systems::animation::update_sprite_animations`] – the system that triggers these events
//! - [`crate::components::animation::SpriteAnimation`] – the animation state

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

/// Event triggered when a one-shot animation reaches its end frame.
///
/// Fires exactly once per finishing animation, on the tick the end frame is
/// reached, and only when the animation has a name. By the time observers
/// run, the animation is already stopped, so a handler that starts a new
/// animation is not clobbered.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct AnimationFinished {
    /// The entity whose animation finished.
    pub entity: Entity,
    /// The animation name given to `play`.
    pub name: String,
}

/// Observer that logs finished animations. Useful while wiring up scenes.
pub fn log_animation_finished(trigger: On<AnimationFinished>) {
    let event = trigger.event();
    info!("animation {:?} finished on {:?}", event.name, event.entity);
}
