//! Sprite animation systems.
//!
//! - [`step_animation`] advances one animation by a delta, catching up
//!   through every frame boundary the delta crosses.
//! - [`update_sprite_animations`] runs the stepper over all animated
//!   entities and triggers [`AnimationFinished`] for completed one-shots.
//!
//! # Stepping Rules
//!
//! 1. A frame delay of zero or less disables stepping entirely
//! 2. The delta drains a per-entity countdown; each time it goes negative
//!    one frame step happens and one delay is added back, so a stall steps
//!    through every covered frame instead of skipping
//! 3. `Loop` wraps from the end frame to the start frame, `PingPong`
//!    reverses direction at either end, `OneShot` stops on the end frame
//!
//! # Related
//!
//! - [`crate::components::animation::SpriteAnimation`] – per-entity state
//! - [`crate::components::sprite::SpriteFrames`] – the frame table driven here
//! - [`crate::events::animation::AnimationFinished`] – completion event

use bevy_ecs::prelude::*;

use crate::components::animation::{AnimationKind, SpriteAnimation};
use crate::components::sprite::SpriteFrames;
use crate::events::animation::AnimationFinished;
use crate::resources::worldtime::WorldTime;

/// Advance `anim` by `dt` seconds, stepping `frames.current` over the range.
///
/// Returns the animation name when a one-shot finished during this call.
/// On completion the kind flips to `None` before the name is reported, so
/// a handler that starts a follow-up animation is not clobbered; reaching
/// the end frame and finishing costs one extra frame step.
pub(crate) fn step_animation(
    anim: &mut SpriteAnimation,
    frames: &mut SpriteFrames,
    dt: f32,
) -> Option<String> {
    if anim.frame_delay <= 0.0 {
        return None;
    }
    anim.delay_remaining -= dt;

    let mut finished = None;
    while anim.delay_remaining < 0.0 {
        match anim.kind {
            AnimationKind::None => {}
            AnimationKind::Loop => {
                if frames.current == anim.end_frame {
                    frames.current = anim.start_frame;
                } else {
                    frames.current = offset_frame(frames.current, anim.direction);
                }
            }
            AnimationKind::PingPong => {
                let lo = anim.start_frame.min(anim.end_frame);
                let hi = anim.start_frame.max(anim.end_frame);
                if anim.direction >= 0 {
                    if frames.current >= hi {
                        anim.direction = -1;
                        frames.current = hi.saturating_sub(1).max(lo);
                    } else {
                        frames.current += 1;
                    }
                } else if frames.current <= lo {
                    anim.direction = 1;
                    frames.current = (lo + 1).min(hi);
                } else {
                    frames.current -= 1;
                }
            }
            AnimationKind::OneShot => {
                if frames.current == anim.end_frame {
                    // stop before reporting so completion handlers can
                    // start a new animation without being overwritten
                    anim.kind = AnimationKind::None;
                    if finished.is_none() {
                        finished = anim.anim_name.clone();
                    }
                } else {
                    frames.current = offset_frame(frames.current, anim.direction);
                }
            }
        }
        anim.delay_remaining += anim.frame_delay;
    }
    finished
}

fn offset_frame(frame: usize, direction: i32) -> usize {
    if direction >= 0 {
        frame.saturating_add(1)
    } else {
        frame.saturating_sub(1)
    }
}

/// Step every animated sprite by the tick's delta.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta.
/// - Mutates [`SpriteAnimation`] state and the sprite's current frame.
/// - Triggers [`AnimationFinished`] for every named one-shot that ends.
pub fn update_sprite_animations(
    time: Res<WorldTime>,
    mut query: Query<(Entity, &mut SpriteAnimation, &mut SpriteFrames)>,
    mut commands: Commands,
) {
    let dt = time.delta.max(0.0);
    for (entity, mut anim, mut frames) in query.iter_mut() {
        if let Some(name) = step_animation(&mut anim, &mut frames, dt) {
            commands.trigger(AnimationFinished { entity, name });
        }
    }
}
