//! Sprite animation state machine.
//!
//! [`SpriteAnimation`] drives the `current` frame of a
//! [`SpriteFrames`](crate::components::sprite::SpriteFrames) table over a
//! frame range. The animation system steps it once per tick; see
//! [`crate::systems::animation`] for the stepping rules.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use super::sprite::SpriteFrames;

/// How an animation traverses its frame range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationKind {
    /// Not animating; the current frame stays put.
    #[default]
    None,
    /// Wrap back to the start frame after showing the end frame.
    Loop,
    /// Bounce between the two ends of the range.
    PingPong,
    /// Play to the end frame once, then stop.
    OneShot,
}

/// Per-entity animation state.
///
/// Started with [`play`](SpriteAnimation::play) and advanced by the
/// animation system. A finishing `OneShot` reports its name once so
/// observers can chain a follow-up.
#[derive(Component, Debug, Clone)]
pub struct SpriteAnimation {
    pub kind: AnimationKind,
    pub start_frame: usize,
    pub end_frame: usize,
    /// +1 when playing forward, -1 when the range is reversed.
    pub direction: i32,
    /// Seconds between frame steps. Zero or negative disables stepping.
    pub frame_delay: f32,
    /// Countdown until the next frame step.
    pub delay_remaining: f32,
    /// Name reported when a one-shot finishes. Survives across plays.
    pub anim_name: Option<String>,
}

impl Default for SpriteAnimation {
    fn default() -> Self {
        Self {
            kind: AnimationKind::None,
            start_frame: 0,
            end_frame: 0,
            direction: 1,
            frame_delay: 0.0,
            delay_remaining: 0.0,
            anim_name: None,
        }
    }
}

impl SpriteAnimation {
    /// Start an animation over `[start_frame, end_frame]` at `delay` seconds
    /// per frame, snapping the sprite to the start frame.
    ///
    /// Both bounds are clamped into the sprite's populated range; a reversed
    /// range (`start > end`) plays backwards. `Some(name)` replaces the
    /// stored animation name, `None` keeps the previous one.
    pub fn play(
        &mut self,
        frames: &mut SpriteFrames,
        delay: f32,
        kind: AnimationKind,
        start_frame: usize,
        end_frame: usize,
        name: Option<&str>,
    ) {
        let last = frames.frame_count().saturating_sub(1);
        let start = start_frame.min(last);
        let end = end_frame.min(last);

        self.direction = if start > end { -1 } else { 1 };
        self.frame_delay = delay;
        self.delay_remaining = delay;
        self.kind = kind;
        self.start_frame = start;
        self.end_frame = end;
        frames.current = start;
        if let Some(name) = name {
            self.anim_name = (!name.is_empty()).then(|| name.to_string());
        }
    }

    /// Halt the animation, keeping the current frame where it is.
    pub fn stop(&mut self) {
        self.kind = AnimationKind::None;
        self.frame_delay = 0.0;
        self.delay_remaining = 0.0;
    }
}
