//! Tween component for animated interpolation.
//!
//! This module provides the per-entity tween state:
//! - [`Interval`] – a time-bounded linear interpolation between two values
//! - [`TweenSlot`] – an interval plus its optional completion message
//! - [`ActorTweens`] – the four property slots an actor can run at once,
//!   animating [`MapPosition`](super::mapposition::MapPosition),
//!   [`Rotation`](super::rotation::Rotation), [`Tint`](super::tint::Tint)
//!   and [`Size`](super::size::Size)
//!
//! See [`crate::systems::tween`] for the update system and the order in
//! which slots are stepped.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::math::{Color, Lerp};

/// Time-bounded linear interpolation between two values.
///
/// [`step`](Interval::step) advances elapsed time and returns the current
/// value; once elapsed time reaches the duration the returned value is
/// exactly `end`, with no floating point residue. A zero-duration interval
/// is already finished and never steps.
#[derive(Debug, Clone, Copy)]
pub struct Interval<T: Lerp> {
    start: T,
    end: T,
    duration: f32,
    elapsed: f32,
}

impl<T: Lerp> Interval<T> {
    /// Interval from `start` to `end` over `duration` seconds.
    ///
    /// A negative duration is treated as zero.
    pub fn new(start: T, end: T, duration: f32) -> Self {
        Self {
            start,
            end,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    /// True while the interval still has time left.
    pub fn should_step(&self) -> bool {
        self.elapsed < self.duration
    }

    /// Advance by `dt` seconds and return the interpolated value.
    ///
    /// Elapsed time is clamped to `[0, duration]`, so overshooting `dt`
    /// lands exactly on `end`.
    pub fn step(&mut self, dt: f32) -> T {
        self.elapsed = (self.elapsed + dt).clamp(0.0, self.duration);
        if self.elapsed >= self.duration {
            self.end
        } else {
            T::lerp(self.start, self.end, self.elapsed / self.duration)
        }
    }
}

impl<T: Lerp + Default> Default for Interval<T> {
    /// A finished interval that never steps.
    fn default() -> Self {
        Self {
            start: T::default(),
            end: T::default(),
            duration: 0.0,
            elapsed: 0.0,
        }
    }
}

/// One tween slot: the interval plus its optional completion message.
#[derive(Debug, Clone, Default)]
pub struct TweenSlot<T: Lerp + Default> {
    pub interval: Interval<T>,
    /// Broadcast once when the interval runs out. Taken on completion.
    pub message: Option<String>,
}

impl<T: Lerp + Default> TweenSlot<T> {
    fn start(&mut self, from: T, to: T, duration: f32, message: Option<&str>) {
        self.interval = Interval::new(from, to, duration);
        self.message = message.filter(|m| !m.is_empty()).map(str::to_string);
    }
}

/// The four property tweens an actor can run at once.
///
/// Starting a tween replaces whatever was in that slot, message included;
/// the discarded tween never reports completion.
#[derive(Component, Debug, Clone, Default)]
pub struct ActorTweens {
    pub position: TweenSlot<Vec2>,
    pub rotation: TweenSlot<f32>,
    pub color: TweenSlot<Color>,
    pub size: TweenSlot<Vec2>,
}

impl ActorTweens {
    /// Glide the position from `from` to `to` over `duration` seconds.
    pub fn move_to(&mut self, from: Vec2, to: Vec2, duration: f32, message: Option<&str>) {
        self.position.start(from, to, duration, message);
    }

    /// Turn from `from` to `to` degrees over `duration` seconds.
    pub fn rotate_to(&mut self, from: f32, to: f32, duration: f32, message: Option<&str>) {
        self.rotation.start(from, to, duration, message);
    }

    /// Fade the tint from `from` to `to` over `duration` seconds.
    pub fn change_color_to(&mut self, from: Color, to: Color, duration: f32, message: Option<&str>) {
        self.color.start(from, to, duration, message);
    }

    /// Resize from `from` to `to` over `duration` seconds.
    pub fn change_size_to(&mut self, from: Vec2, to: Vec2, duration: f32, message: Option<&str>) {
        self.size.start(from, to, duration, message);
    }

    /// True while any of the four slots still has time left.
    pub fn any_active(&self) -> bool {
        self.position.interval.should_step()
            || self.rotation.interval.should_step()
            || self.color.interval.should_step()
            || self.size.interval.should_step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec2, b: Vec2) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
    }

    // ==================== INTERVAL TESTS ====================

    #[test]
    fn test_interval_midpoint() {
        let mut iv = Interval::new(0.0f32, 10.0, 2.0);
        assert!(approx_eq(iv.step(1.0), 5.0));
        assert!(iv.should_step());
    }

    #[test]
    fn test_interval_lands_exactly_on_end() {
        let mut iv = Interval::new(Vec2::ZERO, Vec2::new(100.0, 200.0), 1.0);
        // three uneven steps that sum past the duration
        iv.step(0.4);
        iv.step(0.4);
        let last = iv.step(0.4);
        assert_eq!(last, Vec2::new(100.0, 200.0));
        assert!(!iv.should_step());
    }

    #[test]
    fn test_interval_overshoot_returns_end() {
        let mut iv = Interval::new(0.0f32, 4.0, 0.5);
        assert_eq!(iv.step(10.0), 4.0);
        assert!(!iv.should_step());
    }

    #[test]
    fn test_interval_zero_duration_never_steps() {
        let iv = Interval::new(0.0f32, 10.0, 0.0);
        assert!(!iv.should_step());
    }

    #[test]
    fn test_interval_negative_duration_treated_as_zero() {
        let iv = Interval::new(0.0f32, 10.0, -3.0);
        assert!(!iv.should_step());
    }

    #[test]
    fn test_interval_default_is_finished() {
        let iv: Interval<f32> = Interval::default();
        assert!(!iv.should_step());
    }

    #[test]
    fn test_interval_color_channels() {
        let mut iv = Interval::new(Color::BLACK, Color::WHITE, 1.0);
        let mid = iv.step(0.5);
        assert!(approx_eq(mid.r, 0.5));
        assert!(approx_eq(mid.g, 0.5));
        assert!(approx_eq(mid.b, 0.5));
    }

    // ==================== ACTOR TWEENS TESTS ====================

    #[test]
    fn test_move_to_arms_position_slot() {
        let mut tweens = ActorTweens::default();
        assert!(!tweens.any_active());
        tweens.move_to(Vec2::ZERO, Vec2::new(10.0, 0.0), 1.0, Some("arrived"));
        assert!(tweens.position.interval.should_step());
        assert_eq!(tweens.position.message.as_deref(), Some("arrived"));
    }

    #[test]
    fn test_empty_message_is_dropped() {
        let mut tweens = ActorTweens::default();
        tweens.rotate_to(0.0, 90.0, 1.0, Some(""));
        assert_eq!(tweens.rotation.message, None);
    }

    #[test]
    fn test_restart_replaces_interval_and_message() {
        let mut tweens = ActorTweens::default();
        tweens.move_to(Vec2::ZERO, Vec2::new(10.0, 0.0), 1.0, Some("first"));
        tweens.position.interval.step(0.5);
        tweens.move_to(Vec2::ZERO, Vec2::new(-10.0, 0.0), 2.0, Some("second"));
        assert_eq!(tweens.position.message.as_deref(), Some("second"));
        // fresh interval starts from zero elapsed
        let v = tweens.position.interval.step(1.0);
        assert!(vec_approx_eq(v, Vec2::new(-5.0, 0.0)));
    }

    #[test]
    fn test_slots_are_independent() {
        let mut tweens = ActorTweens::default();
        tweens.rotate_to(0.0, 180.0, 1.0, None);
        tweens.change_size_to(Vec2::ONE, Vec2::new(2.0, 2.0), 0.5, None);
        assert!(!tweens.position.interval.should_step());
        assert!(tweens.rotation.interval.should_step());
        assert!(!tweens.color.interval.should_step());
        assert!(tweens.size.interval.should_step());
    }
}
