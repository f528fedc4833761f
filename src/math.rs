//! Small math helpers shared by components and systems.
//!
//! - [`Color`] is the engine's RGBA color type, with `f32` channels.
//! - [`Lerp`] is the interpolation seam the tween machinery is generic
//!   over; implemented here for `f32`, [`Vec2`] and [`Color`].

use glam::Vec2;

/// RGBA color with `f32` channels, nominally in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    /// Opaque color from red, green and blue channels.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color from all four channels.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    /// Opaque white.
    fn default() -> Self {
        Color::WHITE
    }
}

/// Linear interpolation between two values of the same type.
///
/// `t` is the normalized progress in `0.0..=1.0`; implementations are not
/// required to clamp it.
pub trait Lerp: Copy {
    fn lerp(start: Self, end: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Lerp for Color {
    fn lerp(start: Self, end: Self, t: f32) -> Self {
        Color {
            r: f32::lerp(start.r, end.r, t),
            g: f32::lerp(start.g, end.g, t),
            b: f32::lerp(start.b, end.b, t),
            a: f32::lerp(start.a, end.a, t),
        }
    }
}
