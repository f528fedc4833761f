//! Sprite frame table.
//!
//! A sprite is a fixed-capacity table of texture handles indexed by frame
//! number, plus the currently selected frame. The table is filled either one
//! frame at a time ([`SpriteFrames::set_sprite`]) or from a numbered image
//! sequence on disk ([`SpriteFrames::load_frames`]).
//!
//! # Related
//! - [`crate::resources::texturecache::TextureCache`] – resolves filenames to handles
//! - [`crate::components::animation::SpriteAnimation`] – steps `current` over the table

use arrayvec::ArrayVec;
use bevy_ecs::prelude::Component;
use log::warn;

use crate::resources::texturecache::{ClampMode, FilterMode, TextureCache, TextureHandle};

/// Hard upper bound on frames a single sprite can hold.
pub const MAX_SPRITE_FRAMES: usize = 64;

/// Frame table for a sprite: texture handles indexed by frame number.
///
/// Slots hold `None` when no texture was stored for that frame; render
/// callers skip the draw in that case. `current` may briefly point past the
/// table (an empty sprite is current frame 0 over zero frames).
#[derive(Component, Clone, Debug, Default)]
pub struct SpriteFrames {
    frames: ArrayVec<Option<TextureHandle>, MAX_SPRITE_FRAMES>,
    /// Currently selected frame index.
    pub current: usize,
}

impl SpriteFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frame slots in use.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Store `handle` at `frame`, growing the table with empty slots up to
    /// that index. `frame` is clamped to the table capacity.
    pub fn set_frame_texture(&mut self, handle: TextureHandle, frame: usize) {
        let frame = frame.min(MAX_SPRITE_FRAMES - 1);
        while self.frames.len() <= frame {
            self.frames.push(None);
        }
        self.frames[frame] = Some(handle);
    }

    /// Texture stored at `frame`, with `frame` clamped into the used range.
    /// `None` for an empty table or an unfilled slot.
    pub fn texture_at(&self, frame: usize) -> Option<TextureHandle> {
        if self.frames.is_empty() {
            return None;
        }
        self.frames[frame.min(self.frames.len() - 1)]
    }

    /// Texture of the currently selected frame.
    pub fn current_texture(&self) -> Option<TextureHandle> {
        self.texture_at(self.current)
    }

    /// Select `frame` as current, clamped into the used range.
    ///
    /// Warns when the selected slot holds no texture, since the sprite will
    /// not draw until the frame changes.
    pub fn set_current_frame(&mut self, frame: usize) {
        if self.frames.is_empty() {
            warn!("set_current_frame({frame}): sprite has no frames");
            self.current = 0;
            return;
        }
        let frame = frame.min(self.frames.len() - 1);
        if self.frames[frame].is_none() {
            warn!("set_current_frame({frame}): frame has no texture");
        }
        self.current = frame;
    }

    /// Drop all frames and reset the current frame to 0.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.current = 0;
    }

    /// Resolve `filename` through the cache and store it at `frame`.
    ///
    /// Returns whether the texture resolved. `optional` marks loads that
    /// are allowed to fail without a warning (sequence probing).
    pub fn set_sprite(
        &mut self,
        cache: &mut TextureCache,
        filename: &str,
        frame: usize,
        clamp: ClampMode,
        filter: FilterMode,
        optional: bool,
    ) -> bool {
        let Some(handle) = cache.resolve(filename, clamp, filter, optional) else {
            return false;
        };
        self.set_frame_texture(handle, frame);
        true
    }

    /// Load a numbered image sequence starting at `first_filename`.
    ///
    /// The first filename is expected to look like `walk_001.png`: a frame
    /// number between the last `_` and the extension. Follow-on filenames
    /// keep the number zero-padded to the same width. Frames fill
    /// consecutive slots (replacing any previous table) until a file fails
    /// to resolve or the table is full.
    ///
    /// A first filename that does not match the pattern loads as a single
    /// static frame instead.
    pub fn load_frames(
        &mut self,
        cache: &mut TextureCache,
        first_filename: &str,
        clamp: ClampMode,
        filter: FilterMode,
    ) {
        self.clear();

        let Some(pattern) = FramePattern::parse(first_filename) else {
            warn!(
                "load_frames: {first_filename:?} does not end in _<number>.<ext>, \
                 loading it as a single frame"
            );
            self.set_sprite(cache, first_filename, 0, clamp, filter, false);
            return;
        };

        let mut number = pattern.start;
        loop {
            let filename = pattern.filename(number);
            let next_frame = self.frame_count();
            if !self.set_sprite(cache, &filename, next_frame, clamp, filter, true) {
                break;
            }
            if self.frame_count() >= MAX_SPRITE_FRAMES {
                warn!("load_frames: hit the {MAX_SPRITE_FRAMES} frame limit at {filename:?}");
                break;
            }
            number += 1;
        }
    }
}

/// Decomposed `basename_NNN.ext` sequence filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FramePattern {
    prefix: String,
    ext: String,
    digits: usize,
    start: u32,
}

impl FramePattern {
    /// Split `filename` around the frame number before its extension.
    ///
    /// Requires an extension, a `_` before it, and only ASCII digits between
    /// the two. Returns `None` otherwise.
    pub(crate) fn parse(filename: &str) -> Option<Self> {
        let dot = filename.rfind('.')?;
        let sep = filename[..dot].rfind('_')?;
        let digits = &filename[sep + 1..dot];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self {
            prefix: filename[..=sep].to_string(),
            ext: filename[dot..].to_string(),
            digits: digits.len(),
            start: digits.parse().ok()?,
        })
    }

    /// Filename for `number`, zero-padded to the seed's digit width.
    pub(crate) fn filename(&self, number: u32) -> String {
        format!(
            "{}{:0width$}{}",
            self.prefix,
            number,
            self.ext,
            width = self.digits
        )
    }
}
