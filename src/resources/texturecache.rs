//! Texture cache and loader seam.
//!
//! The engine core never decodes images. Filenames resolve to opaque
//! [`TextureHandle`]s through the [`TextureCache`] resource, which memoizes
//! successful loads so a file is only loaded once per clamp/filter
//! combination. The actual loading hides behind the [`TextureLoader`]
//! trait: the demo binary plugs in a filesystem prober, tests plug in
//! scripted loaders, a real renderer would plug in its GPU upload path.
//!
//! # Related
//!
//! - [`crate::components::sprite::SpriteFrames`] – main consumer of handles

use bevy_ecs::prelude::Resource;
use log::warn;
use rustc_hash::FxHashMap;
use std::path::Path;

/// Opaque reference to a loaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Horizontal/vertical wrap behavior requested at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClampMode {
    #[default]
    Repeat,
    Clamp,
}

/// Sampling filter requested at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    #[default]
    Linear,
    Nearest,
}

/// Backend that produces texture handles.
pub trait TextureLoader: Send + Sync {
    /// Load `filename`, returning `None` when the file is missing or
    /// cannot be decoded.
    fn load(
        &mut self,
        filename: &str,
        clamp: ClampMode,
        filter: FilterMode,
    ) -> Option<TextureHandle>;
}

/// Memoizing front of a [`TextureLoader`].
///
/// Hits are keyed by filename plus clamp/filter mode. Misses are not
/// cached, so a file that appears later resolves on the next attempt.
#[derive(Resource)]
pub struct TextureCache {
    loader: Box<dyn TextureLoader>,
    loaded: FxHashMap<(String, ClampMode, FilterMode), TextureHandle>,
}

impl TextureCache {
    pub fn new(loader: Box<dyn TextureLoader>) -> Self {
        Self {
            loader,
            loaded: FxHashMap::default(),
        }
    }

    /// Resolve `filename` to a handle, loading it on first use.
    ///
    /// Returns `None` when the load fails. `optional` marks loads that are
    /// expected to fail sometimes (sequence probing) and suppresses the
    /// warning.
    pub fn resolve(
        &mut self,
        filename: &str,
        clamp: ClampMode,
        filter: FilterMode,
        optional: bool,
    ) -> Option<TextureHandle> {
        let key = (filename.to_string(), clamp, filter);
        if let Some(&handle) = self.loaded.get(&key) {
            return Some(handle);
        }
        match self.loader.load(filename, clamp, filter) {
            Some(handle) => {
                self.loaded.insert(key, handle);
                Some(handle)
            }
            None => {
                if !optional {
                    warn!("texture {filename:?} could not be loaded");
                }
                None
            }
        }
    }

    /// Number of distinct textures resolved so far.
    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}

/// Loader that only checks the file exists, handing out sequential handles.
///
/// Stands in for a real GPU upload path in the headless demo binary.
#[derive(Default)]
pub struct FsProbeLoader {
    next: u32,
}

impl TextureLoader for FsProbeLoader {
    fn load(
        &mut self,
        filename: &str,
        _clamp: ClampMode,
        _filter: FilterMode,
    ) -> Option<TextureHandle> {
        if Path::new(filename).is_file() {
            let handle = TextureHandle(self.next);
            self.next += 1;
            Some(handle)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Loader that counts how many times it is asked to load anything.
    struct CountingLoader {
        calls: usize,
        succeed: bool,
    }

    impl TextureLoader for CountingLoader {
        fn load(
            &mut self,
            _filename: &str,
            _clamp: ClampMode,
            _filter: FilterMode,
        ) -> Option<TextureHandle> {
            self.calls += 1;
            self.succeed.then(|| TextureHandle(self.calls as u32))
        }
    }

    #[test]
    fn resolve_memoizes_successful_loads() {
        let mut cache = TextureCache::new(Box::new(CountingLoader {
            calls: 0,
            succeed: true,
        }));
        let first = cache.resolve("a.png", ClampMode::default(), FilterMode::default(), false);
        let second = cache.resolve("a.png", ClampMode::default(), FilterMode::default(), false);
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn resolve_keys_on_clamp_and_filter() {
        let mut cache = TextureCache::new(Box::new(CountingLoader {
            calls: 0,
            succeed: true,
        }));
        cache.resolve("a.png", ClampMode::Repeat, FilterMode::Linear, false);
        cache.resolve("a.png", ClampMode::Clamp, FilterMode::Linear, false);
        cache.resolve("a.png", ClampMode::Clamp, FilterMode::Nearest, false);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn misses_are_not_cached() {
        let mut cache = TextureCache::new(Box::new(CountingLoader {
            calls: 0,
            succeed: false,
        }));
        assert_eq!(
            cache.resolve("a.png", ClampMode::default(), FilterMode::default(), true),
            None
        );
        assert!(cache.is_empty());
    }
}
