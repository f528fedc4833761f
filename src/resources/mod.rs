//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: timing, configuration, the texture
//! cache and the world-global name/tag indexes. Each submodule documents
//! the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `engineconfig` – simulation settings loaded from an INI file
//! - `nameregistry` – unique display names mapped to entities
//! - `tagindex` – entities bucketed by lowercase tag
//! - `texturecache` – filenames resolved to texture handles, memoized
//! - `worldtime` – simulation time and delta
pub mod engineconfig;
pub mod nameregistry;
pub mod tagindex;
pub mod texturecache;
pub mod worldtime;
