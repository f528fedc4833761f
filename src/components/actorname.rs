//! Display name component.

use bevy_ecs::prelude::Component;

/// Display name assigned through the
/// [`NameRegistry`](crate::resources::nameregistry::NameRegistry).
///
/// Holds the registered form of the name (capitalized, suffixed on
/// collision), which may differ from what the caller asked for.
#[derive(Component, Clone, Debug, Default, PartialEq, Eq)]
pub struct ActorName(pub String);

impl ActorName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
