use bevy_ecs::prelude::Component;

/// Tag component naming the logical group an entity belongs to.
///
/// Collision observers and scene management filter entities by group name
/// (e.g. `"wall"`, `"debris"`).
#[derive(Component, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Group(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}
