//! Entity storage plus the fixed system pipeline

use crate::input::Keyboard;
use crate::systems::{SystemKind, PIPELINE};
use crate::{Config, Events, GameRng, SimError};
use hecs::{Component, DynamicBundle, Entity};

/// Everything a system may read or write besides the entities themselves
pub struct TickContext<'a> {
    pub config: &'a Config,
    pub keyboard: &'a dyn Keyboard,
    pub rng: &'a mut GameRng,
    pub events: &'a mut Events,
}

/// Owns the entities and runs the systems over them once per tick
pub struct World {
    entities: hecs::World,
    systems: [SystemKind; 3],
}

impl World {
    pub fn new() -> Self {
        Self {
            entities: hecs::World::new(),
            systems: PIPELINE,
        }
    }

    /// Create an entity with no components
    pub fn create_entity(&mut self) -> Entity {
        self.entities.spawn(())
    }

    /// Create an entity from a tuple of components
    pub fn spawn(&mut self, components: impl DynamicBundle) -> Entity {
        self.entities.spawn(components)
    }

    /// Attach a component, replacing any existing one of the same type
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) -> Result<(), SimError> {
        self.entities.insert_one(entity, component)?;
        Ok(())
    }

    /// `None` when the entity lacks the component (or doesn't exist)
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<hecs::Ref<'_, T>> {
        self.entities.get::<&T>(entity).ok()
    }

    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<hecs::RefMut<'_, T>> {
        self.entities.get::<&mut T>(entity).ok()
    }

    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.entities
            .entity(entity)
            .is_ok_and(|entity| entity.has::<T>())
    }

    /// All entities in creation order
    pub fn entities(&self) -> Vec<Entity> {
        let mut entities: Vec<Entity> = self.entities.iter().map(|e| e.entity()).collect();
        entities.sort_by_key(|e| e.id());
        entities
    }

    /// Number of entities carrying a `T`
    pub fn count<T: Component>(&self) -> usize {
        self.entities.query::<&T>().iter().count()
    }

    pub fn len(&self) -> usize {
        self.entities.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.entities.len() == 0
    }

    pub fn systems(&self) -> &[SystemKind] {
        &self.systems
    }

    pub fn ecs(&self) -> &hecs::World {
        &self.entities
    }

    #[cfg(test)]
    pub(crate) fn ecs_mut(&mut self) -> &mut hecs::World {
        &mut self.entities
    }

    /// Run every system once, in pipeline order
    pub fn update(&mut self, ctx: &mut TickContext<'_>) -> Result<(), SimError> {
        for system in self.systems {
            log::trace!("Running {} system", system.name());
            system.run(&mut self.entities, ctx)?;
        }
        Ok(())
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
