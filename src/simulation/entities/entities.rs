use crate::core::error::EngineError;
use crate::domain::entity::{Entity, EntityId, EntityMap};

use super::World;

impl World {
    /// Add an entity under the id it was built with.
    pub fn insert(&mut self, entity: Entity) -> Result<EntityId, EngineError> {
        let id = entity.id();
        if self.retired.contains(&id) {
            return Err(EngineError::RetiredEntity(id));
        }
        if self.entities.contains_key(&id) {
            return Err(EngineError::DuplicateEntity(id));
        }
        self.next_id = self.next_id.max(id.saturating_add(1));
        self.entities.insert(id, entity);
        Ok(id)
    }

    /// An id that has never been used in this world.
    pub fn next_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Remove an entity and retire its id.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let removed = self.entities.remove(&id);
        if removed.is_some() {
            self.retired.insert(id);
        }
        removed
    }

    #[inline]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    #[inline]
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    #[inline]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn entities(&self) -> &EntityMap {
        &self.entities
    }

    pub fn is_retired(&self, id: EntityId) -> bool {
        self.retired.contains(&id)
    }
}
