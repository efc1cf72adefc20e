use std::collections::VecDeque;

use crate::domain::blocks::BlockType;
use crate::domain::entity::{DeathAction, EntityId};
use crate::systems::explosion::{blast_cells, blast_victims};

use super::{ExplosionReport, World};

impl World {
    /// Set off an explosive entity, plus anything its blast kills that detonates on death.
    ///
    /// Returns one report per blast, in the order they went off (empty when `id`
    /// is gone or not explosive).
    pub fn detonate(&mut self, id: EntityId) -> Vec<ExplosionReport> {
        let mut queue = VecDeque::from([id]);
        self.run_detonations(&mut queue)
    }

    /// Damage a Mortal entity, carrying out its death action if this kills it.
    pub fn damage(&mut self, id: EntityId, amount: f32) -> Vec<ExplosionReport> {
        let mut queue = VecDeque::new();
        self.apply_damage(id, amount, &mut queue);
        self.run_detonations(&mut queue)
    }

    /// Heal a living Mortal entity. Returns `false` when there is nothing to heal.
    pub fn heal(&mut self, id: EntityId, amount: f32) -> bool {
        match self.entities.get_mut(&id).and_then(|e| e.mortal_mut()) {
            Some(mortal) if !mortal.is_dead() => {
                mortal.heal(amount);
                true
            }
            _ => false,
        }
    }

    fn run_detonations(&mut self, queue: &mut VecDeque<EntityId>) -> Vec<ExplosionReport> {
        let mut reports = Vec::new();
        while let Some(id) = queue.pop_front() {
            if let Some(report) = self.detonate_one(id, queue) {
                reports.push(report);
            }
        }
        reports
    }

    fn detonate_one(&mut self, id: EntityId, queue: &mut VecDeque<EntityId>) -> Option<ExplosionReport> {
        let entity = self.entities.get(&id)?;
        let blast = *entity.explosive()?;
        let centre = entity.physical()?.pos;

        // Gone before the blast resolves, so it cannot be hit by its own chain.
        self.remove(id);

        let destroyed = blast_cells(&self.terrain, centre, blast.radius);
        for &(x, y) in &destroyed {
            self.terrain.set(x, y, BlockType::Air);
        }

        let damaged = blast_victims(&self.entities, id, centre, &blast);
        let mut killed = Vec::new();
        for &(victim, amount) in &damaged {
            if self.apply_damage(victim, amount, queue) {
                killed.push(victim);
            }
        }

        tracing::debug!(
            entity = id,
            x = centre.x,
            y = centre.y,
            destroyed = destroyed.len(),
            damaged = damaged.len(),
            killed = killed.len(),
            "detonation"
        );

        Some(ExplosionReport { source: id, centre, destroyed, damaged, killed })
    }

    /// Returns `true` if this damage killed the entity.
    fn apply_damage(&mut self, id: EntityId, amount: f32, queue: &mut VecDeque<EntityId>) -> bool {
        let Some(mortal) = self.entities.get_mut(&id).and_then(|e| e.mortal_mut()) else {
            return false;
        };
        if !mortal.damage(amount) {
            return false;
        }
        match mortal.on_death {
            DeathAction::Despawn => {
                self.remove(id);
            }
            DeathAction::Detonate => queue.push_back(id),
            DeathAction::Persist => {}
        }
        true
    }
}
