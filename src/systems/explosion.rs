//! Blast geometry
//!
//! Pure queries: which cells and which entities a blast reaches. Applying the
//! result (removal, damage, chain reactions) is the World's job.

use crate::domain::blocks::BlockType;
use crate::domain::entity::{EntityId, EntityMap, Explosive, Vec2};
use crate::spatial::Terrain;

/// Non-air cells whose centre lies within `radius` of `centre`.
pub fn blast_cells(terrain: &Terrain, centre: Vec2, radius: f32) -> Vec<(i32, i32)> {
    let mut cells = Vec::new();
    if !(radius > 0.0 && centre.is_finite()) {
        return cells;
    }
    let r2 = radius * radius;
    let x0 = (centre.x - radius).floor() as i32;
    let x1 = (centre.x + radius).ceil() as i32;
    let y0 = (centre.y - radius).floor() as i32;
    let y1 = (centre.y + radius).ceil() as i32;

    for y in y0..=y1 {
        for x in x0..=x1 {
            if !terrain.in_bounds(x, y) || terrain.at(x, y) == BlockType::Air {
                continue;
            }
            let dx = x as f32 + 0.5 - centre.x;
            let dy = y as f32 + 0.5 - centre.y;
            if dx * dx + dy * dy <= r2 {
                cells.push((x, y));
            }
        }
    }
    cells
}

/// Mortal entities (other than `source`) in range, with the damage each takes.
pub fn blast_victims(
    entities: &EntityMap,
    source: EntityId,
    centre: Vec2,
    blast: &Explosive,
) -> Vec<(EntityId, f32)> {
    entities
        .iter()
        .filter(|(id, e)| **id != source && e.is_mortal())
        .filter_map(|(id, e)| {
            let body = e.physical()?;
            let damage = blast.damage_at(body.pos.distance(centre));
            (damage > 0.0).then_some((*id, damage))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::{DeathAction, Entity};

    #[test]
    fn cells_are_a_disc_of_non_air() {
        let mut terrain = Terrain::new(10, 10);
        terrain.fill_rect(0, 0, 9, 4, BlockType::Stone);

        let cells = blast_cells(&terrain, Vec2::new(5.0, 5.0), 2.0);
        // Row 4 under the blast: cell centres at dy = -0.5.
        assert!(cells.contains(&(4, 4)));
        assert!(cells.contains(&(5, 4)));
        assert!(cells.contains(&(3, 4)));
        assert!(cells.contains(&(5, 3)));
        assert!(!cells.contains(&(2, 4)));
        // Air above is never reported.
        assert!(cells.iter().all(|&(_, y)| y <= 4));
    }

    #[test]
    fn cells_skip_out_of_range() {
        let mut terrain = Terrain::new(3, 3);
        terrain.fill_rect(0, 0, 2, 2, BlockType::Soil);
        let cells = blast_cells(&terrain, Vec2::new(0.0, 0.0), 2.0);
        assert!(cells.iter().all(|&(x, y)| x >= 0 && y >= 0));
        assert!(cells.contains(&(0, 0)));
    }

    #[test]
    fn victims_exclude_source_and_immortals() {
        let mut map = EntityMap::new();
        map.insert(1, Entity::bomb(1, 5.0, 5.0, 0));
        map.insert(2, Entity::player(2, 6.0, 5.0));
        map.insert(3, Entity::bomb(3, 5.5, 5.0, 10));
        map.insert(
            4,
            Entity::builder(4).physical(20.0, 5.0, 1.0, 1.0).mortal(10.0, DeathAction::Despawn).build().unwrap(),
        );

        let blast = Explosive::new(3.0, 60.0);
        let victims = blast_victims(&map, 1, Vec2::new(5.0, 5.0), &blast);
        assert_eq!(victims.len(), 1);
        assert_eq!(victims[0].0, 2);
        assert!((victims[0].1 - 40.0).abs() < 1e-4);
    }
}
