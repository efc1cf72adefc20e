use crate::systems::integrator::TickCommand;

use super::{StepReport, World};

/// Apply queued hook commands in the order they were issued.
///
/// Commands naming entities that are already gone are dropped: a bomb's fuse and
/// a chain reaction may both try to set it off in the same tick.
pub(super) fn apply_commands(world: &mut World, commands: Vec<TickCommand>, report: &mut StepReport) {
    for command in commands {
        match command {
            TickCommand::Detonate(id) => {
                let blasts = world.detonate(id);
                report.explosions.extend(blasts);
            }
            TickCommand::Remove(id) => {
                world.remove(id);
            }
            TickCommand::Damage { id, amount } => {
                let blasts = world.damage(id, amount);
                report.explosions.extend(blasts);
            }
            TickCommand::Heal { id, amount } => {
                world.heal(id, amount);
            }
            TickCommand::SetBlock { x, y, block } => {
                world.terrain.set(x, y, block);
            }
        }
    }
}
