// Spawn requests emitted by the character core

use crate::game::player::Team;
use glam::Vec2;

/// Object-instantiation requests. The core never spawns anything itself; it
/// queues these and the embedding layer drains and acts on them.
#[derive(Debug, Clone, PartialEq)]
pub enum WorldCommand {
    /// Fire a bullet belonging to `team`
    SpawnBullet {
        origin: Vec2,
        velocity: Vec2,
        team: Team,
    },
    /// Dust burst at the feet when a jump fires
    SpawnJumpParticles { position: Vec2 },
}
