// Player tuning values

use glam::Vec2;

/// Fixed tuning for the player character.
#[derive(Debug, Clone)]
pub struct PlayerData {
    // Movement
    /// Ground speed while walking (units/second)
    pub walk_speed: f32,
    /// Multiplier applied to walk and air speed while the run modifier is held
    pub run_multiplier: f32,
    /// Horizontal speed while airborne
    pub air_speed: f32,
    /// Vertical velocity set by a jump
    pub jump_force: f32,
    /// Downward acceleration
    pub gravity: f32,
    /// Fall speed is clamped to this magnitude
    pub max_fall_speed: f32,
    /// Seconds a buffered jump stays armed
    pub jump_buffer_time: f32,

    // Water
    /// Multiplier on walk speed while swimming
    pub water_speed_multiplier: f32,
    /// Terminal sink speed in water
    pub water_sink_speed: f32,
    /// Easing factor toward the sink speed, per fixed step
    pub water_drag: f32,
    /// Seconds underwater before drowning starts
    pub breath_time: f32,
    /// Seconds between drown ticks once drowning
    pub drown_interval: f32,
    /// Damage per drown tick
    pub drown_damage: i32,

    // Combat
    /// Base health points
    pub max_health: i32,
    /// Seconds between shots
    pub shoot_delay: f32,
    /// Bullet muzzle velocity
    pub bullet_speed: f32,
    /// Damage a bullet deals on hit
    pub bullet_damage: i32,
    /// Muzzle position relative to the body center (x is mirrored by facing)
    pub muzzle_offset: Vec2,

    // Probing
    /// Radius of the ground/water overlap probe at the feet
    pub ground_check_radius: f32,

    // Dimensions
    /// Body width in world units
    pub width: f32,
    /// Body height in world units
    pub height: f32,
}

pub const BASE_DATA: PlayerData = PlayerData {
    // Movement - responsive but not twitchy
    walk_speed: 4.5,
    run_multiplier: 1.6,
    air_speed: 4.0,
    jump_force: 11.0,
    gravity: 28.0,
    max_fall_speed: 10.0,
    jump_buffer_time: 0.2,

    // Water
    water_speed_multiplier: 0.5,
    water_sink_speed: 0.8,
    water_drag: 0.08,
    breath_time: 4.0,
    drown_interval: 1.0,
    drown_damage: 5,

    // Combat
    max_health: 100,
    shoot_delay: 0.35,
    bullet_speed: 20.0,
    bullet_damage: 25,
    muzzle_offset: Vec2::new(0.6, 0.25),

    // Probing
    ground_check_radius: 0.02,

    // Dimensions
    width: 1.0,
    height: 2.0,
};

impl Default for PlayerData {
    fn default() -> Self {
        BASE_DATA
    }
}

impl PlayerData {
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data() {
        let data = PlayerData::default();
        assert_eq!(data.walk_speed, 4.5);
        assert_eq!(data.max_health, 100);
        assert_eq!(data.ground_check_radius, 0.02);
    }

    #[test]
    fn test_half_extents() {
        let data = PlayerData::default();
        assert_eq!(data.half_extents(), Vec2::new(0.5, 1.0));
    }

    #[test]
    fn test_run_is_faster_than_walk() {
        let data = PlayerData::default();
        assert!(data.walk_speed * data.run_multiplier > data.walk_speed);
    }
}
