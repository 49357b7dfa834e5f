// Kinematic character body

use glam::Vec2;

/// The character's motion state: an axis-aligned box moved by velocity.
///
/// Velocity writes apply immediately, no queuing. Freezing the body (death)
/// zeroes its velocity and stops both further writes and integration.
#[derive(Debug, Clone)]
pub struct KinematicBody {
    position: Vec2,
    velocity: Vec2,
    half_extents: Vec2,
    gravity_scale: f32,
    frozen: bool,
}

impl KinematicBody {
    /// Create a body centered at `position` with the given half extents.
    pub fn new(position: Vec2, half_extents: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            half_extents,
            gravity_scale: 1.0,
            frozen: false,
        }
    }

    /// Center of the body
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current velocity
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    /// The probe point at the bottom of the body
    pub fn feet_point(&self) -> Vec2 {
        self.position - Vec2::new(0.0, self.half_extents.y)
    }

    /// Set horizontal velocity, keeping the vertical component.
    pub fn set_velocity_x(&mut self, velocity: f32) {
        if !self.frozen {
            self.velocity.x = velocity;
        }
    }

    /// Set vertical velocity, keeping the horizontal component.
    pub fn set_velocity_y(&mut self, velocity: f32) {
        if !self.frozen {
            self.velocity.y = velocity;
        }
    }

    /// Teleport the body (spawning, snapping onto ground).
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Scale applied to gravity during integration. The water state zeroes
    /// this on entry and restores it on exit.
    pub fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale = scale;
    }

    pub fn gravity_scale(&self) -> f32 {
        self.gravity_scale
    }

    /// Freeze or unfreeze the body. Freezing zeroes velocity.
    pub fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
        if frozen {
            self.velocity = Vec2::ZERO;
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Advance one physics step: apply gravity, then move by velocity.
    pub fn integrate(&mut self, gravity: f32, dt: f32) {
        if self.frozen {
            return;
        }
        self.velocity.y -= gravity * self.gravity_scale * dt;
        self.position += self.velocity * dt;
    }
}
