// Shared player state the machine's states read and write

use std::rc::Rc;

use glam::Vec2;

use crate::engine::game_loop::FrameTime;
use crate::engine::input::InputHandler;
use crate::engine::physics::{CollisionLayer, KinematicBody, SurfaceProbe};
use crate::game::animation::AnimationPlayer;
use crate::game::commands::WorldCommand;
use crate::game::player::data::PlayerData;
use crate::game::player::entity::Team;
use crate::game::player::health::Health;
use crate::game::presentation::Presentation;

/// Everything the player states touch. The states themselves stay stateless;
/// flags and timers all live here so they survive switches.
pub struct PlayerContext {
    pub data: PlayerData,
    pub time: FrameTime,
    pub input: InputHandler,
    pub body: KinematicBody,
    pub probe: Rc<dyn SurfaceProbe>,
    pub anim: AnimationPlayer,
    pub presentation: Presentation,
    pub health: Health,
    pub team: Team,
    pub commands: Vec<WorldCommand>,

    // Jumping
    /// A jump request is remembered until the buffer timer runs out
    pub jump_buffered: bool,
    /// Seconds left on the jump buffer
    pub jump_buffer_left: f32,
    /// The one airborne extra jump has been spent
    pub double_jump_used: bool,

    // Shooting
    /// Seconds until the next shot is allowed
    pub shoot_cooldown: f32,

    // Water
    /// Seconds spent in the current water visit
    pub in_water_time: f32,
    /// Seconds accrued toward the next drown tick
    pub drowning_time: f32,
}

impl PlayerContext {
    pub fn new(data: PlayerData, team: Team, probe: Rc<dyn SurfaceProbe>, spawn: Vec2) -> Self {
        let body = KinematicBody::new(spawn, data.half_extents());
        Self {
            time: FrameTime::default(),
            input: InputHandler::new(),
            body,
            probe,
            anim: player_animations(),
            presentation: Presentation::new(),
            health: Health::new(data.max_health),
            team,
            commands: Vec::new(),
            jump_buffered: false,
            jump_buffer_left: 0.0,
            double_jump_used: false,
            // The cooldown starts full, so the first shot waits it out.
            shoot_cooldown: data.shoot_delay,
            in_water_time: 0.0,
            drowning_time: 0.0,
            data,
        }
    }

    /// Circle-overlap probe against the ground layer at the feet.
    pub fn is_grounded(&self) -> bool {
        self.probe.overlaps_circle(
            self.body.feet_point(),
            self.data.ground_check_radius,
            CollisionLayer::Ground,
        )
    }

    /// Circle-overlap probe against the water layer at the feet.
    pub fn is_on_water(&self) -> bool {
        self.probe.overlaps_circle(
            self.body.feet_point(),
            self.data.ground_check_radius,
            CollisionLayer::Water,
        )
    }

    /// Execute a jump: vertical impulse plus a particle request.
    pub fn jump(&mut self) {
        self.body.set_velocity_y(self.data.jump_force);
        self.commands.push(WorldCommand::SpawnJumpParticles {
            position: self.body.feet_point(),
        });
    }

    /// Jump handling shared by every state that allows jumping.
    ///
    /// Grounded: the double-jump latch clears, a pressed jump fires now, and
    /// otherwise a buffered jump is consumed. Airborne: a pressed jump either
    /// spends the double jump or, if already spent, arms the jump buffer.
    /// The press flag is consumed unconditionally.
    pub fn jump_check(&mut self) {
        if self.is_grounded() {
            self.double_jump_used = false;
            if self.input.jump {
                self.jump();
            } else if self.jump_buffered {
                self.jump();
                self.jump_buffered = false;
            }
        } else if self.input.jump {
            if !self.double_jump_used {
                self.jump();
                self.double_jump_used = true;
            } else {
                self.jump_buffer_left = self.data.jump_buffer_time;
                self.jump_buffered = true;
            }
        }

        self.input.jump = false;
    }

    /// Shoot handling shared by the states that allow shooting. A press on
    /// cooldown does nothing; the press flag is consumed either way.
    pub fn shoot_check(&mut self) {
        if self.input.shoot && self.shoot_cooldown <= 0.0 {
            self.shoot_cooldown = self.data.shoot_delay;
            // Bullet direction follows the model flip, which only airborne
            // movement updates.
            let direction = if self.presentation.model_flipped() {
                -1.0
            } else {
                1.0
            };
            let origin = self.body.position()
                + Vec2::new(self.data.muzzle_offset.x * direction, self.data.muzzle_offset.y);
            self.commands.push(WorldCommand::SpawnBullet {
                origin,
                velocity: Vec2::new(direction * self.data.bullet_speed, 0.0),
                team: self.team,
            });
        }

        self.input.shoot = false;
    }

    /// Mirror the sprite (grounded states) or the whole model (air) to face
    /// the held direction. Neutral input keeps the last facing.
    pub fn flip_based_on_input(&mut self, only_sprite: bool) {
        if self.input.mov.x < 0.0 {
            if only_sprite {
                self.presentation.flip_sprite(true);
            } else {
                self.presentation.flip_model(true);
            }
        } else if self.input.mov.x > 0.0 {
            if only_sprite {
                self.presentation.flip_sprite(false);
            } else {
                self.presentation.flip_model(false);
            }
        }
    }
}

/// The player's clip set. Walk and run carry footstep events; hurt flashes
/// the sprite and fades it back via frame events.
fn player_animations() -> AnimationPlayer {
    use crate::game::animation::AnimationClip;

    let mut anim = AnimationPlayer::new();
    anim.add_animation(AnimationClip::looping("idle", 6, 8.0));
    anim.add_animation(
        AnimationClip::looping("walk", 8, 12.0)
            .with_event(2, "footstep")
            .with_event(6, "footstep"),
    );
    anim.add_animation(
        AnimationClip::looping("run", 8, 14.0)
            .with_event(1, "footstep")
            .with_event(5, "footstep"),
    );
    anim.add_animation(AnimationClip::looping("air", 4, 10.0));
    anim.add_animation(AnimationClip::looping("swim", 6, 8.0));
    anim.add_animation(
        AnimationClip::one_shot("hurt", 4, 12.0)
            .with_event(0, "hurt_flash")
            .with_event(3, "hurt_fade"),
    );
    anim.add_animation(AnimationClip::one_shot("death", 6, 10.0));
    anim
}
