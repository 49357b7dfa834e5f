// Player entity: context + state machine wiring

use std::rc::Rc;

use glam::Vec2;

use crate::engine::fsm::StateMachine;
use crate::engine::physics::{KinematicBody, SurfaceProbe};
use crate::game::commands::WorldCommand;
use crate::game::player::context::PlayerContext;
use crate::game::player::data::PlayerData;
use crate::game::player::health::Health;
use crate::game::player::states::{
    AirState, DeathState, HurtState, IdleState, PlayerStateId, RunState, WalkState, WaterState,
};

/// Which side a player fights for. Bullets only hurt the other team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Red,
    Green,
}

/// The player character: owns its context and the state machine driving it.
pub struct Player {
    ctx: PlayerContext,
    machine: StateMachine<PlayerStateId, PlayerContext>,
}

impl Player {
    pub fn new(data: PlayerData, team: Team, probe: Rc<dyn SurfaceProbe>, spawn: Vec2) -> Self {
        let mut ctx = PlayerContext::new(data, team, probe, spawn);

        let mut machine = StateMachine::new();
        machine.add_state(PlayerStateId::Idle, IdleState);
        machine.add_state(PlayerStateId::Walk, WalkState);
        machine.add_state(PlayerStateId::Run, RunState);
        machine.add_state(PlayerStateId::Air, AirState);
        machine.add_state(PlayerStateId::Hurt, HurtState);
        machine.add_state(PlayerStateId::Water, WaterState);
        machine.add_state(PlayerStateId::Death, DeathState);

        wire_transitions(&mut machine);
        machine.set_state(PlayerStateId::Idle, &mut ctx);

        Self { ctx, machine }
    }

    /// Frame tick: transitions and per-frame state logic, then the
    /// entity-level timers, then animation.
    pub fn update(&mut self, dt: f32) {
        self.ctx.time.delta = dt;
        self.machine.tick(&mut self.ctx);

        self.ctx.shoot_cooldown -= dt;
        self.ctx.jump_buffer_left -= dt;
        if self.ctx.jump_buffer_left <= 0.0 {
            self.ctx.jump_buffered = false;
        }

        self.ctx.anim.update(dt);
        for event in self.ctx.anim.take_events() {
            self.on_animation_event(&event);
        }
    }

    /// Physics tick: per-step state logic, then integration, then the
    /// fall-speed clamp.
    pub fn fixed_update(&mut self) {
        self.machine.fixed_tick(&mut self.ctx);
        self.ctx
            .body
            .integrate(self.ctx.data.gravity, self.ctx.time.fixed_delta);

        let velocity = self.ctx.body.velocity();
        if velocity.y < -self.ctx.data.max_fall_speed {
            self.ctx.body.set_velocity_y(-self.ctx.data.max_fall_speed);
        }
    }

    /// Apply damage. `into_hurt` forces the hurt state, unless the water
    /// super state is active, which overrides the hit stun entirely.
    pub fn take_damage(&mut self, amount: i32, into_hurt: bool) {
        if into_hurt && !self.is_in_water_state() {
            self.machine.set_state(PlayerStateId::Hurt, &mut self.ctx);
        }
        self.ctx.health.take_damage(amount);
    }

    pub fn heal(&mut self, amount: i32) {
        self.ctx.health.heal(amount);
    }

    /// A bullet only connects when it belongs to the other team.
    pub fn hit_by_bullet(&mut self, bullet_team: Team, damage: i32) {
        if bullet_team != self.ctx.team {
            self.take_damage(damage, true);
        }
    }

    /// Water super-state membership, checked by state identity.
    pub fn is_in_water_state(&self) -> bool {
        self.machine.current() == Some(PlayerStateId::Water)
    }

    pub fn state(&self) -> Option<PlayerStateId> {
        self.machine.current()
    }

    pub fn health(&self) -> &Health {
        &self.ctx.health
    }

    pub fn team(&self) -> Team {
        self.ctx.team
    }

    pub fn data(&self) -> &PlayerData {
        &self.ctx.data
    }

    pub fn body(&self) -> &KinematicBody {
        &self.ctx.body
    }

    pub fn body_mut(&mut self) -> &mut KinematicBody {
        &mut self.ctx.body
    }

    pub fn input_mut(&mut self) -> &mut crate::engine::input::InputHandler {
        &mut self.ctx.input
    }

    /// Drain the spawn requests queued since the last call.
    pub fn drain_commands(&mut self) -> Vec<WorldCommand> {
        std::mem::take(&mut self.ctx.commands)
    }

    fn on_animation_event(&mut self, name: &str) {
        use crate::game::presentation::{RED, WHITE};
        match name {
            "hurt_flash" => self.ctx.presentation.set_color(RED),
            "hurt_fade" => self.ctx.presentation.set_color(WHITE),
            "footstep" => log::trace!("footstep at {:?}", self.ctx.body.position()),
            _ => {}
        }
    }
}

/// The transition table. Registration order is load-bearing twice over:
/// within a source state it is the local priority, and the any transitions
/// are tried first with Water registered ahead of Death, so Water wins when
/// both fire in the same frame.
fn wire_transitions(machine: &mut StateMachine<PlayerStateId, PlayerContext>) {
    use PlayerStateId::*;

    // Idle
    machine.add_transition(Idle, Walk, |ctx| ctx.input.mov.x != 0.0);
    machine.add_transition(Idle, Air, |ctx| !ctx.is_grounded());

    // Walk
    machine.add_transition(Walk, Idle, |ctx| ctx.input.mov.x == 0.0);
    machine.add_transition(Walk, Air, |ctx| !ctx.is_grounded());
    machine.add_transition(Walk, Run, |ctx| {
        ctx.input.holding_run && ctx.input.mov.x != 0.0
    });

    // Run
    machine.add_transition(Run, Walk, |ctx| {
        !ctx.input.holding_run || ctx.input.mov.x == 0.0
    });
    machine.add_transition(Run, Air, |ctx| !ctx.is_grounded());

    // Air
    machine.add_transition(Air, Idle, |ctx| ctx.is_grounded() && ctx.input.mov.x == 0.0);
    machine.add_transition(Air, Walk, |ctx| ctx.is_grounded() && ctx.input.mov.x != 0.0);

    // Water
    machine.add_transition(Water, Air, |ctx| !ctx.is_on_water() && !ctx.is_grounded());

    // Hurt and Death have no outgoing edges: damage handling forces Hurt in,
    // and only the globals below ever pull either of them anywhere.

    machine.add_any_transition(Water, |ctx| ctx.is_on_water());
    machine.add_any_transition(Death, |ctx| ctx.health.is_dead());
}
