// The player's states

use crate::core::math;
use crate::engine::fsm::State;
use crate::game::player::context::PlayerContext;

/// State identities. Doubles as the machine key and as the tag for
/// super-state checks (damage handling asks "is the current state Water"
/// by comparing these).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerStateId {
    Idle,
    Walk,
    Run,
    Air,
    Hurt,
    Water,
    Death,
}

/// Standing still on ground.
pub struct IdleState;

impl State<PlayerContext> for IdleState {
    fn on_enter(&mut self, ctx: &mut PlayerContext) {
        ctx.anim.play("idle");
    }

    fn tick(&mut self, ctx: &mut PlayerContext) {
        ctx.shoot_check();
        ctx.jump_check();
        ctx.flip_based_on_input(true);
    }

    fn fixed_tick(&mut self, ctx: &mut PlayerContext) {
        ctx.body.set_velocity_x(0.0);
    }
}

/// Moving on ground at base speed.
pub struct WalkState;

impl State<PlayerContext> for WalkState {
    fn on_enter(&mut self, ctx: &mut PlayerContext) {
        ctx.anim.play("walk");
    }

    fn tick(&mut self, ctx: &mut PlayerContext) {
        ctx.shoot_check();
        ctx.jump_check();
        ctx.flip_based_on_input(true);
    }

    fn fixed_tick(&mut self, ctx: &mut PlayerContext) {
        ctx.body.set_velocity_x(ctx.input.mov.x * ctx.data.walk_speed);
    }
}

/// Moving on ground with the run modifier held.
pub struct RunState;

impl State<PlayerContext> for RunState {
    fn on_enter(&mut self, ctx: &mut PlayerContext) {
        ctx.anim.play("run");
    }

    fn tick(&mut self, ctx: &mut PlayerContext) {
        ctx.shoot_check();
        ctx.jump_check();
        ctx.flip_based_on_input(true);
    }

    fn fixed_tick(&mut self, ctx: &mut PlayerContext) {
        ctx.body
            .set_velocity_x(ctx.input.mov.x * ctx.data.walk_speed * ctx.data.run_multiplier);
    }
}

/// Airborne, rising or falling. Entering resets the water timers.
pub struct AirState;

impl State<PlayerContext> for AirState {
    fn on_enter(&mut self, ctx: &mut PlayerContext) {
        ctx.anim.play("air");
        ctx.in_water_time = 0.0;
        ctx.drowning_time = 0.0;
    }

    fn tick(&mut self, ctx: &mut PlayerContext) {
        ctx.jump_check();
        ctx.shoot_check();
        ctx.flip_based_on_input(false);
    }

    fn fixed_tick(&mut self, ctx: &mut PlayerContext) {
        let speed = if ctx.input.holding_run {
            ctx.data.air_speed * ctx.data.run_multiplier
        } else {
            ctx.data.air_speed
        };
        ctx.body.set_velocity_x(ctx.input.mov.x * speed);
    }
}

/// Hit stun. Entered only by force from damage handling; no transitions lead
/// out, so the state holds until a global fires or another forced switch.
pub struct HurtState;

impl State<PlayerContext> for HurtState {
    fn on_enter(&mut self, ctx: &mut PlayerContext) {
        ctx.anim.play("hurt");
    }

    fn fixed_tick(&mut self, ctx: &mut PlayerContext) {
        ctx.body.set_velocity_x(0.0);
    }
}

/// The water super state, reachable from anywhere via its global transition.
///
/// Gravity is off while swimming; the body eases toward a slow sink instead.
/// Past the breath window, each full drown interval deals drown damage.
pub struct WaterState;

impl State<PlayerContext> for WaterState {
    fn on_enter(&mut self, ctx: &mut PlayerContext) {
        ctx.anim.play("swim");
        ctx.body.set_gravity_scale(0.0);
    }

    fn on_exit(&mut self, ctx: &mut PlayerContext) {
        ctx.body.set_gravity_scale(1.0);
    }

    fn tick(&mut self, ctx: &mut PlayerContext) {
        ctx.jump_check();
        ctx.flip_based_on_input(true);

        let dt = ctx.time.delta;
        ctx.in_water_time += dt;
        if ctx.in_water_time >= ctx.data.breath_time {
            ctx.drowning_time += dt;
            if ctx.drowning_time >= ctx.data.drown_interval {
                ctx.drowning_time = 0.0;
                ctx.health.take_damage(ctx.data.drown_damage);
                log::debug!("drowning, health at {}", ctx.health.current());
            }
        }
    }

    fn fixed_tick(&mut self, ctx: &mut PlayerContext) {
        ctx.body.set_velocity_x(
            ctx.input.mov.x * ctx.data.walk_speed * ctx.data.water_speed_multiplier,
        );
        let eased = math::lerp(
            ctx.body.velocity().y,
            -ctx.data.water_sink_speed,
            ctx.data.water_drag,
        );
        ctx.body.set_velocity_y(eased);
    }
}

/// Dead. The body freezes; nothing leads out.
pub struct DeathState;

impl State<PlayerContext> for DeathState {
    fn on_enter(&mut self, ctx: &mut PlayerContext) {
        ctx.anim.play("death");
        ctx.body.set_frozen(true);
    }
}
