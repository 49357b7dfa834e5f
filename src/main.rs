use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use glam::Vec2;
use log::info;

mod core;
mod engine;
mod game;

use crate::engine::game_loop::{FrameClock, FIXED_TIMESTEP};
use crate::engine::input::Action;
use crate::engine::physics::{CollisionLayer, LevelGeometry, SurfaceProbe};
use crate::game::{Player, PlayerData, Team, WorldCommand};

/// A bullet in flight. Spawned from the player's commands, stepped here.
struct Bullet {
    position: Vec2,
    velocity: Vec2,
    team: Team,
    damage: i32,
}

/// Scripted happenings, keyed to fixed-step indices in `demo_script`.
enum ScriptEvent {
    Press(Action),
    Release(Action),
    Heal(i32),
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Wetfoot sandbox...");

    let demo_seconds = demo_seconds()?;
    let level = Rc::new(build_level());
    let probe: Rc<dyn SurfaceProbe> = level.clone();

    // Red is scripted; Green stands in the line of fire.
    let data = PlayerData::default();
    let mut players = vec![
        Player::new(data.clone(), Team::Red, probe.clone(), Vec2::new(-12.0, 1.0)),
        Player::new(data, Team::Green, probe, Vec2::new(-2.0, 1.0)),
    ];

    let script = demo_script();
    let mut script_cursor = 0;
    let mut bullets: Vec<Bullet> = Vec::new();
    let mut clock = FrameClock::new();
    let mut sim_step: u64 = 0;
    let mut last_states: Vec<_> = players.iter().map(Player::state).collect();

    while clock.elapsed_secs() < demo_seconds {
        let fixed_steps = clock.begin_frame();

        for _ in 0..fixed_steps {
            while script_cursor < script.len() && script[script_cursor].0 <= sim_step {
                apply_event(&mut players[0], &script[script_cursor].1);
                script_cursor += 1;
            }

            for player in &mut players {
                player.fixed_update();
                level.settle(player.body_mut());
            }
            step_bullets(&mut bullets, &mut players, FIXED_TIMESTEP);
            sim_step += 1;
        }

        for player in &mut players {
            player.update(clock.frame_delta());
        }
        for player in &mut players {
            let bullet_damage = player.data().bullet_damage;
            for command in player.drain_commands() {
                match command {
                    WorldCommand::SpawnBullet {
                        origin,
                        velocity,
                        team,
                    } => {
                        info!("{:?} fired a bullet from {:?}", team, origin);
                        bullets.push(Bullet {
                            position: origin,
                            velocity,
                            team,
                            damage: bullet_damage,
                        });
                    }
                    WorldCommand::SpawnJumpParticles { position } => {
                        info!("jump particles at {:?}", position);
                    }
                }
            }
        }

        for (player, last) in players.iter().zip(last_states.iter_mut()) {
            let state = player.state();
            if state != *last {
                if let Some(state) = state {
                    info!(
                        "{:?} player entered {:?} at {:?}",
                        player.team(),
                        state,
                        player.body().position()
                    );
                }
                *last = state;
            }
        }

        thread::sleep(Duration::from_millis(1));
    }

    info!(
        "Demo finished: {} frames, {} fixed steps",
        clock.frame_count(),
        clock.update_count()
    );
    for player in &players {
        info!(
            "{:?} player ended in {:?} with {} health",
            player.team(),
            player.state(),
            player.health().current()
        );
    }

    Ok(())
}

fn demo_seconds() -> Result<f32> {
    match std::env::var("WETFOOT_DEMO_SECONDS") {
        Ok(raw) => raw
            .parse()
            .context("WETFOOT_DEMO_SECONDS must be a number of seconds"),
        Err(_) => Ok(18.0),
    }
}

/// Two banks around a flooded pit. Bank tops sit at y = 0; the pool fills
/// the pit down to the floor at y = -2. The pit floor extends a little past
/// the pool so a swimmer drifting under the right bank still has footing.
fn build_level() -> LevelGeometry {
    let mut level = LevelGeometry::new();
    level.add_slab(
        CollisionLayer::Ground,
        Vec2::new(-8.0, -0.5),
        Vec2::new(8.0, 0.5),
    );
    level.add_slab(
        CollisionLayer::Ground,
        Vec2::new(12.0, -0.5),
        Vec2::new(4.0, 0.5),
    );
    level.add_slab(
        CollisionLayer::Ground,
        Vec2::new(4.5, -2.5),
        Vec2::new(4.5, 0.5),
    );
    level.add_slab(
        CollisionLayer::Water,
        Vec2::new(4.0, -1.0),
        Vec2::new(4.0, 1.0),
    );
    level
}

/// The scripted run: walk up, gun down the green target, sprint and jump
/// into the pool, drown a little, then hop out the far side and grab a
/// pickup. Step indices are fixed-clock steps (60 per second).
fn demo_script() -> Vec<(u64, ScriptEvent)> {
    use Action::*;
    use ScriptEvent::*;

    vec![
        (30, Press(MoveRight)),
        (60, Release(MoveRight)),
        (90, Press(Shoot)),
        (93, Release(Shoot)),
        (130, Press(Shoot)),
        (133, Release(Shoot)),
        (170, Press(Shoot)),
        (173, Release(Shoot)),
        (210, Press(Shoot)),
        (213, Release(Shoot)),
        (250, Press(MoveRight)),
        (255, Press(Run)),
        (280, Press(Jump)),
        (283, Release(Jump)),
        (300, Press(Jump)), // double jump
        (303, Release(Jump)),
        (335, Press(Jump)), // buffers, fires on landing
        (338, Release(Jump)),
        (380, Release(Run)),
        (400, Release(MoveRight)),
        // Sink and drown for a couple of ticks...
        (780, Press(MoveRight)),
        (790, Press(Jump)),
        (793, Release(Jump)),
        (830, Press(Jump)),
        (833, Release(Jump)),
        (870, Press(Jump)),
        (873, Release(Jump)),
        (910, Press(Jump)),
        (913, Release(Jump)),
        (950, Heal(15)),
        (1000, Release(MoveRight)),
        // Wander back toward the pool's edge.
        (1010, Press(MoveLeft)),
        (1050, Release(MoveLeft)),
    ]
}

fn apply_event(player: &mut Player, event: &ScriptEvent) {
    match event {
        ScriptEvent::Press(action) => player.input_mut().press(*action),
        ScriptEvent::Release(action) => player.input_mut().release(*action),
        ScriptEvent::Heal(amount) => {
            info!("picked up a heal");
            player.heal(*amount);
        }
    }
}

/// Advance bullets and resolve hits. A bullet connects with the first
/// opposing player whose body it overlaps, then disappears.
fn step_bullets(bullets: &mut Vec<Bullet>, players: &mut [Player], dt: f32) {
    for bullet in bullets.iter_mut() {
        bullet.position += bullet.velocity * dt;
    }

    bullets.retain(|bullet| {
        if bullet.position.x.abs() > 40.0 {
            return false;
        }
        for player in players.iter_mut() {
            if player.team() == bullet.team {
                continue;
            }
            let delta = (bullet.position - player.body().position()).abs();
            let half = player.body().half_extents();
            if delta.x <= half.x && delta.y <= half.y {
                player.hit_by_bullet(bullet.team, bullet.damage);
                info!(
                    "bullet hit the {:?} player, health now {}",
                    player.team(),
                    player.health().current()
                );
                return false;
            }
        }
        true
    });
}
