// Generic finite-state machine
//
// The machine interprets a directed graph of states with guarded edges. Two
// kinds of edges exist: local transitions (tied to a source state) and "any"
// transitions (implicit wildcard source). Every frame tick evaluates the any
// list first, then the current state's local list, takes at most one edge,
// and always runs the active state's per-frame logic afterwards.
//
// States are registered under an identity key `K` (the player uses a plain
// enum), which is also how callers ask "is the water super state active"
// without inspecting the state object itself. All mutable entity data lives
// in the context `C` that every callback receives.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A behavior unit active at any one time.
///
/// All callbacks default to no-ops so states only spell out what they use.
/// `on_enter`/`on_exit` run exactly once per switch; the machine never calls
/// either twice in a row for the same state. States must not switch the
/// machine themselves; switching is the machine's job, driven by guards.
pub trait State<C> {
    /// Called once when the machine switches into this state.
    fn on_enter(&mut self, _ctx: &mut C) {}

    /// Called once when the machine switches away from this state, strictly
    /// before `on_enter` of the next state.
    fn on_exit(&mut self, _ctx: &mut C) {}

    /// Per-frame logic. Runs after transition evaluation on every frame this
    /// state is active.
    fn tick(&mut self, _ctx: &mut C) {}

    /// Per-physics-step logic. The fixed clock never evaluates transitions.
    fn fixed_tick(&mut self, _ctx: &mut C) {}
}

/// Guards are built once when the graph is wired and re-evaluated fresh on
/// every query. No result is ever cached.
type Guard<C> = Box<dyn Fn(&C) -> bool>;

struct Transition<K, C> {
    to: K,
    guard: Guard<C>,
}

/// State machine owning the states, the transition table, and the current
/// state key.
///
/// Priority rules, all decided by registration order:
/// - any transitions outrank every local transition,
/// - within either list, earlier-registered wins,
/// - at most one edge is taken per `tick` call.
pub struct StateMachine<K, C> {
    states: HashMap<K, Box<dyn State<C>>>,
    transitions: HashMap<K, Vec<Transition<K, C>>>,
    any_transitions: Vec<Transition<K, C>>,
    current: Option<K>,
}

impl<K, C> StateMachine<K, C>
where
    K: Copy + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            transitions: HashMap::new(),
            any_transitions: Vec::new(),
            current: None,
        }
    }

    /// Register a state under its identity key.
    pub fn add_state(&mut self, key: K, state: impl State<C> + 'static) {
        self.states.insert(key, Box::new(state));
    }

    /// Register a local transition. Repeated calls with the same `from`
    /// append, so the call order is the priority order.
    pub fn add_transition(&mut self, from: K, to: K, guard: impl Fn(&C) -> bool + 'static) {
        self.transitions.entry(from).or_default().push(Transition {
            to,
            guard: Box::new(guard),
        });
    }

    /// Register an any transition, evaluated before all local transitions of
    /// whatever state is current.
    pub fn add_any_transition(&mut self, to: K, guard: impl Fn(&C) -> bool + 'static) {
        self.any_transitions.push(Transition {
            to,
            guard: Box::new(guard),
        });
    }

    /// The current state key. `None` only before the initial `set_state`.
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Force a switch, bypassing guard evaluation. Used once at startup and
    /// for scripted overrides (damage forcing the hurt state). Switching to
    /// the state that is already current is a no-op.
    pub fn set_state(&mut self, to: K, ctx: &mut C) {
        self.switch_to(to, ctx);
    }

    /// Frame tick: take at most one transition, then run the active state's
    /// `tick`.
    pub fn tick(&mut self, ctx: &mut C) {
        if let Some(to) = self.requested_transition(ctx) {
            self.switch_to(to, ctx);
        }

        let Some(current) = self.current else {
            return;
        };
        if let Some(state) = self.states.get_mut(&current) {
            state.tick(ctx);
        }
    }

    /// Physics tick: runs the active state's `fixed_tick` only. Transition
    /// evaluation belongs to the frame clock alone; that asymmetry is part of
    /// the contract.
    pub fn fixed_tick(&mut self, ctx: &mut C) {
        let Some(current) = self.current else {
            return;
        };
        if let Some(state) = self.states.get_mut(&current) {
            state.fixed_tick(ctx);
        }
    }

    /// First matching edge: any transitions in order, then the current
    /// state's locals in order. A state with no local list is a valid dead
    /// end, not an error.
    fn requested_transition(&self, ctx: &C) -> Option<K> {
        for transition in &self.any_transitions {
            if (transition.guard)(ctx) {
                return Some(transition.to);
            }
        }

        let from = self.current?;
        for transition in self.transitions.get(&from).map(Vec::as_slice).unwrap_or(&[]) {
            if (transition.guard)(ctx) {
                return Some(transition.to);
            }
        }
        None
    }

    fn switch_to(&mut self, to: K, ctx: &mut C) {
        if self.current == Some(to) {
            return;
        }
        if !self.states.contains_key(&to) {
            log::warn!("ignoring switch to unregistered state {:?}", to);
            return;
        }

        if let Some(from) = self.current {
            if let Some(state) = self.states.get_mut(&from) {
                state.on_exit(ctx);
            }
            log::debug!("state {:?} -> {:?}", from, to);
        } else {
            log::debug!("initial state {:?}", to);
        }

        self.current = Some(to);
        if let Some(state) = self.states.get_mut(&to) {
            state.on_enter(ctx);
        }
    }
}

impl<K, C> Default for StateMachine<K, C>
where
    K: Copy + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
