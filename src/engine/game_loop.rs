/// Frame timing for the two-clock update contract
///
/// The simulation runs on two serialized clocks: a variable-rate frame clock
/// (transition evaluation, input consumption, animation) and a fixed-rate
/// physics clock (velocity writes, integration). `FrameClock` accumulates
/// real frame time and hands back how many fixed steps to run, capped to
/// avoid the spiral of death after a long stall.
use std::time::{Duration, Instant};

/// Fixed physics/update rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of fixed steps per frame
const MAX_FIXED_STEPS: u32 = 5;

/// The per-frame view of both clocks, read by states that need elapsed time.
#[derive(Debug, Clone, Copy)]
pub struct FrameTime {
    /// Seconds since the previous frame tick.
    pub delta: f32,
    /// Seconds per fixed step, constant.
    pub fixed_delta: f32,
}

impl Default for FrameTime {
    fn default() -> Self {
        Self {
            delta: 0.0,
            fixed_delta: FIXED_TIMESTEP,
        }
    }
}

/// Accumulator-based frame clock.
pub struct FrameClock {
    accumulator: Duration,
    last_frame: Instant,
    start: Instant,
    frame_count: u64,
    update_count: u64,
    frame_delta: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            accumulator: Duration::ZERO,
            last_frame: now,
            start: now,
            frame_count: 0,
            update_count: 0,
            frame_delta: 0.0,
        }
    }

    /// Begin a new frame, returning the number of fixed steps to run.
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_count += 1;
        self.frame_delta = frame_time.as_secs_f32();

        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && steps < MAX_FIXED_STEPS {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            steps += 1;
        }

        self.update_count += u64::from(steps);
        steps
    }

    /// Seconds since the previous frame, for the frame-clock tick.
    pub fn frame_delta(&self) -> f32 {
        self.frame_delta
    }

    /// Total elapsed wall time in seconds.
    pub fn elapsed_secs(&self) -> f32 {
        Instant::now().duration_since(self.start).as_secs_f32()
    }

    /// Total frames begun.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Total fixed steps executed.
    pub fn update_count(&self) -> u64 {
        self.update_count
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clock_creation() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame_count(), 0);
        assert_eq!(clock.update_count(), 0);
    }

    #[test]
    fn test_frame_counting() {
        let mut clock = FrameClock::new();
        clock.begin_frame();
        clock.begin_frame();
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_fixed_steps_accumulate() {
        let mut clock = FrameClock::new();
        thread::sleep(FIXED_TIMESTEP_DURATION * 2);
        let steps = clock.begin_frame();
        assert!(steps >= 1);
        assert_eq!(clock.update_count(), u64::from(steps));
    }

    #[test]
    fn test_fixed_steps_are_capped() {
        let mut clock = FrameClock::new();
        // A 300ms stall would allow 18 steps uncapped.
        thread::sleep(Duration::from_millis(300));
        let steps = clock.begin_frame();
        assert!(steps <= MAX_FIXED_STEPS);
    }

    #[test]
    fn test_elapsed_time_advances() {
        let clock = FrameClock::new();
        thread::sleep(Duration::from_millis(10));
        assert!(clock.elapsed_secs() >= 0.01);
    }

    #[test]
    fn test_frame_time_defaults() {
        let time = FrameTime::default();
        assert_eq!(time.delta, 0.0);
        assert_eq!(time.fixed_delta, FIXED_TIMESTEP);
    }
}
