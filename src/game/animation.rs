// Sprite animation playback

use std::collections::HashMap;

/// A named event attached to a clip frame
#[derive(Debug, Clone)]
struct FrameEvent {
    frame: usize,
    name: String,
}

/// A single animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Name of the animation (e.g., "idle", "walk", "air")
    pub name: String,
    /// Number of frames in the animation
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    /// Whether the animation loops
    pub looping: bool,
    events: Vec<FrameEvent>,
}

impl AnimationClip {
    pub fn new(name: &str, frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            name: name.to_string(),
            frame_count,
            frame_duration: 1.0 / fps,
            looping,
            events: Vec::new(),
        }
    }

    /// Create a looping animation
    pub fn looping(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, true)
    }

    /// Create a one-shot animation (plays once, holds the last frame)
    pub fn one_shot(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, false)
    }

    /// Attach a named event that fires whenever playback enters `frame`.
    pub fn with_event(mut self, frame: usize, name: &str) -> Self {
        self.events.push(FrameEvent {
            frame: frame.min(self.frame_count.saturating_sub(1)),
            name: name.to_string(),
        });
        self
    }

    fn events_at(&self, frame: usize) -> impl Iterator<Item = &str> {
        self.events
            .iter()
            .filter(move |event| event.frame == frame)
            .map(|event| event.name.as_str())
    }
}

/// Drives clip playback for one character and collects fired frame events.
///
/// Events are queued as frames are entered; the owner drains them with
/// `take_events` once per frame and reacts.
#[derive(Debug)]
pub struct AnimationPlayer {
    animations: HashMap<String, AnimationClip>,
    current_animation: String,
    current_frame: usize,
    frame_timer: f32,
    playing: bool,
    fired_events: Vec<String>,
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            animations: HashMap::new(),
            current_animation: String::new(),
            current_frame: 0,
            frame_timer: 0.0,
            playing: true,
            fired_events: Vec::new(),
        }
    }

    /// Add an animation clip
    pub fn add_animation(&mut self, clip: AnimationClip) {
        self.animations.insert(clip.name.clone(), clip);
    }

    /// Play an animation by name. Re-playing the current clip is a no-op so
    /// states can call this every tick without restarting the cycle.
    pub fn play(&mut self, name: &str) {
        if self.current_animation != name {
            self.current_animation = name.to_string();
            self.current_frame = 0;
            self.frame_timer = 0.0;
            self.playing = true;
            self.fire_events_for_frame(0);
        }
    }

    /// Advance playback. Call once per frame tick.
    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }

        let Some(clip) = self.animations.get(&self.current_animation) else {
            return;
        };

        self.frame_timer += dt;
        let mut entered = Vec::new();
        let mut frame = self.current_frame;
        let mut playing = self.playing;
        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            frame += 1;

            if frame >= clip.frame_count {
                if clip.looping {
                    frame = 0;
                } else {
                    // Hold the last frame
                    frame = clip.frame_count - 1;
                    playing = false;
                    break;
                }
            }
            entered.push(frame);
        }

        self.current_frame = frame;
        self.playing = playing;
        for frame in entered {
            self.fire_events_for_frame(frame);
        }
    }

    /// Drain every event fired since the last call.
    pub fn take_events(&mut self) -> Vec<String> {
        std::mem::take(&mut self.fired_events)
    }

    /// Get the current animation name
    pub fn current_animation(&self) -> &str {
        &self.current_animation
    }

    /// Get the current frame index
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Check if the animation is playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    fn fire_events_for_frame(&mut self, frame: usize) {
        if let Some(clip) = self.animations.get(&self.current_animation) {
            let fired: Vec<String> = clip.events_at(frame).map(str::to_string).collect();
            self.fired_events.extend(fired);
        }
    }
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_with(clip: AnimationClip) -> AnimationPlayer {
        let mut player = AnimationPlayer::new();
        player.add_animation(clip);
        player
    }

    #[test]
    fn test_play_switches_and_resets() {
        let mut player = player_with(AnimationClip::looping("idle", 4, 10.0));
        player.add_animation(AnimationClip::looping("walk", 8, 12.0));
        player.play("idle");
        player.update(0.15);
        assert_eq!(player.current_frame(), 1);

        player.play("walk");
        assert_eq!(player.current_animation(), "walk");
        assert_eq!(player.current_frame(), 0);
    }

    #[test]
    fn test_replaying_current_clip_does_not_restart() {
        let mut player = player_with(AnimationClip::looping("idle", 4, 10.0));
        player.play("idle");
        player.update(0.15);
        player.play("idle");
        assert_eq!(player.current_frame(), 1);
    }

    #[test]
    fn test_looping_wraps_to_start() {
        let mut player = player_with(AnimationClip::looping("idle", 3, 10.0));
        player.play("idle");
        player.update(0.35); // 3.5 frames
        assert_eq!(player.current_frame(), 0);
        assert!(player.is_playing());
    }

    #[test]
    fn test_one_shot_holds_last_frame() {
        let mut player = player_with(AnimationClip::one_shot("death", 3, 10.0));
        player.play("death");
        player.update(0.5);
        assert_eq!(player.current_frame(), 2);
        assert!(!player.is_playing());
    }

    #[test]
    fn test_frame_events_fire_on_entry() {
        let clip = AnimationClip::looping("walk", 4, 10.0).with_event(2, "footstep");
        let mut player = player_with(clip);
        player.play("walk");
        assert!(player.take_events().is_empty());

        player.update(0.25); // frames 1 and 2 entered
        assert_eq!(player.take_events(), vec!["footstep"]);
        assert!(player.take_events().is_empty(), "drain empties the queue");
    }

    #[test]
    fn test_frame_zero_event_fires_on_play() {
        let clip = AnimationClip::one_shot("hurt", 4, 12.0).with_event(0, "hurt_flash");
        let mut player = player_with(clip);
        player.play("hurt");
        assert_eq!(player.take_events(), vec!["hurt_flash"]);
    }

    #[test]
    fn test_events_refire_every_loop() {
        let clip = AnimationClip::looping("walk", 2, 10.0).with_event(1, "footstep");
        let mut player = player_with(clip);
        player.play("walk");
        player.update(0.6); // three full cycles
        assert_eq!(player.take_events().len(), 3);
    }
}
