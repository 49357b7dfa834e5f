// Game layer: the player entity and the collaborators its states drive
//
// - `animation`: clip playback with named frame events
// - `commands`: spawn requests the core emits and the embedding drains
// - `player`: the state graph, context, tuning data, and entity
// - `presentation`: sprite/model flip and color sink

pub mod animation;
pub mod commands;
pub mod player;
pub mod presentation;

// Re-export commonly used types
pub use animation::{AnimationClip, AnimationPlayer};
pub use commands::WorldCommand;
pub use player::{Player, PlayerData, PlayerStateId, Team};
pub use presentation::Presentation;
