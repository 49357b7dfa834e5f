// Physics queries and movement
//
// No rigid-body simulation lives here. The character is a kinematic body;
// the world is static geometry sorted into collision layers, queried with
// circle-overlap probes (parry2d does the geometry).

pub mod body;
pub mod layers;
pub mod level;
pub mod probe;

pub use body::KinematicBody;
pub use layers::CollisionLayer;
pub use level::LevelGeometry;
pub use probe::SurfaceProbe;
