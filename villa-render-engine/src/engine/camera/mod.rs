/// Orbit camera resource and controller for the villa viewer.
///
/// Left-drag orbits around the fixed focus point, scroll zooms; no panning.
pub mod orbit_camera;
