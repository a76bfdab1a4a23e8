//! Cursor hover interaction over the 3D scene.
//!
//! Every frame a ray is cast from the cursor through the camera and tested
//! against the oriented bounding box of each hoverable group (villa, solar
//! panels, equipment). Overlapping regions resolve deterministically rather
//! than by event order: the highest tier wins, then the nearest positive hit,
//! with ties kept on the previously hovered group to avoid flicker at shared
//! faces. The equipment and panels outrank the villa backdrop so they stay
//! reachable inside its bounding volume.

/// Hover target resolution and the `HoverTarget` resource.
pub mod hover;

/// Visual hover feedback: scale, spin, indicator brightening, panel glow.
pub mod feedback;

/// Ray intersection against oriented bounding boxes.
pub mod ray;
