//! Prism Core - scene model and queries for the Prism ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Eye`, `Ambient`, `Object`, `Material`, `Light`
//! - **Queries**: ray/shape intersection and the scene's closest-hit query
//! - **Scene files**: parsing and loading of the line-based scene format
//!
//! # Example
//!
//! ```ignore
//! use prism_core::scene_file::load_scene;
//!
//! let scene = load_scene("scenes/spheres.txt")?;
//! println!("Loaded {} objects, {} lights",
//!     scene.object_count(),
//!     scene.light_count());
//! ```

pub mod geometry;
pub mod intersection;
pub mod light;
pub mod ray;
pub mod scene;
pub mod scene_file;
pub mod texture;

/// Color type alias (RGB values typically 0-1)
pub type Color = prism_math::Vec3;

// Re-export commonly used types
pub use geometry::{Shape, ShapeKind};
pub use intersection::Intersection;
pub use light::{Light, LightPath};
pub use ray::{ObjectId, Ray};
pub use scene::{Ambient, Eye, Material, Object, ObjectStatus, Scene};
pub use scene_file::{load_scene, load_scene_from_str};
